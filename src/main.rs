//! TSP Explorer - Command Line Interface
//!
//! Solve, generate, and inspect small Euclidean TSP instances.

use clap::{Parser, Subcommand, ValueEnum};
use indicatif::{ProgressBar, ProgressStyle};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use tsp_explorer::generate::{make_preset, Preset};
use tsp_explorer::instance::TspInstance;
use tsp_explorer::progress::{LogProgress, ProgressObserver};
use tsp_explorer::solution::score_tour;
use tsp_explorer::solvers::{BruteForceSolver, GreedySolver, MultiStartGreedySolver, TspSolver};

use std::fs::File;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "tsp-explorer")]
#[command(version = "0.1")]
#[command(about = "Exact and nearest-neighbor solvers for the Euclidean TSP")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Solve an instance loaded from a CSV coordinate file
    Solve {
        /// Path to the instance CSV (headerless x,y rows)
        #[arg(short, long)]
        instance: PathBuf,

        /// Algorithm to use
        #[arg(short, long, value_enum, default_value = "multi-start")]
        algorithm: Algorithm,

        /// Start city for the greedy algorithm
        #[arg(short, long, default_value = "0")]
        start: usize,

        /// Write the solution as JSON
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Print instance statistics before solving
        #[arg(short, long)]
        verbose: bool,
    },

    /// Generate a synthetic dataset and write it as CSV
    Generate {
        /// Dataset preset
        #[arg(short, long, value_enum, default_value = "tiny")]
        preset: PresetArg,

        /// Random seed
        #[arg(short, long, default_value = "123")]
        seed: u64,

        /// Output CSV path
        #[arg(short, long)]
        output: PathBuf,
    },

    /// Print statistics about an instance
    Analyze {
        /// Path to the instance CSV
        #[arg(short, long)]
        instance: PathBuf,
    },
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum, Debug)]
enum Algorithm {
    /// Exhaustive brute force (optimal, (n-1)! candidates)
    Bf,
    /// Greedy nearest neighbor from a fixed start city
    Greedy,
    /// Greedy nearest neighbor from every start city
    MultiStart,
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum, Debug)]
enum PresetArg {
    Tiny,
    Small,
    Medium,
    Large,
}

impl From<PresetArg> for Preset {
    fn from(arg: PresetArg) -> Self {
        match arg {
            PresetArg::Tiny => Preset::Tiny,
            PresetArg::Small => Preset::Small,
            PresetArg::Medium => Preset::Medium,
            PresetArg::Large => Preset::Large,
        }
    }
}

/// Observer that drives an indicatif bar across multi-start candidates.
struct CandidateBar {
    bar: ProgressBar,
    best: f64,
}

impl CandidateBar {
    fn new(num_starts: usize) -> Self {
        let bar = ProgressBar::new(num_starts as u64);
        bar.set_style(
            ProgressStyle::with_template("{bar:40} {pos}/{len} starts, best {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_bar()),
        );
        CandidateBar {
            bar,
            best: f64::INFINITY,
        }
    }

    fn finish(&self) {
        self.bar.finish();
    }
}

impl ProgressObserver for CandidateBar {
    fn on_candidate(&mut self, _tour: &[usize], score: f64) {
        if score < self.best {
            self.best = score;
        }
        self.bar.set_message(format!("{:.4}", self.best));
        self.bar.inc(1);
    }
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Solve {
            instance,
            algorithm,
            start,
            output,
            verbose,
        } => solve_instance(&instance, algorithm, start, output, verbose),

        Commands::Generate {
            preset,
            seed,
            output,
        } => generate_dataset(preset.into(), seed, &output),

        Commands::Analyze { instance } => analyze_instance(&instance),
    }
}

fn load_instance(path: &PathBuf) -> TspInstance {
    match TspInstance::from_csv_path(path) {
        Ok(instance) => instance,
        Err(e) => {
            eprintln!("Error loading instance {}: {}", path.display(), e);
            std::process::exit(1);
        }
    }
}

fn solve_instance(
    path: &PathBuf,
    algorithm: Algorithm,
    start: usize,
    output: Option<PathBuf>,
    verbose: bool,
) {
    let instance = load_instance(path);

    if verbose {
        println!("{}", instance.statistics());
    }

    if algorithm == Algorithm::Greedy && !instance.is_empty() && start >= instance.len() {
        eprintln!(
            "Start city {} is out of range for {} cities",
            start,
            instance.len()
        );
        std::process::exit(1);
    }

    let solution = match algorithm {
        Algorithm::Bf => {
            log::info!(
                "brute force over {} cities; expect (n-1)! candidates",
                instance.len()
            );
            BruteForceSolver::new().solve(&instance, &mut LogProgress)
        }
        Algorithm::Greedy => GreedySolver::from_start(start).solve(&instance, &mut LogProgress),
        Algorithm::MultiStart => {
            let mut bar = CandidateBar::new(instance.len());
            let solution = MultiStartGreedySolver::new().solve(&instance, &mut bar);
            bar.finish();
            solution
        }
    };

    // Re-score through the validating scorer before presenting the result.
    match score_tour(&instance, &solution.tour) {
        Ok(score) => {
            println!("{}", solution);
            println!("Verified score: {:.4}", score);
        }
        Err(e) => {
            eprintln!("Solver returned an invalid tour: {}", e);
            std::process::exit(1);
        }
    }

    if let Some(output_path) = output {
        let result = File::create(&output_path)
            .map_err(|e| e.to_string())
            .and_then(|file| {
                serde_json::to_writer_pretty(file, &solution).map_err(|e| e.to_string())
            });
        match result {
            Ok(()) => println!("Solution written to {}", output_path.display()),
            Err(e) => {
                eprintln!("Error writing solution: {}", e);
                std::process::exit(1);
            }
        }
    }
}

fn generate_dataset(preset: Preset, seed: u64, output: &PathBuf) {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let instance = make_preset(preset, &mut rng);

    match instance.to_csv_path(output) {
        Ok(()) => println!(
            "Wrote {} cities ({}) to {}",
            instance.len(),
            instance.name,
            output.display()
        ),
        Err(e) => {
            eprintln!("Error writing dataset: {}", e);
            std::process::exit(1);
        }
    }
}

fn analyze_instance(path: &PathBuf) {
    let instance = load_instance(path);
    println!("{}", instance.statistics());
}
