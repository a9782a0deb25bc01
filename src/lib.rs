//! TSP Explorer Library
//!
//! Exact and heuristic solvers for the Euclidean Traveling Salesperson
//! Problem on small 2D point sets.
//!
//! # Features
//!
//! - Exhaustive brute-force search (provably optimal, `(n-1)!` candidates)
//! - Greedy nearest-neighbor construction from any start city
//! - Multi-start driver that tries every start city and keeps the best
//! - Validating tour scorer with explicit error types
//! - Progress observers so callers can watch a search without the solvers
//!   knowing anything about presentation
//! - CSV instance loading and seeded synthetic dataset generation
//!
//! # Example
//!
//! ```no_run
//! use tsp_explorer::instance::TspInstance;
//! use tsp_explorer::progress::NoProgress;
//! use tsp_explorer::solvers::{MultiStartGreedySolver, TspSolver};
//!
//! // Load cities from a headerless x,y CSV file
//! let instance = TspInstance::from_csv_path("data/tiny.csv").unwrap();
//!
//! // Run the multi-start greedy heuristic
//! let solution = MultiStartGreedySolver::new().solve(&instance, &mut NoProgress);
//!
//! println!("Tour length: {:.2}", solution.cost);
//! ```

pub mod generate;
pub mod instance;
pub mod progress;
pub mod solution;
pub mod solvers;

pub use instance::{City, TspInstance};
pub use progress::{LogProgress, NoProgress, ProgressObserver};
pub use solution::{score_tour, ScoreError, Solution};
pub use solvers::{BruteForceSolver, GreedySolver, MultiStartGreedySolver, TspSolver};
