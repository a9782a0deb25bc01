//! Nearest-neighbor heuristic and its multi-start driver.

use ordered_float::OrderedFloat;
use std::collections::HashSet;
use std::time::Instant;

use crate::instance::TspInstance;
use crate::progress::ProgressObserver;
use crate::solution::Solution;
use crate::solvers::TspSolver;

/// Greedy nearest-neighbor construction from a fixed start city.
///
/// Repeatedly extends the path with the unvisited city closest to its last
/// city. Equal distances break to the lowest city index: candidates are
/// collected in index order and stably sorted by distance. Deterministic,
/// no optimality guarantee; result quality depends heavily on the start
/// city, which is what [`MultiStartGreedySolver`] exploits.
///
/// `start_index` must be a valid city index for non-empty instances.
pub struct GreedySolver {
    pub start_index: usize,
}

impl GreedySolver {
    pub fn new() -> Self {
        GreedySolver { start_index: 0 }
    }

    pub fn from_start(start_index: usize) -> Self {
        GreedySolver { start_index }
    }

    fn find_nearest(
        &self,
        instance: &TspInstance,
        current: usize,
        visited: &HashSet<usize>,
    ) -> Option<usize> {
        let mut candidates: Vec<(usize, f64)> = (0..instance.len())
            .filter(|i| !visited.contains(i))
            .map(|i| (i, instance.distance(current, i)))
            .collect();

        if candidates.is_empty() {
            return None;
        }

        // Stable sort: among equal distances the lowest index comes first.
        candidates.sort_by_key(|&(_, d)| OrderedFloat(d));
        Some(candidates[0].0)
    }
}

impl Default for GreedySolver {
    fn default() -> Self {
        Self::new()
    }
}

impl TspSolver for GreedySolver {
    fn solve(&self, instance: &TspInstance, observer: &mut dyn ProgressObserver) -> Solution {
        let start = Instant::now();
        let n = instance.len();

        if n == 0 {
            let mut solution = Solution::from_tour(instance, Vec::new(), self.name());
            solution.computation_time = start.elapsed().as_secs_f64();
            return solution;
        }

        let mut tour = vec![self.start_index];
        let mut visited = HashSet::new();
        visited.insert(self.start_index);
        observer.on_step(&tour);

        while tour.len() < n {
            let current = tour[tour.len() - 1];
            match self.find_nearest(instance, current, &visited) {
                Some(next) => {
                    tour.push(next);
                    visited.insert(next);
                    observer.on_step(&tour);
                }
                None => break,
            }
        }

        let mut solution = Solution::from_tour(instance, tour, self.name());
        solution.computation_time = start.elapsed().as_secs_f64();
        solution
    }

    fn name(&self) -> &str {
        "Greedy"
    }
}

/// Runs the greedy solver once per start city and keeps the global best.
///
/// Fires [`ProgressObserver::on_candidate`] after every start, improved or
/// not; exact ties keep the first tour found (lowest start city). O(n)
/// greedy runs of O(n^2) each, so O(n^3) total; fine for the small and
/// medium instances this crate targets.
pub struct MultiStartGreedySolver;

impl MultiStartGreedySolver {
    pub fn new() -> Self {
        MultiStartGreedySolver
    }
}

impl Default for MultiStartGreedySolver {
    fn default() -> Self {
        Self::new()
    }
}

impl TspSolver for MultiStartGreedySolver {
    fn solve(&self, instance: &TspInstance, observer: &mut dyn ProgressObserver) -> Solution {
        let start = Instant::now();
        let n = instance.len();

        let mut best = Solution::from_tour(instance, Vec::new(), self.name());

        for start_index in 0..n {
            let candidate = GreedySolver::from_start(start_index).solve(instance, observer);
            observer.on_candidate(&candidate.tour, candidate.cost);

            if best.tour.is_empty() || candidate.cost < best.cost {
                best = candidate;
            }
        }

        best.algorithm = self.name().to_string();
        best.computation_time = start.elapsed().as_secs_f64();
        best
    }

    fn name(&self) -> &str {
        "MultiStartGreedy"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::instance::City;
    use crate::progress::NoProgress;
    use crate::solution::score_tour;

    fn scattered_instance() -> TspInstance {
        TspInstance::new(
            "scattered",
            vec![
                City::new(0.0, 0.0),
                City::new(4.0, 1.0),
                City::new(1.5, 3.0),
                City::new(5.0, 4.0),
                City::new(2.0, 0.5),
                City::new(0.5, 4.5),
            ],
        )
    }

    /// Records steps and candidates for later inspection.
    #[derive(Default)]
    struct Recorder {
        steps: Vec<Vec<usize>>,
        candidates: Vec<(Vec<usize>, f64)>,
    }

    impl ProgressObserver for Recorder {
        fn on_step(&mut self, partial_tour: &[usize]) {
            self.steps.push(partial_tour.to_vec());
        }

        fn on_candidate(&mut self, tour: &[usize], score: f64) {
            self.candidates.push((tour.to_vec(), score));
        }
    }

    #[test]
    fn test_greedy_returns_permutation() {
        let instance = scattered_instance();

        for start_index in 0..instance.len() {
            let solution =
                GreedySolver::from_start(start_index).solve(&instance, &mut NoProgress);
            assert!(score_tour(&instance, &solution.tour).is_ok());
            assert_eq!(solution.tour[0], start_index);
        }
    }

    #[test]
    fn test_greedy_is_deterministic() {
        let instance = scattered_instance();
        let solver = GreedySolver::from_start(2);

        let first = solver.solve(&instance, &mut NoProgress);
        let second = solver.solve(&instance, &mut NoProgress);
        assert_eq!(first.tour, second.tour);
        assert_eq!(first.cost, second.cost);
    }

    #[test]
    fn test_greedy_ties_break_to_lowest_index() {
        // Cities 1 and 2 are both at distance 1 from city 0.
        let instance = TspInstance::new(
            "tie",
            vec![
                City::new(0.0, 0.0),
                City::new(1.0, 0.0),
                City::new(-1.0, 0.0),
            ],
        );

        let solution = GreedySolver::new().solve(&instance, &mut NoProgress);
        assert_eq!(solution.tour, vec![0, 1, 2]);
    }

    #[test]
    fn test_greedy_steps_include_initial_path() {
        let instance = scattered_instance();
        let mut recorder = Recorder::default();
        GreedySolver::new().solve(&instance, &mut recorder);

        assert_eq!(recorder.steps.len(), instance.len());
        assert_eq!(recorder.steps[0], vec![0]);
        assert_eq!(recorder.steps.last().unwrap().len(), instance.len());
    }

    #[test]
    fn test_greedy_empty_instance() {
        let instance = TspInstance::new("empty", vec![]);
        let mut recorder = Recorder::default();
        let solution = GreedySolver::new().solve(&instance, &mut recorder);

        assert!(solution.tour.is_empty());
        assert_eq!(solution.cost, 0.0);
        assert!(recorder.steps.is_empty());
    }

    #[test]
    fn test_greedy_single_city() {
        let instance = TspInstance::new("single", vec![City::new(1.0, 1.0)]);
        let solution = GreedySolver::new().solve(&instance, &mut NoProgress);

        assert_eq!(solution.tour, vec![0]);
        assert_eq!(solution.cost, 0.0);
    }

    #[test]
    fn test_multistart_dominates_every_fixed_start() {
        let instance = scattered_instance();
        let best = MultiStartGreedySolver::new().solve(&instance, &mut NoProgress);

        assert!(score_tour(&instance, &best.tour).is_ok());

        for start_index in 0..instance.len() {
            let single =
                GreedySolver::from_start(start_index).solve(&instance, &mut NoProgress);
            assert!(best.cost <= single.cost + 1e-10);
        }
    }

    #[test]
    fn test_multistart_reports_every_candidate() {
        let instance = scattered_instance();
        let mut recorder = Recorder::default();
        MultiStartGreedySolver::new().solve(&instance, &mut recorder);

        assert_eq!(recorder.candidates.len(), instance.len());
        for (start_index, (tour, score)) in recorder.candidates.iter().enumerate() {
            assert_eq!(tour[0], start_index);
            assert!((score_tour(&instance, tour).unwrap() - score).abs() < 1e-10);
        }
    }

    #[test]
    fn test_multistart_empty_instance() {
        let instance = TspInstance::new("empty", vec![]);
        let mut recorder = Recorder::default();
        let solution = MultiStartGreedySolver::new().solve(&instance, &mut recorder);

        assert!(solution.tour.is_empty());
        assert_eq!(solution.cost, 0.0);
        assert!(recorder.candidates.is_empty());
    }
}
