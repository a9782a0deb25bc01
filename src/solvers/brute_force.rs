//! Exhaustive enumeration solver.
//!
//! Guarantees the optimal tour by scoring every candidate. City 0 is fixed
//! as the start, which removes rotational duplicates and leaves `(n-1)!`
//! permutations of the remaining indices.

use itertools::Itertools;
use std::time::Instant;

use crate::instance::TspInstance;
use crate::progress::ProgressObserver;
use crate::solution::Solution;
use crate::solvers::TspSolver;

/// Exact brute-force solver.
///
/// Enumerates the `(n-1)!` tours starting at city 0 in lexicographic order
/// of the remaining indices and keeps the best. Fires
/// [`ProgressObserver::on_improved`] on every strict improvement; ties
/// between equal-length tours go to the first one enumerated.
///
/// There is no internal size guard: `(n-1)!` grows fast, and keeping `n`
/// small enough to finish is the caller's responsibility. Around a dozen
/// cities is the practical ceiling.
pub struct BruteForceSolver;

impl BruteForceSolver {
    pub fn new() -> Self {
        BruteForceSolver
    }
}

impl Default for BruteForceSolver {
    fn default() -> Self {
        Self::new()
    }
}

impl TspSolver for BruteForceSolver {
    fn solve(&self, instance: &TspInstance, observer: &mut dyn ProgressObserver) -> Solution {
        let start = Instant::now();
        let n = instance.len();

        // Trivial tours have no permutations to enumerate and no
        // improvement to report.
        if n <= 1 {
            let tour: Vec<usize> = (0..n).collect();
            let mut solution = Solution::from_tour(instance, tour, self.name());
            solution.computation_time = start.elapsed().as_secs_f64();
            return solution;
        }

        let mut best_tour: Vec<usize> = Vec::new();
        let mut best_dist = f64::INFINITY;
        let mut candidate: Vec<usize> = Vec::with_capacity(n);

        for rest in (1..n).permutations(n - 1) {
            candidate.clear();
            candidate.push(0); // we always start at city 0
            candidate.extend_from_slice(&rest);

            let dist = instance.tour_length(&candidate);
            if dist < best_dist {
                best_dist = dist;
                best_tour = candidate.clone();
                observer.on_improved(&best_tour);
            }
        }

        let mut solution = Solution::from_tour(instance, best_tour, self.name());
        solution.computation_time = start.elapsed().as_secs_f64();
        solution
    }

    fn name(&self) -> &str {
        "BruteForce"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::instance::City;
    use crate::progress::NoProgress;
    use crate::solution::score_tour;

    fn square_instance() -> TspInstance {
        TspInstance::new(
            "square",
            vec![
                City::new(0.0, 0.0),
                City::new(1.0, 0.0),
                City::new(1.0, 1.0),
                City::new(0.0, 1.0),
            ],
        )
    }

    /// Records every reported tour for later inspection.
    #[derive(Default)]
    struct Recorder {
        improved: Vec<Vec<usize>>,
    }

    impl ProgressObserver for Recorder {
        fn on_improved(&mut self, tour: &[usize]) {
            self.improved.push(tour.to_vec());
        }
    }

    #[test]
    fn test_finds_square_perimeter() {
        let instance = square_instance();
        let solution = BruteForceSolver::new().solve(&instance, &mut NoProgress);

        assert!((solution.cost - 4.0).abs() < 1e-10);
        assert!(solution.is_complete(&instance));
        assert_eq!(solution.tour[0], 0);
    }

    #[test]
    fn test_no_permutation_scores_lower() {
        let instance = square_instance();
        let best = BruteForceSolver::new().solve(&instance, &mut NoProgress);

        for perm in (0..4).permutations(4) {
            let score = score_tour(&instance, &perm).unwrap();
            assert!(score >= best.cost - 1e-10);
        }
    }

    #[test]
    fn test_improvements_are_monotonic() {
        let instance = square_instance();
        let mut recorder = Recorder::default();
        let solution = BruteForceSolver::new().solve(&instance, &mut recorder);

        assert!(!recorder.improved.is_empty());

        let mut prev = f64::INFINITY;
        for tour in &recorder.improved {
            let score = score_tour(&instance, tour).unwrap();
            assert!(score < prev);
            prev = score;
        }

        // The last reported improvement is the returned solution.
        assert!((prev - solution.cost).abs() < 1e-10);
    }

    #[test]
    fn test_empty_instance() {
        let instance = TspInstance::new("empty", vec![]);
        let mut recorder = Recorder::default();
        let solution = BruteForceSolver::new().solve(&instance, &mut recorder);

        assert!(solution.tour.is_empty());
        assert_eq!(solution.cost, 0.0);
        assert!(recorder.improved.is_empty());
    }

    #[test]
    fn test_single_city() {
        let instance = TspInstance::new("single", vec![City::new(5.0, 5.0)]);
        let solution = BruteForceSolver::new().solve(&instance, &mut NoProgress);

        assert_eq!(solution.tour, vec![0]);
        assert_eq!(solution.cost, 0.0);
    }

    #[test]
    fn test_two_cities() {
        let instance =
            TspInstance::new("pair", vec![City::new(0.0, 0.0), City::new(3.0, 0.0)]);
        let solution = BruteForceSolver::new().solve(&instance, &mut NoProgress);

        assert_eq!(solution.tour, vec![0, 1]);
        assert!((solution.cost - 6.0).abs() < 1e-10);
    }
}
