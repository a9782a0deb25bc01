//! TSP search strategies.

pub mod brute_force;
pub mod greedy;

pub use brute_force::BruteForceSolver;
pub use greedy::{GreedySolver, MultiStartGreedySolver};

use crate::instance::TspInstance;
use crate::progress::ProgressObserver;
use crate::solution::Solution;

/// Common interface for all tour search strategies.
///
/// Every solver returns a tour that is a permutation of all city indices by
/// construction; incremental progress flows through the observer.
pub trait TspSolver {
    fn solve(&self, instance: &TspInstance, observer: &mut dyn ProgressObserver) -> Solution;
    fn name(&self) -> &str;
}
