//! Solution representation and tour scoring.
//!
//! A tour is a permutation of all city indices, interpreted cyclically: after
//! the last city the salesperson returns to the first. [`score_tour`] is the
//! authoritative, validating scorer used at the crate boundary; solvers whose
//! tours are permutations by construction sum edges through
//! [`TspInstance::tour_length`] directly.

use crate::instance::TspInstance;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Validation errors raised by [`score_tour`].
///
/// Both variants are contract violations, not transient faults: the scorer
/// aborts, no partial distance is returned, and callers should not retry
/// without fixing the tour. Solvers in this crate never produce tours that
/// trigger them; they are expected only for tours arriving from outside.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ScoreError {
    /// Tour length does not match the number of cities.
    #[error("invalid tour: length is {found}, but it should be {expected}")]
    InvalidLength { expected: usize, found: usize },
    /// Tour indices are not an exact permutation of `0..n` (duplicate,
    /// missing, or out-of-range index).
    #[error("invalid tour: the tour does not visit each city exactly once")]
    InvalidPermutation,
}

/// Score a candidate tour: validate it, then return its total cyclic length.
///
/// The length check and the permutation check run before any distance is
/// summed. The permutation check catches duplicates, missing indices, and
/// out-of-range indices in one pass. Pure and re-entrant; safe to call from
/// observer callbacks while a solve is in flight.
pub fn score_tour(instance: &TspInstance, tour: &[usize]) -> Result<f64, ScoreError> {
    let n = instance.len();

    if tour.len() != n {
        return Err(ScoreError::InvalidLength {
            expected: n,
            found: tour.len(),
        });
    }

    let mut seen = vec![false; n];
    for &city in tour {
        if city >= n || seen[city] {
            return Err(ScoreError::InvalidPermutation);
        }
        seen[city] = true;
    }

    Ok(instance.tour_length(tour))
}

/// A solved tour together with its score and provenance.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Solution {
    /// The tour as a sequence of city indices (implicitly cyclic)
    pub tour: Vec<usize>,
    /// Total tour length
    pub cost: f64,
    /// Algorithm that generated this solution
    pub algorithm: String,
    /// Computation time in seconds
    pub computation_time: f64,
}

impl Solution {
    /// Create a new empty solution
    pub fn new() -> Self {
        Solution {
            tour: Vec::new(),
            cost: f64::INFINITY,
            algorithm: String::new(),
            computation_time: 0.0,
        }
    }

    /// Create a solution from a tour, computing its cost without validation;
    /// see [`score_tour`] for the validating path. The tour must be a
    /// permutation of all city indices.
    pub fn from_tour(instance: &TspInstance, tour: Vec<usize>, algorithm: &str) -> Self {
        let cost = instance.tour_length(&tour);
        Solution {
            tour,
            cost,
            algorithm: algorithm.to_string(),
            computation_time: 0.0,
        }
    }

    /// Check that the tour visits every city exactly once.
    pub fn is_complete(&self, instance: &TspInstance) -> bool {
        score_tour(instance, &self.tour).is_ok()
    }
}

impl Default for Solution {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for Solution {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Solution ({})", self.algorithm)?;
        writeln!(f, "  Cost: {:.4}", self.cost)?;
        writeln!(f, "  Time: {:.4}s", self.computation_time)?;
        writeln!(f, "  Tour: {:?}", self.tour)
    }
}
