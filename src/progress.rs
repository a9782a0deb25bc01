//! Progress observation for long-running solves.
//!
//! Solvers report incremental progress through the [`ProgressObserver`]
//! trait instead of knowing anything about presentation. Callbacks are
//! synchronous: the solver blocks until the observer returns. Observers
//! receive borrowed tours and cannot mutate solver state; `&mut self` only
//! lets them accumulate their own (counters, bars, recordings).

/// Observer capability invoked by solvers to report intermediate results.
///
/// All methods default to no-ops so implementations override only the events
/// they care about.
pub trait ProgressObserver {
    /// A strictly better tour was found (brute force only).
    fn on_improved(&mut self, _tour: &[usize]) {}

    /// The greedy path grew by one city; also fired for the initial
    /// single-city path.
    fn on_step(&mut self, _partial_tour: &[usize]) {}

    /// A multi-start run finished one start city, improved or not.
    fn on_candidate(&mut self, _tour: &[usize], _score: f64) {}
}

/// Silent observer for callers that only want the final result.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoProgress;

impl ProgressObserver for NoProgress {}

/// Observer that routes every event through the `log` facade.
///
/// Improvements and candidates log at info, individual greedy steps at debug
/// (one per appended city is too chatty for info).
#[derive(Debug, Default, Clone, Copy)]
pub struct LogProgress;

impl ProgressObserver for LogProgress {
    fn on_improved(&mut self, tour: &[usize]) {
        log::info!("new best tour found: {:?}", tour);
    }

    fn on_step(&mut self, partial_tour: &[usize]) {
        log::debug!(
            "greedy path extended to {} cities: {:?}",
            partial_tour.len(),
            partial_tour
        );
    }

    fn on_candidate(&mut self, tour: &[usize], score: f64) {
        log::info!(
            "multi-start candidate from city {}: score {:.4}",
            tour.first().copied().unwrap_or(0),
            score
        );
    }
}
