//! Simulation observer trait for progress reporting and data collection.

/// Callbacks invoked by [`Sim::run`][crate::Sim::run] at iteration
/// boundaries.
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.
///
/// # Example — progress logger
///
/// ```rust,ignore
/// struct Progress { interval: u64 }
///
/// impl SimObserver for Progress {
///     fn on_iteration_end(&mut self, iteration: u64, collisions: u32) {
///         if iteration % self.interval == 0 {
///             tracing::info!(iteration, collisions, "progress");
///         }
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called before the first agent of an iteration chooses.
    fn on_iteration_start(&mut self, _iteration: u64) {}

    /// Called after the last agent of an iteration has learned.
    ///
    /// `collisions` is the number of agents whose move was rejected during
    /// this iteration.
    fn on_iteration_end(&mut self, _iteration: u64, _collisions: u32) {}

    /// Called once when [`Sim::run`][crate::Sim::run] finishes, with the number
    /// of iterations completed.
    fn on_sim_end(&mut self, _iterations: u64) {}
}

/// A [`SimObserver`] that does nothing.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
