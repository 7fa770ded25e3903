//! `rink-metrics` — read-only views over a finished (or paused) run.
//!
//! | Module        | Contents                                                      |
//! |---------------|---------------------------------------------------------------|
//! | [`aggregate`](mod@aggregate) | `RunMetrics` — `C × T` average-reward and population tables   |
//! | [`report`]    | `RunReport` — everything a plotting or reporting tool pulls   |
//!
//! Nothing here mutates simulation or learning state, and every function is
//! total: an engine with no history yields empty tables, and a
//! `(choice, iteration)` cell nobody chose holds `0`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use rink_metrics::RunReport;
//!
//! sim.run(&mut NoopObserver)?;
//! let report = RunReport::from_sim(&sim);
//! let (t, avg_reward, distribution) = report.metrics.into_parts();
//! ```

pub mod aggregate;
pub mod report;


pub use aggregate::{RunMetrics, aggregate};
pub use report::RunReport;
