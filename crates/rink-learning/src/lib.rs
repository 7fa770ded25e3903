//! `rink-learning` — the learning engine.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                         |
//! |-------------|------------------------------------------------------------------|
//! | [`policy`]  | `ChoicePolicy` trait, `EpsilonGreedy`, `UniformRandom`           |
//! | [`outcome`] | `Outcome` (success / collision), `HistoryEntry`                  |
//! | [`engine`]  | `LearningEngine` — per-agent propensities, counts, and history   |
//! | [`tally`]   | `Tally` — population-wide counters and average-propensity series |
//! | [`error`]   | `LearningError`, `LearningResult<T>`                             |
//!
//! # Calling-order contract
//!
//! Within one iteration [`LearningEngine::learn`] must be called exactly once
//! per agent, in ascending `AgentId` order.  The call for the last agent is
//! the end-of-sweep event: it appends the population-average propensity
//! vector to the [`Tally`].  Calling `learn` out of order shifts or
//! duplicates those snapshots.
//!
//! The engine holds no population-wide mutable state of its own; the
//! [`Tally`] is owned by the caller and passed in by `&mut` on every
//! `choose`/`learn` call.

pub mod engine;
pub mod error;
pub mod outcome;
pub mod policy;
pub mod tally;

#[cfg(test)]
mod tests;

pub use engine::LearningEngine;
pub use error::{LearningError, LearningResult};
pub use outcome::{HistoryEntry, Outcome};
pub use policy::{ChoicePolicy, EpsilonGreedy, UniformRandom};
pub use tally::Tally;

pub use rink_core::Rewards;
