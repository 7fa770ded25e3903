//! `rink-sim` — iteration loop orchestrator for the rink simulation.
//!
//! # One iteration (sweep)
//!
//! ```text
//! for agent in 0..N (ascending):
//!   ① Choose    — LearningEngine::choose (policy over the agent's propensities)
//!   ② Target    — World::destination(position, choice)
//!   ③ Collide   — World::collides(target, other) for every other agent,
//!                 stopping at the first hit
//!   ④ Move      — on no hit the agent takes the target position
//!   ⑤ Learn     — LearningEngine::learn(agent, choice, outcome); the last
//!                 agent's call closes the sweep and snapshots the
//!                 population-average propensities
//! ```
//!
//! Step ③ reads positions according to the run's [`SnapshotPolicy`]:
//! `SequentialInPlace` tests against the live array (lower-indexed agents
//! have already moved), `DoubleBuffered` against the start-of-iteration copy.
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                        |
//! |------------|---------------------------------------------------------------|
//! | `parallel` | Runs the double-buffered collision phase on Rayon's pool.     |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use rink_core::RinkConfig;
//! use rink_sim::{NoopObserver, SimBuilder};
//!
//! let mut sim = SimBuilder::new(RinkConfig::default()).build()?;
//! sim.run(&mut NoopObserver)?;
//! println!("{:?}", sim.tally.collisions());
//! ```
//!
//! [`SnapshotPolicy`]: rink_core::SnapshotPolicy

pub mod builder;
pub mod error;
pub mod observer;
pub mod sim;


pub use builder::SimBuilder;
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, SimObserver};
pub use sim::Sim;
