//! `rink-core` — foundational types for the rink collision-learning simulation.
//!
//! This crate is a dependency of every other `rink-*` crate.  It has no
//! `rink-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `AgentId`, `ChoiceId`                                 |
//! | [`geo`]         | `Point`, `Torus` (wrap-around domain)                 |
//! | [`compass`]     | `Compass` — choice index → heading                    |
//! | [`world`]       | `World` — destinations and collision predicate        |
//! | [`config`]      | `RinkConfig`, `Rewards`, `SnapshotPolicy`, `CollisionModel` |
//! | [`rng`]         | `AgentRng` (per-agent), `AgentRngs`, `SimRng` (global) |
//! | [`error`]       | `RinkError`, `RinkResult`                             |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public data types.   |

pub mod compass;
pub mod config;
pub mod error;
pub mod geo;
pub mod ids;
pub mod rng;
pub mod world;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use compass::Compass;
pub use config::{CollisionModel, Rewards, RinkConfig, SnapshotPolicy};
pub use error::{RinkError, RinkResult};
pub use geo::{Point, Torus};
pub use ids::{AgentId, ChoiceId};
pub use rng::{AgentRng, AgentRngs, SimRng};
pub use world::World;
