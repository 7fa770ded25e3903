//! Run configuration.
//!
//! `RinkConfig` is read once by the simulation builder and never mutated
//! afterwards.  The `Default` impl reproduces the reference experiment: a
//! 1600 × 1600 rink, six headings, twenty agents, collision radius 100,
//! step 100, and 100 000 iterations.

use crate::{RinkError, RinkResult};

// ── Rewards ───────────────────────────────────────────────────────────────────

/// Reward paid to an agent after each attempted move.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rewards {
    /// Paid when the move was carried out.  Default: `+1`.
    pub success: f64,
    /// Paid when the destination collided with another agent.  Default: `-5`.
    pub failure: f64,
}

impl Default for Rewards {
    fn default() -> Self {
        Self { success: 1.0, failure: -5.0 }
    }
}

// ── SnapshotPolicy ────────────────────────────────────────────────────────────

/// Which positions a sweep tests destinations against.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SnapshotPolicy {
    /// Agents move one at a time in ascending index order and each
    /// destination is tested against the live position array: agents with a
    /// lower index have already moved this iteration, higher ones have not.
    #[default]
    SequentialInPlace,

    /// Every destination is tested against the positions held at the start
    /// of the iteration; moves are applied afterwards.  Produces different
    /// dynamics from `SequentialInPlace`.
    DoubleBuffered,
}

// ── CollisionModel ────────────────────────────────────────────────────────────

/// How separation is measured on the wrap-around domain.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CollisionModel {
    /// Direct distance, plus the four single-axis images obtained by adding
    /// `width` or `height` to either point.  Negative shifts and diagonal
    /// images are not checked.
    #[default]
    PositiveWrap,

    /// True toroidal distance: the minimum over all nine periodic images.
    MinimumImage,
}

// ── RinkConfig ────────────────────────────────────────────────────────────────

/// Top-level simulation configuration.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RinkConfig {
    /// Population size `N`.
    pub agent_count: usize,

    /// Number of discrete headings `C`.
    pub choice_count: usize,

    /// Domain extent along x.
    pub width: f64,

    /// Domain extent along y.
    pub height: f64,

    /// Center-to-center distance below which two agents collide.
    pub collision_radius: f64,

    /// Distance covered by one move.  Must be below `2 * collision_radius`
    /// so an agent cannot jump clean over another.
    pub step_size: f64,

    /// Number of full sweeps to run.
    pub max_iterations: u64,

    /// Probability of picking a uniformly random heading instead of the
    /// best-known one.
    pub exploration: f64,

    pub rewards: Rewards,

    /// Master RNG seed.  The same seed always produces identical results.
    pub seed: u64,

    pub snapshot: SnapshotPolicy,

    pub collision_model: CollisionModel,
}

impl Default for RinkConfig {
    fn default() -> Self {
        Self {
            agent_count:      20,
            choice_count:     6,
            width:            1600.0,
            height:           1600.0,
            collision_radius: 100.0,
            step_size:        100.0,
            max_iterations:   100_000,
            exploration:      0.05,
            rewards:          Rewards::default(),
            seed:             42,
            snapshot:         SnapshotPolicy::default(),
            collision_model:  CollisionModel::default(),
        }
    }
}

impl RinkConfig {
    /// Reject configurations a run cannot start from.
    pub fn validate(&self) -> RinkResult<()> {
        if self.choice_count == 0 {
            return Err(config_err("choice_count must be at least 1"));
        }
        if self.choice_count > u16::MAX as usize {
            return Err(config_err(format!(
                "choice_count {} exceeds the maximum of {}",
                self.choice_count,
                u16::MAX
            )));
        }
        if self.agent_count == 0 {
            return Err(config_err("agent_count must be at least 1"));
        }
        if self.agent_count > u32::MAX as usize {
            return Err(config_err(format!(
                "agent_count {} exceeds the maximum of {}",
                self.agent_count,
                u32::MAX
            )));
        }
        positive("width", self.width)?;
        positive("height", self.height)?;
        positive("collision_radius", self.collision_radius)?;
        positive("step_size", self.step_size)?;
        if self.step_size >= 2.0 * self.collision_radius {
            return Err(config_err(format!(
                "step_size {} must be less than twice the collision radius ({})",
                self.step_size,
                2.0 * self.collision_radius
            )));
        }
        if !(0.0..=1.0).contains(&self.exploration) {
            return Err(config_err(format!(
                "exploration {} must lie in [0, 1]",
                self.exploration
            )));
        }
        if !self.rewards.success.is_finite() || !self.rewards.failure.is_finite() {
            return Err(config_err("rewards must be finite"));
        }
        Ok(())
    }
}

fn positive(field: &str, value: f64) -> RinkResult<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(config_err(format!("{field} must be finite and positive, got {value}")))
    }
}

fn config_err(msg: impl Into<String>) -> RinkError {
    RinkError::Config(msg.into())
}
