//! Move outcomes and the per-agent history record.

use rink_core::{ChoiceId, Rewards};

/// Result of one attempted move.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Outcome {
    /// No other agent was within the collision radius of the destination;
    /// the agent moved.
    Success,
    /// The destination collided; the agent stayed put.
    Collision,
}

impl Outcome {
    #[inline]
    pub fn from_moved(moved: bool) -> Self {
        if moved { Outcome::Success } else { Outcome::Collision }
    }

    #[inline]
    pub fn is_success(self) -> bool {
        self == Outcome::Success
    }

    /// The reward this outcome earns under `rewards`.
    #[inline]
    pub fn reward(self, rewards: &Rewards) -> f64 {
        match self {
            Outcome::Success   => rewards.success,
            Outcome::Collision => rewards.failure,
        }
    }
}

/// One `(choice, reward)` pair, appended to an agent's history per iteration.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HistoryEntry {
    pub choice: ChoiceId,
    pub reward: f64,
}
