//! Choice policies — how an agent turns its propensities into a heading.

use rink_core::{AgentRng, ChoiceId};

use crate::{LearningError, LearningResult};

/// Pluggable selection rule.
///
/// `propensities` is one agent's row, one entry per choice, and is never
/// empty.  All randomness must come from `rng` so runs are reproducible.
pub trait ChoicePolicy: Send + Sync + 'static {
    fn select(&self, propensities: &[f64], rng: &mut AgentRng) -> ChoiceId;

    /// Reject parameters `select` cannot run with.  Called once by
    /// [`LearningEngine::new`][crate::LearningEngine::new].
    fn validate(&self) -> LearningResult<()> {
        Ok(())
    }
}

/// Uniform draw over `0..count`.
#[inline]
fn uniform_choice(count: usize, rng: &mut AgentRng) -> ChoiceId {
    ChoiceId(rng.gen_range(0..count) as u16)
}

// ── EpsilonGreedy ─────────────────────────────────────────────────────────────

/// With probability `epsilon` pick uniformly at random; otherwise pick
/// uniformly among the choices whose propensity lies within
/// `tie_tolerance` of the maximum.
///
/// `epsilon` must lie in `[0, 1]` and `tie_tolerance` must be finite and
/// non-negative; [`LearningEngine::new`][crate::LearningEngine::new] refuses
/// anything else.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct EpsilonGreedy {
    pub epsilon:       f64,
    pub tie_tolerance: f64,
}

impl EpsilonGreedy {
    pub const DEFAULT_EPSILON: f64 = 0.05;
    pub const DEFAULT_TIE_TOLERANCE: f64 = 1e-10;

    pub fn new(epsilon: f64) -> Self {
        Self { epsilon, tie_tolerance: Self::DEFAULT_TIE_TOLERANCE }
    }

    /// Pure exploitation: always choose among the best-known choices.
    pub fn greedy() -> Self {
        Self::new(0.0)
    }
}

impl Default for EpsilonGreedy {
    fn default() -> Self {
        Self::new(Self::DEFAULT_EPSILON)
    }
}

impl ChoicePolicy for EpsilonGreedy {
    fn select(&self, propensities: &[f64], rng: &mut AgentRng) -> ChoiceId {
        if rng.gen_bool(self.epsilon) {
            return uniform_choice(propensities.len(), rng);
        }

        let best = propensities.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let ties: Vec<ChoiceId> = propensities
            .iter()
            .enumerate()
            .filter(|&(_, &p)| (p - best).abs() < self.tie_tolerance)
            .map(|(c, _)| ChoiceId(c as u16))
            .collect();

        // `ties` only comes back empty if every propensity is NaN.
        match rng.choose(&ties) {
            Some(&choice) => choice,
            None => uniform_choice(propensities.len(), rng),
        }
    }

    fn validate(&self) -> LearningResult<()> {
        if !(0.0..=1.0).contains(&self.epsilon) {
            return Err(LearningError::Config(format!(
                "epsilon {} must lie in [0, 1]",
                self.epsilon
            )));
        }
        if !(self.tie_tolerance.is_finite() && self.tie_tolerance >= 0.0) {
            return Err(LearningError::Config(format!(
                "tie tolerance {} must be finite and non-negative",
                self.tie_tolerance
            )));
        }
        Ok(())
    }
}

// ── UniformRandom ─────────────────────────────────────────────────────────────

/// Ignores propensities entirely.  Baseline for comparing against learned
/// behavior.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct UniformRandom;

impl ChoicePolicy for UniformRandom {
    fn select(&self, propensities: &[f64], rng: &mut AgentRng) -> ChoiceId {
        uniform_choice(propensities.len(), rng)
    }
}
