//! Population-wide counters and the average-propensity time series.

use rink_core::ChoiceId;

use crate::Outcome;

/// Cumulative per-choice counters plus one average-propensity snapshot per
/// completed sweep.
///
/// Owned by whoever drives the sweep (normally the simulation loop) and
/// handed to [`LearningEngine::choose`][crate::LearningEngine::choose] and
/// [`LearningEngine::learn`][crate::LearningEngine::learn] by `&mut`.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tally {
    successes:            Vec<u64>,
    collisions:           Vec<u64>,
    choices:              Vec<u64>,
    average_propensities: Vec<Vec<f64>>,
}

impl Tally {
    pub fn new(choice_count: usize) -> Self {
        Self {
            successes:            vec![0; choice_count],
            collisions:           vec![0; choice_count],
            choices:              vec![0; choice_count],
            average_propensities: Vec::new(),
        }
    }

    // ── Updates (driven by the engine) ────────────────────────────────────

    pub(crate) fn record_choice(&mut self, choice: ChoiceId) {
        self.choices[choice.index()] += 1;
    }

    pub(crate) fn record_outcome(&mut self, choice: ChoiceId, outcome: Outcome) {
        match outcome {
            Outcome::Success   => self.successes[choice.index()] += 1,
            Outcome::Collision => self.collisions[choice.index()] += 1,
        }
    }

    pub(crate) fn push_snapshot(&mut self, average: Vec<f64>) {
        self.average_propensities.push(average);
    }

    // ── Queries ───────────────────────────────────────────────────────────

    /// Number of choices `C` this tally was sized for.
    #[inline]
    pub fn choice_count(&self) -> usize {
        self.choices.len()
    }

    /// Cumulative successful moves, per choice.
    pub fn successes(&self) -> &[u64] {
        &self.successes
    }

    /// Cumulative collisions, per choice.
    pub fn collisions(&self) -> &[u64] {
        &self.collisions
    }

    /// Cumulative times each choice was selected.
    pub fn choices(&self) -> &[u64] {
        &self.choices
    }

    pub fn total_collisions(&self) -> u64 {
        self.collisions.iter().sum()
    }

    pub fn total_successes(&self) -> u64 {
        self.successes.iter().sum()
    }

    /// One length-`C` vector per completed sweep, oldest first.
    pub fn average_propensities(&self) -> &[Vec<f64>] {
        &self.average_propensities
    }

    #[inline]
    pub fn snapshot_count(&self) -> usize {
        self.average_propensities.len()
    }

    /// The average propensity of `choice` over time.
    pub fn propensity_series(&self, choice: ChoiceId) -> Vec<f64> {
        self.average_propensities
            .iter()
            .map(|snapshot| snapshot[choice.index()])
            .collect()
    }
}
