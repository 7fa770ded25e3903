//! Per-iteration, per-choice tables derived from agent histories.

use rink_core::ChoiceId;
use rink_learning::{ChoicePolicy, HistoryEntry, LearningEngine};

/// Aggregate an engine's histories into per-iteration tables.
///
/// Shorthand for [`RunMetrics::from_engine`].
pub fn aggregate<P: ChoicePolicy>(engine: &LearningEngine<P>) -> RunMetrics {
    RunMetrics::from_engine(engine)
}

/// Two `C × T` tables indexed `[choice][iteration]`.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RunMetrics {
    /// Number of complete iterations `T` covered by the tables.
    pub iterations: usize,

    /// Mean reward among the agents that chose each option at each
    /// iteration; `0.0` where nobody did.
    pub average_reward: Vec<Vec<f64>>,

    /// How many agents chose each option at each iteration.
    pub distribution: Vec<Vec<u32>>,
}

impl RunMetrics {
    /// Aggregate the engine's histories.
    pub fn from_engine<P: ChoicePolicy>(engine: &LearningEngine<P>) -> Self {
        Self::from_histories(engine.histories(), engine.choice_count())
    }

    /// Aggregate raw per-agent histories over `choice_count` options.
    ///
    /// `T` is the shortest history length, so a partially processed
    /// iteration is left out.  Entries whose choice is `>= choice_count` are
    /// ignored.
    pub fn from_histories(histories: &[Vec<HistoryEntry>], choice_count: usize) -> Self {
        let iterations = histories.iter().map(Vec::len).min().unwrap_or(0);

        let mut reward_sums  = vec![vec![0.0_f64; iterations]; choice_count];
        let mut distribution = vec![vec![0_u32; iterations]; choice_count];

        for history in histories {
            for (t, entry) in history[..iterations].iter().enumerate() {
                let c = entry.choice.index();
                if c < choice_count {
                    reward_sums[c][t] += entry.reward;
                    distribution[c][t] += 1;
                }
            }
        }

        let average_reward = reward_sums
            .into_iter()
            .zip(&distribution)
            .map(|(sums, counts)| {
                sums.into_iter()
                    .zip(counts)
                    .map(|(sum, &n)| if n == 0 { 0.0 } else { sum / n as f64 })
                    .collect()
            })
            .collect();

        Self { iterations, average_reward, distribution }
    }

    #[inline]
    pub fn choice_count(&self) -> usize {
        self.distribution.len()
    }

    /// Largest number of agents sharing one heading at `iteration`.
    /// `None` if the iteration is not covered.
    pub fn peak_population(&self, iteration: usize) -> Option<u32> {
        if iteration >= self.iterations {
            return None;
        }
        self.distribution.iter().map(|row| row[iteration]).max()
    }

    /// [`peak_population`](Self::peak_population) at the last iteration.
    pub fn final_peak_population(&self) -> Option<u32> {
        self.iterations.checked_sub(1).and_then(|t| self.peak_population(t))
    }

    /// Most popular heading at `iteration`; the lowest index wins ties.
    pub fn dominant_choice(&self, iteration: usize) -> Option<ChoiceId> {
        if iteration >= self.iterations {
            return None;
        }
        let mut best: Option<(usize, u32)> = None;
        for (c, row) in self.distribution.iter().enumerate() {
            if best.is_none_or(|(_, n)| row[iteration] > n) {
                best = Some((c, row[iteration]));
            }
        }
        best.map(|(c, _)| ChoiceId(c as u16))
    }

    /// `(T, average_reward, distribution)`.
    pub fn into_parts(self) -> (usize, Vec<Vec<f64>>, Vec<Vec<u32>>) {
        (self.iterations, self.average_reward, self.distribution)
    }
}
