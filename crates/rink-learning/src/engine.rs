//! The `LearningEngine` — per-agent propensity vectors and the running-mean
//! reward update.

use rink_core::{AgentId, AgentRng, ChoiceId, Rewards, RinkConfig};

use crate::{
    ChoicePolicy, EpsilonGreedy, HistoryEntry, LearningError, LearningResult, Outcome, Tally,
};

/// Per-agent learning state for a population of `N` agents choosing among
/// `C` headings.
///
/// Propensities and counts are stored row-major (`agent * C + choice`) so one
/// agent's row is a contiguous slice handed straight to the policy.
///
/// Every propensity starts at `0`.  After `k` rewards `r₁..r_k` for the same
/// `(agent, choice)` the propensity equals their arithmetic mean.
pub struct LearningEngine<P: ChoicePolicy = EpsilonGreedy> {
    agent_count:  usize,
    choice_count: usize,
    rewards:      Rewards,
    policy:       P,
    propensities: Vec<f64>,
    counts:       Vec<u64>,
    history:      Vec<Vec<HistoryEntry>>,
}

impl LearningEngine<EpsilonGreedy> {
    /// Engine sized and rewarded from `config`, exploring with
    /// `config.exploration`.
    pub fn from_config(config: &RinkConfig) -> LearningResult<Self> {
        Self::new(
            config.agent_count,
            config.choice_count,
            config.rewards,
            EpsilonGreedy::new(config.exploration),
        )
    }
}

impl<P: ChoicePolicy> LearningEngine<P> {
    /// Fails if either dimension is zero or too large for its id type, or if
    /// `policy` rejects its own parameters.
    pub fn new(
        agent_count:  usize,
        choice_count: usize,
        rewards:      Rewards,
        policy:       P,
    ) -> LearningResult<Self> {
        if choice_count == 0 {
            return Err(LearningError::Config("at least one choice is required".into()));
        }
        if choice_count > u16::MAX as usize {
            return Err(LearningError::Config(format!(
                "{choice_count} choices exceed the maximum of {}",
                u16::MAX
            )));
        }
        if agent_count == 0 {
            return Err(LearningError::Config("at least one agent is required".into()));
        }
        if agent_count > u32::MAX as usize {
            return Err(LearningError::Config(format!(
                "{agent_count} agents exceed the maximum of {}",
                u32::MAX
            )));
        }

        policy.validate()?;

        let cells = agent_count * choice_count;
        Ok(Self {
            agent_count,
            choice_count,
            rewards,
            policy,
            propensities: vec![0.0; cells],
            counts:       vec![0; cells],
            history:      vec![Vec::new(); agent_count],
        })
    }

    /// A zeroed [`Tally`] sized for this engine.
    pub fn new_tally(&self) -> Tally {
        Tally::new(self.choice_count)
    }

    // ── Metadata ──────────────────────────────────────────────────────────

    #[inline]
    pub fn agent_count(&self) -> usize {
        self.agent_count
    }

    #[inline]
    pub fn choice_count(&self) -> usize {
        self.choice_count
    }

    #[inline]
    pub fn rewards(&self) -> &Rewards {
        &self.rewards
    }

    #[inline]
    pub fn policy(&self) -> &P {
        &self.policy
    }

    // ── Per-agent state ───────────────────────────────────────────────────

    /// `agent`'s propensity for every choice.
    ///
    /// # Panics
    /// Panics if `agent` is out of range.
    #[inline]
    pub fn propensities(&self, agent: AgentId) -> &[f64] {
        &self.propensities[self.row(agent)]
    }

    /// How many times `agent` has learned from each choice.
    ///
    /// # Panics
    /// Panics if `agent` is out of range.
    #[inline]
    pub fn counts(&self, agent: AgentId) -> &[u64] {
        &self.counts[self.row(agent)]
    }

    /// `agent`'s `(choice, reward)` record, one entry per iteration.
    ///
    /// # Panics
    /// Panics if `agent` is out of range.
    #[inline]
    pub fn history(&self, agent: AgentId) -> &[HistoryEntry] {
        &self.history[agent.index()]
    }

    /// Every agent's history, indexed by `AgentId`.
    #[inline]
    pub fn histories(&self) -> &[Vec<HistoryEntry>] {
        &self.history
    }

    /// Mean propensity per choice across the whole population.
    pub fn average_propensities(&self) -> Vec<f64> {
        let mut sums = vec![0.0; self.choice_count];
        for row in self.propensities.chunks_exact(self.choice_count) {
            for (sum, p) in sums.iter_mut().zip(row) {
                *sum += p;
            }
        }
        let n = self.agent_count as f64;
        sums.iter_mut().for_each(|s| *s /= n);
        sums
    }

    // ── Learning ──────────────────────────────────────────────────────────

    /// Ask the policy for `agent`'s next choice and count the selection in
    /// `tally`.
    pub fn choose(&self, agent: AgentId, rng: &mut AgentRng, tally: &mut Tally) -> ChoiceId {
        let choice = self.policy.select(self.propensities(agent), rng);
        tally.record_choice(choice);
        choice
    }

    /// Feed back the outcome of `agent`'s attempt at `choice`.
    ///
    /// Counts the outcome in `tally`, moves the propensity toward the reward
    /// by the incremental-mean rule `p += (r - p) / n`, and appends to the
    /// agent's history.  When `agent` is the last index the sweep is
    /// complete and the population-average propensities are appended to
    /// `tally`; see the crate-level calling-order contract.
    ///
    /// # Panics
    /// Panics if `agent` or `choice` is out of range.
    pub fn learn(&mut self, agent: AgentId, choice: ChoiceId, outcome: Outcome, tally: &mut Tally) {
        let reward = outcome.reward(&self.rewards);
        tally.record_outcome(choice, outcome);

        let cell = agent.index() * self.choice_count + choice.index();
        self.counts[cell] += 1;
        let old = self.propensities[cell];
        self.propensities[cell] = old + (reward - old) / self.counts[cell] as f64;

        self.history[agent.index()].push(HistoryEntry { choice, reward });

        if agent.index() == self.agent_count - 1 {
            tally.push_snapshot(self.average_propensities());
            tracing::trace!(sweep = tally.snapshot_count(), "recorded average propensities");
        }
    }

    #[inline]
    fn row(&self, agent: AgentId) -> std::ops::Range<usize> {
        let start = agent.index() * self.choice_count;
        start..start + self.choice_count
    }
}
