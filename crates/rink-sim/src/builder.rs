//! Fluent builder for constructing a [`Sim`].

use rink_core::{AgentId, AgentRngs, Point, RinkConfig, SimRng, World};
use rink_learning::{ChoicePolicy, EpsilonGreedy, LearningEngine};

use crate::{Sim, SimError, SimResult};

/// XOR-ed into the master seed for initial placement so placement draws do
/// not replay agent 0's decision stream.
const PLACEMENT_STREAM: u64 = 0x51ac_e0f1_7a3c_e5e7;

/// Fluent builder for [`Sim<P>`].
///
/// # Required inputs
///
/// - [`RinkConfig`] — population, domain, radius, step, iterations, seed, …
///
/// # Optional inputs (have defaults)
///
/// | Method                   | Default                                         |
/// |--------------------------|-------------------------------------------------|
/// | `.policy(p)`             | `EpsilonGreedy::new(config.exploration)`        |
/// | `.initial_positions(v)`  | Uniform over the domain, drawn from `config.seed` |
///
/// # Example
///
/// ```rust,ignore
/// let mut sim = SimBuilder::new(config)
///     .initial_positions(positions)
///     .build()?;
/// sim.run(&mut NoopObserver)?;
/// ```
pub struct SimBuilder<P: ChoicePolicy = EpsilonGreedy> {
    config:    RinkConfig,
    policy:    P,
    positions: Option<Vec<Point>>,
}

impl SimBuilder<EpsilonGreedy> {
    /// Create a builder whose agents explore at `config.exploration`.
    pub fn new(config: RinkConfig) -> Self {
        let policy = EpsilonGreedy::new(config.exploration);
        Self { config, policy, positions: None }
    }
}

impl<P: ChoicePolicy> SimBuilder<P> {
    /// Replace the choice policy.
    pub fn policy<Q: ChoicePolicy>(self, policy: Q) -> SimBuilder<Q> {
        SimBuilder {
            config:    self.config,
            policy,
            positions: self.positions,
        }
    }

    /// Supply the starting position of every agent (must be length
    /// `agent_count`, every point inside the domain).
    pub fn initial_positions(mut self, positions: Vec<Point>) -> Self {
        self.positions = Some(positions);
        self
    }

    /// Validate inputs, place agents, and return a ready-to-run [`Sim`].
    pub fn build(self) -> SimResult<Sim<P>> {
        let world = World::from_config(&self.config)?;
        let agent_count = self.config.agent_count;

        let positions = match self.positions {
            Some(p) => {
                if p.len() != agent_count {
                    return Err(SimError::AgentCountMismatch {
                        expected: agent_count,
                        got:      p.len(),
                        what:     "initial positions",
                    });
                }
                if let Some((agent, &position)) = AgentId::range(agent_count)
                    .zip(&p)
                    .find(|&(_, &pos)| !world.torus().contains(pos))
                {
                    return Err(SimError::PositionOutOfBounds { agent, position });
                }
                p
            }
            None => {
                let mut rng = SimRng::new(self.config.seed ^ PLACEMENT_STREAM);
                (0..agent_count)
                    .map(|_| world.torus().random_point(&mut rng))
                    .collect()
            }
        };

        let engine = LearningEngine::new(
            agent_count,
            self.config.choice_count,
            self.config.rewards,
            self.policy,
        )?;
        let rngs = AgentRngs::new(agent_count, self.config.seed);

        Ok(Sim::new(self.config, world, positions, rngs, engine))
    }
}
