//! The `Sim` struct and its iteration loop.

use rink_core::{AgentId, AgentRngs, ChoiceId, Point, RinkConfig, SnapshotPolicy, World};
use rink_learning::{ChoicePolicy, EpsilonGreedy, LearningEngine, Outcome, Tally};

use crate::{SimObserver, SimResult};

// ── Sim ───────────────────────────────────────────────────────────────────────

/// The main simulation runner.
///
/// `Sim<P>` owns every piece of mutable run state: the shared position array,
/// the per-agent RNGs, the learning engine, and the [`Tally`] the engine
/// writes its population-wide counters into.
///
/// Create via [`SimBuilder`][crate::SimBuilder].
pub struct Sim<P: ChoicePolicy = EpsilonGreedy> {
    /// Configuration the run was built from.
    pub config: RinkConfig,

    /// Destination and collision geometry.
    pub world: World,

    /// Current position of every agent, indexed by `AgentId`.  Always inside
    /// the domain.
    pub positions: Vec<Point>,

    /// Per-agent deterministic RNGs consumed by the choice policy.
    pub rngs: AgentRngs,

    /// Propensities, counts, and histories.
    pub engine: LearningEngine<P>,

    /// Global success / collision / choice counters and the
    /// average-propensity series.
    pub tally: Tally,

    iteration: u64,

    collisions_per_iteration: Vec<u32>,
}

impl<P: ChoicePolicy> Sim<P> {
    pub(crate) fn new(
        config:    RinkConfig,
        world:     World,
        positions: Vec<Point>,
        rngs:      AgentRngs,
        engine:    LearningEngine<P>,
    ) -> Self {
        let tally = engine.new_tally();
        Self {
            config,
            world,
            positions,
            rngs,
            engine,
            tally,
            iteration: 0,
            collisions_per_iteration: Vec::new(),
        }
    }

    // ── Public API ────────────────────────────────────────────────────────

    /// Number of iterations completed so far.
    #[inline]
    pub fn iteration(&self) -> u64 {
        self.iteration
    }

    /// Rejected moves per completed iteration, oldest first.
    pub fn collisions_per_iteration(&self) -> &[u32] {
        &self.collisions_per_iteration
    }

    /// Run until `config.max_iterations` iterations have completed.
    ///
    /// Calls observer hooks at every iteration boundary.  Use
    /// [`NoopObserver`][crate::NoopObserver] if you don't need callbacks.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<()> {
        tracing::info!(
            agents     = self.positions.len(),
            choices    = self.engine.choice_count(),
            iterations = self.config.max_iterations,
            snapshot   = ?self.config.snapshot,
            "starting run"
        );

        while self.iteration < self.config.max_iterations {
            self.step(observer);
        }
        observer.on_sim_end(self.iteration);

        tracing::info!(
            iterations = self.iteration,
            collisions = self.tally.total_collisions(),
            successes  = self.tally.total_successes(),
            "run complete"
        );
        Ok(())
    }

    /// Run exactly `n` iterations from the current position (ignores
    /// `max_iterations`).
    ///
    /// Useful for tests and incremental stepping.
    pub fn run_iterations<O: SimObserver>(&mut self, n: u64, observer: &mut O) -> SimResult<()> {
        for _ in 0..n {
            self.step(observer);
        }
        Ok(())
    }

    // ── Core iteration processing ─────────────────────────────────────────

    fn step<O: SimObserver>(&mut self, observer: &mut O) {
        let now = self.iteration;
        observer.on_iteration_start(now);

        let collisions = match self.config.snapshot {
            SnapshotPolicy::SequentialInPlace => self.sweep_in_place(),
            SnapshotPolicy::DoubleBuffered    => self.sweep_double_buffered(),
        };
        self.collisions_per_iteration.push(collisions);
        tracing::debug!(iteration = now, collisions, "iteration complete");

        observer.on_iteration_end(now, collisions);
        self.iteration += 1;
    }

    /// Agents choose, move, and learn one at a time.  Each destination is
    /// tested against the live position array, so agent `i` sees the
    /// post-move positions of agents `0..i` and the pre-move positions of
    /// agents `i+1..N`.
    fn sweep_in_place(&mut self) -> u32 {
        let mut collisions = 0;
        for agent in AgentId::range(self.positions.len()) {
            let i = agent.index();
            let choice = self.engine.choose(agent, self.rngs.get_mut(agent), &mut self.tally);
            let target = self.world.destination(self.positions[i], choice);

            let blocked = blocked_by_others(&self.world, &self.positions, i, target);
            if blocked {
                collisions += 1;
            } else {
                self.positions[i] = target;
            }

            self.engine.learn(agent, choice, Outcome::from_moved(!blocked), &mut self.tally);
        }
        collisions
    }

    /// Every agent chooses first; all targets are then tested against the
    /// positions held at the start of the iteration; finally moves are
    /// applied and outcomes learned in ascending `AgentId` order.
    fn sweep_double_buffered(&mut self) -> u32 {
        let start = self.positions.clone();

        let choices: Vec<ChoiceId> = AgentId::range(start.len())
            .map(|agent| self.engine.choose(agent, self.rngs.get_mut(agent), &mut self.tally))
            .collect();

        let targets: Vec<Point> = start
            .iter()
            .zip(&choices)
            .map(|(&from, &choice)| self.world.destination(from, choice))
            .collect();

        let blocked = blocked_against(&self.world, &start, &targets);

        let mut collisions = 0;
        for (agent, ((&choice, &target), &hit)) in
            AgentId::range(start.len()).zip(choices.iter().zip(&targets).zip(&blocked))
        {
            if hit {
                collisions += 1;
            } else {
                self.positions[agent.index()] = target;
            }
            self.engine.learn(agent, choice, Outcome::from_moved(!hit), &mut self.tally);
        }
        collisions
    }
}

// ── Collision helpers ─────────────────────────────────────────────────────────

/// `true` if `target` collides with any agent other than `agent`.
/// Stops at the first hit.
#[inline]
fn blocked_by_others(world: &World, positions: &[Point], agent: usize, target: Point) -> bool {
    positions
        .iter()
        .enumerate()
        .any(|(j, &other)| j != agent && world.collides(target, other))
}

/// Collision verdict for every agent's target against the fixed `start`
/// positions.
#[cfg(not(feature = "parallel"))]
fn blocked_against(world: &World, start: &[Point], targets: &[Point]) -> Vec<bool> {
    targets
        .iter()
        .enumerate()
        .map(|(i, &target)| blocked_by_others(world, start, i, target))
        .collect()
}

/// Collision verdict for every agent's target against the fixed `start`
/// positions, evaluated on Rayon's pool.  Reads only, so the result is
/// identical to the sequential version.
#[cfg(feature = "parallel")]
fn blocked_against(world: &World, start: &[Point], targets: &[Point]) -> Vec<bool> {
    use rayon::prelude::*;

    targets
        .par_iter()
        .enumerate()
        .map(|(i, &target)| blocked_by_others(world, start, i, target))
        .collect()
}
