//! `RunReport` — the pull-based query surface for reporting tools.

use rink_learning::{ChoicePolicy, LearningEngine, Tally};
use rink_sim::Sim;

use crate::RunMetrics;

/// Everything a plotting or summary tool needs from one run, copied out of
/// the simulation so the simulation can be dropped.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RunReport {
    /// Heading of each choice in degrees, for labelling series.
    pub headings_degrees: Vec<f64>,

    /// One population-average propensity vector per completed iteration.
    pub average_propensities: Vec<Vec<f64>>,

    pub metrics: RunMetrics,

    /// Cumulative successful moves, per choice.
    pub successes: Vec<u64>,

    /// Cumulative collisions, per choice.
    pub collisions: Vec<u64>,

    /// Cumulative selections, per choice.
    pub choices: Vec<u64>,

    /// Rejected moves per iteration.  Empty when built with
    /// [`from_learning`](Self::from_learning).
    pub collisions_per_iteration: Vec<u32>,
}

impl RunReport {
    pub fn from_sim<P: ChoicePolicy>(sim: &Sim<P>) -> Self {
        let compass = sim.world.compass();
        Self {
            headings_degrees: compass.choices().map(|c| compass.heading_degrees(c)).collect(),
            collisions_per_iteration: sim.collisions_per_iteration().to_vec(),
            ..Self::from_learning(&sim.engine, &sim.tally)
        }
    }

    /// Build from learning state alone, for callers driving the engine
    /// without a [`Sim`].  Headings assume `C` evenly spaced directions.
    pub fn from_learning<P: ChoicePolicy>(engine: &LearningEngine<P>, tally: &Tally) -> Self {
        let compass = rink_core::Compass::new(engine.choice_count());
        Self {
            headings_degrees:         compass.choices().map(|c| compass.heading_degrees(c)).collect(),
            average_propensities:     tally.average_propensities().to_vec(),
            metrics:                  RunMetrics::from_engine(engine),
            successes:                tally.successes().to_vec(),
            collisions:               tally.collisions().to_vec(),
            choices:                  tally.choices().to_vec(),
            collisions_per_iteration: Vec::new(),
        }
    }

    pub fn total_collisions(&self) -> u64 {
        self.collisions.iter().sum()
    }
}
