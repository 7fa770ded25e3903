use rink_core::{AgentId, Point, RinkError};
use rink_learning::LearningError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error(transparent)]
    Core(#[from] RinkError),

    #[error(transparent)]
    Learning(#[from] LearningError),

    #[error("{what} length {got} does not match agent count {expected}")]
    AgentCountMismatch {
        expected: usize,
        got:      usize,
        what:     &'static str,
    },

    #[error("initial position of {agent} at {position} lies outside the domain")]
    PositionOutOfBounds {
        agent:    AgentId,
        position: Point,
    },
}

pub type SimResult<T> = Result<T, SimError>;
