use thiserror::Error;

#[derive(Debug, Error)]
pub enum LearningError {
    #[error("learning engine configuration error: {0}")]
    Config(String),
}

pub type LearningResult<T> = Result<T, LearningError>;
