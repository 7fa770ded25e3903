//! Framework error type.
//!
//! Downstream crates define their own error enums and wrap `RinkError` as one
//! variant via `#[from]`.

use thiserror::Error;

/// The top-level error type for `rink-core`.
#[derive(Debug, Error)]
pub enum RinkError {
    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for `rink-core`.
pub type RinkResult<T> = Result<T, RinkError>;
