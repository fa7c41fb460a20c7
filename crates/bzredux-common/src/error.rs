//! Error types for bzredux-common.

use thiserror::Error;

/// Common error type for BZRedux operations.
#[derive(Debug, Error)]
pub enum Error {
    /// Fewer bytes available than the format requires.
    #[error("truncated data: needed {needed} bytes but only {available} available")]
    TruncatedData { needed: usize, available: usize },

    /// A hex colour string could not be parsed.
    #[error("invalid colour: {0:?}")]
    InvalidColor(String),
}

/// Result type alias using the common Error type.
pub type Result<T> = std::result::Result<T, Error>;
