//! Error types for MAP handling.

use thiserror::Error;

/// Errors that can occur when working with MAP files.
#[derive(Debug, Error)]
pub enum Error {
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Common library error.
    #[error("{0}")]
    Common(#[from] bzredux_common::Error),

    /// Header fields are inconsistent.
    #[error("malformed MAP header: {0}")]
    MalformedHeader(String),

    /// Image too large for the 16-bit header fields.
    #[error("image {width}x{height} does not fit a MAP header")]
    TooLarge { width: u32, height: u32 },

    /// Unrecognised rescale target.
    #[error("invalid scale {0:?}: expected one of 128, 256, 512, 1024")]
    InvalidScale(String),
}

/// Result type for MAP operations.
pub type Result<T> = std::result::Result<T, Error>;
