//! Error types for palette handling.

use thiserror::Error;

/// Errors that can occur when working with palettes.
#[derive(Debug, Error)]
pub enum Error {
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Common library error.
    #[error("{0}")]
    Common(#[from] bzredux_common::Error),

    /// The source image could not be decoded.
    #[error("image error: {0}")]
    Image(#[from] image::ImageError),

    /// The source PNG could not be decoded.
    #[error("PNG error: {0}")]
    Png(#[from] png::DecodingError),
}

/// Result type for palette operations.
pub type Result<T> = std::result::Result<T, Error>;
