//! Error types for the conversion pipeline.

use thiserror::Error;

/// Errors that can occur while converting asset files.
#[derive(Debug, Error)]
pub enum Error {
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Palette error.
    #[error("palette: {0}")]
    Act(#[from] bzredux_act::Error),

    /// MAP codec error.
    #[error("MAP: {0}")]
    Map(#[from] bzredux_map::Error),

    /// Lightmap codec error.
    #[error("LGT: {0}")]
    Lgt(#[from] bzredux_lgt::Error),

    /// DXTBZ2 or DDS error.
    #[error("DDS: {0}")]
    Dds(#[from] bzredux_dds::Error),

    /// Image decoding or encoding error.
    #[error("image error: {0}")]
    Image(#[from] image::ImageError),

    /// The external texture encoder could not be run or did not succeed.
    #[error("{tool} failed: {reason}")]
    ExternalToolFailure { tool: String, reason: String },
}

/// Result type for conversion operations.
pub type Result<T> = std::result::Result<T, Error>;
