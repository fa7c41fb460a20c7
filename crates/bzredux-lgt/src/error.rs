//! Error types for lightmap handling.

use thiserror::Error;

/// Errors that can occur when working with LGT files.
#[derive(Debug, Error)]
pub enum Error {
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Common library error.
    #[error("{0}")]
    Common(#[from] bzredux_common::Error),

    /// The file cannot hold a border tile plus at least one zone.
    #[error("lightmap too small: {0} bytes holds no map zones")]
    FileTooSmall(usize),

    /// Image dimensions are not whole zones.
    #[error("image {width}x{height} is not a multiple of the {zone}-pixel zone size")]
    UnalignedDimensions { width: u32, height: u32, zone: u32 },

    /// The grid width cannot lay out the zones.
    #[error("grid width {width} leaves no complete row for {zones} zones")]
    InvalidGrid { width: u32, zones: u32 },
}

/// Result type for lightmap operations.
pub type Result<T> = std::result::Result<T, Error>;
