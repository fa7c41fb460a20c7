//! Error types for DDS and DXTBZ2 handling.

use thiserror::Error;

/// Errors that can occur when working with DDS and DXTBZ2 files.
#[derive(Debug, Error)]
pub enum Error {
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Common library error.
    #[error("{0}")]
    Common(#[from] bzredux_common::Error),

    /// Invalid DDS magic.
    #[error("invalid DDS magic: expected 'DDS ', got {0:?}")]
    InvalidMagic([u8; 4]),

    /// Invalid DDS header.
    #[error("invalid DDS header: {0}")]
    InvalidHeader(String),

    /// Legacy header fields are inconsistent.
    #[error("malformed DXTBZ2 header: {0}")]
    MalformedHeader(String),

    /// The legacy container declares no compressed data.
    #[error("DXTBZ2 payload is empty")]
    EmptyPayload,
}

/// Result type for DDS operations.
pub type Result<T> = std::result::Result<T, Error>;
