//! Common utilities for BZRedux.
//!
//! This crate provides foundational types shared by the format crates:
//!
//! - [`BinaryReader`] - Bounds-checked little-endian reading from byte slices
//! - [`Rgb`] - 24-bit colour used by palettes and fallback colours
//! - [`Error`] - Errors every format can raise (truncated input)

mod color;
mod error;
mod reader;

pub use color::Rgb;
pub use error::{Error, Result};
pub use reader::BinaryReader;

/// Re-export zerocopy traits for convenience
pub use zerocopy::{FromBytes, Immutable, IntoBytes, KnownLayout};
