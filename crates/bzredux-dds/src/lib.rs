//! DXTBZ2 legacy texture handling for Battlezone 98 Redux.
//!
//! The original game shipped block-compressed textures as `.dxtbz2`:
//!
//! - 24 bytes: legacy header (see [`DxtBz2Header`])
//! - 4 bytes: size of the top mip level
//! - N bytes: DXT1 or DXT5 blocks for the top mip level
//! - further mip levels, which are not read
//!
//! The compressed blocks are never decoded here. They are re-wrapped in a
//! standard DDS container so other tools can consume them unchanged.
//!
//! # Example
//!
//! ```no_run
//! use bzredux_dds::{wrap_as_dds, DxtBz2};
//!
//! let data = std::fs::read("avtank00.dxtbz2")?;
//! let texture = DxtBz2::parse(&data)?;
//! let dds = wrap_as_dds(&texture.header, texture.payload, texture.has_alpha)?;
//! std::fs::write("avtank00.dds", dds)?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod dxtbz2;
mod error;
mod header;
mod wrap;

pub use dxtbz2::{DxtBz2, DxtBz2Header};
pub use error::{Error, Result};
pub use header::{block_size, mipmap_size, DdsFile, DdsHeader, DdsPixelFormat, FourCC};
pub use wrap::{uncompressed_dds, wrap_as_dds};

/// DDS file magic bytes ("DDS ").
pub const DDS_MAGIC: &[u8; 4] = b"DDS ";
