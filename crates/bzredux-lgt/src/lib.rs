//! LGT terrain lightmap handling for Battlezone 98 Redux.
//!
//! A lightmap is a sequence of 256×256 8-bit luminance tiles ("zones"):
//!
//! - Tile 0: the border tile, a constant colour used outside the map
//! - Tiles 1..: map zones in row-major order, stored bottom row first
//!
//! The file does not record the grid width. Square maps are inferred from the
//! zone count; other shapes need a width hint, usually read from the map's
//! `.trn` terrain description (see [`trn`]).
//!
//! # Example
//!
//! ```no_run
//! use bzredux_lgt::{decode, encode};
//!
//! let data = std::fs::read("misn01.lgt")?;
//! let lightmap = decode(&data, 0)?;
//! lightmap.image.save("misn01.png")?;
//!
//! let packed = encode(&lightmap.image, Some(lightmap.border_color))?;
//! std::fs::write("misn01_repacked.lgt", packed)?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod codec;
mod error;
mod grid;
pub mod trn;

pub use codec::{decode, encode, Lightmap};
pub use error::{Error, Result};
pub use grid::LightmapGrid;

/// Edge length of one zone in pixels.
pub const ZONE_RES: u32 = 256;

/// Size of one zone tile in bytes.
pub const ZONE_BYTES: usize = (ZONE_RES * ZONE_RES) as usize;
