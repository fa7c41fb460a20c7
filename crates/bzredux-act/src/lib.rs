//! ACT palette handling for Battlezone 98 Redux.
//!
//! Indexed textures in the game resolve their pixels through a 256-entry
//! colour table stored as an Adobe Color Table (`.act`):
//!
//! - 768 bytes: 256 × (R, G, B), index 0 first
//!
//! Some tools append a 4-byte trailer (colour count and transparent index);
//! it is ignored on load and never written.
//!
//! # Example
//!
//! ```no_run
//! use bzredux_act::Palette;
//!
//! let mut palette = Palette::open("moon.act")?;
//! palette.set(209, "#5d6d7e".parse()?);
//! palette.write("moon_fog.act")?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod error;
mod import;
mod moon;
mod palette;

pub use error::{Error, Result};
pub use palette::{Palette, PaletteRole};

/// Number of entries in a palette.
pub const PALETTE_LEN: usize = 256;

/// Size of a serialized palette in bytes.
pub const ACT_SIZE: usize = PALETTE_LEN * 3;
