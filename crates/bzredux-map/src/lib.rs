//! MAP tile texture handling for Battlezone 98 Redux.
//!
//! Terrain and object textures are stored as `.map` files:
//!
//! - 2 bytes: row size in bytes
//! - 2 bytes: pixel format tag (see [`MapFormat`])
//! - 2 bytes: height in rows
//! - 2 bytes: reserved, always zero
//! - N bytes: pixel rows
//!
//! The width is never stored; it is the row size divided by the format's
//! bytes per pixel. Indexed textures resolve through the active
//! [`Palette`](bzredux_act::Palette); 32-bit textures are stored B,G,R,A.
//!
//! # Example
//!
//! ```no_run
//! use bzredux_act::Palette;
//! use bzredux_map::{decode, encode};
//!
//! let data = std::fs::read("grass01.map")?;
//! let image = decode(&data, &Palette::default())?;
//! image.save("grass01.png")?;
//!
//! let packed = encode(&image)?;
//! std::fs::write("grass01_repacked.map", packed)?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod codec;
mod error;
mod header;
mod scale;

pub use codec::{decode, encode};
pub use error::{Error, Result};
pub use header::{MapFormat, MapHeader};
pub use scale::{resize_square, MapScale};
