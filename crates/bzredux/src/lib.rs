//! BZRedux - Battlezone 98 Redux asset conversion library.
//!
//! This crate provides a unified interface to the BZRedux codec crates and
//! the file-level conversion pipeline built on them.
//!
//! # Crates
//!
//! - [`bzredux_common`] - Binary reading and shared colour types
//! - [`bzredux_act`] - ACT palettes, including the built-in Moon palette
//! - [`bzredux_map`] - MAP tile textures
//! - [`bzredux_lgt`] - LGT terrain lightmaps
//! - [`bzredux_dds`] - DXTBZ2 legacy textures and DDS wrapping
//! - [`bzredux_gen`] - Emissive, specular and normal map generation
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//! use bzredux::prelude::*;
//!
//! let options = TextureOptions {
//!     generate: GenerateOptions::all(),
//!     ..TextureOptions::default()
//! };
//! let outcome = process_texture(Path::new("hull_d.png"), None, &options, &Texconv::default())?;
//! println!("{}", outcome);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod convert;
mod encoder;
mod error;
mod texture;

// Re-export all sub-crates
pub use bzredux_act as act;
pub use bzredux_common as common;
pub use bzredux_dds as dds;
pub use bzredux_gen as gen;
pub use bzredux_lgt as lgt;
pub use bzredux_map as map;

pub use convert::{lgt_to_png, map_to_png, output_path, png_to_lgt, png_to_map};
pub use encoder::{BlockFormat, Texconv, TextureEncoder};
pub use error::{Error, Result};
pub use texture::{
    convert_dxtbz2, has_alpha, process_texture, save_image, Outcome, OutputFormat, TextureOptions,
};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::{
        convert_dxtbz2, lgt_to_png, map_to_png, png_to_lgt, png_to_map, process_texture,
        save_image, BlockFormat, Outcome, OutputFormat, Texconv, TextureEncoder, TextureOptions,
    };
    pub use bzredux_act::{Palette, PaletteRole};
    pub use bzredux_common::{BinaryReader, Rgb};
    pub use bzredux_dds::{uncompressed_dds, wrap_as_dds, DdsFile, DxtBz2, FourCC};
    pub use bzredux_gen::{derived_stem, generate, DerivedMapSet, GenerateOptions, MapKind};
    pub use bzredux_lgt::{Lightmap, LightmapGrid};
    pub use bzredux_map::{MapFormat, MapHeader, MapScale};
}

/// Version information.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
