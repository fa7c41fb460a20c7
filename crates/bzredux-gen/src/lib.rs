//! Derived texture map generation.
//!
//! Redux materials pair a diffuse texture with optional emissive (`_e`),
//! specular (`_s`) and normal (`_n`) maps. This crate approximates all three
//! from the diffuse texture alone:
//!
//! - [`emissive`] - keeps only pixels brighter than a threshold
//! - [`specular`] - contrast-scaled luminance
//! - [`normal`] - luminance treated as a height field
//!
//! All outputs are opaque RGBA images of the source size.
//!
//! # Example
//!
//! ```no_run
//! use bzredux_gen::{derived_stem, generate, GenerateOptions, MapKind};
//!
//! let source = image::open("rock_d.png")?.into_rgba8();
//! let maps = generate(&source, &GenerateOptions::all());
//! if let Some(normal) = maps.normal {
//!     normal.save(format!("{}.png", derived_stem("rock_d", MapKind::Normal)))?;
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod luma;
mod maps;
mod naming;
mod options;

pub use luma::luminance;
pub use maps::{emissive, normal, specular};
pub use naming::{derived_stem, MapKind};
pub use options::{generate, DerivedMapSet, GenerateOptions};
