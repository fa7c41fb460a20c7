//! File-level converters for MAP and LGT assets.
//!
//! Each converter writes `<stem>.<ext>` either next to its input or into a
//! chosen output directory and returns the path written.

use std::fs;
use std::path::{Path, PathBuf};

use bzredux_act::Palette;
use bzredux_lgt::LightmapGrid;
use bzredux_map::{resize_square, MapScale};

use crate::Result;

/// Where a converter writes the `ext` counterpart of `input`.
pub fn output_path(input: &Path, out_dir: Option<&Path>, ext: &str) -> PathBuf {
    let dir = out_dir
        .or_else(|| input.parent())
        .unwrap_or_else(|| Path::new(""));
    let stem = input.file_stem().unwrap_or_default();
    let mut path = dir.join(stem);
    path.set_extension(ext);
    path
}

/// Decode a `.map` file and save it as PNG, optionally resized.
pub fn map_to_png(
    input: &Path,
    out_dir: Option<&Path>,
    palette: &Palette,
    scale: Option<MapScale>,
) -> Result<PathBuf> {
    let data = fs::read(input)?;
    let mut image = bzredux_map::decode(&data, palette)?;
    if let Some(scale) = scale {
        image = resize_square(&image, scale);
    }

    let out = output_path(input, out_dir, "png");
    image.save(&out)?;
    log::debug!("{} -> {}", input.display(), out.display());
    Ok(out)
}

/// Pack an image file as a 32-bit `.map`, optionally resized first.
pub fn png_to_map(input: &Path, out_dir: Option<&Path>, scale: Option<MapScale>) -> Result<PathBuf> {
    let mut image = image::open(input)?.into_rgba8();
    if let Some(scale) = scale {
        image = resize_square(&image, scale);
    }

    let out = output_path(input, out_dir, "map");
    fs::write(&out, bzredux_map::encode(&image)?)?;
    log::debug!("{} -> {}", input.display(), out.display());
    Ok(out)
}

/// Decode an `.lgt` lightmap and save the assembled canvas as PNG.
///
/// `grid_width_hint` is the map width in zones, zero for square maps.
pub fn lgt_to_png(
    input: &Path,
    out_dir: Option<&Path>,
    grid_width_hint: u32,
) -> Result<(PathBuf, LightmapGrid)> {
    let data = fs::read(input)?;
    let lightmap = bzredux_lgt::decode(&data, grid_width_hint)?;

    let out = output_path(input, out_dir, "png");
    lightmap.image.save(&out)?;
    Ok((out, lightmap.grid))
}

/// Pack a greyscale image as an `.lgt` lightmap.
///
/// Colour images are converted to luminance first.
pub fn png_to_lgt(input: &Path, out_dir: Option<&Path>, border_color: Option<u8>) -> Result<PathBuf> {
    let image = image::open(input)?.into_luma8();
    let packed = bzredux_lgt::encode(&image, border_color)?;

    let out = output_path(input, out_dir, "lgt");
    fs::write(&out, packed)?;
    log::debug!("{} -> {}", input.display(), out.display());
    Ok(out)
}
