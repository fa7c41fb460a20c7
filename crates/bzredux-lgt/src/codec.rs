//! Lightmap decoding and encoding.

use bzredux_common::BinaryReader;
use image::{imageops, GrayImage};

use crate::grid::LightmapGrid;
use crate::{Error, Result, ZONE_BYTES, ZONE_RES};

/// A decoded lightmap.
#[derive(Debug, Clone)]
pub struct Lightmap {
    /// First byte of the border tile, kept for re-encoding.
    pub border_color: u8,
    /// Assembled luminance canvas, north up.
    pub image: GrayImage,
    /// Zone layout the canvas was assembled with.
    pub grid: LightmapGrid,
}

/// Decode an LGT file.
///
/// `grid_width_hint` is the map width in zones, or zero to assume a square
/// map. Zones are stored bottom row first, so the assembled canvas is flipped
/// vertically before it is returned.
pub fn decode(data: &[u8], grid_width_hint: u32) -> Result<Lightmap> {
    let tiles = data.len() / ZONE_BYTES;
    if tiles <= 1 {
        return Err(Error::FileTooSmall(data.len()));
    }

    let zone_count = u32::try_from(tiles - 1).map_err(|_| Error::FileTooSmall(data.len()))?;
    let grid = LightmapGrid::infer(zone_count, grid_width_hint)?;

    log::debug!(
        "decoding LGT: {} zones as {}x{} grid",
        zone_count,
        grid.width,
        grid.height
    );

    let mut reader = BinaryReader::new(data);
    let border = reader.read_bytes(ZONE_BYTES)?;
    let border_color = border[0];

    let (canvas_width, canvas_height) = grid.pixel_dimensions();
    let mut canvas = GrayImage::new(canvas_width, canvas_height);

    for y in 0..grid.height {
        for x in 0..grid.width {
            let tile = reader.read_bytes(ZONE_BYTES)?;
            let zone = GrayImage::from_raw(ZONE_RES, ZONE_RES, tile.to_vec())
                .ok_or(Error::FileTooSmall(data.len()))?;
            imageops::replace(
                &mut canvas,
                &zone,
                (x * ZONE_RES) as i64,
                (y * ZONE_RES) as i64,
            );
        }
    }

    imageops::flip_vertical_in_place(&mut canvas);

    Ok(Lightmap {
        border_color,
        image: canvas,
        grid,
    })
}

/// Encode a luminance image as an LGT file.
///
/// Both dimensions must be whole zones. Without an explicit `border_color`
/// the border tile takes the colour of the image's bottom-left pixel, which
/// is the first pixel in storage order.
pub fn encode(image: &GrayImage, border_color: Option<u8>) -> Result<Vec<u8>> {
    let (width, height) = image.dimensions();
    if width == 0 || height == 0 || width % ZONE_RES != 0 || height % ZONE_RES != 0 {
        return Err(Error::UnalignedDimensions {
            width,
            height,
            zone: ZONE_RES,
        });
    }

    let flipped = imageops::flip_vertical(image);
    let (grid_width, grid_height) = (width / ZONE_RES, height / ZONE_RES);
    let border = border_color.unwrap_or_else(|| flipped.get_pixel(0, 0)[0]);

    log::debug!(
        "encoding LGT: {}x{} zones, border {}",
        grid_width,
        grid_height,
        border
    );

    let zone_count = (grid_width * grid_height) as usize;
    let mut out = Vec::with_capacity((zone_count + 1) * ZONE_BYTES);
    out.resize(ZONE_BYTES, border);

    for y in 0..grid_height {
        for x in 0..grid_width {
            let zone = imageops::crop_imm(&flipped, x * ZONE_RES, y * ZONE_RES, ZONE_RES, ZONE_RES)
                .to_image();
            out.extend_from_slice(zone.as_raw());
        }
    }

    Ok(out)
}
