//! Palette import from arbitrary images.
//!
//! Palette-based PNGs donate their colour table verbatim. Anything else is
//! quantized down to 256 colours. The result is a best-effort convenience and
//! does not round-trip.

use std::fs;
use std::io::Cursor;
use std::path::Path;

use color_quant::NeuQuant;
use image::RgbaImage;

use crate::{Palette, Result, PALETTE_LEN};

const PNG_SIGNATURE: &[u8; 8] = b"\x89PNG\r\n\x1a\n";

/// NeuQuant sampling factor: 1 is slowest and best, 30 fastest.
const QUANT_SAMPLE_FACTOR: i32 = 10;

impl Palette {
    /// Import a palette from an image file.
    pub fn import_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let data = fs::read(path)?;
        Self::import_from_bytes(&data)
    }

    /// Import a palette from encoded image bytes.
    pub fn import_from_bytes(data: &[u8]) -> Result<Self> {
        if let Some(table) = png_color_table(data)? {
            log::debug!("using embedded PNG palette ({} entries)", table.len() / 3);
            return Ok(Self::from_color_table(&table));
        }

        let image = image::load_from_memory(data)?.into_rgba8();
        Ok(Self::quantize(&image))
    }

    /// Quantize an RGBA image to at most 256 colours.
    pub fn quantize(image: &RgbaImage) -> Self {
        if image.as_raw().is_empty() {
            return Self::from_color_table(&[]);
        }

        let quant = NeuQuant::new(QUANT_SAMPLE_FACTOR, PALETTE_LEN, image.as_raw());
        Self::from_color_table(&quant.color_map_rgb())
    }
}

/// The colour table of an indexed PNG, if the data is one.
fn png_color_table(data: &[u8]) -> Result<Option<Vec<u8>>> {
    if !data.starts_with(PNG_SIGNATURE) {
        return Ok(None);
    }

    let reader = png::Decoder::new(Cursor::new(data)).read_info()?;
    let info = reader.info();
    if info.color_type != png::ColorType::Indexed {
        return Ok(None);
    }

    Ok(info.palette.as_ref().map(|p| p.to_vec()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use bzredux_common::Rgb;
    use image::{ImageFormat, Rgba};

    fn indexed_png(table: &[u8]) -> Vec<u8> {
        let mut out = Vec::new();
        {
            let mut encoder = png::Encoder::new(&mut out, 2, 1);
            encoder.set_color(png::ColorType::Indexed);
            encoder.set_depth(png::BitDepth::Eight);
            encoder.set_palette(table.to_vec());
            let mut writer = encoder.write_header().unwrap();
            writer.write_image_data(&[0, 1]).unwrap();
        }
        out
    }

    #[test]
    fn test_import_indexed_png_copies_table() {
        let data = indexed_png(&[10, 20, 30, 40, 50, 60]);
        let palette = Palette::import_from_bytes(&data).unwrap();
        assert_eq!(palette.get(0), Rgb::new(10, 20, 30));
        assert_eq!(palette.get(1), Rgb::new(40, 50, 60));
        assert_eq!(palette.get(2), Rgb::BLACK);
    }

    #[test]
    fn test_import_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("swatch.png");
        std::fs::write(&path, indexed_png(&[1, 2, 3, 250, 251, 252])).unwrap();

        let palette = Palette::import_from_file(&path).unwrap();
        assert_eq!(palette.get(0), Rgb::new(1, 2, 3));
        assert_eq!(palette.get(1), Rgb::new(250, 251, 252));

        let missing = Palette::import_from_file(dir.path().join("none.png"));
        assert!(matches!(missing, Err(crate::Error::Io(_))));
    }

    #[test]
    fn test_import_truecolor_quantizes() {
        let image = RgbaImage::from_pixel(8, 8, Rgba([200, 10, 10, 255]));
        let mut data = Vec::new();
        image
            .write_to(&mut Cursor::new(&mut data), ImageFormat::Png)
            .unwrap();

        let palette = Palette::import_from_bytes(&data).unwrap();
        let near = palette
            .colors()
            .iter()
            .any(|c| c.r.abs_diff(200) < 16 && c.g < 40 && c.b < 40);
        assert!(near, "quantized palette lacks the source colour");
    }

    #[test]
    fn test_quantize_empty_image() {
        let palette = Palette::quantize(&RgbaImage::new(0, 0));
        assert!(palette.colors().iter().all(|c| *c == Rgb::BLACK));
    }

    #[test]
    fn test_import_garbage_fails() {
        assert!(Palette::import_from_bytes(b"not an image").is_err());
    }
}
