//! MAP pixel decoding and encoding.

use bzredux_act::Palette;
use bzredux_common::BinaryReader;
use image::RgbaImage;

use crate::header::{MapFormat, MapHeader};
use crate::{Error, Result};

/// Decode a MAP file into an RGBA image.
///
/// Indexed pixels are resolved through `palette` and come out opaque. Every
/// other format tag is read as 32-bit B,G,R,A pixels and channel-swapped.
pub fn decode(data: &[u8], palette: &Palette) -> Result<RgbaImage> {
    let mut reader = BinaryReader::new(data);
    let header = MapHeader::parse(&mut reader)?;

    let width = header.width();
    let height = header.height as u32;
    let pixel_count = width as usize * height as usize;

    log::debug!(
        "decoding MAP {}x{} format {:?} ({} bytes)",
        width,
        height,
        header.format,
        data.len()
    );

    let rgba = match header.format {
        MapFormat::Indexed8 => {
            let indices = reader.read_bytes(pixel_count)?;
            palette.expand(indices)
        }
        _ => {
            let bgra = reader.read_bytes(pixel_count * 4)?;
            swap_red_blue(bgra)
        }
    };

    RgbaImage::from_raw(width, height, rgba)
        .ok_or_else(|| Error::MalformedHeader("pixel buffer size mismatch".into()))
}

/// Encode an RGBA image as a 32-bit MAP file.
///
/// The output always uses [`MapFormat::Argb8888`] with pixels stored B,G,R,A.
pub fn encode(image: &RgbaImage) -> Result<Vec<u8>> {
    let (width, height) = image.dimensions();
    let too_large = || Error::TooLarge { width, height };

    let row_bytes = width
        .checked_mul(4)
        .and_then(|r| u16::try_from(r).ok())
        .ok_or_else(too_large)?;
    let height_field = u16::try_from(height).map_err(|_| too_large())?;

    let header = MapHeader {
        row_bytes,
        format: MapFormat::Argb8888,
        height: height_field,
        reserved: 0,
    };

    let mut out = Vec::with_capacity(MapHeader::SIZE + image.as_raw().len());
    header.write_to(&mut out)?;
    out.extend_from_slice(&swap_red_blue(image.as_raw()));
    Ok(out)
}

/// Swap the first and third byte of every 4-byte pixel (BGRA <-> RGBA).
fn swap_red_blue(pixels: &[u8]) -> Vec<u8> {
    let mut out = pixels.to_vec();
    for px in out.chunks_exact_mut(4) {
        px.swap(0, 2);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use bzredux_common::Rgb;
    use image::Rgba;

    fn header(row_bytes: u16, format: u16, height: u16) -> Vec<u8> {
        let mut out = Vec::new();
        for field in [row_bytes, format, height, 0] {
            out.extend_from_slice(&field.to_le_bytes());
        }
        out
    }

    #[test]
    fn test_indexed_decode() {
        let mut data = header(256, 0, 4);
        data.extend((0..1024u32).map(|i| (i % 3) as u8));

        let mut palette = Palette::default();
        palette.set(0, Rgb::new(0, 0, 0));
        palette.set(1, Rgb::new(10, 20, 30));

        let image = decode(&data, &palette).unwrap();
        assert_eq!(image.dimensions(), (256, 4));
        assert_eq!(image.get_pixel(0, 0), &Rgba([0, 0, 0, 255]));
        assert_eq!(image.get_pixel(1, 0), &Rgba([10, 20, 30, 255]));
    }

    #[test]
    fn test_indexed_uses_caller_palette() {
        let mut data = header(2, 0, 1);
        data.extend_from_slice(&[7, 7]);

        let mut palette = Palette::default();
        palette.set(7, Rgb::new(1, 2, 3));
        let image = decode(&data, &palette).unwrap();
        assert_eq!(image.get_pixel(1, 0), &Rgba([1, 2, 3, 255]));
    }

    #[test]
    fn test_bgra_decode() {
        let mut data = header(8, 3, 1);
        data.extend_from_slice(&[1, 2, 3, 4, 5, 6, 7, 8]);

        let image = decode(&data, &Palette::default()).unwrap();
        assert_eq!(image.get_pixel(0, 0), &Rgba([3, 2, 1, 4]));
        assert_eq!(image.get_pixel(1, 0), &Rgba([7, 6, 5, 8]));
    }

    #[test]
    fn test_xrgb_read_as_32_bit() {
        let mut data = header(4, 4, 1);
        data.extend_from_slice(&[9, 8, 7, 0]);
        let image = decode(&data, &Palette::default()).unwrap();
        assert_eq!(image.get_pixel(0, 0), &Rgba([7, 8, 9, 0]));
    }

    #[test]
    fn test_rgb565_read_as_32_bit() {
        // Two bytes per pixel in the row stride, four per pixel in the data.
        let mut data = header(8, 2, 1);
        data.extend((0..16u8).map(|i| i * 10));

        let image = decode(&data, &Palette::default()).unwrap();
        assert_eq!(image.dimensions(), (4, 1));
        assert_eq!(image.get_pixel(0, 0), &Rgba([20, 10, 0, 30]));
        assert_eq!(image.get_pixel(3, 0), &Rgba([140, 130, 120, 150]));
    }

    #[test]
    fn test_argb4444_with_16_bit_payload_is_truncated() {
        let mut data = header(8, 1, 1);
        data.extend_from_slice(&[0xAB; 8]);

        let err = decode(&data, &Palette::default()).unwrap_err();
        assert!(matches!(
            err,
            Error::Common(bzredux_common::Error::TruncatedData {
                needed: 16,
                available: 8
            })
        ));
    }

    #[test]
    fn test_truncated_pixels() {
        let mut data = header(256, 0, 4);
        data.extend(std::iter::repeat(0).take(1023));
        let err = decode(&data, &Palette::default()).unwrap_err();
        assert!(matches!(
            err,
            Error::Common(bzredux_common::Error::TruncatedData { .. })
        ));
    }

    #[test]
    fn test_truncated_header() {
        let err = decode(&[0x00, 0x01, 0x03], &Palette::default()).unwrap_err();
        assert!(matches!(err, Error::Common(_)));
    }

    #[test]
    fn test_encode_header() {
        let image = RgbaImage::from_pixel(3, 2, Rgba([10, 20, 30, 40]));
        let data = encode(&image).unwrap();
        assert_eq!(&data[..8], &header(12, 3, 2)[..]);
        assert_eq!(&data[8..12], &[30, 20, 10, 40]);
        assert_eq!(data.len(), 8 + 3 * 2 * 4);
    }

    #[test]
    fn test_argb_roundtrip() {
        let image = RgbaImage::from_fn(17, 5, |x, y| {
            Rgba([x as u8 * 13, y as u8 * 51, (x ^ y) as u8, 255 - x as u8])
        });
        let decoded = decode(&encode(&image).unwrap(), &Palette::default()).unwrap();
        assert_eq!(decoded, image);
    }

    #[test]
    fn test_encode_too_wide() {
        let image = RgbaImage::new(16384, 1);
        assert!(matches!(encode(&image), Err(Error::TooLarge { .. })));
    }
}
