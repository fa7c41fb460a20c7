//! Luminance conversion.

use image::{GrayImage, Luma, Rgba, RgbaImage};

/// ITU-R 601 luma of one pixel, alpha ignored.
#[inline]
pub(crate) fn pixel_luma(px: &Rgba<u8>) -> u8 {
    let [r, g, b, _] = px.0;
    ((r as u32 * 299 + g as u32 * 587 + b as u32 * 114 + 500) / 1000) as u8
}

/// Convert an RGBA image to 8-bit luminance.
pub fn luminance(src: &RgbaImage) -> GrayImage {
    GrayImage::from_fn(src.width(), src.height(), |x, y| {
        Luma([pixel_luma(src.get_pixel(x, y))])
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extremes() {
        assert_eq!(pixel_luma(&Rgba([0, 0, 0, 0])), 0);
        assert_eq!(pixel_luma(&Rgba([255, 255, 255, 0])), 255);
    }

    #[test]
    fn test_green_dominates() {
        assert_eq!(pixel_luma(&Rgba([0, 255, 0, 255])), 150);
        assert_eq!(pixel_luma(&Rgba([0, 0, 255, 255])), 29);
    }

    #[test]
    fn test_alpha_ignored() {
        let a = pixel_luma(&Rgba([10, 100, 200, 0]));
        let b = pixel_luma(&Rgba([10, 100, 200, 255]));
        assert_eq!(a, b);
    }
}
