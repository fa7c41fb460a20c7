//! Emissive, specular and normal map derivation.

use image::{GrayImage, Rgba, RgbaImage};

use crate::luma::{luminance, pixel_luma};

/// Height (in luminance units) of the normal's Z component before
/// normalization. Gradients are measured on the same 0-255 scale.
const NORMAL_Z: f32 = 255.0;

/// Keep pixels brighter than `threshold`, black out the rest.
///
/// Kept pixels retain their RGB; every output pixel is opaque.
pub fn emissive(src: &RgbaImage, threshold: u8) -> RgbaImage {
    let mut out = RgbaImage::new(src.width(), src.height());
    for (dst, px) in out.pixels_mut().zip(src.pixels()) {
        *dst = if pixel_luma(px) > threshold {
            Rgba([px[0], px[1], px[2], 255])
        } else {
            Rgba([0, 0, 0, 255])
        };
    }
    out
}

/// Grey specular map: luminance scaled by `contrast`, saturating at white.
pub fn specular(src: &RgbaImage, contrast: f32) -> RgbaImage {
    let mut out = RgbaImage::new(src.width(), src.height());
    for (dst, px) in out.pixels_mut().zip(src.pixels()) {
        let v = (pixel_luma(px) as f32 * contrast).round().clamp(0.0, 255.0) as u8;
        *dst = Rgba([v, v, v, 255]);
    }
    out
}

/// Tangent-space normal map from luminance treated as height.
///
/// Gradients use central differences inside the image and one-sided
/// differences on the edges. `strength` scales the slopes; `flip_y` selects
/// the opposite green-channel convention (DirectX vs OpenGL).
pub fn normal(src: &RgbaImage, strength: f32, flip_y: bool) -> RgbaImage {
    let height_field = luminance(src);
    let (width, height) = height_field.dimensions();

    let mut out = RgbaImage::new(width, height);
    for y in 0..height {
        for x in 0..width {
            let gx = gradient(&height_field, x, y, Axis::X);
            let gy = gradient(&height_field, x, y, Axis::Y);

            let nx = -gx * strength;
            let ny = if flip_y { gy * strength } else { -gy * strength };
            let [nx, ny, nz] = normalize(nx, ny, NORMAL_Z);

            out.put_pixel(
                x,
                y,
                Rgba([to_signed_byte(nx), to_signed_byte(ny), to_unsigned_byte(nz), 255]),
            );
        }
    }
    out
}

#[derive(Clone, Copy)]
enum Axis {
    X,
    Y,
}

/// Finite difference of the height field at `(x, y)` along `axis`.
fn gradient(field: &GrayImage, x: u32, y: u32, axis: Axis) -> f32 {
    let (pos, len) = match axis {
        Axis::X => (x, field.width()),
        Axis::Y => (y, field.height()),
    };
    if len < 2 {
        return 0.0;
    }

    let sample = |p: u32| -> f32 {
        match axis {
            Axis::X => field.get_pixel(p, y)[0] as f32,
            Axis::Y => field.get_pixel(x, p)[0] as f32,
        }
    };

    if pos == 0 {
        sample(1) - sample(0)
    } else if pos == len - 1 {
        sample(pos) - sample(pos - 1)
    } else {
        (sample(pos + 1) - sample(pos - 1)) / 2.0
    }
}

/// Unit vector, falling back to straight up when the input vanishes.
fn normalize(x: f32, y: f32, z: f32) -> [f32; 3] {
    let len = (x * x + y * y + z * z).sqrt();
    if !len.is_normal() {
        return [0.0, 0.0, 1.0];
    }
    [x / len, y / len, z / len]
}

/// Map [-1, 1] to [0, 255].
fn to_signed_byte(n: f32) -> u8 {
    ((n + 1.0) * 127.5).round().clamp(0.0, 255.0) as u8
}

/// Map [0, 1] to [0, 255].
fn to_unsigned_byte(n: f32) -> u8 {
    (n * 255.0).round().clamp(0.0, 255.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flat(value: u8) -> RgbaImage {
        RgbaImage::from_pixel(6, 5, Rgba([value, value, value, 128]))
    }

    /// Brightness rising to the right.
    fn ramp() -> RgbaImage {
        RgbaImage::from_fn(8, 4, |x, _| {
            let v = (x * 30) as u8;
            Rgba([v, v, v, 255])
        })
    }

    #[test]
    fn test_emissive_threshold() {
        let mut src = RgbaImage::new(2, 1);
        src.put_pixel(0, 0, Rgba([255, 255, 255, 255]));
        src.put_pixel(1, 0, Rgba([100, 100, 100, 255]));

        let out = emissive(&src, 200);
        assert_eq!(out.get_pixel(0, 0), &Rgba([255, 255, 255, 255]));
        assert_eq!(out.get_pixel(1, 0), &Rgba([0, 0, 0, 255]));
    }

    #[test]
    fn test_emissive_is_opaque_and_strict() {
        let src = RgbaImage::from_pixel(1, 1, Rgba([200, 200, 200, 10]));
        assert_eq!(emissive(&src, 199).get_pixel(0, 0), &Rgba([200, 200, 200, 255]));
        assert_eq!(emissive(&src, 200).get_pixel(0, 0), &Rgba([0, 0, 0, 255]));
    }

    #[test]
    fn test_specular_contrast() {
        let out = specular(&flat(100), 1.5);
        assert_eq!(out.get_pixel(0, 0), &Rgba([150, 150, 150, 255]));

        let out = specular(&flat(101), 0.5);
        assert_eq!(out.get_pixel(3, 3), &Rgba([51, 51, 51, 255]));

        let out = specular(&flat(200), 3.0);
        assert_eq!(out.get_pixel(5, 4), &Rgba([255, 255, 255, 255]));
    }

    #[test]
    fn test_flat_normal_points_up() {
        for strength in [0.1, 2.0, 10.0] {
            for flip_y in [false, true] {
                let out = normal(&flat(77), strength, flip_y);
                assert!(out.pixels().all(|p| *p == Rgba([128, 128, 255, 255])));
            }
        }
    }

    #[test]
    fn test_ramp_tilts_left() {
        let out = normal(&ramp(), 2.0, false);
        let px = out.get_pixel(4, 2);
        // Height rises along +x, so the normal leans towards -x.
        assert!(px[0] < 128);
        assert_eq!(px[1], 128);
        assert!(px[2] < 255);
    }

    #[test]
    fn test_flip_y_mirrors_green() {
        let src = RgbaImage::from_fn(4, 8, |_, y| {
            let v = (y * 30) as u8;
            Rgba([v, v, v, 255])
        });
        let a = normal(&src, 1.0, false);
        let b = normal(&src, 1.0, true);
        let (ga, gb) = (a.get_pixel(1, 4)[1] as i32, b.get_pixel(1, 4)[1] as i32);
        assert!(ga < 128 && gb > 128);
        assert!((ga - 128 + gb - 128).abs() <= 1);
    }

    #[test]
    fn test_edges_use_one_sided_difference() {
        let field = luminance(&ramp());
        assert_eq!(gradient(&field, 0, 0, Axis::X), 30.0);
        assert_eq!(gradient(&field, 7, 0, Axis::X), 30.0);
        assert_eq!(gradient(&field, 3, 0, Axis::X), 30.0);
        assert_eq!(gradient(&field, 3, 0, Axis::Y), 0.0);
    }

    #[test]
    fn test_single_pixel() {
        let src = RgbaImage::from_pixel(1, 1, Rgba([9, 9, 9, 255]));
        assert_eq!(normal(&src, 5.0, false).get_pixel(0, 0), &Rgba([128, 128, 255, 255]));
    }

    #[test]
    fn test_normalize_guard() {
        assert_eq!(normalize(0.0, 0.0, 0.0), [0.0, 0.0, 1.0]);
    }
}
