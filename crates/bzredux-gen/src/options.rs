//! Generation parameters and the combined entry point.

use image::RgbaImage;

use crate::maps::{emissive, normal, specular};
use crate::MapKind;

/// Which derived maps to produce and how.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GenerateOptions {
    pub emissive: bool,
    /// Luminance a pixel must exceed to glow.
    pub emissive_threshold: u8,
    pub specular: bool,
    pub specular_contrast: f32,
    pub normal: bool,
    pub normal_strength: f32,
    /// Invert the green channel of normal maps.
    pub flip_y: bool,
}

impl Default for GenerateOptions {
    /// Nothing enabled, default parameters.
    fn default() -> Self {
        Self {
            emissive: false,
            emissive_threshold: 200,
            specular: false,
            specular_contrast: 1.5,
            normal: false,
            normal_strength: 2.0,
            flip_y: false,
        }
    }
}

impl GenerateOptions {
    /// Every map enabled with default parameters.
    pub fn all() -> Self {
        Self {
            emissive: true,
            specular: true,
            normal: true,
            ..Self::default()
        }
    }
}

/// Derived maps of one source image. Disabled maps are `None`.
#[derive(Debug, Clone, Default)]
pub struct DerivedMapSet {
    pub emissive: Option<RgbaImage>,
    pub specular: Option<RgbaImage>,
    pub normal: Option<RgbaImage>,
}

impl DerivedMapSet {
    /// The map of `kind`, if it was generated.
    pub fn get(&self, kind: MapKind) -> Option<&RgbaImage> {
        match kind {
            MapKind::Emissive => self.emissive.as_ref(),
            MapKind::Specular => self.specular.as_ref(),
            MapKind::Normal => self.normal.as_ref(),
        }
    }

    /// Generated maps in [`MapKind::ALL`] order.
    pub fn iter(&self) -> impl Iterator<Item = (MapKind, &RgbaImage)> {
        MapKind::ALL
            .into_iter()
            .filter_map(move |kind| self.get(kind).map(|img| (kind, img)))
    }
}

/// Compute every map enabled in `options`.
pub fn generate(src: &RgbaImage, options: &GenerateOptions) -> DerivedMapSet {
    let set = DerivedMapSet {
        emissive: options
            .emissive
            .then(|| emissive(src, options.emissive_threshold)),
        specular: options
            .specular
            .then(|| specular(src, options.specular_contrast)),
        normal: options
            .normal
            .then(|| normal(src, options.normal_strength, options.flip_y)),
    };
    log::debug!(
        "generated {} derived maps for {}x{} source",
        set.iter().count(),
        src.width(),
        src.height()
    );
    set
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    #[test]
    fn test_default_generates_nothing() {
        let src = RgbaImage::new(4, 4);
        let set = generate(&src, &GenerateOptions::default());
        assert_eq!(set.iter().count(), 0);
    }

    #[test]
    fn test_subset() {
        let src = RgbaImage::from_pixel(4, 4, Rgba([250, 250, 250, 255]));
        let options = GenerateOptions {
            normal: true,
            ..GenerateOptions::default()
        };
        let set = generate(&src, &options);
        assert!(set.emissive.is_none() && set.specular.is_none());
        assert_eq!(set.get(MapKind::Normal).unwrap().get_pixel(1, 1), &Rgba([128, 128, 255, 255]));
    }

    #[test]
    fn test_all_in_order() {
        let src = RgbaImage::from_pixel(2, 2, Rgba([10, 20, 30, 0]));
        let set = generate(&src, &GenerateOptions::all());
        let kinds: Vec<_> = set.iter().map(|(k, _)| k).collect();
        assert_eq!(kinds, MapKind::ALL);
        assert!(set.iter().all(|(_, img)| img.dimensions() == (2, 2)));
    }
}
