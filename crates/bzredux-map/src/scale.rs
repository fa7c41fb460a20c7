//! Square rescaling applied around MAP conversion.

use std::fmt;
use std::str::FromStr;

use image::imageops::{self, FilterType};
use image::RgbaImage;

use crate::Error;

/// Square target resolutions offered for MAP conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MapScale {
    S128,
    S256,
    S512,
    S1024,
}

impl MapScale {
    /// Edge length in pixels.
    pub const fn size(self) -> u32 {
        match self {
            MapScale::S128 => 128,
            MapScale::S256 => 256,
            MapScale::S512 => 512,
            MapScale::S1024 => 1024,
        }
    }
}

impl fmt::Display for MapScale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{0}x{0}", self.size())
    }
}

impl FromStr for MapScale {
    type Err = Error;

    /// Accepts `512` or `512x512`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let edge = s.split('x').next().unwrap_or_default().trim();
        match edge {
            "128" => Ok(MapScale::S128),
            "256" => Ok(MapScale::S256),
            "512" => Ok(MapScale::S512),
            "1024" => Ok(MapScale::S1024),
            _ => Err(Error::InvalidScale(s.to_string())),
        }
    }
}

/// Resize to `scale × scale` with a Lanczos filter.
///
/// Both axes are scaled to the same edge regardless of the source aspect.
pub fn resize_square(image: &RgbaImage, scale: MapScale) -> RgbaImage {
    let size = scale.size();
    if image.dimensions() == (size, size) {
        return image.clone();
    }
    imageops::resize(image, size, size, FilterType::Lanczos3)
}
