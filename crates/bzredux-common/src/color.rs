//! 24-bit RGB colour.
//!
//! Palettes store colours as packed R,G,B byte triples. The textual form is
//! the `#rrggbb` hex code used by the palette editor.

use std::fmt;
use std::str::FromStr;

use zerocopy::{FromBytes, Immutable, IntoBytes, KnownLayout};

use crate::Error;

/// An 8-bit-per-channel RGB colour, laid out exactly as in an `.act` file.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, FromBytes, IntoBytes, Immutable, KnownLayout)]
#[repr(C)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// Opaque black.
    pub const BLACK: Self = Self::new(0, 0, 0);

    /// Create a colour from its channels.
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// The colour as an opaque RGBA quadruple.
    #[inline]
    pub const fn to_rgba(self) -> [u8; 4] {
        [self.r, self.g, self.b, 255]
    }
}

impl fmt::Debug for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Rgb({})", self)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl FromStr for Rgb {
    type Err = Error;

    /// Parse `#rrggbb` or `rrggbb`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let hex = s.trim().trim_start_matches('#');
        if hex.len() != 6 || !hex.is_ascii() {
            return Err(Error::InvalidColor(s.to_string()));
        }

        let channel = |start: usize| {
            u8::from_str_radix(&hex[start..start + 2], 16)
                .map_err(|_| Error::InvalidColor(s.to_string()))
        };

        Ok(Self::new(channel(0)?, channel(2)?, channel(4)?))
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Rgb {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Rgb {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_roundtrip() {
        let color: Rgb = "#5d6d7e".parse().unwrap();
        assert_eq!(color, Rgb::new(0x5d, 0x6d, 0x7e));
        assert_eq!(color.to_string(), "#5d6d7e");
    }

    #[test]
    fn test_hex_without_hash() {
        assert_eq!("FFFFFF".parse::<Rgb>().unwrap(), Rgb::new(255, 255, 255));
    }

    #[test]
    fn test_invalid_hex() {
        assert!("#12345".parse::<Rgb>().is_err());
        assert!("#gg0000".parse::<Rgb>().is_err());
        assert!("#ééé".parse::<Rgb>().is_err());
    }

    #[test]
    fn test_layout_is_three_bytes() {
        assert_eq!(std::mem::size_of::<Rgb>(), 3);
        assert_eq!(Rgb::new(1, 2, 3).as_bytes(), &[1, 2, 3]);
    }
}
