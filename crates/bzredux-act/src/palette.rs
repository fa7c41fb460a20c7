//! Palette model and `.act` serialization.

use std::fmt;
use std::fs;
use std::path::Path;

use bzredux_common::{BinaryReader, IntoBytes, Rgb};

use crate::moon::MOON;
use crate::{Result, ACT_SIZE, PALETTE_LEN};

/// A 256-entry colour table.
///
/// Indexed pixel value `i` maps to entry `i`. The length is fixed by the type,
/// so every palette can resolve every index.
#[derive(Clone, PartialEq, Eq)]
pub struct Palette {
    colors: [Rgb; PALETTE_LEN],
}

impl Palette {
    /// Index of the global fog (horizon transition) colour.
    pub const FOG_INDEX: u8 = 209;
    /// Index of the sky clear colour and sniper-scope tint.
    pub const SKY_INDEX: u8 = 223;

    /// Create a palette from a full colour table.
    pub const fn new(colors: [Rgb; PALETTE_LEN]) -> Self {
        Self { colors }
    }

    /// The built-in Moon palette.
    pub const fn moon() -> Self {
        Self::new(MOON)
    }

    /// Parse a palette from `.act` bytes.
    ///
    /// Entry `i` is read from offset `3 * i`. Bytes past the first 768 are
    /// ignored.
    pub fn load(data: &[u8]) -> Result<Self> {
        let mut reader = BinaryReader::new(data);
        let colors: [Rgb; PALETTE_LEN] = reader.read_struct()?;
        log::debug!(
            "loaded palette ({} bytes, {} trailing)",
            data.len(),
            reader.remaining()
        );
        Ok(Self { colors })
    }

    /// Read a palette from an `.act` file.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let data = fs::read(path)?;
        Self::load(&data)
    }

    /// Serialize to exactly 768 bytes of R,G,B triples in index order.
    pub fn save(&self) -> Vec<u8> {
        let bytes = self.colors.as_bytes().to_vec();
        debug_assert_eq!(bytes.len(), ACT_SIZE);
        bytes
    }

    /// Write the palette to an `.act` file.
    pub fn write<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        fs::write(path, self.save())?;
        Ok(())
    }

    /// Build a palette from a packed RGB colour table.
    ///
    /// Up to 256 entries are copied verbatim; missing entries are black and a
    /// trailing partial triple is dropped.
    pub fn from_color_table(table: &[u8]) -> Self {
        let mut colors = [Rgb::BLACK; PALETTE_LEN];
        for (color, rgb) in colors.iter_mut().zip(table.chunks_exact(3)) {
            *color = Rgb::new(rgb[0], rgb[1], rgb[2]);
        }
        Self { colors }
    }

    /// Get the colour at an index.
    #[inline]
    pub fn get(&self, index: u8) -> Rgb {
        self.colors[index as usize]
    }

    /// Replace the colour at an index.
    #[inline]
    pub fn set(&mut self, index: u8, color: Rgb) {
        self.colors[index as usize] = color;
    }

    /// All 256 colours in index order.
    pub fn colors(&self) -> &[Rgb; PALETTE_LEN] {
        &self.colors
    }

    /// Resolve one index to an opaque RGBA pixel.
    #[inline]
    pub fn rgba(&self, index: u8) -> [u8; 4] {
        self.get(index).to_rgba()
    }

    /// Resolve a buffer of indices to opaque RGBA pixels.
    pub fn expand(&self, indices: &[u8]) -> Vec<u8> {
        let mut out = Vec::with_capacity(indices.len() * 4);
        for &index in indices {
            out.extend_from_slice(&self.rgba(index));
        }
        out
    }

    /// What the game uses an index for.
    pub fn describe(index: u8) -> PaletteRole {
        match index {
            Self::FOG_INDEX => PaletteRole::Fog,
            Self::SKY_INDEX => PaletteRole::Sky,
            0..=95 => PaletteRole::Objects,
            96..=222 => PaletteRole::Terrain,
            _ => PaletteRole::ObjectsExtended,
        }
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::moon()
    }
}

impl fmt::Debug for Palette {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Palette")
            .field("first", &self.colors[0])
            .field("fog", &self.get(Self::FOG_INDEX))
            .field("sky", &self.get(Self::SKY_INDEX))
            .finish_non_exhaustive()
    }
}

/// How the game engine uses a palette index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaletteRole {
    /// Unit and building textures (0-95).
    Objects,
    /// Planet-specific terrain and rock smoothing (96-222).
    Terrain,
    /// Global fog / horizon colour (209).
    Fog,
    /// Sky clear colour and sniper-scope lens tint (223).
    Sky,
    /// Extended object range (224-255).
    ObjectsExtended,
}

impl fmt::Display for PaletteRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            PaletteRole::Objects => "objects (primary)",
            PaletteRole::Terrain => "planet-specific terrain",
            PaletteRole::Fog => "global fog colour",
            PaletteRole::Sky => "sky & sniper scope",
            PaletteRole::ObjectsExtended => "objects (secondary)",
        };
        f.write_str(text)
    }
}
