//! MAP header structure.

use std::io::{self, Write};

use byteorder::{LittleEndian, WriteBytesExt};
use bzredux_common::BinaryReader;

use crate::{Error, Result};

/// Pixel format tag stored in a MAP header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u16)]
pub enum MapFormat {
    /// 8-bit palette indices.
    Indexed8 = 0,
    /// 16-bit ARGB 4:4:4:4.
    Argb4444 = 1,
    /// 16-bit RGB 5:6:5.
    Rgb565 = 2,
    /// 32-bit ARGB, stored B,G,R,A.
    Argb8888 = 3,
    /// 32-bit RGB with unused alpha byte.
    Xrgb8888 = 4,
}

impl MapFormat {
    /// Bytes occupied by one pixel of this format.
    pub const fn bytes_per_pixel(self) -> u16 {
        match self {
            MapFormat::Indexed8 => 1,
            MapFormat::Argb4444 | MapFormat::Rgb565 => 2,
            MapFormat::Argb8888 | MapFormat::Xrgb8888 => 4,
        }
    }
}

impl TryFrom<u16> for MapFormat {
    type Error = Error;

    fn try_from(tag: u16) -> Result<Self> {
        match tag {
            0 => Ok(MapFormat::Indexed8),
            1 => Ok(MapFormat::Argb4444),
            2 => Ok(MapFormat::Rgb565),
            3 => Ok(MapFormat::Argb8888),
            4 => Ok(MapFormat::Xrgb8888),
            other => Err(Error::MalformedHeader(format!("unknown format tag {other}"))),
        }
    }
}

/// MAP file header: four little-endian u16 fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MapHeader {
    /// Bytes per pixel row.
    pub row_bytes: u16,
    /// Pixel format.
    pub format: MapFormat,
    /// Number of rows.
    pub height: u16,
    /// Unused, zero when written.
    pub reserved: u16,
}

impl MapHeader {
    /// Serialized header size.
    pub const SIZE: usize = 8;

    /// Parse and validate a header.
    pub fn parse(reader: &mut BinaryReader<'_>) -> Result<Self> {
        let row_bytes = reader.read_u16()?;
        let format = MapFormat::try_from(reader.read_u16()?)?;
        let height = reader.read_u16()?;
        let reserved = reader.read_u16()?;

        if row_bytes % format.bytes_per_pixel() != 0 {
            return Err(Error::MalformedHeader(format!(
                "row size {} is not a multiple of {} bytes per pixel",
                row_bytes,
                format.bytes_per_pixel()
            )));
        }

        Ok(Self {
            row_bytes,
            format,
            height,
            reserved,
        })
    }

    /// Image width in pixels.
    pub fn width(&self) -> u32 {
        (self.row_bytes / self.format.bytes_per_pixel()) as u32
    }

    /// Write the header in file order.
    pub fn write_to<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        writer.write_u16::<LittleEndian>(self.row_bytes)?;
        writer.write_u16::<LittleEndian>(self.format as u16)?;
        writer.write_u16::<LittleEndian>(self.height)?;
        writer.write_u16::<LittleEndian>(self.reserved)?;
        Ok(())
    }
}
