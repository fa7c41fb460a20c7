//! DDS header structures.

use std::io::{self, Write};

use byteorder::{LittleEndian, WriteBytesExt};
use bzredux_common::BinaryReader;
use zerocopy::{FromBytes, Immutable, IntoBytes, KnownLayout};

use crate::{Error, Result, DDS_MAGIC};

/// DDS file header.
#[derive(Debug, Clone, Copy, FromBytes, IntoBytes, Immutable, KnownLayout)]
#[repr(C, packed)]
pub struct DdsHeader {
    /// Header size (should be 124).
    pub size: u32,
    /// Header flags.
    pub flags: u32,
    /// Image height.
    pub height: u32,
    /// Image width.
    pub width: u32,
    /// Pitch or linear size.
    pub pitch_or_linear_size: u32,
    /// Depth (for volume textures).
    pub depth: u32,
    /// Number of mipmap levels.
    pub mipmap_count: u32,
    /// Reserved.
    pub reserved1: [u32; 11],
    /// Pixel format.
    pub pixel_format: DdsPixelFormat,
    /// Surface capabilities.
    pub caps: u32,
    /// Surface capabilities 2.
    pub caps2: u32,
    /// Surface capabilities 3.
    pub caps3: u32,
    /// Surface capabilities 4.
    pub caps4: u32,
    /// Reserved.
    pub reserved2: u32,
}

impl DdsHeader {
    /// Expected header size.
    pub const SIZE: u32 = 124;

    pub const FLAG_CAPS: u32 = 0x1;
    pub const FLAG_HEIGHT: u32 = 0x2;
    pub const FLAG_WIDTH: u32 = 0x4;
    pub const FLAG_PITCH: u32 = 0x8;
    pub const FLAG_PIXEL_FORMAT: u32 = 0x1000;

    /// `caps`: the file holds a texture.
    pub const CAPS_TEXTURE: u32 = 0x1000;

    /// Header for a single-level block-compressed surface.
    pub fn compressed(width: u32, height: u32, four_cc: FourCC) -> Self {
        Self::with_format(
            width,
            height,
            Self::FLAG_CAPS | Self::FLAG_HEIGHT | Self::FLAG_WIDTH | Self::FLAG_PIXEL_FORMAT,
            0,
            DdsPixelFormat::four_cc(four_cc),
        )
    }

    /// Header for a single-level 32-bit A8R8G8B8 surface.
    pub fn uncompressed(width: u32, height: u32) -> Self {
        Self::with_format(
            width,
            height,
            Self::FLAG_CAPS
                | Self::FLAG_HEIGHT
                | Self::FLAG_WIDTH
                | Self::FLAG_PITCH
                | Self::FLAG_PIXEL_FORMAT,
            width.saturating_mul(4),
            DdsPixelFormat::argb8888(),
        )
    }

    fn with_format(
        width: u32,
        height: u32,
        flags: u32,
        pitch_or_linear_size: u32,
        pixel_format: DdsPixelFormat,
    ) -> Self {
        Self {
            size: Self::SIZE,
            flags,
            height,
            width,
            pitch_or_linear_size,
            depth: 0,
            mipmap_count: 1,
            reserved1: [0; 11],
            pixel_format,
            caps: Self::CAPS_TEXTURE,
            caps2: 0,
            caps3: 0,
            caps4: 0,
            reserved2: 0,
        }
    }

    /// Write the header (without magic) as little-endian fields.
    pub fn write_to<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        // Copy out of the packed struct before taking references.
        let Self {
            size,
            flags,
            height,
            width,
            pitch_or_linear_size,
            depth,
            mipmap_count,
            reserved1,
            pixel_format,
            caps,
            caps2,
            caps3,
            caps4,
            reserved2,
        } = *self;

        for value in [size, flags, height, width, pitch_or_linear_size, depth, mipmap_count] {
            writer.write_u32::<LittleEndian>(value)?;
        }
        for value in reserved1 {
            writer.write_u32::<LittleEndian>(value)?;
        }
        pixel_format.write_to(writer)?;
        for value in [caps, caps2, caps3, caps4, reserved2] {
            writer.write_u32::<LittleEndian>(value)?;
        }
        Ok(())
    }
}

/// DDS pixel format.
#[derive(Debug, Clone, Copy, FromBytes, IntoBytes, Immutable, KnownLayout)]
#[repr(C, packed)]
pub struct DdsPixelFormat {
    /// Structure size (should be 32).
    pub size: u32,
    /// Pixel format flags.
    pub flags: u32,
    /// Four-character code for compression.
    pub four_cc: FourCC,
    /// Number of bits per pixel (for uncompressed).
    pub rgb_bit_count: u32,
    /// Red bit mask.
    pub r_bit_mask: u32,
    /// Green bit mask.
    pub g_bit_mask: u32,
    /// Blue bit mask.
    pub b_bit_mask: u32,
    /// Alpha bit mask.
    pub a_bit_mask: u32,
}

impl DdsPixelFormat {
    /// Expected structure size.
    pub const SIZE: u32 = 32;

    pub const FLAG_ALPHA_PIXELS: u32 = 0x1;
    pub const FLAG_FOURCC: u32 = 0x4;
    pub const FLAG_RGB: u32 = 0x40;

    /// Block-compressed format named by a fourcc.
    pub fn four_cc(four_cc: FourCC) -> Self {
        Self {
            size: Self::SIZE,
            flags: Self::FLAG_FOURCC,
            four_cc,
            rgb_bit_count: 0,
            r_bit_mask: 0,
            g_bit_mask: 0,
            b_bit_mask: 0,
            a_bit_mask: 0,
        }
    }

    /// 32-bit pixels stored B,G,R,A in memory.
    pub fn argb8888() -> Self {
        Self {
            size: Self::SIZE,
            flags: Self::FLAG_RGB | Self::FLAG_ALPHA_PIXELS,
            four_cc: FourCC([0; 4]),
            rgb_bit_count: 32,
            r_bit_mask: 0x00ff_0000,
            g_bit_mask: 0x0000_ff00,
            b_bit_mask: 0x0000_00ff,
            a_bit_mask: 0xff00_0000,
        }
    }

    /// Write the pixel format as little-endian fields.
    pub fn write_to<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        let Self {
            size,
            flags,
            four_cc,
            rgb_bit_count,
            r_bit_mask,
            g_bit_mask,
            b_bit_mask,
            a_bit_mask,
        } = *self;

        writer.write_u32::<LittleEndian>(size)?;
        writer.write_u32::<LittleEndian>(flags)?;
        writer.write_all(&four_cc.0)?;
        for value in [rgb_bit_count, r_bit_mask, g_bit_mask, b_bit_mask, a_bit_mask] {
            writer.write_u32::<LittleEndian>(value)?;
        }
        Ok(())
    }
}

/// Four-character code for compression type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, FromBytes, IntoBytes, Immutable, KnownLayout)]
#[repr(transparent)]
pub struct FourCC(pub [u8; 4]);

impl FourCC {
    /// DXT1 compression.
    pub const DXT1: Self = Self(*b"DXT1");
    /// DXT5 compression.
    pub const DXT5: Self = Self(*b"DXT5");

    /// The code as text, if it is printable ASCII.
    pub fn as_str(&self) -> Option<&str> {
        std::str::from_utf8(&self.0)
            .ok()
            .filter(|s| s.bytes().all(|b| b.is_ascii_graphic() || b == b' '))
    }
}

/// A parsed DDS file borrowing its data.
#[derive(Debug, Clone)]
pub struct DdsFile<'a> {
    /// The main header.
    pub header: DdsHeader,
    /// Surface data following the header.
    pub data: &'a [u8],
}

impl<'a> DdsFile<'a> {
    /// Parse the magic and header of a DDS file.
    pub fn parse(data: &'a [u8]) -> Result<Self> {
        let mut reader = BinaryReader::new(data);
        let magic: [u8; 4] = reader.read_array()?;
        if &magic != DDS_MAGIC {
            return Err(Error::InvalidMagic(magic));
        }

        let header: DdsHeader = reader.read_struct()?;
        let size = header.size;
        if size != DdsHeader::SIZE {
            return Err(Error::InvalidHeader(format!(
                "header size {} (expected {})",
                size,
                DdsHeader::SIZE
            )));
        }

        Ok(Self {
            header,
            data: reader.remaining_bytes(),
        })
    }

    /// The fourcc, if the surface is block-compressed.
    pub fn four_cc(&self) -> Option<FourCC> {
        let format = self.header.pixel_format;
        (format.flags & DdsPixelFormat::FLAG_FOURCC != 0).then_some(format.four_cc)
    }

    /// Bytes the top mip level of a block-compressed surface occupies.
    pub fn top_level_size(&self) -> Option<usize> {
        let (width, height) = (self.header.width, self.header.height);
        self.four_cc()
            .map(|cc| mipmap_size(width, height, block_size(cc)))
    }
}

/// Get the block size for a compression format.
pub fn block_size(four_cc: FourCC) -> usize {
    match four_cc {
        FourCC::DXT1 => 8,
        _ => 16,
    }
}

/// Calculate the size in bytes of a mipmap level.
pub fn mipmap_size(width: u32, height: u32, block_size: usize) -> usize {
    let blocks_x = ((width as usize) + 3) / 4;
    let blocks_y = ((height as usize) + 3) / 4;
    blocks_x.max(1) * blocks_y.max(1) * block_size
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_sizes() {
        assert_eq!(std::mem::size_of::<DdsHeader>(), DdsHeader::SIZE as usize);
        assert_eq!(std::mem::size_of::<DdsPixelFormat>(), DdsPixelFormat::SIZE as usize);

        let mut out = Vec::new();
        DdsHeader::compressed(4, 4, FourCC::DXT1).write_to(&mut out).unwrap();
        assert_eq!(out.len(), DdsHeader::SIZE as usize);
    }

    #[test]
    fn test_written_header_parses_back() {
        let mut data = DDS_MAGIC.to_vec();
        DdsHeader::compressed(64, 32, FourCC::DXT5).write_to(&mut data).unwrap();
        data.extend_from_slice(&[0xAB; 16]);

        let dds = DdsFile::parse(&data).unwrap();
        let (width, height) = (dds.header.width, dds.header.height);
        assert_eq!((width, height), (64, 32));
        assert_eq!(dds.four_cc(), Some(FourCC::DXT5));
        assert_eq!(dds.top_level_size(), Some(2048));
        assert_eq!(dds.data, &[0xAB; 16]);
    }

    #[test]
    fn test_uncompressed_has_no_fourcc() {
        let mut data = DDS_MAGIC.to_vec();
        DdsHeader::uncompressed(8, 8).write_to(&mut data).unwrap();
        let dds = DdsFile::parse(&data).unwrap();
        assert_eq!(dds.four_cc(), None);
        let pitch = dds.header.pitch_or_linear_size;
        assert_eq!(pitch, 32);
    }

    #[test]
    fn test_bad_magic() {
        let err = DdsFile::parse(b"DDX \0\0\0\0").unwrap_err();
        assert!(matches!(err, Error::InvalidMagic(m) if &m == b"DDX "));
    }

    #[test]
    fn test_mipmap_size_calculation() {
        // 4x4 block minimum
        assert_eq!(mipmap_size(1, 1, 16), 16);
        assert_eq!(mipmap_size(4, 4, 16), 16);
        assert_eq!(mipmap_size(8, 8, 16), 64);
        assert_eq!(mipmap_size(64, 64, 8), 2048);
    }

    #[test]
    fn test_fourcc_text() {
        assert_eq!(FourCC::DXT1.as_str(), Some("DXT1"));
        assert_eq!(FourCC([0; 4]).as_str(), None);
    }
}
