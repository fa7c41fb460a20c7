//! DXTBZ2 legacy container parsing.

use bzredux_common::BinaryReader;

use crate::{Error, Result};

/// Legacy DXTBZ2 header.
///
/// | Offset | Size | Field |
/// |--------|------|-------|
/// | 0      | 4    | `signature` (i32) |
/// | 4      | 4    | `dxt_level` (i32) |
/// | 8      | 4    | `fallback_rgba` (R, G, B, A bytes) |
/// | 12     | 4    | `mip_count` (i32) |
/// | 16     | 4    | `base_height` (i32) |
/// | 20     | 4    | `base_width` (i32) |
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DxtBz2Header {
    /// File signature.
    pub signature: i32,
    /// Compression level the file was written with.
    pub dxt_level: i32,
    /// Colour used when the texture is drawn at 1×1.
    pub fallback_rgba: [u8; 4],
    /// Number of stored mip levels.
    pub mip_count: i32,
    /// Height of the top mip level.
    pub base_height: i32,
    /// Width of the top mip level.
    pub base_width: i32,
}

impl DxtBz2Header {
    /// Serialized header size.
    pub const SIZE: usize = 24;

    /// Decode the header field by field.
    pub fn parse(reader: &mut BinaryReader<'_>) -> Result<Self> {
        Ok(Self {
            signature: reader.read_i32()?,
            dxt_level: reader.read_i32()?,
            fallback_rgba: reader.read_array()?,
            mip_count: reader.read_i32()?,
            base_height: reader.read_i32()?,
            base_width: reader.read_i32()?,
        })
    }

    /// Top mip level dimensions as `(width, height)`.
    pub fn dimensions(&self) -> Result<(u32, u32)> {
        match (u32::try_from(self.base_width), u32::try_from(self.base_height)) {
            (Ok(w), Ok(h)) if w > 0 && h > 0 => Ok((w, h)),
            _ => Err(Error::MalformedHeader(format!(
                "invalid base size {}x{}",
                self.base_width, self.base_height
            ))),
        }
    }
}

/// A parsed DXTBZ2 texture borrowing its payload.
#[derive(Debug, Clone)]
pub struct DxtBz2<'a> {
    /// The legacy header.
    pub header: DxtBz2Header,
    /// Compressed blocks of the top mip level.
    pub payload: &'a [u8],
    /// Whether the payload is inferred to be DXT5 rather than DXT1.
    pub has_alpha: bool,
}

impl<'a> DxtBz2<'a> {
    /// Parse the header and the top mip level.
    ///
    /// Lower mip levels are left unread.
    pub fn parse(data: &'a [u8]) -> Result<Self> {
        let mut reader = BinaryReader::new(data);
        let header = DxtBz2Header::parse(&mut reader)?;
        let (width, height) = header.dimensions()?;

        let payload_len = reader.read_u32()?;
        if payload_len == 0 {
            return Err(Error::EmptyPayload);
        }
        let payload = reader.read_bytes(payload_len as usize)?;
        let has_alpha = infer_alpha(payload_len, width, height);

        log::debug!(
            "DXTBZ2 {}x{}, {} mips, level {}, {} byte top level ({})",
            width,
            height,
            header.mip_count,
            header.dxt_level,
            payload_len,
            if has_alpha { "DXT5" } else { "DXT1" }
        );

        Ok(Self {
            header,
            payload,
            has_alpha,
        })
    }
}

/// Density check: one byte per texel means 16-byte blocks, i.e. DXT5.
///
/// The container has no format field; this check matches what the game's own
/// files produce and is not a documented rule.
fn infer_alpha(payload_len: u32, width: u32, height: u32) -> bool {
    payload_len / height == width
}
