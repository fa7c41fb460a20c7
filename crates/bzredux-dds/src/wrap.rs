//! DDS container emission.

use image::RgbaImage;

use crate::dxtbz2::DxtBz2Header;
use crate::header::{DdsHeader, FourCC};
use crate::{Result, DDS_MAGIC};

/// Wrap a legacy top mip level in a single-level DDS container.
///
/// The payload is copied unmodified after the header. `has_alpha` selects the
/// `DXT5` fourcc, otherwise `DXT1`.
pub fn wrap_as_dds(header: &DxtBz2Header, payload: &[u8], has_alpha: bool) -> Result<Vec<u8>> {
    let (width, height) = header.dimensions()?;
    let four_cc = if has_alpha { FourCC::DXT5 } else { FourCC::DXT1 };

    let mut out = Vec::with_capacity(4 + DdsHeader::SIZE as usize + payload.len());
    out.extend_from_slice(DDS_MAGIC);
    DdsHeader::compressed(width, height, four_cc).write_to(&mut out)?;
    out.extend_from_slice(payload);
    Ok(out)
}

/// Store an RGBA image as a lossless single-level A8R8G8B8 DDS.
pub fn uncompressed_dds(image: &RgbaImage) -> Result<Vec<u8>> {
    let (width, height) = image.dimensions();

    let mut out = Vec::with_capacity(4 + DdsHeader::SIZE as usize + image.as_raw().len());
    out.extend_from_slice(DDS_MAGIC);
    DdsHeader::uncompressed(width, height).write_to(&mut out)?;
    for px in image.pixels() {
        let [r, g, b, a] = px.0;
        out.extend_from_slice(&[b, g, r, a]);
    }
    Ok(out)
}
