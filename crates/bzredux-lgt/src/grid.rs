//! Zone grid layout.

use crate::{Error, Result, ZONE_RES};

/// Layout of map zones in a lightmap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LightmapGrid {
    /// Zones per row.
    pub width: u32,
    /// Zone rows.
    pub height: u32,
    /// Map zones present in the file (excluding the border tile).
    pub zone_count: u32,
}

impl LightmapGrid {
    /// Lay out `zone_count` zones.
    ///
    /// A `width_hint` of zero assumes a square map and takes the integer
    /// square root of the zone count. The height truncates, so zones that do
    /// not fill a complete row are left out of the grid.
    pub fn infer(zone_count: u32, width_hint: u32) -> Result<Self> {
        let width = if width_hint > 0 {
            width_hint
        } else {
            isqrt(zone_count)
        };

        if width == 0 || zone_count / width == 0 {
            return Err(Error::InvalidGrid {
                width,
                zones: zone_count,
            });
        }

        let height = zone_count / width;
        let grid = Self {
            width,
            height,
            zone_count,
        };

        if grid.dropped_zones() > 0 {
            log::warn!(
                "{} zones do not fill a {}-wide row and are ignored",
                grid.dropped_zones(),
                width
            );
        }

        Ok(grid)
    }

    /// Zones placed in the grid.
    pub fn used_zones(&self) -> u32 {
        self.width * self.height
    }

    /// Trailing zones left out by the truncating height.
    pub fn dropped_zones(&self) -> u32 {
        self.zone_count - self.used_zones()
    }

    /// Canvas size in pixels.
    pub fn pixel_dimensions(&self) -> (u32, u32) {
        (self.width * ZONE_RES, self.height * ZONE_RES)
    }
}

/// Largest `r` with `r * r <= n`.
fn isqrt(n: u32) -> u32 {
    let mut r = (n as f64).sqrt() as u32;
    while (r as u64) * (r as u64) > n as u64 {
        r -= 1;
    }
    while ((r + 1) as u64) * ((r + 1) as u64) <= n as u64 {
        r += 1;
    }
    r
}
