//! Grid width hints from `.trn` terrain descriptions.
//!
//! A `.trn` file is an INI-style text file. Its `[Size]` section records the
//! map width in world units; every zone spans [`ZONE_WORLD_UNITS`] of them.

use std::sync::OnceLock;

use regex::Regex;

/// World units covered by one lightmap zone.
pub const ZONE_WORLD_UNITS: u32 = 1280;

fn width_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"Width\s*=\s*(\d+)").expect("static pattern is valid"))
}

/// The map width in world units, if the description declares one.
pub fn world_width(text: &str) -> Option<u32> {
    width_pattern()
        .captures(text)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse().ok())
}

/// The map width in zones, usable as the lightmap grid width hint.
///
/// Returns `None` when no width is declared or it is narrower than one zone.
pub fn grid_width_hint(text: &str) -> Option<u32> {
    let zones = world_width(text)? / ZONE_WORLD_UNITS;
    if zones == 0 {
        return None;
    }
    log::debug!("terrain description declares {} zones across", zones);
    Some(zones)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "[Size]\r\nMinX = -5120\r\nWidth = 10240\r\nDepth=7680\r\n\r\n[Atlases]\r\nMaterialCount = 4\r\n";

    #[test]
    fn test_width_from_size_section() {
        assert_eq!(world_width(SAMPLE), Some(10240));
        assert_eq!(grid_width_hint(SAMPLE), Some(8));
    }

    #[test]
    fn test_compact_spacing() {
        assert_eq!(grid_width_hint("Width=2560"), Some(2));
    }

    #[test]
    fn test_missing_width() {
        assert_eq!(grid_width_hint("[Size]\nDepth = 1280\n"), None);
    }

    #[test]
    fn test_narrower_than_a_zone() {
        assert_eq!(grid_width_hint("Width = 640"), None);
    }
}
