//! Persisted CLI settings.
//!
//! Settings live in a JSON file (`bzredux.json` by default). A missing file
//! yields defaults; unknown or absent keys fall back to their defaults.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use bzredux::TextureOptions;

/// Values remembered between runs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Palette used for indexed MAP files instead of the built-in one.
    pub palette: Option<PathBuf>,
    /// Path of the `texconv` executable.
    pub texconv: Option<PathBuf>,
    /// Batch output directory; `None` writes next to each input.
    pub output_dir: Option<PathBuf>,
    /// Square edge for MAP conversion rescaling.
    pub map_scale: Option<u32>,
    /// Lightmap grid width in zones, 0 for square maps.
    pub lgt_width: u32,
    /// Build mip chains when converting DXTBZ2 textures.
    pub dxtbz2_mipmaps: bool,
    pub texture: TextureOptions,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            palette: None,
            texconv: None,
            output_dir: None,
            map_scale: None,
            lgt_width: 0,
            dxtbz2_mipmaps: true,
            texture: TextureOptions::default(),
        }
    }
}

impl Settings {
    /// Load settings from `path`, or defaults if it does not exist.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            log::debug!("no settings at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let text = fs::read_to_string(path)
            .with_context(|| format!("Failed to read settings {}", path.display()))?;
        serde_json::from_str(&text)
            .with_context(|| format!("Failed to parse settings {}", path.display()))
    }

    /// Write settings to `path` as pretty-printed JSON.
    pub fn save(&self, path: &Path) -> Result<()> {
        let text = serde_json::to_string_pretty(self)?;
        fs::write(path, text)
            .with_context(|| format!("Failed to write settings {}", path.display()))?;
        log::info!("Saved settings to {}", path.display());
        Ok(())
    }
}
