//! External block-compression encoder.
//!
//! Texel compression is delegated to a separate tool. [`Texconv`] drives
//! Microsoft's `texconv`; tests substitute their own [`TextureEncoder`].

use std::fmt;
use std::path::{Path, PathBuf};
use std::process::Command;

use crate::{Error, Result};

/// Block-compressed output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockFormat {
    /// DXT1, no alpha.
    Bc1,
    /// DXT5, interpolated alpha.
    Bc3,
}

impl BlockFormat {
    /// BC3 when the image has alpha, otherwise BC1.
    pub fn for_alpha(has_alpha: bool) -> Self {
        if has_alpha {
            BlockFormat::Bc3
        } else {
            BlockFormat::Bc1
        }
    }

    /// Format name as `texconv` spells it.
    pub fn as_str(self) -> &'static str {
        match self {
            BlockFormat::Bc1 => "BC1_UNORM",
            BlockFormat::Bc3 => "BC3_UNORM",
        }
    }
}

impl fmt::Display for BlockFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Something that turns an image file into a compressed DDS.
pub trait TextureEncoder: Sync {
    /// Encode `input` into `out_dir` and return the path of the DDS written.
    ///
    /// The output is named after the input's stem. Failures to run the tool
    /// or to produce output are reported as [`Error::ExternalToolFailure`].
    fn encode(&self, input: &Path, out_dir: &Path, format: BlockFormat, mipmaps: bool)
        -> Result<PathBuf>;
}

/// The `texconv` command-line encoder.
#[derive(Debug, Clone)]
pub struct Texconv {
    program: PathBuf,
}

impl Texconv {
    /// Executable name looked up on `PATH` by default.
    pub const DEFAULT_PROGRAM: &'static str = "texconv";

    pub fn new<P: Into<PathBuf>>(program: P) -> Self {
        Self {
            program: program.into(),
        }
    }

    fn failure(&self, reason: impl Into<String>) -> Error {
        Error::ExternalToolFailure {
            tool: self.program.display().to_string(),
            reason: reason.into(),
        }
    }
}

impl Default for Texconv {
    fn default() -> Self {
        Self::new(Self::DEFAULT_PROGRAM)
    }
}

impl TextureEncoder for Texconv {
    fn encode(
        &self,
        input: &Path,
        out_dir: &Path,
        format: BlockFormat,
        mipmaps: bool,
    ) -> Result<PathBuf> {
        let stem = input
            .file_stem()
            .ok_or_else(|| self.failure(format!("input {} has no file name", input.display())))?;

        log::debug!(
            "running {} -f {} on {}",
            self.program.display(),
            format,
            input.display()
        );

        let output = Command::new(&self.program)
            .arg("-f")
            .arg(format.as_str())
            .arg("-y")
            .arg("-o")
            .arg(out_dir)
            .arg("-m")
            .arg(if mipmaps { "0" } else { "1" })
            .arg(input)
            .output()
            .map_err(|e| self.failure(e.to_string()))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            let stdout = String::from_utf8_lossy(&output.stdout);
            let detail = if stderr.trim().is_empty() { stdout } else { stderr };
            return Err(self.failure(format!("{}: {}", output.status, detail.trim())));
        }

        let mut produced = out_dir.join(stem);
        produced.set_extension("dds");
        if !produced.is_file() {
            return Err(self.failure(format!("no output at {}", produced.display())));
        }
        Ok(produced)
    }
}
