//! Texture conversion pipeline.
//!
//! Mirrors what modders do by hand when preparing Redux textures: downscale
//! oversized sources, derive emissive/specular/normal maps, and store the
//! result as a block-compressed DDS (or a plain PNG/TGA).

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use bzredux_dds::{uncompressed_dds, wrap_as_dds, DxtBz2};
use bzredux_gen::{derived_stem, generate, GenerateOptions};
use image::imageops::{self, FilterType};
use image::RgbaImage;

use crate::convert::output_path;
use crate::encoder::{BlockFormat, TextureEncoder};
use crate::{Error, Result};

/// Container written by the texture pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum OutputFormat {
    #[default]
    Dds,
    Png,
    Tga,
}

impl OutputFormat {
    /// File extension without the dot.
    pub fn extension(self) -> &'static str {
        match self {
            OutputFormat::Dds => "dds",
            OutputFormat::Png => "png",
            OutputFormat::Tga => "tga",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim_start_matches('.').to_ascii_lowercase().as_str() {
            "dds" => Ok(OutputFormat::Dds),
            "png" => Ok(OutputFormat::Png),
            "tga" => Ok(OutputFormat::Tga),
            other => Err(format!("unsupported output format {:?}", other)),
        }
    }
}

/// Settings for [`process_texture`].
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct TextureOptions {
    pub output: OutputFormat,
    /// Block-compress DDS output through the encoder. When off, DDS files are
    /// stored uncompressed.
    pub compress: bool,
    /// Ask the encoder for a full mip chain.
    pub mipmaps: bool,
    /// Halve sources wider or taller than this.
    pub scale_cutoff: Option<u32>,
    pub overwrite: bool,
    pub generate: GenerateOptions,
}

impl Default for TextureOptions {
    fn default() -> Self {
        Self {
            output: OutputFormat::Dds,
            compress: true,
            mipmaps: true,
            scale_cutoff: None,
            overwrite: false,
            generate: GenerateOptions::default(),
        }
    }
}

/// What a pipeline call did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The output was written.
    Written {
        path: PathBuf,
        width: u32,
        height: u32,
        /// Number of derived maps written alongside.
        derived: usize,
    },
    /// The output already existed and overwriting is off.
    Skipped(PathBuf),
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Written {
                path,
                width,
                height,
                derived,
            } => {
                write!(f, "wrote {} ({}x{})", path.display(), width, height)?;
                if *derived > 0 {
                    write!(f, " + {} derived maps", derived)?;
                }
                Ok(())
            }
            Outcome::Skipped(path) => write!(f, "skipped {} (exists)", path.display()),
        }
    }
}

/// Convert one source image according to `options`.
///
/// Output goes to `out_dir`, or next to the source when `None`.
pub fn process_texture(
    input: &Path,
    out_dir: Option<&Path>,
    options: &TextureOptions,
    encoder: &dyn TextureEncoder,
) -> Result<Outcome> {
    let out = output_path(input, out_dir, options.output.extension());
    if out.exists() && !options.overwrite {
        log::debug!("{} exists, skipping", out.display());
        return Ok(Outcome::Skipped(out));
    }

    let mut image = image::open(input)?.into_rgba8();
    if let Some(cutoff) = options.scale_cutoff {
        image = halve_if_larger(image, cutoff);
    }
    let has_alpha = has_alpha(&image);
    let (width, height) = image.dimensions();

    let maps = generate(&image, &options.generate);
    let stem = input.file_stem().unwrap_or_default().to_string_lossy();
    let mut derived = 0;
    for (kind, map) in maps.iter() {
        let name = format!("{}.{}", derived_stem(&stem, kind), options.output.extension());
        let path = out.with_file_name(name);
        write_output(map, &path, false, options, encoder)?;
        derived += 1;
    }

    write_output(&image, &out, has_alpha, options, encoder)?;

    Ok(Outcome::Written {
        path: out,
        width,
        height,
        derived,
    })
}

fn write_output(
    image: &RgbaImage,
    path: &Path,
    has_alpha: bool,
    options: &TextureOptions,
    encoder: &dyn TextureEncoder,
) -> Result<()> {
    if options.output == OutputFormat::Dds && !options.compress {
        fs::write(path, uncompressed_dds(image)?)?;
        return Ok(());
    }
    save_image(image, path, has_alpha, options.mipmaps, encoder)
}

/// Halve both dimensions once if either exceeds `cutoff`.
fn halve_if_larger(image: RgbaImage, cutoff: u32) -> RgbaImage {
    let (width, height) = image.dimensions();
    if width <= cutoff && height <= cutoff {
        return image;
    }
    let (w, h) = ((width / 2).max(1), (height / 2).max(1));
    log::debug!("downscaling {}x{} to {}x{}", width, height, w, h);
    imageops::resize(&image, w, h, FilterType::Lanczos3)
}

/// Whether any pixel is not fully opaque.
pub fn has_alpha(image: &RgbaImage) -> bool {
    image.pixels().any(|p| p[3] < 255)
}

/// Save `image` to `path`, choosing the container from the extension.
///
/// `.dds` goes through `encoder` as BC3 when `has_alpha` is set, otherwise
/// BC1. If the encoder cannot be used the image is stored as an uncompressed
/// DDS instead. Other extensions are written directly.
pub fn save_image(
    image: &RgbaImage,
    path: &Path,
    has_alpha: bool,
    mipmaps: bool,
    encoder: &dyn TextureEncoder,
) -> Result<()> {
    if !is_dds(path) {
        image.save(path)?;
        return Ok(());
    }

    let staging = staging_dir(path)?;
    let stem = path.file_stem().unwrap_or_default();
    let mut source = staging.path().join(stem);
    source.set_extension("tga");
    image.save(&source)?;

    let encoded_dir = staging.path().join("encoded");
    fs::create_dir(&encoded_dir)?;

    let format = BlockFormat::for_alpha(has_alpha);
    match encoder.encode(&source, &encoded_dir, format, mipmaps) {
        Ok(encoded) => {
            replace_file(&encoded, path)?;
            log::debug!("encoded {} as {}", path.display(), format);
            Ok(())
        }
        Err(Error::ExternalToolFailure { tool, reason }) => {
            log::warn!(
                "{} failed ({}); writing {} uncompressed",
                tool,
                reason,
                path.display()
            );
            fs::write(path, uncompressed_dds(image)?)?;
            Ok(())
        }
        Err(e) => Err(e),
    }
}

/// Re-wrap a legacy `.dxtbz2` texture as `<stem>.dds`.
///
/// With `mipmaps` the wrapped texture is handed to `encoder` to build a mip
/// chain; if that fails the single-level wrapped file is kept.
pub fn convert_dxtbz2(
    input: &Path,
    out_dir: Option<&Path>,
    mipmaps: bool,
    overwrite: bool,
    encoder: &dyn TextureEncoder,
) -> Result<Outcome> {
    let out = output_path(input, out_dir, "dds");
    if out.exists() && !overwrite {
        log::debug!("{} exists, skipping", out.display());
        return Ok(Outcome::Skipped(out));
    }

    let data = fs::read(input)?;
    let texture = DxtBz2::parse(&data)?;
    let (width, height) = texture.header.dimensions()?;
    let wrapped = wrap_as_dds(&texture.header, texture.payload, texture.has_alpha)?;

    if !mipmaps {
        fs::write(&out, wrapped)?;
    } else {
        let staging = staging_dir(&out)?;
        let source = staging.path().join(out.file_name().unwrap_or_default());
        fs::write(&source, &wrapped)?;

        let encoded_dir = staging.path().join("encoded");
        fs::create_dir(&encoded_dir)?;

        let format = BlockFormat::for_alpha(texture.has_alpha);
        match encoder.encode(&source, &encoded_dir, format, true) {
            Ok(encoded) => replace_file(&encoded, &out)?,
            Err(Error::ExternalToolFailure { tool, reason }) => {
                log::warn!(
                    "{} failed ({}); keeping single-level {}",
                    tool,
                    reason,
                    out.display()
                );
                fs::write(&out, wrapped)?;
            }
            Err(e) => return Err(e),
        }
    }

    Ok(Outcome::Written {
        path: out,
        width,
        height,
        derived: 0,
    })
}

fn is_dds(path: &Path) -> bool {
    path.extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("dds"))
}

/// Scratch directory beside `target`, removed when dropped.
fn staging_dir(target: &Path) -> Result<tempfile::TempDir> {
    let parent = match target.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };
    Ok(tempfile::Builder::new().prefix(".bzredux-").tempdir_in(parent)?)
}

/// Move `from` over `to`, copying when a rename is not possible.
fn replace_file(from: &Path, to: &Path) -> Result<()> {
    if to.exists() {
        fs::remove_file(to)?;
    }
    if fs::rename(from, to).is_err() {
        fs::copy(from, to)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use bzredux_dds::{DdsFile, FourCC};
    use image::Rgba;
    use std::sync::Mutex;

    /// Encoder that always fails like a missing executable.
    struct Unavailable;

    impl TextureEncoder for Unavailable {
        fn encode(&self, _: &Path, _: &Path, _: BlockFormat, _: bool) -> Result<PathBuf> {
            Err(Error::ExternalToolFailure {
                tool: "texconv".into(),
                reason: "not found".into(),
            })
        }
    }

    /// Encoder that records calls and writes a marker file.
    #[derive(Default)]
    struct Recording {
        calls: Mutex<Vec<(PathBuf, BlockFormat, bool)>>,
    }

    impl TextureEncoder for Recording {
        fn encode(
            &self,
            input: &Path,
            out_dir: &Path,
            format: BlockFormat,
            mipmaps: bool,
        ) -> Result<PathBuf> {
            assert!(input.is_file());
            self.calls
                .lock()
                .unwrap()
                .push((input.to_path_buf(), format, mipmaps));
            let mut out = out_dir.join(input.file_stem().unwrap());
            out.set_extension("dds");
            fs::write(&out, format.as_str())?;
            Ok(out)
        }
    }

    fn write_source(dir: &Path, name: &str, image: &RgbaImage) -> PathBuf {
        let path = dir.join(name);
        image.save(&path).unwrap();
        path
    }

    fn legacy_file(width: i32, height: i32, payload_len: u32) -> Vec<u8> {
        let mut data = Vec::new();
        for v in [0i32, 5] {
            data.extend_from_slice(&v.to_le_bytes());
        }
        data.extend_from_slice(&[0, 0, 0, 255]);
        for v in [1i32, height, width] {
            data.extend_from_slice(&v.to_le_bytes());
        }
        data.extend_from_slice(&payload_len.to_le_bytes());
        data.extend(std::iter::repeat(0x5A).take(payload_len as usize));
        data
    }

    /// Entries left in `dir`, sorted.
    fn listing(dir: &Path) -> Vec<String> {
        let mut names: Vec<_> = fs::read_dir(dir)
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        names
    }

    #[test]
    fn test_fallback_to_uncompressed() {
        let dir = tempfile::tempdir().unwrap();
        let image = RgbaImage::from_pixel(4, 4, Rgba([9, 8, 7, 255]));
        let out = dir.path().join("rock.dds");

        save_image(&image, &out, false, true, &Unavailable).unwrap();

        let data = fs::read(&out).unwrap();
        let dds = DdsFile::parse(&data).unwrap();
        assert_eq!(dds.four_cc(), None);
        assert_eq!(&dds.data[..4], &[7, 8, 9, 255]);
        // Staging files are gone.
        assert_eq!(listing(dir.path()), ["rock.dds"]);
    }

    #[test]
    fn test_encoder_output_moved_into_place() {
        let dir = tempfile::tempdir().unwrap();
        let image = RgbaImage::from_pixel(4, 4, Rgba([0, 0, 0, 10]));
        let out = dir.path().join("glass.dds");
        fs::write(&out, b"stale").unwrap();

        let encoder = Recording::default();
        save_image(&image, &out, true, false, &encoder).unwrap();

        assert_eq!(fs::read(&out).unwrap(), b"BC3_UNORM");
        let calls = encoder.calls.lock().unwrap();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].0.extension().unwrap(), "tga");
        assert_eq!((calls[0].1, calls[0].2), (BlockFormat::Bc3, false));
        drop(calls);
        assert_eq!(listing(dir.path()), ["glass.dds"]);
    }

    #[test]
    fn test_non_dds_skips_encoder() {
        let dir = tempfile::tempdir().unwrap();
        let image = RgbaImage::from_pixel(2, 2, Rgba([1, 2, 3, 4]));
        let out = dir.path().join("flat.tga");

        let encoder = Recording::default();
        save_image(&image, &out, true, true, &encoder).unwrap();

        assert!(encoder.calls.lock().unwrap().is_empty());
        let back = image::open(&out).unwrap().into_rgba8();
        assert_eq!(back.get_pixel(1, 1), &Rgba([1, 2, 3, 4]));
    }

    #[test]
    fn test_process_texture_derived_maps() {
        let dir = tempfile::tempdir().unwrap();
        let src = write_source(
            dir.path(),
            "hull_d.png",
            &RgbaImage::from_pixel(8, 8, Rgba([250, 250, 250, 255])),
        );
        let out_dir = dir.path().join("out");
        fs::create_dir(&out_dir).unwrap();

        let options = TextureOptions {
            output: OutputFormat::Png,
            generate: GenerateOptions::all(),
            ..TextureOptions::default()
        };
        let outcome = process_texture(&src, Some(&out_dir), &options, &Unavailable).unwrap();

        assert_eq!(
            outcome,
            Outcome::Written {
                path: out_dir.join("hull_d.png"),
                width: 8,
                height: 8,
                derived: 3,
            }
        );
        assert_eq!(
            listing(&out_dir),
            ["hull_d.png", "hull_e.png", "hull_n.png", "hull_s.png"]
        );
        let normal = image::open(out_dir.join("hull_n.png")).unwrap().into_rgba8();
        assert_eq!(normal.get_pixel(3, 3), &Rgba([128, 128, 255, 255]));
    }

    #[test]
    fn test_process_texture_skips_existing() {
        let dir = tempfile::tempdir().unwrap();
        let src = write_source(dir.path(), "a.png", &RgbaImage::new(2, 2));
        fs::write(dir.path().join("a.dds"), b"keep").unwrap();

        let options = TextureOptions::default();
        let outcome = process_texture(&src, None, &options, &Unavailable).unwrap();
        assert_eq!(outcome, Outcome::Skipped(dir.path().join("a.dds")));
        assert_eq!(fs::read(dir.path().join("a.dds")).unwrap(), b"keep");

        let options = TextureOptions {
            overwrite: true,
            ..TextureOptions::default()
        };
        let outcome = process_texture(&src, None, &options, &Unavailable).unwrap();
        assert!(matches!(outcome, Outcome::Written { .. }));
        assert_ne!(fs::read(dir.path().join("a.dds")).unwrap(), b"keep");
    }

    #[test]
    fn test_process_texture_cutoff_and_alpha() {
        let dir = tempfile::tempdir().unwrap();
        let mut image = RgbaImage::from_pixel(64, 32, Rgba([100, 100, 100, 255]));
        for (x, y) in (0..8).flat_map(|x| (0..8).map(move |y| (x, y))) {
            image.put_pixel(x, y, Rgba([100, 100, 100, 0]));
        }
        let src = write_source(dir.path(), "decal.png", &image);

        let encoder = Recording::default();
        let options = TextureOptions {
            scale_cutoff: Some(32),
            ..TextureOptions::default()
        };
        let outcome = process_texture(&src, None, &options, &encoder).unwrap();

        assert!(matches!(outcome, Outcome::Written { width: 32, height: 16, .. }));
        let calls = encoder.calls.lock().unwrap();
        assert_eq!((calls[0].1, calls[0].2), (BlockFormat::Bc3, true));
    }

    #[test]
    fn test_uncompressed_dds_option() {
        let dir = tempfile::tempdir().unwrap();
        let src = write_source(dir.path(), "plain.png", &RgbaImage::new(4, 4));

        let encoder = Recording::default();
        let options = TextureOptions {
            compress: false,
            ..TextureOptions::default()
        };
        process_texture(&src, None, &options, &encoder).unwrap();

        assert!(encoder.calls.lock().unwrap().is_empty());
        let data = fs::read(dir.path().join("plain.dds")).unwrap();
        assert_eq!(DdsFile::parse(&data).unwrap().four_cc(), None);
    }

    #[test]
    fn test_convert_dxtbz2_single_level() {
        let dir = tempfile::tempdir().unwrap();
        let src = dir.path().join("avtank.dxtbz2");
        fs::write(&src, legacy_file(64, 64, 4096)).unwrap();

        let outcome = convert_dxtbz2(&src, None, false, false, &Unavailable).unwrap();
        assert!(matches!(outcome, Outcome::Written { width: 64, height: 64, .. }));

        let data = fs::read(dir.path().join("avtank.dds")).unwrap();
        let dds = DdsFile::parse(&data).unwrap();
        assert_eq!(dds.four_cc(), Some(FourCC::DXT5));
        assert_eq!(dds.data.len(), 4096);
    }

    #[test]
    fn test_convert_dxtbz2_mipmap_fallback() {
        let dir = tempfile::tempdir().unwrap();
        let src = dir.path().join("ground.dxtbz2");
        fs::write(&src, legacy_file(64, 64, 2048)).unwrap();

        convert_dxtbz2(&src, None, true, false, &Unavailable).unwrap();

        let data = fs::read(dir.path().join("ground.dds")).unwrap();
        assert_eq!(DdsFile::parse(&data).unwrap().four_cc(), Some(FourCC::DXT1));
        assert_eq!(listing(dir.path()), ["ground.dds", "ground.dxtbz2"]);
    }

    #[test]
    fn test_convert_dxtbz2_mipmaps_through_encoder() {
        let dir = tempfile::tempdir().unwrap();
        let src = dir.path().join("ground.dxtbz2");
        fs::write(&src, legacy_file(64, 64, 2048)).unwrap();

        let encoder = Recording::default();
        convert_dxtbz2(&src, None, true, false, &encoder).unwrap();

        assert_eq!(fs::read(dir.path().join("ground.dds")).unwrap(), b"BC1_UNORM");
        let calls = encoder.calls.lock().unwrap();
        assert_eq!(calls[0].0.extension().unwrap(), "dds");
    }

    #[test]
    fn test_output_format_parse() {
        assert_eq!(".DDS".parse::<OutputFormat>(), Ok(OutputFormat::Dds));
        assert_eq!("tga".parse::<OutputFormat>(), Ok(OutputFormat::Tga));
        assert!("jpg".parse::<OutputFormat>().is_err());
    }
}
