//! BZRedux CLI - Command-line tool for Battlezone 98 Redux asset conversion.
//!
//! This is the main entry point for the BZRedux command-line application.

mod settings;

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Instant;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;

use bzredux::prelude::*;
use bzredux::lgt;

use crate::settings::Settings;

const IMAGE_EXTENSIONS: &[&str] = &["png", "tga", "jpg", "jpeg", "bmp"];

/// BZRedux - Battlezone 98 Redux texture, palette and lightmap tool
#[derive(Parser)]
#[command(name = "bzredux")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Settings file
    #[arg(long, global = true, env = "BZREDUX_SETTINGS", default_value = "bzredux.json")]
    settings: PathBuf,

    /// Write the effective settings back to the settings file on exit
    #[arg(long, global = true)]
    save_settings: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the entries of an ACT palette
    ActInfo {
        /// Palette file (defaults to the built-in Moon palette)
        input: Option<PathBuf>,

        /// Show only this index
        #[arg(short, long)]
        index: Option<u8>,
    },

    /// Edit palette entries and write the result
    ActSet {
        /// Output ACT file
        output: PathBuf,

        /// Palette to start from (defaults to the built-in Moon palette)
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Entry to set, as INDEX=#RRGGBB (repeatable)
        #[arg(short, long = "entry")]
        entries: Vec<String>,
    },

    /// Build an ACT palette from an image
    ActImport {
        /// Source image (indexed PNGs keep their colour table)
        input: PathBuf,

        /// Output ACT file
        output: PathBuf,
    },

    /// Convert MAP textures to PNG
    MapToPng {
        /// Input files, directories or glob patterns
        #[arg(required = true)]
        inputs: Vec<String>,

        #[command(flatten)]
        map: MapArgs,

        /// Palette for indexed textures
        #[arg(short, long, env = "BZREDUX_PALETTE")]
        palette: Option<PathBuf>,
    },

    /// Convert images to 32-bit MAP textures
    PngToMap {
        /// Input files, directories or glob patterns
        #[arg(required = true)]
        inputs: Vec<String>,

        #[command(flatten)]
        map: MapArgs,
    },

    /// Show the header of a MAP texture
    MapInfo {
        /// Input MAP file
        input: PathBuf,
    },

    /// Convert an LGT lightmap to PNG
    LgtToPng {
        /// Input LGT file
        input: PathBuf,

        /// Output directory
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Grid width in zones (0 for square maps)
        #[arg(short, long, conflicts_with = "trn")]
        width: Option<u32>,

        /// Terrain description to read the grid width from
        #[arg(long)]
        trn: Option<PathBuf>,
    },

    /// Convert a greyscale image to an LGT lightmap
    PngToLgt {
        /// Input image (dimensions must be multiples of 256)
        input: PathBuf,

        /// Output directory
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Border tile colour (defaults to the bottom-left pixel)
        #[arg(short, long)]
        border: Option<u8>,
    },

    /// Convert legacy DXTBZ2 textures to DDS
    Dxtbz2 {
        /// Input files, directories or glob patterns
        #[arg(required = true)]
        inputs: Vec<String>,

        /// Output directory
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Build a mip chain with texconv
        #[arg(long)]
        mipmaps: Option<bool>,

        /// Replace existing outputs
        #[arg(long)]
        overwrite: bool,

        /// Path of the texconv executable
        #[arg(long, env = "TEXCONV")]
        texconv: Option<PathBuf>,
    },

    /// Show the header of a DDS or DXTBZ2 texture
    DdsInfo {
        /// Input file
        input: PathBuf,
    },

    /// Convert textures and generate derived maps
    Texture {
        /// Input files, directories or glob patterns
        #[arg(required = true)]
        inputs: Vec<String>,

        #[command(flatten)]
        texture: TextureArgs,
    },
}

#[derive(Args)]
struct MapArgs {
    /// Output directory
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Rescale to a square of 128, 256, 512 or 1024
    #[arg(short, long)]
    scale: Option<MapScale>,
}

#[derive(Args)]
struct TextureArgs {
    /// Output directory
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format: dds, png or tga
    #[arg(short, long)]
    format: Option<OutputFormat>,

    /// Block-compress DDS output with texconv
    #[arg(long)]
    compress: Option<bool>,

    /// Generate a full mip chain for DDS output
    #[arg(long)]
    mipmaps: Option<bool>,

    /// Halve textures larger than this (0 disables)
    #[arg(long)]
    cutoff: Option<u32>,

    /// Replace existing outputs
    #[arg(long)]
    overwrite: bool,

    /// Generate an emissive map (_e)
    #[arg(long)]
    emissive: bool,

    /// Generate a specular map (_s)
    #[arg(long)]
    specular: bool,

    /// Generate a normal map (_n)
    #[arg(long)]
    normal: bool,

    /// Emissive luminance threshold
    #[arg(long)]
    threshold: Option<u8>,

    /// Specular contrast multiplier
    #[arg(long)]
    contrast: Option<f32>,

    /// Normal map strength
    #[arg(long)]
    strength: Option<f32>,

    /// Flip the normal map green channel
    #[arg(long)]
    flip_y: bool,

    /// Path of the texconv executable
    #[arg(long, env = "TEXCONV")]
    texconv: Option<PathBuf>,
}

impl TextureArgs {
    /// Fold command-line overrides into the stored options.
    fn apply(&self, options: &mut TextureOptions) {
        if let Some(format) = self.format {
            options.output = format;
        }
        if let Some(compress) = self.compress {
            options.compress = compress;
        }
        if let Some(mipmaps) = self.mipmaps {
            options.mipmaps = mipmaps;
        }
        if let Some(cutoff) = self.cutoff {
            options.scale_cutoff = (cutoff > 0).then_some(cutoff);
        }
        options.overwrite |= self.overwrite;

        let generate = &mut options.generate;
        generate.emissive |= self.emissive;
        generate.specular |= self.specular;
        generate.normal |= self.normal;
        generate.flip_y |= self.flip_y;
        if let Some(threshold) = self.threshold {
            generate.emissive_threshold = threshold;
        }
        if let Some(contrast) = self.contrast {
            generate.specular_contrast = contrast;
        }
        if let Some(strength) = self.strength {
            generate.normal_strength = strength;
        }
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let mut settings = Settings::load(&cli.settings)?;

    match cli.command {
        Commands::ActInfo { input, index } => {
            cmd_act_info(input.as_deref(), index)?;
        }
        Commands::ActSet {
            output,
            input,
            entries,
        } => {
            cmd_act_set(input.as_deref(), &output, &entries)?;
        }
        Commands::ActImport { input, output } => {
            cmd_act_import(&input, &output)?;
        }
        Commands::MapToPng {
            inputs,
            map,
            palette,
        } => {
            if palette.is_some() {
                settings.palette = palette;
            }
            map.apply(&mut settings);
            cmd_map_to_png(&inputs, &settings)?;
        }
        Commands::PngToMap { inputs, map } => {
            map.apply(&mut settings);
            cmd_png_to_map(&inputs, &settings)?;
        }
        Commands::MapInfo { input } => {
            cmd_map_info(&input)?;
        }
        Commands::LgtToPng {
            input,
            output,
            width,
            trn,
        } => {
            if let Some(width) = width {
                settings.lgt_width = width;
            }
            let hint = match trn {
                Some(trn) => trn_width_hint(&trn)?,
                None => settings.lgt_width,
            };
            cmd_lgt_to_png(&input, output.as_deref(), hint)?;
        }
        Commands::PngToLgt {
            input,
            output,
            border,
        } => {
            cmd_png_to_lgt(&input, output.as_deref(), border)?;
        }
        Commands::Dxtbz2 {
            inputs,
            output,
            mipmaps,
            overwrite,
            texconv,
        } => {
            if output.is_some() {
                settings.output_dir = output;
            }
            if let Some(mipmaps) = mipmaps {
                settings.dxtbz2_mipmaps = mipmaps;
            }
            if texconv.is_some() {
                settings.texconv = texconv;
            }
            cmd_dxtbz2(&inputs, &settings, overwrite)?;
        }
        Commands::DdsInfo { input } => {
            cmd_dds_info(&input)?;
        }
        Commands::Texture { inputs, texture } => {
            if texture.output.is_some() {
                settings.output_dir = texture.output.clone();
            }
            if texture.texconv.is_some() {
                settings.texconv = texture.texconv.clone();
            }
            texture.apply(&mut settings.texture);
            cmd_texture(&inputs, &settings)?;
        }
    }

    if cli.save_settings {
        settings.save(&cli.settings)?;
    }

    Ok(())
}

impl MapArgs {
    fn apply(&self, settings: &mut Settings) {
        if self.output.is_some() {
            settings.output_dir = self.output.clone();
        }
        if let Some(scale) = self.scale {
            settings.map_scale = Some(scale.size());
        }
    }
}

fn cmd_act_info(input: Option<&Path>, index: Option<u8>) -> Result<()> {
    let palette = match input {
        Some(path) => Palette::open(path)
            .with_context(|| format!("Failed to read palette {}", path.display()))?,
        None => {
            println!("Built-in Moon palette");
            Palette::default()
        }
    };

    let indices: Vec<u8> = match index {
        Some(i) => vec![i],
        None => (0..=u8::MAX).collect(),
    };
    for i in indices {
        println!("{:>3}  {}  {}", i, palette.get(i), Palette::describe(i));
    }

    Ok(())
}

fn cmd_act_set(input: Option<&Path>, output: &Path, entries: &[String]) -> Result<()> {
    let mut palette = match input {
        Some(path) => Palette::open(path)
            .with_context(|| format!("Failed to read palette {}", path.display()))?,
        None => Palette::default(),
    };

    for entry in entries {
        let (index, color) = entry
            .split_once('=')
            .with_context(|| format!("Expected INDEX=#RRGGBB, got {:?}", entry))?;
        let index: u8 = index
            .trim()
            .parse()
            .with_context(|| format!("Invalid palette index {:?}", index))?;
        let color: Rgb = color
            .trim()
            .parse()
            .with_context(|| format!("Invalid colour {:?}", color))?;

        println!("{:>3}: {} -> {} ({})", index, palette.get(index), color, Palette::describe(index));
        palette.set(index, color);
    }

    palette
        .write(output)
        .with_context(|| format!("Failed to write palette {}", output.display()))?;
    println!("Palette written to {}", output.display());

    Ok(())
}

fn cmd_act_import(input: &Path, output: &Path) -> Result<()> {
    println!("Importing palette: {} -> {}", input.display(), output.display());

    let palette = Palette::import_from_file(input).context("Failed to import palette")?;
    palette.write(output).context("Failed to write palette")?;

    println!("Import complete");

    Ok(())
}

fn cmd_map_to_png(inputs: &[String], settings: &Settings) -> Result<()> {
    let palette = match &settings.palette {
        Some(path) => {
            println!("Using palette: {}", path.display());
            Palette::open(path)
                .with_context(|| format!("Failed to read palette {}", path.display()))?
        }
        None => Palette::default(),
    };
    let scale = map_scale(settings)?;
    let out_dir = prepare_output_dir(settings.output_dir.as_deref())?;

    let files = collect_inputs(inputs, &["map"])?;
    run_batch(&files, |file| {
        let out = map_to_png(file, out_dir, &palette, scale)?;
        Ok(format!("Exported {}", out.display()))
    })
}

fn cmd_png_to_map(inputs: &[String], settings: &Settings) -> Result<()> {
    let scale = map_scale(settings)?;
    let out_dir = prepare_output_dir(settings.output_dir.as_deref())?;

    let files = collect_inputs(inputs, IMAGE_EXTENSIONS)?;
    run_batch(&files, |file| {
        let out = png_to_map(file, out_dir, scale)?;
        Ok(format!("Packed {}", out.display()))
    })
}

fn cmd_map_info(input: &Path) -> Result<()> {
    let data = fs::read(input).context("Failed to read input file")?;
    let mut reader = BinaryReader::new(&data);
    let header = MapHeader::parse(&mut reader).context("Failed to parse MAP header")?;

    println!("File: {}", input.display());
    println!("Format: {:?} ({} bytes per pixel)", header.format, header.format.bytes_per_pixel());
    println!("Size: {}x{}", header.width(), header.height);
    println!("Row bytes: {}", header.row_bytes);
    println!("Pixel data: {} bytes", reader.remaining());

    Ok(())
}

fn trn_width_hint(trn: &Path) -> Result<u32> {
    let text = fs::read_to_string(trn)
        .with_context(|| format!("Failed to read terrain description {}", trn.display()))?;
    match lgt::trn::grid_width_hint(&text) {
        Some(width) => {
            println!("Grid width from {}: {} zones", trn.display(), width);
            Ok(width)
        }
        None => {
            log::warn!("{} declares no usable width, assuming a square map", trn.display());
            Ok(0)
        }
    }
}

fn cmd_lgt_to_png(input: &Path, output: Option<&Path>, width_hint: u32) -> Result<()> {
    println!("Converting lightmap: {}", input.display());

    let output = prepare_output_dir(output)?;
    let (out, grid) = lgt_to_png(input, output, width_hint).context("Failed to convert lightmap")?;

    println!(
        "Exported {}x{} zone map to {} ({} zones)",
        grid.width,
        grid.height,
        out.display(),
        grid.used_zones()
    );
    if grid.dropped_zones() > 0 {
        println!("Ignored {} trailing zones", grid.dropped_zones());
    }

    Ok(())
}

fn cmd_png_to_lgt(input: &Path, output: Option<&Path>, border: Option<u8>) -> Result<()> {
    println!("Packing lightmap: {}", input.display());

    let output = prepare_output_dir(output)?;
    let out = png_to_lgt(input, output, border).context("Failed to pack lightmap")?;

    println!("Lightmap written to {}", out.display());

    Ok(())
}

fn cmd_dxtbz2(inputs: &[String], settings: &Settings, overwrite: bool) -> Result<()> {
    let encoder = texconv(settings);
    let out_dir = prepare_output_dir(settings.output_dir.as_deref())?;
    let mipmaps = settings.dxtbz2_mipmaps;

    let files = collect_inputs(inputs, &["dxtbz2"])?;
    run_batch(&files, |file| {
        let outcome = convert_dxtbz2(file, out_dir, mipmaps, overwrite, &encoder)?;
        Ok(outcome.to_string())
    })
}

fn cmd_dds_info(input: &Path) -> Result<()> {
    let data = fs::read(input).context("Failed to read input file")?;
    println!("File: {}", input.display());

    let is_legacy = input
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("dxtbz2"));

    if is_legacy {
        let texture = DxtBz2::parse(&data).context("Failed to parse DXTBZ2 file")?;
        let header = &texture.header;
        let (width, height) = header.dimensions()?;
        let [r, g, b, a] = header.fallback_rgba;

        println!("Container: DXTBZ2");
        println!("Size: {}x{}", width, height);
        println!("Compression level: {}", header.dxt_level);
        println!("Mip levels: {}", header.mip_count);
        println!("Fallback colour: {} (alpha {})", Rgb::new(r, g, b), a);
        println!(
            "Top level: {} bytes ({})",
            texture.payload.len(),
            if texture.has_alpha { "DXT5" } else { "DXT1" }
        );
    } else {
        let file = DdsFile::parse(&data).context("Failed to parse DDS file")?;
        let header = file.header;
        let (width, height, mips) = (header.width, header.height, header.mipmap_count);

        println!("Container: DDS");
        println!("Size: {}x{}", width, height);
        println!("Mip levels: {}", mips.max(1));
        match file.four_cc() {
            Some(cc) => println!("Format: {}", cc.as_str().unwrap_or("unknown")),
            None => {
                let bits = header.pixel_format.rgb_bit_count;
                println!("Format: uncompressed {}-bit", bits);
            }
        }
        if let Some(size) = file.top_level_size() {
            println!("Top level: {} bytes", size);
        }
        println!("Surface data: {} bytes", file.data.len());
    }

    Ok(())
}

fn cmd_texture(inputs: &[String], settings: &Settings) -> Result<()> {
    let encoder = texconv(settings);
    let out_dir = prepare_output_dir(settings.output_dir.as_deref())?;
    let options = &settings.texture;

    let files = collect_inputs(inputs, IMAGE_EXTENSIONS)?;
    run_batch(&files, |file| {
        let outcome = process_texture(file, out_dir, options, &encoder)?;
        Ok(outcome.to_string())
    })
}

fn texconv(settings: &Settings) -> Texconv {
    settings
        .texconv
        .as_deref()
        .map(Texconv::new)
        .unwrap_or_default()
}

fn map_scale(settings: &Settings) -> Result<Option<MapScale>> {
    settings
        .map_scale
        .map(|edge| edge.to_string().parse::<MapScale>())
        .transpose()
        .context("Invalid map_scale in settings")
}

fn prepare_output_dir(dir: Option<&Path>) -> Result<Option<&Path>> {
    if let Some(dir) = dir {
        fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create output directory {}", dir.display()))?;
    }
    Ok(dir)
}

/// Expand files, directories and glob patterns into input files.
///
/// Directories contribute the files whose extension is in `extensions`.
fn collect_inputs(inputs: &[String], extensions: &[&str]) -> Result<Vec<PathBuf>> {
    let matches_extension = |path: &Path| {
        path.extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| extensions.iter().any(|x| x.eq_ignore_ascii_case(e)))
    };

    let mut files = Vec::new();
    for input in inputs {
        let path = Path::new(input);
        if path.is_dir() {
            let mut entries: Vec<PathBuf> = fs::read_dir(path)
                .with_context(|| format!("Failed to read directory {}", path.display()))?
                .filter_map(|e| e.ok())
                .map(|e| e.path())
                .filter(|p| p.is_file() && matches_extension(p))
                .collect();
            entries.sort();
            files.extend(entries);
        } else if input.contains(['*', '?', '[']) {
            let entries = glob::glob(input).context("Invalid glob pattern")?;
            files.extend(entries.filter_map(|p| p.ok()).filter(|p| p.is_file()));
        } else {
            files.push(path.to_path_buf());
        }
    }

    if files.is_empty() {
        anyhow::bail!("No input files found");
    }
    Ok(files)
}

/// Run `job` on every file.
///
/// A single file fails the command on error. Batches run in parallel, log and
/// skip failing files, and report counts at the end.
fn run_batch<F>(files: &[PathBuf], job: F) -> Result<()>
where
    F: Fn(&Path) -> Result<String> + Sync,
{
    if let [file] = files {
        let message = job(file).with_context(|| format!("Failed to convert {}", file.display()))?;
        println!("{}", message);
        return Ok(());
    }

    println!("Processing {} files...", files.len());

    let pb = ProgressBar::new(files.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({eta})")?
            .progress_chars("#>-"),
    );

    let start = Instant::now();
    let converted = AtomicUsize::new(0);
    let errors = AtomicUsize::new(0);

    files.par_iter().for_each(|file| {
        match job(file) {
            Ok(message) => {
                log::debug!("{}", message);
                converted.fetch_add(1, Ordering::Relaxed);
            }
            Err(e) => {
                pb.suspend(|| log::warn!("Skipping {}: {:#}", file.display(), e));
                errors.fetch_add(1, Ordering::Relaxed);
            }
        }
        pb.inc(1);
    });

    pb.finish_with_message("Done");
    let errors = errors.load(Ordering::Relaxed);
    println!(
        "Processed {} files in {:?} ({} errors)",
        converted.load(Ordering::Relaxed),
        start.elapsed(),
        errors
    );

    if errors > 0 {
        anyhow::bail!("{} of {} files failed", errors, files.len());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_texture_args_override() {
        let cli = Cli::parse_from([
            "bzredux",
            "texture",
            "a.png",
            "--format",
            "png",
            "--cutoff",
            "1024",
            "--normal",
            "--strength",
            "3.5",
            "--mipmaps",
            "false",
        ]);
        let Commands::Texture { inputs, texture } = cli.command else {
            panic!("expected texture command");
        };
        assert_eq!(inputs, ["a.png"]);

        let mut options = TextureOptions::default();
        texture.apply(&mut options);
        assert_eq!(options.output, OutputFormat::Png);
        assert_eq!(options.scale_cutoff, Some(1024));
        assert!(!options.mipmaps);
        assert!(options.compress);
        assert!(options.generate.normal && !options.generate.emissive);
        assert_eq!(options.generate.normal_strength, 3.5);
    }

    #[test]
    fn test_zero_cutoff_disables() {
        let cli = Cli::parse_from(["bzredux", "texture", "a.png", "--cutoff", "0"]);
        let Commands::Texture { texture, .. } = cli.command else {
            panic!("expected texture command");
        };
        let mut options = TextureOptions {
            scale_cutoff: Some(512),
            ..TextureOptions::default()
        };
        texture.apply(&mut options);
        assert_eq!(options.scale_cutoff, None);
    }

    #[test]
    fn test_map_scale_argument() {
        let cli = Cli::parse_from(["bzredux", "png-to-map", "a.png", "--scale", "512x512"]);
        let Commands::PngToMap { map, .. } = cli.command else {
            panic!("expected png-to-map command");
        };
        assert_eq!(map.scale, Some(MapScale::S512));

        let mut settings = Settings::default();
        map.apply(&mut settings);
        assert_eq!(map_scale(&settings).unwrap(), Some(MapScale::S512));
    }

    #[test]
    fn test_collect_inputs_from_directory() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["b.map", "a.MAP", "c.png"] {
            fs::write(dir.path().join(name), b"").unwrap();
        }

        let input = dir.path().to_string_lossy().into_owned();
        let files = collect_inputs(&[input], &["map"]).unwrap();
        let names: Vec<_> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, ["a.MAP", "b.map"]);
    }

    #[test]
    fn test_collect_inputs_glob() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["x.dxtbz2", "y.dxtbz2", "z.dds"] {
            fs::write(dir.path().join(name), b"").unwrap();
        }

        let pattern = format!("{}/*.dxtbz2", dir.path().display());
        assert_eq!(collect_inputs(&[pattern], &["dxtbz2"]).unwrap().len(), 2);

        let empty = format!("{}/*.lgt", dir.path().display());
        assert!(collect_inputs(&[empty], &["lgt"]).is_err());
    }

    #[test]
    fn test_batch_skips_failures() {
        let files = vec![PathBuf::from("ok"), PathBuf::from("bad"), PathBuf::from("ok2")];
        let seen = AtomicUsize::new(0);
        let result = run_batch(&files, |file| {
            seen.fetch_add(1, Ordering::Relaxed);
            if file == Path::new("bad") {
                anyhow::bail!("broken");
            }
            Ok(String::new())
        });
        assert_eq!(seen.load(Ordering::Relaxed), 3);
        let err = result.unwrap_err();
        assert_eq!(err.to_string(), "1 of 3 files failed");

        run_batch(&files, |_| Ok(String::new())).unwrap();

        let single = [PathBuf::from("bad")];
        assert!(run_batch(&single, |_| anyhow::bail!("broken")).is_err());
    }
}
