use std::{
    io::Write,
    path::{Path, PathBuf},
};

use rayon::prelude::*;

use glyph_mesh::{tessellate, FanOrigin, FillMode, OutlineBuf, TessellateSettings};
use skrifa::GlyphId;
use tessera::{load_outline, map_char, CheckStats, Error, Font, Format, GlyphReport};

#[derive(clap::Parser, Debug)]
#[command(about = "Tessellates glyph outlines into GPU triangle meshes")]
struct Args {
    #[command(subcommand)]
    command: Command,
}

/// How the interior of each contour is filled.
#[derive(clap::ValueEnum, Copy, Clone, Default, Debug)]
enum Mode {
    /// Exact quadratic curves resolved in the fragment shader.
    #[default]
    Curves,
    /// A coarse polygon over the on-curve points only.
    Polygon,
}

impl From<Mode> for FillMode {
    fn from(value: Mode) -> Self {
        match value {
            Mode::Curves => FillMode::Curves,
            Mode::Polygon => FillMode::Polygon,
        }
    }
}

/// Where the solid fan of each contour is anchored.
#[derive(clap::ValueEnum, Copy, Clone, Default, Debug)]
enum Fan {
    /// The first hull point of the contour.
    #[default]
    FirstAnchor,
    /// The average of the hull points.
    Centroid,
}

impl From<Fan> for FanOrigin {
    fn from(value: Fan) -> Self {
        match value {
            Fan::FirstAnchor => FanOrigin::FirstAnchor,
            Fan::Centroid => FanOrigin::Centroid,
        }
    }
}

#[derive(clap::Subcommand, Debug)]
enum Command {
    /// Tessellate a single glyph and print or write the result
    Mesh {
        /// Path to the font file
        font: PathBuf,
        /// Index of the font in a collection
        #[arg(long, default_value_t = 0)]
        index: u32,
        /// Character to tessellate, mapped through the font's cmap [default: A]
        #[arg(long = "char", conflicts_with = "glyph_id")]
        character: Option<char>,
        /// Glyph identifier to tessellate
        #[arg(long)]
        glyph_id: Option<u32>,
        #[arg(long, value_enum, default_value_t)]
        mode: Mode,
        #[arg(long, value_enum, default_value_t)]
        fan: Fan,
        #[arg(long, value_enum, default_value_t)]
        format: Format,
        /// Write the output to this file instead of stdout
        #[arg(long, short)]
        output: Option<PathBuf>,
    },
    /// Tessellate all glyphs in a set of font files
    Check {
        /// Print the path for each font file as it is processed
        #[arg(long)]
        print_paths: bool,
        #[arg(long, value_enum, default_value_t)]
        mode: Mode,
        #[arg(long, value_enum, default_value_t)]
        fan: Fan,
        /// Paths to font files to check (may use glob syntax)
        files: Vec<PathBuf>,
    },
}

fn main() {
    env_logger::init();

    use clap::Parser as _;
    let args = Args::parse_from(wild::args());

    match args.command {
        Command::Mesh {
            font,
            index,
            character,
            glyph_id,
            mode,
            fan,
            format,
            output,
        } => {
            let settings = TessellateSettings::new()
                .with_fill_mode(mode.into())
                .with_fan_origin(fan.into());
            let target = match (character, glyph_id) {
                (_, Some(gid)) => Target::GlyphId(GlyphId::new(gid)),
                (ch, None) => Target::Char(ch.unwrap_or('A')),
            };
            if let Err(e) = mesh(&font, index, target, settings, format, output.as_deref()) {
                log::error!("{e}");
                std::process::exit(1);
            }
        }
        Command::Check {
            print_paths,
            mode,
            fan,
            files,
        } => {
            let settings = TessellateSettings::new()
                .with_fill_mode(mode.into())
                .with_fan_origin(fan.into());
            let stats = files
                .par_iter()
                .map(|path| {
                    if print_paths {
                        println!("[{path:?}]");
                    }
                    tessera::check_file(path, settings)
                })
                .reduce(CheckStats::default, |a, b| a + b);
            println!(
                "{} font(s), {} glyph(s) ({} empty), {} degenerate contour(s), {} failure(s)",
                stats.fonts, stats.glyphs, stats.empty, stats.degenerate_contours, stats.failures
            );
            if !stats.is_ok() {
                std::process::exit(1);
            }
        }
    }
}

enum Target {
    Char(char),
    GlyphId(GlyphId),
}

fn mesh(
    path: &Path,
    index: u32,
    target: Target,
    settings: TessellateSettings,
    format: Format,
    output: Option<&Path>,
) -> Result<(), Error> {
    let font = Font::new(path)?;
    let font_ref = font.font_ref(index)?;
    let (glyph_id, character) = match target {
        Target::Char(ch) => (map_char(&font_ref, ch)?, Some(ch)),
        Target::GlyphId(gid) => (gid, None),
    };
    let mut outline = OutlineBuf::new();
    let source = load_outline(&font_ref, glyph_id, &mut outline)?;
    let tessellation =
        tessellate(outline.as_ref(), settings).map_err(|e| Error::Tessellate(glyph_id, e))?;
    let report = GlyphReport::new(
        glyph_id.to_u32(),
        character,
        source,
        settings,
        outline.contours.len(),
        outline.points.len(),
        &tessellation,
    );
    let mut writer: Box<dyn Write> = match output {
        Some(path) => Box::new(std::io::BufWriter::new(std::fs::File::create(path)?)),
        None => Box::new(std::io::stdout().lock()),
    };
    report.write(format, &mut writer)
}
