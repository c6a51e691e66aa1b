//! rm2svg - Convert reMarkable .lines pages to SVG
//!
//! A command line tool that decodes one or more `.rm` page files and writes
//! them as SVG markup or as the decoded polylines in JSON.

use anyhow::{Context, Result, bail};
use clap::{ArgAction, Parser, ValueEnum};
use rmlines_core::converter::SvgConverter;
use rmlines_core::{ColorMode, DecodeOptions, Drawing, decode};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

/// Output type for the decoded page.
#[derive(Debug, Clone, Copy, ValueEnum, Default, PartialEq, Eq)]
enum OutputType {
    /// SVG markup (default)
    #[default]
    Svg,
    /// Decoded polylines as JSON
    Json,
}

impl OutputType {
    const fn extension(self) -> &'static str {
        match self {
            OutputType::Svg => "svg",
            OutputType::Json => "json",
        }
    }
}

/// Convert reMarkable .lines page files to SVG.
#[derive(Parser, Debug)]
#[command(name = "rm2svg")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// One or more .rm page files
    #[arg(required = true)]
    files: Vec<PathBuf>,

    /// Use debug logging level
    #[arg(short = 'd', long, action = ArgAction::SetTrue)]
    debug: bool,

    /// Color strokes with the annotation palette (blue, red, white, yellow)
    #[arg(short = 'c', long = "coloured-annotations", action = ArgAction::SetTrue)]
    coloured_annotations: bool,

    /// Output canvas width
    #[arg(short = 'x', long = "width", default_value = "1404")]
    width: f64,

    /// Output canvas height
    #[arg(short = 'y', long = "height", default_value = "1872")]
    height: f64,

    /// Type of output to generate
    #[arg(short = 't', long = "output-type", value_enum, default_value = "svg")]
    output_type: OutputType,

    /// Path to file where output is written, or "-" for stdout
    #[arg(short = 'o', long, default_value = "-")]
    outfile: String,

    /// Directory to write one output file per input (overrides --outfile)
    #[arg(short = 'O', long = "output-dir")]
    output_dir: Option<PathBuf>,
}

impl Args {
    fn decode_options(&self) -> DecodeOptions {
        DecodeOptions {
            color_mode: if self.coloured_annotations {
                ColorMode::Annotated
            } else {
                ColorMode::Standard
            },
            target_width: self.width,
            target_height: self.height,
        }
    }
}

fn init_logging(debug: bool) {
    let filter = if debug {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn write_drawing<W: Write>(
    drawing: &Drawing,
    writer: &mut W,
    output_type: OutputType,
) -> Result<()> {
    match output_type {
        OutputType::Svg => SvgConverter::new(&mut *writer).receive_drawing(drawing)?,
        OutputType::Json => {
            serde_json::to_writer_pretty(&mut *writer, drawing)?;
            writeln!(writer)?;
        }
    }
    Ok(())
}

/// Decode a single page file.
fn process_file(path: &Path, options: &DecodeOptions) -> Result<Drawing> {
    let data = std::fs::read(path).with_context(|| format!("reading {}", path.display()))?;
    tracing::info!("decoding {} ({} bytes)", path.display(), data.len());
    let drawing = decode(&data, options)?;
    Ok(drawing)
}

/// Output path for `input` inside `dir`, with the extension swapped.
fn output_path(dir: &Path, input: &Path, output_type: OutputType) -> PathBuf {
    let mut name = input
        .file_stem()
        .map(|s| s.to_os_string())
        .unwrap_or_else(|| "page".into());
    name.push(".");
    name.push(output_type.extension());
    dir.join(name)
}

fn run(args: &Args) -> Result<()> {
    let options = args.decode_options();
    options.validate()?;

    for path in &args.files {
        if !path.exists() {
            bail!("File not found: {}", path.display());
        }
    }

    if let Some(ref dir) = args.output_dir {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("creating output directory {}", dir.display()))?;
        for path in &args.files {
            let drawing = process_file(path, &options)
                .with_context(|| format!("processing {}", path.display()))?;
            let target = output_path(dir, path, args.output_type);
            let file = File::create(&target)
                .with_context(|| format!("creating {}", target.display()))?;
            let mut writer = BufWriter::new(file);
            write_drawing(&drawing, &mut writer, args.output_type)?;
            writer.flush()?;
        }
        return Ok(());
    }

    let mut output: Box<dyn Write> = if args.outfile == "-" {
        Box::new(BufWriter::new(io::stdout()))
    } else {
        let file = File::create(&args.outfile)
            .with_context(|| format!("creating output file {}", args.outfile))?;
        Box::new(BufWriter::new(file))
    };

    for path in &args.files {
        let drawing = process_file(path, &options)
            .with_context(|| format!("processing {}", path.display()))?;
        write_drawing(&drawing, &mut output, args.output_type)?;
    }

    output.flush()?;
    Ok(())
}

fn main() {
    let args = Args::parse();
    init_logging(args.debug);

    if let Err(e) = run(&args) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
