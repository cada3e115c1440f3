use clap::Parser;
use std::path::PathBuf;

use crate::slicer::ExtractMode;

#[derive(Parser, Debug, Clone)]
#[command(name = "sprite-slicer")]
#[command(
    version,
    about = "Slice a grid spritesheet SVG into per-character SVG files",
    long_about = None
)]
pub struct CliArgs {
    /// Source spritesheet SVG [default: input.svg]
    pub input: Option<PathBuf>,

    /// Load settings from a JSON config file
    #[arg(short = 'c', long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Output directory [default: extracted_characters, or extracted_characters_clipped for clip]
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Extraction mode; asks interactively when not given
    #[arg(short, long, value_enum)]
    pub mode: Option<ExtractMode>,

    /// Number of grid columns [default: 12]
    #[arg(long)]
    pub columns: Option<u32>,

    /// Number of grid rows [default: 3]
    #[arg(long)]
    pub rows: Option<u32>,

    /// Cell width in source units [default: 16]
    #[arg(long)]
    pub cell_width: Option<u32>,

    /// Cell height in source units [default: 16]
    #[arg(long)]
    pub cell_height: Option<u32>,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,
}
