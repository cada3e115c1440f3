use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use log::info;

use sprite_slicer::cli::CliArgs;
use sprite_slicer::config::LoadedConfig;
use sprite_slicer::grid::{
    DEFAULT_CELL_HEIGHT, DEFAULT_CELL_WIDTH, DEFAULT_COLUMNS, DEFAULT_ROWS, GridDescriptor,
};
use sprite_slicer::slicer::{ExtractMode, prompt_mode, slice_file};

const DEFAULT_INPUT: &str = "input.svg";

#[allow(clippy::print_stderr)]
fn main() {
    if let Err(e) = run() {
        // Use eprintln instead of error! because logger may not be initialized
        // (e.g., config loading fails before logger init)
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

#[allow(clippy::print_stdout)]
fn run() -> Result<()> {
    let args = CliArgs::parse();

    // Load config if specified and merge with CLI args
    let merged = merge_config_with_args(&args)?;

    // Initialize logging
    env_logger::Builder::new()
        .filter_level(if merged.verbose {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Info
        })
        .format_timestamp(None)
        .format_target(false)
        .init();

    info!("Sprite slicer v{}", env!("CARGO_PKG_VERSION"));

    let mode = match merged.mode {
        Some(mode) => mode,
        None => prompt_mode(io::stdin().lock(), io::stdout().lock())
            .context("failed to read extraction method")?,
    };

    let output = merged
        .output
        .unwrap_or_else(|| PathBuf::from(mode.default_output_dir()));

    let report = slice_file(&merged.input, &output, &merged.grid, mode)?;

    println!("{}", report.summary());
    println!("Done!");

    Ok(())
}

/// Merged configuration from CLI args and optional config file.
struct MergedConfig {
    input: PathBuf,
    output: Option<PathBuf>,
    mode: Option<ExtractMode>,
    grid: GridDescriptor,
    verbose: bool,
}

/// Merge config file values with CLI arguments.
/// CLI arguments always take precedence over config values.
fn merge_config_with_args(args: &CliArgs) -> Result<MergedConfig> {
    // Load config if specified
    let loaded_config = if let Some(config_path) = &args.config {
        Some(
            LoadedConfig::load(config_path)
                .with_context(|| format!("failed to load config: {}", config_path.display()))?,
        )
    } else {
        None
    };

    // Input: CLI > config > default
    let input = args.input.clone().unwrap_or_else(|| {
        loaded_config
            .as_ref()
            .and_then(LoadedConfig::resolve_input)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_INPUT))
    });

    // Output: CLI > config, otherwise chosen later from the mode
    let output = args.output.clone().or_else(|| {
        loaded_config
            .as_ref()
            .and_then(LoadedConfig::resolve_output_dir)
    });

    // Mode: CLI > config, otherwise prompt
    let mode = if let Some(m) = args.mode {
        Some(m)
    } else if let Some(name) = loaded_config.as_ref().and_then(|lc| lc.config.mode.as_ref()) {
        Some(parse_mode(name).ok_or_else(|| {
            anyhow::anyhow!(
                "unknown mode '{}' in config file. Valid values: translate, clip",
                name
            )
        })?)
    } else {
        None
    };

    // Grid dimensions: CLI > config > default
    let columns = args.columns.unwrap_or_else(|| {
        loaded_config
            .as_ref()
            .map(|lc| lc.config.grid.columns)
            .unwrap_or(DEFAULT_COLUMNS)
    });

    let rows = args.rows.unwrap_or_else(|| {
        loaded_config
            .as_ref()
            .map(|lc| lc.config.grid.rows)
            .unwrap_or(DEFAULT_ROWS)
    });

    let cell_width = args.cell_width.unwrap_or_else(|| {
        loaded_config
            .as_ref()
            .map(|lc| lc.config.grid.cell_width)
            .unwrap_or(DEFAULT_CELL_WIDTH)
    });

    let cell_height = args.cell_height.unwrap_or_else(|| {
        loaded_config
            .as_ref()
            .map(|lc| lc.config.grid.cell_height)
            .unwrap_or(DEFAULT_CELL_HEIGHT)
    });

    let grid = GridDescriptor::new(columns, rows, cell_width, cell_height)?;

    Ok(MergedConfig {
        input,
        output,
        mode,
        grid,
        verbose: args.verbose,
    })
}

fn parse_mode(s: &str) -> Option<ExtractMode> {
    // Same names and aliases the --mode flag accepts
    <ExtractMode as ValueEnum>::from_str(s, false).ok()
}
