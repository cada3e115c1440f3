use serde::Deserialize;

use crate::grid::{DEFAULT_CELL_HEIGHT, DEFAULT_CELL_WIDTH, DEFAULT_COLUMNS, DEFAULT_ROWS};

/// Grid layout section of the config file.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    /// Number of columns in the sheet
    pub columns: u32,
    /// Number of rows in the sheet
    pub rows: u32,
    /// Cell width in source units
    pub cell_width: u32,
    /// Cell height in source units
    pub cell_height: u32,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            columns: DEFAULT_COLUMNS,
            rows: DEFAULT_ROWS,
            cell_width: DEFAULT_CELL_WIDTH,
            cell_height: DEFAULT_CELL_HEIGHT,
        }
    }
}

/// Slicer configuration file structure.
///
/// All paths in the config are relative to the config file location.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SlicerConfig {
    /// Config file version (currently 1)
    pub version: u32,
    /// Source spritesheet path
    pub input: Option<String>,
    /// Output directory for the per-cell files
    pub output_dir: Option<String>,
    /// Extraction mode: "translate" or "clip"
    pub mode: Option<String>,
    /// Grid layout
    pub grid: GridConfig,
}

impl Default for SlicerConfig {
    fn default() -> Self {
        Self {
            version: 1,
            input: None,
            output_dir: None,
            mode: None,
            grid: GridConfig::default(),
        }
    }
}
