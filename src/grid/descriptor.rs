use crate::error::SliceError;

use super::Cell;

pub const DEFAULT_COLUMNS: u32 = 12;
pub const DEFAULT_ROWS: u32 = 3;
pub const DEFAULT_CELL_WIDTH: u32 = 16;
pub const DEFAULT_CELL_HEIGHT: u32 = 16;

/// Layout of a uniform spritesheet grid.
///
/// Every dimension is non-zero and `columns * rows` fits in a `u32`;
/// [`GridDescriptor::new`] is the only way to build one besides `Default`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridDescriptor {
    columns: u32,
    rows: u32,
    cell_width: u32,
    cell_height: u32,
}

impl GridDescriptor {
    pub fn new(
        columns: u32,
        rows: u32,
        cell_width: u32,
        cell_height: u32,
    ) -> Result<Self, SliceError> {
        for (label, value) in [
            ("columns", columns),
            ("rows", rows),
            ("cell width", cell_width),
            ("cell height", cell_height),
        ] {
            if value == 0 {
                return Err(SliceError::InvalidGrid(format!("{} must be positive", label)));
            }
        }

        if columns.checked_mul(rows).is_none() {
            return Err(SliceError::InvalidGrid(format!(
                "{}x{} grid has too many cells",
                columns, rows
            )));
        }

        Ok(Self {
            columns,
            rows,
            cell_width,
            cell_height,
        })
    }

    pub fn columns(&self) -> u32 {
        self.columns
    }

    pub fn rows(&self) -> u32 {
        self.rows
    }

    pub fn cell_width(&self) -> u32 {
        self.cell_width
    }

    pub fn cell_height(&self) -> u32 {
        self.cell_height
    }

    /// Total number of cells (`columns * rows`)
    pub fn cell_count(&self) -> u32 {
        self.columns * self.rows
    }

    /// Width of the full sheet in source units
    pub fn canvas_width(&self) -> u64 {
        u64::from(self.columns) * u64::from(self.cell_width)
    }

    /// Height of the full sheet in source units
    pub fn canvas_height(&self) -> u64 {
        u64::from(self.rows) * u64::from(self.cell_height)
    }

    /// Look up a single cell, `None` if out of range
    pub fn cell(&self, row: u32, col: u32) -> Option<Cell> {
        if row >= self.rows || col >= self.columns {
            return None;
        }

        Some(Cell {
            row,
            col,
            index: row * self.columns + col,
            x: u64::from(col) * u64::from(self.cell_width),
            y: u64::from(row) * u64::from(self.cell_height),
        })
    }

    /// Iterate all cells in row-major order
    pub fn cells(&self) -> CellIter {
        CellIter {
            grid: *self,
            next: 0,
        }
    }
}

impl Default for GridDescriptor {
    fn default() -> Self {
        Self {
            columns: DEFAULT_COLUMNS,
            rows: DEFAULT_ROWS,
            cell_width: DEFAULT_CELL_WIDTH,
            cell_height: DEFAULT_CELL_HEIGHT,
        }
    }
}

/// Row-major iterator over the cells of a grid
#[derive(Debug, Clone)]
pub struct CellIter {
    grid: GridDescriptor,
    next: u32,
}

impl Iterator for CellIter {
    type Item = Cell;

    fn next(&mut self) -> Option<Cell> {
        if self.next >= self.grid.cell_count() {
            return None;
        }

        let index = self.next;
        self.next += 1;
        self.grid
            .cell(index / self.grid.columns, index % self.grid.columns)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = usize::try_from(self.grid.cell_count() - self.next).unwrap_or(usize::MAX);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for CellIter {}
