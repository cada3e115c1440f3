mod cell;
mod descriptor;

pub use cell::Cell;
pub use descriptor::{
    CellIter, DEFAULT_CELL_HEIGHT, DEFAULT_CELL_WIDTH, DEFAULT_COLUMNS, DEFAULT_ROWS,
    GridDescriptor,
};
