/// One grid position in the spritesheet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cell {
    pub row: u32,
    pub col: u32,
    /// Row-major linear index (`row * columns + col`)
    pub index: u32,
    /// Left edge of the cell in source coordinates
    pub x: u64,
    /// Top edge of the cell in source coordinates
    pub y: u64,
}

impl Cell {
    /// Output file name, e.g. `char_07_r0c7.svg`
    pub fn file_name(&self) -> String {
        format!("char_{:02}_r{}c{}.svg", self.index, self.row, self.col)
    }
}
