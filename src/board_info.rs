use std::fmt;

use crate::config::GridSize;

/// Board geometry summary printed by `--print-board`.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct BoardInfo {
    bounds: GridSize,
    cell_size: u32,
}

impl BoardInfo {
    #[must_use]
    pub fn new(bounds: GridSize, cell_size: u32) -> Self {
        Self { bounds, cell_size }
    }

    /// Pixel x of the left edge of every column.
    #[must_use]
    pub fn column_origins(&self) -> Vec<u64> {
        origins(self.bounds.width, self.cell_size)
    }

    /// Pixel y of the top edge of every row.
    #[must_use]
    pub fn row_origins(&self) -> Vec<u64> {
        origins(self.bounds.height, self.cell_size)
    }
}

/// Computed in `u64`: any `u16` cell index times any `u32` size fits.
fn origins(cells: u16, cell_size: u32) -> Vec<u64> {
    (0..u64::from(cells))
        .map(|i| i * u64::from(cell_size))
        .collect()
}

impl fmt::Display for BoardInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "cells:     {}", self.bounds.total_cells())?;
        writeln!(f, "columns:   {}", self.bounds.width)?;
        writeln!(f, "rows:      {}", self.bounds.height)?;
        writeln!(f, "cell size: {}px", self.cell_size)?;
        writeln!(f, "x: [ {}]", spaced(&self.column_origins()))?;
        write!(f, "y: [ {}]", spaced(&self.row_origins()))
    }
}

fn spaced(values: &[u64]) -> String {
    values.iter().map(|value| format!("{value} ")).collect()
}
