//! Layout engine for arranging problems on the sheet.
//!
//! This module handles:
//! - Placing problem strings into a fixed-column grid (down or across)
//! - Aligning each column on the `" = "` separator

mod align;
mod grid;

pub use align::{align_columns, column_max_lens, left_len, left_part};
pub use grid::{FillMode, Grid};

/// Arrange `problems` into `columns` columns and align every column.
pub fn layout(problems: Vec<String>, columns: usize, fill: FillMode) -> Grid {
    let mut grid = Grid::arrange(problems, columns, fill);
    align_columns(&mut grid);
    grid
}
