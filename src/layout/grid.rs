//! Fixed-column grid of problem strings.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Order in which problems are placed into the grid.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FillMode {
    /// Column-major: column 0 top to bottom, then column 1, ...
    #[default]
    Down,
    /// Row-major: row 0 left to right, then row 1, ...
    Across,
}

impl FillMode {
    /// Parse a fill mode, falling back to [`FillMode::Down`] for unknown input.
    #[must_use]
    pub fn parse_lenient(s: &str) -> Self {
        s.parse().unwrap_or_default()
    }

    /// Grid positions `(row, col)` in placement order.
    pub fn positions(self, rows: usize, columns: usize) -> impl Iterator<Item = (usize, usize)> {
        let total = rows * columns;
        (0..total).map(move |i| match self {
            Self::Down => (i % rows, i / rows),
            Self::Across => (i / columns, i % columns),
        })
    }
}

impl FromStr for FillMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "down" => Ok(Self::Down),
            "across" => Ok(Self::Across),
            other => Err(format!("unknown fill mode {other:?} (expected down or across)")),
        }
    }
}

impl fmt::Display for FillMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Down => "down",
            Self::Across => "across",
        })
    }
}

/// Rows of optional cells; trailing slots stay empty when the item count is
/// not a multiple of the column count.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Grid {
    columns: usize,
    rows: Vec<Vec<Option<String>>>,
}

impl Grid {
    /// Place `items` into `columns` columns in `fill` order.
    ///
    /// `columns` below 1 is treated as 1.
    pub fn arrange(items: Vec<String>, columns: usize, fill: FillMode) -> Self {
        let columns = columns.max(1);
        let row_count = items.len().div_ceil(columns);
        let mut rows = vec![vec![None; columns]; row_count];

        // positions() covers every slot; zip stops once items run out.
        for ((r, c), item) in fill.positions(row_count, columns).zip(items) {
            if let Some(slot) = rows.get_mut(r).and_then(|row| row.get_mut(c)) {
                *slot = Some(item);
            }
        }

        Self { columns, rows }
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn rows(&self) -> &[Vec<Option<String>>] {
        &self.rows
    }

    /// Cell text at `(row, col)`, if populated.
    pub fn get(&self, row: usize, col: usize) -> Option<&str> {
        self.rows
            .get(row)
            .and_then(|r| r.get(col))
            .and_then(Option::as_deref)
    }

    /// Populated cells of column `col`, top to bottom.
    pub fn column(&self, col: usize) -> impl Iterator<Item = &str> {
        self.rows
            .iter()
            .filter_map(move |r| r.get(col).and_then(Option::as_deref))
    }

    /// Every populated cell as `(row, col, text)` in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize, &str)> {
        self.rows.iter().enumerate().flat_map(|(r, row)| {
            row.iter()
                .enumerate()
                .filter_map(move |(c, cell)| cell.as_deref().map(|text| (r, c, text)))
        })
    }

    pub(crate) fn cells_mut(&mut self) -> impl Iterator<Item = (usize, &mut String)> {
        self.rows.iter_mut().flat_map(|row| {
            row.iter_mut()
                .enumerate()
                .filter_map(|(c, cell)| cell.as_mut().map(|text| (c, text)))
        })
    }

    /// Number of populated cells.
    pub fn filled_count(&self) -> usize {
        self.cells().count()
    }

    /// Plain-text rendering: one line per row, columns padded to their widest
    /// cell and separated by `gap` spaces. Trailing whitespace is trimmed.
    pub fn to_text(&self, gap: usize) -> String {
        let widths: Vec<usize> = (0..self.columns)
            .map(|c| self.column(c).map(|t| t.chars().count()).max().unwrap_or(0))
            .collect();

        let mut out = String::new();
        for row in &self.rows {
            let mut line = String::new();
            for (cell, width) in row.iter().zip(&widths) {
                let text = cell.as_deref().unwrap_or("");
                line.push_str(text);
                let pad = width.saturating_sub(text.chars().count()) + gap;
                line.extend(std::iter::repeat(' ').take(pad));
            }
            out.push_str(line.trim_end());
            out.push('\n');
        }
        out
    }
}
