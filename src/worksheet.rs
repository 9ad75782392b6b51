//! Worksheet model: the laid-out problem grid plus sheet formatting.
//!
//! A [`Worksheet`] is what the exporter serializes. It is built from a
//! [`WorksheetConfig`] in one pass: generate problems, render them to text,
//! lay them out, then attach title and print settings.

use std::path::PathBuf;

use rand::Rng;
use tracing::info;

use crate::config::WorksheetConfig;
use crate::error::Result;
use crate::export;
use crate::generator::{rng_from_seed, ProblemGenerator};
use crate::layout::{layout, Grid};
use crate::page_setup::PageMargins;
use crate::problem::make_problem_text;

/// Name of the single sheet in the workbook.
pub const SHEET_NAME: &str = "Problems";

/// Width of every grid column, in Excel character units (about 200 px).
pub const COLUMN_WIDTH: f64 = 29.0;

/// Height of every problem row, in points.
pub const ROW_HEIGHT: f64 = 24.0;

/// Rows taken by the title: the title itself and one blank spacer row.
pub const TITLE_ROWS: u32 = 2;

/// Visual role of a cell, mapped to a cell format by the exporter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellStyle {
    /// Bold 18pt Calibri.
    Title,
    /// 16pt Consolas, left aligned, vertically centered.
    Problem,
}

/// A positioned cell on the sheet (0-indexed).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SheetCell<'a> {
    pub row: u32,
    pub col: u32,
    pub text: &'a str,
    pub style: CellStyle,
}

/// One printable worksheet.
#[derive(Debug, Clone, PartialEq)]
pub struct Worksheet {
    pub name: String,
    pub title: Option<String>,
    /// Aligned problem grid.
    pub grid: Grid,
    pub column_width: f64,
    pub row_height: f64,
    pub margins: PageMargins,
}

impl Worksheet {
    /// Wrap an aligned grid with the default sheet formatting. An empty title
    /// counts as no title.
    pub fn new(grid: Grid, title: Option<String>) -> Self {
        Self {
            name: SHEET_NAME.to_string(),
            title: title.filter(|t| !t.is_empty()),
            grid,
            column_width: COLUMN_WIDTH,
            row_height: ROW_HEIGHT,
            margins: PageMargins::NARROW,
        }
    }

    /// Sheet row (0-indexed) holding the first grid row.
    pub fn first_grid_row(&self) -> u32 {
        if self.title.is_some() {
            TITLE_ROWS
        } else {
            0
        }
    }

    /// Sheet rows (0-indexed, end exclusive) covered by the grid.
    pub fn grid_rows(&self) -> std::ops::Range<u32> {
        let start = self.first_grid_row();
        start..start.saturating_add(to_u32(self.grid.row_count()))
    }

    /// Number of grid columns.
    pub fn column_count(&self) -> u32 {
        to_u32(self.grid.columns())
    }

    /// Every non-empty cell in row-major order: the title first, then the grid.
    pub fn cells(&self) -> impl Iterator<Item = SheetCell<'_>> {
        let offset = self.first_grid_row();
        let title = self.title.as_deref().map(|text| SheetCell {
            row: 0,
            col: 0,
            text,
            style: CellStyle::Title,
        });
        title
            .into_iter()
            .chain(self.grid.cells().map(move |(r, c, text)| SheetCell {
                row: offset.saturating_add(to_u32(r)),
                col: to_u32(c),
                text,
                style: CellStyle::Problem,
            }))
    }
}

fn to_u32(n: usize) -> u32 {
    u32::try_from(n).unwrap_or(u32::MAX)
}

/// Build a worksheet from `config` using `rng` for every random draw.
///
/// The config is validated first; an operations string with no supported
/// symbol is rejected here.
pub fn build_worksheet<R: Rng>(config: &WorksheetConfig, rng: R) -> Result<Worksheet> {
    config.validate()?;

    let mut generator =
        ProblemGenerator::from_symbols(&config.operations, config.constraints(), rng)?;
    let texts: Vec<String> = generator
        .problems(config.count)
        .iter()
        .map(make_problem_text)
        .collect();

    let grid = layout(texts, config.columns, config.fill);
    info!(
        count = config.count,
        columns = grid.columns(),
        rows = grid.row_count(),
        fill = %config.fill,
        "built worksheet"
    );

    Ok(Worksheet::new(grid, config.title.clone()))
}

/// Build a worksheet and write it to `config.output`.
///
/// Uses a seeded random source when `config.seed` is set, OS entropy
/// otherwise. Returns the path written.
pub fn generate_sheet(config: &WorksheetConfig) -> Result<PathBuf> {
    let sheet = build_worksheet(config, rng_from_seed(config.seed))?;
    export::write_xlsx(&sheet, &config.output)?;
    Ok(config.output.clone())
}
