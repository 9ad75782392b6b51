//! Per-column alignment on the answer separator.
//!
//! Every cell's text before `" = "` is left-padded so that, within a column,
//! all equals signs line up. Columns are aligned independently of each other.
//! Lengths are counted in characters so multi-byte symbols such as `×` count
//! once.

use crate::problem::{ANSWER_BLANK, ANSWER_SEPARATOR};

use super::Grid;

/// Text before the first answer separator (the whole text if there is none).
#[must_use]
pub fn left_part(text: &str) -> &str {
    text.split_once(ANSWER_SEPARATOR).map_or(text, |(left, _)| left)
}

/// Character count of [`left_part`].
#[must_use]
pub fn left_len(text: &str) -> usize {
    left_part(text).chars().count()
}

/// Longest left part per column. Columns with no populated cell stay 0.
#[must_use]
pub fn column_max_lens(grid: &Grid) -> Vec<usize> {
    (0..grid.columns())
        .map(|c| grid.column(c).map(left_len).max().unwrap_or(0))
        .collect()
}

/// Right-align every cell's left part to its column's longest left part and
/// re-append `" = ___"`.
pub fn align_columns(grid: &mut Grid) {
    let max_lens = column_max_lens(grid);
    for (col, text) in grid.cells_mut() {
        let width = max_lens.get(col).copied().unwrap_or(0);
        *text = pad_cell(text, width);
    }
}

fn pad_cell(text: &str, width: usize) -> String {
    let left = left_part(text);
    let padding = width.saturating_sub(left.chars().count());
    let mut out = String::with_capacity(
        padding + left.len() + ANSWER_SEPARATOR.len() + ANSWER_BLANK.len(),
    );
    out.extend(std::iter::repeat(' ').take(padding));
    out.push_str(left);
    out.push_str(ANSWER_SEPARATOR);
    out.push_str(ANSWER_BLANK);
    out
}
