//! XLSX export pipeline.
//!
//! Produces a minimal single-sheet XLSX package from a [`Worksheet`]:
//! package relationships, workbook, styles and the worksheet part. Cells
//! are written as inline strings so no shared string table is needed.

pub(crate) mod package;
pub(crate) mod sheet_writer;
pub(crate) mod styles;

use std::fs;
use std::path::Path;

use tracing::info;

use crate::error::Result;
use crate::worksheet::Worksheet;

/// Serialize a worksheet to XLSX bytes.
pub fn save_xlsx(sheet: &Worksheet) -> Result<Vec<u8>> {
    package::write_package(sheet)
}

/// Serialize a worksheet and write it to `path`.
pub fn write_xlsx(sheet: &Worksheet, path: &Path) -> Result<()> {
    let bytes = save_xlsx(sheet)?;
    fs::write(path, &bytes)?;
    info!(path = %path.display(), bytes = bytes.len(), "wrote worksheet");
    Ok(())
}
