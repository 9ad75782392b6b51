//! Read a generated worksheet back from XLSX bytes.
//!
//! Only the parts mathsheet writes are understood: the first sheet name from
//! `xl/workbook.xml` and the cells, column widths, row heights and page
//! margins of `xl/worksheets/sheet1.xml`. Cell text is returned exactly as
//! stored, including leading spaces.

use std::io::{Cursor, Read};

use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use zip::result::ZipError;
use zip::ZipArchive;

use crate::cell_ref::parse_cell_ref;
use crate::error::{MathsheetError, Result};
use crate::export::package::{SHEET_PATH, WORKBOOK_PATH};
use crate::page_setup::{parse_page_margins, PageMargins};

/// Text of one cell (0-indexed position).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CellText {
    pub row: u32,
    pub col: u32,
    pub text: String,
    /// Cell format index (`s` attribute), if any.
    pub style: Option<u32>,
}

/// Contents of a worksheet part.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SheetContents {
    pub sheet_name: Option<String>,
    pub cells: Vec<CellText>,
    /// `(col, width)` for every column with an explicit width (0-indexed).
    pub col_widths: Vec<(u32, f64)>,
    /// `(row, height)` for every row with a custom height (0-indexed).
    pub row_heights: Vec<(u32, f64)>,
    pub margins: Option<PageMargins>,
}

impl SheetContents {
    /// Text at `(row, col)`, if the cell exists.
    pub fn get(&self, row: u32, col: u32) -> Option<&str> {
        self.cells
            .iter()
            .find(|c| c.row == row && c.col == col)
            .map(|c| c.text.as_str())
    }
}

/// Open an XLSX package and read its worksheet.
pub fn read_sheet(data: &[u8]) -> Result<SheetContents> {
    let mut archive = ZipArchive::new(Cursor::new(data))?;

    let workbook = read_part(&mut archive, WORKBOOK_PATH)?;
    let sheet = read_part(&mut archive, SHEET_PATH)?;

    let mut contents = parse_sheet_xml(&sheet)?;
    contents.sheet_name = parse_first_sheet_name(&workbook)?;
    Ok(contents)
}

fn read_part(archive: &mut ZipArchive<Cursor<&[u8]>>, path: &str) -> Result<String> {
    let mut file = match archive.by_name(path) {
        Ok(file) => file,
        Err(ZipError::FileNotFound) => return Err(MathsheetError::MissingPart(path.to_string())),
        Err(e) => return Err(e.into()),
    };
    let mut xml = String::new();
    file.read_to_string(&mut xml)?;
    Ok(xml)
}

/// Extract a string attribute value by key.
fn attr_string(e: &BytesStart, key: &[u8]) -> Option<String> {
    for attr in e.attributes().flatten() {
        if attr.key.as_ref() == key {
            return std::str::from_utf8(&attr.value).ok().map(|s| s.to_string());
        }
    }
    None
}

fn attr_u32(e: &BytesStart, key: &[u8]) -> Option<u32> {
    attr_string(e, key).and_then(|s| s.parse().ok())
}

fn attr_f64(e: &BytesStart, key: &[u8]) -> Option<f64> {
    attr_string(e, key).and_then(|s| s.parse().ok())
}

fn parse_first_sheet_name(xml: &str) -> Result<Option<String>> {
    let mut reader = Reader::from_str(xml);
    let mut buf = Vec::new();
    loop {
        match reader.read_event_into(&mut buf)? {
            Event::Start(ref e) | Event::Empty(ref e) if e.local_name().as_ref() == b"sheet" => {
                return Ok(attr_string(e, b"name"));
            }
            Event::Eof => return Ok(None),
            _ => {}
        }
        buf.clear();
    }
}

/// In-progress `<c>` element.
struct PendingCell {
    row: u32,
    col: u32,
    style: Option<u32>,
    text: String,
}

/// Parse a worksheet part.
pub fn parse_sheet_xml(xml: &str) -> Result<SheetContents> {
    let mut reader = Reader::from_str(xml);
    let mut buf = Vec::new();
    let mut contents = SheetContents::default();
    let mut pending: Option<PendingCell> = None;
    let mut in_text = false;

    loop {
        match reader.read_event_into(&mut buf)? {
            Event::Start(ref e) => match e.local_name().as_ref() {
                b"c" => pending = start_cell(e),
                b"t" | b"v" => in_text = true,
                b"row" => read_row_height(e, &mut contents),
                b"col" => read_col_width(e, &mut contents),
                _ => {}
            },
            Event::Empty(ref e) => match e.local_name().as_ref() {
                b"col" => read_col_width(e, &mut contents),
                b"pageMargins" => contents.margins = Some(parse_page_margins(e)),
                b"row" => read_row_height(e, &mut contents),
                _ => {}
            },
            Event::Text(ref t) if in_text => {
                if let Some(cell) = pending.as_mut() {
                    cell.text.push_str(&t.unescape()?);
                }
            }
            Event::End(ref e) => match e.local_name().as_ref() {
                b"t" | b"v" => in_text = false,
                b"c" => {
                    if let Some(cell) = pending.take() {
                        contents.cells.push(CellText {
                            row: cell.row,
                            col: cell.col,
                            text: cell.text,
                            style: cell.style,
                        });
                    }
                }
                _ => {}
            },
            Event::Eof => break,
            _ => {}
        }
        buf.clear();
    }

    Ok(contents)
}

fn start_cell(e: &BytesStart) -> Option<PendingCell> {
    let (col, row) = attr_string(e, b"r").and_then(|r| parse_cell_ref(&r))?;
    Some(PendingCell {
        row,
        col,
        style: attr_u32(e, b"s"),
        text: String::new(),
    })
}

fn read_row_height(e: &BytesStart, contents: &mut SheetContents) {
    let custom = attr_string(e, b"customHeight").is_some_and(|v| v == "1" || v == "true");
    if let (true, Some(r), Some(ht)) = (custom, attr_u32(e, b"r"), attr_f64(e, b"ht")) {
        if r > 0 {
            contents.row_heights.push((r - 1, ht));
        }
    }
}

fn read_col_width(e: &BytesStart, contents: &mut SheetContents) {
    if let (Some(min), Some(max), Some(width)) =
        (attr_u32(e, b"min"), attr_u32(e, b"max"), attr_f64(e, b"width"))
    {
        for col in min.max(1)..=max {
            contents.col_widths.push((col - 1, width));
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing, clippy::float_cmp)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_sheet_xml_keeps_leading_spaces() {
        let xml = r#"<worksheet xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main">
<cols><col min="1" max="2" width="29" customWidth="1"/></cols>
<sheetData>
<row r="3" ht="24" customHeight="1"><c r="A3" s="1" t="inlineStr"><is><t xml:space="preserve">  1 + 2 = ___</t></is></c><c r="B3"><v>7</v></c></row>
</sheetData>
<pageMargins left="0.25" right="0.25" top="0.75" bottom="0.75" header="0.3" footer="0.3"/>
</worksheet>"#;
        let contents = parse_sheet_xml(xml).unwrap();

        assert_eq!(contents.get(2, 0), Some("  1 + 2 = ___"));
        assert_eq!(contents.cells[0].style, Some(1));
        assert_eq!(contents.get(2, 1), Some("7"));
        assert_eq!(contents.col_widths, vec![(0, 29.0), (1, 29.0)]);
        assert_eq!(contents.row_heights, vec![(2, 24.0)]);
        assert_eq!(contents.margins, Some(PageMargins::NARROW));
    }

    #[test]
    fn test_parse_unescapes_text() {
        let xml = r#"<worksheet><sheetData><row r="1"><c r="A1" t="inlineStr"><is><t>A &amp; B</t></is></c></row></sheetData></worksheet>"#;
        let contents = parse_sheet_xml(xml).unwrap();
        assert_eq!(contents.get(0, 0), Some("A & B"));
        assert!(contents.row_heights.is_empty());
    }

    #[test]
    fn test_missing_part() {
        let mut writer = zip::ZipWriter::new(Cursor::new(Vec::new()));
        writer
            .start_file("xl/workbook.xml", zip::write::FileOptions::default())
            .unwrap();
        let bytes = writer.finish().unwrap().into_inner();

        let err = read_sheet(&bytes).unwrap_err();
        assert!(matches!(err, MathsheetError::MissingPart(ref p) if p == SHEET_PATH));
    }
}
