//! Generates worksheet XML from a [`Worksheet`].
//!
//! Cells use inline strings (`t="inlineStr"`) with `xml:space="preserve"`,
//! so the leading spaces that align each column survive in the file.

use quick_xml::escape::escape;

use crate::cell_ref::{cell_ref, col_to_letter};
use crate::worksheet::{SheetCell, Worksheet};

use super::styles::style_index;

/// Write a complete worksheet XML string from a `Worksheet`.
pub(crate) fn write_sheet_xml(sheet: &Worksheet) -> String {
    let mut out = String::with_capacity(4096);
    out.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
    out.push('\n');
    out.push_str(
        r#"<worksheet xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main" "#,
    );
    out.push_str(
        r#"xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships">"#,
    );
    out.push('\n');

    // <dimension>
    out.push_str(&format!("<dimension ref=\"{}\"/>\n", dimension_ref(sheet)));

    // <sheetFormatPr>
    out.push_str("<sheetFormatPr defaultRowHeight=\"15\"/>\n");

    // <cols>
    let columns = sheet.column_count();
    if columns > 0 {
        out.push_str("<cols>\n");
        for col1 in 1..=columns {
            out.push_str(&format!(
                "<col min=\"{col1}\" max=\"{col1}\" width=\"{}\" customWidth=\"1\"/>\n",
                sheet.column_width
            ));
        }
        out.push_str("</cols>\n");
    }

    // <sheetData>
    out.push_str("<sheetData>\n");
    write_sheet_data(&mut out, sheet);
    out.push_str("</sheetData>\n");

    // <pageMargins>
    out.push_str(&sheet.margins.to_xml());
    out.push('\n');

    out.push_str("</worksheet>");
    out
}

/// Used range, e.g. `A1:C32`.
fn dimension_ref(sheet: &Worksheet) -> String {
    let last_row = sheet.cells().map(|c| c.row).max().unwrap_or(0);
    let last_col = sheet.cells().map(|c| c.col).max().unwrap_or(0);
    format!("A1:{}{}", col_to_letter(last_col), last_row + 1)
}

/// Write all cell rows into `<sheetData>`.
fn write_sheet_data(out: &mut String, sheet: &Worksheet) {
    // Group cells by row; `cells()` yields them in row-major order.
    let mut rows: Vec<(u32, Vec<SheetCell<'_>>)> = Vec::new();
    for cell in sheet.cells() {
        if let Some(last) = rows.last_mut() {
            if last.0 == cell.row {
                last.1.push(cell);
                continue;
            }
        }
        rows.push((cell.row, vec![cell]));
    }

    let grid_rows = sheet.grid_rows();
    for (row, cells) in &rows {
        out.push_str(&format!("<row r=\"{}\"", row + 1));
        if grid_rows.contains(row) {
            out.push_str(&format!(" ht=\"{}\" customHeight=\"1\"", sheet.row_height));
        }
        out.push('>');

        for cell in cells {
            write_cell(out, cell);
        }

        out.push_str("</row>\n");
    }
}

/// Write a single `<c>` element.
fn write_cell(out: &mut String, cell: &SheetCell<'_>) {
    out.push_str(&format!(
        "<c r=\"{}\" s=\"{}\" t=\"inlineStr\"><is><t xml:space=\"preserve\">",
        cell_ref(cell.row, cell.col),
        style_index(cell.style)
    ));
    out.push_str(&escape(cell.text));
    out.push_str("</t></is></c>");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::{layout, FillMode};

    fn sheet(items: &[&str], cols: usize, title: Option<&str>) -> Worksheet {
        let grid = layout(
            items.iter().map(|s| (*s).to_string()).collect(),
            cols,
            FillMode::Down,
        );
        Worksheet::new(grid, title.map(str::to_string))
    }

    #[test]
    fn test_title_and_grid_rows() {
        let ws = sheet(&["1 + 2 = ___", "10 + 2 = ___", "3 - 1 = ___"], 2, Some("Quiz"));
        let xml = write_sheet_xml(&ws);

        assert!(xml.contains(r#"<dimension ref="A1:B4"/>"#));
        assert!(xml.contains(r#"<row r="1"><c r="A1" s="2" t="inlineStr"><is><t xml:space="preserve">Quiz</t></is></c></row>"#));
        assert!(xml.contains(r#"<row r="3" ht="24" customHeight="1">"#));
        assert!(xml.contains(r#"<c r="A3" s="1" t="inlineStr"><is><t xml:space="preserve"> 1 + 2 = ___</t></is></c>"#));
        assert!(xml.contains(r#"<c r="B3" s="1""#));
        assert!(!xml.contains(r#"<row r="2""#));
    }

    #[test]
    fn test_columns_and_margins() {
        let ws = sheet(&["1 + 1 = ___"; 3], 3, None);
        let xml = write_sheet_xml(&ws);
        assert_eq!(xml.matches("<col ").count(), 3);
        assert!(xml.contains(r#"<col min="3" max="3" width="29" customWidth="1"/>"#));
        assert!(xml.contains(r#"<pageMargins left="0.25" right="0.25" top="0.75" bottom="0.75" header="0.3" footer="0.3"/>"#));
        assert!(xml.contains(r#"<row r="1" ht="24" customHeight="1">"#));
    }

    #[test]
    fn test_text_is_escaped() {
        let ws = sheet(&["1 + 1 = ___"], 1, Some("A & B <test>"));
        let xml = write_sheet_xml(&ws);
        assert!(xml.contains("A &amp; B &lt;test&gt;"));
    }
}
