//! Print margins for the worksheet.
//! Writes and parses the `<pageMargins>` element of a worksheet part.

use quick_xml::events::BytesStart;
use serde::{Deserialize, Serialize};

/// Page margins in inches
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PageMargins {
    pub left: f64,
    pub right: f64,
    pub top: f64,
    pub bottom: f64,
    pub header: f64,
    pub footer: f64,
}

impl PageMargins {
    /// Excel's "Narrow" preset, used for printed worksheets.
    pub const NARROW: Self = Self {
        left: 0.25,
        right: 0.25,
        top: 0.75,
        bottom: 0.75,
        header: 0.3,
        footer: 0.3,
    };

    /// Serialize as a `<pageMargins .../>` element.
    #[must_use]
    pub fn to_xml(&self) -> String {
        format!(
            "<pageMargins left=\"{}\" right=\"{}\" top=\"{}\" bottom=\"{}\" header=\"{}\" footer=\"{}\"/>",
            self.left, self.right, self.top, self.bottom, self.header, self.footer
        )
    }
}

impl Default for PageMargins {
    fn default() -> Self {
        Self::NARROW
    }
}

/// Parse pageMargins element
///
/// Example XML:
/// ```xml
/// <pageMargins left="0.7" right="0.7" top="0.75" bottom="0.75" header="0.3" footer="0.3"/>
/// ```
/// Missing or malformed attributes read as 0.
pub fn parse_page_margins(e: &BytesStart) -> PageMargins {
    let mut margins = PageMargins {
        left: 0.0,
        right: 0.0,
        top: 0.0,
        bottom: 0.0,
        header: 0.0,
        footer: 0.0,
    };

    for attr in e.attributes().flatten() {
        let value: f64 = std::str::from_utf8(&attr.value)
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(0.0);

        match attr.key.as_ref() {
            b"left" => margins.left = value,
            b"right" => margins.right = value,
            b"top" => margins.top = value,
            b"bottom" => margins.bottom = value,
            b"header" => margins.header = value,
            b"footer" => margins.footer = value,
            _ => {}
        }
    }

    margins
}
