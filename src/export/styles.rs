//! Fixed `xl/styles.xml` part.
//!
//! Fonts: 0 = default Calibri 11, 1 = Consolas 16 (problems),
//! 2 = bold Calibri 18 (title). Cell formats index into these.

use crate::worksheet::CellStyle;

/// Cell format index (`s` attribute) for a cell style.
pub(crate) fn style_index(style: CellStyle) -> u32 {
    match style {
        CellStyle::Problem => 1,
        CellStyle::Title => 2,
    }
}

pub(crate) const STYLES_XML: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<styleSheet xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main">
<fonts count="3">
<font><sz val="11"/><name val="Calibri"/><family val="2"/></font>
<font><sz val="16"/><name val="Consolas"/><family val="3"/></font>
<font><b/><sz val="18"/><name val="Calibri"/><family val="2"/></font>
</fonts>
<fills count="2">
<fill><patternFill patternType="none"/></fill>
<fill><patternFill patternType="gray125"/></fill>
</fills>
<borders count="1">
<border><left/><right/><top/><bottom/><diagonal/></border>
</borders>
<cellStyleXfs count="1">
<xf numFmtId="0" fontId="0" fillId="0" borderId="0"/>
</cellStyleXfs>
<cellXfs count="3">
<xf numFmtId="0" fontId="0" fillId="0" borderId="0" xfId="0"/>
<xf numFmtId="0" fontId="1" fillId="0" borderId="0" xfId="0" applyFont="1" applyAlignment="1"><alignment horizontal="left" vertical="center"/></xf>
<xf numFmtId="0" fontId="2" fillId="0" borderId="0" xfId="0" applyFont="1"/>
</cellXfs>
<cellStyles count="1">
<cellStyle name="Normal" xfId="0" builtinId="0"/>
</cellStyles>
</styleSheet>"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_style_indices_exist() {
        // Indices must be below the cellXfs count.
        assert!(STYLES_XML.contains(r#"<cellXfs count="3">"#));
        assert!(style_index(CellStyle::Problem) < 3);
        assert!(style_index(CellStyle::Title) < 3);
        assert_ne!(
            style_index(CellStyle::Problem),
            style_index(CellStyle::Title)
        );
    }

    #[test]
    fn test_problem_font_is_monospace() {
        assert!(STYLES_XML.contains(r#"<sz val="16"/><name val="Consolas"/>"#));
    }
}
