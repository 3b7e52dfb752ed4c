//! Worksheet part and its relationships

use std::borrow::Cow;

use quick_xml::escape::escape;
use sheetwright_core::CellAddress;

use crate::model::{CellContent, CellModel, SheetModel};
use crate::styles::XlsxStyleTable;

const REL_HYPERLINK: &str =
    "http://schemas.openxmlformats.org/officeDocument/2006/relationships/hyperlink";
const REL_COMMENTS: &str =
    "http://schemas.openxmlformats.org/officeDocument/2006/relationships/comments";
const REL_VML_DRAWING: &str =
    "http://schemas.openxmlformats.org/officeDocument/2006/relationships/vmlDrawing";

/// Relationship ids of one worksheet
///
/// External hyperlinks come first (rId1..), followed by the comments part
/// and its VML drawing.
#[derive(Debug, Default)]
pub(crate) struct SheetRels {
    /// (cell, target, rId) for each external hyperlink
    hyperlinks: Vec<(CellAddress, String, usize)>,
    comments: Option<usize>,
    vml: Option<usize>,
}

impl SheetRels {
    pub(crate) fn for_sheet(sheet: &SheetModel) -> Self {
        let mut rels = SheetRels::default();
        let mut next = 1;

        for link in sheet.hyperlinks.iter().filter(|h| h.is_external()) {
            rels.hyperlinks.push((link.addr, link.target.clone(), next));
            next += 1;
        }

        if !sheet.comments.is_empty() {
            rels.comments = Some(next);
            rels.vml = Some(next + 1);
        }

        rels
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.hyperlinks.is_empty() && self.comments.is_none()
    }

    fn hyperlink_rid(&self, addr: CellAddress) -> Option<usize> {
        self.hyperlinks
            .iter()
            .find(|(a, _, _)| *a == addr)
            .map(|(_, _, rid)| *rid)
    }

    pub(crate) fn to_xml(&self, sheet_number: usize) -> String {
        let mut content = String::from(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">"#,
        );

        for (_, target, rid) in &self.hyperlinks {
            content.push_str(&format!(
                r#"
    <Relationship Id="rId{}" Type="{}" Target="{}" TargetMode="External"/>"#,
                rid,
                REL_HYPERLINK,
                escape(target.as_str())
            ));
        }

        if let Some(rid) = self.comments {
            content.push_str(&format!(
                r#"
    <Relationship Id="rId{}" Type="{}" Target="../comments{}.xml"/>"#,
                rid, REL_COMMENTS, sheet_number
            ));
        }

        if let Some(rid) = self.vml {
            content.push_str(&format!(
                r#"
    <Relationship Id="rId{}" Type="{}" Target="../drawings/vmlDrawing{}.vml"/>"#,
                rid, REL_VML_DRAWING, sheet_number
            ));
        }

        content.push_str("\n</Relationships>");
        content
    }
}

/// Serialize one worksheet
pub(crate) fn worksheet_xml(sheet: &SheetModel, rels: &SheetRels) -> String {
    let mut content = String::from(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<worksheet xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main" xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships">"#,
    );

    let dimension = sheet
        .dimension()
        .map(|r| r.to_a1_string())
        .unwrap_or_else(|| "A1".to_string());
    content.push_str(&format!("\n    <dimension ref=\"{}\"/>", dimension));

    if sheet.rows.is_empty() {
        content.push_str("\n    <sheetData/>");
    } else {
        content.push_str("\n    <sheetData>");
        for (row, data) in &sheet.rows {
            if data.cells.is_empty() {
                content.push_str(&format!("\n        <row r=\"{}\"/>", row + 1));
                continue;
            }
            content.push_str(&format!("\n        <row r=\"{}\">", row + 1));
            for (col, cell) in &data.cells {
                content.push_str("\n            ");
                write_cell(&mut content, CellAddress::new(*row, *col), cell);
            }
            content.push_str("\n        </row>");
        }
        content.push_str("\n    </sheetData>");
    }

    if !sheet.merged.is_empty() {
        content.push_str(&format!(
            "\n    <mergeCells count=\"{}\">",
            sheet.merged.len()
        ));
        for range in &sheet.merged {
            content.push_str(&format!(
                "\n        <mergeCell ref=\"{}\"/>",
                range.to_a1_string()
            ));
        }
        content.push_str("\n    </mergeCells>");
    }

    if !sheet.hyperlinks.is_empty() {
        content.push_str("\n    <hyperlinks>");
        for link in &sheet.hyperlinks {
            let cell_ref = link.addr.to_a1_string();
            // External links point at a relationship; others are in-workbook locations
            match rels.hyperlink_rid(link.addr) {
                Some(rid) if link.is_external() => content.push_str(&format!(
                    "\n        <hyperlink ref=\"{}\" r:id=\"rId{}\"/>",
                    cell_ref, rid
                )),
                _ => content.push_str(&format!(
                    "\n        <hyperlink ref=\"{}\" location=\"{}\"/>",
                    cell_ref,
                    escape(link.target.as_str())
                )),
            }
        }
        content.push_str("\n    </hyperlinks>");
    }

    content.push_str(
        r#"
    <pageMargins left="0.7" right="0.7" top="0.75" bottom="0.75" header="0.3" footer="0.3"/>"#,
    );

    if let Some(rid) = rels.vml {
        content.push_str(&format!("\n    <legacyDrawing r:id=\"rId{}\"/>", rid));
    }

    content.push_str("\n</worksheet>");
    content
}

fn write_cell(content: &mut String, addr: CellAddress, cell: &CellModel) {
    let cell_ref = addr.to_a1_string();
    let style_attr = match cell.style {
        Some(id) => format!(" s=\"{}\"", XlsxStyleTable::xf_id(id)),
        None => String::new(),
    };

    match (&cell.formula, &cell.content) {
        (Some(formula), CellContent::Number(n)) => content.push_str(&format!(
            "<c r=\"{}\"{}><f>{}</f><v>{}</v></c>",
            cell_ref,
            style_attr,
            escape(formula.as_str()),
            n
        )),
        (Some(formula), CellContent::Text(s)) if !s.is_empty() => content.push_str(&format!(
            "<c r=\"{}\"{} t=\"str\"><f>{}</f><v>{}</v></c>",
            cell_ref,
            style_attr,
            escape(formula.as_str()),
            escape(encode_text(s).as_ref())
        )),
        (Some(formula), _) => content.push_str(&format!(
            "<c r=\"{}\"{}><f>{}</f></c>",
            cell_ref,
            style_attr,
            escape(formula.as_str())
        )),
        (None, CellContent::Number(n)) => content.push_str(&format!(
            "<c r=\"{}\"{}><v>{}</v></c>",
            cell_ref, style_attr, n
        )),
        (None, CellContent::Text(s)) => content.push_str(&format!(
            "<c r=\"{}\"{} t=\"inlineStr\"><is>{}</is></c>",
            cell_ref,
            style_attr,
            text_element(s)
        )),
        (None, CellContent::Empty) => {
            content.push_str(&format!("<c r=\"{}\"{}/>", cell_ref, style_attr))
        }
    }
}

/// `<t>` element, preserving leading/trailing whitespace and line breaks
pub(crate) fn text_element(s: &str) -> String {
    let needs_preserve = s.starts_with(char::is_whitespace)
        || s.ends_with(char::is_whitespace)
        || s.contains('\n');
    let encoded = encode_text(s);
    if needs_preserve {
        format!("<t xml:space=\"preserve\">{}</t>", escape(encoded.as_ref()))
    } else {
        format!("<t>{}</t>", escape(encoded.as_ref()))
    }
}

/// Encode characters XML cannot carry as `_xHHHH_`
///
/// A literal `_xHHHH_` in the input gets its underscore encoded as `_x005F_`
/// so readers do not decode it.
pub(crate) fn encode_text(s: &str) -> Cow<'_, str> {
    if !s.chars().any(is_xml_forbidden) && !s.contains("_x") {
        return Cow::Borrowed(s);
    }

    let mut out = String::with_capacity(s.len() + 8);
    for (i, c) in s.char_indices() {
        if is_xml_forbidden(c) {
            out.push_str(&format!("_x{:04X}_", c as u32));
        } else if c == '_' && is_escape_sequence(&s[i..]) {
            out.push_str("_x005F_");
        } else {
            out.push(c);
        }
    }
    Cow::Owned(out)
}

fn is_xml_forbidden(c: char) -> bool {
    matches!(
        c,
        '\u{0}'..='\u{8}' | '\u{B}' | '\u{C}' | '\u{E}'..='\u{1F}' | '\u{FFFE}' | '\u{FFFF}'
    )
}

fn is_escape_sequence(s: &str) -> bool {
    let b = s.as_bytes();
    b.len() >= 7
        && b[0] == b'_'
        && b[1] == b'x'
        && b[2..6].iter().all(u8::is_ascii_hexdigit)
        && b[6] == b'_'
}
