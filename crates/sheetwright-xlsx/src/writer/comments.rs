//! Comments part and the legacy VML drawing that positions comment boxes

use quick_xml::escape::escape;

use super::worksheet::text_element;
use crate::model::{CommentModel, SheetModel};
use crate::settings::XlsxSettings;

fn sorted_comments(sheet: &SheetModel) -> Vec<&CommentModel> {
    let mut comments: Vec<&CommentModel> = sheet.comments.iter().collect();
    comments.sort_by_key(|c| (c.addr.row, c.addr.col));
    comments
}

/// `xl/commentsN.xml`
pub(crate) fn comments_xml(sheet: &SheetModel, settings: &XlsxSettings) -> String {
    let mut content = format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<comments xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main">
    <authors>
        <author>{}</author>
    </authors>
    <commentList>"#,
        escape(settings.comment_author.as_str())
    );

    for comment in sorted_comments(sheet) {
        content.push_str(&format!(
            r#"
        <comment ref="{}" authorId="0">
            <text>
                <r>
                    {}
                </r>
            </text>
        </comment>"#,
            comment.addr.to_a1_string(),
            text_element(&comment.text)
        ));
    }

    content.push_str(
        r#"
    </commentList>
</comments>"#,
    );
    content
}

/// Shape ids come in blocks of this size; each drawing owns whole blocks
const SHAPE_BLOCK: usize = 1024;

/// Number of shape id blocks a sheet's drawing needs
pub(crate) fn shape_blocks(sheet: &SheetModel) -> usize {
    // Id 0 of the first block is never used
    sheet.comments.len() / SHAPE_BLOCK + 1
}

/// `xl/drawings/vmlDrawingN.vml`
///
/// Each comment becomes a hidden note shape whose `x:Anchor` is the
/// comment's anchor rectangle (column, offset, row, offset for the top-left
/// and bottom-right corners). Shape ids start in block `first_block`.
pub(crate) fn vml_drawing_xml(sheet: &SheetModel, first_block: usize) -> String {
    let blocks: Vec<String> = (first_block..first_block + shape_blocks(sheet))
        .map(|b| b.to_string())
        .collect();

    let mut xml = String::with_capacity(2048);
    xml.push_str(
        r#"<xml xmlns:v="urn:schemas-microsoft-com:vml" xmlns:o="urn:schemas-microsoft-com:office:office" xmlns:x="urn:schemas-microsoft-com:office:excel">"#,
    );
    xml.push_str(&format!(
        r#"<o:shapelayout v:ext="edit"><o:idmap v:ext="edit" data="{}"/></o:shapelayout>"#,
        blocks.join(",")
    ));
    xml.push_str(
        r#"<v:shapetype id="_x0000_t202" coordsize="21600,21600" o:spt="202" path="m,l,21600r21600,l21600,xe">"#,
    );
    xml.push_str(
        r#"<v:stroke joinstyle="miter"/><v:path gradientshapeok="t" o:connecttype="rect"/>"#,
    );
    xml.push_str("</v:shapetype>");

    for (idx, comment) in sorted_comments(sheet).into_iter().enumerate() {
        let shape_id = first_block * SHAPE_BLOCK + idx + 1;
        let anchor = comment.anchor;

        xml.push_str(&format!(
            r##"<v:shape id="_x0000_s{}" type="#_x0000_t202" style="position:absolute;margin-left:59.25pt;margin-top:1.5pt;width:108pt;height:59.25pt;z-index:{};visibility:hidden" fillcolor="#ffffe1" o:insetmode="auto">"##,
            shape_id,
            idx + 1
        ));
        xml.push_str(r##"<v:fill color2="#ffffe1"/>"##);
        xml.push_str(r#"<v:shadow on="t" color="black" obscured="t"/>"#);
        xml.push_str(r#"<v:path o:connecttype="none"/>"#);
        xml.push_str(
            r#"<v:textbox style="mso-direction-alt:auto"><div style="text-align:left"></div></v:textbox>"#,
        );
        xml.push_str(r#"<x:ClientData ObjectType="Note"><x:MoveWithCells/><x:SizeWithCells/>"#);
        xml.push_str(&format!(
            "<x:Anchor>{}, 0, {}, 0, {}, 0, {}, 0</x:Anchor>",
            anchor.first_col, anchor.first_row, anchor.last_col, anchor.last_row
        ));
        xml.push_str("<x:AutoFill>False</x:AutoFill>");
        xml.push_str(&format!("<x:Row>{}</x:Row>", comment.addr.row));
        xml.push_str(&format!("<x:Column>{}</x:Column>", comment.addr.col));
        xml.push_str("</x:ClientData>");
        xml.push_str("</v:shape>");
    }

    xml.push_str("</xml>");
    xml
}
