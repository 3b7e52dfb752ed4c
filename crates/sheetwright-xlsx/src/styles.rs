//! XLSX styles (styles.xml) table

use std::collections::HashMap;

use quick_xml::escape::escape;

use crate::error::{XlsxError, XlsxResult};
use crate::settings::XlsxSettings;
use sheetwright_core::style::{
    BorderKind, BorderSide, Color, DataFormat, FontSpec, HorizontalAlignment,
};
use sheetwright_core::StyleId;

/// First id available for custom number formats
const FIRST_CUSTOM_NUMFMT_ID: u32 = 164;

/// One style record as built up by the encoder calls
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub(crate) struct StyleRecord {
    pub fill: Option<Color>,
    pub border: BorderRecord,
    pub font: Option<FontSpec>,
    pub alignment: Option<HorizontalAlignment>,
    pub data_format: Option<DataFormat>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub(crate) struct BorderRecord {
    pub left: Option<BorderKind>,
    pub right: Option<BorderKind>,
    pub top: Option<BorderKind>,
    pub bottom: Option<BorderKind>,
}

impl BorderRecord {
    fn set(&mut self, side: BorderSide, kind: BorderKind) {
        match side {
            BorderSide::Top => self.top = Some(kind),
            BorderSide::Bottom => self.bottom = Some(kind),
            BorderSide::Left => self.left = Some(kind),
            BorderSide::Right => self.right = Some(kind),
        }
    }

    fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}

/// Font as written into `<fonts>`, with the defaults filled in
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct ResolvedFont {
    name: String,
    size: u16,
    bold: bool,
    color: Option<Color>,
}

impl ResolvedFont {
    fn default_font(settings: &XlsxSettings) -> Self {
        Self {
            name: settings.default_font_name.clone(),
            size: settings.default_font_size,
            bold: false,
            color: None,
        }
    }

    fn resolve(spec: &FontSpec, settings: &XlsxSettings) -> Self {
        Self {
            name: spec
                .family
                .clone()
                .unwrap_or_else(|| settings.default_font_name.clone()),
            size: spec.size.unwrap_or(settings.default_font_size),
            bold: spec.bold,
            color: spec.color,
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct ResolvedXfIds {
    font_id: u32,
    fill_id: u32,
    border_id: u32,
    num_fmt_id: u32,
}

/// Style records of a workbook
///
/// Record `n` is written as cellXfs entry `n + 1`; entry 0 is the default
/// format used by cells without a record.
#[derive(Debug, Default)]
pub(crate) struct XlsxStyleTable {
    records: Vec<StyleRecord>,
}

impl XlsxStyleTable {
    pub(crate) fn create(&mut self) -> StyleId {
        self.records.push(StyleRecord::default());
        StyleId(self.records.len() - 1)
    }

    pub(crate) fn contains(&self, id: StyleId) -> bool {
        id.0 < self.records.len()
    }

    pub(crate) fn len(&self) -> usize {
        self.records.len()
    }

    fn record_mut(&mut self, id: StyleId) -> XlsxResult<&mut StyleRecord> {
        self.records
            .get_mut(id.0)
            .ok_or_else(|| XlsxError::unknown_style(id))
    }

    pub(crate) fn set_fill(&mut self, id: StyleId, color: Color) -> XlsxResult<()> {
        check_color(color)?;
        self.record_mut(id)?.fill = Some(color);
        Ok(())
    }

    pub(crate) fn set_border(
        &mut self,
        id: StyleId,
        side: BorderSide,
        kind: BorderKind,
    ) -> XlsxResult<()> {
        self.record_mut(id)?.border.set(side, kind);
        Ok(())
    }

    pub(crate) fn set_font(&mut self, id: StyleId, font: &FontSpec) -> XlsxResult<()> {
        if let Some(color) = font.color {
            check_color(color)?;
        }
        self.record_mut(id)?.font = Some(font.clone());
        Ok(())
    }

    pub(crate) fn set_alignment(
        &mut self,
        id: StyleId,
        align: HorizontalAlignment,
    ) -> XlsxResult<()> {
        self.record_mut(id)?.alignment = Some(align);
        Ok(())
    }

    pub(crate) fn set_data_format(&mut self, id: StyleId, format: &DataFormat) -> XlsxResult<()> {
        if let DataFormat::BuiltIn(code) = format {
            if !DataFormat::is_known_builtin(*code) {
                return Err(XlsxError::UnsupportedNumberFormat(*code));
            }
        }
        self.record_mut(id)?.data_format = Some(format.clone());
        Ok(())
    }

    /// cellXfs index for a record
    pub(crate) fn xf_id(id: StyleId) -> usize {
        id.0 + 1
    }

    pub(crate) fn to_styles_xml(&self, settings: &XlsxSettings) -> String {
        // Build component tables
        let mut font_ids: HashMap<ResolvedFont, u32> = HashMap::new();
        let mut fonts: Vec<ResolvedFont> = Vec::new();

        let default_font = ResolvedFont::default_font(settings);
        fonts.push(default_font.clone());
        font_ids.insert(default_font, 0);

        // Excel requires the first two fills to be: none and gray125
        let mut fill_ids: HashMap<Color, u32> = HashMap::new();
        let mut fills: Vec<Color> = Vec::new();

        let mut border_ids: HashMap<BorderRecord, u32> = HashMap::new();
        let mut borders: Vec<BorderRecord> = vec![BorderRecord::default()];
        border_ids.insert(BorderRecord::default(), 0);

        let mut numfmt_ids: HashMap<&str, u32> = HashMap::new();
        let mut numfmts: Vec<(u32, &str)> = Vec::new();
        let mut next_numfmt_id = FIRST_CUSTOM_NUMFMT_ID;

        let mut resolved: Vec<ResolvedXfIds> = Vec::with_capacity(self.records.len());

        for record in &self.records {
            let font_id = match &record.font {
                None => 0,
                Some(spec) => {
                    let font = ResolvedFont::resolve(spec, settings);
                    match font_ids.get(&font) {
                        Some(&id) => id,
                        None => {
                            let id = fonts.len() as u32;
                            fonts.push(font.clone());
                            font_ids.insert(font, id);
                            id
                        }
                    }
                }
            };

            let fill_id = match record.fill {
                None => 0,
                Some(color) => match fill_ids.get(&color) {
                    Some(&id) => id,
                    None => {
                        let id = fills.len() as u32 + 2;
                        fills.push(color);
                        fill_ids.insert(color, id);
                        id
                    }
                },
            };

            let border_id = match border_ids.get(&record.border) {
                Some(&id) => id,
                None => {
                    let id = borders.len() as u32;
                    borders.push(record.border);
                    border_ids.insert(record.border, id);
                    id
                }
            };

            let num_fmt_id = match &record.data_format {
                None => 0,
                Some(DataFormat::BuiltIn(code)) => *code as u32,
                Some(DataFormat::Pattern(code)) => match numfmt_ids.get(code.as_str()) {
                    Some(&id) => id,
                    None => {
                        let id = next_numfmt_id;
                        next_numfmt_id += 1;
                        numfmt_ids.insert(code.as_str(), id);
                        numfmts.push((id, code.as_str()));
                        id
                    }
                },
            };

            resolved.push(ResolvedXfIds {
                font_id,
                fill_id,
                border_id,
                num_fmt_id,
            });
        }

        log::trace!(
            "styles.xml: {} records, {} fonts, {} fills, {} borders, {} custom formats",
            self.records.len(),
            fonts.len(),
            fills.len() + 2,
            borders.len(),
            numfmts.len()
        );

        // Write XML
        let mut xml = String::new();
        xml.push_str(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<styleSheet xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main">"#,
        );

        if !numfmts.is_empty() {
            xml.push_str(&format!("\n  <numFmts count=\"{}\">", numfmts.len()));
            for (id, code) in &numfmts {
                xml.push_str(&format!(
                    "\n    <numFmt numFmtId=\"{}\" formatCode=\"{}\"/>",
                    id,
                    escape(*code)
                ));
            }
            xml.push_str("\n  </numFmts>");
        }

        xml.push_str(&format!("\n  <fonts count=\"{}\">", fonts.len()));
        for font in &fonts {
            xml.push_str("\n    ");
            xml.push_str(&write_font(font));
        }
        xml.push_str("\n  </fonts>");

        xml.push_str(&format!("\n  <fills count=\"{}\">", fills.len() + 2));
        xml.push_str("\n    <fill><patternFill patternType=\"none\"/></fill>");
        xml.push_str("\n    <fill><patternFill patternType=\"gray125\"/></fill>");
        for color in &fills {
            xml.push_str("\n    ");
            xml.push_str(&write_fill(color));
        }
        xml.push_str("\n  </fills>");

        xml.push_str(&format!("\n  <borders count=\"{}\">", borders.len()));
        for border in &borders {
            xml.push_str("\n    ");
            xml.push_str(&write_border(border));
        }
        xml.push_str("\n  </borders>");

        // cellStyleXfs (required)
        xml.push_str(
            r#"
  <cellStyleXfs count="1">
    <xf numFmtId="0" fontId="0" fillId="0" borderId="0"/>
  </cellStyleXfs>"#,
        );

        xml.push_str(&format!(
            "\n  <cellXfs count=\"{}\">",
            self.records.len() + 1
        ));
        xml.push_str("\n    <xf numFmtId=\"0\" fontId=\"0\" fillId=\"0\" borderId=\"0\" xfId=\"0\"/>");
        for (record, ids) in self.records.iter().zip(&resolved) {
            xml.push_str("\n    ");
            xml.push_str(&write_xf(record, *ids));
        }
        xml.push_str("\n  </cellXfs>");

        // cellStyles (required)
        xml.push_str(
            r#"
  <cellStyles count="1">
    <cellStyle name="Normal" xfId="0" builtinId="0"/>
  </cellStyles>
  <dxfs count="0"/>
  <tableStyles count="0" defaultTableStyle="TableStyleMedium9" defaultPivotStyle="PivotStyleLight16"/>"#,
        );

        xml.push_str("\n</styleSheet>");
        xml
    }
}

fn check_color(color: Color) -> XlsxResult<()> {
    match color {
        Color::Indexed(i) if !color.is_valid() => Err(XlsxError::InvalidPaletteIndex(i)),
        _ => Ok(()),
    }
}

fn color_attrs(color: &Color) -> String {
    match color {
        Color::Indexed(i) => format!("indexed=\"{}\"", i),
        other => format!("rgb=\"{}\"", other.to_argb_hex().unwrap_or_default()),
    }
}

fn write_font(font: &ResolvedFont) -> String {
    let mut s = String::from("<font>");
    if font.bold {
        s.push_str("<b/>");
    }
    s.push_str(&format!("<sz val=\"{}\"/>", font.size));
    if let Some(color) = &font.color {
        s.push_str(&format!("<color {}/>", color_attrs(color)));
    }
    s.push_str(&format!("<name val=\"{}\"/>", escape(font.name.as_str())));
    s.push_str("<family val=\"2\"/>");
    s.push_str("</font>");
    s
}

fn write_fill(color: &Color) -> String {
    format!(
        "<fill><patternFill patternType=\"solid\"><fgColor {}/><bgColor indexed=\"64\"/></patternFill></fill>",
        color_attrs(color)
    )
}

fn border_kind_to_str(kind: BorderKind) -> &'static str {
    match kind {
        BorderKind::Thin => "thin",
        BorderKind::Medium => "medium",
        BorderKind::Thick => "thick",
        BorderKind::Dashed => "dashed",
        BorderKind::Dotted => "dotted",
        BorderKind::Double => "double",
        BorderKind::Hair => "hair",
        BorderKind::MediumDashed => "mediumDashed",
        BorderKind::DashDot => "dashDot",
        BorderKind::MediumDashDot => "mediumDashDot",
        BorderKind::DashDotDot => "dashDotDot",
        BorderKind::MediumDashDotDot => "mediumDashDotDot",
        BorderKind::SlantDashDot => "slantDashDot",
    }
}

fn write_border_edge(tag: &str, edge: Option<BorderKind>) -> String {
    match edge {
        None => format!("<{tag}/>"),
        Some(kind) => format!(
            "<{tag} style=\"{}\"><color indexed=\"64\"/></{tag}>",
            border_kind_to_str(kind)
        ),
    }
}

fn write_border(border: &BorderRecord) -> String {
    let mut s = String::from("<border>");
    s.push_str(&write_border_edge("left", border.left));
    s.push_str(&write_border_edge("right", border.right));
    s.push_str(&write_border_edge("top", border.top));
    s.push_str(&write_border_edge("bottom", border.bottom));
    s.push_str("<diagonal/>");
    s.push_str("</border>");
    s
}

fn horiz_to_str(h: HorizontalAlignment) -> &'static str {
    match h {
        HorizontalAlignment::General => "general",
        HorizontalAlignment::Left => "left",
        HorizontalAlignment::Center => "center",
        HorizontalAlignment::Right => "right",
        HorizontalAlignment::Fill => "fill",
        HorizontalAlignment::Justify => "justify",
        HorizontalAlignment::CenterContinuous => "centerContinuous",
        HorizontalAlignment::Distributed => "distributed",
    }
}

fn write_xf(record: &StyleRecord, ids: ResolvedXfIds) -> String {
    let mut attrs = String::new();
    if record.data_format.is_some() {
        attrs.push_str(" applyNumberFormat=\"1\"");
    }
    if record.font.is_some() {
        attrs.push_str(" applyFont=\"1\"");
    }
    if record.fill.is_some() {
        attrs.push_str(" applyFill=\"1\"");
    }
    if !record.border.is_empty() {
        attrs.push_str(" applyBorder=\"1\"");
    }
    if record.alignment.is_some() {
        attrs.push_str(" applyAlignment=\"1\"");
    }

    let mut s = format!(
        "<xf numFmtId=\"{}\" fontId=\"{}\" fillId=\"{}\" borderId=\"{}\" xfId=\"0\"{}",
        ids.num_fmt_id, ids.font_id, ids.fill_id, ids.border_id, attrs
    );

    match record.alignment {
        None => s.push_str("/>"),
        Some(align) => {
            s.push_str(&format!(
                "><alignment horizontal=\"{}\"/></xf>",
                horiz_to_str(align)
            ));
        }
    }
    s
}
