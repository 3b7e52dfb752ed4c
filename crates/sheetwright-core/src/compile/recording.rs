//! Encoder that records calls, for testing the compiler without a format

use crate::cell::{CellAddress, CellRange};
use crate::encoder::{CommentAnchor, SheetId, SpreadsheetEncoder, StyleId};
use crate::error::{Error, Result};
use crate::style::{BorderKind, BorderSide, Color, DataFormat, FontSpec, HorizontalAlignment};
use std::io::{Seek, Write};

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Call {
    CreateSheet(SheetId, String),
    CreateRow(SheetId, u32),
    CreateCell(SheetId, CellAddress),
    CellStyle(SheetId, CellAddress, StyleId),
    CellText(SheetId, CellAddress, String),
    CellNumber(SheetId, CellAddress, f64),
    CellFormula(SheetId, CellAddress, String),
    CellHyperlink(SheetId, CellAddress, String),
    CreateStyle(StyleId),
    StyleFill(StyleId, Color),
    StyleBorder(StyleId, BorderSide, BorderKind),
    StyleFont(StyleId, FontSpec),
    StyleAlignment(StyleId, HorizontalAlignment),
    StyleDataFormat(StyleId, DataFormat),
    Comment(SheetId, CellAddress, CommentAnchor, String),
    Merge(SheetId, CellRange),
}

#[derive(Debug, Default)]
pub(crate) struct RecordingEncoder {
    pub calls: Vec<Call>,
    sheets: usize,
    styles: usize,
    /// Fail `create_sheet` for this name
    pub reject_sheet: Option<String>,
}

impl RecordingEncoder {
    /// Encoder whose `create_sheet` fails for `name`
    pub fn rejecting(name: &str) -> Self {
        Self {
            reject_sheet: Some(name.to_string()),
            ..Self::default()
        }
    }

    pub fn count(&self, pred: impl Fn(&Call) -> bool) -> usize {
        self.calls.iter().filter(|c| pred(c)).count()
    }

    pub fn merges(&self) -> Vec<CellRange> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                Call::Merge(_, range) => Some(*range),
                _ => None,
            })
            .collect()
    }

    pub fn cell_addresses(&self) -> Vec<CellAddress> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                Call::CreateCell(_, addr) => Some(*addr),
                _ => None,
            })
            .collect()
    }

    pub fn rows(&self) -> Vec<u32> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                Call::CreateRow(_, row) => Some(*row),
                _ => None,
            })
            .collect()
    }
}

impl SpreadsheetEncoder for RecordingEncoder {
    fn create_sheet(&mut self, name: &str) -> Result<SheetId> {
        if self.reject_sheet.as_deref() == Some(name) {
            return Err(Error::encoding(format!("sheet name '{}' rejected", name)));
        }
        let id = SheetId(self.sheets);
        self.sheets += 1;
        self.calls.push(Call::CreateSheet(id, name.to_string()));
        Ok(id)
    }

    fn create_row(&mut self, sheet: SheetId, row: u32) -> Result<()> {
        self.calls.push(Call::CreateRow(sheet, row));
        Ok(())
    }

    fn create_cell(&mut self, sheet: SheetId, addr: CellAddress) -> Result<()> {
        self.calls.push(Call::CreateCell(sheet, addr));
        Ok(())
    }

    fn set_cell_style(&mut self, sheet: SheetId, addr: CellAddress, style: StyleId) -> Result<()> {
        self.calls.push(Call::CellStyle(sheet, addr, style));
        Ok(())
    }

    fn set_cell_text(&mut self, sheet: SheetId, addr: CellAddress, text: &str) -> Result<()> {
        self.calls.push(Call::CellText(sheet, addr, text.to_string()));
        Ok(())
    }

    fn set_cell_number(&mut self, sheet: SheetId, addr: CellAddress, value: f64) -> Result<()> {
        self.calls.push(Call::CellNumber(sheet, addr, value));
        Ok(())
    }

    fn set_cell_formula(
        &mut self,
        sheet: SheetId,
        addr: CellAddress,
        formula: &str,
    ) -> Result<()> {
        self.calls
            .push(Call::CellFormula(sheet, addr, formula.to_string()));
        Ok(())
    }

    fn set_cell_hyperlink(
        &mut self,
        sheet: SheetId,
        addr: CellAddress,
        target: &str,
    ) -> Result<()> {
        self.calls
            .push(Call::CellHyperlink(sheet, addr, target.to_string()));
        Ok(())
    }

    fn create_style(&mut self) -> Result<StyleId> {
        let id = StyleId(self.styles);
        self.styles += 1;
        self.calls.push(Call::CreateStyle(id));
        Ok(id)
    }

    fn set_style_fill(&mut self, style: StyleId, color: Color) -> Result<()> {
        self.calls.push(Call::StyleFill(style, color));
        Ok(())
    }

    fn set_style_border(
        &mut self,
        style: StyleId,
        side: BorderSide,
        kind: BorderKind,
    ) -> Result<()> {
        self.calls.push(Call::StyleBorder(style, side, kind));
        Ok(())
    }

    fn set_style_font(&mut self, style: StyleId, font: &FontSpec) -> Result<()> {
        self.calls.push(Call::StyleFont(style, font.clone()));
        Ok(())
    }

    fn set_style_alignment(&mut self, style: StyleId, align: HorizontalAlignment) -> Result<()> {
        self.calls.push(Call::StyleAlignment(style, align));
        Ok(())
    }

    fn set_style_data_format(&mut self, style: StyleId, format: &DataFormat) -> Result<()> {
        self.calls.push(Call::StyleDataFormat(style, format.clone()));
        Ok(())
    }

    fn add_comment(
        &mut self,
        sheet: SheetId,
        addr: CellAddress,
        anchor: CommentAnchor,
        text: &str,
    ) -> Result<()> {
        self.calls
            .push(Call::Comment(sheet, addr, anchor, text.to_string()));
        Ok(())
    }

    fn add_merged_region(&mut self, sheet: SheetId, range: CellRange) -> Result<()> {
        self.calls.push(Call::Merge(sheet, range));
        Ok(())
    }

    fn serialize<W: Write + Seek>(&self, mut writer: W) -> Result<()> {
        writeln!(writer, "{} calls", self.calls.len())?;
        Ok(())
    }
}
