//! [`SpreadsheetEncoder`] implementation producing XLSX packages

use std::io::{Seek, Write};

use sheetwright_core::style::{
    BorderKind, BorderSide, Color, DataFormat, FontSpec, HorizontalAlignment,
};
use sheetwright_core::{
    CellAddress, CellRange, CommentAnchor, Result, SheetId, SpreadsheetEncoder, StyleId, MAX_COLS,
    MAX_ROWS, MAX_SHEET_NAME_LEN,
};

use crate::error::{XlsxError, XlsxResult};
use crate::model::{CellContent, CellModel, SheetModel};
use crate::settings::XlsxSettings;
use crate::styles::XlsxStyleTable;
use crate::writer::XlsxWriter;

/// Builds an XLSX workbook in memory and writes it as a ZIP package
///
/// ```
/// use sheetwright_core::{CellDescriptor, Compiler, DocumentDescriptor, SpreadsheetEncoder};
/// use sheetwright_xlsx::XlsxEncoder;
///
/// let mut doc = DocumentDescriptor::new();
/// doc.add_sheet("Data").add_row().push(CellDescriptor::text("Hello"));
///
/// let mut encoder = XlsxEncoder::new();
/// Compiler::new(&mut encoder).compile(&doc).unwrap();
///
/// let mut buf = std::io::Cursor::new(Vec::new());
/// encoder.serialize(&mut buf).unwrap();
/// assert!(!buf.into_inner().is_empty());
/// ```
#[derive(Debug, Default)]
pub struct XlsxEncoder {
    settings: XlsxSettings,
    sheets: Vec<SheetModel>,
    styles: XlsxStyleTable,
}

impl XlsxEncoder {
    /// Create an encoder with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an encoder with explicit settings
    pub fn with_settings(settings: XlsxSettings) -> Self {
        Self {
            settings,
            ..Self::default()
        }
    }

    /// Settings in use
    pub fn settings(&self) -> &XlsxSettings {
        &self.settings
    }

    /// Number of sheets created so far
    pub fn sheet_count(&self) -> usize {
        self.sheets.len()
    }

    /// Number of style records created so far
    pub fn style_count(&self) -> usize {
        self.styles.len()
    }

    /// Write the package, reporting format-specific errors
    pub fn write_to<W: Write + Seek>(&self, writer: W) -> XlsxResult<()> {
        XlsxWriter::write(&self.sheets, &self.styles, &self.settings, writer)
    }

    fn validate_sheet_name(&self, name: &str) -> XlsxResult<()> {
        let invalid = |reason| XlsxError::InvalidSheetName {
            name: name.to_string(),
            reason,
        };

        if name.is_empty() {
            return Err(invalid("name cannot be empty"));
        }
        if name.chars().count() > MAX_SHEET_NAME_LEN {
            return Err(invalid("name is longer than 31 characters"));
        }

        const INVALID_CHARS: &[char] = &[':', '\\', '/', '?', '*', '[', ']'];
        if name.contains(INVALID_CHARS) {
            return Err(invalid("name cannot contain : \\ / ? * [ ]"));
        }

        let name_lower = name.to_lowercase();
        if self
            .sheets
            .iter()
            .any(|s| s.name.to_lowercase() == name_lower)
        {
            return Err(XlsxError::DuplicateSheetName(name.to_string()));
        }

        Ok(())
    }

    fn sheet_mut(&mut self, sheet: SheetId) -> XlsxResult<&mut SheetModel> {
        self.sheets
            .get_mut(sheet.0)
            .ok_or_else(|| XlsxError::unknown_sheet(sheet))
    }

    fn cell_mut(&mut self, sheet: SheetId, addr: CellAddress) -> XlsxResult<&mut CellModel> {
        self.sheet_mut(sheet)?
            .cell_mut(addr)
            .ok_or_else(|| XlsxError::MissingRow(format!("cell {} on {}", addr, sheet)))
    }

    fn check_bounds(addr: CellAddress) -> XlsxResult<()> {
        if addr.row >= MAX_ROWS || addr.col >= MAX_COLS {
            return Err(XlsxError::OutOfBounds(format!(
                "cell ({}, {}) is outside the worksheet grid",
                addr.row, addr.col
            )));
        }
        Ok(())
    }

    fn check_style(&self, style: StyleId) -> XlsxResult<()> {
        if self.styles.contains(style) {
            Ok(())
        } else {
            Err(XlsxError::unknown_style(style))
        }
    }
}

impl SpreadsheetEncoder for XlsxEncoder {
    fn create_sheet(&mut self, name: &str) -> Result<SheetId> {
        self.validate_sheet_name(name)?;
        self.sheets.push(SheetModel::new(name));
        Ok(SheetId(self.sheets.len() - 1))
    }

    fn create_row(&mut self, sheet: SheetId, row: u32) -> Result<()> {
        if row >= MAX_ROWS {
            return Err(XlsxError::OutOfBounds(format!("row index {}", row)).into());
        }
        if !self.sheet_mut(sheet)?.insert_row(row) {
            return Err(XlsxError::RowAlreadyExists { sheet, row }.into());
        }
        Ok(())
    }

    fn create_cell(&mut self, sheet: SheetId, addr: CellAddress) -> Result<()> {
        Self::check_bounds(addr)?;
        if !self.sheet_mut(sheet)?.insert_cell(addr) {
            return Err(XlsxError::MissingRow(format!("row {} on {}", addr.row + 1, sheet)).into());
        }
        Ok(())
    }

    fn set_cell_style(&mut self, sheet: SheetId, addr: CellAddress, style: StyleId) -> Result<()> {
        self.check_style(style)?;
        self.cell_mut(sheet, addr)?.style = Some(style);
        Ok(())
    }

    fn set_cell_text(&mut self, sheet: SheetId, addr: CellAddress, text: &str) -> Result<()> {
        self.cell_mut(sheet, addr)?.content = CellContent::Text(text.to_string());
        Ok(())
    }

    fn set_cell_number(&mut self, sheet: SheetId, addr: CellAddress, value: f64) -> Result<()> {
        if !value.is_finite() {
            return Err(XlsxError::NonFiniteNumber { addr, value }.into());
        }
        self.cell_mut(sheet, addr)?.content = CellContent::Number(value);
        Ok(())
    }

    fn set_cell_formula(
        &mut self,
        sheet: SheetId,
        addr: CellAddress,
        formula: &str,
    ) -> Result<()> {
        let formula = formula.strip_prefix('=').unwrap_or(formula);
        self.cell_mut(sheet, addr)?.formula = Some(formula.to_string());
        Ok(())
    }

    fn set_cell_hyperlink(
        &mut self,
        sheet: SheetId,
        addr: CellAddress,
        target: &str,
    ) -> Result<()> {
        self.cell_mut(sheet, addr)?;
        self.sheet_mut(sheet)?.set_hyperlink(addr, target);
        Ok(())
    }

    fn create_style(&mut self) -> Result<StyleId> {
        Ok(self.styles.create())
    }

    fn set_style_fill(&mut self, style: StyleId, color: Color) -> Result<()> {
        Ok(self.styles.set_fill(style, color)?)
    }

    fn set_style_border(
        &mut self,
        style: StyleId,
        side: BorderSide,
        kind: BorderKind,
    ) -> Result<()> {
        Ok(self.styles.set_border(style, side, kind)?)
    }

    fn set_style_font(&mut self, style: StyleId, font: &FontSpec) -> Result<()> {
        Ok(self.styles.set_font(style, font)?)
    }

    fn set_style_alignment(&mut self, style: StyleId, align: HorizontalAlignment) -> Result<()> {
        Ok(self.styles.set_alignment(style, align)?)
    }

    fn set_style_data_format(&mut self, style: StyleId, format: &DataFormat) -> Result<()> {
        Ok(self.styles.set_data_format(style, format)?)
    }

    fn add_comment(
        &mut self,
        sheet: SheetId,
        addr: CellAddress,
        anchor: CommentAnchor,
        text: &str,
    ) -> Result<()> {
        self.cell_mut(sheet, addr)?;
        self.sheet_mut(sheet)?.set_comment(addr, anchor, text);
        Ok(())
    }

    fn add_merged_region(&mut self, sheet: SheetId, range: CellRange) -> Result<()> {
        Self::check_bounds(range.end)?;
        let model = self.sheet_mut(sheet)?;
        if let Some(existing) = model.merged.iter().find(|r| r.overlaps(&range)) {
            let detail = format!("{} overlaps {}", range, existing);
            return Err(XlsxError::MergedCellConflict(detail).into());
        }
        model.merged.push(range);
        Ok(())
    }

    fn serialize<W: Write + Seek>(&self, writer: W) -> Result<()> {
        Ok(self.write_to(writer)?)
    }
}
