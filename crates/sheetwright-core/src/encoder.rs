//! The encoding capability the compiler drives
//!
//! A [`SpreadsheetEncoder`] owns an in-progress document in some concrete
//! format. The compiler only ever talks to it through this trait, so the
//! physical layout (XML parts, binary records, ...) stays with the encoder.

use crate::cell::{CellAddress, CellRange};
use crate::error::Result;
use crate::style::{BorderKind, BorderSide, Color, DataFormat, FontSpec, HorizontalAlignment};
use std::fmt;
use std::io::{Seek, Write};

/// Handle to a sheet created by an encoder
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SheetId(pub usize);

/// Handle to a style record created by an encoder
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StyleId(pub usize);

impl fmt::Display for SheetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "sheet#{}", self.0)
    }
}

impl fmt::Display for StyleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "style#{}", self.0)
    }
}

/// Rectangle a comment box is drawn over (inclusive, 0-based)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CommentAnchor {
    /// Left column
    pub first_col: u16,
    /// Top row
    pub first_row: u32,
    /// Right column
    pub last_col: u16,
    /// Bottom row
    pub last_row: u32,
}

/// Operations a target format must offer to receive a compiled document
///
/// Rows are created before their cells; cells before their contents.
/// Every failure is reported as one of the [`Error`](crate::Error)
/// categories.
pub trait SpreadsheetEncoder {
    /// Create a sheet, appended after the existing ones
    fn create_sheet(&mut self, name: &str) -> Result<SheetId>;

    /// Create a row at a 0-based index
    fn create_row(&mut self, sheet: SheetId, row: u32) -> Result<()>;

    /// Create a cell in an existing row
    fn create_cell(&mut self, sheet: SheetId, addr: CellAddress) -> Result<()>;

    /// Apply a style record to a cell
    fn set_cell_style(&mut self, sheet: SheetId, addr: CellAddress, style: StyleId) -> Result<()>;

    /// Write a text value
    fn set_cell_text(&mut self, sheet: SheetId, addr: CellAddress, text: &str) -> Result<()>;

    /// Write a numeric value
    fn set_cell_number(&mut self, sheet: SheetId, addr: CellAddress, value: f64) -> Result<()>;

    /// Attach a formula
    fn set_cell_formula(&mut self, sheet: SheetId, addr: CellAddress, formula: &str)
        -> Result<()>;

    /// Attach a hyperlink
    fn set_cell_hyperlink(&mut self, sheet: SheetId, addr: CellAddress, target: &str)
        -> Result<()>;

    /// Create an empty style record
    fn create_style(&mut self) -> Result<StyleId>;

    /// Set a solid fill
    fn set_style_fill(&mut self, style: StyleId, color: Color) -> Result<()>;

    /// Set one border side
    fn set_style_border(&mut self, style: StyleId, side: BorderSide, kind: BorderKind)
        -> Result<()>;

    /// Set the font record
    fn set_style_font(&mut self, style: StyleId, font: &FontSpec) -> Result<()>;

    /// Set horizontal alignment
    fn set_style_alignment(&mut self, style: StyleId, align: HorizontalAlignment) -> Result<()>;

    /// Set the number format
    fn set_style_data_format(&mut self, style: StyleId, format: &DataFormat) -> Result<()>;

    /// Attach a comment to a cell, drawn over `anchor`
    fn add_comment(
        &mut self,
        sheet: SheetId,
        addr: CellAddress,
        anchor: CommentAnchor,
        text: &str,
    ) -> Result<()>;

    /// Register a merged region
    fn add_merged_region(&mut self, sheet: SheetId, range: CellRange) -> Result<()>;

    /// Write the finished document
    fn serialize<W: Write + Seek>(&self, writer: W) -> Result<()>;
}
