//! XLSX error types

use sheetwright_core::{CellAddress, Error, SheetId, StyleId};
use thiserror::Error;

/// Result type for XLSX operations
pub type XlsxResult<T> = std::result::Result<T, XlsxError>;

/// Errors that can occur while building or writing an XLSX package
#[derive(Debug, Error)]
pub enum XlsxError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// ZIP error
    #[error("ZIP error: {0}")]
    Zip(#[from] zip::result::ZipError),

    /// Sheet name rejected by the format rules
    #[error("Invalid sheet name '{name}': {reason}")]
    InvalidSheetName {
        /// Offending name
        name: String,
        /// Rule that was broken
        reason: &'static str,
    },

    /// Sheet name already used (names compare case-insensitively)
    #[error("Duplicate sheet name '{0}'")]
    DuplicateSheetName(String),

    /// Built-in number format code outside the standard table
    #[error("Unsupported built-in number format {0}")]
    UnsupportedNumberFormat(u16),

    /// Palette index past the 64-entry legacy palette
    #[error("Palette index {0} is outside the 64-entry palette")]
    InvalidPaletteIndex(u8),

    /// NaN or infinity written as a cell number
    #[error("Cannot write non-finite number {value} to {addr}")]
    NonFiniteNumber {
        /// Target cell
        addr: CellAddress,
        /// Rejected value
        value: f64,
    },

    /// Position outside the worksheet grid
    #[error("Position out of bounds: {0}")]
    OutOfBounds(String),

    /// Handle not issued by this encoder
    #[error("Unknown handle: {0}")]
    UnknownHandle(String),

    /// Merged region overlapping an existing one
    #[error("Merged region conflict: {0}")]
    MergedCellConflict(String),

    /// Row created twice
    #[error("Row {row} already exists on {sheet}")]
    RowAlreadyExists {
        /// Sheet handle
        sheet: SheetId,
        /// 0-based row index
        row: u32,
    },

    /// Cell written to a row that was never created, or a cell never created
    #[error("Missing {0}")]
    MissingRow(String),
}

impl XlsxError {
    pub(crate) fn unknown_sheet(sheet: SheetId) -> Self {
        XlsxError::UnknownHandle(sheet.to_string())
    }

    pub(crate) fn unknown_style(style: StyleId) -> Self {
        XlsxError::UnknownHandle(style.to_string())
    }
}

impl From<XlsxError> for Error {
    fn from(err: XlsxError) -> Self {
        match err {
            XlsxError::Io(e) => Error::Io(e),
            XlsxError::Zip(zip::result::ZipError::Io(e)) => Error::Io(e),
            other @ (XlsxError::OutOfBounds(_)
            | XlsxError::RowAlreadyExists { .. }
            | XlsxError::MissingRow(_)
            | XlsxError::MergedCellConflict(_)) => Error::logic(other.to_string()),
            other => Error::encoding(other.to_string()),
        }
    }
}
