//! # sheetwright-core
//!
//! Core types for the sheetwright spreadsheet compiler.
//!
//! A document is described declaratively as a tree of descriptors and then
//! compiled into a concrete format through the [`SpreadsheetEncoder`] trait:
//! - [`DocumentDescriptor`], [`SheetDescriptor`], [`RowDescriptor`] - The tree
//! - [`CellDescriptor`] and [`CellValue`] - Cell content, spans and extras
//! - [`StyleDescriptor`] - Cell formatting (fill, borders, font, alignment, format)
//! - [`Compiler`] - Places cells, shares style records, computes merges and comment anchors
//!
//! ## Example
//!
//! ```rust
//! use sheetwright_core::{CellDescriptor, DocumentDescriptor};
//!
//! let mut doc = DocumentDescriptor::new();
//! let sheet = doc.add_sheet("Sales");
//!
//! sheet
//!     .add_row()
//!     .push(CellDescriptor::text("Sales 2024").title().with_column_span(2));
//! sheet
//!     .add_row()
//!     .push(CellDescriptor::text("Region").header())
//!     .push(CellDescriptor::text("Amount").header());
//! sheet
//!     .add_row()
//!     .push(CellDescriptor::text("North"))
//!     .push(CellDescriptor::number(1250.5).currency());
//! ```

pub mod cell;
pub mod compile;
pub mod document;
pub mod encoder;
pub mod error;
pub mod row;
pub mod sheet;
pub mod style;

// Re-exports for convenience
pub use cell::{CellAddress, CellDescriptor, CellRange, CellValue, Numeric};
pub use compile::{AnchorSize, CompileOptions, CompileReport, Compiler, StyleRegistry};
pub use document::DocumentDescriptor;
pub use encoder::{CommentAnchor, SheetId, SpreadsheetEncoder, StyleId};
pub use error::{Error, Result};
pub use row::RowDescriptor;
pub use sheet::SheetDescriptor;

// Re-export all style types for convenience
pub use style::{
    BorderKind, BorderSide, Color, DataFormat, FontSpec, HorizontalAlignment, StyleDescriptor,
};

/// Maximum number of rows in a worksheet
pub const MAX_ROWS: u32 = 1_048_576;

/// Maximum number of columns in a worksheet
pub const MAX_COLS: u16 = 16_384;

/// Maximum length of a sheet name
pub const MAX_SHEET_NAME_LEN: usize = 31;
