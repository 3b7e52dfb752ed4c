//! Prelude module - common imports for sheetwright users
//!
//! ```rust
//! use sheetwright::prelude::*;
//! ```

pub use crate::{
    // Descriptor tree
    CellDescriptor, CellValue, DocumentDescriptor, RowDescriptor, SheetDescriptor,
    // Style types
    BorderKind, BorderSide, Color, DataFormat, HorizontalAlignment, StyleDescriptor,
    // Addressing
    CellAddress, CellRange,
    // Compilation
    CompileOptions, CompileReport, Compiler, SpreadsheetEncoder,
    // Error types
    Error, Result,
    // Extension traits
    DocumentExt,
    // I/O types
    XlsxEncoder, XlsxSettings,
};
