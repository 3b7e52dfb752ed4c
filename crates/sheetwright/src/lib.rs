//! # sheetwright
//!
//! Describe a spreadsheet as a tree of plain values and compile it into an
//! XLSX document.
//!
//! A [`DocumentDescriptor`] holds sheets, a sheet holds rows, a row holds
//! cells. Cells carry their value, style, formula, comment, hyperlink and
//! spans; positions are worked out when the tree is compiled, so a cell
//! spanning three columns pushes the next cell three columns to the right.
//!
//! ## Example
//!
//! ```rust
//! use sheetwright::prelude::*;
//!
//! let mut doc = DocumentDescriptor::new();
//! let sheet = doc.add_sheet("Report");
//!
//! sheet
//!     .add_row()
//!     .push(CellDescriptor::text("Monthly totals").title().with_column_span(2));
//! sheet
//!     .add_row()
//!     .push(CellDescriptor::text("Item").header())
//!     .push(CellDescriptor::text("Amount").header());
//! sheet
//!     .add_row()
//!     .push(CellDescriptor::text("Rent"))
//!     .push(CellDescriptor::number(1200).currency().with_comment("Paid in advance"));
//!
//! let bytes = doc.to_bytes().unwrap();
//! assert!(bytes.starts_with(b"PK"));
//!
//! // Save to file
//! // doc.save("report.xlsx").unwrap();
//! ```

pub mod prelude;

// Re-export core types
pub use sheetwright_core::{
    // Descriptor tree
    CellDescriptor, CellValue, DocumentDescriptor, Numeric, RowDescriptor, SheetDescriptor,
    // Style types
    BorderKind, BorderSide, Color, DataFormat, FontSpec, HorizontalAlignment, StyleDescriptor,
    // Addressing
    CellAddress, CellRange,
    // Compilation
    AnchorSize, CompileOptions, CompileReport, Compiler, StyleRegistry,
    // Encoder seam
    CommentAnchor, SheetId, SpreadsheetEncoder, StyleId,
    // Error types
    Error, Result,
    // Constants
    MAX_COLS, MAX_ROWS, MAX_SHEET_NAME_LEN,
};

// Re-export XLSX types
pub use sheetwright_xlsx::{XlsxEncoder, XlsxError, XlsxSettings};

use std::fs::File;
use std::io::{BufWriter, Cursor, Seek, Write};
use std::path::Path;

/// Extension trait for DocumentDescriptor to add XLSX output
pub trait DocumentExt {
    /// Compile and write the document to `path` as XLSX
    ///
    /// The document is compiled before the file is created, so a document
    /// that fails to compile leaves no file behind.
    fn save<P: AsRef<Path>>(&self, path: P) -> Result<CompileReport> {
        self.save_with(path, XlsxSettings::default())
    }

    /// Like [`save`](DocumentExt::save), with explicit package settings
    fn save_with<P: AsRef<Path>>(&self, path: P, settings: XlsxSettings) -> Result<CompileReport>;

    /// Compile the document and return the XLSX bytes
    fn to_bytes(&self) -> Result<Vec<u8>> {
        self.to_bytes_with(XlsxSettings::default())
    }

    /// Like [`to_bytes`](DocumentExt::to_bytes), with explicit package settings
    fn to_bytes_with(&self, settings: XlsxSettings) -> Result<Vec<u8>>;

    /// Compile the document and write it into any seekable writer
    fn write_xlsx<W: Write + Seek>(
        &self,
        writer: W,
        settings: XlsxSettings,
    ) -> Result<CompileReport>;
}

impl DocumentExt for DocumentDescriptor {
    fn save_with<P: AsRef<Path>>(&self, path: P, settings: XlsxSettings) -> Result<CompileReport> {
        let path = path.as_ref();
        let (encoder, report) = compile_xlsx(self, settings)?;

        let mut writer = BufWriter::new(File::create(path)?);
        encoder.serialize(&mut writer)?;
        writer.flush()?;

        log::info!(
            "saved {} ({} sheet(s), {} cells)",
            path.display(),
            report.sheets,
            report.cells
        );
        Ok(report)
    }

    fn to_bytes_with(&self, settings: XlsxSettings) -> Result<Vec<u8>> {
        let mut buf = Cursor::new(Vec::new());
        self.write_xlsx(&mut buf, settings)?;
        Ok(buf.into_inner())
    }

    fn write_xlsx<W: Write + Seek>(
        &self,
        writer: W,
        settings: XlsxSettings,
    ) -> Result<CompileReport> {
        let (encoder, report) = compile_xlsx(self, settings)?;
        encoder.serialize(writer)?;
        Ok(report)
    }
}

fn compile_xlsx(
    doc: &DocumentDescriptor,
    settings: XlsxSettings,
) -> Result<(XlsxEncoder, CompileReport)> {
    let mut encoder = XlsxEncoder::with_settings(settings);
    let report = Compiler::new(&mut encoder).compile(doc)?;
    Ok((encoder, report))
}
