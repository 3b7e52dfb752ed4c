//! # sheetwright-xlsx
//!
//! XLSX (Office Open XML) encoder for sheetwright.
//!
//! [`XlsxEncoder`] implements [`SpreadsheetEncoder`](sheetwright_core::SpreadsheetEncoder):
//! the compiler fills an in-memory workbook model, which is then written as
//! a ZIP package with inline strings, a deduplicated `styles.xml`, merged
//! cells, hyperlinks and comments (with their VML drawings).

pub mod encoder;
pub mod error;
pub mod settings;

mod model;
mod styles;
mod writer;

pub use encoder::XlsxEncoder;
pub use error::{XlsxError, XlsxResult};
pub use settings::XlsxSettings;
