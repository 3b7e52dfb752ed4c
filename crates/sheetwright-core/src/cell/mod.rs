//! Cell-related types and utilities
//!
//! This module contains:
//! - [`CellDescriptor`] - A cell's value, style and extras
//! - [`CellValue`] - The value carried by a cell
//! - [`CellAddress`] - A cell's location (e.g., "A1")
//! - [`CellRange`] - A range of cells (e.g., "A1:B10")

mod address;
mod descriptor;
mod value;

pub use address::{CellAddress, CellRange};
pub use descriptor::CellDescriptor;
pub use value::{CellValue, Numeric};
