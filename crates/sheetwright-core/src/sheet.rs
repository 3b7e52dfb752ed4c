//! Sheet descriptor

use crate::row::RowDescriptor;

/// A named sheet: rows in top-to-bottom order
///
/// Each row descriptor occupies exactly one grid row, whatever its cells'
/// row spans. The name is passed to the encoder as-is, which validates it.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SheetDescriptor {
    /// Sheet name
    pub name: String,
    /// Rows, in order
    pub rows: Vec<RowDescriptor>,
}

impl SheetDescriptor {
    /// Create an empty sheet
    pub fn new<S: Into<String>>(name: S) -> Self {
        Self {
            name: name.into(),
            rows: Vec::new(),
        }
    }

    /// Get the sheet name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Append an empty row and return it for filling
    pub fn add_row(&mut self) -> &mut RowDescriptor {
        self.rows.push(RowDescriptor::new());
        let last = self.rows.len() - 1;
        &mut self.rows[last]
    }

    /// Append a prepared row
    pub fn push_row(&mut self, row: RowDescriptor) -> &mut Self {
        self.rows.push(row);
        self
    }

    /// Iterate over the rows
    pub fn rows(&self) -> impl Iterator<Item = &RowDescriptor> {
        self.rows.iter()
    }

    /// Number of rows
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }
}
