//! Document descriptor - the root of the tree

use crate::sheet::SheetDescriptor;

/// An ordered list of sheets
///
/// ```
/// use sheetwright_core::{CellDescriptor, DocumentDescriptor};
///
/// let mut doc = DocumentDescriptor::new();
/// let sheet = doc.add_sheet("Summary");
/// sheet.add_row().push(CellDescriptor::text("Hello").header());
///
/// assert_eq!(doc.sheet_count(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DocumentDescriptor {
    /// Sheets, in output order
    pub sheets: Vec<SheetDescriptor>,
}

impl DocumentDescriptor {
    /// Create an empty document
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a new empty sheet and return it for filling
    pub fn add_sheet<S: Into<String>>(&mut self, name: S) -> &mut SheetDescriptor {
        self.sheets.push(SheetDescriptor::new(name));
        let last = self.sheets.len() - 1;
        &mut self.sheets[last]
    }

    /// Append a prepared sheet
    pub fn push_sheet(&mut self, sheet: SheetDescriptor) -> &mut Self {
        self.sheets.push(sheet);
        self
    }

    /// Iterate over the sheets
    pub fn sheets(&self) -> impl Iterator<Item = &SheetDescriptor> {
        self.sheets.iter()
    }

    /// Number of sheets
    pub fn sheet_count(&self) -> usize {
        self.sheets.len()
    }

    /// Check if the document has no sheets
    pub fn is_empty(&self) -> bool {
        self.sheets.is_empty()
    }

    /// Get a sheet by name
    pub fn sheet_by_name(&self, name: &str) -> Option<&SheetDescriptor> {
        self.sheets.iter().find(|s| s.name == name)
    }
}
