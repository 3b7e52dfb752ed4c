//! Row descriptor

use crate::cell::CellDescriptor;

/// An ordered list of cells laid out left to right
///
/// Cells carry no column index; the compiler places each one after the
/// columns covered by the cells before it.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RowDescriptor {
    /// Cells in this row, in placement order
    pub cells: Vec<CellDescriptor>,
}

impl RowDescriptor {
    /// Create an empty row
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a cell
    pub fn push(&mut self, cell: CellDescriptor) -> &mut Self {
        self.cells.push(cell);
        self
    }

    /// Append several cells
    pub fn extend<I: IntoIterator<Item = CellDescriptor>>(&mut self, cells: I) -> &mut Self {
        self.cells.extend(cells);
        self
    }

    /// Iterate over the cells
    pub fn cells(&self) -> impl Iterator<Item = &CellDescriptor> {
        self.cells.iter()
    }

    /// Number of cell descriptors (not columns covered)
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Check if the row has no cells
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Number of columns the row covers once spans are applied
    pub fn width(&self) -> u64 {
        self.cells
            .iter()
            .map(|c| c.effective_column_span() as u64)
            .sum()
    }
}

impl FromIterator<CellDescriptor> for RowDescriptor {
    fn from_iter<I: IntoIterator<Item = CellDescriptor>>(iter: I) -> Self {
        Self {
            cells: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_chains() {
        let mut row = RowDescriptor::new();
        row.push(CellDescriptor::text("a"))
            .push(CellDescriptor::text("b").with_column_span(3));
        assert_eq!(row.len(), 2);
        assert_eq!(row.width(), 4);
    }

    #[test]
    fn test_collect() {
        let row: RowDescriptor = (1..=3).map(CellDescriptor::number).collect();
        assert_eq!(row.len(), 3);
        assert_eq!(row.cells[2].value.as_number(), Some(3.0));
    }
}
