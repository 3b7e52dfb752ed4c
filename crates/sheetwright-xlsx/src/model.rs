//! In-memory worksheet model filled by the encoder

use std::collections::BTreeMap;

use sheetwright_core::{CellAddress, CellRange, CommentAnchor, StyleId};

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum CellContent {
    Empty,
    Text(String),
    Number(f64),
}

#[derive(Debug, Clone)]
pub(crate) struct CellModel {
    pub style: Option<StyleId>,
    pub content: CellContent,
    pub formula: Option<String>,
}

impl CellModel {
    fn new() -> Self {
        Self {
            style: None,
            content: CellContent::Empty,
            formula: None,
        }
    }
}

/// Cells of one row, keyed by column
#[derive(Debug, Default)]
pub(crate) struct RowModel {
    pub cells: BTreeMap<u16, CellModel>,
}

#[derive(Debug, Clone)]
pub(crate) struct HyperlinkModel {
    pub addr: CellAddress,
    pub target: String,
}

impl HyperlinkModel {
    /// Targets that leave the workbook get an external relationship
    pub(crate) fn is_external(&self) -> bool {
        const SCHEMES: &[&str] = &["http://", "https://", "ftp://", "mailto:"];
        let lower = self.target.to_ascii_lowercase();
        SCHEMES.iter().any(|s| lower.starts_with(s))
    }
}

#[derive(Debug, Clone)]
pub(crate) struct CommentModel {
    pub addr: CellAddress,
    pub anchor: CommentAnchor,
    pub text: String,
}

#[derive(Debug)]
pub(crate) struct SheetModel {
    pub name: String,
    pub rows: BTreeMap<u32, RowModel>,
    pub merged: Vec<CellRange>,
    pub hyperlinks: Vec<HyperlinkModel>,
    pub comments: Vec<CommentModel>,
}

impl SheetModel {
    pub(crate) fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            rows: BTreeMap::new(),
            merged: Vec::new(),
            hyperlinks: Vec::new(),
            comments: Vec::new(),
        }
    }

    /// Returns `false` if the row already existed
    pub(crate) fn insert_row(&mut self, row: u32) -> bool {
        if self.rows.contains_key(&row) {
            return false;
        }
        self.rows.insert(row, RowModel::default());
        true
    }

    /// Returns `false` if the row does not exist
    pub(crate) fn insert_cell(&mut self, addr: CellAddress) -> bool {
        match self.rows.get_mut(&addr.row) {
            Some(row) => {
                row.cells.entry(addr.col).or_insert_with(CellModel::new);
                true
            }
            None => false,
        }
    }

    pub(crate) fn cell_mut(&mut self, addr: CellAddress) -> Option<&mut CellModel> {
        self.rows
            .get_mut(&addr.row)
            .and_then(|row| row.cells.get_mut(&addr.col))
    }

    pub(crate) fn set_hyperlink(&mut self, addr: CellAddress, target: &str) {
        self.hyperlinks.retain(|h| h.addr != addr);
        self.hyperlinks.push(HyperlinkModel {
            addr,
            target: target.to_string(),
        });
    }

    pub(crate) fn set_comment(&mut self, addr: CellAddress, anchor: CommentAnchor, text: &str) {
        self.comments.retain(|c| c.addr != addr);
        self.comments.push(CommentModel {
            addr,
            anchor,
            text: text.to_string(),
        });
    }

    /// Used cell range for the `<dimension>` element
    pub(crate) fn dimension(&self) -> Option<CellRange> {
        let first_row = *self.rows.keys().next()?;
        let last_row = *self.rows.keys().next_back()?;
        let (min_col, max_col) = self
            .rows
            .values()
            .flat_map(|r| r.cells.keys().copied())
            .fold(None, |acc: Option<(u16, u16)>, c| match acc {
                None => Some((c, c)),
                Some((lo, hi)) => Some((lo.min(c), hi.max(c))),
            })
            .unwrap_or((0, 0));
        Some(CellRange::from_indices(first_row, min_col, last_row, max_col))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rows_and_cells() {
        let mut sheet = SheetModel::new("S");
        assert!(sheet.insert_row(2));
        assert!(!sheet.insert_row(2));
        assert!(sheet.insert_cell(CellAddress::new(2, 4)));
        assert!(!sheet.insert_cell(CellAddress::new(3, 0)));
        assert!(sheet.cell_mut(CellAddress::new(2, 4)).is_some());
        assert!(sheet.cell_mut(CellAddress::new(2, 5)).is_none());
    }

    #[test]
    fn test_dimension() {
        let mut sheet = SheetModel::new("S");
        assert_eq!(sheet.dimension(), None);

        sheet.insert_row(0);
        sheet.insert_row(3);
        sheet.insert_cell(CellAddress::new(0, 1));
        sheet.insert_cell(CellAddress::new(3, 5));
        assert_eq!(sheet.dimension().map(|r| r.to_string()), Some("B1:F4".into()));
    }

    #[test]
    fn test_hyperlink_kind() {
        let link = |t: &str| HyperlinkModel {
            addr: CellAddress::new(0, 0),
            target: t.to_string(),
        };
        assert!(link("https://example.com").is_external());
        assert!(link("MAILTO:someone@example.com").is_external());
        assert!(!link("'Sheet 2'!A1").is_external());
    }

    #[test]
    fn test_hyperlink_replaced() {
        let mut sheet = SheetModel::new("S");
        let a1 = CellAddress::new(0, 0);
        sheet.set_hyperlink(a1, "https://a.example");
        sheet.set_hyperlink(a1, "https://b.example");
        assert_eq!(sheet.hyperlinks.len(), 1);
        assert_eq!(sheet.hyperlinks[0].target, "https://b.example");
    }
}
