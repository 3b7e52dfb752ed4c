//! Cell address and range types

use crate::error::{Error, Result};
use crate::{MAX_COLS, MAX_ROWS};
use std::fmt;

/// A cell address on the target grid (0-based row and column)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CellAddress {
    /// Row index (0-based internally, 1-based in display)
    pub row: u32,
    /// Column index (0-based, A=0, B=1, ..., XFD=16383)
    pub col: u16,
}

impl CellAddress {
    /// Create a new cell address
    pub fn new(row: u32, col: u16) -> Self {
        Self { row, col }
    }

    /// Create a cell address from unbounded indices, rejecting positions
    /// outside the worksheet grid
    pub fn checked(row: u64, col: u64) -> Result<Self> {
        if row >= MAX_ROWS as u64 {
            return Err(Error::logic(format!(
                "row index {} out of bounds (max: {})",
                row,
                MAX_ROWS - 1
            )));
        }
        if col >= MAX_COLS as u64 {
            return Err(Error::logic(format!(
                "column index {} out of bounds (max: {})",
                col,
                MAX_COLS - 1
            )));
        }
        Ok(Self::new(row as u32, col as u16))
    }

    /// Convert column index to letters (0 = A, 25 = Z, 26 = AA, etc.)
    pub fn column_to_letters(col: u16) -> String {
        let mut result = String::new();
        let mut n = col as u32 + 1; // 1-based for calculation

        while n > 0 {
            n -= 1;
            let c = ((n % 26) as u8 + b'A') as char;
            result.insert(0, c);
            n /= 26;
        }

        result
    }

    /// Format as A1-style string
    pub fn to_a1_string(&self) -> String {
        let mut result = Self::column_to_letters(self.col);
        result.push_str(&(self.row + 1).to_string());
        result
    }
}

impl fmt::Display for CellAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_a1_string())
    }
}

/// A rectangular range of cells (e.g., "A1:B10")
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CellRange {
    /// Start address (top-left)
    pub start: CellAddress,
    /// End address (bottom-right)
    pub end: CellAddress,
}

impl CellRange {
    /// Create a new cell range
    pub fn new(start: CellAddress, end: CellAddress) -> Self {
        // Normalize so start is top-left and end is bottom-right
        Self {
            start: CellAddress::new(start.row.min(end.row), start.col.min(end.col)),
            end: CellAddress::new(start.row.max(end.row), start.col.max(end.col)),
        }
    }

    /// Create a range from row/column indices
    pub fn from_indices(first_row: u32, first_col: u16, last_row: u32, last_col: u16) -> Self {
        Self::new(
            CellAddress::new(first_row, first_col),
            CellAddress::new(last_row, last_col),
        )
    }

    /// Check if this range overlaps with another
    pub fn overlaps(&self, other: &CellRange) -> bool {
        self.start.row <= other.end.row
            && self.end.row >= other.start.row
            && self.start.col <= other.end.col
            && self.end.col >= other.start.col
    }

    /// Format as A1:B10 string
    pub fn to_a1_string(&self) -> String {
        if self.start == self.end {
            self.start.to_a1_string()
        } else {
            format!("{}:{}", self.start.to_a1_string(), self.end.to_a1_string())
        }
    }
}

impl fmt::Display for CellRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_a1_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_to_letters() {
        assert_eq!(CellAddress::column_to_letters(0), "A");
        assert_eq!(CellAddress::column_to_letters(25), "Z");
        assert_eq!(CellAddress::column_to_letters(26), "AA");
        assert_eq!(CellAddress::column_to_letters(701), "ZZ");
        assert_eq!(CellAddress::column_to_letters(702), "AAA");
        assert_eq!(CellAddress::column_to_letters(16383), "XFD"); // Max column
    }

    #[test]
    fn test_checked_bounds() {
        assert!(CellAddress::checked(0, 16383).is_ok());
        let err = CellAddress::checked(0, 16384).unwrap_err();
        assert!(err.is_logic_violation());
        assert!(CellAddress::checked(1_048_576, 0).is_err());
    }

    #[test]
    fn test_range_normalizes_and_displays() {
        let range = CellRange::from_indices(3, 5, 1, 2);
        assert_eq!(range.start, CellAddress::new(1, 2));
        assert_eq!(range.end, CellAddress::new(3, 5));
        assert_eq!(range.to_string(), "C2:F4");
        assert_eq!(CellRange::from_indices(0, 0, 0, 0).to_string(), "A1");
    }

    #[test]
    fn test_range_overlaps() {
        let a = CellRange::from_indices(0, 0, 1, 1);
        let b = CellRange::from_indices(1, 1, 2, 2);
        let c = CellRange::from_indices(0, 2, 0, 3);

        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));
        assert!(!a.overlaps(&c));
        assert!(!b.overlaps(&c));
        assert!(c.overlaps(&CellRange::from_indices(0, 3, 5, 3)));
    }
}
