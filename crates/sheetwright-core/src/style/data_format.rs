//! Data (number) format types

/// Data format for cell display
///
/// A style carries at most one of these, so a free-form pattern and a
/// built-in code can never both be set; whichever was written last wins.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DataFormat {
    /// Custom format pattern (e.g. `"#,##0.00"`)
    Pattern(String),

    /// Built-in format by code
    BuiltIn(u16),
}

impl DataFormat {
    /// Pattern used by the currency preset
    pub const CURRENCY_PATTERN: &'static str = "#,##0.00";

    // Built-in format codes
    /// 0 - General
    pub const ID_GENERAL: u16 = 0;
    /// 1 - 0
    pub const ID_NUMBER_INT: u16 = 1;
    /// 2 - 0.00
    pub const ID_NUMBER_DEC2: u16 = 2;
    /// 3 - #,##0
    pub const ID_NUMBER_SEP: u16 = 3;
    /// 4 - #,##0.00
    pub const ID_NUMBER_SEP_DEC2: u16 = 4;
    /// 9 - 0%
    pub const ID_PERCENT_INT: u16 = 9;
    /// 10 - 0.00%
    pub const ID_PERCENT_DEC2: u16 = 10;
    /// 14 - mm-dd-yy
    pub const ID_DATE_SHORT: u16 = 14;
    /// 22 - m/d/yy h:mm
    pub const ID_DATETIME: u16 = 22;
    /// 49 - @
    pub const ID_TEXT: u16 = 49;

    /// Create a data format from a pattern string
    pub fn pattern<S: Into<String>>(pattern: S) -> Self {
        DataFormat::Pattern(pattern.into())
    }

    /// Create a built-in format by code
    pub fn builtin(code: u16) -> Self {
        DataFormat::BuiltIn(code)
    }

    /// Check if this is a built-in format code from the standard table
    /// (0-22, 37-40, 45-49)
    pub fn is_known_builtin(code: u16) -> bool {
        matches!(code, 0..=22 | 37..=40 | 45..=49)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_table() {
        for code in [0, 4, 22, 37, 40, 45, DataFormat::ID_TEXT] {
            assert!(DataFormat::is_known_builtin(code), "{}", code);
        }
        for code in [23, 30, 36, 41, 44, 50, 164] {
            assert!(!DataFormat::is_known_builtin(code), "{}", code);
        }
    }

    #[test]
    fn test_pattern() {
        let fmt = DataFormat::pattern(DataFormat::CURRENCY_PATTERN);
        assert_eq!(fmt, DataFormat::Pattern("#,##0.00".to_string()));
        assert_ne!(fmt, DataFormat::builtin(DataFormat::ID_NUMBER_SEP_DEC2));
    }
}
