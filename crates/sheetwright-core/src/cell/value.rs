//! Cell value types

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use std::fmt;

/// The value a cell descriptor carries
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CellValue {
    /// Text, written verbatim
    Text(String),

    /// Numeric value
    Number(Numeric),

    /// No value; compiles to empty text
    #[default]
    Blank,
}

/// A numeric cell value
///
/// All variants are written as a double-precision number.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Numeric {
    /// Integer
    Integer(i64),
    /// Floating point
    Float(f64),
    /// Fixed-point decimal (money amounts and the like)
    Decimal(Decimal),
}

impl Numeric {
    /// Convert to the double written into the document
    pub fn to_f64(&self) -> f64 {
        match self {
            Numeric::Integer(n) => *n as f64,
            Numeric::Float(n) => *n,
            // Every Decimal fits in an f64 (with rounding)
            Numeric::Decimal(d) => d.to_f64().unwrap_or(f64::NAN),
        }
    }
}

impl fmt::Display for Numeric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Numeric::Integer(n) => write!(f, "{}", n),
            Numeric::Float(n) => write!(f, "{}", n),
            Numeric::Decimal(d) => write!(f, "{}", d),
        }
    }
}

impl CellValue {
    /// Create a text value
    pub fn text<S: Into<String>>(s: S) -> Self {
        CellValue::Text(s.into())
    }

    /// Check if the value is blank
    pub fn is_blank(&self) -> bool {
        matches!(self, CellValue::Blank)
    }

    /// Try to get the value as text
    pub fn as_text(&self) -> Option<&str> {
        match self {
            CellValue::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Try to get the value as a number
    pub fn as_number(&self) -> Option<f64> {
        match self {
            CellValue::Number(n) => Some(n.to_f64()),
            _ => None,
        }
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Text(s) => write!(f, "{}", s),
            CellValue::Number(n) => write!(f, "{}", n),
            CellValue::Blank => Ok(()),
        }
    }
}

impl From<&str> for CellValue {
    fn from(s: &str) -> Self {
        CellValue::Text(s.to_string())
    }
}

impl From<String> for CellValue {
    fn from(s: String) -> Self {
        CellValue::Text(s)
    }
}

impl From<&String> for CellValue {
    fn from(s: &String) -> Self {
        CellValue::Text(s.clone())
    }
}

macro_rules! impl_from_integer {
    ($($t:ty),*) => {
        $(
            impl From<$t> for CellValue {
                fn from(n: $t) -> Self {
                    CellValue::Number(Numeric::Integer(n as i64))
                }
            }
        )*
    };
}

impl_from_integer!(i8, i16, i32, i64, u8, u16, u32);

// Values beyond the i64 range are kept as doubles
macro_rules! impl_from_wide_integer {
    ($($t:ty),*) => {
        $(
            impl From<$t> for CellValue {
                fn from(n: $t) -> Self {
                    let numeric = i64::try_from(n)
                        .map_or(Numeric::Float(n as f64), Numeric::Integer);
                    CellValue::Number(numeric)
                }
            }
        )*
    };
}

impl_from_wide_integer!(isize, usize, u64, i128, u128);

impl From<f32> for CellValue {
    fn from(n: f32) -> Self {
        CellValue::Number(Numeric::Float(n as f64))
    }
}

impl From<f64> for CellValue {
    fn from(n: f64) -> Self {
        CellValue::Number(Numeric::Float(n))
    }
}

impl From<Decimal> for CellValue {
    fn from(d: Decimal) -> Self {
        CellValue::Number(Numeric::Decimal(d))
    }
}

impl From<Numeric> for CellValue {
    fn from(n: Numeric) -> Self {
        CellValue::Number(n)
    }
}

impl<T: Into<CellValue>> From<Option<T>> for CellValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(CellValue::Blank, Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_cell_value_conversions() {
        assert_eq!(CellValue::from(42), CellValue::Number(Numeric::Integer(42)));
        assert_eq!(CellValue::from(2.5), CellValue::Number(Numeric::Float(2.5)));
        assert_eq!(CellValue::from("hello").as_text(), Some("hello"));
        assert_eq!(CellValue::from(None::<i32>), CellValue::Blank);
        assert_eq!(
            CellValue::from(Some("x")),
            CellValue::Text("x".to_string())
        );
    }

    #[test]
    fn test_wide_integers() {
        assert_eq!(
            CellValue::from(vec![1, 2, 3].len()),
            CellValue::Number(Numeric::Integer(3))
        );
        assert_eq!(
            CellValue::from(u64::MAX),
            CellValue::Number(Numeric::Float(u64::MAX as f64))
        );
        assert_eq!(
            CellValue::from(-5_i128),
            CellValue::Number(Numeric::Integer(-5))
        );
        assert_eq!(CellValue::from(u128::MAX).as_number(), Some(u128::MAX as f64));
    }

    #[test]
    fn test_decimal_to_f64() {
        let d = Decimal::from_str("1234.56").unwrap();
        assert_eq!(CellValue::from(d).as_number(), Some(1234.56));
        assert_eq!(CellValue::from(d).to_string(), "1234.56");
    }

    #[test]
    fn test_blank() {
        assert!(CellValue::default().is_blank());
        assert_eq!(CellValue::Blank.to_string(), "");
        assert_eq!(CellValue::Blank.as_number(), None);
        assert!(!CellValue::text("").is_blank());
    }
}
