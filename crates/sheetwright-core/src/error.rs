//! Error types for sheetwright-core

use thiserror::Error;

/// Result type alias using [`Error`]
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can abort a compile
///
/// Every failure falls into one of three categories. Encoders translate their
/// own failures into one of these before returning them to the compiler, and
/// the compiler passes them through unchanged.
#[derive(Debug, Error)]
pub enum Error {
    /// The encoding capability rejected an operation
    /// (invalid sheet name, unsupported format code, non-finite number, ...)
    #[error("Encoding error: {0}")]
    Encoding(String),

    /// Writing the output sink failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The descriptor tree asks for something the target cannot express
    /// (overlapping merges, positions beyond the grid, ...)
    #[error("Logic violation: {0}")]
    LogicViolation(String),
}

impl Error {
    /// Create a new encoding error with a message
    pub fn encoding<S: Into<String>>(msg: S) -> Self {
        Error::Encoding(msg.into())
    }

    /// Create a new logic violation with a message
    pub fn logic<S: Into<String>>(msg: S) -> Self {
        Error::LogicViolation(msg.into())
    }

    /// Check if this is an encoding error
    pub fn is_encoding(&self) -> bool {
        matches!(self, Error::Encoding(_))
    }

    /// Check if this is an IO error
    pub fn is_io(&self) -> bool {
        matches!(self, Error::Io(_))
    }

    /// Check if this is a logic violation
    pub fn is_logic_violation(&self) -> bool {
        matches!(self, Error::LogicViolation(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_categories() {
        assert!(Error::encoding("bad name").is_encoding());
        assert!(Error::logic("overlap").is_logic_violation());

        let io: Error = std::io::Error::new(std::io::ErrorKind::Other, "disk full").into();
        assert!(io.is_io());
        assert!(!io.is_encoding());
    }

    #[test]
    fn test_display() {
        assert_eq!(
            Error::logic("merged region B2:C3 overlaps A1:B2").to_string(),
            "Logic violation: merged region B2:C3 overlaps A1:B2"
        );
    }
}
