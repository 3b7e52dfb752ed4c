//! Package-level settings

use chrono::{DateTime, Utc};

/// Settings applied when writing an XLSX package
///
/// ```
/// use sheetwright_xlsx::XlsxSettings;
///
/// let settings = XlsxSettings {
///     creator: "Finance".to_string(),
///     ..XlsxSettings::default()
/// };
/// assert_eq!(settings.default_font_name, "Calibri");
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct XlsxSettings {
    /// Font used by style records that do not name a family, and by font 0
    pub default_font_name: String,
    /// Font size in points used when a style does not set one
    pub default_font_size: u16,
    /// Written to `docProps/core.xml`
    pub creator: String,
    /// Author shown on every comment
    pub comment_author: String,
    /// Creation timestamp; `None` means the time of writing
    pub created: Option<DateTime<Utc>>,
}

impl Default for XlsxSettings {
    fn default() -> Self {
        Self {
            default_font_name: "Calibri".to_string(),
            default_font_size: 11,
            creator: "sheetwright".to_string(),
            comment_author: String::new(),
            created: None,
        }
    }
}
