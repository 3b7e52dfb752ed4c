//! Font record passed to encoders

use super::Color;

/// Font settings for one style record
///
/// Unlike [`StyleDescriptor`](super::StyleDescriptor), bold is always explicit
/// here. Family, size and color are only set when the descriptor set them;
/// the encoder keeps its own defaults for the rest.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct FontSpec {
    /// Font family name (e.g., "Calibri", "Arial")
    pub family: Option<String>,
    /// Font size in points
    pub size: Option<u16>,
    /// Bold
    pub bold: bool,
    /// Font color
    pub color: Option<Color>,
}

impl FontSpec {
    /// Create a new font with only the bold flag set
    pub fn new(bold: bool) -> Self {
        Self {
            bold,
            ..Self::default()
        }
    }

    /// Set font family
    pub fn with_family<S: Into<String>>(mut self, family: S) -> Self {
        self.family = Some(family.into());
        self
    }

    /// Set font size
    pub fn with_size(mut self, size: u16) -> Self {
        self.size = Some(size);
        self
    }

    /// Set color
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }
}
