//! Cell styling types
//!
//! This module contains types for cell formatting:
//! - [`StyleDescriptor`] - Complete declarative cell style
//! - [`Color`] - Color representation
//! - [`BorderKind`] - Border line kinds
//! - [`HorizontalAlignment`] - Text alignment
//! - [`DataFormat`] - Number format pattern or built-in code
//! - [`FontSpec`] - Font record handed to encoders

mod alignment;
mod border;
mod color;
mod data_format;
mod font;

pub use alignment::HorizontalAlignment;
pub use border::{BorderKind, BorderSide};
pub use color::Color;
pub use data_format::DataFormat;
pub use font::FontSpec;

/// Complete declarative cell style
///
/// Every field is optional (bold defaults to `false`); an absent field leaves
/// the target format's default untouched. Two descriptors with equal fields
/// are interchangeable, and the compiler shares one style record between them.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StyleDescriptor {
    /// Solid background fill
    pub background_color: Option<Color>,
    /// Top border
    pub border_top: Option<BorderKind>,
    /// Bottom border
    pub border_bottom: Option<BorderKind>,
    /// Left border
    pub border_left: Option<BorderKind>,
    /// Right border
    pub border_right: Option<BorderKind>,
    /// Font family name
    pub font_family: Option<String>,
    /// Font size in points
    pub font_size: Option<u16>,
    /// Bold font
    pub font_bold: bool,
    /// Font color
    pub font_color: Option<Color>,
    /// Horizontal alignment
    pub horizontal_alignment: Option<HorizontalAlignment>,
    /// Number format
    pub data_format: Option<DataFormat>,
}

impl StyleDescriptor {
    /// Create a new empty style
    pub fn new() -> Self {
        Self::default()
    }

    /// Set background color (solid fill)
    pub fn background_color(mut self, color: Color) -> Self {
        self.background_color = Some(color);
        self
    }

    /// Set the top border
    pub fn border_top(mut self, kind: BorderKind) -> Self {
        self.border_top = Some(kind);
        self
    }

    /// Set the bottom border
    pub fn border_bottom(mut self, kind: BorderKind) -> Self {
        self.border_bottom = Some(kind);
        self
    }

    /// Set the left border
    pub fn border_left(mut self, kind: BorderKind) -> Self {
        self.border_left = Some(kind);
        self
    }

    /// Set the right border
    pub fn border_right(mut self, kind: BorderKind) -> Self {
        self.border_right = Some(kind);
        self
    }

    /// Set all four borders to the same kind
    pub fn border_all(self, kind: BorderKind) -> Self {
        self.border_top(kind)
            .border_bottom(kind)
            .border_left(kind)
            .border_right(kind)
    }

    /// Set font family
    pub fn font_family<S: Into<String>>(mut self, family: S) -> Self {
        self.font_family = Some(family.into());
        self
    }

    /// Set font size in points
    pub fn font_size(mut self, size: u16) -> Self {
        self.font_size = Some(size);
        self
    }

    /// Set font to bold
    pub fn bold(mut self, bold: bool) -> Self {
        self.font_bold = bold;
        self
    }

    /// Set font color
    pub fn font_color(mut self, color: Color) -> Self {
        self.font_color = Some(color);
        self
    }

    /// Set horizontal alignment
    pub fn horizontal_alignment(mut self, align: HorizontalAlignment) -> Self {
        self.horizontal_alignment = Some(align);
        self
    }

    /// Set a free-form number format pattern, replacing any built-in code
    pub fn data_format_pattern<S: Into<String>>(mut self, pattern: S) -> Self {
        self.data_format = Some(DataFormat::Pattern(pattern.into()));
        self
    }

    /// Set a built-in number format code, replacing any pattern
    pub fn data_format_builtin(mut self, code: u16) -> Self {
        self.data_format = Some(DataFormat::BuiltIn(code));
        self
    }

    /// Get the border kind for one side
    pub fn border(&self, side: BorderSide) -> Option<BorderKind> {
        match side {
            BorderSide::Top => self.border_top,
            BorderSide::Bottom => self.border_bottom,
            BorderSide::Left => self.border_left,
            BorderSide::Right => self.border_right,
        }
    }

    /// Font record for this style, if any font field was set
    ///
    /// A font is needed when family, size or color is present, or when bold
    /// is on.
    pub fn font(&self) -> Option<FontSpec> {
        if self.font_family.is_none()
            && self.font_size.is_none()
            && self.font_color.is_none()
            && !self.font_bold
        {
            return None;
        }

        Some(FontSpec {
            family: self.font_family.clone(),
            size: self.font_size,
            bold: self.font_bold,
            color: self.font_color,
        })
    }

    /// Check if no field is set
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_structural_equality() {
        let a = StyleDescriptor::new()
            .background_color(Color::RED)
            .bold(true);
        let b = StyleDescriptor::new()
            .bold(true)
            .background_color(Color::RED);
        assert_eq!(a, b);

        let c = b.clone().font_size(12);
        assert_ne!(a, c);
    }

    #[test]
    fn test_equal_styles_hash_identically() {
        let state = ahash::RandomState::new();
        let a = StyleDescriptor::new().border_all(BorderKind::Thin);
        let b = StyleDescriptor::new()
            .border_left(BorderKind::Thin)
            .border_right(BorderKind::Thin)
            .border_top(BorderKind::Thin)
            .border_bottom(BorderKind::Thin);
        assert_eq!(state.hash_one(&a), state.hash_one(&b));
    }

    #[test]
    fn test_data_format_last_write_wins() {
        let style = StyleDescriptor::new()
            .data_format_pattern("0.000")
            .data_format_builtin(DataFormat::ID_PERCENT_INT);
        assert_eq!(style.data_format, Some(DataFormat::BuiltIn(9)));

        let style = style.data_format_pattern("0.000");
        assert_eq!(style.data_format, Some(DataFormat::Pattern("0.000".into())));
    }

    #[test]
    fn test_font_only_when_needed() {
        assert_eq!(StyleDescriptor::new().font(), None);
        assert_eq!(
            StyleDescriptor::new().background_color(Color::BLUE).font(),
            None
        );

        let font = StyleDescriptor::new().font_size(14).font().unwrap();
        assert_eq!(font, FontSpec::new(false).with_size(14));

        let font = StyleDescriptor::new().bold(true).font().unwrap();
        assert_eq!(font, FontSpec::new(true));
    }

    #[test]
    fn test_border_lookup() {
        let style = StyleDescriptor::new().border_left(BorderKind::Double);
        assert_eq!(style.border(BorderSide::Left), Some(BorderKind::Double));
        assert_eq!(style.border(BorderSide::Top), None);
    }
}
