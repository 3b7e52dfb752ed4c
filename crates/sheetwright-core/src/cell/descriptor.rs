//! Declarative cell descriptor

use super::CellValue;
use crate::style::{BorderKind, BorderSide, Color, HorizontalAlignment, StyleDescriptor};

/// One cell of a row: a value plus its style and extras
///
/// Built fluently; every setter takes and returns the descriptor:
///
/// ```
/// use sheetwright_core::{CellDescriptor, Color};
///
/// let cell = CellDescriptor::text("Total")
///     .bold()
///     .with_background(Color::LIGHT_YELLOW)
///     .with_column_span(3);
/// assert_eq!(cell.column_span, 3);
/// assert!(cell.style.font_bold);
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CellDescriptor {
    /// Cell value
    pub value: CellValue,
    /// Cell style
    pub style: StyleDescriptor,
    /// Formula text, written after the value
    pub formula: Option<String>,
    /// Comment text; blank comments are not attached
    pub comment: Option<String>,
    /// Hyperlink target
    pub hyperlink: Option<String>,
    /// Columns this cell covers (0 and 1 both mean a single column)
    pub column_span: u32,
    /// Rows this cell covers (0 and 1 both mean a single row)
    pub row_span: u32,
}

impl CellDescriptor {
    /// Create a cell holding a value
    pub fn new<V: Into<CellValue>>(value: V) -> Self {
        Self {
            value: value.into(),
            ..Self::default()
        }
    }

    /// Create a text cell
    pub fn text<S: Into<String>>(text: S) -> Self {
        Self::new(CellValue::Text(text.into()))
    }

    /// Create a numeric cell
    pub fn number<N: Into<CellValue>>(number: N) -> Self {
        Self::new(number)
    }

    /// Create a blank cell
    pub fn blank() -> Self {
        Self::default()
    }

    /// Replace the value
    pub fn with_value<V: Into<CellValue>>(mut self, value: V) -> Self {
        self.value = value.into();
        self
    }

    /// Replace the whole style
    pub fn with_style(mut self, style: StyleDescriptor) -> Self {
        self.style = style;
        self
    }

    /// Set a solid background color
    pub fn with_background(mut self, color: Color) -> Self {
        self.style = self.style.background_color(color);
        self
    }

    /// Thin top border
    pub fn border_top(self) -> Self {
        self.with_border(BorderSide::Top, BorderKind::Thin)
    }

    /// Thin bottom border
    pub fn border_bottom(self) -> Self {
        self.with_border(BorderSide::Bottom, BorderKind::Thin)
    }

    /// Thin left border
    pub fn border_left(self) -> Self {
        self.with_border(BorderSide::Left, BorderKind::Thin)
    }

    /// Thin right border
    pub fn border_right(self) -> Self {
        self.with_border(BorderSide::Right, BorderKind::Thin)
    }

    /// Thin border on all four sides
    pub fn border_all(self) -> Self {
        self.with_border_all(BorderKind::Thin)
    }

    /// Set one border side to a specific kind
    pub fn with_border(mut self, side: BorderSide, kind: BorderKind) -> Self {
        self.style = match side {
            BorderSide::Top => self.style.border_top(kind),
            BorderSide::Bottom => self.style.border_bottom(kind),
            BorderSide::Left => self.style.border_left(kind),
            BorderSide::Right => self.style.border_right(kind),
        };
        self
    }

    /// Set all four border sides to a specific kind
    pub fn with_border_all(mut self, kind: BorderKind) -> Self {
        self.style = self.style.border_all(kind);
        self
    }

    /// Set the font family
    pub fn with_font_family<S: Into<String>>(mut self, family: S) -> Self {
        self.style = self.style.font_family(family);
        self
    }

    /// Set the font size in points
    pub fn with_font_size(mut self, size: u16) -> Self {
        self.style = self.style.font_size(size);
        self
    }

    /// Set the font color
    pub fn with_font_color(mut self, color: Color) -> Self {
        self.style = self.style.font_color(color);
        self
    }

    /// Make the font bold
    pub fn bold(mut self) -> Self {
        self.style = self.style.bold(true);
        self
    }

    /// Set horizontal alignment
    pub fn with_alignment(mut self, align: HorizontalAlignment) -> Self {
        self.style = self.style.horizontal_alignment(align);
        self
    }

    /// Set a number format pattern (e.g. `"0.00%"`)
    pub fn with_data_format<S: Into<String>>(mut self, pattern: S) -> Self {
        self.style = self.style.data_format_pattern(pattern);
        self
    }

    /// Set a built-in number format code
    pub fn with_builtin_data_format(mut self, code: u16) -> Self {
        self.style = self.style.data_format_builtin(code);
        self
    }

    /// Attach a formula
    pub fn with_formula<S: Into<String>>(mut self, formula: S) -> Self {
        self.formula = Some(formula.into());
        self
    }

    /// Attach a comment
    pub fn with_comment<S: Into<String>>(mut self, comment: S) -> Self {
        self.comment = Some(comment.into());
        self
    }

    /// Attach a hyperlink
    pub fn with_hyperlink<S: Into<String>>(mut self, target: S) -> Self {
        self.hyperlink = Some(target.into());
        self
    }

    /// Span this cell over several columns
    pub fn with_column_span(mut self, span: u32) -> Self {
        self.column_span = span;
        self
    }

    /// Span this cell over several rows
    pub fn with_row_span(mut self, span: u32) -> Self {
        self.row_span = span;
        self
    }

    // Presets

    /// Column header: centered, bold white text on dark grey
    pub fn header(self) -> Self {
        self.with_alignment(HorizontalAlignment::Center)
            .with_background(Color::GREY_80_PERCENT)
            .with_font_color(Color::WHITE)
            .bold()
    }

    /// Title: bold white text on mid grey
    pub fn title(self) -> Self {
        self.with_background(Color::GREY_50_PERCENT)
            .with_font_color(Color::WHITE)
            .bold()
    }

    /// Subtitle: light grey background
    pub fn subtitle(self) -> Self {
        self.with_background(Color::GREY_25_PERCENT)
    }

    /// Totals line: thin top border, bold
    pub fn totalizer(self) -> Self {
        self.border_top().bold()
    }

    /// Money amount with two decimals and thousands separators
    pub fn currency(self) -> Self {
        self.with_data_format(crate::style::DataFormat::CURRENCY_PATTERN)
    }

    /// Columns covered, with 0 read as 1
    pub fn effective_column_span(&self) -> u32 {
        self.column_span.max(1)
    }

    /// Rows covered, with 0 read as 1
    pub fn effective_row_span(&self) -> u32 {
        self.row_span.max(1)
    }

    /// Whether this cell produces a merged region
    pub fn is_merged(&self) -> bool {
        self.effective_column_span() > 1 || self.effective_row_span() > 1
    }

    /// Comment text to attach, if it has any non-whitespace content
    pub fn visible_comment(&self) -> Option<&str> {
        self.comment.as_deref().filter(|c| !c.trim().is_empty())
    }
}
