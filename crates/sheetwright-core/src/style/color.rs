//! Color representation

use std::fmt;

/// Color representation
///
/// Supports RGB, ARGB and indexed colors from the legacy 64-entry palette.
/// The named constants are palette entries, so they are written to the target
/// document as palette references rather than literal RGB values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Color {
    /// RGB color (no alpha)
    Rgb { r: u8, g: u8, b: u8 },

    /// ARGB color with alpha channel
    Argb { a: u8, r: u8, g: u8, b: u8 },

    /// Indexed color (legacy palette, 0-63)
    Indexed(u8),
}

impl Color {
    /// Create an RGB color
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Color::Rgb { r, g, b }
    }

    /// Create an ARGB color
    pub const fn argb(a: u8, r: u8, g: u8, b: u8) -> Self {
        Color::Argb { a, r, g, b }
    }

    /// Create an indexed palette color
    pub const fn indexed(index: u8) -> Self {
        Color::Indexed(index)
    }

    /// Whether the color can be written: palette indices stop at 63
    pub fn is_valid(&self) -> bool {
        match self {
            Color::Indexed(i) => *i < Self::PALETTE_SIZE,
            _ => true,
        }
    }

    /// Convert to ARGB hex string (8 characters, as used by XLSX)
    ///
    /// RGB colors are opaque, e.g. "FFFF0000" for red. Palette entries have
    /// no literal value and return `None`.
    pub fn to_argb_hex(&self) -> Option<String> {
        match self {
            Color::Rgb { r, g, b } => Some(format!("FF{:02X}{:02X}{:02X}", r, g, b)),
            Color::Argb { a, r, g, b } => {
                Some(format!("{:02X}{:02X}{:02X}{:02X}", a, r, g, b))
            }
            Color::Indexed(_) => None,
        }
    }

    /// Number of entries in the legacy palette
    pub const PALETTE_SIZE: u8 = 64;

    // Common palette colors
    pub const BLACK: Color = Color::Indexed(8);
    pub const WHITE: Color = Color::Indexed(9);
    pub const RED: Color = Color::Indexed(10);
    pub const BRIGHT_GREEN: Color = Color::Indexed(11);
    pub const BLUE: Color = Color::Indexed(12);
    pub const YELLOW: Color = Color::Indexed(13);
    pub const PINK: Color = Color::Indexed(14);
    pub const TURQUOISE: Color = Color::Indexed(15);
    pub const DARK_RED: Color = Color::Indexed(16);
    pub const GREEN: Color = Color::Indexed(17);
    pub const DARK_BLUE: Color = Color::Indexed(18);
    pub const TEAL: Color = Color::Indexed(21);
    pub const GREY_25_PERCENT: Color = Color::Indexed(22);
    pub const GREY_50_PERCENT: Color = Color::Indexed(23);
    pub const LIGHT_YELLOW: Color = Color::Indexed(43);
    pub const ORANGE: Color = Color::Indexed(53);
    pub const GREY_40_PERCENT: Color = Color::Indexed(55);
    pub const GREY_80_PERCENT: Color = Color::Indexed(63);
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Rgb { r, g, b } => write!(f, "#{:02X}{:02X}{:02X}", r, g, b),
            Color::Argb { a, r, g, b } => write!(f, "#{:02X}{:02X}{:02X}{:02X}", a, r, g, b),
            Color::Indexed(i) => write!(f, "indexed({})", i),
        }
    }
}
