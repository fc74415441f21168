//! Chart styling primitives: colors and text anchoring.

use std::fmt;

/// An sRGB color usable by both the SVG and PDF backends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Convert to a CSS hex string (e.g., `#6366f1`).
    #[must_use]
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Components scaled to `0.0..=1.0`, as PDF color operators expect.
    #[must_use]
    pub fn to_unit(self) -> (f64, f64, f64) {
        (
            f64::from(self.r) / 255.0,
            f64::from(self.g) / 255.0,
            f64::from(self.b) / 255.0,
        )
    }
}

pub const TEXT: Color = Color::rgb(0x1e, 0x29, 0x3b);
pub const TEXT_MUTED: Color = Color::rgb(0x64, 0x74, 0x8b);
pub const GRID: Color = Color::rgb(0xe2, 0xe8, 0xf0);
pub const SALES: Color = Color::rgb(0x63, 0x66, 0xf1);
pub const EXPENSES: Color = Color::rgb(0xea, 0xb3, 0x08);
pub const PROFIT: Color = Color::rgb(0x22, 0xc5, 0x5e);

/// Categorical palette for pie wedges, cycled when there are more keys.
pub const PALETTE: [Color; 8] = [
    Color::rgb(0x63, 0x66, 0xf1),
    Color::rgb(0x22, 0xc5, 0x5e),
    Color::rgb(0xea, 0xb3, 0x08),
    Color::rgb(0xef, 0x44, 0x44),
    Color::rgb(0x3b, 0x82, 0xf6),
    Color::rgb(0xa8, 0x55, 0xf7),
    Color::rgb(0x14, 0xb8, 0xa6),
    Color::rgb(0xf9, 0x73, 0x16),
];

#[must_use]
pub const fn palette_color(index: usize) -> Color {
    PALETTE[index % PALETTE.len()]
}

/// Text anchor position for labels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TextAnchor {
    #[default]
    Start,
    Middle,
    End,
}

impl fmt::Display for TextAnchor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Start => write!(f, "start"),
            Self::Middle => write!(f, "middle"),
            Self::End => write!(f, "end"),
        }
    }
}

#[cfg(test)]
#[path = "style_tests.rs"]
mod tests;
