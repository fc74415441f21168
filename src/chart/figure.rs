//! Backend-neutral drawing primitives.
//!
//! Coordinates follow SVG conventions: origin at the top-left corner, `y`
//! grows downwards, units are abstract points scaled by the backend.

use super::style::{Color, TextAnchor};

/// Average Helvetica glyph width as a fraction of the font size.
const AVERAGE_GLYPH_WIDTH: f64 = 0.52;

/// Estimated rendered width of `text` at `size`.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn approx_text_width(text: &str, size: f64) -> f64 {
    text.chars().count() as f64 * size * AVERAGE_GLYPH_WIDTH
}

/// A text label.
#[derive(Debug, Clone, PartialEq)]
pub struct Label {
    pub x: f64,
    pub y: f64,
    pub text: String,
    pub size: f64,
    pub anchor: TextAnchor,
    pub color: Color,
    pub bold: bool,
}

impl Label {
    #[must_use]
    pub fn new(x: f64, y: f64, text: impl Into<String>, size: f64) -> Self {
        Self {
            x,
            y,
            text: text.into(),
            size,
            anchor: TextAnchor::Start,
            color: super::style::TEXT,
            bold: false,
        }
    }

    #[must_use]
    pub const fn with_anchor(mut self, anchor: TextAnchor) -> Self {
        self.anchor = anchor;
        self
    }

    #[must_use]
    pub const fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    #[must_use]
    pub const fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    /// X coordinate of the label's left edge once the anchor is applied.
    #[must_use]
    pub fn left(&self) -> f64 {
        let width = approx_text_width(&self.text, self.size);
        match self.anchor {
            TextAnchor::Start => self.x,
            TextAnchor::Middle => self.x - width / 2.0,
            TextAnchor::End => self.x - width,
        }
    }
}

/// A single drawing primitive.
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Rect {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        fill: Color,
        tooltip: Option<String>,
    },
    Line {
        from: (f64, f64),
        to: (f64, f64),
        stroke: Color,
        width: f64,
        dashed: bool,
    },
    Polyline {
        points: Vec<(f64, f64)>,
        stroke: Color,
        width: f64,
    },
    Polygon {
        points: Vec<(f64, f64)>,
        fill: Color,
        tooltip: Option<String>,
    },
    Circle {
        center: (f64, f64),
        radius: f64,
        fill: Color,
        tooltip: Option<String>,
    },
    Text(Label),
}

/// A complete chart drawing.
#[derive(Debug, Clone, PartialEq)]
pub struct Figure {
    pub width: f64,
    pub height: f64,
    pub title: String,
    pub shapes: Vec<Shape>,
}

impl Figure {
    #[must_use]
    pub fn new(width: f64, height: f64, title: impl Into<String>) -> Self {
        Self {
            width,
            height,
            title: title.into(),
            shapes: Vec::new(),
        }
    }

    pub fn push(&mut self, shape: Shape) {
        self.shapes.push(shape);
    }

    pub fn text(&mut self, label: Label) {
        self.shapes.push(Shape::Text(label));
    }

    /// All text labels, in drawing order.
    pub fn labels(&self) -> impl Iterator<Item = &Label> {
        self.shapes.iter().filter_map(|shape| match shape {
            Shape::Text(label) => Some(label),
            _ => None,
        })
    }
}

#[cfg(test)]
#[path = "figure_tests.rs"]
mod tests;
