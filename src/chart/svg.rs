//! SVG backend for [`Figure`].

use std::fmt::Write;

use crate::format::html_escape;

use super::figure::{Figure, Label, Shape};

const FONT_FAMILY: &str = "Helvetica, Arial, sans-serif";

/// Accumulates element markup and wraps it in the root `<svg>` element.
#[derive(Debug, Default)]
struct SvgBuilder {
    width: f64,
    height: f64,
    title: String,
    elements: Vec<String>,
}

impl SvgBuilder {
    fn new(width: f64, height: f64, title: &str) -> Self {
        Self {
            width,
            height,
            title: title.to_string(),
            elements: Vec::new(),
        }
    }

    fn push(&mut self, element: String) {
        self.elements.push(element);
    }

    fn build(self) -> String {
        let mut output = String::new();

        writeln!(
            output,
            r#"<svg viewBox="0 0 {} {}" xmlns="http://www.w3.org/2000/svg" role="img" font-family="{FONT_FAMILY}">"#,
            self.width, self.height
        )
        .ok();

        if !self.title.is_empty() {
            let escaped = html_escape(&self.title);
            writeln!(output, r"    <title>{escaped}</title>").ok();
        }

        for element in self.elements {
            for line in element.lines() {
                writeln!(output, "    {line}").ok();
            }
        }

        output.push_str("</svg>");
        output
    }
}

/// Serialize `figure` as a standalone SVG document.
#[must_use]
pub fn render_svg(figure: &Figure) -> String {
    let mut builder = SvgBuilder::new(figure.width, figure.height, &figure.title);
    for shape in &figure.shapes {
        builder.push(render_shape(shape));
    }
    builder.build()
}

fn render_shape(shape: &Shape) -> String {
    match shape {
        Shape::Rect {
            x,
            y,
            width,
            height,
            fill,
            tooltip,
        } => with_tooltip(
            format!(
                r#"<rect x="{x:.2}" y="{y:.2}" width="{width:.2}" height="{height:.2}" fill="{}""#,
                fill.to_hex()
            ),
            "rect",
            tooltip.as_deref(),
        ),
        Shape::Line {
            from,
            to,
            stroke,
            width,
            dashed,
        } => {
            let dash = if *dashed {
                r#" stroke-dasharray="4,4""#
            } else {
                ""
            };
            format!(
                r#"<line x1="{:.2}" y1="{:.2}" x2="{:.2}" y2="{:.2}" stroke="{}" stroke-width="{width}"{dash}/>"#,
                from.0,
                from.1,
                to.0,
                to.1,
                stroke.to_hex()
            )
        }
        Shape::Polyline {
            points,
            stroke,
            width,
        } => format!(
            r#"<polyline points="{}" fill="none" stroke="{}" stroke-width="{width}" stroke-linejoin="round"/>"#,
            format_points(points),
            stroke.to_hex()
        ),
        Shape::Polygon {
            points,
            fill,
            tooltip,
        } => with_tooltip(
            format!(
                r##"<polygon points="{}" fill="{}" stroke="#ffffff" stroke-width="1""##,
                format_points(points),
                fill.to_hex()
            ),
            "polygon",
            tooltip.as_deref(),
        ),
        Shape::Circle {
            center,
            radius,
            fill,
            tooltip,
        } => with_tooltip(
            format!(
                r#"<circle cx="{:.2}" cy="{:.2}" r="{radius:.2}" fill="{}""#,
                center.0,
                center.1,
                fill.to_hex()
            ),
            "circle",
            tooltip.as_deref(),
        ),
        Shape::Text(label) => render_label(label),
    }
}

/// Close `open_tag` either as self-closing or with a `<title>` tooltip child.
fn with_tooltip(open_tag: String, name: &str, tooltip: Option<&str>) -> String {
    match tooltip {
        Some(text) => format!("{open_tag}><title>{}</title></{name}>", html_escape(text)),
        None => format!("{open_tag}/>"),
    }
}

fn render_label(label: &Label) -> String {
    let weight = if label.bold {
        r#" font-weight="bold""#
    } else {
        ""
    };
    format!(
        r#"<text x="{:.2}" y="{:.2}" font-size="{}" text-anchor="{}" fill="{}"{weight}>{}</text>"#,
        label.x,
        label.y,
        label.size,
        label.anchor,
        label.color.to_hex(),
        html_escape(&label.text)
    )
}

fn format_points(points: &[(f64, f64)]) -> String {
    points
        .iter()
        .map(|(x, y)| format!("{x:.2},{y:.2}"))
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
#[path = "svg_tests.rs"]
mod tests;
