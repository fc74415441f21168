//! Page content streams: PDF drawing operators and text encoding.

use std::fmt::Write;

use crate::chart::Color;

/// Bézier control-point factor for approximating a quarter circle.
const KAPPA: f64 = 0.552_284_749_8;

/// The three built-in fonts every page may reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Font {
    Regular,
    Bold,
    Italic,
}

impl Font {
    /// Resource name used inside content streams.
    #[must_use]
    pub const fn resource(self) -> &'static str {
        match self {
            Self::Regular => "F1",
            Self::Bold => "F2",
            Self::Italic => "F3",
        }
    }

    #[must_use]
    pub const fn base_font(self) -> &'static str {
        match self {
            Self::Regular => "Helvetica",
            Self::Bold => "Helvetica-Bold",
            Self::Italic => "Helvetica-Oblique",
        }
    }

    pub const ALL: [Self; 3] = [Self::Regular, Self::Bold, Self::Italic];
}

/// Content stream for a single page, in PDF user space (origin bottom-left).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Canvas {
    ops: String,
}

impl Canvas {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn into_bytes(self) -> Vec<u8> {
        self.ops.into_bytes()
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.ops
    }

    pub fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64, color: Color) {
        self.set_fill(color);
        writeln!(self.ops, "{x:.2} {y:.2} {width:.2} {height:.2} re f").ok();
    }

    pub fn line(&mut self, from: (f64, f64), to: (f64, f64), color: Color, width: f64, dashed: bool) {
        self.set_stroke(color);
        writeln!(self.ops, "{width:.2} w").ok();
        if dashed {
            self.ops.push_str("[4 4] 0 d\n");
        }
        writeln!(
            self.ops,
            "{:.2} {:.2} m {:.2} {:.2} l S",
            from.0, from.1, to.0, to.1
        )
        .ok();
        if dashed {
            self.ops.push_str("[] 0 d\n");
        }
    }

    pub fn polyline(&mut self, points: &[(f64, f64)], color: Color, width: f64) {
        if points.len() < 2 {
            return;
        }
        self.set_stroke(color);
        writeln!(self.ops, "{width:.2} w 1 j").ok();
        self.path(points);
        self.ops.push_str("S\n");
    }

    pub fn fill_polygon(&mut self, points: &[(f64, f64)], color: Color) {
        if points.len() < 3 {
            return;
        }
        self.set_fill(color);
        self.path(points);
        self.ops.push_str("h f\n");
    }

    pub fn fill_circle(&mut self, center: (f64, f64), radius: f64, color: Color) {
        let (cx, cy) = center;
        let k = radius * KAPPA;
        self.set_fill(color);
        writeln!(self.ops, "{:.2} {cy:.2} m", cx + radius).ok();
        let quarters = [
            ((cx + radius, cy + k), (cx + k, cy + radius), (cx, cy + radius)),
            ((cx - k, cy + radius), (cx - radius, cy + k), (cx - radius, cy)),
            ((cx - radius, cy - k), (cx - k, cy - radius), (cx, cy - radius)),
            ((cx + k, cy - radius), (cx + radius, cy - k), (cx + radius, cy)),
        ];
        for (c1, c2, end) in quarters {
            writeln!(
                self.ops,
                "{:.2} {:.2} {:.2} {:.2} {:.2} {:.2} c",
                c1.0, c1.1, c2.0, c2.1, end.0, end.1
            )
            .ok();
        }
        self.ops.push_str("f\n");
    }

    /// Draw `text` with its baseline starting at (`x`, `y`).
    pub fn text(&mut self, x: f64, y: f64, font: Font, size: f64, color: Color, text: &str) {
        let replaced = unencodable_chars(text);
        if replaced > 0 {
            tracing::warn!(text, replaced, "characters outside WinAnsi are shown as '?' in the PDF");
        }
        self.set_fill(color);
        writeln!(
            self.ops,
            "BT /{} {size:.2} Tf {x:.2} {y:.2} Td ({}) Tj ET",
            font.resource(),
            encode_text(text)
        )
        .ok();
    }

    fn path(&mut self, points: &[(f64, f64)]) {
        for (i, (x, y)) in points.iter().enumerate() {
            let op = if i == 0 { "m" } else { "l" };
            writeln!(self.ops, "{x:.2} {y:.2} {op}").ok();
        }
    }

    fn set_fill(&mut self, color: Color) {
        let (r, g, b) = color.to_unit();
        writeln!(self.ops, "{r:.3} {g:.3} {b:.3} rg").ok();
    }

    fn set_stroke(&mut self, color: Color) {
        let (r, g, b) = color.to_unit();
        writeln!(self.ops, "{r:.3} {g:.3} {b:.3} RG").ok();
    }
}

/// Encode `text` as the body of a PDF literal string in `WinAnsiEncoding`.
///
/// Output is pure ASCII: delimiters are backslash-escaped and bytes above
/// 0x7E are written as octal escapes. Characters outside the encoding become `?`.
#[must_use]
pub fn encode_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '(' | ')' | '\\' => {
                out.push('\\');
                out.push(ch);
            }
            ' '..='~' => out.push(ch),
            _ => {
                let byte = win_ansi_byte(ch).unwrap_or(b'?');
                if byte.is_ascii() {
                    out.push(char::from(byte));
                } else {
                    write!(out, "\\{byte:03o}").ok();
                }
            }
        }
    }
    out
}

/// Number of characters in `text` that [`encode_text`] replaces with `?`.
#[must_use]
pub fn unencodable_chars(text: &str) -> usize {
    text.chars()
        .filter(|ch| !matches!(ch, ' '..='~') && win_ansi_byte(*ch).is_none())
        .count()
}

/// `WinAnsiEncoding` byte for a non-ASCII character.
fn win_ansi_byte(ch: char) -> Option<u8> {
    let byte = match ch {
        '€' => 0x80,
        '‚' => 0x82,
        '„' => 0x84,
        '…' => 0x85,
        '‘' => 0x91,
        '’' => 0x92,
        '“' => 0x93,
        '”' => 0x94,
        '•' => 0x95,
        '–' => 0x96,
        '—' => 0x97,
        '™' => 0x99,
        '\t' => b' ',
        // Latin-1 supplement maps one-to-one.
        '\u{a0}'..='\u{ff}' => u8::try_from(u32::from(ch)).ok()?,
        _ => return None,
    };
    Some(byte)
}

#[cfg(test)]
#[path = "canvas_tests.rs"]
mod tests;
