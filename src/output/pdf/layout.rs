//! Flows report content onto A4 pages.
//!
//! Positions are tracked as a cursor measured from the top of the page and
//! converted to PDF user space (origin bottom-left) only when drawing.

use crate::chart::{Color, Figure, GRID, Shape, TEXT, TEXT_MUTED, approx_text_width};
use crate::report::Table;

use super::canvas::{Canvas, Font};
use super::document::{PAGE_HEIGHT, PAGE_WIDTH};

pub const MARGIN: f64 = 56.0;
pub const CONTENT_WIDTH: f64 = PAGE_WIDTH - 2.0 * MARGIN;
const BOTTOM: f64 = PAGE_HEIGHT - MARGIN;
const FOOTER_BASELINE: f64 = 30.0;

const BODY_SIZE: f64 = 10.5;
const LINE_SPACING: f64 = 1.4;
const BULLET_INDENT: f64 = 14.0;

const TABLE_SIZE: f64 = 9.0;
const ROW_HEIGHT: f64 = 18.0;
const CELL_PADDING: f64 = 5.0;
/// Share of the table width given to the key column.
const KEY_COLUMN_SHARE: f64 = 0.28;
const STRIPE: Color = Color::rgb(0xf8, 0xfa, 0xfc);

#[derive(Debug, Default)]
pub struct Layout {
    pages: Vec<Canvas>,
    page: Canvas,
    cursor: f64,
    figures: usize,
}

impl Layout {
    #[must_use]
    pub fn new() -> Self {
        Self {
            cursor: MARGIN,
            ..Self::default()
        }
    }

    pub fn title(&mut self, title: &str, subtitle: &str) {
        for line in wrap_text(title, 20.0, CONTENT_WIDTH) {
            self.centered_line(&line, Font::Bold, 20.0, TEXT);
        }
        if !subtitle.is_empty() {
            self.cursor += 2.0;
            self.centered_line(subtitle, Font::Italic, 11.0, TEXT_MUTED);
        }
        self.cursor += 8.0;
        self.rule();
        self.cursor += 6.0;
    }

    pub fn heading(&mut self, text: &str) {
        // Keep a heading together with the start of its content.
        self.ensure_space(15.0 * LINE_SPACING + 4.0 * BODY_SIZE * LINE_SPACING);
        if self.cursor > MARGIN {
            self.cursor += 14.0;
        }
        for line in wrap_text(text, 15.0, CONTENT_WIDTH) {
            self.text_line(MARGIN, &line, Font::Bold, 15.0, TEXT);
        }
        self.cursor += 4.0;
    }

    pub fn subheading(&mut self, text: &str) {
        self.ensure_space(12.0 * LINE_SPACING + 3.0 * ROW_HEIGHT);
        if self.cursor > MARGIN {
            self.cursor += 8.0;
        }
        for line in wrap_text(text, 12.0, CONTENT_WIDTH) {
            self.text_line(MARGIN, &line, Font::Bold, 12.0, TEXT);
        }
        self.cursor += 2.0;
    }

    pub fn paragraph(&mut self, text: &str) {
        for line in wrap_text(text, BODY_SIZE, CONTENT_WIDTH) {
            self.text_line(MARGIN, &line, Font::Regular, BODY_SIZE, TEXT);
        }
        self.cursor += 6.0;
    }

    pub fn bullets(&mut self, items: &[String]) {
        for item in items {
            let lines = wrap_text(item, BODY_SIZE, CONTENT_WIDTH - BULLET_INDENT);
            for (i, line) in lines.iter().enumerate() {
                let height = BODY_SIZE * LINE_SPACING;
                self.ensure_space(height);
                if i == 0 {
                    let baseline = self.baseline(BODY_SIZE);
                    self.page
                        .text(MARGIN + 3.0, baseline, Font::Regular, BODY_SIZE, TEXT, "•");
                }
                self.text_line(MARGIN + BULLET_INDENT, line, Font::Regular, BODY_SIZE, TEXT);
            }
            self.cursor += 2.0;
        }
        self.cursor += 4.0;
    }

    /// Draw `table`, repeating the header row after every page break.
    pub fn table(&mut self, table: &Table) {
        let widths = column_widths(table.column_count());
        self.ensure_space(ROW_HEIGHT * 2.0);
        self.table_row(&table.headers, &widths, table, true, None);

        for (i, row) in table.rows.iter().enumerate() {
            if self.cursor + ROW_HEIGHT > BOTTOM {
                self.new_page();
                self.table_row(&table.headers, &widths, table, true, None);
            }
            let stripe = (i % 2 == 1).then_some(STRIPE);
            self.table_row(row, &widths, table, false, stripe);
        }
        self.cursor += 10.0;
    }

    /// Replay a chart figure scaled to the content width, followed by its caption.
    pub fn figure(&mut self, figure: &Figure, caption: &str) {
        let scale = if figure.width > 0.0 {
            CONTENT_WIDTH / figure.width
        } else {
            1.0
        };
        let height = figure.height * scale;
        self.ensure_space(height + 24.0);

        let top = self.cursor;
        let map = |(x, y): (f64, f64)| (MARGIN + x * scale, PAGE_HEIGHT - (top + y * scale));
        for shape in &figure.shapes {
            match shape {
                Shape::Rect {
                    x,
                    y,
                    width,
                    height,
                    fill,
                    ..
                } => {
                    let (px, py) = map((*x, y + height));
                    self.page
                        .fill_rect(px, py, width * scale, height * scale, *fill);
                }
                Shape::Line {
                    from,
                    to,
                    stroke,
                    width,
                    dashed,
                } => self
                    .page
                    .line(map(*from), map(*to), *stroke, width * scale, *dashed),
                Shape::Polyline {
                    points,
                    stroke,
                    width,
                } => {
                    let mapped: Vec<_> = points.iter().copied().map(map).collect();
                    self.page.polyline(&mapped, *stroke, width * scale);
                }
                Shape::Polygon { points, fill, .. } => {
                    let mapped: Vec<_> = points.iter().copied().map(map).collect();
                    self.page.fill_polygon(&mapped, *fill);
                }
                Shape::Circle {
                    center,
                    radius,
                    fill,
                    ..
                } => self.page.fill_circle(map(*center), radius * scale, *fill),
                Shape::Text(label) => {
                    let (px, py) = map((label.left(), label.y));
                    let font = if label.bold { Font::Bold } else { Font::Regular };
                    self.page
                        .text(px, py, font, label.size * scale, label.color, &label.text);
                }
            }
        }

        self.cursor += height + 4.0;
        self.figures += 1;
        let caption = format!("Figure {}: {caption}", self.figures);
        self.centered_line(&caption, Font::Italic, 9.0, TEXT_MUTED);
        self.cursor += 10.0;
    }

    /// Close the last page and stamp `Page N of M` footers on every page.
    #[must_use]
    pub fn finish(mut self) -> Vec<Vec<u8>> {
        let last = std::mem::take(&mut self.page);
        self.pages.push(last);

        let total = self.pages.len();
        self.pages
            .into_iter()
            .enumerate()
            .map(|(i, mut page)| {
                let footer = format!("Page {} of {total}", i + 1);
                let x = (PAGE_WIDTH - approx_text_width(&footer, 9.0)) / 2.0;
                page.text(x, FOOTER_BASELINE, Font::Regular, 9.0, TEXT_MUTED, &footer);
                page.into_bytes()
            })
            .collect()
    }

    fn new_page(&mut self) {
        let full = std::mem::take(&mut self.page);
        self.pages.push(full);
        self.cursor = MARGIN;
    }

    /// Start a new page unless `needed` points still fit on this one.
    fn ensure_space(&mut self, needed: f64) {
        if self.cursor + needed > BOTTOM && self.cursor > MARGIN {
            self.new_page();
        }
    }

    /// PDF y coordinate for the baseline of a line of text at the cursor.
    fn baseline(&self, size: f64) -> f64 {
        PAGE_HEIGHT - (self.cursor + size)
    }

    fn text_line(&mut self, x: f64, text: &str, font: Font, size: f64, color: Color) {
        let height = size * LINE_SPACING;
        self.ensure_space(height);
        let baseline = self.baseline(size);
        self.page.text(x, baseline, font, size, color, text);
        self.cursor += height;
    }

    fn centered_line(&mut self, text: &str, font: Font, size: f64, color: Color) {
        let x = MARGIN + ((CONTENT_WIDTH - approx_text_width(text, size)) / 2.0).max(0.0);
        self.text_line(x, text, font, size, color);
    }

    fn rule(&mut self) {
        let y = PAGE_HEIGHT - self.cursor;
        self.page
            .line((MARGIN, y), (MARGIN + CONTENT_WIDTH, y), GRID, 1.0, false);
    }

    fn table_row(
        &mut self,
        cells: &[String],
        widths: &[f64],
        table: &Table,
        header: bool,
        background: Option<Color>,
    ) {
        let row_bottom = PAGE_HEIGHT - (self.cursor + ROW_HEIGHT);
        let fill = if header { Some(GRID) } else { background };
        if let Some(color) = fill {
            self.page
                .fill_rect(MARGIN, row_bottom, CONTENT_WIDTH, ROW_HEIGHT, color);
        }

        let font = if header { Font::Bold } else { Font::Regular };
        let baseline = row_bottom + (ROW_HEIGHT - TABLE_SIZE) / 2.0 + 1.5;
        let mut left = MARGIN;
        for (column, width) in widths.iter().enumerate() {
            let text = cells.get(column).map_or("", String::as_str);
            let fitted = fit_text(text, TABLE_SIZE, width - 2.0 * CELL_PADDING);
            let x = if table.is_numeric(column) {
                left + width - CELL_PADDING - approx_text_width(&fitted, TABLE_SIZE)
            } else {
                left + CELL_PADDING
            };
            self.page
                .text(x, baseline, font, TABLE_SIZE, TEXT, &fitted);
            left += width;
        }

        self.page.line(
            (MARGIN, row_bottom),
            (MARGIN + CONTENT_WIDTH, row_bottom),
            GRID,
            0.5,
            false,
        );
        self.cursor += ROW_HEIGHT;
    }
}

/// Column widths: a wider key column, the rest shared equally.
#[allow(clippy::cast_precision_loss)]
fn column_widths(columns: usize) -> Vec<f64> {
    match columns {
        0 => Vec::new(),
        1 => vec![CONTENT_WIDTH],
        n => {
            let key = CONTENT_WIDTH * KEY_COLUMN_SHARE;
            let rest = (CONTENT_WIDTH - key) / (n - 1) as f64;
            std::iter::once(key)
                .chain(std::iter::repeat_n(rest, n - 1))
                .collect()
        }
    }
}

/// Greedy word wrap; words wider than a line are split by character.
#[must_use]
pub fn wrap_text(text: &str, size: f64, max_width: f64) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        let candidate = if current.is_empty() {
            word.to_string()
        } else {
            format!("{current} {word}")
        };
        if approx_text_width(&candidate, size) <= max_width {
            current = candidate;
            continue;
        }

        if !current.is_empty() {
            lines.push(std::mem::take(&mut current));
        }
        for ch in word.chars() {
            current.push(ch);
            if approx_text_width(&current, size) > max_width && current.chars().count() > 1 {
                current.pop();
                lines.push(std::mem::take(&mut current));
                current.push(ch);
            }
        }
    }

    if !current.is_empty() || lines.is_empty() {
        lines.push(current);
    }
    lines
}

/// Truncate `text` with an ellipsis so it fits `max_width`.
#[must_use]
pub fn fit_text(text: &str, size: f64, max_width: f64) -> String {
    if approx_text_width(text, size) <= max_width {
        return text.to_string();
    }
    let mut fitted: String = text.chars().collect();
    while !fitted.is_empty() && approx_text_width(&format!("{fitted}…"), size) > max_width {
        fitted.pop();
    }
    format!("{fitted}…")
}

#[cfg(test)]
#[path = "layout_tests.rs"]
mod tests;
