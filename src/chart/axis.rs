//! Plot area layout, value scaling and shared chart decorations.

use crate::format::format_compact;

use super::figure::{Figure, Label, Shape, approx_text_width};
use super::style::{Color, GRID, TEXT_MUTED, TextAnchor};

/// Target number of intervals on the value axis.
const TARGET_TICKS: f64 = 5.0;

/// Labels longer than this are truncated with an ellipsis.
const MAX_LABEL_CHARS: usize = 14;

/// Rectangle inside the figure where data is drawn.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotArea {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl PlotArea {
    /// Plot area for a cartesian chart, leaving room for title, ticks and legend.
    #[must_use]
    pub fn cartesian(width: f64, height: f64) -> Self {
        let left = 72.0;
        let top = 52.0;
        Self {
            left,
            top,
            width: (width - left - 24.0).max(1.0),
            height: (height - top - 72.0).max(1.0),
        }
    }

    #[must_use]
    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    #[must_use]
    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }
}

/// Linear value axis with "nice" tick spacing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValueScale {
    pub min: f64,
    pub max: f64,
    pub step: f64,
}

impl ValueScale {
    /// Scale covering every value and zero.
    #[must_use]
    pub fn including_zero(values: impl IntoIterator<Item = f64>) -> Self {
        let (lo, hi) = values
            .into_iter()
            .fold((0.0_f64, 0.0_f64), |(lo, hi), v| (lo.min(v), hi.max(v)));
        let hi = if hi - lo <= 0.0 { lo + 1.0 } else { hi };

        let step = nice_step(hi - lo);
        let min = (lo / step).floor() * step;
        let mut max = (hi / step).ceil() * step;
        if max <= min {
            max = min + step;
        }
        Self { min, max, step }
    }

    /// Tick values from `min` to `max` inclusive.
    #[must_use]
    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        clippy::cast_precision_loss
    )]
    pub fn ticks(&self) -> Vec<f64> {
        let count = ((self.max - self.min) / self.step).round() as usize;
        (0..=count)
            .map(|i| (i as f64).mul_add(self.step, self.min))
            .collect()
    }

    /// Vertical position of `value` inside `area`.
    #[must_use]
    pub fn project(&self, value: f64, area: &PlotArea) -> f64 {
        let ratio = (value - self.min) / (self.max - self.min);
        area.bottom() - ratio * area.height
    }
}

fn nice_step(range: f64) -> f64 {
    let raw = range / TARGET_TICKS;
    let magnitude = 10_f64.powf(raw.log10().floor());
    let normalized = raw / magnitude;
    let nice = if normalized <= 1.0 {
        1.0
    } else if normalized <= 2.0 {
        2.0
    } else if normalized <= 5.0 {
        5.0
    } else {
        10.0
    };
    nice * magnitude
}

/// Shorten a category label for axis display.
#[must_use]
pub fn truncate_label(label: &str) -> String {
    if label.chars().count() > MAX_LABEL_CHARS {
        let head: String = label.chars().take(MAX_LABEL_CHARS - 1).collect();
        format!("{head}…")
    } else {
        label.to_string()
    }
}

pub fn draw_title(figure: &mut Figure) {
    let title = figure.title.clone();
    let x = figure.width / 2.0;
    figure.text(
        Label::new(x, 26.0, title, 15.0)
            .with_anchor(TextAnchor::Middle)
            .bold(),
    );
}

/// Dashed grid lines, tick labels and the axis caption.
pub fn draw_value_axis(figure: &mut Figure, scale: &ValueScale, area: &PlotArea, caption: &str) {
    for tick in scale.ticks() {
        let y = scale.project(tick, area);
        figure.push(Shape::Line {
            from: (area.left, y),
            to: (area.right(), y),
            stroke: GRID,
            width: 1.0,
            dashed: tick.abs() > f64::EPSILON,
        });
        figure.text(
            Label::new(area.left - 8.0, y + 3.5, format_compact(tick), 10.0)
                .with_anchor(TextAnchor::End)
                .with_color(TEXT_MUTED),
        );
    }

    if !caption.is_empty() {
        figure.text(Label::new(area.left, area.top - 10.0, caption, 10.0).with_color(TEXT_MUTED));
    }
}

/// Category names under the plot, centred on `centers`, plus the axis caption.
pub fn draw_category_axis(
    figure: &mut Figure,
    categories: &[String],
    centers: &[f64],
    area: &PlotArea,
    caption: &str,
) {
    for (label, x) in categories.iter().zip(centers) {
        figure.text(
            Label::new(*x, area.bottom() + 16.0, truncate_label(label), 10.0)
                .with_anchor(TextAnchor::Middle)
                .with_color(TEXT_MUTED),
        );
    }

    if !caption.is_empty() {
        figure.text(
            Label::new(area.left + area.width / 2.0, area.bottom() + 34.0, caption, 10.0)
                .with_anchor(TextAnchor::Middle)
                .with_color(TEXT_MUTED),
        );
    }
}

/// Horizontal legend row centred at the bottom of the figure.
pub fn draw_legend(figure: &mut Figure, entries: &[(String, Color)]) {
    if entries.is_empty() {
        return;
    }

    let swatch = 10.0;
    let gap = 18.0;
    let widths: Vec<f64> = entries
        .iter()
        .map(|(label, _)| swatch + 6.0 + approx_text_width(label, 10.0))
        .collect();
    let total: f64 = widths.iter().sum::<f64>() + gap * (widths.len() - 1) as f64;

    let y = figure.height - 14.0;
    let mut x = (figure.width - total) / 2.0;
    for ((label, color), width) in entries.iter().zip(&widths) {
        figure.push(Shape::Rect {
            x,
            y: y - swatch + 1.0,
            width: swatch,
            height: swatch,
            fill: *color,
            tooltip: None,
        });
        figure.text(Label::new(x + swatch + 6.0, y, label.clone(), 10.0));
        x += width + gap;
    }
}

#[cfg(test)]
#[path = "axis_tests.rs"]
mod tests;
