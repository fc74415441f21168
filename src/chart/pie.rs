//! Pie chart of the first series, one wedge per category.

use std::f64::consts::{FRAC_PI_2, TAU};

use rust_decimal::Decimal;

use crate::error::RenderError;
use crate::format::format_amount;

use super::axis::{self, truncate_label};
use super::figure::{Figure, Label, Shape};
use super::style::{GRID, TEXT_MUTED, TextAnchor, palette_color};
use super::{ChartSpec, PlotData};

/// Arc segments in a full circle; wedges use a proportional share.
const FULL_CIRCLE_SEGMENTS: f64 = 96.0;

const LEGEND_ROW_HEIGHT: f64 = 18.0;
const EMPTY_LABEL: &str = "No sales recorded";
const SWATCH: f64 = 10.0;

/// Draw the wedges and a legend on the right.
///
/// A zero total draws an empty placeholder disc with every share at 0%.
///
/// # Errors
/// Returns [`RenderError::DegeneratePie`] when a value is negative.
#[allow(
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss
)]
pub fn draw(data: &PlotData, spec: &ChartSpec) -> Result<Figure, RenderError> {
    let Some(column) = data.series.first() else {
        return Err(RenderError::NoSeries {
            chart: spec.title.clone(),
        });
    };

    if column.values.iter().any(|v| *v < 0.0) {
        return Err(RenderError::DegeneratePie {
            chart: spec.title.clone(),
        });
    }
    let total: f64 = column.values.iter().sum();
    let share_of = |value: f64| if total > 0.0 { value / total } else { 0.0 };

    let mut figure = Figure::new(spec.width, spec.height, spec.title.clone());
    axis::draw_title(&mut figure);

    let top = 52.0;
    let radius = ((spec.height - top - 24.0) / 2.0).min(spec.width * 0.28).max(1.0);
    let center = (spec.width * 0.36, top + (spec.height - top - 24.0) / 2.0);

    if total <= 0.0 {
        figure.push(Shape::Circle {
            center,
            radius,
            fill: GRID,
            tooltip: Some(format!(
                "{}: {}",
                column.series.label(),
                format_amount(Decimal::ZERO)
            )),
        });
        figure.text(
            Label::new(center.0, center.1 + 4.0, EMPTY_LABEL, 11.0)
                .with_anchor(TextAnchor::Middle)
                .with_color(TEXT_MUTED),
        );
    }

    let mut angle = -FRAC_PI_2;
    for (i, ((category, value), amount)) in data
        .categories
        .iter()
        .zip(&column.values)
        .zip(&column.amounts)
        .enumerate()
    {
        let share = share_of(*value);
        if share <= 0.0 {
            continue;
        }
        let sweep = share * TAU;
        let segments = (share * FULL_CIRCLE_SEGMENTS).ceil().max(1.0) as usize;

        let mut points = Vec::with_capacity(segments + 2);
        if share < 1.0 {
            points.push(center);
        }
        for step in 0..=segments {
            let theta = (step as f64 / segments as f64).mul_add(sweep, angle);
            points.push((
                radius.mul_add(theta.cos(), center.0),
                radius.mul_add(theta.sin(), center.1),
            ));
        }

        figure.push(Shape::Polygon {
            points,
            fill: palette_color(i),
            tooltip: Some(format!(
                "{category} · {}: {} ({:.1}%)",
                column.series.label(),
                format_amount(*amount),
                share * 100.0
            )),
        });
        angle += sweep;
    }

    let legend_x = center.0 + radius + 36.0;
    let rows = data.categories.len() as f64;
    let mut y = center.1 - (rows * LEGEND_ROW_HEIGHT) / 2.0 + LEGEND_ROW_HEIGHT / 2.0;
    for (i, (category, value)) in data.categories.iter().zip(&column.values).enumerate() {
        figure.push(Shape::Rect {
            x: legend_x,
            y: y - SWATCH + 1.0,
            width: SWATCH,
            height: SWATCH,
            fill: palette_color(i),
            tooltip: None,
        });
        figure.text(Label::new(
            legend_x + SWATCH + 6.0,
            y,
            format!("{} ({:.1}%)", truncate_label(category), share_of(*value) * 100.0),
            10.0,
        ));
        y += LEGEND_ROW_HEIGHT;
    }

    figure.text(
        Label::new(legend_x, spec.height - 14.0, column.series.label(), 10.0).with_color(TEXT_MUTED),
    );

    Ok(figure)
}

#[cfg(test)]
#[path = "pie_tests.rs"]
mod tests;
