//! Grouped vertical bar chart.

use crate::format::format_amount;

use super::axis::{self, PlotArea, ValueScale};
use super::figure::{Figure, Shape};
use super::{ChartSpec, PlotData};

/// Share of each category slot occupied by bars; the rest is spacing.
const GROUP_FILL: f64 = 0.8;

#[allow(clippy::cast_precision_loss)]
pub fn draw(data: &PlotData, spec: &ChartSpec) -> Figure {
    let mut figure = Figure::new(spec.width, spec.height, spec.title.clone());
    let area = PlotArea::cartesian(spec.width, spec.height);
    let scale = ValueScale::including_zero(data.values());

    axis::draw_title(&mut figure);
    axis::draw_value_axis(&mut figure, &scale, &area, &spec.y_label);

    let slot = area.width / data.categories.len() as f64;
    let bar_width = slot * GROUP_FILL / data.series.len() as f64;
    let baseline = scale.project(0.0, &area);

    let mut centers = Vec::with_capacity(data.categories.len());
    for (i, category) in data.categories.iter().enumerate() {
        let slot_left = (i as f64).mul_add(slot, area.left);
        let first_bar = slot.mul_add((1.0 - GROUP_FILL) / 2.0, slot_left);
        centers.push(slot_left + slot / 2.0);

        for (j, column) in data.series.iter().enumerate() {
            let series = column.series;
            let top = scale.project(column.values[i], &area);
            figure.push(Shape::Rect {
                x: (j as f64).mul_add(bar_width, first_bar),
                y: top.min(baseline),
                width: bar_width,
                height: (baseline - top).abs(),
                fill: series.color(),
                tooltip: Some(format!(
                    "{category} · {}: {}",
                    series.label(),
                    format_amount(column.amounts[i])
                )),
            });
        }
    }

    figure.push(Shape::Line {
        from: (area.left, baseline),
        to: (area.right(), baseline),
        stroke: super::style::TEXT_MUTED,
        width: 1.0,
        dashed: false,
    });

    axis::draw_category_axis(&mut figure, &data.categories, &centers, &area, &spec.x_label);
    let legend: Vec<_> = data
        .series
        .iter()
        .map(|s| (s.series.label().to_string(), s.series.color()))
        .collect();
    axis::draw_legend(&mut figure, &legend);

    figure
}

#[cfg(test)]
#[path = "bar_tests.rs"]
mod tests;
