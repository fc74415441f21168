//! Line chart with one polyline per series and a marker at each point.

use crate::format::format_amount;

use super::axis::{self, PlotArea, ValueScale};
use super::figure::{Figure, Shape};
use super::{ChartSpec, PlotData};

const MARKER_RADIUS: f64 = 3.5;
const STROKE_WIDTH: f64 = 2.0;

#[allow(clippy::cast_precision_loss)]
pub fn draw(data: &PlotData, spec: &ChartSpec) -> Figure {
    let mut figure = Figure::new(spec.width, spec.height, spec.title.clone());
    let area = PlotArea::cartesian(spec.width, spec.height);
    let scale = ValueScale::including_zero(data.values());

    axis::draw_title(&mut figure);
    axis::draw_value_axis(&mut figure, &scale, &area, &spec.y_label);

    // A single point sits in the middle instead of on the left edge.
    let count = data.categories.len();
    let centers: Vec<f64> = if count == 1 {
        vec![area.left + area.width / 2.0]
    } else {
        let step = area.width / (count - 1) as f64;
        (0..count)
            .map(|i| (i as f64).mul_add(step, area.left))
            .collect()
    };

    for column in &data.series {
        let points: Vec<(f64, f64)> = centers
            .iter()
            .zip(&column.values)
            .map(|(x, v)| (*x, scale.project(*v, &area)))
            .collect();

        if points.len() > 1 {
            figure.push(Shape::Polyline {
                points: points.clone(),
                stroke: column.series.color(),
                width: STROKE_WIDTH,
            });
        }

        for ((point, category), amount) in points.iter().zip(&data.categories).zip(&column.amounts)
        {
            figure.push(Shape::Circle {
                center: *point,
                radius: MARKER_RADIUS,
                fill: column.series.color(),
                tooltip: Some(format!(
                    "{category} · {}: {}",
                    column.series.label(),
                    format_amount(*amount)
                )),
            });
        }
    }

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
#[path = "line_tests.rs"]
mod tests;
