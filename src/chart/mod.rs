//! Chart rendering for aggregated results.
//!
//! A chart is drawn once into a backend-neutral [`Figure`]; the SVG markup is
//! derived from it immediately and the PDF writer replays the same figure, so
//! every output format shows identical geometry.

mod axis;
mod bar;
mod figure;
mod line;
mod pie;
mod style;
mod svg;

use std::fmt;

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

use crate::aggregate::{AggregateResult, Dimension, GroupMetrics};
use crate::error::RenderError;

pub use figure::{Figure, Label, Shape, approx_text_width};
pub use style::{Color, GRID, TEXT, TEXT_MUTED, TextAnchor};
pub use svg::render_svg;

pub const DEFAULT_WIDTH: f64 = 640.0;
pub const DEFAULT_HEIGHT: f64 = 360.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartKind {
    Bar,
    Line,
    Pie,
}

impl fmt::Display for ChartKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bar => write!(f, "bar"),
            Self::Line => write!(f, "line"),
            Self::Pie => write!(f, "pie"),
        }
    }
}

/// A metric plotted as one series.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Series {
    Sales,
    Expenses,
    Profit,
}

impl Series {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Sales => "Sales",
            Self::Expenses => "Expenses",
            Self::Profit => "Profit",
        }
    }

    #[must_use]
    pub const fn color(self) -> Color {
        match self {
            Self::Sales => style::SALES,
            Self::Expenses => style::EXPENSES,
            Self::Profit => style::PROFIT,
        }
    }

    #[must_use]
    pub fn value(self, metrics: &GroupMetrics) -> Decimal {
        match self {
            Self::Sales => metrics.total_sales,
            Self::Expenses => metrics.total_expenses,
            Self::Profit => metrics.profit(),
        }
    }
}

/// What to draw and how to label it.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSpec {
    pub kind: ChartKind,
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub series: Vec<Series>,
    pub width: f64,
    pub height: f64,
}

impl ChartSpec {
    #[must_use]
    pub fn new(kind: ChartKind, title: impl Into<String>) -> Self {
        Self {
            kind,
            title: title.into(),
            x_label: String::new(),
            y_label: String::new(),
            series: vec![Series::Sales],
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
        }
    }

    #[must_use]
    pub fn with_axes(mut self, x_label: impl Into<String>, y_label: impl Into<String>) -> Self {
        self.x_label = x_label.into();
        self.y_label = y_label.into();
        self
    }

    #[must_use]
    pub fn with_series(mut self, series: Vec<Series>) -> Self {
        self.series = series;
        self
    }

    #[must_use]
    pub const fn with_size(mut self, width: f64, height: f64) -> Self {
        self.width = width;
        self.height = height;
        self
    }
}

/// One series' values: floats for geometry, exact amounts for labels.
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesData {
    pub series: Series,
    pub values: Vec<f64>,
    pub amounts: Vec<Decimal>,
}

/// Validated, float-converted values ready for plotting.
#[derive(Debug, Clone, PartialEq)]
pub struct PlotData {
    pub categories: Vec<String>,
    pub series: Vec<SeriesData>,
}

impl PlotData {
    /// Convert the requested series of `result` into finite floats.
    ///
    /// # Errors
    /// Returns [`RenderError`] when there is nothing to plot or a value is not finite.
    pub fn extract(result: &AggregateResult, spec: &ChartSpec) -> Result<Self, RenderError> {
        if spec.series.is_empty() {
            return Err(RenderError::NoSeries {
                chart: spec.title.clone(),
            });
        }
        if result.is_empty() {
            return Err(RenderError::EmptyInput {
                chart: spec.title.clone(),
            });
        }

        let categories: Vec<String> = result.groups.keys().cloned().collect();
        let mut series = Vec::with_capacity(spec.series.len());
        for s in &spec.series {
            let amounts: Vec<Decimal> = result.groups.values().map(|m| s.value(m)).collect();
            let values = amounts
                .iter()
                .zip(&categories)
                .map(|(amount, key)| to_finite(*amount, key, &spec.title))
                .collect::<Result<Vec<_>, _>>()?;
            series.push(SeriesData {
                series: *s,
                values,
                amounts,
            });
        }

        Ok(Self { categories, series })
    }

    /// Every plotted value across all series.
    pub fn values(&self) -> impl Iterator<Item = f64> + '_ {
        self.series.iter().flat_map(|s| s.values.iter().copied())
    }
}

fn to_finite(value: Decimal, key: &str, chart: &str) -> Result<f64, RenderError> {
    value
        .to_f64()
        .filter(|v| v.is_finite())
        .ok_or_else(|| RenderError::NonFinite {
            chart: chart.to_string(),
            key: key.to_string(),
        })
}

/// A rendered chart plus its caption.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartArtifact {
    pub dimension: Dimension,
    pub kind: ChartKind,
    pub caption: String,
    pub figure: Figure,
    pub svg: String,
}

/// Render `result` as the chart described by `spec`.
///
/// # Errors
/// Returns [`RenderError`] on empty input, non-finite values or a degenerate pie.
pub fn render(result: &AggregateResult, spec: &ChartSpec) -> Result<ChartArtifact, RenderError> {
    let data = PlotData::extract(result, spec)?;

    let figure = match spec.kind {
        ChartKind::Bar => bar::draw(&data, spec),
        ChartKind::Line => line::draw(&data, spec),
        ChartKind::Pie => pie::draw(&data, spec)?,
    };
    let svg = render_svg(&figure);

    tracing::debug!(
        chart = %spec.title,
        kind = %spec.kind,
        shapes = figure.shapes.len(),
        "chart rendered"
    );

    Ok(ChartArtifact {
        dimension: result.dimension,
        kind: spec.kind,
        caption: spec.title.clone(),
        figure,
        svg,
    })
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
