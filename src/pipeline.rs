//! End-to-end report generation: load, aggregate, chart, compose, write.
//!
//! Stages run strictly in sequence and the first error aborts the run. The
//! output file is only replaced once the whole document has been rendered.

use std::fmt;
use std::path::PathBuf;

use crate::aggregate::{Analysis, Dimension, Granularity, analyze};
use crate::chart::{self, ChartArtifact, ChartKind, ChartSpec, Series};
use crate::config::ReportConfig;
use crate::error::Result;
use crate::format::{format_money, format_percent};
use crate::ingest::load_dataset;
use crate::output::{DocumentFormat, write_atomic};
use crate::report::{SummaryMetrics, compose};

/// Everything one run needs.
#[derive(Debug, Clone)]
pub struct PipelineOptions {
    pub input: PathBuf,
    pub output: PathBuf,
    /// Explicit format; inferred from `output` when `None`.
    pub format: Option<DocumentFormat>,
    pub config: ReportConfig,
}

/// What a successful run produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineOutcome {
    pub output: PathBuf,
    pub format: DocumentFormat,
    pub bytes: usize,
    pub summary: SummaryMetrics,
    pub currency_symbol: String,
}

impl fmt::Display for PipelineOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = &self.summary;
        writeln!(
            f,
            "Report written to {} ({}, {} bytes)",
            self.output.display(),
            self.format,
            self.bytes
        )?;
        writeln!(
            f,
            "  {} records from {} to {}, {} rows skipped",
            s.records, s.first_date, s.last_date, s.skipped_rows
        )?;
        write!(
            f,
            "  Sales {}, profit {}, margin {}",
            format_money(s.total_sales, &self.currency_symbol),
            format_money(s.profit, &self.currency_symbol),
            format_percent(s.margin)
        )
    }
}

/// Run every stage for `options`.
///
/// # Errors
/// Returns the first stage error; on error the output path is left untouched.
pub fn run(options: &PipelineOptions) -> Result<PipelineOutcome> {
    let config = &options.config;
    let format = DocumentFormat::resolve(options.format, &options.output);
    tracing::info!(
        input = %options.input.display(),
        output = %options.output.display(),
        %format,
        "generating report"
    );

    let loaded = load_dataset(&options.input, &config.ingest_options())?;
    let analysis =
        analyze(&loaded.dataset, config.period)?.with_skipped_rows(loaded.skipped_count());

    let charts = render_charts(&analysis, config)?;
    let report = compose(&analysis, &charts, &config.compose_options())?;

    let bytes = format.writer().render(&report)?;
    write_atomic(&options.output, &bytes)?;
    tracing::info!(bytes = bytes.len(), "report written");

    Ok(PipelineOutcome {
        output: options.output.clone(),
        format,
        bytes: bytes.len(),
        summary: report.metrics.summary,
        currency_symbol: config.currency_symbol.clone(),
    })
}

/// One chart per dimension, in report order.
///
/// # Errors
/// Returns the first [`crate::error::RenderError`].
pub fn render_charts(analysis: &Analysis, config: &ReportConfig) -> Result<Vec<ChartArtifact>> {
    Dimension::ALL
        .iter()
        .map(|&dimension| {
            let spec = chart_spec(dimension, analysis.granularity, config);
            chart::render(analysis.result(dimension), &spec).map_err(Into::into)
        })
        .collect()
}

/// Chart kind, title, axes and series for `dimension`.
#[must_use]
pub fn chart_spec(
    dimension: Dimension,
    granularity: Granularity,
    config: &ReportConfig,
) -> ChartSpec {
    let amount_axis = format!("Amount ({})", config.currency_symbol);
    let spec = match dimension {
        Dimension::Product => ChartSpec::new(ChartKind::Bar, "Sales and Profit by Product")
            .with_axes("Product", amount_axis)
            .with_series(vec![Series::Sales, Series::Profit]),
        Dimension::Region => ChartSpec::new(ChartKind::Pie, "Sales by Region"),
        Dimension::Period => ChartSpec::new(ChartKind::Line, trend_title(granularity))
            .with_axes(granularity.heading(), amount_axis)
            .with_series(vec![Series::Sales, Series::Profit]),
    };
    spec.with_size(config.charts.width, config.charts.height)
}

const fn trend_title(granularity: Granularity) -> &'static str {
    match granularity {
        Granularity::Month => "Monthly Sales Trend",
        Granularity::Quarter => "Quarterly Sales Trend",
        Granularity::Year => "Yearly Sales Trend",
    }
}

#[cfg(test)]
#[path = "pipeline_tests.rs"]
mod tests;
