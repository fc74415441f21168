//! Assembles analysis results and charts into a [`Report`].

use rust_decimal::Decimal;

use crate::aggregate::{AggregateResult, Analysis, Dimension, GroupMetrics};
use crate::chart::ChartArtifact;
use crate::error::CompositionError;
use crate::format::{format_money, format_percent};

use super::metrics::{
    DimensionMetrics, FlaggedKey, GroupRow, MarginRating, ReportMetrics, SummaryMetrics,
};
use super::{Report, Section, Table};

pub const DEFAULT_TITLE: &str = "Sales Performance Analysis Report";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComposeOptions {
    pub title: String,
    pub currency_symbol: String,
    /// Margin ratio below which a grouping key is flagged.
    pub margin_threshold: Decimal,
}

impl Default for ComposeOptions {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            currency_symbol: "$".to_string(),
            margin_threshold: Decimal::ZERO,
        }
    }
}

/// Build the report in its fixed section order.
///
/// # Errors
/// Returns [`CompositionError::MissingChart`] when a dimension has no chart artifact.
pub fn compose(
    analysis: &Analysis,
    charts: &[ChartArtifact],
    options: &ComposeOptions,
) -> Result<Report, CompositionError> {
    let charts = charts_in_order(charts)?;
    let composer = Composer {
        analysis,
        options,
    };

    let mut sections = Vec::new();
    composer.executive_summary(&mut sections);
    composer.breakdown_tables(&mut sections);

    sections.push(Section::Heading("Charts".to_string()));
    sections.extend(charts.into_iter().map(Section::Chart));

    let flagged = composer.flagged_keys();
    sections.push(Section::Heading("Recommendations".to_string()));
    sections.push(Section::Bullets(composer.recommendations(&flagged)));

    tracing::info!(
        sections = sections.len(),
        underperforming = flagged.len(),
        "report composed"
    );

    Ok(Report {
        title: options.title.clone(),
        subtitle: format!(
            "Reporting period: {} to {}",
            analysis.first_date, analysis.last_date
        ),
        sections,
        metrics: composer.metrics(flagged),
    })
}

fn charts_in_order(charts: &[ChartArtifact]) -> Result<Vec<ChartArtifact>, CompositionError> {
    Dimension::ALL
        .iter()
        .map(|dimension| {
            charts
                .iter()
                .find(|chart| chart.dimension == *dimension)
                .cloned()
                .ok_or_else(|| CompositionError::MissingChart {
                    dimension: dimension.to_string(),
                })
        })
        .collect()
}

struct Composer<'a> {
    analysis: &'a Analysis,
    options: &'a ComposeOptions,
}

impl Composer<'_> {
    fn money(&self, value: Decimal) -> String {
        format_money(value, &self.options.currency_symbol)
    }

    fn key_heading(&self, dimension: Dimension) -> &'static str {
        match dimension {
            Dimension::Product => "Product",
            Dimension::Region => "Region",
            Dimension::Period => self.analysis.granularity.heading(),
        }
    }

    fn is_underperforming(&self, metrics: &GroupMetrics) -> bool {
        metrics
            .margin()
            .is_none_or(|margin| margin < self.options.margin_threshold)
    }

    fn executive_summary(&self, sections: &mut Vec<Section>) {
        let overall = &self.analysis.overall;
        let margin = overall.margin();
        let rating = MarginRating::from_margin(margin);

        sections.push(Section::Heading("Executive Summary".to_string()));
        sections.push(Section::Paragraph(format!(
            "Total sales of {} against expenses of {} produced a profit of {}, \
             an overall margin of {} ({rating}).",
            self.money(overall.total_sales),
            self.money(overall.total_expenses),
            self.money(overall.profit()),
            format_percent(margin),
        )));

        let mut bullets = vec![
            format!("Records analysed: {}", overall.records),
            format!("Rows skipped: {}", self.analysis.skipped_rows),
        ];
        for result in self.analysis.results() {
            let noun = self.key_heading(result.dimension);
            if let Some(best) = &result.best {
                bullets.push(format!(
                    "Best {}: {} ({} profit)",
                    noun.to_lowercase(),
                    best.key,
                    self.money(best.profit)
                ));
            }
            if let Some(worst) = &result.worst {
                bullets.push(format!(
                    "Worst {}: {} ({} profit)",
                    noun.to_lowercase(),
                    worst.key,
                    self.money(worst.profit)
                ));
            }
        }
        sections.push(Section::Bullets(bullets));
    }

    fn breakdown_tables(&self, sections: &mut Vec<Section>) {
        sections.push(Section::Heading("Detailed Breakdown".to_string()));
        for result in self.analysis.results() {
            let heading = self.key_heading(result.dimension);
            sections.push(Section::Subheading(format!("Performance by {heading}")));
            sections.push(Section::Table(self.table(result)));
        }
    }

    fn table(&self, result: &AggregateResult) -> Table {
        let headers = [
            self.key_heading(result.dimension),
            "Records",
            "Sales",
            "Expenses",
            "Profit",
            "Margin",
        ]
        .map(str::to_string)
        .to_vec();

        let rows = result
            .groups
            .iter()
            .map(|(key, m)| {
                vec![
                    key.clone(),
                    m.records.to_string(),
                    self.money(m.total_sales),
                    self.money(m.total_expenses),
                    self.money(m.profit()),
                    format_percent(m.margin()),
                ]
            })
            .collect();

        Table {
            headers,
            rows,
            numeric: vec![false, true, true, true, true, true],
        }
    }

    fn flagged_keys(&self) -> Vec<FlaggedKey> {
        self.analysis
            .results()
            .into_iter()
            .flat_map(|result| {
                result
                    .groups
                    .iter()
                    .filter(|(_, m)| self.is_underperforming(m))
                    .map(|(key, m)| FlaggedKey {
                        dimension: result.dimension.to_string(),
                        key: key.clone(),
                        margin: m.margin(),
                    })
            })
            .collect()
    }

    fn recommendations(&self, flagged: &[FlaggedKey]) -> Vec<String> {
        let threshold = format_percent(Some(self.options.margin_threshold));
        let mut bullets: Vec<String> = if flagged.is_empty() {
            vec![format!(
                "All groups meet the {threshold} margin threshold."
            )]
        } else {
            flagged
                .iter()
                .map(|f| match f.margin {
                    Some(margin) => format!(
                        "{} ({}) is underperforming: margin {} is below the {threshold} threshold.",
                        f.key,
                        f.dimension,
                        format_percent(Some(margin))
                    ),
                    None => format!(
                        "{} ({}) is underperforming: no sales were recorded.",
                        f.key, f.dimension
                    ),
                })
                .collect()
        };

        let products = &self.analysis.by_product;
        if let Some(best) = &products.best {
            bullets.push(format!(
                "Invest further in {}, the most profitable product.",
                best.key
            ));
        }
        if let Some(best) = &self.analysis.by_region.best {
            bullets.push(format!(
                "Expand sales efforts in {}, the most profitable region.",
                best.key
            ));
        }
        if let (Some(best), Some(worst)) = (&products.best, &products.worst)
            && best.key != worst.key
        {
            bullets.push(format!(
                "Investigate the performance of {}, the least profitable product.",
                worst.key
            ));
        }
        bullets
    }

    fn metrics(&self, flagged: Vec<FlaggedKey>) -> ReportMetrics {
        let overall = &self.analysis.overall;
        let margin = overall.margin();

        let dimensions = self
            .analysis
            .results()
            .into_iter()
            .map(|result| DimensionMetrics {
                dimension: result.dimension.to_string(),
                best: result.best.as_ref().map(|p| p.key.clone()),
                worst: result.worst.as_ref().map(|p| p.key.clone()),
                groups: result
                    .groups
                    .iter()
                    .map(|(key, m)| GroupRow {
                        key: key.clone(),
                        records: m.records,
                        total_sales: m.total_sales,
                        total_expenses: m.total_expenses,
                        profit: m.profit(),
                        margin: m.margin(),
                        average_sales: m.average_sales(),
                        average_profit: m.average_profit(),
                        underperforming: self.is_underperforming(m),
                    })
                    .collect(),
            })
            .collect();

        ReportMetrics {
            currency_symbol: self.options.currency_symbol.clone(),
            margin_threshold: self.options.margin_threshold,
            summary: SummaryMetrics {
                records: overall.records,
                skipped_rows: self.analysis.skipped_rows,
                first_date: self.analysis.first_date,
                last_date: self.analysis.last_date,
                total_sales: overall.total_sales,
                total_expenses: overall.total_expenses,
                profit: overall.profit(),
                margin,
                rating: MarginRating::from_margin(margin),
            },
            dimensions,
            underperforming: flagged,
        }
    }
}

#[cfg(test)]
#[path = "compose_tests.rs"]
mod tests;
