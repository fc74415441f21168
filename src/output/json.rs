use serde::Serialize;

use crate::error::Result;
use crate::report::{Report, ReportMetrics};

use super::DocumentWriter;

/// Machine-readable metrics document; amounts are exact decimal strings.
pub struct JsonWriter;

#[derive(Serialize)]
struct JsonOutput<'a> {
    title: &'a str,
    subtitle: &'a str,
    #[serde(flatten)]
    metrics: &'a ReportMetrics,
    charts: Vec<ChartEntry<'a>>,
}

#[derive(Serialize)]
struct ChartEntry<'a> {
    dimension: String,
    kind: String,
    caption: &'a str,
}

impl DocumentWriter for JsonWriter {
    fn render(&self, report: &Report) -> Result<Vec<u8>> {
        let output = JsonOutput {
            title: &report.title,
            subtitle: &report.subtitle,
            metrics: &report.metrics,
            charts: report
                .charts()
                .map(|chart| ChartEntry {
                    dimension: chart.dimension.to_string(),
                    kind: chart.kind.to_string(),
                    caption: &chart.caption,
                })
                .collect(),
        };

        let mut bytes = serde_json::to_vec_pretty(&output)?;
        bytes.push(b'\n');
        Ok(bytes)
    }
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;
