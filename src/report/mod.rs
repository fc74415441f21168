//! Report document model and composition.
//!
//! A [`Report`] is an ordered list of [`Section`]s built once by [`compose`]
//! and then handed, unchanged, to every document writer.

mod compose;
mod metrics;

use crate::chart::ChartArtifact;

pub use compose::{ComposeOptions, DEFAULT_TITLE, compose};
pub use metrics::{DimensionMetrics, FlaggedKey, GroupRow, MarginRating, ReportMetrics, SummaryMetrics};

/// A finished report.
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub title: String,
    pub subtitle: String,
    pub sections: Vec<Section>,
    /// Structured figures behind the prose, for machine-readable output.
    pub metrics: ReportMetrics,
}

impl Report {
    /// Charts in document order.
    pub fn charts(&self) -> impl Iterator<Item = &ChartArtifact> {
        self.sections.iter().filter_map(|section| match section {
            Section::Chart(chart) => Some(chart),
            _ => None,
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Section {
    /// Top-level section heading.
    Heading(String),
    /// Heading nested under the previous [`Section::Heading`].
    Subheading(String),
    Paragraph(String),
    Bullets(Vec<String>),
    Table(Table),
    Chart(ChartArtifact),
}

/// A table of preformatted cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
    /// Per column: right-align as a number.
    pub numeric: Vec<bool>,
}

impl Table {
    #[must_use]
    pub fn column_count(&self) -> usize {
        self.headers.len()
    }

    #[must_use]
    pub fn is_numeric(&self, column: usize) -> bool {
        self.numeric.get(column).copied().unwrap_or(false)
    }
}
