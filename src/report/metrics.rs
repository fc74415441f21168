//! Serializable metrics snapshot carried alongside the report prose.

use std::fmt;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;

/// Qualitative reading of the overall margin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MarginRating {
    Good,
    Satisfactory,
    NeedsImprovement,
}

impl MarginRating {
    /// Above 20% is good, above 10% satisfactory; an undefined margin needs improvement.
    #[must_use]
    pub fn from_margin(margin: Option<Decimal>) -> Self {
        match margin {
            Some(m) if m > Decimal::new(20, 2) => Self::Good,
            Some(m) if m > Decimal::new(10, 2) => Self::Satisfactory,
            _ => Self::NeedsImprovement,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Good => "good",
            Self::Satisfactory => "satisfactory",
            Self::NeedsImprovement => "needs improvement",
        }
    }
}

impl fmt::Display for MarginRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportMetrics {
    pub currency_symbol: String,
    pub margin_threshold: Decimal,
    pub summary: SummaryMetrics,
    pub dimensions: Vec<DimensionMetrics>,
    pub underperforming: Vec<FlaggedKey>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SummaryMetrics {
    pub records: usize,
    pub skipped_rows: usize,
    pub first_date: NaiveDate,
    pub last_date: NaiveDate,
    pub total_sales: Decimal,
    pub total_expenses: Decimal,
    pub profit: Decimal,
    pub margin: Option<Decimal>,
    pub rating: MarginRating,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DimensionMetrics {
    pub dimension: String,
    pub best: Option<String>,
    pub worst: Option<String>,
    pub groups: Vec<GroupRow>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GroupRow {
    pub key: String,
    pub records: usize,
    pub total_sales: Decimal,
    pub total_expenses: Decimal,
    pub profit: Decimal,
    pub margin: Option<Decimal>,
    pub average_sales: Option<Decimal>,
    pub average_profit: Option<Decimal>,
    pub underperforming: bool,
}

/// A grouping key whose margin is below the threshold or undefined.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FlaggedKey {
    pub dimension: String,
    pub key: String,
    pub margin: Option<Decimal>,
}

#[cfg(test)]
#[path = "metrics_tests.rs"]
mod tests;
