//! Grouped sales metrics.
//!
//! Every dimension partitions the dataset: each record contributes to exactly
//! one key, so group totals always add up to the overall totals.

mod metrics;
mod period;

use std::fmt;

use chrono::NaiveDate;
use indexmap::IndexMap;
use rust_decimal::Decimal;

use crate::error::AnalysisError;
use crate::model::{Dataset, Record};

pub use metrics::GroupMetrics;
pub use period::Granularity;

/// Axis along which records are grouped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dimension {
    Product,
    Region,
    Period,
}

impl Dimension {
    pub const ALL: [Self; 3] = [Self::Product, Self::Region, Self::Period];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Product => "product",
            Self::Region => "region",
            Self::Period => "period",
        }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A grouping key together with its profit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Performer {
    pub key: String,
    pub profit: Decimal,
}

/// Metrics for one dimension, keyed in first-seen order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AggregateResult {
    pub dimension: Dimension,
    pub groups: IndexMap<String, GroupMetrics>,
    pub best: Option<Performer>,
    pub worst: Option<Performer>,
}

impl AggregateResult {
    /// Build a result from already accumulated groups, locating best and worst performers.
    #[must_use]
    pub fn from_groups(dimension: Dimension, groups: IndexMap<String, GroupMetrics>) -> Self {
        let (best, worst) = find_performers(&groups);
        Self {
            dimension,
            groups,
            best,
            worst,
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

/// Output of the aggregation stage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Analysis {
    pub overall: GroupMetrics,
    pub first_date: NaiveDate,
    pub last_date: NaiveDate,
    /// Rows rejected by the loader, carried through for the summary.
    pub skipped_rows: usize,
    pub granularity: Granularity,
    pub by_product: AggregateResult,
    pub by_region: AggregateResult,
    pub by_period: AggregateResult,
}

impl Analysis {
    #[must_use]
    pub const fn with_skipped_rows(mut self, skipped_rows: usize) -> Self {
        self.skipped_rows = skipped_rows;
        self
    }

    #[must_use]
    pub const fn result(&self, dimension: Dimension) -> &AggregateResult {
        match dimension {
            Dimension::Product => &self.by_product,
            Dimension::Region => &self.by_region,
            Dimension::Period => &self.by_period,
        }
    }

    /// All three results in report order.
    #[must_use]
    pub const fn results(&self) -> [&AggregateResult; 3] {
        [&self.by_product, &self.by_region, &self.by_period]
    }
}

/// Aggregate `dataset` by product, region and period.
///
/// # Errors
/// Returns [`AnalysisError::EmptyDataset`] if the dataset has no records.
pub fn analyze(dataset: &Dataset, granularity: Granularity) -> Result<Analysis, AnalysisError> {
    let Some((first_date, last_date)) = dataset.date_range() else {
        return Err(AnalysisError::EmptyDataset);
    };

    let overall = dataset
        .records()
        .iter()
        .fold(GroupMetrics::default(), |mut acc, record| {
            acc.add(record);
            acc
        });

    let by_product = AggregateResult::from_groups(
        Dimension::Product,
        group_by(dataset, |r| r.product.clone()),
    );
    let by_region = AggregateResult::from_groups(
        Dimension::Region,
        group_by(dataset, |r| r.region.clone()),
    );

    // Input order is arbitrary for dates; periods are presented chronologically
    let mut period_groups = group_by(dataset, |r| granularity.label(r.date));
    period_groups.sort_keys();
    let by_period = AggregateResult::from_groups(Dimension::Period, period_groups);

    tracing::info!(
        products = by_product.groups.len(),
        regions = by_region.groups.len(),
        periods = by_period.groups.len(),
        "aggregation complete"
    );

    Ok(Analysis {
        overall,
        first_date,
        last_date,
        skipped_rows: 0,
        granularity,
        by_product,
        by_region,
        by_period,
    })
}

fn group_by<F>(dataset: &Dataset, key_fn: F) -> IndexMap<String, GroupMetrics>
where
    F: Fn(&Record) -> String,
{
    let mut groups: IndexMap<String, GroupMetrics> = IndexMap::new();
    for record in dataset.records() {
        groups.entry(key_fn(record)).or_default().add(record);
    }
    groups
}

/// Best and worst keys by profit; on ties the earlier key wins.
fn find_performers(
    groups: &IndexMap<String, GroupMetrics>,
) -> (Option<Performer>, Option<Performer>) {
    let mut best: Option<(&String, Decimal)> = None;
    let mut worst: Option<(&String, Decimal)> = None;

    for (key, metrics) in groups {
        let profit = metrics.profit();
        if best.is_none_or(|(_, p)| profit > p) {
            best = Some((key, profit));
        }
        if worst.is_none_or(|(_, p)| profit < p) {
            worst = Some((key, profit));
        }
    }

    let to_performer = |(key, profit): (&String, Decimal)| Performer {
        key: key.clone(),
        profit,
    };
    (best.map(to_performer), worst.map(to_performer))
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
