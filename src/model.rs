//! Core record types shared by every pipeline stage.

use chrono::NaiveDate;
use rust_decimal::Decimal;

/// A single sales transaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub date: NaiveDate,
    pub product: String,
    pub region: String,
    pub sales: Decimal,
    pub expenses: Decimal,
}

impl Record {
    #[must_use]
    pub fn profit(&self) -> Decimal {
        self.sales - self.expenses
    }
}

/// Ordered, validated collection of records in input order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dataset {
    records: Vec<Record>,
}

impl Dataset {
    #[must_use]
    pub const fn new(records: Vec<Record>) -> Self {
        Self { records }
    }

    #[must_use]
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Earliest and latest transaction dates.
    #[must_use]
    pub fn date_range(&self) -> Option<(NaiveDate, NaiveDate)> {
        let first = self.records.iter().map(|r| r.date).min()?;
        let last = self.records.iter().map(|r| r.date).max()?;
        Some((first, last))
    }
}

/// A row rejected by the loader.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedRow {
    /// 1-based line number in the input file (header is line 1).
    pub line: usize,
    pub reason: String,
}

/// Loader output: the dataset plus an account of rejected rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedDataset {
    pub dataset: Dataset,
    pub skipped: Vec<SkippedRow>,
    pub rows_read: usize,
}

impl LoadedDataset {
    #[must_use]
    pub fn skipped_count(&self) -> usize {
        self.skipped.len()
    }
}

#[cfg(test)]
#[path = "model_tests.rs"]
mod tests;
