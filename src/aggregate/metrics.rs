//! Per-group accumulators and derived metrics.

use rust_decimal::Decimal;

use crate::model::Record;

/// Accumulated totals for one grouping key.
///
/// Only sums and counts are stored; profit, margin and averages are derived
/// on demand so they can never drift from the totals.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GroupMetrics {
    pub records: usize,
    pub total_sales: Decimal,
    pub total_expenses: Decimal,
}

impl GroupMetrics {
    #[must_use]
    pub const fn new(records: usize, total_sales: Decimal, total_expenses: Decimal) -> Self {
        Self {
            records,
            total_sales,
            total_expenses,
        }
    }

    pub fn add(&mut self, record: &Record) {
        self.records += 1;
        self.total_sales += record.sales;
        self.total_expenses += record.expenses;
    }

    #[must_use]
    pub fn profit(&self) -> Decimal {
        self.total_sales - self.total_expenses
    }

    /// Profit as a ratio of sales; `None` only when there were no sales.
    ///
    /// A ratio beyond the `Decimal` range (tiny sales against huge expenses)
    /// saturates at `Decimal::MIN` or `Decimal::MAX`.
    #[must_use]
    pub fn margin(&self) -> Option<Decimal> {
        if self.total_sales <= Decimal::ZERO {
            return None;
        }
        let profit = self.profit();
        Some(profit.checked_div(self.total_sales).unwrap_or(
            if profit.is_sign_negative() {
                Decimal::MIN
            } else {
                Decimal::MAX
            },
        ))
    }

    #[must_use]
    pub fn average_sales(&self) -> Option<Decimal> {
        self.per_record(self.total_sales)
    }

    #[must_use]
    pub fn average_profit(&self) -> Option<Decimal> {
        self.per_record(self.profit())
    }

    fn per_record(&self, total: Decimal) -> Option<Decimal> {
        if self.records == 0 {
            return None;
        }
        total.checked_div(Decimal::from(self.records))
    }
}

#[cfg(test)]
#[path = "metrics_tests.rs"]
mod tests;
