use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::aggregate::Granularity;
use crate::chart::{DEFAULT_HEIGHT, DEFAULT_WIDTH};
use crate::error::{ReportError, Result};
use crate::ingest::{DEFAULT_DATE_FORMAT, IngestOptions};
use crate::report::{ComposeOptions, DEFAULT_TITLE};

/// Report configuration, read from an optional TOML file.
///
/// Every key is optional; missing keys take the documented defaults.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ReportConfig {
    #[serde(default = "default_title")]
    pub title: String,

    #[serde(default = "default_currency_symbol")]
    pub currency_symbol: String,

    /// Margin ratio below which a grouping key is flagged (e.g. `0.15`).
    #[serde(default)]
    pub margin_threshold: Decimal,

    #[serde(default)]
    pub period: Granularity,

    /// `chrono` format string for the `date` column.
    #[serde(default = "default_date_format")]
    pub date_format: String,

    #[serde(default = "default_delimiter")]
    pub delimiter: char,

    #[serde(default)]
    pub charts: ChartConfig,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            currency_symbol: default_currency_symbol(),
            margin_threshold: Decimal::ZERO,
            period: Granularity::default(),
            date_format: default_date_format(),
            delimiter: default_delimiter(),
            charts: ChartConfig::default(),
        }
    }
}

/// Pixel size of every chart.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ChartConfig {
    #[serde(default = "default_chart_width")]
    pub width: f64,

    #[serde(default = "default_chart_height")]
    pub height: f64,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
        }
    }
}

/// Values given on the command line; each one replaces the file value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigOverrides {
    pub title: Option<String>,
    pub margin_threshold: Option<Decimal>,
    pub period: Option<Granularity>,
    pub delimiter: Option<char>,
}

impl ReportConfig {
    /// Apply command-line overrides on top of this configuration.
    #[must_use]
    pub fn with_overrides(mut self, overrides: ConfigOverrides) -> Self {
        if let Some(title) = overrides.title {
            self.title = title;
        }
        if let Some(threshold) = overrides.margin_threshold {
            self.margin_threshold = threshold;
        }
        if let Some(period) = overrides.period {
            self.period = period;
        }
        if let Some(delimiter) = overrides.delimiter {
            self.delimiter = delimiter;
        }
        self
    }

    /// Check values that parse but cannot be used.
    ///
    /// # Errors
    /// Returns [`ReportError::Config`] for a non-ASCII delimiter, an empty date
    /// format or a chart size that is not a positive number.
    pub fn validate(&self) -> Result<()> {
        if !self.delimiter.is_ascii() {
            return Err(ReportError::Config(format!(
                "delimiter must be a single ASCII character, got {:?}",
                self.delimiter
            )));
        }

        if self.date_format.trim().is_empty() {
            return Err(ReportError::Config(
                "date_format must not be empty".to_string(),
            ));
        }

        for (name, value) in [
            ("charts.width", self.charts.width),
            ("charts.height", self.charts.height),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ReportError::Config(format!(
                    "{name} must be a positive number, got {value}"
                )));
            }
        }
        Ok(())
    }

    /// Loader options derived from this configuration.
    #[must_use]
    pub fn ingest_options(&self) -> IngestOptions {
        IngestOptions {
            // Non-ASCII delimiters are rejected by `validate`.
            delimiter: u8::try_from(self.delimiter).unwrap_or(b','),
            date_format: self.date_format.clone(),
        }
    }

    /// Composer options derived from this configuration.
    #[must_use]
    pub fn compose_options(&self) -> ComposeOptions {
        ComposeOptions {
            title: self.title.clone(),
            currency_symbol: self.currency_symbol.clone(),
            margin_threshold: self.margin_threshold,
        }
    }
}

fn default_title() -> String {
    DEFAULT_TITLE.to_string()
}

fn default_currency_symbol() -> String {
    "$".to_string()
}

fn default_date_format() -> String {
    DEFAULT_DATE_FORMAT.to_string()
}

const fn default_delimiter() -> char {
    ','
}

const fn default_chart_width() -> f64 {
    DEFAULT_WIDTH
}

const fn default_chart_height() -> f64 {
    DEFAULT_HEIGHT
}

#[cfg(test)]
#[path = "model_tests.rs"]
mod tests;
