use std::path::PathBuf;

use thiserror::Error;

/// Failures while reading the input file into a dataset.
#[derive(Error, Debug)]
pub enum IngestError {
    #[error("Input file not found: {}", path.display())]
    NotFound { path: PathBuf },

    #[error("Failed to read input file: {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("Missing required column(s): {}", missing.join(", "))]
    MissingColumns { missing: Vec<String> },

    #[error("No valid records in {} ({skipped} row(s) skipped)", path.display())]
    NoValidRecords { path: PathBuf, skipped: usize },
}

/// Failures while computing aggregate metrics.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum AnalysisError {
    #[error("Dataset is empty; nothing to aggregate")]
    EmptyDataset,
}

/// Failures while turning an aggregate result into a chart.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum RenderError {
    #[error("Chart '{chart}' has no data to plot")]
    EmptyInput { chart: String },

    #[error("Chart '{chart}' requests no series")]
    NoSeries { chart: String },

    #[error("Chart '{chart}' has a non-finite value for '{key}'")]
    NonFinite { chart: String, key: String },

    #[error("Pie chart '{chart}' cannot show negative values")]
    DegeneratePie { chart: String },
}

/// Failures while assembling the report.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum CompositionError {
    #[error("Missing chart artifact for the {dimension} dimension")]
    MissingChart { dimension: String },
}

#[derive(Error, Debug)]
pub enum ReportError {
    #[error(transparent)]
    Ingest(#[from] IngestError),

    #[error(transparent)]
    Analysis(#[from] AnalysisError),

    #[error(transparent)]
    Render(#[from] RenderError),

    #[error(transparent)]
    Composition(#[from] CompositionError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to read config file: {}", path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("Failed to write output: {}", path.display())]
    Output {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON serialization error: {0}")]
    JsonSerialize(#[from] serde_json::Error),
}

impl ReportError {
    /// Kind name printed at the command-line boundary.
    #[must_use]
    pub const fn error_type(&self) -> &'static str {
        match self {
            Self::Ingest(_) => "IngestError",
            Self::Analysis(_) => "AnalysisError",
            Self::Render(_) => "RenderError",
            Self::Composition(_) => "CompositionError",
            Self::Config(_) | Self::ConfigRead { .. } | Self::TomlParse(_) => "ConfigError",
            Self::Output { .. } | Self::JsonSerialize(_) => "OutputError",
        }
    }

    /// Whether the failure stems from configuration rather than the pipeline itself.
    #[must_use]
    pub const fn is_config_error(&self) -> bool {
        matches!(
            self,
            Self::Config(_) | Self::ConfigRead { .. } | Self::TomlParse(_)
        )
    }

    /// Underlying cause, when the error wraps one.
    #[must_use]
    pub fn detail(&self) -> Option<String> {
        match self {
            Self::Ingest(IngestError::Read { source, .. }) => Some(source.to_string()),
            Self::ConfigRead { source, .. } | Self::Output { source, .. } => {
                Some(source.to_string())
            }
            _ => None,
        }
    }

    /// Actionable hint for the user, if one applies.
    #[must_use]
    pub fn suggestion(&self) -> Option<&'static str> {
        match self {
            Self::Ingest(IngestError::NotFound { .. }) => {
                Some("Check that the --input path exists and is spelled correctly")
            }
            Self::Ingest(IngestError::MissingColumns { .. }) => Some(
                "The header row must contain: date, product, region, sales, expenses",
            ),
            Self::Ingest(IngestError::NoValidRecords { .. }) => Some(
                "Run with -vv to see why each row was skipped (date format, negative or non-numeric amounts)",
            ),
            Self::Config(_) | Self::TomlParse(_) => Some("Check the config file format"),
            Self::ConfigRead { source, .. } | Self::Output { source, .. } => {
                match source.kind() {
                    std::io::ErrorKind::NotFound => Some("Check that the file path exists"),
                    std::io::ErrorKind::PermissionDenied => Some("Check file permissions"),
                    _ => None,
                }
            }
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, ReportError>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
