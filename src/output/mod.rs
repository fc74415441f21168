//! Document writers for a composed [`Report`].

mod error_output;
mod html;
mod html_template;
mod json;
mod markdown;
mod pdf;
mod write;

use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::report::Report;

pub use error_output::ErrorOutput;
pub use html::HtmlWriter;
pub use json::JsonWriter;
pub use markdown::MarkdownWriter;
pub use pdf::PdfWriter;
pub use write::write_atomic;

/// Serializes a report into the bytes of one output document.
pub trait DocumentWriter {
    /// Render the complete document.
    ///
    /// # Errors
    /// Returns an error if serialization fails.
    fn render(&self, report: &Report) -> Result<Vec<u8>>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentFormat {
    #[default]
    Pdf,
    Html,
    Markdown,
    Json,
}

impl DocumentFormat {
    /// Format implied by the file extension of `path`, if recognised.
    #[must_use]
    pub fn from_extension(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_lowercase();
        match ext.as_str() {
            "pdf" => Some(Self::Pdf),
            "html" | "htm" => Some(Self::Html),
            "md" | "markdown" => Some(Self::Markdown),
            "json" => Some(Self::Json),
            _ => None,
        }
    }

    /// An explicit choice wins; otherwise infer from `path`, falling back to PDF.
    #[must_use]
    pub fn resolve(explicit: Option<Self>, path: &Path) -> Self {
        explicit
            .or_else(|| Self::from_extension(path))
            .unwrap_or_default()
    }

    #[must_use]
    pub fn writer(self) -> Box<dyn DocumentWriter> {
        match self {
            Self::Pdf => Box::new(PdfWriter),
            Self::Html => Box::new(HtmlWriter),
            Self::Markdown => Box::new(MarkdownWriter),
            Self::Json => Box::new(JsonWriter),
        }
    }
}

impl fmt::Display for DocumentFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pdf => write!(f, "pdf"),
            Self::Html => write!(f, "html"),
            Self::Markdown => write!(f, "markdown"),
            Self::Json => write!(f, "json"),
        }
    }
}

impl std::str::FromStr for DocumentFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pdf" => Ok(Self::Pdf),
            "html" | "htm" => Ok(Self::Html),
            "markdown" | "md" => Ok(Self::Markdown),
            "json" => Ok(Self::Json),
            _ => Err(format!("Unknown output format: {s}")),
        }
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
