//! Paginated PDF output.
//!
//! Written directly as PDF 1.4 using the standard Helvetica fonts, so no
//! font files are embedded and the output is byte-for-byte reproducible.

mod canvas;
mod document;
mod layout;

use crate::error::Result;
use crate::report::{Report, Section};

use super::DocumentWriter;
use layout::Layout;

pub struct PdfWriter;

impl DocumentWriter for PdfWriter {
    fn render(&self, report: &Report) -> Result<Vec<u8>> {
        let mut layout = Layout::new();
        layout.title(&report.title, &report.subtitle);

        for section in &report.sections {
            match section {
                Section::Heading(text) => layout.heading(text),
                Section::Subheading(text) => layout.subheading(text),
                Section::Paragraph(text) => layout.paragraph(text),
                Section::Bullets(items) => layout.bullets(items),
                Section::Table(table) => layout.table(table),
                Section::Chart(chart) => layout.figure(&chart.figure, &chart.caption),
            }
        }

        let pages = layout.finish();
        tracing::debug!(pages = pages.len(), "pdf laid out");
        Ok(document::assemble(&report.title, &pages))
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
