use std::fmt::Write;

use crate::error::Result;
use crate::report::{Report, Section, Table};

use super::DocumentWriter;

/// Markdown document; charts are embedded as raw inline SVG blocks.
pub struct MarkdownWriter;

impl DocumentWriter for MarkdownWriter {
    fn render(&self, report: &Report) -> Result<Vec<u8>> {
        let mut output = String::new();

        writeln!(output, "# {}\n", report.title).ok();
        if !report.subtitle.is_empty() {
            writeln!(output, "_{}_\n", report.subtitle).ok();
        }

        let mut figures = 0;
        for section in &report.sections {
            match section {
                Section::Heading(text) => {
                    writeln!(output, "## {text}\n").ok();
                }
                Section::Subheading(text) => {
                    writeln!(output, "### {text}\n").ok();
                }
                Section::Paragraph(text) => {
                    writeln!(output, "{text}\n").ok();
                }
                Section::Bullets(items) => {
                    for item in items {
                        writeln!(output, "- {item}").ok();
                    }
                    writeln!(output).ok();
                }
                Section::Table(table) => write_table(&mut output, table),
                Section::Chart(chart) => {
                    figures += 1;
                    writeln!(output, "{}\n", chart.svg).ok();
                    writeln!(output, "*Figure {figures}: {}*\n", chart.caption).ok();
                }
            }
        }

        Ok(output.into_bytes())
    }
}

fn write_table(output: &mut String, table: &Table) {
    let headers: Vec<String> = table.headers.iter().map(|h| escape_cell(h)).collect();
    writeln!(output, "| {} |", headers.join(" | ")).ok();

    let separators: Vec<&str> = (0..table.column_count())
        .map(|column| {
            if table.is_numeric(column) {
                "---:"
            } else {
                "---"
            }
        })
        .collect();
    writeln!(output, "|{}|", separators.join("|")).ok();

    for row in &table.rows {
        let cells: Vec<String> = row.iter().map(|c| escape_cell(c)).collect();
        writeln!(output, "| {} |", cells.join(" | ")).ok();
    }
    writeln!(output).ok();
}

fn escape_cell(text: &str) -> String {
    text.replace('|', "\\|")
}

#[cfg(test)]
#[path = "markdown_tests.rs"]
mod tests;
