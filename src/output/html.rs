use std::fmt::Write;

use crate::error::Result;
use crate::format::html_escape;
use crate::report::{Report, Section, Table};

use super::DocumentWriter;
use super::html_template::{FOOTER, STYLE};

/// Standalone HTML page with charts embedded as inline SVG.
pub struct HtmlWriter;

impl DocumentWriter for HtmlWriter {
    fn render(&self, report: &Report) -> Result<Vec<u8>> {
        let mut output = String::new();
        let title = html_escape(&report.title);

        output.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
        output.push_str("    <meta charset=\"UTF-8\">\n");
        output.push_str(
            "    <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n",
        );
        writeln!(output, "    <title>{title}</title>").ok();
        writeln!(output, "    <style>\n{STYLE}    </style>").ok();
        output.push_str("</head>\n<body>\n    <div class=\"container\">\n");

        writeln!(output, "        <h1>{title}</h1>").ok();
        if !report.subtitle.is_empty() {
            writeln!(
                output,
                "        <p class=\"subtitle\">{}</p>",
                html_escape(&report.subtitle)
            )
            .ok();
        }

        let mut in_charts = false;
        for section in &report.sections {
            let is_chart = matches!(section, Section::Chart(_));
            if is_chart && !in_charts {
                output.push_str("        <div class=\"charts-section\">\n");
            } else if !is_chart && in_charts {
                output.push_str("        </div>\n");
            }
            in_charts = is_chart;
            write_section(&mut output, section);
        }
        if in_charts {
            output.push_str("        </div>\n");
        }

        output.push_str(FOOTER);
        Ok(output.into_bytes())
    }
}

fn write_section(output: &mut String, section: &Section) {
    match section {
        Section::Heading(text) => {
            writeln!(output, "        <h2>{}</h2>", html_escape(text)).ok();
        }
        Section::Subheading(text) => {
            writeln!(output, "        <h3>{}</h3>", html_escape(text)).ok();
        }
        Section::Paragraph(text) => {
            writeln!(output, "        <p>{}</p>", html_escape(text)).ok();
        }
        Section::Bullets(items) => {
            output.push_str("        <ul>\n");
            for item in items {
                writeln!(output, "            <li>{}</li>", html_escape(item)).ok();
            }
            output.push_str("        </ul>\n");
        }
        Section::Table(table) => write_table(output, table),
        Section::Chart(chart) => {
            output.push_str("            <figure class=\"chart-container\">\n");
            for line in chart.svg.lines() {
                writeln!(output, "                {line}").ok();
            }
            writeln!(
                output,
                "                <figcaption>{}</figcaption>",
                html_escape(&chart.caption)
            )
            .ok();
            output.push_str("            </figure>\n");
        }
    }
}

fn write_table(output: &mut String, table: &Table) {
    output.push_str("        <div class=\"table-container\">\n");
    output.push_str("            <table>\n                <thead>\n                    <tr>\n");
    for (column, header) in table.headers.iter().enumerate() {
        let class = numeric_class(table, column);
        writeln!(
            output,
            "                        <th{class}>{}</th>",
            html_escape(header)
        )
        .ok();
    }
    output.push_str("                    </tr>\n                </thead>\n                <tbody>\n");
    for row in &table.rows {
        output.push_str("                    <tr>\n");
        for (column, cell) in row.iter().enumerate() {
            let class = numeric_class(table, column);
            writeln!(
                output,
                "                        <td{class}>{}</td>",
                html_escape(cell)
            )
            .ok();
        }
        output.push_str("                    </tr>\n");
    }
    output.push_str("                </tbody>\n            </table>\n        </div>\n");
}

fn numeric_class(table: &Table, column: usize) -> &'static str {
    if table.is_numeric(column) {
        " class=\"number\""
    } else {
        ""
    }
}

#[cfg(test)]
#[path = "html_tests.rs"]
mod tests;
