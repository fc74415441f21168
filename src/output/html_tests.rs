use super::*;
use crate::chart::{ChartKind, ChartSpec};
use crate::test_fixtures::sample_report;

fn render_html(report: &Report) -> String {
    String::from_utf8(HtmlWriter.render(report).unwrap()).unwrap()
}

#[test]
fn document_is_complete() {
    let html = render_html(&sample_report());

    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains("<title>Sales Performance Analysis Report</title>"));
    assert!(html.contains("<p class=\"subtitle\">Reporting period: 2023-01-01 to 2023-03-01</p>"));
    assert!(html.trim_end().ends_with("</html>"));
}

#[test]
fn sections_render_in_order() {
    let html = render_html(&sample_report());

    let summary = html.find("<h2>Executive Summary</h2>").unwrap();
    let breakdown = html.find("<h2>Detailed Breakdown</h2>").unwrap();
    let charts = html.find("<h2>Charts</h2>").unwrap();
    let recommendations = html.find("<h2>Recommendations</h2>").unwrap();
    assert!(summary < breakdown && breakdown < charts && charts < recommendations);
}

#[test]
fn charts_are_inline_svg_inside_one_section() {
    let html = render_html(&sample_report());

    assert_eq!(html.matches("<svg ").count(), 3);
    assert_eq!(html.matches("<div class=\"charts-section\">").count(), 1);
    assert!(html.contains("<figcaption>Sales by Region</figcaption>"));
}

#[test]
fn numeric_cells_are_right_aligned() {
    let html = render_html(&sample_report());

    assert!(html.contains("<th class=\"number\">Sales</th>"));
    assert!(html.contains("<td class=\"number\">$32,300.00</td>"));
    assert!(html.contains("<td>Product A</td>"));
}

#[test]
fn text_is_escaped() {
    let mut report = sample_report();
    report.title = "Sales <Q1> & Q2".to_string();
    report.sections.push(Section::Paragraph("R&D <script>".to_string()));

    let html = render_html(&report);

    assert!(html.contains("<h1>Sales &lt;Q1&gt; &amp; Q2</h1>"));
    assert!(html.contains("<p>R&amp;D &lt;script&gt;</p>"));
    assert!(!html.contains("<script>"));
}

#[test]
fn chart_titles_are_escaped_in_svg() {
    let analysis = crate::test_fixtures::sample_analysis();
    let chart = crate::chart::render(
        &analysis.by_region,
        &ChartSpec::new(ChartKind::Pie, "North & South"),
    )
    .unwrap();

    assert!(chart.svg.contains("<title>North &amp; South</title>"));
}

#[test]
fn every_stylesheet_variable_is_used() {
    let declared: Vec<&str> = STYLE
        .lines()
        .filter_map(|line| line.trim().strip_prefix("--"))
        .filter_map(|decl| decl.split_once(':').map(|(name, _)| name))
        .collect();

    assert!(!declared.is_empty());
    for name in declared {
        assert!(
            STYLE.contains(&format!("var(--{name})")),
            "--{name} is declared but never used"
        );
    }
}
