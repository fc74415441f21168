//! Shared fixtures for unit tests across modules.

use std::path::Path;

use crate::aggregate::{Analysis, Granularity, analyze};
use crate::chart::{ChartArtifact, ChartKind, ChartSpec, Series, render};
use crate::ingest::{IngestOptions, load_from_reader};
use crate::report::{ComposeOptions, Report, compose};

/// Three months of sales for three products in two regions.
pub const SAMPLE_CSV: &str = "\
Date,Product,Region,Sales,Expenses
2023-01-01,Product A,North,5000,3000
2023-01-01,Product B,North,4500,2800
2023-01-01,Product C,North,6000,3500
2023-01-01,Product A,South,5500,3200
2023-01-01,Product B,South,4800,2900
2023-01-01,Product C,South,6200,3800
2023-02-01,Product A,North,5200,3100
2023-02-01,Product B,North,4700,2850
2023-02-01,Product C,North,6100,3600
2023-02-01,Product A,South,5600,3300
2023-02-01,Product B,South,4900,2950
2023-02-01,Product C,South,6300,3900
2023-03-01,Product A,North,5300,3150
2023-03-01,Product B,North,4800,2900
2023-03-01,Product C,North,6200,3650
2023-03-01,Product A,South,5700,3350
2023-03-01,Product B,South,5000,3000
2023-03-01,Product C,South,6400,3950
";

pub fn sample_analysis() -> Analysis {
    let loaded = load_from_reader(
        SAMPLE_CSV.as_bytes(),
        Path::new("sample.csv"),
        &IngestOptions::default(),
    )
    .unwrap();
    analyze(&loaded.dataset, Granularity::Month).unwrap()
}

pub fn sample_charts(analysis: &Analysis) -> Vec<ChartArtifact> {
    vec![
        render(
            &analysis.by_product,
            &ChartSpec::new(ChartKind::Bar, "Sales and Profit by Product")
                .with_series(vec![Series::Sales, Series::Profit]),
        )
        .unwrap(),
        render(
            &analysis.by_region,
            &ChartSpec::new(ChartKind::Pie, "Sales by Region"),
        )
        .unwrap(),
        render(
            &analysis.by_period,
            &ChartSpec::new(ChartKind::Line, "Monthly Sales Trend")
                .with_series(vec![Series::Sales, Series::Profit]),
        )
        .unwrap(),
    ]
}

pub fn sample_report() -> Report {
    let analysis = sample_analysis();
    let charts = sample_charts(&analysis);
    compose(&analysis, &charts, &ComposeOptions::default()).unwrap()
}
