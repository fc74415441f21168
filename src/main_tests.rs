use std::fs;
use std::path::{Path, PathBuf};

use clap::Parser;
use rust_decimal_macros::dec;
use sales_report::aggregate::Granularity;
use sales_report::cli::Cli;
use sales_report::config::ReportConfig;
use sales_report::{EXIT_CONFIG_ERROR, EXIT_FAILURE, EXIT_SUCCESS, ReportError};
use tempfile::TempDir;

use crate::{build_options, load_config};

#[test]
fn exit_codes_documented() {
    assert_eq!(EXIT_SUCCESS, 0);
    assert_eq!(EXIT_FAILURE, 1);
    assert_eq!(EXIT_CONFIG_ERROR, 2);
}

#[test]
fn load_config_without_path_returns_default() {
    let config = load_config(None).unwrap();
    assert_eq!(config, ReportConfig::default());
}

#[test]
fn load_config_with_nonexistent_path_returns_error() {
    let err = load_config(Some(Path::new("/nonexistent/report.toml"))).unwrap_err();
    assert!(matches!(err, ReportError::ConfigRead { .. }));
}

#[test]
fn build_options_layers_flags_over_file() {
    let dir = TempDir::new().unwrap();
    let config_path = dir.path().join("report.toml");
    fs::write(
        &config_path,
        "title = \"File title\"\nperiod = \"quarter\"\nmargin_threshold = \"0.1\"\n",
    )
    .unwrap();

    let cli = Cli::parse_from([
        "sales-report",
        "-i",
        "sales.csv",
        "--config",
        config_path.to_str().unwrap(),
        "--margin-threshold",
        "0.3",
    ]);
    let options = build_options(&cli).unwrap();

    assert_eq!(options.input, PathBuf::from("sales.csv"));
    assert_eq!(options.output, PathBuf::from("report.pdf"));
    assert_eq!(options.format, None);
    assert_eq!(options.config.title, "File title");
    assert_eq!(options.config.period, Granularity::Quarter);
    assert_eq!(options.config.margin_threshold, dec!(0.3));
}

#[test]
fn build_options_validates_flag_values() {
    let cli = Cli::parse_from(["sales-report", "-i", "sales.csv", "--delimiter", "é"]);

    let err = build_options(&cli).unwrap_err();

    assert!(matches!(err, ReportError::Config(_)));
    assert!(err.is_config_error());
}
