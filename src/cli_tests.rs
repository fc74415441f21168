use std::path::PathBuf;

use rust_decimal_macros::dec;

use super::*;

#[test]
fn cli_requires_input() {
    let result = Cli::try_parse_from(["sales-report"]);
    assert!(result.is_err());
}

#[test]
fn cli_defaults() {
    let cli = Cli::parse_from(["sales-report", "--input", "sales.csv"]);

    assert_eq!(cli.input, PathBuf::from("sales.csv"));
    assert_eq!(cli.output, PathBuf::from("report.pdf"));
    assert_eq!(cli.margin_threshold, None);
    assert_eq!(cli.config, None);
    assert_eq!(cli.format, None);
    assert_eq!(cli.period, None);
    assert_eq!(cli.verbose, 0);
    assert!(!cli.quiet);
}

#[test]
fn cli_short_flags() {
    let cli = Cli::parse_from(["sales-report", "-i", "in.csv", "-o", "out.html", "-q"]);

    assert_eq!(cli.input, PathBuf::from("in.csv"));
    assert_eq!(cli.output, PathBuf::from("out.html"));
    assert!(cli.quiet);
}

#[test]
fn cli_margin_threshold_is_decimal() {
    let cli = Cli::parse_from(["sales-report", "-i", "in.csv", "--margin-threshold", "0.15"]);
    assert_eq!(cli.margin_threshold, Some(dec!(0.15)));
}

#[test]
fn cli_rejects_non_numeric_threshold() {
    let result = Cli::try_parse_from(["sales-report", "-i", "in.csv", "--margin-threshold", "high"]);
    assert!(result.is_err());
}

#[test]
fn cli_format_and_period() {
    let cli = Cli::parse_from([
        "sales-report",
        "-i",
        "in.csv",
        "--format",
        "md",
        "--period",
        "quarter",
    ]);

    assert_eq!(cli.format, Some(DocumentFormat::Markdown));
    assert_eq!(cli.period, Some(Granularity::Quarter));
}

#[test]
fn cli_rejects_unknown_format() {
    let result = Cli::try_parse_from(["sales-report", "-i", "in.csv", "--format", "docx"]);
    assert!(result.is_err());
}

#[test]
fn cli_verbose_counts() {
    let cli = Cli::parse_from(["sales-report", "-i", "in.csv", "-vv"]);
    assert_eq!(cli.verbose, 2);
}

#[test]
fn cli_rejects_multi_character_delimiter() {
    let result = Cli::try_parse_from(["sales-report", "-i", "in.csv", "--delimiter", ";;"]);
    assert!(result.is_err());
}

#[test]
fn cli_overrides_collect_flag_values() {
    let cli = Cli::parse_from([
        "sales-report",
        "-i",
        "in.csv",
        "--title",
        "Q3",
        "--delimiter",
        ";",
        "--margin-threshold",
        "0.2",
        "--period",
        "year",
    ]);
    let overrides = cli.overrides();

    assert_eq!(overrides.title.as_deref(), Some("Q3"));
    assert_eq!(overrides.delimiter, Some(';'));
    assert_eq!(overrides.margin_threshold, Some(dec!(0.2)));
    assert_eq!(overrides.period, Some(Granularity::Year));
}

#[test]
fn cli_overrides_empty_without_flags() {
    let cli = Cli::parse_from(["sales-report", "-i", "in.csv"]);
    assert_eq!(cli.overrides(), ConfigOverrides::default());
}
