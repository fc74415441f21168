use std::path::PathBuf;

use super::*;
use crate::error::IngestError;

fn make_output(use_colors: bool) -> ErrorOutput {
    ErrorOutput::with_colors(use_colors)
}

#[test]
fn error_without_colors_basic() {
    let out = make_output(false);
    let mut buf = Vec::new();
    out.write_error(&mut buf, "AnalysisError", "Dataset is empty", None, None);
    let result = String::from_utf8(buf).unwrap();
    assert_eq!(result, "✖ AnalysisError: Dataset is empty\n");
}

#[test]
fn error_without_colors_full() {
    let out = make_output(false);
    let mut buf = Vec::new();
    out.write_error(
        &mut buf,
        "OutputError",
        "Failed to write output: out/report.pdf",
        Some("Permission denied (os error 13)"),
        Some("Check file permissions"),
    );
    let result = String::from_utf8(buf).unwrap();
    assert_eq!(
        result,
        "✖ OutputError: Failed to write output: out/report.pdf\n  × Permission denied (os error 13)\n  help: Check file permissions\n"
    );
}

#[test]
fn error_with_colors_has_ansi_codes() {
    let out = make_output(true);
    let mut buf = Vec::new();
    out.write_error(&mut buf, "RenderError", "bad chart", Some("d"), Some("s"));
    let result = String::from_utf8(buf).unwrap();
    assert!(result.contains("\x1b[31m"));
    assert!(result.contains("\x1b[2m"));
    assert!(result.contains("\x1b[36m"));
    assert!(result.contains("\x1b[0m"));
}

#[test]
fn report_error_prints_kind_message_and_suggestion() {
    let out = make_output(false);
    let mut buf = Vec::new();
    let error = ReportError::from(IngestError::NotFound {
        path: PathBuf::from("missing.csv"),
    });

    out.write_report_error(&mut buf, &error);

    let result = String::from_utf8(buf).unwrap();
    assert!(result.starts_with("✖ IngestError: Input file not found: missing.csv\n"));
    assert!(result.contains("help: Check that the --input path exists"));
}
