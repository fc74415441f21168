use super::*;
use crate::chart::{GRID, TEXT};

#[test]
fn ascii_passes_through_and_delimiters_are_escaped() {
    assert_eq!(encode_text("Sales (Q1)"), "Sales \\(Q1\\)");
    assert_eq!(encode_text("a\\b"), "a\\\\b");
}

#[test]
fn win_ansi_characters_become_octal_escapes() {
    assert_eq!(encode_text("•"), "\\225");
    assert_eq!(encode_text("…"), "\\205");
    assert_eq!(encode_text("€5"), "\\2005");
    assert_eq!(encode_text("é"), "\\351");
}

#[test]
fn unsupported_characters_become_question_marks() {
    assert_eq!(encode_text("東京"), "??");
}

#[test]
fn text_operator_uses_font_resource() {
    let mut canvas = Canvas::new();
    canvas.text(10.0, 20.0, Font::Bold, 12.0, TEXT, "Hi");

    assert!(canvas.as_str().contains("BT /F2 12.00 Tf 10.00 20.00 Td (Hi) Tj ET"));
}

#[test]
fn dashed_line_resets_dash_pattern() {
    let mut canvas = Canvas::new();
    canvas.line((0.0, 0.0), (10.0, 0.0), GRID, 1.0, true);

    let ops = canvas.as_str();
    assert!(ops.contains("[4 4] 0 d"));
    assert!(ops.trim_end().ends_with("[] 0 d"));
}

#[test]
fn circle_is_four_bezier_curves() {
    let mut canvas = Canvas::new();
    canvas.fill_circle((50.0, 50.0), 5.0, TEXT);

    assert_eq!(canvas.as_str().matches(" c\n").count(), 4);
    assert!(canvas.as_str().ends_with("f\n"));
}

#[test]
fn degenerate_paths_are_skipped() {
    let mut canvas = Canvas::new();
    canvas.polyline(&[(0.0, 0.0)], TEXT, 1.0);
    canvas.fill_polygon(&[(0.0, 0.0), (1.0, 1.0)], TEXT);

    assert!(canvas.as_str().is_empty());
}

#[test]
fn colors_are_unit_scaled() {
    let mut canvas = Canvas::new();
    canvas.fill_rect(0.0, 0.0, 1.0, 1.0, Color::rgb(255, 0, 51));

    assert!(canvas.as_str().starts_with("1.000 0.000 0.200 rg\n"));
}

#[test]
fn counts_characters_replaced_by_question_marks() {
    assert_eq!(unencodable_chars("Café (€) – North"), 0);
    assert_eq!(unencodable_chars("产品甲"), 3);
    assert_eq!(unencodable_chars("Widget 产品"), 2);
}

#[test]
fn distinct_cjk_names_encode_identically() {
    // The lossy encoding is why a warning is logged when drawing such text.
    assert_eq!(encode_text("产品甲"), encode_text("商品乙"));
    assert_eq!(unencodable_chars("商品乙"), 3);
}
