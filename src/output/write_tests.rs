use std::fs;

use tempfile::TempDir;

use super::*;

#[test]
fn creates_file() {
    let temp_dir = TempDir::new().unwrap();
    let file_path = temp_dir.path().join("report.pdf");

    write_atomic(&file_path, b"test content").unwrap();

    assert_eq!(fs::read(&file_path).unwrap(), b"test content");
}

#[test]
fn creates_parent_directories() {
    let temp_dir = TempDir::new().unwrap();
    let file_path = temp_dir.path().join("a").join("b").join("report.md");

    write_atomic(&file_path, b"nested content").unwrap();

    assert_eq!(fs::read(&file_path).unwrap(), b"nested content");
}

#[test]
fn overwrites_existing_file() {
    let temp_dir = TempDir::new().unwrap();
    let file_path = temp_dir.path().join("report.json");
    fs::write(&file_path, "old content").unwrap();

    write_atomic(&file_path, b"new content").unwrap();

    assert_eq!(fs::read(&file_path).unwrap(), b"new content");
}

#[test]
fn leaves_no_temp_files_behind() {
    let temp_dir = TempDir::new().unwrap();
    let file_path = temp_dir.path().join("report.html");

    write_atomic(&file_path, b"content").unwrap();

    let entries: Vec<_> = fs::read_dir(temp_dir.path())
        .unwrap()
        .filter_map(std::result::Result::ok)
        .collect();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].file_name(), "report.html");
}

#[test]
fn failure_keeps_original_and_cleans_up() {
    let temp_dir = TempDir::new().unwrap();
    // A directory cannot be replaced by a file rename.
    let target = temp_dir.path().join("occupied");
    fs::create_dir(&target).unwrap();
    fs::write(target.join("keep.txt"), "keep").unwrap();

    let err = write_atomic(&target, b"data").unwrap_err();

    assert!(matches!(err, ReportError::Output { .. }));
    assert_eq!(fs::read_to_string(target.join("keep.txt")).unwrap(), "keep");
    let entries: Vec<_> = fs::read_dir(temp_dir.path())
        .unwrap()
        .filter_map(std::result::Result::ok)
        .collect();
    assert_eq!(entries.len(), 1);
}
