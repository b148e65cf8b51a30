use std::fs;

use pslint::{Level, Linter, PslintError};
use tempfile::TempDir;

#[test]
fn test_lint_file() {
    let dir = TempDir::new().expect("create temp dir");
    let path = dir.path().join("public_suffix_list.dat");
    fs::write(&path, "// ===BEGIN ICANN DOMAINS===\nac\n Com.ac\n").expect("write list");

    let problems = Linter::new().lint_file(&path).expect("lint file");

    assert_eq!(problems.len(), 2);
    assert_eq!(problems[0].level, Level::Warn);
    assert_eq!(problems[1].level, Level::Error);
    assert!(problems.iter().all(|p| p.line == 3));
}

#[test]
fn test_clean_file_has_no_problems() {
    let dir = TempDir::new().expect("create temp dir");
    let path = dir.path().join("clean.dat");
    fs::write(&path, "ac\ncom.ac\n*.bd\n!www.ck\n").expect("write list");

    let problems = Linter::new().lint_file(&path).expect("lint file");
    assert!(problems.is_empty());
}

#[test]
fn test_missing_file_is_an_error() {
    let dir = TempDir::new().expect("create temp dir");
    let path = dir.path().join("missing.dat");

    let err = Linter::new().lint_file(&path).unwrap_err();
    match err {
        PslintError::FileRead { path: reported, .. } => assert_eq!(reported, path),
        other => panic!("Expected FileRead error, got {:?}", other),
    }
}

#[test]
fn test_non_utf8_file_is_an_error() {
    let dir = TempDir::new().expect("create temp dir");
    let path = dir.path().join("latin1.dat");
    fs::write(&path, b"ac\n\xe9cole.ac\n").expect("write list");

    let err = Linter::new().lint_file(&path).unwrap_err();
    assert!(matches!(err, PslintError::Decode(_)));
}
