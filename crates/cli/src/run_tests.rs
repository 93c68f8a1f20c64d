// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
use super::*;
use clap::Parser;
use std::path::PathBuf;

struct Dumps {
    _dir: tempfile::TempDir,
    actual: PathBuf,
    expected: PathBuf,
}

fn dumps(actual: &str, expected: &str) -> Dumps {
    let dir = tempfile::tempdir().unwrap();
    let actual_path = dir.path().join("result.txt");
    let expected_path = dir.path().join("answer.txt");
    std::fs::write(&actual_path, actual).unwrap();
    std::fs::write(&expected_path, expected).unwrap();
    Dumps {
        _dir: dir,
        actual: actual_path,
        expected: expected_path,
    }
}

fn run_with(d: &Dumps, extra: &[&str]) -> (Result<i32, RunError>, String, String) {
    let mut argv = vec![
        "resultcheck".to_string(),
        "--actual".to_string(),
        d.actual.display().to_string(),
        "--expected".to_string(),
        d.expected.display().to_string(),
    ];
    argv.extend(extra.iter().map(|s| s.to_string()));
    let cli = Cli::try_parse_from(argv).unwrap();

    let mut out = Vec::new();
    let mut err = Vec::new();
    let result = run(&cli, &mut out, &mut err);
    (
        result,
        String::from_utf8(out).unwrap(),
        String::from_utf8(err).unwrap(),
    )
}

#[test]
fn test_matching_dumps() {
    let d = dumps(
        "Name\n---\nBob\nAlice\n---\n",
        "Name\n---\nAlice\nBob\n---\n",
    );
    let (result, out, _) = run_with(&d, &[]);
    assert_eq!(result.unwrap(), exit_codes::SUCCESS);
    assert_eq!(out, "Results Matched Successfully\n");
}

#[test]
fn test_whitespace_is_trimmed() {
    let d = dumps("  sid \n-\n 1\n-\n", "sid\n-\n1  \n-\n");
    let (result, _, _) = run_with(&d, &[]);
    assert_eq!(result.unwrap(), exit_codes::SUCCESS);
}

#[test]
fn test_row_mismatch() {
    let d = dumps("Name\n---\nBob\n---\n", "Name\n---\nAlice\n---\n");
    let (result, out, err) = run_with(&d, &[]);
    assert_eq!(result.unwrap(), exit_codes::MISMATCH);
    assert_eq!(out, "Error: [query 1] values not the same\n");
    assert!(err.contains("missing:    Alice"));
}

#[test]
fn test_trailing_layout_flag() {
    let d = dumps(
        "sid sname\n2 aab\n1 aaa\n-\ncountofsid\n200\n-\n",
        "SId SName\n1 aaa\n2 aab\n-\ncount(sid)\n200\n-\n",
    );
    let (result, out, _) = run_with(&d, &["--layout", "trailing"]);
    assert_eq!(result.unwrap(), exit_codes::SUCCESS, "{out}");
}

#[test]
fn test_json_output() {
    let d = dumps("a\n-\n1\n-\n", "a\n-\n1\n-\nb\n");
    let (result, out, _) = run_with(&d, &["--output-format", "json"]);
    assert_eq!(result.unwrap(), exit_codes::MISMATCH);
    let json: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(json["kind"], "length_mismatch");
    assert_eq!(json["message"], "different length");
}

#[test]
fn test_missing_dump_is_read_error() {
    let d = dumps("a\n", "a\n");
    std::fs::remove_file(&d.actual).unwrap();
    let (result, out, _) = run_with(&d, &[]);
    let err = result.unwrap_err();
    assert!(matches!(err, RunError::Read { .. }));
    assert!(err.to_string().contains("result.txt"));
    assert!(out.is_empty());
}

#[test]
fn test_bad_config_is_config_error() {
    let d = dumps("a\n", "a\n");
    let config = d.actual.with_file_name("resultcheck.toml");
    std::fs::write(&config, "unknown_key = 1\n").unwrap();
    let (result, _, _) = run_with(&d, &["--config", config.to_str().unwrap()]);
    assert!(matches!(result.unwrap_err(), RunError::Config(_)));
}

#[test]
fn test_empty_dumps_warn_on_err_writer() {
    let d = dumps("", "");
    let (result, out, err) = run_with(&d, &[]);
    assert_eq!(result.unwrap(), exit_codes::SUCCESS);
    assert_eq!(out, "Results Matched Successfully\n");
    assert!(err.contains("Warning: both result dumps are empty"), "{err}");
}
