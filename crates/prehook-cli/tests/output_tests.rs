// Rust guideline compliant 2026-02-06

//! Unit tests for output formatting module.

use chrono::Utc;
use prehook_cli::{create_formatter, HookRow};
use prehook_core::{parse_manifest, OutputFormat, Stage};
use prehook_runner::{HookResult, Outcome, RunReport};
use std::path::Path;

fn create_test_report() -> RunReport {
    let mut failed = HookResult::new("check-json", "Check JSON", Outcome::Failed);
    failed.exit_code = Some(1);
    failed.output = "data/bad.json: Expecting value".to_string();
    failed.files = vec!["data/bad.json".to_string()];

    RunReport {
        stage: Stage::PreCommit,
        started_at: Utc::now(),
        file_count: 2,
        fail_fast: false,
        hooks: vec![
            HookResult::new("trailing-whitespace", "Trim Trailing Whitespace", Outcome::Passed),
            failed,
            HookResult::new("check-toml", "Check Toml", Outcome::NoFiles),
        ],
    }
}

fn create_test_rows() -> Vec<HookRow> {
    vec![
        HookRow {
            repo: "https://github.com/pre-commit/pre-commit-hooks".to_string(),
            rev: Some("v4.5.0".to_string()),
            id: "check-json".to_string(),
            name: "Check JSON".to_string(),
            language: Some("python".to_string()),
            stages: Vec::new(),
            unavailable: Some("provider not fetched".to_string()),
        },
        HookRow {
            repo: "local".to_string(),
            rev: None,
            id: "validate-pipeline".to_string(),
            name: "Validate pipeline configs".to_string(),
            language: Some("system".to_string()),
            stages: vec!["pre-commit".to_string()],
            unavailable: None,
        },
    ]
}

#[test]
fn test_json_formatter_report() {
    let formatter = create_formatter(OutputFormat::Json, false, 79);
    let output = formatter.format_report(&create_test_report());
    let value: serde_json::Value = serde_json::from_str(&output).expect("valid JSON");

    assert_eq!(value["passed"], false);
    assert_eq!(value["report"]["stage"], "pre-commit");
    assert_eq!(value["report"]["hooks"][1]["outcome"], "failed");
    assert_eq!(value["report"]["hooks"][1]["exit_code"], 1);
    assert_eq!(value["report"]["hooks"][2]["outcome"], "no_files");
}

#[test]
fn test_json_formatter_hooks() {
    let formatter = create_formatter(OutputFormat::Json, false, 79);
    let output = formatter.format_hooks(&create_test_rows());

    assert!(output.contains("\"total\": 2"));
    assert!(output.contains("validate-pipeline"));
    assert!(output.contains("provider not fetched"));
}

#[test]
fn test_json_formatter_error() {
    let formatter = create_formatter(OutputFormat::Json, false, 79);
    let output = formatter.format_error("Test error message");

    let value: serde_json::Value = serde_json::from_str(&output).expect("valid JSON");
    assert_eq!(value["error"], "Test error message");
}

#[test]
fn test_plain_formatter_report_lines() {
    let formatter = create_formatter(OutputFormat::Plain, false, 50);
    let output = formatter.format_report(&create_test_report());
    let lines: Vec<&str> = output.lines().collect();

    assert_eq!(lines[0].chars().count(), 50);
    assert!(lines[0].ends_with("Passed"));
    assert!(lines[1].starts_with("Check JSON..."));
    assert!(lines[1].ends_with("Failed"));
    assert!(output.contains("- hook id: check-json"));
    assert!(output.contains("data/bad.json: Expecting value"));
    assert!(output
        .lines()
        .last()
        .is_some_and(|line| line.ends_with("(no files to check)Skipped")));
}

#[test]
fn test_table_formatter_without_color_matches_plain() {
    let report = create_test_report();
    let table = create_formatter(OutputFormat::Table, false, 60).format_report(&report);
    let plain = create_formatter(OutputFormat::Plain, false, 60).format_report(&report);

    assert_eq!(table, plain);
    assert!(!table.contains('\u{1b}'));
}

#[test]
fn test_table_formatter_hooks() {
    let formatter = create_formatter(OutputFormat::Table, false, 79);
    let output = formatter.format_hooks(&create_test_rows());

    assert!(output.contains("Id"));
    assert!(output.contains("check-json"));
    assert!(output.contains("https://github.com/pre-commit/pre-commit-hooks@v4.5.0"));
    assert!(output.contains("unavailable"));
    assert!(output.contains("ready"));
}

#[test]
fn test_empty_hook_list() {
    for format in [OutputFormat::Table, OutputFormat::Plain] {
        let output = create_formatter(format, false, 79).format_hooks(&[]);
        assert_eq!(output, "No hooks declared.");
    }
}

#[test]
fn test_manifest_summary() {
    let manifest = parse_manifest(
        "repos:\n  - repo: local\n    hooks:\n      - id: a\n        name: A\n        entry: a\n        language: system\n      - id: b\n        name: B\n        entry: b\n        language: system\n",
    )
    .expect("valid manifest");
    let path = Path::new(".pre-commit-config.yaml");

    let table = create_formatter(OutputFormat::Table, false, 79).format_manifest(path, &manifest);
    assert_eq!(
        table,
        ".pre-commit-config.yaml is valid: 1 provider group(s), 2 hook(s)"
    );

    let json = create_formatter(OutputFormat::Json, false, 79).format_manifest(path, &manifest);
    let value: serde_json::Value = serde_json::from_str(&json).expect("valid JSON");
    assert_eq!(value["valid"], true);
    assert_eq!(value["hooks"], 2);
}
