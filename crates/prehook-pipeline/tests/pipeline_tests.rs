// Rust guideline compliant 2026-02-06

//! Integration tests for the pipeline config validation hook.

use prehook_pipeline::{check_files, default_files, validate_document, CheckOutcome, SchemaKind};
use proptest::prelude::*;
use serde_json::{json, Value};
use std::fs;
use std::path::PathBuf;
use std::process::Command;
use tempfile::TempDir;

const SAMPLE: &str = include_str!("../../../demos/cookiecutter-config/ml-pipeline.json");

fn sample() -> Value {
    serde_json::from_str(SAMPLE).expect("sample is valid JSON")
}

fn write(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).expect("Failed to write file");
    path
}

#[test]
fn test_bundled_sample_is_an_ml_pipeline() {
    assert_eq!(validate_document(&sample()).matched, Some(SchemaKind::Ml));
}

#[test]
fn test_check_files_reports_every_violation_of_the_first_bad_file() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let mut bad = sample();
    bad["ComputeResourcesCPU"] = json!(0);
    bad["runtimeBase"] = json!("Cobol");
    let good = write(&temp_dir, "a-good.json", SAMPLE);
    let broken = write(&temp_dir, "b-bad.json", &bad.to_string());
    let never = write(&temp_dir, "c-unparsable.json", "{");

    let mut out = Vec::new();
    let outcome = check_files(&[good, broken, never], &mut out).expect("check failed");
    let text = String::from_utf8(out).unwrap();

    assert_eq!(outcome, CheckOutcome::Failed);
    assert_eq!(outcome.exit_code(), 1);
    assert!(text.contains("b-bad.json"));
    assert!(text.contains("MLPipeline.ComputeResourcesCPU"));
    assert!(text.contains("AgenticPipeline.runtimeBase"));
    assert!(!text.contains("c-unparsable.json"));
}

#[test]
fn test_check_files_invalid_json() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let broken = write(&temp_dir, "broken.json", "{\"projectName\": ");

    let mut out = Vec::new();
    let outcome = check_files(&[broken], &mut out).expect("check failed");
    let text = String::from_utf8(out).unwrap();
    assert_eq!(outcome, CheckOutcome::Failed);
    assert!(text.contains("is not valid JSON"));
}

#[test]
fn test_check_files_empty() {
    let mut out = Vec::new();
    let outcome = check_files(&[], &mut out).expect("check failed");
    assert_eq!(outcome, CheckOutcome::NoFiles);
    assert_eq!(outcome.exit_code(), 0);
    assert!(String::from_utf8(out).unwrap().starts_with("[INFO]"));
}

#[test]
fn test_default_files_lists_json_only() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    write(&temp_dir, "b.json", "{}");
    write(&temp_dir, "a.json", "{}");
    write(&temp_dir, "notes.md", "");

    let files = default_files(temp_dir.path()).expect("listing failed");
    let names: Vec<_> = files
        .iter()
        .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
        .collect();
    assert_eq!(names, vec!["a.json", "b.json"]);
}

#[test]
fn test_binary_exit_codes() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let good = write(&temp_dir, "good.json", SAMPLE);
    let bad = write(&temp_dir, "bad.json", "[]");
    let bin = env!("CARGO_BIN_EXE_validate-pipeline-config");

    let status = Command::new(bin).arg(&good).status().expect("Failed to run");
    assert!(status.success());

    let output = Command::new(bin).arg(&bad).output().expect("Failed to run");
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stdout).contains("[ERROR]"));

    let empty = temp_dir.path().join("empty");
    fs::create_dir_all(&empty).unwrap();
    let output = Command::new(bin)
        .arg("--config-dir")
        .arg(&empty)
        .output()
        .expect("Failed to run");
    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("No JSON files"));
}

proptest! {
    #[test]
    fn prop_cpu_range(cpu in -10i64..200) {
        let mut doc = sample();
        doc["ComputeResourcesCPU"] = json!(cpu);
        prop_assert_eq!(validate_document(&doc).is_valid(), (1..=96).contains(&cpu));
    }

    #[test]
    fn prop_project_name_length(len in 1usize..40) {
        let mut doc = sample();
        doc["projectName"] = json!("a".repeat(len));
        prop_assert_eq!(validate_document(&doc).is_valid(), (3..=30).contains(&len));
    }
}
