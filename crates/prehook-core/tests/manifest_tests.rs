// Rust guideline compliant 2026-02-06

//! Integration tests for manifest loading and hook selection against the
//! bundled scaffolding manifest.

use prehook_core::{load_manifest, parse_manifest, Decision, FileSet, Manifest, Stage};
use tempfile::TempDir;

const BUNDLED: &str = include_str!("../../../demos/pre-commit-config.yaml");

fn bundled() -> Manifest {
    let manifest = parse_manifest(BUNDLED).expect("bundled manifest parses");
    manifest.validate().expect("bundled manifest validates");
    manifest
}

fn firing(manifest: &Manifest, paths: &[&str]) -> Vec<String> {
    let set = FileSet::from_paths(paths.iter().copied(), manifest).expect("file set");
    manifest
        .select(&set, Stage::PreCommit)
        .expect("selection")
        .into_iter()
        .filter(|s| s.fires())
        .map(|s| s.entry.id.clone())
        .collect()
}

#[test]
fn test_readme_fires_markdown_and_whitespace_hooks_only() {
    let manifest = bundled();
    assert_eq!(
        firing(&manifest, &["README.md"]),
        vec!["trailing-whitespace", "end-of-file-fixer", "markdownlint"]
    );
}

#[test]
fn test_globally_excluded_file_fires_nothing() {
    let manifest = bundled();
    assert!(firing(&manifest, &["legacy/old.py"]).is_empty());
}

#[test]
fn test_notebook_fires_notebook_aware_hooks() {
    let manifest = bundled();
    let fired = firing(&manifest, &["notebook.ipynb"]);
    for id in ["nbstripout", "black-jupyter", "isort", "ruff"] {
        assert!(fired.contains(&id.to_string()), "{} should fire: {:?}", id, fired);
    }
    for id in ["black", "check-json", "markdownlint", "validate-pipeline-config"] {
        assert!(!fired.contains(&id.to_string()), "{} should not fire: {:?}", id, fired);
    }
}

#[test]
fn test_pipeline_config_fires_local_validator() {
    let manifest = bundled();
    let fired = firing(&manifest, &["cookiecutter-config/ml.json"]);
    assert!(fired.contains(&"validate-pipeline-config".to_string()));
    assert!(fired.contains(&"check-json".to_string()));
}

#[test]
fn test_parsing_is_idempotent() {
    let first = parse_manifest(BUNDLED).expect("first parse");
    let second = parse_manifest(BUNDLED).expect("second parse");
    assert_eq!(first, second);
}

#[test]
fn test_selection_preserves_manifest_order() {
    let manifest = bundled();
    let set = FileSet::from_paths(["src/app.py"], &manifest).expect("file set");
    let selected: Vec<String> = manifest
        .select(&set, Stage::PreCommit)
        .expect("selection")
        .iter()
        .map(|s| s.entry.id.clone())
        .collect();
    let declared: Vec<String> = manifest.entries().map(|(_, h)| h.id.clone()).collect();
    assert_eq!(selected, declared);
}

#[test]
fn test_every_remote_group_is_pinned() {
    let manifest = bundled();
    for group in manifest.repos.iter().filter(|g| !g.is_local()) {
        let provider = group.provider().expect("remote group has provider");
        assert!(provider.is_pinned_to(group.rev.as_deref().unwrap_or_default()));
    }
}

#[test]
fn test_manual_stage_only_runs_hooks_without_stage_list() {
    let manifest = parse_manifest(
        r#"
repos:
  - repo: local
    hooks:
      - id: everywhere
        entry: "true"
      - id: commit-only
        entry: "true"
        stages: [commit]
      - id: manual-only
        entry: "true"
        stages: [manual]
"#,
    )
    .expect("parse");
    let set = FileSet::from_paths(["a.txt"], &manifest).expect("file set");

    let manual: Vec<(String, Decision)> = manifest
        .select(&set, Stage::Manual)
        .expect("selection")
        .iter()
        .map(|s| (s.entry.id.clone(), s.decision))
        .collect();
    assert_eq!(
        manual,
        vec![
            ("everywhere".to_string(), Decision::Run),
            ("commit-only".to_string(), Decision::OtherStage),
            ("manual-only".to_string(), Decision::Run),
        ]
    );
}

#[test]
fn test_load_manifest_from_disk() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join(".pre-commit-config.yaml");
    std::fs::write(&path, BUNDLED).expect("write manifest");
    let manifest = load_manifest(&path).expect("load manifest");
    assert_eq!(manifest, bundled());
}

#[test]
fn test_load_manifest_missing_file() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let err = load_manifest(&temp_dir.path().join("missing.yaml")).unwrap_err();
    assert!(err.to_string().contains("not found"));
}

#[test]
fn test_load_manifest_rejects_malformed_yaml() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join(".pre-commit-config.yaml");
    std::fs::write(&path, "repos:\n  - repo: local\n    hooks: [").expect("write manifest");
    assert!(load_manifest(&path).is_err());
}
