// Rust guideline compliant 2026-02-06

//! Sequential hook execution.
//!
//! Hooks run one at a time, in manifest order, from the repository root.
//! Each hook receives its matching files on the command line and its output
//! is captured into the report.

use crate::command::split_command;
use crate::error::{Result, RunnerError};
use crate::report::{HookResult, Outcome, RunReport};
use crate::resolve::{resolve_all, Resolution, ResolvedHook};
use crate::store::ProviderStore;
use chrono::Utc;
use prehook_core::selection::stage_applies;
use prehook_core::{select_entries, Decision, FileSet, Manifest, Stage};
use sha2::{Digest, Sha256};
use std::collections::{BTreeMap, BTreeSet};
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use std::time::Instant;
use tracing::{info, warn};

/// Upper bound on the bytes of one hook command line; longer file lists are
/// split across several invocations.
const MAX_COMMAND_BYTES: usize = 96 * 1024;

/// Environment variable listing hook ids to skip, comma separated.
pub const SKIP_ENV: &str = "SKIP";

/// Options for one run.
#[derive(Debug, Clone)]
pub struct RunOptions {
    /// Stage the run belongs to.
    pub stage: Stage,
    /// Overrides the manifest's `fail_fast` when set.
    pub fail_fast: Option<bool>,
    /// Hook ids reported as skipped instead of running.
    pub skip: BTreeSet<String>,
    /// Run only entries with this id.
    pub hook_id: Option<String>,
    /// Fetch providers missing from the store before running.
    pub fetch_missing: bool,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            stage: Stage::PreCommit,
            fail_fast: None,
            skip: BTreeSet::new(),
            hook_id: None,
            fetch_missing: false,
        }
    }
}

impl RunOptions {
    /// Options for `stage` with `skip` read from the `SKIP` variable.
    pub fn for_stage(stage: Stage) -> Self {
        Self {
            stage,
            skip: skip_from_env(),
            ..Self::default()
        }
    }
}

/// Parses the `SKIP` environment variable.
pub fn skip_from_env() -> BTreeSet<String> {
    std::env::var(SKIP_ENV)
        .map(|value| parse_skip(&value))
        .unwrap_or_default()
}

fn parse_skip(value: &str) -> BTreeSet<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .map(str::to_string)
        .collect()
}

/// Runs the hooks of one manifest against a set of changed files.
#[derive(Debug)]
pub struct Runner<'a> {
    repo_root: PathBuf,
    manifest: &'a Manifest,
    store: &'a ProviderStore,
    options: RunOptions,
}

impl<'a> Runner<'a> {
    /// Creates a runner for the checkout at `repo_root`.
    pub fn new(
        repo_root: impl Into<PathBuf>,
        manifest: &'a Manifest,
        store: &'a ProviderStore,
        options: RunOptions,
    ) -> Self {
        Self {
            repo_root: repo_root.into(),
            manifest,
            store,
            options,
        }
    }

    /// Whether the first failure aborts the batch.
    pub fn fail_fast(&self) -> bool {
        self.options
            .fail_fast
            .unwrap_or_else(|| self.manifest.fail_fast())
    }

    /// Runs every applicable hook against `changed`.
    ///
    /// # Arguments
    ///
    /// * `changed` - Changed paths relative to the repository root
    ///
    /// # Returns
    ///
    /// A report with one result per entry of the run's stage, in manifest
    /// order. Hook failures are recorded in the report, not returned.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - A pattern fails to compile
    /// - The provider store cannot be locked
    /// - `hook_id` names no manifest entry
    pub fn run<S: AsRef<str>>(&self, changed: &[S]) -> Result<RunReport> {
        let started_at = Utc::now();
        let files = FileSet::on_disk(
            &self.repo_root,
            changed.iter().map(AsRef::<str>::as_ref),
            self.manifest,
        )?;
        let resolutions = resolve_all(self.manifest, self.store, self.options.fetch_missing)?;
        let fail_fast = self.fail_fast();
        let stage = self.options.stage;

        if let Some(id) = &self.options.hook_id {
            if !resolutions.iter().any(|r| &r.entry().id == id) {
                return Err(RunnerError::NoSuchHook(id.clone()));
            }
        }

        info!(
            stage = %stage,
            files = files.len(),
            hooks = resolutions.len(),
            "Starting run"
        );

        let mut hooks = Vec::new();
        let mut aborted = false;

        for resolution in &resolutions {
            let entry = resolution.entry();
            if let Some(id) = &self.options.hook_id {
                if &entry.id != id {
                    continue;
                }
            }
            if !stage_applies(self.manifest, entry, stage) {
                continue;
            }

            let name = entry.display_name();
            let result = if aborted {
                HookResult::new(&entry.id, name, Outcome::NotRun)
            } else if self.options.skip.contains(&entry.id) {
                HookResult::new(&entry.id, name, Outcome::Skipped)
            } else {
                match resolution {
                    Resolution::Unavailable { reason, .. } => {
                        let mut result = HookResult::new(&entry.id, name, Outcome::Error);
                        result.output = reason.clone();
                        result
                    }
                    Resolution::Ready(hook) => self.run_selected(hook, &files)?,
                }
            };

            if fail_fast && result.outcome.is_failure() {
                warn!(hook = %result.id, "Hook failed; aborting remaining hooks");
                aborted = true;
            }
            hooks.push(result);
        }

        Ok(RunReport {
            stage,
            started_at,
            file_count: files.len(),
            fail_fast,
            hooks,
        })
    }

    fn run_selected(&self, hook: &ResolvedHook, files: &FileSet) -> Result<HookResult> {
        let selection = select_entries(
            self.manifest,
            std::iter::once(&hook.entry),
            files,
            self.options.stage,
        )?;
        let candidates = match selection.into_iter().next() {
            Some(selected) if selected.decision == Decision::Run => selected.files,
            _ => {
                return Ok(HookResult::new(
                    &hook.entry.id,
                    hook.entry.display_name(),
                    Outcome::NoFiles,
                ))
            }
        };
        Ok(self.execute(hook, candidates))
    }

    /// Invokes one hook against `files` and records what happened.
    fn execute(&self, hook: &ResolvedHook, files: Vec<String>) -> HookResult {
        let entry = &hook.entry;
        let mut result = HookResult::new(&entry.id, entry.display_name(), Outcome::Error);
        result.verbose = entry.verbose.unwrap_or(false);
        let start = Instant::now();

        info!(hook = %entry.id, files = files.len(), "Running hook");

        let language = entry.language.as_deref().unwrap_or("system");
        let command = entry.entry.as_deref().unwrap_or_default();

        if language == "fail" {
            let mut output = command.to_string();
            for file in &files {
                output.push('\n');
                output.push_str(file);
            }
            result.outcome = Outcome::Failed;
            result.exit_code = Some(1);
            result.output = output;
            result.files = files;
            return result;
        }

        let base = match self.base_argv(hook, language, command) {
            Ok(base) => base,
            Err(e) => {
                result.output = e.to_string();
                result.files = files;
                return result;
            }
        };
        let batches = if entry.pass_filenames() {
            partition_files(&base, &files, MAX_COMMAND_BYTES)
        } else {
            vec![&files[..0]]
        };

        let before = digest_files(&self.repo_root, &files);
        let mut text = String::new();
        let mut exit_code = Some(0);
        let mut started = true;

        for batch in batches {
            let output = Command::new(&base[0])
                .args(&base[1..])
                .args(batch)
                .current_dir(&self.repo_root)
                .env("PRE_COMMIT", "1")
                .stdin(Stdio::null())
                .output();
            match output {
                Err(e) => {
                    warn!(hook = %entry.id, error = %e, "Hook command could not start");
                    text = format!("failed to start '{}': {}", base[0], e);
                    started = false;
                    break;
                }
                Ok(output) => {
                    text.push_str(&String::from_utf8_lossy(&output.stdout));
                    text.push_str(&String::from_utf8_lossy(&output.stderr));
                    if exit_code == Some(0) {
                        exit_code = output.status.code();
                    }
                }
            }
        }
        result.duration_ms = start.elapsed().as_millis() as u64;
        result.output = text;

        if started {
            let after = digest_files(&self.repo_root, &files);
            result.modified = files
                .iter()
                .filter(|path| before.get(*path) != after.get(*path))
                .cloned()
                .collect();
            result.exit_code = exit_code;
            result.outcome = if exit_code == Some(0) && result.modified.is_empty() {
                Outcome::Passed
            } else {
                Outcome::Failed
            };
        }

        info!(
            hook = %entry.id,
            outcome = ?result.outcome,
            duration_ms = result.duration_ms,
            "Hook finished"
        );
        result.files = files;
        result
    }

    /// Entry words plus `args`, without file names.
    fn base_argv(&self, hook: &ResolvedHook, language: &str, command: &str) -> Result<Vec<String>> {
        let invalid = |reason: String| RunnerError::InvalidEntry {
            id: hook.entry.id.clone(),
            reason,
        };

        let mut argv = split_command(command).map_err(invalid)?;
        if argv.is_empty() {
            return Err(invalid("entry is empty".to_string()));
        }

        if language == "script" {
            let base = hook.workdir.as_deref().unwrap_or(&self.repo_root);
            argv[0] = base.join(&argv[0]).to_string_lossy().into_owned();
        }

        argv.extend(hook.entry.args().iter().cloned());
        Ok(argv)
    }
}

/// Splits `files` so that `base` plus each batch stays under `limit` bytes.
///
/// Each argument counts its length plus a terminating NUL. A file too long to
/// share a batch still gets a batch of its own. An empty file list yields a
/// single empty batch.
fn partition_files<'f>(base: &[String], files: &'f [String], limit: usize) -> Vec<&'f [String]> {
    let base_len: usize = base.iter().map(|arg| arg.len() + 1).sum();
    let mut batches = Vec::new();
    let mut start = 0;
    let mut used = base_len;

    for (idx, file) in files.iter().enumerate() {
        let len = file.len() + 1;
        if idx > start && used + len > limit {
            batches.push(&files[start..idx]);
            start = idx;
            used = base_len;
        }
        used += len;
    }
    batches.push(&files[start..]);
    batches
}

/// SHA-256 of each file that exists; missing files are left out.
fn digest_files(root: &Path, files: &[String]) -> BTreeMap<String, [u8; 32]> {
    files
        .iter()
        .filter_map(|path| {
            let bytes = std::fs::read(root.join(path)).ok()?;
            Some((path.clone(), Sha256::digest(&bytes).into()))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use prehook_core::parse_manifest;
    use tempfile::TempDir;

    #[test]
    fn test_parse_skip() {
        let skip = parse_skip(" black, ,ruff ,");
        assert_eq!(
            skip.into_iter().collect::<Vec<_>>(),
            vec!["black".to_string(), "ruff".to_string()]
        );
    }

    #[test]
    fn test_fail_fast_override() {
        let manifest = parse_manifest("repos: []\nfail_fast: false\n").unwrap();
        let store = ProviderStore::new("/unused");
        let runner = Runner::new("/repo", &manifest, &store, RunOptions::default());
        assert!(!runner.fail_fast());

        let options = RunOptions {
            fail_fast: Some(true),
            ..RunOptions::default()
        };
        let runner = Runner::new("/repo", &manifest, &store, options);
        assert!(runner.fail_fast());
    }

    #[test]
    fn test_digest_detects_changes() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("a.txt"), "one").unwrap();
        let files = vec!["a.txt".to_string(), "gone.txt".to_string()];
        let before = digest_files(dir.path(), &files);
        assert_eq!(before.len(), 1);

        std::fs::write(dir.path().join("a.txt"), "two").unwrap();
        assert_ne!(before, digest_files(dir.path(), &files));
    }

    #[test]
    fn test_fail_language_always_fails() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("bad.orig"), "x").unwrap();
        let manifest = parse_manifest(
            r#"
repos:
  - repo: local
    hooks:
      - id: no-orig
        name: No .orig files
        entry: "Remove merge leftovers:"
        language: fail
        files: \.orig$
"#,
        )
        .unwrap();
        let store = ProviderStore::new(dir.path().join("cache"));
        let runner = Runner::new(dir.path(), &manifest, &store, RunOptions::default());

        let report = runner.run(&["bad.orig"]).unwrap();
        assert_eq!(report.hooks[0].outcome, Outcome::Failed);
        assert!(report.hooks[0].output.contains("bad.orig"));
        assert!(!report.passed());
    }

    #[test]
    fn test_partition_files_respects_limit() {
        let base = vec!["lint".to_string()];
        let files: Vec<String> = (0..10).map(|i| format!("file{}.py", i)).collect();

        // "lint\0" is 5 bytes, each "fileN.py\0" is 9 bytes.
        let batches = partition_files(&base, &files, 5 + 9 * 4);
        assert_eq!(batches.len(), 3);
        assert_eq!(batches[0].len(), 4);
        assert_eq!(batches[2].len(), 2);
        assert_eq!(batches.concat(), files);

        assert_eq!(partition_files(&base, &files, usize::MAX).len(), 1);
        assert_eq!(partition_files(&base, &[], 1), vec![&[] as &[String]]);
    }

    #[test]
    fn test_oversized_file_gets_own_batch() {
        let base = vec!["lint".to_string()];
        let files = vec!["a".to_string(), "x".repeat(50), "b".to_string()];
        let batches = partition_files(&base, &files, 20);
        assert_eq!(batches.len(), 3);
        assert_eq!(batches[1], &files[1..2]);
    }

    #[test]
    fn test_long_file_lists_run_in_batches() {
        let dir = TempDir::new().unwrap();
        let files: Vec<String> = (0..3000)
            .map(|i| format!("a-rather-long-directory-name/file-number-{:05}.txt", i))
            .collect();
        std::fs::create_dir_all(dir.path().join("a-rather-long-directory-name")).unwrap();
        for file in &files {
            std::fs::write(dir.path().join(file), "x").unwrap();
        }
        let manifest = parse_manifest(
            "repos:\n  - repo: local\n    hooks:\n      - id: count\n        name: Count\n        entry: sh -c 'echo \"batch $#\"' --\n        language: system\n",
        )
        .unwrap();
        let store = ProviderStore::new(dir.path().join("cache"));
        let runner = Runner::new(dir.path(), &manifest, &store, RunOptions::default());

        let report = runner.run(files.as_slice()).unwrap();
        let hook = &report.hooks[0];
        assert_eq!(hook.outcome, Outcome::Passed);
        assert_eq!(hook.files.len(), 3000);
        let counted: usize = hook
            .output
            .lines()
            .filter_map(|line| line.strip_prefix("batch "))
            .map(|n| n.parse::<usize>().unwrap())
            .sum();
        assert_eq!(counted, 3000);
        assert!(hook.output.lines().count() > 1);
    }

    #[test]
    fn test_unknown_hook_id() {
        let manifest = parse_manifest("repos: []\n").unwrap();
        let store = ProviderStore::new("/unused");
        let options = RunOptions {
            hook_id: Some("nope".to_string()),
            ..RunOptions::default()
        };
        let runner = Runner::new("/repo", &manifest, &store, options);
        assert!(matches!(
            runner.run::<&str>(&[]).unwrap_err(),
            RunnerError::NoSuchHook(id) if id == "nope"
        ));
    }
}
