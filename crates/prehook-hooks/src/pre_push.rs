// Rust guideline compliant 2026-02-06

//! Pre-push hook implementation.
//!
//! Git writes one line per pushed ref to the hook's stdin:
//! `<local ref> <local sha> <remote ref> <remote sha>`. Deleted refs carry an
//! all-zero local sha; new branches carry an all-zero remote sha.

use crate::stage::run_stage;
use anyhow::Result;
use prehook_core::Stage;
use prehook_runner::{changed_between, discover_root, RunReport};
use std::collections::BTreeSet;
use std::path::Path;
use tracing::warn;

/// One ref update announced to the pre-push hook.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PushRef {
    /// Local ref being pushed.
    pub local_ref: String,
    /// Commit the remote ref will point to.
    pub local_sha: String,
    /// Remote ref being updated.
    pub remote_ref: String,
    /// Current remote commit; `None` for a new branch.
    pub remote_sha: Option<String>,
}

fn is_zero(sha: &str) -> bool {
    !sha.is_empty() && sha.chars().all(|c| c == '0')
}

/// Parses the pre-push stdin protocol, dropping deletions and malformed lines.
pub fn parse_push_refs(input: &str) -> Vec<PushRef> {
    input
        .lines()
        .filter_map(|line| {
            let fields: Vec<&str> = line.split_whitespace().collect();
            let [local_ref, local_sha, remote_ref, remote_sha] = fields.as_slice() else {
                return None;
            };
            if is_zero(local_sha) {
                return None;
            }
            Some(PushRef {
                local_ref: local_ref.to_string(),
                local_sha: local_sha.to_string(),
                remote_ref: remote_ref.to_string(),
                remote_sha: (!is_zero(remote_sha)).then(|| remote_sha.to_string()),
            })
        })
        .collect()
}

/// Runs the pre-push hook.
///
/// Files changed between each remote sha and the local sha are collected.
/// When the remote sha is unknown locally, or the ref is new, every file in
/// the pushed tree is checked.
///
/// # Arguments
///
/// * `repo_path` - Path inside the Git repository
/// * `input` - Contents of the hook's stdin
/// * `manifest` - Manifest overriding the configured one
///
/// # Returns
///
/// The run report. The caller exits with [`RunReport::exit_code`].
///
/// # Errors
///
/// Returns an error if a pushed commit cannot be read, or the manifest is
/// missing or invalid.
pub fn pre_push_hook(
    repo_path: &Path,
    input: &str,
    manifest: Option<&Path>,
) -> Result<RunReport> {
    let root = discover_root(repo_path)?;
    let mut files = BTreeSet::new();

    for push in parse_push_refs(input) {
        let changed = match changed_between(&root, push.remote_sha.as_deref(), &push.local_sha) {
            Ok(changed) => changed,
            Err(e) if push.remote_sha.is_some() => {
                warn!(
                    remote_ref = %push.remote_ref,
                    error = %e,
                    "Remote commit unknown locally; checking the whole tree"
                );
                changed_between(&root, None, &push.local_sha)?
            }
            Err(e) => return Err(e.into()),
        };
        files.extend(changed);
    }

    let files: Vec<String> = files.into_iter().collect();
    run_stage(&root, Stage::PrePush, &files, manifest)
}
