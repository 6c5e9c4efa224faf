// Rust guideline compliant 2026-02-06

//! Changed-file discovery through Git.

use crate::error::{Result, RunnerError};
use git2::{Delta, Diff, DiffOptions, Index, Repository};
use std::path::{Path, PathBuf};

/// Finds the working tree root containing `start`.
///
/// # Errors
///
/// Returns an error if `start` is not inside a non-bare repository.
pub fn discover_root(start: &Path) -> Result<PathBuf> {
    let repo = Repository::discover(start)
        .map_err(|_| RunnerError::NotARepository(start.display().to_string()))?;
    repo.workdir()
        .map(Path::to_path_buf)
        .ok_or_else(|| RunnerError::NotARepository(format!("{} is bare", start.display())))
}

/// Environment variable Git sets when a hook must read a temporary index,
/// as during `git commit -a` or `git commit <paths>`.
pub const INDEX_FILE_ENV: &str = "GIT_INDEX_FILE";

/// Index the running Git command points at.
///
/// A relative `GIT_INDEX_FILE` is taken relative to the working tree root,
/// which is where Git runs hooks.
fn current_index(repo: &Repository, repo_root: &Path) -> Result<Index> {
    match std::env::var_os(INDEX_FILE_ENV) {
        Some(path) if !path.is_empty() => Ok(Index::open(&repo_root.join(path))?),
        _ => Ok(repo.index()?),
    }
}

/// Paths staged for the next commit, relative to the repository root.
///
/// Added, modified, renamed and type-changed entries are reported; deleted
/// ones are not. Without a `HEAD` commit every index entry counts as staged.
/// The index named by `GIT_INDEX_FILE` is used when set.
///
/// # Errors
///
/// Returns an error if the repository or its index cannot be read.
pub fn staged_files(repo_root: &Path) -> Result<Vec<String>> {
    let repo = Repository::open(repo_root)?;
    let index = current_index(&repo, repo_root)?;
    let head_tree = match repo.head() {
        Ok(head) => Some(head.peel_to_tree()?),
        Err(_) => None,
    };

    let mut options = DiffOptions::new();
    options.include_typechange(true);
    let diff = repo.diff_tree_to_index(head_tree.as_ref(), Some(&index), Some(&mut options))?;
    Ok(surviving_paths(&diff))
}

/// Every path tracked in the index (honouring `GIT_INDEX_FILE`).
///
/// # Errors
///
/// Returns an error if the repository or its index cannot be read.
pub fn all_files(repo_root: &Path) -> Result<Vec<String>> {
    let repo = Repository::open(repo_root)?;
    let index = current_index(&repo, repo_root)?;
    Ok(index
        .iter()
        .map(|entry| String::from_utf8_lossy(&entry.path).into_owned())
        .collect())
}

/// Paths that differ between two revisions.
///
/// `from` may be `None` for "everything reachable from `to`", which is what a
/// push of a brand new branch needs.
///
/// # Errors
///
/// Returns an error if a revision cannot be resolved.
pub fn changed_between(repo_root: &Path, from: Option<&str>, to: &str) -> Result<Vec<String>> {
    let repo = Repository::open(repo_root)?;
    let new_tree = repo.revparse_single(to)?.peel_to_tree()?;
    let old_tree = match from {
        Some(rev) => Some(repo.revparse_single(rev)?.peel_to_tree()?),
        None => None,
    };

    let mut options = DiffOptions::new();
    options.include_typechange(true);
    let diff = repo.diff_tree_to_tree(old_tree.as_ref(), Some(&new_tree), Some(&mut options))?;
    Ok(surviving_paths(&diff))
}

fn surviving_paths(diff: &Diff<'_>) -> Vec<String> {
    diff.deltas()
        .filter(|delta| delta.status() != Delta::Deleted)
        .filter_map(|delta| delta.new_file().path())
        .map(|path| path.to_string_lossy().replace('\\', "/"))
        .collect()
}
