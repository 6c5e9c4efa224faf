// Rust guideline compliant 2026-02-06

//! The check loop run by the `validate-pipeline-config` hook.

use crate::error::{PipelineError, Result};
use crate::validate::validate_file;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Directory searched for `*.json` documents when no files are given.
pub const DEFAULT_CONFIG_DIR: &str = "cookiecutter-config";

/// Result of checking a batch of files.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckOutcome {
    /// There was nothing to check.
    NoFiles,
    /// Every file matched a pipeline kind.
    AllValid(usize),
    /// A file failed; later files were not checked.
    Failed,
}

impl CheckOutcome {
    /// Process exit code for the outcome.
    pub fn exit_code(&self) -> i32 {
        match self {
            CheckOutcome::Failed => 1,
            _ => 0,
        }
    }
}

/// Lists `*.json` files directly inside `dir`, sorted.
///
/// # Errors
///
/// Returns an error if the directory path cannot form a search pattern.
pub fn default_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let pattern = dir.join("*.json");
    let mut files: Vec<PathBuf> = glob::glob(&pattern.to_string_lossy())?
        .filter_map(|entry| entry.ok())
        .collect();
    files.sort();
    Ok(files)
}

/// Validates `files` in order, stopping at the first failing file.
///
/// Progress and problems are written to `out`: an info line when there is
/// nothing to check, every violation of a failing document, or a success
/// line.
///
/// # Errors
///
/// Returns an error only if a file cannot be read or `out` cannot be written.
pub fn check_files<W: Write>(files: &[PathBuf], out: &mut W) -> Result<CheckOutcome> {
    if files.is_empty() {
        writeln!(out, "[INFO] No JSON files to validate.").map_err(|e| io_error(e, "stdout"))?;
        return Ok(CheckOutcome::NoFiles);
    }

    for file in files {
        let report = match validate_file(file) {
            Ok(report) => report,
            Err(err @ PipelineError::InvalidJson { .. }) => {
                writeln!(out, "[ERROR] {}", err).map_err(|e| io_error(e, "stdout"))?;
                return Ok(CheckOutcome::Failed);
            }
            Err(err) => return Err(err),
        };

        if !report.is_valid() {
            let err = PipelineError::SchemaMismatch {
                path: file.clone(),
                count: report.violations.len(),
            };
            writeln!(out, "[ERROR] {}:", err).map_err(|e| io_error(e, "stdout"))?;
            for violation in &report.violations {
                writeln!(out, "  - {}", violation).map_err(|e| io_error(e, "stdout"))?;
            }
            return Ok(CheckOutcome::Failed);
        }
    }

    writeln!(out, "All {} file(s) match a pipeline schema.", files.len())
        .map_err(|e| io_error(e, "stdout"))?;
    Ok(CheckOutcome::AllValid(files.len()))
}

fn io_error(source: std::io::Error, path: &str) -> PipelineError {
    PipelineError::Io {
        path: PathBuf::from(path),
        source,
    }
}
