// Rust guideline compliant 2026-02-06

//! Results of a hook run.

use chrono::{DateTime, Utc};
use prehook_core::Stage;
use serde::Serialize;

/// Default width of a status line, matching common terminal layouts.
pub const DEFAULT_LINE_WIDTH: usize = 79;

/// Outcome of a single hook in a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    /// The command exited successfully and left its files untouched.
    Passed,
    /// The command exited unsuccessfully, or modified files.
    Failed,
    /// Suppressed through `SKIP`.
    Skipped,
    /// No changed file applies to the hook.
    NoFiles,
    /// Not attempted because an earlier hook failed under fail-fast.
    NotRun,
    /// The hook could not be started (provider or command unavailable).
    Error,
}

impl Outcome {
    /// Whether this outcome makes the run fail.
    pub fn is_failure(&self) -> bool {
        matches!(self, Outcome::Failed | Outcome::Error)
    }

    /// Short status word printed at the end of a status line.
    pub fn label(&self) -> &'static str {
        match self {
            Outcome::Passed => "Passed",
            Outcome::Failed => "Failed",
            Outcome::Skipped | Outcome::NoFiles => "Skipped",
            Outcome::NotRun => "Not run",
            Outcome::Error => "Error",
        }
    }
}

/// Result of one hook.
#[derive(Debug, Clone, Serialize)]
pub struct HookResult {
    /// Hook id.
    pub id: String,
    /// Display name.
    pub name: String,
    /// What happened.
    pub outcome: Outcome,
    /// Exit code of the command, when it ran to completion.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exit_code: Option<i32>,
    /// Combined stdout and stderr, or the reason the hook did not run.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub output: String,
    /// Files passed to the hook.
    pub files: Vec<String>,
    /// Files whose content changed while the hook ran.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub modified: Vec<String>,
    /// Wall-clock duration in milliseconds.
    pub duration_ms: u64,
    /// Print output even on success.
    #[serde(skip)]
    pub verbose: bool,
}

impl HookResult {
    /// Creates a result that carries no command output.
    pub fn new(id: impl Into<String>, name: impl Into<String>, outcome: Outcome) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            outcome,
            exit_code: None,
            output: String::new(),
            files: Vec::new(),
            modified: Vec::new(),
            duration_ms: 0,
            verbose: false,
        }
    }

    /// Renders `name.....status` padded with dots to `width` columns.
    pub fn status_line(&self, width: usize) -> String {
        let suffix = match self.outcome {
            Outcome::NoFiles => "(no files to check)",
            Outcome::Skipped => "(skipped)",
            _ => "",
        };
        let status = format!("{}{}", suffix, self.outcome.label());
        let used = self.name.chars().count() + status.chars().count();
        let dots = width.saturating_sub(used).max(3);
        format!("{}{}{}", self.name, ".".repeat(dots), status)
    }

    /// Detail lines printed under a status line, if any.
    pub fn details(&self) -> Vec<String> {
        if !(self.outcome.is_failure() || (self.verbose && self.outcome == Outcome::Passed)) {
            return Vec::new();
        }

        let mut lines = vec![format!("- hook id: {}", self.id)];
        if let Some(code) = self.exit_code {
            if code != 0 {
                lines.push(format!("- exit code: {}", code));
            }
        }
        if !self.modified.is_empty() {
            lines.push("- files were modified by this hook".to_string());
        }
        if self.duration_ms > 0 && self.verbose {
            lines.push(format!("- duration: {:.2}s", self.duration_ms as f64 / 1000.0));
        }
        if !self.output.trim().is_empty() {
            lines.push(String::new());
            lines.extend(self.output.trim_end().lines().map(str::to_string));
            lines.push(String::new());
        }
        lines
    }
}

/// Result of a whole run.
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    /// Stage the run belongs to.
    pub stage: Stage,
    /// When the run started.
    pub started_at: DateTime<Utc>,
    /// Number of changed files after the manifest-level filter.
    pub file_count: usize,
    /// Whether the run stopped at the first failure.
    pub fail_fast: bool,
    /// Per-hook results in execution order.
    pub hooks: Vec<HookResult>,
}

impl RunReport {
    /// Whether no hook failed.
    pub fn passed(&self) -> bool {
        !self.hooks.iter().any(|hook| hook.outcome.is_failure())
    }

    /// Hooks that made the run fail.
    pub fn failures(&self) -> impl Iterator<Item = &HookResult> {
        self.hooks.iter().filter(|hook| hook.outcome.is_failure())
    }

    /// Number of hooks with the given outcome.
    pub fn count(&self, outcome: Outcome) -> usize {
        self.hooks.iter().filter(|hook| hook.outcome == outcome).count()
    }

    /// Status lines followed by their details, ready to print.
    pub fn render_lines(&self, width: usize) -> Vec<String> {
        let mut lines = Vec::new();
        for hook in &self.hooks {
            lines.push(hook.status_line(width));
            lines.extend(hook.details());
        }
        lines
    }

    /// Process exit code for the run.
    pub fn exit_code(&self) -> i32 {
        if self.passed() {
            0
        } else {
            1
        }
    }
}
