// Rust guideline compliant 2026-02-06

//! Output formatting module for the prehook CLI.
//!
//! This module provides functionality for formatting run reports, hook
//! listings and manifest summaries in various output formats (JSON, table,
//! plain text).

use crate::terminal::paint;
use prehook_core::{Manifest, OutputFormat};
use prehook_runner::{HookResult, Outcome, RunReport};
use serde::Serialize;
use serde_json::json;
use std::path::Path;
use tabled::{builder::Builder, settings::Style};
use termcolor::Color;

/// One row of `prehook list`.
#[derive(Debug, Clone, Serialize)]
pub struct HookRow {
    /// Provider location, or `local`.
    pub repo: String,
    /// Pinned revision of the provider.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rev: Option<String>,
    /// Hook id.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Runtime tag.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    /// Stages the hook takes part in; empty for every stage.
    pub stages: Vec<String>,
    /// Why the hook cannot run, if it cannot.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unavailable: Option<String>,
}

impl HookRow {
    fn stages_label(&self) -> String {
        if self.stages.is_empty() {
            "all".to_string()
        } else {
            self.stages.join(",")
        }
    }

    fn provider_label(&self) -> String {
        match &self.rev {
            Some(rev) => format!("{}@{}", self.repo, rev),
            None => self.repo.clone(),
        }
    }
}

/// Output formatter trait.
///
/// Defines the interface for formatting prehook data in different output formats.
pub trait OutputFormatter {
    /// Formats the report of a hook run.
    fn format_report(&self, report: &RunReport) -> String;

    /// Formats the hooks declared by a manifest.
    fn format_hooks(&self, hooks: &[HookRow]) -> String;

    /// Formats the result of validating a manifest.
    fn format_manifest(&self, path: &Path, manifest: &Manifest) -> String;

    /// Formats an error message for display.
    fn format_error(&self, error: &str) -> String;
}

/// JSON output formatter.
///
/// Formats data as valid JSON for machine consumption.
pub struct JsonFormatter;

impl OutputFormatter for JsonFormatter {
    fn format_report(&self, report: &RunReport) -> String {
        let output = json!({
            "passed": report.passed(),
            "report": report,
        });
        serde_json::to_string_pretty(&output)
            .unwrap_or_else(|_| json!({ "error": "Failed to serialize report" }).to_string())
    }

    fn format_hooks(&self, hooks: &[HookRow]) -> String {
        let output = json!({
            "hooks": hooks,
            "total": hooks.len(),
        });
        serde_json::to_string_pretty(&output)
            .unwrap_or_else(|_| json!({ "error": "Failed to serialize hooks" }).to_string())
    }

    fn format_manifest(&self, path: &Path, manifest: &Manifest) -> String {
        let output = json!({
            "path": path.display().to_string(),
            "valid": true,
            "groups": manifest.repos.len(),
            "hooks": manifest.entries().count(),
        });
        serde_json::to_string_pretty(&output)
            .unwrap_or_else(|_| json!({ "error": "Failed to serialize summary" }).to_string())
    }

    fn format_error(&self, error: &str) -> String {
        json!({ "error": error }).to_string()
    }
}

/// Table output formatter.
///
/// Formats data as human-readable status lines and tables with colors.
pub struct TableFormatter {
    use_color: bool,
    width: usize,
}

impl TableFormatter {
    /// Creates a new table formatter.
    ///
    /// # Arguments
    /// * `use_color` - Whether to use colored output
    /// * `width` - Width of hook status lines
    pub fn new(use_color: bool, width: usize) -> Self {
        Self { use_color, width }
    }

    fn status_line(&self, hook: &HookResult) -> String {
        let line = hook.status_line(self.width);
        let label = hook.outcome.label();
        let (head, tail) = line.split_at(line.len() - label.len());
        let color = match hook.outcome {
            Outcome::Passed => Color::Green,
            Outcome::Failed | Outcome::Error => Color::Red,
            Outcome::Skipped | Outcome::NoFiles => Color::Cyan,
            Outcome::NotRun => Color::Yellow,
        };
        format!(
            "{}{}",
            head,
            paint(tail, color, hook.outcome.is_failure(), self.use_color)
        )
    }
}

impl OutputFormatter for TableFormatter {
    fn format_report(&self, report: &RunReport) -> String {
        let mut output = String::new();
        for hook in &report.hooks {
            output.push_str(&self.status_line(hook));
            output.push('\n');
            for line in hook.details() {
                output.push_str(&line);
                output.push('\n');
            }
        }
        output
    }

    fn format_hooks(&self, hooks: &[HookRow]) -> String {
        if hooks.is_empty() {
            return "No hooks declared.".to_string();
        }

        let mut builder = Builder::default();
        builder.push_record(vec!["Id", "Name", "Provider", "Stages", "Status"]);

        for hook in hooks {
            let status = match &hook.unavailable {
                Some(_) => paint("unavailable", Color::Red, false, self.use_color),
                None => paint("ready", Color::Green, false, self.use_color),
            };
            builder.push_record(vec![
                hook.id.clone(),
                hook.name.clone(),
                hook.provider_label(),
                hook.stages_label(),
                status,
            ]);
        }

        let mut table = builder.build();
        table.with(Style::modern());

        table.to_string()
    }

    fn format_manifest(&self, path: &Path, manifest: &Manifest) -> String {
        format!(
            "{} is valid: {} provider group(s), {} hook(s)",
            path.display(),
            manifest.repos.len(),
            manifest.entries().count()
        )
    }

    fn format_error(&self, error: &str) -> String {
        format!("{}{}", paint("Error: ", Color::Red, true, self.use_color), error)
    }
}

/// Plain text output formatter.
///
/// Formats data as simple plain text without colors or tables.
pub struct PlainFormatter {
    width: usize,
}

impl PlainFormatter {
    /// Creates a plain formatter with the given status line width.
    pub fn new(width: usize) -> Self {
        Self { width }
    }
}

impl OutputFormatter for PlainFormatter {
    fn format_report(&self, report: &RunReport) -> String {
        let mut output = String::new();
        for line in report.render_lines(self.width) {
            output.push_str(&line);
            output.push('\n');
        }
        output
    }

    fn format_hooks(&self, hooks: &[HookRow]) -> String {
        if hooks.is_empty() {
            return "No hooks declared.".to_string();
        }

        let mut output = String::new();
        for hook in hooks {
            output.push_str(&format!(
                "{} {} {} {}\n",
                hook.id,
                hook.provider_label(),
                hook.stages_label(),
                if hook.unavailable.is_some() { "unavailable" } else { "ready" }
            ));
        }
        output
    }

    fn format_manifest(&self, path: &Path, manifest: &Manifest) -> String {
        format!(
            "{} valid {} {}",
            path.display(),
            manifest.repos.len(),
            manifest.entries().count()
        )
    }

    fn format_error(&self, error: &str) -> String {
        format!("Error: {}", error)
    }
}

/// Factory function to create an appropriate formatter.
///
/// # Arguments
/// * `format` - The desired output format
/// * `use_color` - Whether to use colored output (table only)
/// * `width` - Width of hook status lines
///
/// # Returns
/// A boxed OutputFormatter instance
pub fn create_formatter(
    format: OutputFormat,
    use_color: bool,
    width: usize,
) -> Box<dyn OutputFormatter> {
    match format {
        OutputFormat::Json => Box::new(JsonFormatter),
        OutputFormat::Table => Box::new(TableFormatter::new(use_color, width)),
        OutputFormat::Plain => Box::new(PlainFormatter::new(width)),
    }
}
