// Rust guideline compliant 2026-02-06

//! Tracing setup for the prehook CLI.

use anyhow::{Context, Result};
use std::fs::OpenOptions;
use std::path::Path;
use tracing::Level;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::fmt;

/// Installs the global tracing subscriber.
///
/// Events go to stderr in human-readable form, or as JSON lines to
/// `log_file` through a non-blocking writer.
///
/// # Returns
///
/// The writer guard when logging to a file; keep it alive until exit so
/// buffered events are flushed.
///
/// # Errors
///
/// Returns an error if the level is unknown or the log file cannot be opened.
pub fn init_tracing(log_level: &str, log_file: Option<&Path>) -> Result<Option<WorkerGuard>> {
    let level = parse_log_level(log_level)?;

    if let Some(path) = log_file {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("Failed to open log file {}", path.display()))?;
        let (writer, guard) = tracing_appender::non_blocking(file);
        let subscriber = fmt()
            .with_max_level(level)
            .with_target(false)
            .json()
            .with_writer(writer)
            .finish();
        let _ = tracing::subscriber::set_global_default(subscriber);
        return Ok(Some(guard));
    }

    let subscriber = fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();
    let _ = tracing::subscriber::set_global_default(subscriber);
    Ok(None)
}

/// Parses a log level name.
///
/// # Errors
///
/// Returns an error for names other than error, warn, info, debug and trace.
pub fn parse_log_level(level: &str) -> Result<Level> {
    match level.to_lowercase().as_str() {
        "error" => Ok(Level::ERROR),
        "warn" => Ok(Level::WARN),
        "info" => Ok(Level::INFO),
        "debug" => Ok(Level::DEBUG),
        "trace" => Ok(Level::TRACE),
        other => anyhow::bail!("Invalid log level '{}'", other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_log_level() {
        assert_eq!(parse_log_level("WARN").unwrap(), Level::WARN);
        assert_eq!(parse_log_level("debug").unwrap(), Level::DEBUG);
        assert!(parse_log_level("verbose").is_err());
    }
}
