// Rust guideline compliant 2026-02-06

//! Error types for pipeline config validation.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for pipeline validation.
pub type Result<T> = std::result::Result<T, PipelineError>;

/// Pipeline validation errors.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// A file could not be read.
    #[error("Failed to read {path}: {source}")]
    Io {
        /// File being read.
        path: PathBuf,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// A file is not valid JSON.
    #[error("The file {path} is not valid JSON: {message}")]
    InvalidJson {
        /// Offending file.
        path: PathBuf,
        /// Parser message with line and column.
        message: String,
    },

    /// A document matches neither pipeline schema.
    #[error("The file {path} does not match any pipeline schema ({count} violations)")]
    SchemaMismatch {
        /// Offending file.
        path: PathBuf,
        /// Number of violations found.
        count: usize,
    },

    /// The default search pattern is malformed.
    #[error("Invalid search pattern: {0}")]
    Pattern(#[from] glob::PatternError),
}
