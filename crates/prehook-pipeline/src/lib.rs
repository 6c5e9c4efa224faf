// Rust guideline compliant 2026-02-06

//! Prehook Pipeline Config Validation
//!
//! This crate provides the local hook that validates cookiecutter pipeline
//! configuration documents:
//! - Field rules of the ML and Agentic pipeline kinds
//! - Per-document validation reporting every violation
//! - File discovery and the check loop behind `validate-pipeline-config`

pub mod check;
pub mod error;
pub mod schema;
pub mod validate;

pub use check::{check_files, default_files, CheckOutcome, DEFAULT_CONFIG_DIR};
pub use error::{PipelineError, Result};
pub use schema::{FieldRule, Kind, SchemaKind};
pub use validate::{validate_document, validate_file, ValidationReport, Violation};
