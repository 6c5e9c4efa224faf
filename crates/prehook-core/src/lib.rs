// Rust guideline compliant 2026-02-06

//! Prehook Core Library
//!
//! This crate provides the foundational components of the prehook runner:
//! - Manifest data model (groups, entries, stages, providers)
//! - Manifest parsing and structural validation
//! - File type identification
//! - Hook selection against a set of changed files
//! - Runner configuration
//! - Error types and result handling

pub mod config;
pub mod error;
pub mod identify;
pub mod manifest;
pub mod models;
pub mod selection;

pub use config::{Config, OutputFormat, CONFIG_DIR};
pub use error::{Error, Result};
pub use manifest::{load_manifest, parse_definitions, parse_manifest, DEFAULT_MANIFEST, DEFINITIONS_FILE};
pub use models::{HookEntry, HookGroup, Manifest, Provider, Stage, LOCAL_REPO};
pub use selection::{select_entries, Decision, FileFilter, FileSet, HookSelector, Selection};
