// Rust guideline compliant 2026-02-06

//! Prehook CLI library.
//!
//! This library exposes the CLI modules for use in tests and external code.

pub mod commands;
pub mod logging;
pub mod output;
pub mod terminal;

pub use commands::Context;
pub use output::{create_formatter, HookRow, OutputFormatter};
pub use terminal::{get_terminal_width, should_use_color, status_line_width};
