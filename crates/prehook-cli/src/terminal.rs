// Rust guideline compliant 2026-02-06

//! Terminal UI utilities for the prehook CLI.
//!
//! This module provides color support, terminal width detection,
//! and prefixed status messages.

use prehook_runner::DEFAULT_LINE_WIDTH;
use std::env;
use std::io::Write;
use termcolor::{Buffer, Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

/// Determines if colored output should be used.
///
/// Respects the NO_COLOR environment variable and terminal capabilities.
///
/// # Returns
/// `true` if colored output should be used, `false` otherwise
pub fn should_use_color() -> bool {
    if env::var("NO_COLOR").is_ok() {
        return false;
    }

    atty::is(atty::Stream::Stdout)
}

/// Gets the terminal width in columns.
///
/// # Returns
/// The terminal width, or 80 if it cannot be determined
pub fn get_terminal_width() -> usize {
    term_size::dimensions().map(|(w, _)| w).unwrap_or(80)
}

/// Width of a hook status line: the terminal width, capped at the
/// conventional 79 columns.
pub fn status_line_width() -> usize {
    get_terminal_width().saturating_sub(1).clamp(20, DEFAULT_LINE_WIDTH)
}

/// Wraps `text` in ANSI color codes when `use_color` is set.
pub fn paint(text: &str, color: Color, bold: bool, use_color: bool) -> String {
    if !use_color {
        return text.to_string();
    }
    let mut buffer = Buffer::ansi();
    let _ = buffer.set_color(ColorSpec::new().set_fg(Some(color)).set_bold(bold));
    let _ = write!(buffer, "{}", text);
    let _ = buffer.reset();
    String::from_utf8_lossy(buffer.as_slice()).into_owned()
}

/// Prints a status message with a colored prefix.
///
/// # Arguments
/// * `prefix` - The prefix text
/// * `prefix_color` - The color for the prefix
/// * `message` - The message text
pub fn print_status(prefix: &str, prefix_color: Color, message: &str) {
    let mut stderr = StandardStream::stderr(ColorChoice::Auto);
    let _ = stderr.set_color(ColorSpec::new().set_fg(Some(prefix_color)).set_bold(true));
    let _ = write!(stderr, "{}: ", prefix);
    let _ = stderr.reset();
    let _ = writeln!(stderr, "{}", message);
}

/// Prints a success message.
pub fn print_success(message: &str) {
    print_status("✓", Color::Green, message);
}

/// Prints a warning message.
pub fn print_warning(message: &str) {
    print_status("⚠", Color::Yellow, message);
}

/// Prints an info message.
pub fn print_info(message: &str) {
    print_status("ℹ", Color::Cyan, message);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_terminal_width_returns_positive() {
        assert!(get_terminal_width() > 0);
    }

    #[test]
    fn test_status_line_width_is_capped() {
        let width = status_line_width();
        assert!((20..=DEFAULT_LINE_WIDTH).contains(&width));
    }

    #[test]
    fn test_paint_without_color_is_identity() {
        assert_eq!(paint("Passed", Color::Green, true, false), "Passed");
    }

    #[test]
    fn test_paint_with_color_wraps_text() {
        let painted = paint("Failed", Color::Red, false, true);
        assert!(painted.contains("Failed"));
        assert!(painted.starts_with('\u{1b}'));
    }
}
