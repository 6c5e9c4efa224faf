// Rust guideline compliant 2026-02-06

//! Splitting of `entry` strings into argument vectors.

/// Splits `line` into words using POSIX shell quoting rules.
///
/// No expansion of any kind is performed.
///
/// # Errors
///
/// Returns a description of the problem if a quote is left open or the line
/// ends in a dangling backslash.
pub fn split_command(line: &str) -> Result<Vec<String>, String> {
    shlex::split(line).ok_or_else(|| "unbalanced quoting in entry".to_string())
}
