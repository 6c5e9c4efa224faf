// Rust guideline compliant 2026-02-06

//! CLI entry point for the prehook pre-push hook.
//!
//! Git passes the pushed refs on stdin.

use prehook_runner::DEFAULT_LINE_WIDTH;
use std::io::Read;

fn main() -> anyhow::Result<()> {
    let repo_path = std::env::current_dir()?;
    let mut input = String::new();
    std::io::stdin().read_to_string(&mut input)?;

    let report = prehook_hooks::pre_push_hook(&repo_path, &input, None)?;
    for line in report.render_lines(DEFAULT_LINE_WIDTH) {
        println!("{}", line);
    }
    std::process::exit(report.exit_code());
}
