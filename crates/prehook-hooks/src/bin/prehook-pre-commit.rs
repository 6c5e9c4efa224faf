// Rust guideline compliant 2026-02-06

//! CLI entry point for the prehook pre-commit hook.

use prehook_runner::DEFAULT_LINE_WIDTH;

fn main() -> anyhow::Result<()> {
    let repo_path = std::env::current_dir()?;
    let report = prehook_hooks::pre_commit_hook(&repo_path, None)?;
    for line in report.render_lines(DEFAULT_LINE_WIDTH) {
        println!("{}", line);
    }
    std::process::exit(report.exit_code());
}
