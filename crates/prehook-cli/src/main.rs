// Rust guideline compliant 2026-02-06

//! Prehook CLI Application
//!
//! Command-line interface for the prehook hook runner.

use clap::Parser;
use prehook_cli::commands::{self, hooks::HookAction, install::HookType, run::FileScope};
use prehook_cli::{create_formatter, logging, should_use_color, status_line_width, Context};
use prehook_core::{OutputFormat as CoreFormat, Stage};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "prehook",
    version,
    about = "Prehook: a Git pre-commit hook runner",
    long_about = "Prehook reads a YAML manifest of hook providers and runs their checks against the files a commit or push touches.",
    after_help = "Examples:\n  prehook install --hook-type pre-commit --hook-type pre-push\n  prehook run --all-files\n  prehook run check-json --files data/a.json\n  prehook list --format plain\n  SKIP=flake8 git commit\n"
)]
struct Cli {
    /// Enable JSON output
    #[arg(long, global = true)]
    json: bool,

    /// Output format
    #[arg(long, value_enum, global = true)]
    format: Option<OutputFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    /// Custom manifest path
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,

    /// Write JSON logs to this file instead of stderr
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Clone, clap::ValueEnum)]
enum OutputFormat {
    Json,
    Table,
    Plain,
}

#[derive(Debug, clap::Subcommand)]
enum Commands {
    /// Install Git hook scripts
    Install {
        /// Hook to install (repeatable)
        #[arg(long = "hook-type", value_enum, default_values_t = [HookType::PreCommit])]
        hook_types: Vec<HookType>,

        /// Replace existing hooks instead of keeping them as .legacy
        #[arg(long)]
        overwrite: bool,
    },

    /// Remove Git hook scripts written by prehook
    Uninstall,

    /// Run hooks by hand
    Run {
        /// Run only hooks with this id
        hook_id: Option<String>,

        /// Check every tracked file
        #[arg(long, conflicts_with = "files")]
        all_files: bool,

        /// Check these files
        #[arg(long, num_args = 1..)]
        files: Vec<String>,

        /// Stage whose hooks run
        #[arg(long, default_value = "pre-commit")]
        hook_stage: Stage,
    },

    /// List the hooks the manifest declares
    List,

    /// Remove cached provider checkouts
    Clean,

    /// Validate a manifest without running it
    ValidateManifest {
        /// Manifest to check
        path: Option<PathBuf>,
    },

    /// Run prehook Git hooks
    Hooks {
        #[command(subcommand)]
        action: HookAction,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let guard = logging::init_tracing(&cli.log_level, cli.log_file.as_deref())?;

    let cwd = std::env::current_dir()?;
    let ctx = Context::discover(&cwd, cli.config.as_deref())?;

    // Determine output format and color usage
    let use_color = !cli.no_color && ctx.config.color && should_use_color();
    let format = match cli.format {
        Some(OutputFormat::Json) => CoreFormat::Json,
        Some(OutputFormat::Table) => CoreFormat::Table,
        Some(OutputFormat::Plain) => CoreFormat::Plain,
        None => {
            if cli.json {
                CoreFormat::Json
            } else {
                ctx.config.output_format
            }
        }
    };
    let formatter = create_formatter(format, use_color, status_line_width());

    let outcome = match cli.command {
        Some(Commands::Install {
            hook_types,
            overwrite,
        }) => commands::install::execute(&ctx, &hook_types, overwrite).map(|()| true),
        Some(Commands::Uninstall) => commands::uninstall::execute(&ctx).map(|()| true),
        Some(Commands::Run {
            hook_id,
            all_files,
            files,
            hook_stage,
        }) => {
            let scope = if !files.is_empty() {
                FileScope::Given(files)
            } else if all_files {
                FileScope::All
            } else {
                FileScope::Staged
            };
            commands::run::execute(&ctx, hook_id, scope, hook_stage, formatter.as_ref())
        }
        Some(Commands::List) => commands::list::execute(&ctx, formatter.as_ref()).map(|()| true),
        Some(Commands::Clean) => commands::clean::execute(&ctx).map(|()| true),
        Some(Commands::ValidateManifest { path }) => {
            commands::validate_manifest::execute(&ctx, path.as_deref(), formatter.as_ref())
                .map(|()| true)
        }
        Some(Commands::Hooks { action }) => commands::hooks::execute(&ctx, action, formatter.as_ref()),
        None => {
            println!("Use --help for usage information");
            Ok(true)
        }
    };

    let code = match outcome {
        Ok(true) => 0,
        Ok(false) => 1,
        Err(err) => {
            eprintln!("{}", formatter.format_error(&format!("{:#}", err)));
            1
        }
    };

    // Flush buffered log events before exiting.
    drop(guard);
    std::process::exit(code);
}
