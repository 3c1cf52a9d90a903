//! style-lint CLI tool.
//!
//! Usage:
//! ```bash
//! style-lint check [OPTIONS] [PATH]
//! style-lint check-tree <JSON>
//! style-lint dump-tree <FILE>
//! style-lint list-rules
//! style-lint init
//! ```

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use style_lint_core::Severity;
use tracing_subscriber::EnvFilter;

mod commands;
mod config_resolver;

/// Naming and ordering linter for TypeScript sources
#[derive(Parser)]
#[command(name = "style-lint")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to configuration file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run lint checks over TypeScript sources
    Check {
        /// Path to analyze (default: current directory)
        #[arg(default_value = ".")]
        path: PathBuf,

        /// Output format
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,

        /// Only run specific rules (comma-separated ids or codes)
        #[arg(long)]
        rules: Option<String>,

        /// Exclude patterns (can be specified multiple times)
        #[arg(short, long)]
        exclude: Vec<String>,

        /// Lowest severity that fails the run (overrides `fail_on`)
        #[arg(long)]
        fail_on: Option<Severity>,
    },

    /// Analyze a syntax tree supplied as JSON by an external parser
    CheckTree {
        /// JSON file holding the tree, or `-` for stdin
        input: PathBuf,

        /// Output format
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,

        /// Only run specific rules (comma-separated ids or codes)
        #[arg(long)]
        rules: Option<String>,

        /// Lowest severity that fails the run (overrides `fail_on`)
        #[arg(long)]
        fail_on: Option<Severity>,
    },

    /// Print the syntax tree lowered from a source file as JSON
    DumpTree {
        /// TypeScript source file
        file: PathBuf,
    },

    /// List available rules
    ListRules,

    /// Initialize configuration file
    Init {
        /// Overwrite existing config
        #[arg(long)]
        force: bool,
    },
}

/// Output format for lint results.
#[derive(Clone, Copy, Debug, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text output.
    #[default]
    Text,
    /// JSON output.
    Json,
    /// One-line-per-violation compact format.
    Compact,
    /// Rich diagnostics with source snippets.
    Pretty,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Check {
            path,
            format,
            rules,
            exclude,
            fail_on,
        } => {
            let source = config_resolver::resolve(&path, cli.config.as_deref());
            commands::check::run(&path, format, rules.as_deref(), exclude, fail_on, &source)
        }
        Commands::CheckTree {
            input,
            format,
            rules,
            fail_on,
        } => {
            let source = config_resolver::resolve(Path::new("."), cli.config.as_deref());
            commands::check_tree::run(&input, format, rules.as_deref(), fail_on, &source)
        }
        Commands::DumpTree { file } => commands::dump_tree::run(&file),
        Commands::ListRules => {
            commands::list_rules::run();
            Ok(())
        }
        Commands::Init { force } => commands::init::run(force),
    }
}
