//! CLI argument parsing via `clap`.

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "lintfold",
    version,
    about = "Run external style checkers and fold their output into one report",
    long_about = "Lintfold — a tiny CLI that runs third-party lint tools over a source tree and normalizes their output into one uniform report.\n\nConfiguration precedence: CLI > lintfold.toml > defaults.",
    after_help = "Examples:\n  lintfold check --dir path/to/project\n  lintfold check --tool pylint --file mod.py --output json\n  lintfold tools",
    arg_required_else_help = true
)]
/// Top-level CLI options and subcommands.
pub struct Cli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand)]
/// Supported subcommands for checking and introspection.
pub enum Commands {
    /// Show version
    #[command(
        about = "Show version",
        long_about = "Print the current lintfold version."
    )]
    Version,
    /// Run checkers and report findings
    #[command(
        about = "Run checkers over a directory",
        long_about = "Run the selected checkers over a directory and print the merged per-file, per-line report. Exits 1 when findings are reported.",
        after_help = "Examples:\n  lintfold check --dir path/to/project\n  lintfold check --tool jshint --tool pylint\n  lintfold check --file src/app.js --output json"
    )]
    Check {
        #[arg(long, help = "Directory to scan (default: current dir)")]
        dir: Option<String>,
        #[arg(long = "tool", help = "Checker to run (repeatable; default: all)")]
        tools: Vec<String>,
        #[arg(
            long = "file",
            help = "Restrict the report to this root-relative file (repeatable)"
        )]
        files: Vec<String>,
        #[arg(long, help = "Output mode: human|json (default: human)")]
        output: Option<String>,
    },
    /// List registered checkers
    #[command(
        about = "List registered checkers",
        long_about = "List each registered checker with its file extensions and configuration file convention."
    )]
    Tools,
}
