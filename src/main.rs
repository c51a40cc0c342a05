//! Lintfold CLI binary entry point.
//! Delegates to modules for checking and prints results.

mod check;
mod cli;
mod config;
mod error;
mod exec;
mod output;
mod report;
mod tools;
mod utils;

use clap::Parser;
use cli::{Cli, Commands};
use exec::ShellRunner;
use tools::Tool;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();
    let cli = Cli::parse();
    match cli.cmd {
        Commands::Version => {
            println!("{}", env!("CARGO_PKG_VERSION"));
        }
        Commands::Tools => {
            for tool in tools::all() {
                println!(
                    "{}  extensions=[{}] config={}",
                    tool.name(),
                    tool.file_extensions().join(", "),
                    tool.config_file()
                );
            }
        }
        Commands::Check {
            dir,
            tools: tool_names,
            files,
            output,
        } => {
            let eff = config::resolve_effective(
                dir.as_deref(),
                &tool_names,
                &files,
                output.as_deref(),
            );
            // Friendly note if no lintfold config was found
            if config::load_config(&eff.dir).is_none() {
                eprintln!(
                    "{} {}",
                    crate::utils::note_prefix(),
                    "No lintfold.toml found; using defaults."
                );
            }
            // Friendly error before spawning anything against a bad directory
            if !eff.dir.is_dir() {
                eprintln!(
                    "{} {}",
                    crate::utils::error_prefix(),
                    format!("Not a directory: {}", eff.dir.to_string_lossy())
                );
                std::process::exit(2);
            }
            let mut selected: Vec<Box<dyn Tool>> = Vec::new();
            for name in &eff.tools {
                match tools::by_name(name) {
                    Some(tool) => selected.push(tool),
                    None => {
                        eprintln!(
                            "{} {}",
                            crate::utils::error_prefix(),
                            format!(
                                "Unknown checker `{}` (see `lintfold tools` for the registry)",
                                name
                            )
                        );
                        std::process::exit(2);
                    }
                }
            }
            match check::run_check(&selected, &ShellRunner, &eff.dir, &eff.files) {
                Ok(report) => {
                    output::print_check(&report, &eff.output);
                    if !report.is_empty() {
                        std::process::exit(1);
                    }
                }
                Err(err) => {
                    eprintln!("{} {}", crate::utils::error_prefix(), err);
                    std::process::exit(2);
                }
            }
        }
    }
}
