//! Output rendering for the check command.
//!
//! Supports `human` (default) and `json` outputs. The JSON form preserves
//! the report's file → line → messages nesting and adds a top-level summary.

use crate::report::Report;
use owo_colors::OwoColorize;
use serde_json::json;
use serde_json::Value as JsonVal;

fn use_colors(output: &str) -> bool {
    output != "json" && std::env::var_os("NO_COLOR").is_none()
}

/// Print a merged check report in the requested format.
pub fn print_check(report: &Report, output: &str) {
    match output {
        "json" => println!(
            "{}",
            serde_json::to_string_pretty(&compose_check_json(report)).unwrap()
        ),
        _ => {
            let color = use_colors(output);
            for (file, lines) in report.iter() {
                if color {
                    println!("{}", file.bold());
                } else {
                    println!("{file}");
                }
                for (line, messages) in lines {
                    for message in messages {
                        // Multi-line messages keep their embedded newlines
                        if color {
                            println!("  {} {} {}", "✖".red(), format!("{line}:").dimmed(), message);
                        } else {
                            println!("  ✖ {line}: {message}");
                        }
                    }
                }
            }
            let summary = format!(
                "— Summary — findings={} files={}",
                report.finding_count(),
                report.file_count()
            );
            if color {
                println!("{}", summary.bold());
            } else {
                println!("{summary}");
            }
        }
    }
}

/// Compose check JSON object (pure) for testing/snapshot purposes.
pub fn compose_check_json(report: &Report) -> JsonVal {
    json!({
        "files": serde_json::to_value(report).unwrap(),
        "summary": {
            "findings": report.finding_count(),
            "files": report.file_count(),
        }
    })
}
