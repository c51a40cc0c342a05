//! Check driver: runs checkers over a directory and folds their output
//! into a report.
//!
//! `invoke` drives one checker end to end; `run_check` fans out over several
//! checkers and merges their independent reports afterwards.

use crate::error::{Error, Result};
use crate::exec::CommandRunner;
use crate::report::Report;
use crate::tools::Tool;
use rayon::prelude::*;
use std::collections::BTreeSet;
use std::path::Path;
use tracing::debug;

/// Run one checker over `dir` and fold its findings into a fresh report.
///
/// Steps: refuse a checker with no extensions, build its command, execute it
/// to completion, split the captured output into records, parse each record,
/// drop findings outside a non-empty `filter`, and append the rest in output
/// order. Execution and parse failures abort the call; a report is only
/// returned when every record was accounted for.
pub fn invoke(
    tool: &dyn Tool,
    runner: &dyn CommandRunner,
    dir: &Path,
    filter: &BTreeSet<String>,
) -> Result<Report> {
    if tool.file_extensions().is_empty() {
        return Err(Error::NoExtensions { tool: tool.name() });
    }
    let command = tool.command(dir);
    debug!(tool = tool.name(), %command, "running checker");
    let raw = runner.run(&command)?;
    let mut report = Report::new();
    for record in tool.split_output(dir, &raw) {
        let Some(finding) = tool.parse_record(dir, record)? else {
            continue;
        };
        // Filtering happens after parsing: the checker still ran over every
        // matching file, the report just surfaces the requested subset.
        if !filter.is_empty() && !filter.contains(&finding.file) {
            continue;
        }
        report.push(finding);
    }
    debug!(
        tool = tool.name(),
        files = report.file_count(),
        findings = report.finding_count(),
        "checker finished"
    );
    Ok(report)
}

/// Run several checkers over `dir` and merge their reports.
///
/// Each checker's invocation is fully independent, so they run in parallel;
/// the merge is a sequential associative fold in registry order once all of
/// them have finished. The first failure aborts the whole run.
pub fn run_check(
    tools: &[Box<dyn Tool>],
    runner: &dyn CommandRunner,
    dir: &Path,
    filter: &BTreeSet<String>,
) -> Result<Report> {
    let reports: Vec<Result<Report>> = tools
        .par_iter()
        .map(|tool| invoke(tool.as_ref(), runner, dir, filter))
        .collect();
    let mut merged = Report::new();
    for report in reports {
        merged.merge(report?);
    }
    Ok(merged)
}
