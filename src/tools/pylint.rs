//! PyLint: block-oriented Python checker.
//!
//! Records are colon-delimited `path:line:message`, but a message may span
//! several raw lines, so output splits on "newline followed by `<root>/`"
//! instead of on every newline. The scan root is rewritten to a relative
//! form when it is an absolute path under the current working directory, so
//! filenames come out root-relative however the scan was invoked.

use super::{config_path, find_pipeline, Tool};
use crate::error::{Error, Result};
use crate::report::Finding;
use std::path::{Path, PathBuf};

pub struct PyLint;

/// The root as it appears at the start of pylint's output lines.
fn scan_root_label(dir: &Path) -> PathBuf {
    if dir.is_absolute() {
        if let Ok(cwd) = std::env::current_dir() {
            if dir.starts_with(&cwd) {
                if let Some(relative) = pathdiff::diff_paths(dir, &cwd) {
                    return relative;
                }
            }
        }
    }
    dir.to_path_buf()
}

impl Tool for PyLint {
    fn name(&self) -> &'static str {
        "pylint"
    }

    fn file_extensions(&self) -> &'static [&'static str] {
        &["py"]
    }

    fn config_file(&self) -> &'static str {
        ".pylintrc"
    }

    fn command(&self, dir: &Path) -> String {
        let mut invocation = String::from("pylint --output-format=parseable -rn");
        if let Some(config) = config_path(dir, self.config_file()) {
            invocation.push_str(&format!(" --rcfile={}", config.display()));
        }
        find_pipeline(dir, self.file_extensions(), &invocation)
    }

    /// Split on record boundaries rather than newlines, so embedded message
    /// lines stay attached to their record. Known limit: a message body that
    /// itself begins a line with `<root>/` is indistinguishable from a
    /// boundary and will be split as a new record.
    fn split_output<'a>(&self, dir: &Path, raw: &'a str) -> Vec<&'a str> {
        let root = scan_root_label(dir);
        let prefix = format!("{}/", root.display());
        let boundary = format!("\n{prefix}");
        let mut records = Vec::new();
        for (index, block) in raw.split(boundary.as_str()).enumerate() {
            // The first block keeps its leading `<root>/`; later blocks lose
            // it to the boundary.
            let block = if index == 0 {
                block.strip_prefix(prefix.as_str()).unwrap_or(block)
            } else {
                block
            };
            let block = block.trim_end_matches('\n');
            if block.is_empty() {
                continue;
            }
            records.push(block);
        }
        records
    }

    fn parse_record(&self, _dir: &Path, record: &str) -> Result<Option<Finding>> {
        let malformed = || Error::MalformedRecord {
            tool: "pylint",
            record: record.to_string(),
        };
        let mut parts = record.splitn(3, ':');
        let (Some(file), Some(line), Some(message)) = (parts.next(), parts.next(), parts.next())
        else {
            return Err(malformed());
        };
        let line = line.parse().map_err(|_| malformed())?;
        Ok(Some(Finding {
            file: file.to_string(),
            line,
            message: message.to_string(),
        }))
    }
}
