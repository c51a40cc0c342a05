//! JSHint: line-oriented JavaScript checker.
//!
//! Output lines look like `<path>: line <N>, col <M>, <message>`, with the
//! path rooted at the scanned directory. Lines that do not match (banners,
//! summaries, blank lines) carry no finding.

use super::{config_path, find_pipeline, Tool};
use crate::error::Result;
use crate::report::Finding;
use once_cell::sync::Lazy;
use regex::Regex;
use std::path::Path;

static RESPONSE_FORMAT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?P<filename>.*): line (?P<line_number>\d+), col \d+, (?P<message>.*)$")
        .expect("jshint response pattern")
});

pub struct JsHint;

impl Tool for JsHint {
    fn name(&self) -> &'static str {
        "jshint"
    }

    fn file_extensions(&self) -> &'static [&'static str] {
        &["js"]
    }

    fn config_file(&self) -> &'static str {
        ".jshintrc"
    }

    fn command(&self, dir: &Path) -> String {
        let mut invocation = String::from("jshint");
        if let Some(config) = config_path(dir, self.config_file()) {
            invocation.push_str(&format!(" --config={}", config.display()));
        }
        find_pipeline(dir, self.file_extensions(), &invocation)
    }

    fn parse_record(&self, dir: &Path, record: &str) -> Result<Option<Finding>> {
        // One leading `<dir>/` to strip so filenames come out root-relative
        let prefix = format!("{}/", dir.display());
        let record = record.strip_prefix(&prefix).unwrap_or(record);
        let Some(caps) = RESPONSE_FORMAT.captures(record) else {
            return Ok(None);
        };
        let line = caps["line_number"].parse().expect("digits-only capture");
        Ok(Some(Finding {
            file: caps["filename"].to_string(),
            line,
            message: caps["message"].to_string(),
        }))
    }
}
