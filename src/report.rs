//! Report structure folding checker findings by file and line.
//!
//! A `Report` maps root-relative filenames to line numbers to the ordered
//! messages reported there. Keys only exist for locations with at least one
//! message; message order is the order findings were folded in.

use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Eq)]
/// One reported issue: a root-relative file, a 1-based line, and the
/// checker's message text.
pub struct Finding {
    pub file: String,
    pub line: u32,
    pub message: String,
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
/// Findings aggregated per file and line.
pub struct Report {
    files: BTreeMap<String, BTreeMap<u32, Vec<String>>>,
}

impl Report {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a finding, creating the nested entries on first use.
    pub fn push(&mut self, finding: Finding) {
        self.files
            .entry(finding.file)
            .or_default()
            .entry(finding.line)
            .or_default()
            .push(finding.message);
    }

    /// Fold another report into this one, appending message sequences in
    /// the other report's order. The fold is associative, so per-checker
    /// reports can be merged in any grouping.
    pub fn merge(&mut self, other: Report) {
        for (file, lines) in other.files {
            let entry = self.files.entry(file).or_default();
            for (line, messages) in lines {
                entry.entry(line).or_default().extend(messages);
            }
        }
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Number of files with at least one finding.
    pub fn file_count(&self) -> usize {
        self.files.len()
    }

    /// Total number of messages across all files and lines.
    pub fn finding_count(&self) -> usize {
        self.files
            .values()
            .flat_map(|lines| lines.values())
            .map(Vec::len)
            .sum()
    }

    /// Messages recorded for a file/line pair, if any.
    pub fn messages(&self, file: &str, line: u32) -> Option<&[String]> {
        self.files
            .get(file)
            .and_then(|lines| lines.get(&line))
            .map(Vec::as_slice)
    }

    /// Iterate files and their per-line messages in filename order.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &BTreeMap<u32, Vec<String>>)> {
        self.files.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn finding(file: &str, line: u32, message: &str) -> Finding {
        Finding {
            file: file.into(),
            line,
            message: message.into(),
        }
    }

    #[test]
    fn test_push_preserves_message_order() {
        let mut report = Report::new();
        report.push(finding("a.py", 3, "first"));
        report.push(finding("a.py", 3, "second"));
        assert_eq!(
            report.messages("a.py", 3).unwrap(),
            &["first".to_string(), "second".to_string()]
        );
    }

    #[test]
    fn test_empty_report_has_no_keys() {
        let report = Report::new();
        assert!(report.is_empty());
        assert_eq!(report.file_count(), 0);
        assert_eq!(report.finding_count(), 0);
    }

    #[test]
    fn test_merge_appends_in_order() {
        let mut left = Report::new();
        left.push(finding("a.py", 3, "from left"));
        let mut right = Report::new();
        right.push(finding("a.py", 3, "from right"));
        right.push(finding("b.js", 1, "other file"));
        left.merge(right);
        assert_eq!(
            left.messages("a.py", 3).unwrap(),
            &["from left".to_string(), "from right".to_string()]
        );
        assert_eq!(left.messages("b.js", 1).unwrap(), &["other file".to_string()]);
        assert_eq!(left.file_count(), 2);
        assert_eq!(left.finding_count(), 3);
    }

    #[test]
    fn test_serialize_nests_file_line_messages() {
        let mut report = Report::new();
        report.push(finding("src/app.js", 12, "Missing semicolon"));
        let json = serde_json::to_value(&report).unwrap();
        // Line keys become strings under JSON object rules
        assert_eq!(json["src/app.js"]["12"][0], "Missing semicolon");
    }
}
