//! Checker descriptors: everything tool-specific behind one contract.
//!
//! Each supported linter is a `Tool` implementation describing which file
//! extensions it covers, how to build its shell invocation for a directory,
//! how its raw output splits into records, and how one record parses into a
//! `Finding`. Adding a linter means adding one module implementing `Tool`
//! and registering it in `all`.

pub mod jshint;
pub mod pylint;

use crate::error::Result;
use crate::report::Finding;
use std::path::Path;

pub use jshint::JsHint;
pub use pylint::PyLint;

/// One external checker's invocation and output grammar.
///
/// Implementations are stateless values; running the same descriptor against
/// different directories does not interfere.
pub trait Tool: Send + Sync {
    /// Registry and reporting identity, e.g. `"pylint"`.
    fn name(&self) -> &'static str;

    /// Extensions this checker runs against, without the leading dot
    /// (e.g. `["py"]`). Must be non-empty.
    fn file_extensions(&self) -> &'static [&'static str];

    /// The single configuration dotfile recognized at the scan root.
    fn config_file(&self) -> &'static str;

    /// Build the shell invocation for `dir`: discover candidate files by
    /// extension, pipe them into the checker, and point the checker at its
    /// configuration file when one exists at the conventional location.
    /// Reads filesystem state (the config existence check) but mutates
    /// nothing.
    fn command(&self, dir: &Path) -> String;

    /// Split raw output into parseable records. The default is one record
    /// per line; checkers whose messages span lines override this.
    fn split_output<'a>(&self, dir: &Path, raw: &'a str) -> Vec<&'a str> {
        let _ = dir;
        raw.lines().collect()
    }

    /// Parse one record into a finding. `Ok(None)` means the record carries
    /// no finding (banner or summary text); `Err` means the record is
    /// malformed for this checker's grammar.
    fn parse_record(&self, dir: &Path, record: &str) -> Result<Option<Finding>>;
}

/// All registered checkers, in a fixed order.
pub fn all() -> Vec<Box<dyn Tool>> {
    vec![Box::new(JsHint), Box::new(PyLint)]
}

/// Look up a registered checker by name.
pub fn by_name(name: &str) -> Option<Box<dyn Tool>> {
    all().into_iter().find(|tool| tool.name() == name)
}

/// Build the discovery pipeline: `find <dir> -name "*.<ext>" [-o ...] |
/// xargs <invocation>`.
pub(crate) fn find_pipeline(dir: &Path, extensions: &[&str], invocation: &str) -> String {
    let names = extensions
        .iter()
        .map(|ext| format!("-name \"*.{ext}\""))
        .collect::<Vec<_>>()
        .join(" -o ");
    format!("find {} {} | xargs {}", dir.display(), names, invocation)
}

/// Path to the checker's config file under `dir`, if it exists.
pub(crate) fn config_path(dir: &Path, file: &str) -> Option<std::path::PathBuf> {
    let path = dir.join(file);
    path.exists().then_some(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_names_resolve() {
        for tool in all() {
            let found = by_name(tool.name()).expect("registered name resolves");
            assert_eq!(found.name(), tool.name());
        }
        assert!(by_name("no-such-checker").is_none());
    }

    #[test]
    fn test_registered_tools_declare_extensions() {
        for tool in all() {
            assert!(
                !tool.file_extensions().is_empty(),
                "{} must declare extensions",
                tool.name()
            );
        }
    }

    #[test]
    fn test_find_pipeline_joins_extensions() {
        let cmd = find_pipeline(Path::new("/repo"), &["js", "jsx"], "jshint");
        assert_eq!(
            cmd,
            "find /repo -name \"*.js\" -o -name \"*.jsx\" | xargs jshint"
        );
    }
}
