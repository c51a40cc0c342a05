//! Configuration discovery and effective settings resolution.
//!
//! Lintfold reads `lintfold.toml|yaml|yml` from the scanned directory (or
//! closest ancestor) and merges it with CLI flags to produce an `Effective`
//! config. Defaults:
//! - `tools`: every registered checker
//! - `output`: `human`
//! - `check.files`: empty (no filename filter)
//!
//! Overrides precedence: CLI > config file > defaults.

use serde::Deserialize;
use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Default, Deserialize, Clone)]
/// Check-related configuration section under `[check]`.
pub struct CheckCfg {
    /// Root-relative filenames the report is restricted to.
    pub files: Option<Vec<String>>,
}

#[derive(Debug, Default, Deserialize, Clone)]
/// Root configuration loaded from `lintfold.toml|yaml`.
pub struct LintfoldConfig {
    pub tools: Option<Vec<String>>,
    pub output: Option<String>,
    pub check: Option<CheckCfg>,
}

#[derive(Debug, Clone)]
/// Fully-resolved configuration used by commands after applying precedence.
pub struct Effective {
    pub dir: PathBuf,
    pub tools: Vec<String>,
    pub output: String,
    pub files: BTreeSet<String>,
}

/// Walk upward from `start` to detect the directory lintfold treats as the
/// scan root.
///
/// Stops when a `lintfold.toml|yaml|yml` or a `.git` directory is found.
pub fn detect_root(start: &Path) -> PathBuf {
    let mut cur = start;
    loop {
        if cur.join("lintfold.toml").exists()
            || cur.join("lintfold.yaml").exists()
            || cur.join("lintfold.yml").exists()
        {
            return cur.to_path_buf();
        }
        if cur.join(".git").exists() {
            return cur.to_path_buf();
        }
        match cur.parent() {
            Some(p) => cur = p,
            None => return start.to_path_buf(),
        }
    }
}

/// Load `LintfoldConfig` from `lintfold.toml` or `lintfold.yaml|yml` if present.
pub fn load_config(root: &Path) -> Option<LintfoldConfig> {
    let toml_path = root.join("lintfold.toml");
    if toml_path.exists() {
        let s = fs::read_to_string(&toml_path).ok()?;
        let cfg: LintfoldConfig = toml::from_str(&s).ok()?;
        return Some(cfg);
    }
    for yml in ["lintfold.yaml", "lintfold.yml"] {
        let p = root.join(yml);
        if p.exists() {
            let s = fs::read_to_string(&p).ok()?;
            let cfg: LintfoldConfig = serde_yaml::from_str(&s).ok()?;
            return Some(cfg);
        }
    }
    None
}

/// Resolve `Effective` by merging CLI flags, discovered config, and defaults.
pub fn resolve_effective(
    cli_dir: Option<&str>,
    cli_tools: &[String],
    cli_files: &[String],
    cli_output: Option<&str>,
) -> Effective {
    let start = PathBuf::from(cli_dir.unwrap_or("."));
    // An explicit --dir is taken as-is; otherwise walk up for a config file
    let dir = if cli_dir.is_some() {
        start
    } else {
        detect_root(&start)
    };
    let cfg = load_config(&dir).unwrap_or_default();

    let tools = if !cli_tools.is_empty() {
        cli_tools.to_vec()
    } else {
        cfg.tools.unwrap_or_else(|| {
            crate::tools::all()
                .iter()
                .map(|t| t.name().to_string())
                .collect()
        })
    };

    let output = cli_output
        .map(|s| s.to_string())
        .or(cfg.output)
        .unwrap_or_else(|| "human".to_string());

    let files: BTreeSet<String> = if !cli_files.is_empty() {
        cli_files.iter().cloned().collect()
    } else {
        cfg.check
            .and_then(|c| c.files)
            .unwrap_or_default()
            .into_iter()
            .collect()
    };

    Effective {
        dir,
        tools,
        output,
        files,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::tempdir;

    #[test]
    fn test_detect_and_load_toml() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        let mut f = fs::File::create(root.join("lintfold.toml")).unwrap();
        writeln!(
            f,
            "{}",
            r#"
tools = ["pylint"]
output = "json"
[check]
files = ["mod.py"]
    "#
        )
        .unwrap();

        // Resolve using explicit dir to avoid global CWD races
        let eff = resolve_effective(root.to_str(), &[], &[], None);
        assert_eq!(eff.tools, vec!["pylint"]);
        assert_eq!(eff.output, "json");
        assert!(eff.files.contains("mod.py"));
    }

    #[test]
    fn test_load_yaml_and_defaults() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        let mut f = fs::File::create(root.join("lintfold.yaml")).unwrap();
        writeln!(
            f,
            "{}",
            r#"
output: human
            "#
        )
        .unwrap();

        let eff = resolve_effective(root.to_str(), &[], &[], None);
        assert_eq!(eff.output, "human");
        // Unset tools default to the full registry
        let registered: Vec<String> = crate::tools::all()
            .iter()
            .map(|t| t.name().to_string())
            .collect();
        assert_eq!(eff.tools, registered);
        assert!(eff.files.is_empty());
    }

    #[test]
    fn test_cli_precedence_over_config() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        let mut f = fs::File::create(root.join("lintfold.toml")).unwrap();
        writeln!(
            f,
            "{}",
            r#"
tools = ["pylint"]
output = "json"
            "#
        )
        .unwrap();

        let cli_tools = vec!["jshint".to_string()];
        let cli_files = vec!["src/app.js".to_string()];
        let eff = resolve_effective(root.to_str(), &cli_tools, &cli_files, Some("human"));
        assert_eq!(eff.tools, vec!["jshint"]);
        assert_eq!(eff.output, "human");
        assert!(eff.files.contains("src/app.js"));
    }

    #[test]
    fn test_missing_config_falls_back_to_defaults() {
        let dir = tempdir().unwrap();
        let eff = resolve_effective(dir.path().to_str(), &[], &[], None);
        assert_eq!(eff.output, "human");
        assert!(load_config(dir.path()).is_none());
    }

    #[test]
    fn test_detect_root_stops_at_git_dir() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        fs::create_dir_all(root.join(".git")).unwrap();
        let nested = root.join("src/deep");
        fs::create_dir_all(&nested).unwrap();
        assert_eq!(detect_root(&nested), root);
    }
}
