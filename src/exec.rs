//! Shell command execution boundary.
//!
//! Checkers are driven through a single capability: run a shell command and
//! hand back its captured stdout once the process has exited. Tests and
//! embedders can substitute their own `CommandRunner`.

use crate::error::{Error, Result};
use std::process::Command;

/// Blocking command execution. Implementations run the given shell command
/// to completion and return its full stdout as one string.
pub trait CommandRunner: Send + Sync {
    fn run(&self, command: &str) -> Result<String>;
}

/// Runs commands through `sh -c`.
///
/// Checkers report findings via non-zero exit codes, so a non-zero exit is
/// only treated as a failure when the process produced no stdout at all
/// (a tool that never launched has nothing to parse). stderr is carried in
/// the error rather than interleaved into the parse stream.
pub struct ShellRunner;

impl CommandRunner for ShellRunner {
    fn run(&self, command: &str) -> Result<String> {
        let output = Command::new("sh")
            .arg("-c")
            .arg(command)
            .output()
            .map_err(|source| Error::Spawn {
                command: command.to_string(),
                source,
            })?;
        if !output.status.success() && output.stdout.is_empty() {
            return Err(Error::CommandFailed {
                command: command.to_string(),
                status: output.status,
                stderr: String::from_utf8_lossy(&output.stderr).trim_end().to_string(),
            });
        }
        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_captures_stdout() {
        let out = ShellRunner.run("echo hello").unwrap();
        assert_eq!(out, "hello\n");
    }

    #[test]
    fn test_nonzero_exit_with_output_is_success() {
        // Linter-shaped behavior: findings on stdout plus a non-zero exit
        let out = ShellRunner.run("echo finding; exit 2").unwrap();
        assert_eq!(out, "finding\n");
    }

    #[test]
    fn test_nonzero_exit_without_output_is_failure() {
        let err = ShellRunner.run("echo oops >&2; exit 3").unwrap_err();
        match err {
            Error::CommandFailed { status, stderr, .. } => {
                assert_eq!(status.code(), Some(3));
                assert_eq!(stderr, "oops");
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
