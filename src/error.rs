//! Error types shared across the crate.

use std::process::ExitStatus;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
/// Failures surfaced by checker invocation and output parsing.
pub enum Error {
    /// A checker declared no file extensions; nothing can be discovered
    /// for it, so the run is refused before any command executes.
    #[error("checker `{tool}` declares no file extensions")]
    NoExtensions { tool: &'static str },

    /// A requested checker name is not in the registry.
    #[error("unknown checker `{name}`")]
    UnknownTool { name: String },

    /// The shell for an external checker could not be spawned.
    #[error("failed to launch `{command}`: {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// An external checker exited in a failure shape: non-zero status with
    /// no stdout. Checkers report findings through non-zero exits, so a
    /// non-zero exit with output is not a failure.
    #[error("command `{command}` failed ({status}): {stderr}")]
    CommandFailed {
        command: String,
        status: ExitStatus,
        stderr: String,
    },

    /// A record from a checker did not match its expected field layout.
    /// This usually means the tool's output format changed.
    #[error("checker `{tool}` produced an unparseable record: `{record}`")]
    MalformedRecord { tool: &'static str, record: String },
}
