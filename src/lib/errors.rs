use std::{io, path::PathBuf};

use thiserror::Error;

/// Failures that can stop the launcher before the exec handoff.
///
/// Every variant is fatal and maps to exit status 1; there is nothing to
/// retry, the operator fixes the environment and re-runs the launcher.
#[derive(Debug, Error)]
pub enum LaunchError {
    /// No candidate path held the runtime binary.
    #[error("uv runtime not found; probed {candidates:?}. Install uv or pass --runtime <PATH>.")]
    BinaryNotFound { candidates: Vec<PathBuf> },
    /// One or more required configuration values were empty.
    #[error("missing required configuration: {}. Set the named environment variables before launching.", fields.join(", "))]
    MissingConfiguration { fields: Vec<&'static str> },
    /// The project directory could not be entered.
    #[error("cannot enter project directory {path}: {source}")]
    DirectoryAccess {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// The exec call itself failed; the launcher is still alive.
    #[error("failed to exec {program}: {source}")]
    ExecFailed {
        program: PathBuf,
        #[source]
        source: io::Error,
    },
}
