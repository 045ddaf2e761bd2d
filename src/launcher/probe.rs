use std::env;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::lib::errors::LaunchError;

/// Abstraction for filesystem access during launch preparation.
pub trait RuntimeProbe {
    /// Does this candidate path hold an existing file?
    fn binary_exists(&self, path: &Path) -> bool;
    /// Make `path` the process working directory.
    fn enter_directory(&self, path: &Path) -> Result<(), LaunchError>;
}

/// Probe that operates against the real environment.
pub struct SystemProbe;

impl RuntimeProbe for SystemProbe {
    fn binary_exists(&self, path: &Path) -> bool {
        path.is_file()
    }

    fn enter_directory(&self, path: &Path) -> Result<(), LaunchError> {
        env::set_current_dir(path).map_err(|source| LaunchError::DirectoryAccess {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Walk the candidate list in priority order. The first existing path wins
/// and later candidates are never consulted.
pub fn resolve_binary(
    probe: &dyn RuntimeProbe,
    candidates: &[PathBuf],
) -> Result<PathBuf, LaunchError> {
    for candidate in candidates {
        if probe.binary_exists(candidate) {
            info!(
                target: "jira_mcp_launcher::probe",
                runtime = %candidate.display(),
                "Found uv runtime"
            );
            return Ok(candidate.clone());
        }
        debug!(
            target: "jira_mcp_launcher::probe",
            candidate = %candidate.display(),
            "Candidate not present"
        );
    }
    Err(LaunchError::BinaryNotFound {
        candidates: candidates.to_vec(),
    })
}
