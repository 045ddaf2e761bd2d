//! The terminal launch action, modeled as a value so tests can intercept it.
use std::path::PathBuf;

/// Everything needed to replace this process with the server process.
///
/// The environment map is explicit rather than written into the launcher's
/// own environment table; the child receives exactly these entries on top of
/// the inherited environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchPlan {
    pub program: PathBuf,
    pub args: Vec<String>,
    pub env: Vec<(String, String)>,
    pub working_dir: PathBuf,
}

impl LaunchPlan {
    /// Build the `uv run python <script>` invocation.
    pub fn new(
        program: PathBuf,
        script: &str,
        env: Vec<(String, String)>,
        working_dir: PathBuf,
    ) -> Self {
        Self {
            program,
            args: vec!["run".to_string(), "python".to_string(), script.to_string()],
            env,
            working_dir,
        }
    }
}
