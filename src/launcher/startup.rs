use std::process::ExitCode;

use anyhow::Error;
use tracing::info;

use crate::{
    cli::LaunchProfile,
    launcher::{
        exec::ProcessImage,
        plan::LaunchPlan,
        probe::{resolve_binary, RuntimeProbe},
    },
    lib::telemetry::{emit_launch_summary, LaunchSummary},
};

/// Bundles a launcher error message with the process exit code.
#[derive(Debug)]
pub struct RuntimeExit {
    message: String,
    exit_code: ExitCode,
}

impl RuntimeExit {
    pub fn from_error(err: impl Into<Error>) -> Self {
        let err = err.into();
        Self {
            message: format!("{err:?}"),
            exit_code: ExitCode::FAILURE,
        }
    }

    /// Write the diagnostic to stderr and surrender the exit code.
    pub fn report(self) -> ExitCode {
        eprintln!("{}", self.message);
        self.exit_code
    }

    pub fn exit_code(&self) -> ExitCode {
        self.exit_code
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Run the gate sequence: probe the runtime, validate credentials, enter the
/// project directory, then hand the process over to the server.
///
/// Gates run strictly in order and every failure is terminal before the exec
/// step is reached.
pub fn launch(
    profile: LaunchProfile,
    probe: &dyn RuntimeProbe,
    image: &mut dyn ProcessImage,
) -> Result<(), RuntimeExit> {
    info!(target: "jira_mcp_launcher::startup", "Starting Jira MCP launcher");
    let config = profile.into_config();

    let runtime = resolve_binary(probe, &config.candidate_paths).map_err(RuntimeExit::from_error)?;
    config.ensure_complete().map_err(RuntimeExit::from_error)?;
    probe
        .enter_directory(&config.working_directory)
        .map_err(RuntimeExit::from_error)?;

    emit_launch_summary(&LaunchSummary {
        runtime: &runtime,
        working_dir: &config.working_directory,
        base_url: &config.base_url,
        identity: &config.identity,
        script: &config.script,
    });

    let plan = LaunchPlan::new(
        runtime,
        &config.script,
        config.child_env(),
        config.working_directory.clone(),
    );
    image.replace(&plan).map_err(RuntimeExit::from_error)
}
