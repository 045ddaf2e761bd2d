//! CLI entrypoint module structure.
use anyhow::Result;
use serde::Serialize;

use crate::launcher::probe::{resolve_binary, RuntimeProbe, SystemProbe};
use crate::lib::errors::LaunchError;

pub mod args;
pub mod profile;

pub use args::{CliCommand, LauncherArgs, ParsedCommand};
pub use profile::{
    resolve_profile, LaunchProfile, DEFAULT_BASE_URL, DEFAULT_SCRIPT, PROJECT_DIR_ENV, RUNTIME_ENV,
};

/// Execute CLI command mode and return a user-facing result payload.
pub fn execute_cli_command(command: CliCommand, profile: LaunchProfile) -> Result<String> {
    match command {
        CliCommand::Doctor => doctor_report(profile, &SystemProbe),
    }
}

/// Outcome of the launch gates, reported without launching. The token is
/// only ever reported as present or absent.
#[derive(Debug, Serialize)]
struct DoctorReport {
    status: &'static str,
    runtime: Option<String>,
    probed_candidates: Vec<String>,
    project_dir: String,
    project_dir_accessible: bool,
    base_url: String,
    identity: String,
    credential_present: bool,
    missing: Vec<&'static str>,
    launch_args: Vec<String>,
}

fn doctor_report(profile: LaunchProfile, probe: &dyn RuntimeProbe) -> Result<String> {
    let config = profile.into_config();

    let runtime = resolve_binary(probe, &config.candidate_paths).ok();
    let missing = match config.ensure_complete() {
        Ok(()) => Vec::new(),
        Err(LaunchError::MissingConfiguration { fields }) => fields,
        Err(other) => return Err(other.into()),
    };
    let project_dir_accessible = config.working_directory.is_dir();
    let ready = runtime.is_some() && missing.is_empty() && project_dir_accessible;

    let report = DoctorReport {
        status: if ready { "ready" } else { "not_ready" },
        runtime: runtime.map(|path| path.to_string_lossy().into_owned()),
        probed_candidates: config
            .candidate_paths
            .iter()
            .map(|path| path.to_string_lossy().into_owned())
            .collect(),
        project_dir: config.working_directory.to_string_lossy().into_owned(),
        project_dir_accessible,
        base_url: config.base_url,
        identity: config.identity,
        credential_present: !config.credential.is_empty(),
        missing,
        launch_args: vec![
            "run".to_string(),
            "python".to_string(),
            config.script,
        ],
    };

    Ok(serde_json::to_string_pretty(&report)?)
}
