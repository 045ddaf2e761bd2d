//! Telemetry initialization and launch summary events.

use std::path::Path;

use anyhow::Result;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

/// Initialize `tracing` and send developer logs to stderr.
///
/// Stdout stays untouched so the downstream MCP server can own it for the
/// stdio protocol.
pub fn init_tracing() -> Result<()> {
    if tracing::dispatcher::has_been_set() {
        return Ok(());
    }

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt()
        .with_env_filter(env_filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|err| anyhow::anyhow!("failed to initialize tracing: {err}"))
}

/// Fields echoed to the diagnostic stream right before the exec handoff.
/// The API token is deliberately absent.
pub struct LaunchSummary<'a> {
    pub runtime: &'a Path,
    pub working_dir: &'a Path,
    pub base_url: &'a str,
    pub identity: &'a str,
    pub script: &'a str,
}

/// Emit the pre-exec summary to `tracing`.
pub fn emit_launch_summary(summary: &LaunchSummary<'_>) {
    info!(
        target: "jira_mcp_launcher::startup",
        runtime = %summary.runtime.display(),
        working_dir = %summary.working_dir.display(),
        base_url = summary.base_url,
        identity = summary.identity,
        script = summary.script,
        "Handing off to the Jira MCP server"
    );
}
