//! Launch profile resolution: CLI override → environment → built-in default.
use std::{env, path::PathBuf};

use anyhow::Result;

use crate::launcher::config::{
    Credential, LaunchConfig, JIRA_API_TOKEN_ENV, JIRA_EMAIL_ENV, JIRA_URL_ENV,
};
use crate::lib::paths::absolutize;

/// Deployment overrides this via `JIRA_URL`.
pub const DEFAULT_BASE_URL: &str = "https://example.atlassian.net";
/// Server script expected inside the project directory.
pub const DEFAULT_SCRIPT: &str = "jira_mcp.py";
pub const RUNTIME_ENV: &str = "JIRA_MCP_RUNTIME";
pub const PROJECT_DIR_ENV: &str = "JIRA_MCP_PROJECT_DIR";

/// Resolved launcher inputs, not yet validated.
#[derive(Debug, Clone)]
pub struct LaunchProfile {
    pub base_url: String,
    pub identity: String,
    pub credential: Credential,
    pub candidate_paths: Vec<PathBuf>,
    pub project_dir: PathBuf,
    pub script: String,
}

impl LaunchProfile {
    pub fn into_config(self) -> LaunchConfig {
        LaunchConfig {
            base_url: self.base_url,
            identity: self.identity,
            credential: self.credential,
            candidate_paths: self.candidate_paths,
            working_directory: self.project_dir,
            script: self.script,
        }
    }
}

/// Build a `LaunchProfile` from CLI overrides, environment variables, and
/// built-in defaults, in that order.
///
/// Email and token have no built-in default; a bare invocation is the
/// degraded profile that fails the validation gate instead of launching
/// with embedded credentials.
pub fn resolve_profile(
    runtime_override: Option<PathBuf>,
    project_dir_override: Option<PathBuf>,
    script_override: Option<String>,
) -> Result<LaunchProfile> {
    let candidate_paths = match runtime_override
        .or_else(|| env::var_os(RUNTIME_ENV).map(PathBuf::from))
    {
        Some(path) => vec![absolutize(path)?],
        None => default_candidate_paths(),
    };

    let project_dir = absolutize(
        project_dir_override
            .or_else(|| env::var_os(PROJECT_DIR_ENV).map(PathBuf::from))
            .unwrap_or_else(default_project_dir),
    )?;

    Ok(LaunchProfile {
        base_url: env_or(JIRA_URL_ENV, DEFAULT_BASE_URL),
        identity: env_or(JIRA_EMAIL_ENV, ""),
        credential: Credential::new(env_or(JIRA_API_TOKEN_ENV, "")),
        candidate_paths,
        project_dir,
        script: script_override.unwrap_or_else(|| DEFAULT_SCRIPT.to_string()),
    })
}

/// Priority-ordered locations where uv is commonly installed.
fn default_candidate_paths() -> Vec<PathBuf> {
    let mut paths = Vec::new();
    if let Some(home) = env::var_os("HOME") {
        paths.push(PathBuf::from(home).join(".local/bin/uv"));
    }
    paths.push(PathBuf::from("/opt/homebrew/bin/uv"));
    paths.push(PathBuf::from("/usr/local/bin/uv"));
    paths.push(PathBuf::from("/usr/bin/uv"));
    paths
}

fn default_project_dir() -> PathBuf {
    match env::var_os("HOME") {
        Some(home) => PathBuf::from(home).join("jira-mcp"),
        None => PathBuf::from("/opt/jira-mcp"),
    }
}

fn env_or(key: &str, default: &str) -> String {
    env::var(key)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
        .unwrap_or_else(|| default.to_string())
}
