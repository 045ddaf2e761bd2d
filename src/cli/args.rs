//! CLI argument definitions and `LaunchProfile` construction.
use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use super::{resolve_profile, LaunchProfile};

/// Parsed command intent from CLI.
#[derive(Debug, Clone)]
pub enum ParsedCommand {
    Launch(LaunchProfile),
    Doctor(LaunchProfile),
}

/// Optional utility command mode.
#[derive(Debug, Clone, Subcommand)]
pub enum CliCommand {
    /// Check runtime, credentials, and project directory without launching.
    #[command(about = "Check runtime, credentials, and project directory without launching")]
    Doctor,
}

/// Command-line arguments.
#[derive(Debug, Clone, Parser)]
#[command(
    author,
    version,
    about = "Launcher for the Jira MCP server",
    long_about = None
)]
pub struct LauncherArgs {
    /// Explicit uv binary path (replaces the candidate path probe).
    #[arg(long = "runtime")]
    pub runtime_override: Option<PathBuf>,
    /// Project directory holding the server script (overrides JIRA_MCP_PROJECT_DIR).
    #[arg(long = "project-dir")]
    pub project_dir_override: Option<PathBuf>,
    /// Server script name inside the project directory.
    #[arg(long = "script")]
    pub script_override: Option<String>,
    /// Optional CLI command mode.
    #[command(subcommand)]
    pub command: Option<CliCommand>,
}

impl LauncherArgs {
    /// Parse CLI args into either launch mode or utility command mode.
    pub fn into_command(self) -> Result<ParsedCommand> {
        let LauncherArgs {
            runtime_override,
            project_dir_override,
            script_override,
            command,
        } = self;
        let profile = resolve_profile(runtime_override, project_dir_override, script_override)?;

        Ok(match command {
            Some(CliCommand::Doctor) => ParsedCommand::Doctor(profile),
            None => ParsedCommand::Launch(profile),
        })
    }
}
