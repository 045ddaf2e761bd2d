//! Entry point for the Jira MCP launcher.
use std::process::ExitCode;

use clap::Parser;
use jira_mcp_launcher::{
    cli::{execute_cli_command, CliCommand, LauncherArgs, ParsedCommand},
    launcher::{
        exec::SystemImage,
        probe::SystemProbe,
        startup::{self, RuntimeExit},
    },
    lib::telemetry,
};

fn main() -> ExitCode {
    match bootstrap() {
        Ok(_) => ExitCode::SUCCESS,
        Err(exit) => exit.report(),
    }
}

fn bootstrap() -> Result<(), RuntimeExit> {
    telemetry::init_tracing().map_err(RuntimeExit::from_error)?;
    let args = LauncherArgs::parse();
    let command = args.into_command().map_err(RuntimeExit::from_error)?;

    match command {
        ParsedCommand::Launch(profile) => startup::launch(profile, &SystemProbe, &mut SystemImage),
        ParsedCommand::Doctor(profile) => {
            let message = execute_cli_command(CliCommand::Doctor, profile)
                .map_err(RuntimeExit::from_error)?;
            println!("{message}");
            Ok(())
        }
    }
}
