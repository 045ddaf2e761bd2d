//! Process image replacement.
use std::process::Command;

use crate::launcher::plan::LaunchPlan;
use crate::lib::errors::LaunchError;

/// Seam for the irreversible exec so tests can substitute a recorder.
pub trait ProcessImage {
    /// Hand the process over to the plan's program.
    ///
    /// The real image never returns on success; an `Err` means the handoff
    /// itself failed and the launcher is still alive.
    fn replace(&mut self, plan: &LaunchPlan) -> Result<(), LaunchError>;
}

/// Image that actually becomes the server process.
pub struct SystemImage;

impl ProcessImage for SystemImage {
    #[cfg(unix)]
    fn replace(&mut self, plan: &LaunchPlan) -> Result<(), LaunchError> {
        use std::os::unix::process::CommandExt;

        // exec only returns on failure.
        let source = command_for(plan).exec();
        Err(LaunchError::ExecFailed {
            program: plan.program.clone(),
            source,
        })
    }

    #[cfg(not(unix))]
    fn replace(&mut self, plan: &LaunchPlan) -> Result<(), LaunchError> {
        // No execve on this platform; run the child and forward its status.
        let status = command_for(plan)
            .status()
            .map_err(|source| LaunchError::ExecFailed {
                program: plan.program.clone(),
                source,
            })?;
        std::process::exit(status.code().unwrap_or(1));
    }
}

fn command_for(plan: &LaunchPlan) -> Command {
    let mut command = Command::new(&plan.program);
    command
        .args(&plan.args)
        .current_dir(&plan.working_dir)
        .envs(plan.env.iter().map(|(key, value)| (key.as_str(), value.as_str())));
    command
}
