//! Runs commands with `std::process::Command`.

use std::path::Path;
use std::process::{Command, Stdio};

use tracing::{debug, instrument};

use start_kit_core::{
    application::ports::{CommandError, CommandRunner},
    domain::CommandLine,
};

/// Production command runner.
///
/// Output is captured rather than streamed; standard error is attached to
/// the failure so the user sees why a command failed. Nothing goes through
/// a shell, so arguments are never re-split.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemCommandRunner;

impl SystemCommandRunner {
    pub fn new() -> Self {
        Self
    }
}

impl CommandRunner for SystemCommandRunner {
    #[instrument(skip_all, fields(command = %command, cwd = %cwd.display()))]
    fn run(&self, command: &CommandLine, cwd: &Path) -> Result<(), CommandError> {
        debug!("spawning");
        let output = Command::new(&command.program)
            .args(&command.args)
            .current_dir(cwd)
            .stdin(Stdio::null())
            .output()
            .map_err(|e| CommandError::Spawn {
                command: command.to_string(),
                reason: e.to_string(),
            })?;

        if !output.status.success() {
            return Err(CommandError::Exit {
                command: command.to_string(),
                status: output.status.to_string(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        debug!(status = %output.status, "finished");
        Ok(())
    }
}
