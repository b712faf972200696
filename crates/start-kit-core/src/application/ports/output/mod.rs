//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `start-kit-adapters` crate provides implementations; the CLI crate
//! adds the terminal-bound ones (dialoguer prompts, spinners).

use std::path::Path;

use thiserror::Error;

use crate::application::report::StepOutcome;
use crate::domain::{CommandLine, ProjectName, TemplateDescriptor, WorkflowStep};
use crate::error::StartKitResult;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `start_kit_adapters::filesystem::LocalFilesystem` (production)
/// - `start_kit_adapters::filesystem::MemoryFilesystem` (testing)
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem: Send + Sync {
    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;

    /// Remove a directory and all contents.
    fn remove_dir_all(&self, path: &Path) -> StartKitResult<()>;

    /// Read a UTF-8 file.
    fn read_to_string(&self, path: &Path) -> StartKitResult<String>;

    /// Write content to a file, replacing it.
    fn write_file(&self, path: &Path, content: &str) -> StartKitResult<()>;
}

/// Why an external command did not succeed.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CommandError {
    /// The program could not be started at all (not installed, not
    /// executable, bad working directory).
    #[error("could not run `{command}`: {reason}")]
    Spawn { command: String, reason: String },

    /// The program ran and exited unsuccessfully.
    #[error("`{command}` exited with {status}{}", stderr_suffix(.stderr))]
    Exit {
        command: String,
        status: String,
        /// Captured standard error, trimmed. May be empty.
        stderr: String,
    },
}

fn stderr_suffix(stderr: &str) -> String {
    if stderr.is_empty() {
        String::new()
    } else {
        format!(": {stderr}")
    }
}

/// Port for running external programs.
///
/// Every call blocks until the program exits. There is no timeout and no
/// retry.
///
/// Implemented by:
/// - `start_kit_adapters::process::SystemCommandRunner` (production)
/// - `start_kit_adapters::process::RecordingRunner` (testing)
#[cfg_attr(test, mockall::automock)]
pub trait CommandRunner: Send + Sync {
    fn run(&self, command: &CommandLine, cwd: &Path) -> Result<(), CommandError>;
}

/// The oracle could not produce an answer.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("{reason}")]
pub struct PromptError {
    pub reason: String,
}

impl PromptError {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

/// Port for interactive questions (the "oracle").
///
/// Calls block until answered. Implementations are free to re-ask on
/// their own, but callers still validate what comes back.
pub trait Prompter {
    /// Free-text answer. `validate` returns the message to show on a bad
    /// answer.
    fn input(
        &self,
        prompt: &str,
        default: Option<&str>,
        validate: &dyn Fn(&str) -> Result<(), String>,
    ) -> Result<String, PromptError>;

    /// Single choice; returns the index into `items`.
    fn select(&self, prompt: &str, items: &[String], default: usize) -> Result<usize, PromptError>;

    /// Yes/no question.
    fn confirm(&self, prompt: &str, default: bool) -> Result<bool, PromptError>;
}

/// Port for step-level progress display.
pub trait ProgressReporter {
    /// The target directory is clear and the first step is about to run.
    ///
    /// Not called when the run is cancelled or the template is unknown.
    fn scaffold_started(&self, _project: &ProjectName, _template: &TemplateDescriptor) {}

    /// A step is about to run. `message` is a human-readable description.
    fn step_started(&self, step: WorkflowStep, message: &str);

    /// A step finished (or was skipped).
    fn step_finished(&self, step: WorkflowStep, outcome: &StepOutcome);
}
