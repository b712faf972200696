//! A command runner that records calls instead of running them.

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use start_kit_core::{
    application::ports::{CommandError, CommandRunner},
    domain::CommandLine,
};

type Hook = dyn Fn(&CommandLine, &Path) -> Result<(), CommandError> + Send + Sync;

/// One call seen by a [`RecordingRunner`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedCall {
    pub command: CommandLine,
    pub cwd: PathBuf,
}

impl RecordedCall {
    /// The command as the user would type it.
    pub fn line(&self) -> String {
        self.command.to_string()
    }
}

/// Test double for [`CommandRunner`].
///
/// Every call is recorded. Programs listed with [`fail_program`] return an
/// exit failure; an optional hook can simulate side effects such as a clone
/// populating the target directory.
///
/// [`fail_program`]: RecordingRunner::fail_program
#[derive(Clone, Default)]
pub struct RecordingRunner {
    calls: Arc<Mutex<Vec<RecordedCall>>>,
    failing: Arc<Mutex<Vec<String>>>,
    hook: Option<Arc<Hook>>,
}

impl RecordingRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run `hook` for every call before deciding its result.
    pub fn with_hook<F>(mut self, hook: F) -> Self
    where
        F: Fn(&CommandLine, &Path) -> Result<(), CommandError> + Send + Sync + 'static,
    {
        self.hook = Some(Arc::new(hook));
        self
    }

    /// Make every call whose command line starts with `prefix` fail.
    pub fn fail_program(self, prefix: impl Into<String>) -> Self {
        if let Ok(mut failing) = self.failing.lock() {
            failing.push(prefix.into());
        }
        self
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().map(|c| c.clone()).unwrap_or_default()
    }

    /// Recorded command lines, in call order.
    pub fn lines(&self) -> Vec<String> {
        self.calls().iter().map(RecordedCall::line).collect()
    }
}

impl CommandRunner for RecordingRunner {
    fn run(&self, command: &CommandLine, cwd: &Path) -> Result<(), CommandError> {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(RecordedCall {
                command: command.clone(),
                cwd: cwd.to_path_buf(),
            });
        }

        let line = command.to_string();
        let fails = self
            .failing
            .lock()
            .map(|f| f.iter().any(|prefix| line.starts_with(prefix.as_str())))
            .unwrap_or(false);
        if fails {
            return Err(CommandError::Exit {
                command: line,
                status: "exit status: 1".into(),
                stderr: "simulated failure".into(),
            });
        }

        match &self.hook {
            Some(hook) => hook(command, cwd),
            None => Ok(()),
        }
    }
}
