//! Workflow vocabulary: the steps a scaffold run goes through and the
//! guidance printed once it is done.

use std::fmt;

use crate::domain::value_objects::{PackageManager, ProjectName};

/// Side-effecting steps after the collision check, in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WorkflowStep {
    Retrieving,
    PatchingMetadata,
    Installing,
    InitializingVersionControl,
}

impl WorkflowStep {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Retrieving => "retrieving",
            Self::PatchingMetadata => "patching-metadata",
            Self::Installing => "installing",
            Self::InitializingVersionControl => "initializing-version-control",
        }
    }

    /// Fatal steps abort the run on failure; the rest are best-effort.
    pub const fn is_fatal(&self) -> bool {
        matches!(self, Self::Retrieving | Self::PatchingMetadata)
    }
}

impl fmt::Display for WorkflowStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The "next steps" block of the completion report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NextSteps {
    commands: Vec<String>,
}

impl NextSteps {
    /// `cd`, then the install command unless installation was requested,
    /// then the run command.
    pub fn for_project(
        name: &ProjectName,
        package_manager: &PackageManager,
        install_requested: bool,
    ) -> Self {
        let mut commands = vec![format!("cd {name}")];
        if !install_requested {
            commands.push(package_manager.install_command().to_string());
        }
        commands.push(package_manager.run_command().to_string());
        Self { commands }
    }

    pub fn commands(&self) -> &[String] {
        &self.commands
    }

    pub fn contains(&self, command: &str) -> bool {
        self.commands.iter().any(|c| c == command)
    }
}
