//! What a scaffold run hands back to its caller.

use std::path::PathBuf;

use crate::application::ApplicationError;
use crate::domain::{NextSteps, PackageManager, ProjectName, TemplateDescriptor};

/// Result of one workflow step.
///
/// For best-effort steps this is only ever inspected to decide what to
/// report; the workflow continues regardless.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepOutcome {
    Succeeded,
    /// Not requested, or nothing to do.
    Skipped,
    Failed(ApplicationError),
}

impl StepOutcome {
    pub fn is_failed(&self) -> bool {
        matches!(self, Self::Failed(_))
    }

    pub fn error(&self) -> Option<&ApplicationError> {
        match self {
            Self::Failed(err) => Some(err),
            _ => None,
        }
    }
}

/// Everything the completion report needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaffoldReport {
    pub project_name: ProjectName,
    pub target_dir: PathBuf,
    pub template: TemplateDescriptor,
    pub package_manager: PackageManager,
    /// `Skipped` when no `package.json` was present.
    pub manifest: StepOutcome,
    pub install: StepOutcome,
    pub version_control: StepOutcome,
    pub next_steps: NextSteps,
}

impl ScaffoldReport {
    /// Failures from best-effort steps, in execution order.
    pub fn warnings(&self) -> impl Iterator<Item = &ApplicationError> {
        [&self.install, &self.version_control]
            .into_iter()
            .filter_map(StepOutcome::error)
    }
}

/// How a scaffold run ended, short of a fatal error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScaffoldOutcome {
    Created(ScaffoldReport),
    /// The user declined to overwrite an existing directory. Nothing changed.
    Cancelled,
}
