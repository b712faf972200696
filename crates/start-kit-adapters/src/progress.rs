//! Progress reporters that need no terminal.

use tracing::debug;

use start_kit_core::{
    application::{ports::ProgressReporter, report::StepOutcome},
    domain::WorkflowStep,
};

/// Sends step progress to the log only.
///
/// Used for `--quiet` runs and in tests.
#[derive(Debug, Clone, Copy, Default)]
pub struct SilentProgress;

impl ProgressReporter for SilentProgress {
    fn step_started(&self, step: WorkflowStep, message: &str) {
        debug!(step = %step, "{message}");
    }

    fn step_finished(&self, step: WorkflowStep, outcome: &StepOutcome) {
        match outcome {
            StepOutcome::Failed(err) => debug!(step = %step, error = %err, "step failed"),
            StepOutcome::Succeeded => debug!(step = %step, "step succeeded"),
            StepOutcome::Skipped => debug!(step = %step, "step skipped"),
        }
    }
}
