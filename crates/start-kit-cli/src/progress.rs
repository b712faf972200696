//! Spinner rendering of workflow steps.

use std::cell::RefCell;
use std::io;
use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};
use owo_colors::OwoColorize;

use tracing::debug;

use start_kit_core::{
    application::{ports::ProgressReporter, report::StepOutcome},
    domain::{ProjectName, TemplateDescriptor, WorkflowStep},
};

use crate::output::OutputManager;

/// One spinner per running step, drawn on stderr.
///
/// indicatif hides the spinner when stderr is not a terminal, so piped runs
/// only see the final lines printed by the command.
pub struct SpinnerProgress {
    current: RefCell<Option<ProgressBar>>,
    output: OutputManager,
    color: bool,
}

impl SpinnerProgress {
    pub fn new(output: OutputManager) -> Self {
        let color = output.supports_color();
        Self {
            current: RefCell::new(None),
            output,
            color,
        }
    }

    fn print_banner(&self, project: &ProjectName, template: &TemplateDescriptor) -> io::Result<()> {
        self.output.print("")?;
        self.output.header(&format!(
            "Creating project \"{project}\" using {}...",
            template.display_name
        ))?;
        self.output.print("")
    }

    fn style() -> ProgressStyle {
        ProgressStyle::with_template("{spinner:.green} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
    }

    /// `✓` on success, `✗` for a fatal failure, `⚠` for a best-effort one.
    fn mark(&self, step: WorkflowStep, ok: bool) -> String {
        let plain = match (ok, step.is_fatal()) {
            (true, _) => "\u{2713}",
            (false, true) => "\u{2717}",
            (false, false) => "\u{26a0}",
        };
        if !self.color {
            return plain.to_string();
        }
        match (ok, step.is_fatal()) {
            (true, _) => plain.green().bold().to_string(),
            (false, true) => plain.red().bold().to_string(),
            (false, false) => plain.yellow().bold().to_string(),
        }
    }
}

impl ProgressReporter for SpinnerProgress {
    fn scaffold_started(&self, project: &ProjectName, template: &TemplateDescriptor) {
        if let Err(e) = self.print_banner(project, template) {
            debug!(error = %e, "Could not print the banner");
        }
    }

    fn step_started(&self, _step: WorkflowStep, message: &str) {
        let bar = ProgressBar::new_spinner();
        bar.set_style(Self::style());
        bar.set_message(format!("{message}..."));
        bar.enable_steady_tick(Duration::from_millis(80));
        if let Some(previous) = self.current.replace(Some(bar)) {
            previous.finish_and_clear();
        }
    }

    fn step_finished(&self, step: WorkflowStep, outcome: &StepOutcome) {
        let Some(bar) = self.current.take() else {
            return;
        };
        match outcome {
            StepOutcome::Succeeded => {
                bar.finish_with_message(format!("{} {}", self.mark(step, true), done_message(step)));
            }
            StepOutcome::Failed(_) => {
                bar.abandon_with_message(format!("{} {}", self.mark(step, false), failed_message(step)));
            }
            StepOutcome::Skipped => bar.finish_and_clear(),
        }
    }
}

fn done_message(step: WorkflowStep) -> &'static str {
    match step {
        WorkflowStep::Retrieving => "Template downloaded successfully",
        WorkflowStep::PatchingMetadata => "package.json updated",
        WorkflowStep::Installing => "Dependencies installed successfully",
        WorkflowStep::InitializingVersionControl => "Git repository initialized",
    }
}

fn failed_message(step: WorkflowStep) -> &'static str {
    match step {
        WorkflowStep::Retrieving => "Failed to download template",
        WorkflowStep::PatchingMetadata => "Failed to update package.json",
        WorkflowStep::Installing => "Failed to install dependencies",
        WorkflowStep::InitializingVersionControl => "Failed to initialize git repository",
    }
}
