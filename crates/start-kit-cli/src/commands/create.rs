//! Implementation of `create-start-kit [PROJECT_NAME] [options]`.
//!
//! Responsibility: wire adapters into the core services, run option
//! resolution then scaffolding, and display the result. No business logic
//! lives here.

use std::sync::Arc;

use tracing::{info, instrument};

use start_kit_adapters::{LocalFilesystem, SilentProgress, SystemCommandRunner, builtin_catalog};
use start_kit_core::{
    application::{
        ApplicationError, OptionResolver, ScaffoldOutcome, ScaffoldReport, ScaffoldService,
        ports::ProgressReporter,
    },
    error::StartKitError,
};

use crate::{
    cli::Cli,
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
    progress::SpinnerProgress,
    prompt::{self, TerminalPrompter},
};

/// Execute the command.
///
/// Dispatch sequence:
/// 1. Build the catalog (built-ins plus configured templates)
/// 2. Resolve options, prompting for whatever the flags left out
/// 3. Scaffold in the current directory
/// 4. Print the completion report, or the cancellation notice
///
/// The "Creating project" line is printed by the spinner reporter once the
/// target directory is clear.
#[instrument(skip_all)]
pub fn execute(cli: Cli, config: AppConfig, output: OutputManager) -> CliResult<()> {
    print_welcome(&output)?;

    // 1. Catalog
    let catalog = Arc::new(
        builtin_catalog(config.templates.clone()).map_err(|e| CliError::Core(e.into()))?,
    );

    // 2. Options
    let prompter = TerminalPrompter::new();
    let resolver = OptionResolver::new(Arc::clone(&catalog))
        .with_default_project_name(config.defaults.project_name.clone());
    let options = resolver
        .resolve(cli.supplied_options(), &prompter)
        .map_err(core_error)?;

    // 3. Scaffold
    let cwd = std::env::current_dir().map_err(|e| CliError::IoError {
        message: "failed to read the current directory".into(),
        source: e,
    })?;

    let progress: Box<dyn ProgressReporter> = if output.is_quiet() {
        Box::new(SilentProgress)
    } else {
        Box::new(SpinnerProgress::new(output.clone()))
    };
    let service = ScaffoldService::new(
        Arc::clone(&catalog),
        Box::new(LocalFilesystem::new()),
        Box::new(SystemCommandRunner::new()),
        progress,
    );

    // 4. Report
    match service.scaffold(options, &cwd, &prompter).map_err(core_error)? {
        ScaffoldOutcome::Cancelled => {
            info!("Cancelled by user");
            output.warning("Operation cancelled.")?;
        }
        ScaffoldOutcome::Created(report) => {
            info!(path = %report.target_dir.display(), "Project created");
            print_report(&report, &output)?;
        }
    }

    Ok(())
}

/// Prompt failures in a build without prompts are a build problem, not a
/// user one.
fn core_error(err: StartKitError) -> CliError {
    match err {
        StartKitError::Application(ApplicationError::PromptFailed { .. })
            if !prompt::INTERACTIVE =>
        {
            CliError::FeatureNotAvailable {
                feature: "interactive",
            }
        }
        other => CliError::Core(other),
    }
}

// ── UI helpers ────────────────────────────────────────────────────────────────

fn print_welcome(out: &OutputManager) -> CliResult<()> {
    out.print("")?;
    out.header("\u{1f680} Welcome to Start-Kit Generator!")?;
    out.print("")?;
    Ok(())
}

fn print_report(report: &ScaffoldReport, out: &OutputManager) -> CliResult<()> {
    for warning in report.warnings() {
        out.warning(&warning.to_string())?;
        for suggestion in warning.suggestions() {
            out.warning(&suggestion)?;
        }
    }

    out.print("")?;
    out.success("Project created successfully!")?;
    out.print("")?;
    out.header("Next steps:")?;
    for command in report.next_steps.commands() {
        out.command(command)?;
    }
    out.print("")?;
    out.info("Happy coding!")?;
    Ok(())
}
