//! Scaffold Service - main application orchestrator.
//!
//! This service drives the whole side-effecting workflow for one set of
//! resolved options:
//! 1. Look up the template (fatal if unknown, before touching disk)
//! 2. Check for an existing target directory and ask before replacing it
//! 3. Clone the template and drop its `.git` (fatal on failure)
//! 4. Rename the package in `package.json`, if there is one
//! 5. Install dependencies (best-effort)
//! 6. Initialize a fresh git repository (best-effort)
//! 7. Build the next-steps report
//!
//! Steps run strictly in order; every external command blocks.

use std::path::Path;
use std::sync::Arc;

use tracing::{debug, info, instrument, warn};

use crate::{
    application::{
        ApplicationError,
        ports::{CommandRunner, Filesystem, ProgressReporter, Prompter},
        report::{ScaffoldOutcome, ScaffoldReport, StepOutcome},
    },
    domain::{
        CommandLine, MANIFEST_FILE, NextSteps, PackageManager, ProjectName, ProjectOptions,
        TemplateCatalog, TemplateDescriptor, WorkflowStep, rename_package,
    },
    error::{StartKitError, StartKitResult},
};

/// Directory removed from a freshly cloned template.
pub const VCS_METADATA_DIR: &str = ".git";

/// Message of the first commit in the new repository.
pub const INITIAL_COMMIT_MESSAGE: &str = "Initial commit";

/// Main scaffolding service.
pub struct ScaffoldService {
    catalog: Arc<TemplateCatalog>,
    filesystem: Box<dyn Filesystem>,
    runner: Box<dyn CommandRunner>,
    progress: Box<dyn ProgressReporter>,
}

impl ScaffoldService {
    /// Create a new scaffold service with the given adapters.
    pub fn new(
        catalog: Arc<TemplateCatalog>,
        filesystem: Box<dyn Filesystem>,
        runner: Box<dyn CommandRunner>,
        progress: Box<dyn ProgressReporter>,
    ) -> Self {
        Self {
            catalog,
            filesystem,
            runner,
            progress,
        }
    }

    /// Scaffold a new project under `cwd`.
    ///
    /// `prompter` is only used for the overwrite confirmation.
    #[instrument(
        skip_all,
        fields(
            project = %options.project_name,
            template = %options.template_key,
            cwd = %cwd.display()
        )
    )]
    pub fn scaffold(
        &self,
        options: ProjectOptions,
        cwd: &Path,
        prompter: &dyn Prompter,
    ) -> StartKitResult<ScaffoldOutcome> {
        // 1. Template lookup
        let template = self.catalog.resolve(&options.template_key)?.clone();
        info!(template = %template.display_name, "Template resolved");

        // 2. Target path
        let target_dir = cwd.join(options.project_name.as_str());

        // 3. Collision check
        if self.filesystem.exists(&target_dir) {
            let question = format!(
                "Directory \"{}\" already exists. Overwrite?",
                options.project_name
            );
            let overwrite = prompter
                .confirm(&question, false)
                .map_err(ApplicationError::from)?;
            if !overwrite {
                info!("Overwrite declined, nothing changed");
                return Ok(ScaffoldOutcome::Cancelled);
            }
            debug!(path = %target_dir.display(), "Removing existing directory");
            self.filesystem.remove_dir_all(&target_dir)?;
        }

        if !options.package_manager.is_recognized() {
            warn!(
                manager = %options.package_manager,
                "Unrecognized package manager, npm commands will be used"
            );
        }
        self.progress
            .scaffold_started(&options.project_name, &template);

        // 4. Retrieval
        self.retrieve(&template, cwd, &target_dir)?;

        // 5. Metadata patch
        let manifest = self.patch_manifest(&target_dir, &options.project_name)?;

        // 6. Dependency install
        let install = if options.install_dependencies {
            self.install(&options.package_manager, &target_dir)
        } else {
            self.skip(WorkflowStep::Installing)
        };

        // 7. Version-control init
        let version_control = if options.initialize_version_control {
            self.init_version_control(&target_dir)
        } else {
            self.skip(WorkflowStep::InitializingVersionControl)
        };

        // 8. Completion report
        let next_steps = NextSteps::for_project(
            &options.project_name,
            &options.package_manager,
            options.install_dependencies,
        );

        info!(path = %target_dir.display(), "Scaffold completed");
        Ok(ScaffoldOutcome::Created(ScaffoldReport {
            project_name: options.project_name,
            target_dir,
            template,
            package_manager: options.package_manager,
            manifest,
            install,
            version_control,
            next_steps,
        }))
    }

    // -------------------------------------------------------------------------
    // Steps
    // -------------------------------------------------------------------------

    /// Clone the template into `target_dir`, then strip its git metadata.
    fn retrieve(
        &self,
        template: &TemplateDescriptor,
        cwd: &Path,
        target_dir: &Path,
    ) -> StartKitResult<()> {
        let step = WorkflowStep::Retrieving;
        self.progress.step_started(step, "Downloading template");

        let clone = CommandLine::new(
            "git",
            [
                "clone".to_string(),
                template.source_location.clone(),
                target_dir.display().to_string(),
            ],
        );
        if let Err(e) = self.runner.run(&clone, cwd) {
            let err = ApplicationError::RetrievalFailed {
                repository: template.source_location.clone(),
                reason: e.to_string(),
            };
            self.progress
                .step_finished(step, &StepOutcome::Failed(err.clone()));
            return Err(err.into());
        }

        let metadata = target_dir.join(VCS_METADATA_DIR);
        if self.filesystem.exists(&metadata) {
            if let Err(e) = self.filesystem.remove_dir_all(&metadata) {
                self.progress.step_finished(
                    step,
                    &StepOutcome::Failed(ApplicationError::RetrievalFailed {
                        repository: template.source_location.clone(),
                        reason: e.to_string(),
                    }),
                );
                return Err(e);
            }
        }

        self.progress.step_finished(step, &StepOutcome::Succeeded);
        info!(repository = %template.source_location, "Template downloaded");
        Ok(())
    }

    /// Rewrite `package.json`'s name. A missing manifest is not an error.
    fn patch_manifest(&self, target_dir: &Path, name: &ProjectName) -> StartKitResult<StepOutcome> {
        let step = WorkflowStep::PatchingMetadata;
        let path = target_dir.join(MANIFEST_FILE);
        if !self.filesystem.exists(&path) {
            debug!(path = %path.display(), "No manifest, skipping rename");
            return Ok(self.skip(step));
        }

        self.progress
            .step_started(step, &format!("Updating {MANIFEST_FILE}"));
        let patched = self
            .filesystem
            .read_to_string(&path)
            .and_then(|content| rename_package(&content, name).map_err(Into::into))
            .and_then(|patched| self.filesystem.write_file(&path, &patched));

        match patched {
            Ok(()) => {
                self.progress.step_finished(step, &StepOutcome::Succeeded);
                debug!(name = %name, "Manifest renamed");
                Ok(StepOutcome::Succeeded)
            }
            Err(e) => {
                let reported = match &e {
                    StartKitError::Application(err) => err.clone(),
                    StartKitError::Domain(err) => ApplicationError::ManifestRejected {
                        path,
                        error: err.clone(),
                    },
                    StartKitError::Internal { message } => ApplicationError::FilesystemError {
                        path,
                        reason: message.clone(),
                    },
                };
                self.progress
                    .step_finished(step, &StepOutcome::Failed(reported));
                Err(e)
            }
        }
    }

    fn install(&self, package_manager: &PackageManager, target_dir: &Path) -> StepOutcome {
        let step = WorkflowStep::Installing;
        let command = package_manager.install_command();
        self.progress.step_started(
            step,
            &format!("Installing dependencies with {package_manager}"),
        );

        let outcome = match self.runner.run(&command, target_dir) {
            Ok(()) => {
                info!(command = %command, "Dependencies installed");
                StepOutcome::Succeeded
            }
            Err(e) => {
                let err = ApplicationError::InstallFailed {
                    manager: package_manager.name().to_string(),
                    command: command.to_string(),
                    reason: e.to_string(),
                    hint: package_manager.manual_install_hint(),
                };
                warn!(error = %err, "Dependency install failed, continuing");
                StepOutcome::Failed(err)
            }
        };

        self.progress.step_finished(step, &outcome);
        outcome
    }

    /// `git init`, `git add .`, `git commit`, stopping at the first failure.
    /// Earlier sub-steps are not rolled back.
    fn init_version_control(&self, target_dir: &Path) -> StepOutcome {
        let step = WorkflowStep::InitializingVersionControl;
        self.progress
            .step_started(step, "Initializing git repository");

        let commands = [
            CommandLine::new("git", ["init"]),
            CommandLine::new("git", ["add", "."]),
            CommandLine::new("git", ["commit", "-m", INITIAL_COMMIT_MESSAGE]),
        ];

        let mut outcome = StepOutcome::Succeeded;
        for command in &commands {
            if let Err(e) = self.runner.run(command, target_dir) {
                let err = ApplicationError::VersionControlInitFailed {
                    command: command.to_string(),
                    reason: e.to_string(),
                };
                warn!(error = %err, "Git initialization failed, continuing");
                outcome = StepOutcome::Failed(err);
                break;
            }
        }

        if !outcome.is_failed() {
            info!("Git repository initialized");
        }
        self.progress.step_finished(step, &outcome);
        outcome
    }

    fn skip(&self, step: WorkflowStep) -> StepOutcome {
        let outcome = StepOutcome::Skipped;
        self.progress.step_finished(step, &outcome);
        outcome
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::path::PathBuf;
    use std::rc::Rc;
    use std::sync::Mutex;

    use mockall::predicate::{always, eq};

    use super::*;
    use crate::application::ports::{
        CommandError, MockCommandRunner, MockFilesystem, PromptError,
    };
    use crate::domain::DomainError;

    // ── test doubles ─────────────────────────────────────────────────────────

    struct SilentProgress;

    impl ProgressReporter for SilentProgress {
        fn step_started(&self, _step: WorkflowStep, _message: &str) {}
        fn step_finished(&self, _step: WorkflowStep, _outcome: &StepOutcome) {}
    }

    /// Keeps every notification for inspection after the run.
    #[derive(Clone, Default)]
    struct RecordingProgress {
        events: Rc<RefCell<Vec<String>>>,
        outcomes: Rc<RefCell<Vec<(WorkflowStep, StepOutcome)>>>,
    }

    impl ProgressReporter for RecordingProgress {
        fn scaffold_started(&self, project: &ProjectName, template: &TemplateDescriptor) {
            self.events
                .borrow_mut()
                .push(format!("started {project} {}", template.key));
        }
        fn step_started(&self, step: WorkflowStep, _message: &str) {
            self.events.borrow_mut().push(format!("step {step}"));
        }
        fn step_finished(&self, step: WorkflowStep, outcome: &StepOutcome) {
            self.outcomes.borrow_mut().push((step, outcome.clone()));
        }
    }

    /// Answers every confirmation with a fixed value and counts the calls.
    struct Confirmer {
        answer: bool,
        asked: RefCell<Vec<String>>,
    }

    impl Confirmer {
        fn new(answer: bool) -> Self {
            Self {
                answer,
                asked: RefCell::new(Vec::new()),
            }
        }
    }

    impl Prompter for Confirmer {
        fn input(
            &self,
            _: &str,
            _: Option<&str>,
            _: &dyn Fn(&str) -> Result<(), String>,
        ) -> Result<String, PromptError> {
            Err(PromptError::new("unexpected input prompt"))
        }
        fn select(&self, _: &str, _: &[String], _: usize) -> Result<usize, PromptError> {
            Err(PromptError::new("unexpected select prompt"))
        }
        fn confirm(&self, prompt: &str, _default: bool) -> Result<bool, PromptError> {
            self.asked.borrow_mut().push(prompt.to_string());
            Ok(self.answer)
        }
    }

    fn catalog() -> Arc<TemplateCatalog> {
        Arc::new(
            TemplateCatalog::new([TemplateDescriptor::new(
                "start-kit",
                "Tanstack Start",
                "https://example.com/start-kit",
                "Tanstack Start, Vite, and Tailwind CSS",
            )])
            .unwrap(),
        )
    }

    fn options(template: &str, install: bool, git: bool) -> ProjectOptions {
        ProjectOptions {
            project_name: ProjectName::parse("demo").unwrap(),
            template_key: template.into(),
            package_manager: PackageManager::Pnpm,
            install_dependencies: install,
            initialize_version_control: git,
        }
    }

    fn cwd() -> PathBuf {
        PathBuf::from("/work")
    }

    fn service(fs: MockFilesystem, runner: MockCommandRunner) -> ScaffoldService {
        ScaffoldService::new(catalog(), Box::new(fs), Box::new(runner), Box::new(SilentProgress))
    }

    fn service_with_progress(
        fs: MockFilesystem,
        runner: MockCommandRunner,
        progress: RecordingProgress,
    ) -> ScaffoldService {
        ScaffoldService::new(catalog(), Box::new(fs), Box::new(runner), Box::new(progress))
    }

    /// Filesystem where nothing exists yet.
    fn empty_fs() -> MockFilesystem {
        let mut fs = MockFilesystem::new();
        fs.expect_exists().returning(|_| false);
        fs
    }

    fn recording_runner(log: Arc<Mutex<Vec<String>>>) -> MockCommandRunner {
        let mut runner = MockCommandRunner::new();
        runner.expect_run().returning(move |command, _| {
            log.lock().unwrap().push(command.to_string());
            Ok(())
        });
        runner
    }

    // ── tests ────────────────────────────────────────────────────────────────

    #[test]
    fn unknown_template_aborts_before_touching_disk() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists().never();
        fs.expect_remove_dir_all().never();
        let mut runner = MockCommandRunner::new();
        runner.expect_run().never();

        let err = service(fs, runner)
            .scaffold(options("nope", false, false), &cwd(), &Confirmer::new(true))
            .unwrap_err();

        assert!(matches!(
            err,
            StartKitError::Domain(DomainError::TemplateNotFound { .. })
        ));
    }

    #[test]
    fn declined_overwrite_cancels_without_changes() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists()
            .with(eq(Path::new("/work/demo")))
            .returning(|_| true);
        fs.expect_remove_dir_all().never();
        fs.expect_write_file().never();
        let mut runner = MockCommandRunner::new();
        runner.expect_run().never();
        let prompter = Confirmer::new(false);

        let outcome = service(fs, runner)
            .scaffold(options("start-kit", true, true), &cwd(), &prompter)
            .unwrap();

        assert_eq!(outcome, ScaffoldOutcome::Cancelled);
        assert_eq!(
            *prompter.asked.borrow(),
            vec!["Directory \"demo\" already exists. Overwrite?"]
        );
    }

    #[test]
    fn accepted_overwrite_removes_directory_before_clone() {
        let order = Arc::new(Mutex::new(Vec::<String>::new()));

        let mut fs = MockFilesystem::new();
        fs.expect_exists()
            .with(eq(Path::new("/work/demo")))
            .returning(|_| true);
        fs.expect_exists().returning(|_| false);
        let removed = Arc::clone(&order);
        fs.expect_remove_dir_all()
            .with(eq(Path::new("/work/demo")))
            .times(1)
            .returning(move |_| {
                removed.lock().unwrap().push("remove".into());
                Ok(())
            });

        let runner = recording_runner(Arc::clone(&order));

        service(fs, runner)
            .scaffold(options("start-kit", false, false), &cwd(), &Confirmer::new(true))
            .unwrap();

        let order = order.lock().unwrap();
        assert_eq!(order[0], "remove");
        assert!(order[1].starts_with("git clone https://example.com/start-kit"));
    }

    #[test]
    fn clone_failure_is_fatal() {
        let mut runner = MockCommandRunner::new();
        runner.expect_run().times(1).returning(|command, _| {
            Err(CommandError::Exit {
                command: command.to_string(),
                status: "exit status: 128".into(),
                stderr: "repository not found".into(),
            })
        });

        let err = service(empty_fs(), runner)
            .scaffold(options("start-kit", true, true), &cwd(), &Confirmer::new(true))
            .unwrap_err();

        match err {
            StartKitError::Application(ApplicationError::RetrievalFailed { repository, reason }) => {
                assert_eq!(repository, "https://example.com/start-kit");
                assert!(reason.contains("repository not found"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn git_metadata_is_removed_after_clone() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists()
            .with(eq(Path::new("/work/demo/.git")))
            .returning(|_| true);
        fs.expect_exists().returning(|_| false);
        fs.expect_remove_dir_all()
            .with(eq(Path::new("/work/demo/.git")))
            .times(1)
            .returning(|_| Ok(()));

        let log = Arc::new(Mutex::new(Vec::new()));
        service(fs, recording_runner(log))
            .scaffold(options("start-kit", false, false), &cwd(), &Confirmer::new(true))
            .unwrap();
    }

    #[test]
    fn manifest_name_is_rewritten() {
        let manifest = Path::new("/work/demo/package.json");
        let mut fs = MockFilesystem::new();
        fs.expect_exists()
            .with(eq(manifest))
            .returning(|_| true);
        fs.expect_exists().returning(|_| false);
        fs.expect_read_to_string()
            .with(eq(manifest))
            .returning(|_| Ok(r#"{"name":"old","version":"0.0.1"}"#.to_string()));
        fs.expect_write_file()
            .with(eq(manifest), always())
            .times(1)
            .returning(|_, content| {
                assert_eq!(
                    content,
                    "{\n  \"name\": \"demo\",\n  \"version\": \"0.0.1\"\n}\n"
                );
                Ok(())
            });

        let log = Arc::new(Mutex::new(Vec::new()));
        let outcome = service(fs, recording_runner(log))
            .scaffold(options("start-kit", false, false), &cwd(), &Confirmer::new(true))
            .unwrap();

        let ScaffoldOutcome::Created(report) = outcome else {
            panic!("expected a created project");
        };
        assert_eq!(report.manifest, StepOutcome::Succeeded);
    }

    #[test]
    fn missing_manifest_is_skipped() {
        let mut fs = empty_fs();
        fs.expect_read_to_string().never();
        fs.expect_write_file().never();

        let log = Arc::new(Mutex::new(Vec::new()));
        let outcome = service(fs, recording_runner(log))
            .scaffold(options("start-kit", false, false), &cwd(), &Confirmer::new(true))
            .unwrap();

        let ScaffoldOutcome::Created(report) = outcome else {
            panic!("expected a created project");
        };
        assert_eq!(report.manifest, StepOutcome::Skipped);
    }

    #[test]
    fn install_disabled_runs_no_install_and_reports_command() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let outcome = service(empty_fs(), recording_runner(Arc::clone(&log)))
            .scaffold(options("start-kit", false, false), &cwd(), &Confirmer::new(true))
            .unwrap();

        assert_eq!(log.lock().unwrap().len(), 1, "only the clone should run");
        let ScaffoldOutcome::Created(report) = outcome else {
            panic!("expected a created project");
        };
        assert_eq!(report.install, StepOutcome::Skipped);
        assert!(report.next_steps.contains("pnpm install"));
        assert!(report.next_steps.contains("pnpm dev"));
    }

    #[test]
    fn install_failure_does_not_stop_git_init() {
        let log = Arc::new(Mutex::new(Vec::<String>::new()));
        let seen = Arc::clone(&log);
        let mut runner = MockCommandRunner::new();
        runner.expect_run().returning(move |command, cwd| {
            seen.lock().unwrap().push(command.to_string());
            if command.program == "pnpm" {
                assert_eq!(cwd, Path::new("/work/demo"));
                return Err(CommandError::Exit {
                    command: command.to_string(),
                    status: "exit status: 1".into(),
                    stderr: String::new(),
                });
            }
            Ok(())
        });

        let outcome = service(empty_fs(), runner)
            .scaffold(options("start-kit", true, true), &cwd(), &Confirmer::new(true))
            .unwrap();

        let log = log.lock().unwrap();
        assert_eq!(
            log[1..],
            [
                "pnpm install",
                "git init",
                "git add .",
                "git commit -m \"Initial commit\"",
            ]
        );

        let ScaffoldOutcome::Created(report) = outcome else {
            panic!("expected a created project");
        };
        match &report.install {
            StepOutcome::Failed(ApplicationError::InstallFailed { hint, .. }) => {
                assert_eq!(hint, "pnpm install");
            }
            other => panic!("unexpected install outcome: {other:?}"),
        }
        assert_eq!(report.version_control, StepOutcome::Succeeded);
        assert!(!report.next_steps.contains("pnpm install"));
    }

    #[test]
    fn git_init_stops_at_first_failure() {
        let log = Arc::new(Mutex::new(Vec::<String>::new()));
        let seen = Arc::clone(&log);
        let mut runner = MockCommandRunner::new();
        runner.expect_run().returning(move |command, _| {
            seen.lock().unwrap().push(command.to_string());
            if command.args.first().map(String::as_str) == Some("add") {
                return Err(CommandError::Spawn {
                    command: command.to_string(),
                    reason: "boom".into(),
                });
            }
            Ok(())
        });

        let outcome = service(empty_fs(), runner)
            .scaffold(options("start-kit", false, true), &cwd(), &Confirmer::new(true))
            .unwrap();

        assert!(!log.lock().unwrap().iter().any(|c| c.starts_with("git commit")));
        let ScaffoldOutcome::Created(report) = outcome else {
            panic!("expected a created project");
        };
        assert!(matches!(
            report.version_control,
            StepOutcome::Failed(ApplicationError::VersionControlInitFailed { .. })
        ));
        assert_eq!(report.warnings().count(), 1);
    }

    #[test]
    fn commands_run_in_target_directory() {
        let dirs = Arc::new(Mutex::new(Vec::<PathBuf>::new()));
        let seen = Arc::clone(&dirs);
        let mut runner = MockCommandRunner::new();
        runner.expect_run().returning(move |_, cwd| {
            seen.lock().unwrap().push(cwd.to_path_buf());
            Ok(())
        });

        service(empty_fs(), runner)
            .scaffold(options("start-kit", true, true), &cwd(), &Confirmer::new(true))
            .unwrap();

        let dirs = dirs.lock().unwrap();
        assert_eq!(dirs[0], PathBuf::from("/work"));
        assert!(dirs[1..].iter().all(|d| d == Path::new("/work/demo")));
        assert_eq!(dirs.len(), 5);
    }

    #[test]
    fn start_is_announced_after_collision_check_and_before_clone() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists()
            .with(eq(Path::new("/work/demo")))
            .returning(|_| true);
        fs.expect_exists().returning(|_| false);
        fs.expect_remove_dir_all().returning(|_| Ok(()));
        let progress = RecordingProgress::default();
        let log = Arc::new(Mutex::new(Vec::new()));

        service_with_progress(fs, recording_runner(log), progress.clone())
            .scaffold(options("start-kit", false, false), &cwd(), &Confirmer::new(true))
            .unwrap();

        let events = progress.events.borrow();
        assert_eq!(events[0], "started demo start-kit");
        assert_eq!(events[1], format!("step {}", WorkflowStep::Retrieving));
    }

    #[test]
    fn cancelled_run_is_never_announced() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists().returning(|_| true);
        let mut runner = MockCommandRunner::new();
        runner.expect_run().never();
        let progress = RecordingProgress::default();

        let outcome = service_with_progress(fs, runner, progress.clone())
            .scaffold(options("start-kit", true, true), &cwd(), &Confirmer::new(false))
            .unwrap();

        assert_eq!(outcome, ScaffoldOutcome::Cancelled);
        assert!(progress.events.borrow().is_empty());
        assert!(progress.outcomes.borrow().is_empty());
    }

    #[test]
    fn invalid_manifest_is_reported_with_its_cause() {
        let manifest = Path::new("/work/demo/package.json");
        let mut fs = MockFilesystem::new();
        fs.expect_exists()
            .with(eq(manifest))
            .returning(|_| true);
        fs.expect_exists().returning(|_| false);
        fs.expect_read_to_string()
            .with(eq(manifest))
            .returning(|_| Ok("[1, 2]".to_string()));
        fs.expect_write_file().never();
        let progress = RecordingProgress::default();
        let log = Arc::new(Mutex::new(Vec::new()));

        let err = service_with_progress(fs, recording_runner(log), progress.clone())
            .scaffold(options("start-kit", true, true), &cwd(), &Confirmer::new(true))
            .unwrap_err();

        assert!(matches!(
            err,
            StartKitError::Domain(DomainError::InvalidManifest { .. })
        ));
        let outcomes = progress.outcomes.borrow();
        let (step, outcome) = outcomes.last().unwrap();
        assert_eq!(*step, WorkflowStep::PatchingMetadata);
        match outcome {
            StepOutcome::Failed(ApplicationError::ManifestRejected { path, error }) => {
                assert_eq!(path, manifest);
                assert!(matches!(error, DomainError::InvalidManifest { .. }));
            }
            other => panic!("unexpected manifest outcome: {other:?}"),
        }
    }
}
