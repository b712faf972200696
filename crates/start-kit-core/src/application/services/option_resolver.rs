//! Option Resolver - turns flags plus answers into `ProjectOptions`.
//!
//! Resolution runs in two phases:
//! 1. **Gather**: start from what the command line supplied and ask the
//!    oracle for everything else, producing `RawOptions`.
//! 2. **Validate**: one pass over `RawOptions` that either yields complete
//!    `ProjectOptions` or every problem found.
//!
//! No filesystem or process access happens here.

use std::sync::Arc;

use tracing::{debug, instrument};

use crate::{
    application::{ApplicationError, ports::Prompter},
    domain::{
        DomainValidator as validator, PackageManager, ProjectName, ProjectOptions, RawOptions,
        SuppliedOptions, TemplateCatalog,
    },
    error::StartKitResult,
};

/// Suggested name when none is given on the command line.
pub const DEFAULT_PROJECT_NAME: &str = "my-project";

pub struct OptionResolver {
    catalog: Arc<TemplateCatalog>,
    default_project_name: String,
}

impl OptionResolver {
    pub fn new(catalog: Arc<TemplateCatalog>) -> Self {
        Self {
            catalog,
            default_project_name: DEFAULT_PROJECT_NAME.to_string(),
        }
    }

    /// Override the suggestion shown in the project-name prompt.
    pub fn with_default_project_name(mut self, name: impl Into<String>) -> Self {
        self.default_project_name = name.into();
        self
    }

    /// Gather then validate.
    #[instrument(skip_all)]
    pub fn resolve(
        &self,
        supplied: SuppliedOptions,
        prompter: &dyn Prompter,
    ) -> StartKitResult<ProjectOptions> {
        let raw = self.gather(supplied, prompter)?;
        let options = raw
            .validate()
            .map_err(|errors| ApplicationError::ResolutionFailed { errors })?;

        debug!(
            project = %options.project_name,
            template = %options.template_key,
            package_manager = %options.package_manager,
            install = options.install_dependencies,
            git = options.initialize_version_control,
            "Options resolved"
        );
        Ok(options)
    }

    /// Phase 1: fill every missing field, asking in a fixed order.
    pub fn gather(
        &self,
        supplied: SuppliedOptions,
        prompter: &dyn Prompter,
    ) -> StartKitResult<RawOptions> {
        let project_name = match supplied.project_name {
            Some(name) => name,
            None => self.ask_project_name(prompter)?,
        };

        // A supplied key is taken as-is; the scaffolder reports unknown keys.
        let template_key = match supplied.template_key {
            Some(key) => key,
            None => self.ask_template(prompter)?,
        };

        let package_manager = match supplied.package_manager {
            Some(name) => PackageManager::from_name(&name),
            None => ask_package_manager(prompter)?,
        };

        let install_dependencies = prompter
            .confirm("Install dependencies?", !supplied.skip_install)
            .map_err(ApplicationError::from)?;

        let initialize_version_control = prompter
            .confirm("Initialize git repository?", !supplied.skip_git)
            .map_err(ApplicationError::from)?;

        Ok(RawOptions {
            project_name: Some(project_name),
            template_key: Some(template_key),
            package_manager: Some(package_manager),
            install_dependencies: Some(install_dependencies),
            initialize_version_control: Some(initialize_version_control),
        })
    }

    /// Ask until the answer is a valid name.
    fn ask_project_name(&self, prompter: &dyn Prompter) -> StartKitResult<String> {
        loop {
            let answer = prompter
                .input(
                    "What is your project name?",
                    Some(self.default_project_name.as_str()),
                    &validator::project_name_prompt_check,
                )
                .map_err(ApplicationError::from)?;

            match ProjectName::check(&answer) {
                Ok(()) => return Ok(answer),
                Err(e) => debug!(error = %e, "Re-asking for project name"),
            }
        }
    }

    fn ask_template(&self, prompter: &dyn Prompter) -> StartKitResult<String> {
        let labels: Vec<String> = self.catalog.iter().map(|t| t.label()).collect();
        let index = prompter
            .select("Which template would you like to use?", &labels, 0)
            .map_err(ApplicationError::from)?;

        self.catalog
            .iter()
            .nth(index)
            .map(|t| t.key.clone())
            .ok_or_else(|| {
                ApplicationError::PromptFailed {
                    reason: format!("template choice {index} is out of range"),
                }
                .into()
            })
    }
}

fn ask_package_manager(prompter: &dyn Prompter) -> StartKitResult<PackageManager> {
    let names: Vec<String> = PackageManager::KNOWN
        .iter()
        .map(|pm| pm.name().to_string())
        .collect();
    let index = prompter
        .select("Which package manager would you like to use?", &names, 0)
        .map_err(ApplicationError::from)?;

    PackageManager::KNOWN
        .get(index)
        .cloned()
        .ok_or_else(|| {
            ApplicationError::PromptFailed {
                reason: format!("package manager choice {index} is out of range"),
            }
            .into()
        })
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::collections::VecDeque;

    use super::*;
    use crate::application::ports::PromptError;
    use crate::domain::{DomainError, TemplateDescriptor};
    use crate::error::StartKitError;

    /// Answers questions from a queue and records what was asked.
    #[derive(Default)]
    struct Answers {
        text: RefCell<VecDeque<String>>,
        choices: RefCell<VecDeque<usize>>,
        confirms: RefCell<VecDeque<bool>>,
        asked: RefCell<Vec<String>>,
        confirm_defaults: RefCell<Vec<bool>>,
    }

    impl Answers {
        fn answer_text(self, answer: &str) -> Self {
            self.text.borrow_mut().push_back(answer.into());
            self
        }
        fn answer_choice(self, index: usize) -> Self {
            self.choices.borrow_mut().push_back(index);
            self
        }
        fn answer_confirm(self, yes: bool) -> Self {
            self.confirms.borrow_mut().push_back(yes);
            self
        }
        fn asked(&self) -> Vec<String> {
            self.asked.borrow().clone()
        }
    }

    impl Prompter for Answers {
        fn input(
            &self,
            prompt: &str,
            _default: Option<&str>,
            _validate: &dyn Fn(&str) -> Result<(), String>,
        ) -> Result<String, PromptError> {
            self.asked.borrow_mut().push(prompt.into());
            self.text
                .borrow_mut()
                .pop_front()
                .ok_or_else(|| PromptError::new("no text answer"))
        }

        fn select(&self, prompt: &str, _items: &[String], _default: usize) -> Result<usize, PromptError> {
            self.asked.borrow_mut().push(prompt.into());
            self.choices
                .borrow_mut()
                .pop_front()
                .ok_or_else(|| PromptError::new("no choice answer"))
        }

        fn confirm(&self, prompt: &str, default: bool) -> Result<bool, PromptError> {
            self.asked.borrow_mut().push(prompt.into());
            self.confirm_defaults.borrow_mut().push(default);
            self.confirms
                .borrow_mut()
                .pop_front()
                .ok_or_else(|| PromptError::new("no confirm answer"))
        }
    }

    fn resolver() -> OptionResolver {
        let catalog = TemplateCatalog::new([
            TemplateDescriptor::new("start-kit", "Tanstack Start", "https://example.com/a", "A"),
            TemplateDescriptor::new("mob-kit", "Mobile Kit", "https://example.com/b", "B"),
        ])
        .unwrap();
        OptionResolver::new(Arc::new(catalog))
    }

    #[test]
    fn all_flags_supplied_only_asks_confirmations() {
        let answers = Answers::default().answer_confirm(false).answer_confirm(true);
        let supplied = SuppliedOptions {
            project_name: Some("demo".into()),
            template_key: Some("start-kit".into()),
            package_manager: Some("pnpm".into()),
            ..Default::default()
        };

        let options = resolver().resolve(supplied, &answers).unwrap();

        assert_eq!(
            answers.asked(),
            vec!["Install dependencies?", "Initialize git repository?"]
        );
        assert_eq!(options.project_name.as_str(), "demo");
        assert_eq!(options.package_manager, PackageManager::Pnpm);
        assert!(!options.install_dependencies);
        assert!(options.initialize_version_control);
    }

    #[test]
    fn nothing_supplied_asks_everything_in_order() {
        let answers = Answers::default()
            .answer_text("my-app")
            .answer_choice(1)
            .answer_choice(3)
            .answer_confirm(true)
            .answer_confirm(true);

        let options = resolver()
            .resolve(SuppliedOptions::default(), &answers)
            .unwrap();

        assert_eq!(
            answers.asked(),
            vec![
                "What is your project name?",
                "Which template would you like to use?",
                "Which package manager would you like to use?",
                "Install dependencies?",
                "Initialize git repository?",
            ]
        );
        assert_eq!(options.template_key, "mob-kit");
        assert_eq!(options.package_manager, PackageManager::Bun);
    }

    #[test]
    fn invalid_name_answer_is_asked_again() {
        let answers = Answers::default()
            .answer_text("bad name!")
            .answer_text("")
            .answer_text("good-name")
            .answer_choice(0)
            .answer_choice(0)
            .answer_confirm(true)
            .answer_confirm(true);

        let options = resolver()
            .resolve(SuppliedOptions::default(), &answers)
            .unwrap();

        assert_eq!(options.project_name.as_str(), "good-name");
        let name_prompts = answers
            .asked()
            .iter()
            .filter(|q| q.as_str() == "What is your project name?")
            .count();
        assert_eq!(name_prompts, 3);
    }

    #[test]
    fn skip_flags_flip_confirmation_defaults() {
        let answers = Answers::default().answer_confirm(false).answer_confirm(false);
        let supplied = SuppliedOptions {
            project_name: Some("demo".into()),
            template_key: Some("start-kit".into()),
            package_manager: Some("npm".into()),
            skip_install: true,
            skip_git: true,
        };

        resolver().resolve(supplied, &answers).unwrap();
        assert_eq!(*answers.confirm_defaults.borrow(), vec![false, false]);
    }

    #[test]
    fn confirmation_defaults_are_yes_without_flags() {
        let answers = Answers::default().answer_confirm(true).answer_confirm(true);
        let supplied = SuppliedOptions {
            project_name: Some("demo".into()),
            template_key: Some("start-kit".into()),
            package_manager: Some("npm".into()),
            ..Default::default()
        };

        resolver().resolve(supplied, &answers).unwrap();
        assert_eq!(*answers.confirm_defaults.borrow(), vec![true, true]);
    }

    #[test]
    fn unknown_template_flag_passes_resolution() {
        let answers = Answers::default().answer_confirm(true).answer_confirm(true);
        let supplied = SuppliedOptions {
            project_name: Some("demo".into()),
            template_key: Some("nope".into()),
            package_manager: Some("npm".into()),
            ..Default::default()
        };

        let options = resolver().resolve(supplied, &answers).unwrap();
        assert_eq!(options.template_key, "nope");
    }

    #[test]
    fn unknown_package_manager_flag_is_kept_verbatim() {
        let answers = Answers::default().answer_confirm(true).answer_confirm(true);
        let supplied = SuppliedOptions {
            project_name: Some("demo".into()),
            template_key: Some("start-kit".into()),
            package_manager: Some("deno".into()),
            ..Default::default()
        };

        let options = resolver().resolve(supplied, &answers).unwrap();
        assert_eq!(
            options.package_manager,
            PackageManager::Unrecognized("deno".into())
        );
    }

    #[test]
    fn invalid_positional_name_fails_resolution() {
        let answers = Answers::default().answer_confirm(true).answer_confirm(true);
        let supplied = SuppliedOptions {
            project_name: Some("../escape".into()),
            template_key: Some("start-kit".into()),
            package_manager: Some("npm".into()),
            ..Default::default()
        };

        let err = resolver().resolve(supplied, &answers).unwrap_err();
        match err {
            StartKitError::Application(ApplicationError::ResolutionFailed { errors }) => {
                assert!(matches!(errors[..], [DomainError::InvalidProjectName { .. }]));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn oracle_failure_propagates() {
        let answers = Answers::default();
        let err = resolver()
            .resolve(SuppliedOptions::default(), &answers)
            .unwrap_err();
        assert!(matches!(
            err,
            StartKitError::Application(ApplicationError::PromptFailed { .. })
        ));
    }

    #[test]
    fn out_of_range_choice_is_prompt_failure() {
        let answers = Answers::default().answer_text("demo").answer_choice(9);
        let err = resolver()
            .resolve(SuppliedOptions::default(), &answers)
            .unwrap_err();
        assert!(matches!(
            err,
            StartKitError::Application(ApplicationError::PromptFailed { .. })
        ));
    }

    #[test]
    fn configured_default_name_is_offered() {
        struct CaptureDefault(RefCell<Option<String>>);
        impl Prompter for CaptureDefault {
            fn input(
                &self,
                _prompt: &str,
                default: Option<&str>,
                _validate: &dyn Fn(&str) -> Result<(), String>,
            ) -> Result<String, PromptError> {
                *self.0.borrow_mut() = default.map(str::to_string);
                Err(PromptError::new("stop"))
            }
            fn select(&self, _: &str, _: &[String], _: usize) -> Result<usize, PromptError> {
                unreachable!()
            }
            fn confirm(&self, _: &str, _: bool) -> Result<bool, PromptError> {
                unreachable!()
            }
        }

        let capture = CaptureDefault(RefCell::new(None));
        let _ = resolver()
            .with_default_project_name("starter")
            .resolve(SuppliedOptions::default(), &capture);
        assert_eq!(capture.0.borrow().as_deref(), Some("starter"));
    }
}
