//! Terminal prompting.
//!
//! With the `interactive` feature (default) questions go through dialoguer.
//! Without it every question fails, and the command maps that failure to
//! [`CliError::FeatureNotAvailable`](crate::error::CliError).

use start_kit_core::application::ports::{PromptError, Prompter};

/// Whether this build can ask questions at all.
pub const INTERACTIVE: bool = cfg!(feature = "interactive");

#[cfg(feature = "interactive")]
pub use dialoguer_prompter::DialoguerPrompter as TerminalPrompter;

#[cfg(not(feature = "interactive"))]
pub use unavailable::UnavailablePrompter as TerminalPrompter;

#[cfg(feature = "interactive")]
mod dialoguer_prompter {
    use dialoguer::{Confirm, Input, Select, theme::ColorfulTheme};

    use super::*;

    /// Prompts on stderr with dialoguer's colorful theme.
    pub struct DialoguerPrompter {
        theme: ColorfulTheme,
    }

    impl DialoguerPrompter {
        pub fn new() -> Self {
            Self {
                theme: ColorfulTheme::default(),
            }
        }
    }

    impl Prompter for DialoguerPrompter {
        fn input(
            &self,
            prompt: &str,
            default: Option<&str>,
            validate: &dyn Fn(&str) -> Result<(), String>,
        ) -> Result<String, PromptError> {
            let mut input = Input::<String>::with_theme(&self.theme)
                .with_prompt(prompt)
                .validate_with(|value: &String| validate(value));
            if let Some(default) = default {
                input = input.default(default.to_string());
            }
            input.interact_text().map_err(prompt_error)
        }

        fn select(
            &self,
            prompt: &str,
            items: &[String],
            default: usize,
        ) -> Result<usize, PromptError> {
            Select::with_theme(&self.theme)
                .with_prompt(prompt)
                .items(items)
                .default(default)
                .interact()
                .map_err(prompt_error)
        }

        fn confirm(&self, prompt: &str, default: bool) -> Result<bool, PromptError> {
            Confirm::with_theme(&self.theme)
                .with_prompt(prompt)
                .default(default)
                .interact()
                .map_err(prompt_error)
        }
    }

    fn prompt_error(err: dialoguer::Error) -> PromptError {
        PromptError::new(err.to_string())
    }
}

#[cfg(not(feature = "interactive"))]
mod unavailable {
    use super::*;

    /// Refuses every question.
    pub struct UnavailablePrompter;

    impl UnavailablePrompter {
        pub fn new() -> Self {
            Self
        }

        fn refuse(prompt: &str) -> PromptError {
            PromptError::new(format!(
                "cannot ask \"{prompt}\": built without interactive prompts"
            ))
        }
    }

    impl Prompter for UnavailablePrompter {
        fn input(
            &self,
            prompt: &str,
            _default: Option<&str>,
            _validate: &dyn Fn(&str) -> Result<(), String>,
        ) -> Result<String, PromptError> {
            Err(Self::refuse(prompt))
        }

        fn select(&self, prompt: &str, _: &[String], _: usize) -> Result<usize, PromptError> {
            Err(Self::refuse(prompt))
        }

        fn confirm(&self, prompt: &str, _default: bool) -> Result<bool, PromptError> {
            Err(Self::refuse(prompt))
        }
    }
}
