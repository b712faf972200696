//! Application layer errors.
//!
//! These errors represent failures in orchestration: prompts, external
//! commands, and the filesystem. Domain rule violations are `DomainError`s
//! from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::application::ports::PromptError;
use crate::domain::DomainError;
use crate::error::ErrorCategory;

/// Errors that occur during option resolution and scaffolding.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ApplicationError {
    /// The interactive oracle could not answer (no TTY, interrupted, I/O).
    #[error("Prompt failed: {reason}")]
    PromptFailed { reason: String },

    /// Gathered options did not validate.
    #[error("Could not resolve project options: {}", join_errors(.errors))]
    ResolutionFailed { errors: Vec<DomainError> },

    /// `git clone` of the template failed. Fatal.
    #[error("Failed to download template from {repository}: {reason}")]
    RetrievalFailed { repository: String, reason: String },

    /// The dependency install command failed. Non-fatal.
    #[error("Failed to install dependencies with {manager} (`{command}`): {reason}")]
    InstallFailed {
        manager: String,
        command: String,
        reason: String,
        /// Command the user can run by hand later.
        hint: String,
    },

    /// One of `git init` / `git add` / `git commit` failed. Non-fatal.
    #[error("Failed to initialize git repository (`{command}`): {reason}")]
    VersionControlInitFailed { command: String, reason: String },

    /// The retrieved `package.json` could not be rewritten.
    #[error("Could not update {path}: {error}")]
    ManifestRejected { path: PathBuf, error: DomainError },

    /// Filesystem operation failed.
    #[error("Filesystem error at {path}: {reason}")]
    FilesystemError { path: PathBuf, reason: String },
}

fn join_errors(errors: &[DomainError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

impl From<PromptError> for ApplicationError {
    fn from(err: PromptError) -> Self {
        Self::PromptFailed {
            reason: err.to_string(),
        }
    }
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::PromptFailed { .. } => vec![
                "Interactive prompts need a terminal".into(),
                "Run create-start-kit from an interactive shell".into(),
            ],
            Self::ResolutionFailed { errors } => errors
                .iter()
                .flat_map(DomainError::suggestions)
                .collect(),
            Self::RetrievalFailed { repository, .. } => vec![
                "Ensure git is installed and in your PATH".into(),
                format!("Check that {repository} is reachable"),
                "The target directory may be partially populated; remove it before retrying"
                    .into(),
            ],
            Self::InstallFailed { hint, .. } => {
                vec![format!("You can install them manually later with: {hint}")]
            }
            Self::VersionControlInitFailed { .. } => {
                vec!["You can initialize git manually later".into()]
            }
            Self::ManifestRejected { error, .. } => error.suggestions(),
            Self::FilesystemError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
            ],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::PromptFailed { .. } | Self::ResolutionFailed { .. } => ErrorCategory::Validation,
            Self::RetrievalFailed { .. }
            | Self::InstallFailed { .. }
            | Self::VersionControlInitFailed { .. }
            | Self::ManifestRejected { .. }
            | Self::FilesystemError { .. } => ErrorCategory::Internal,
        }
    }
}
