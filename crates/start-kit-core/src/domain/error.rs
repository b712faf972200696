// ============================================================================
// domain/error.rs - DOMAIN ERRORS
// ============================================================================

use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (they travel inside step outcomes and resolution reports)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    // ========================================================================
    // Validation Errors
    // ========================================================================
    /// A project name was empty or contained a disallowed character.
    ///
    /// Raised interactively this is answered with a re-ask; raised for a
    /// positional argument it ends resolution.
    #[error("Invalid project name '{name}': {reason}")]
    InvalidProjectName { name: String, reason: String },

    #[error("Required field missing: {field}")]
    MissingRequiredField { field: &'static str },

    #[error("package.json is not a valid manifest: {reason}")]
    InvalidManifest { reason: String },

    // ========================================================================
    // Not Found Errors
    // ========================================================================
    #[error("Template \"{key}\" not found")]
    TemplateNotFound {
        key: String,
        /// Keys the catalog does know, in catalog order.
        available: Vec<String>,
    },

    // ========================================================================
    // Constraint Violations
    // ========================================================================
    #[error("Template catalog is empty")]
    EmptyCatalog,
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidProjectName { .. } => vec![
                "Use letters, numbers, hyphens, and underscores only".into(),
                "Examples: my-project, my_app, project123".into(),
            ],
            Self::MissingRequiredField { field } => {
                vec![format!("Provide a value for '{field}'")]
            }
            Self::InvalidManifest { .. } => vec![
                "The template's package.json could not be updated".into(),
                "Edit the 'name' field by hand or report the template".into(),
            ],
            Self::TemplateNotFound { available, .. } => {
                let mut suggestions = vec!["Available templates:".to_string()];
                suggestions.extend(available.iter().map(|key| format!("  • {key}")));
                suggestions.push("Or omit --template to pick one interactively".into());
                suggestions
            }
            Self::EmptyCatalog => vec![
                "No templates are configured".into(),
                "Check the [[templates]] entries in your config file".into(),
            ],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidProjectName { .. } | Self::MissingRequiredField { .. } => {
                ErrorCategory::Validation
            }
            Self::TemplateNotFound { .. } => ErrorCategory::NotFound,
            Self::EmptyCatalog => ErrorCategory::Configuration,
            Self::InvalidManifest { .. } => ErrorCategory::Internal,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
    Configuration,
    Internal,
}
