use crate::domain::{error::DomainError, value_objects::ProjectName};

/// Centralized domain validation.
///
/// Prompt adapters call these through plain `Fn(&str)` validators, so the
/// messages a user sees while typing are the same ones resolution reports.
pub struct DomainValidator;

impl DomainValidator {
    pub fn validate_project_name(candidate: &str) -> Result<(), DomainError> {
        ProjectName::check(candidate)
    }

    /// Validator shaped for interactive input: `Err` carries the reason only.
    pub fn project_name_prompt_check(candidate: &str) -> Result<(), String> {
        Self::validate_project_name(candidate).map_err(|e| match e {
            DomainError::InvalidProjectName { reason, .. } => reason,
            other => other.to_string(),
        })
    }
}
