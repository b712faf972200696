//! Project options in their two shapes.
//!
//! [`RawOptions`] is what option gathering produces: every field optional,
//! nothing checked. [`RawOptions::validate`] is the single pass that turns
//! it into a [`ProjectOptions`] or reports everything wrong with it at once.

use crate::domain::{
    error::DomainError,
    value_objects::{PackageManager, ProjectName},
};

/// Fully resolved configuration for one scaffolding run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectOptions {
    pub project_name: ProjectName,
    /// Expected to be a catalog key; the scaffolder reports it if not.
    pub template_key: String,
    pub package_manager: PackageManager,
    pub install_dependencies: bool,
    pub initialize_version_control: bool,
}

/// Options as gathered from flags and prompts, before validation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawOptions {
    pub project_name: Option<String>,
    pub template_key: Option<String>,
    pub package_manager: Option<PackageManager>,
    pub install_dependencies: Option<bool>,
    pub initialize_version_control: Option<bool>,
}

impl RawOptions {
    /// Check every field and build the resolved options.
    ///
    /// All problems are collected rather than stopping at the first one.
    pub fn validate(self) -> Result<ProjectOptions, Vec<DomainError>> {
        let mut errors = Vec::new();

        let project_name = match self.project_name {
            Some(name) => ProjectName::parse(name).map_err(|e| errors.push(e)).ok(),
            None => {
                errors.push(DomainError::MissingRequiredField {
                    field: "project name",
                });
                None
            }
        };
        let template_key = required(self.template_key, "template", &mut errors);
        let package_manager = required(self.package_manager, "package manager", &mut errors);
        let install_dependencies =
            required(self.install_dependencies, "install dependencies", &mut errors);
        let initialize_version_control = required(
            self.initialize_version_control,
            "initialize version control",
            &mut errors,
        );

        match (
            project_name,
            template_key,
            package_manager,
            install_dependencies,
            initialize_version_control,
        ) {
            (
                Some(project_name),
                Some(template_key),
                Some(package_manager),
                Some(install_dependencies),
                Some(initialize_version_control),
            ) if errors.is_empty() => Ok(ProjectOptions {
                project_name,
                template_key,
                package_manager,
                install_dependencies,
                initialize_version_control,
            }),
            _ => Err(errors),
        }
    }
}

fn required<T>(value: Option<T>, field: &'static str, errors: &mut Vec<DomainError>) -> Option<T> {
    if value.is_none() {
        errors.push(DomainError::MissingRequiredField { field });
    }
    value
}

/// Values supplied up front on the command line.
///
/// `skip_install` / `skip_git` only change the default of the matching
/// confirmation; the question is still asked.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SuppliedOptions {
    pub project_name: Option<String>,
    pub template_key: Option<String>,
    pub package_manager: Option<String>,
    pub skip_install: bool,
    pub skip_git: bool,
}
