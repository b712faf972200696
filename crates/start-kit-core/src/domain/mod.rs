//! Core domain layer for create-start-kit.
//!
//! This module contains pure logic with no I/O. Filesystem, process, and
//! prompting concerns are handled via ports (traits) defined in the
//! application layer.
//!
//! - **No I/O**: the manifest rewrite works on strings, not files
//! - **Immutable catalog**: built once, then only read
//! - **Total command tables**: every package manager, known or not, maps to
//!   a command
pub mod catalog;
pub mod error;
pub mod manifest;
pub mod options;
pub mod value_objects;
pub mod workflow;

mod validation;

// Re-exports for convenience
pub use catalog::{TemplateCatalog, TemplateDescriptor};
pub use error::{DomainError, ErrorCategory};
pub use manifest::{MANIFEST_FILE, rename_package};
pub use options::{ProjectOptions, RawOptions, SuppliedOptions};
pub use validation::DomainValidator;
pub use value_objects::{CommandLine, PackageManager, ProjectName};
pub use workflow::{NextSteps, WorkflowStep};
