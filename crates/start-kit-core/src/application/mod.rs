//! Application layer for create-start-kit.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (OptionResolver, ScaffoldService)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Report**: Step outcomes and the completion report
//! - **Errors**: Application-specific error types
//!
//! The application layer coordinates the domain layer but contains no
//! business rules itself. Those live in `crate::domain`.

pub mod error;
pub mod ports;
pub mod report;
pub mod services;

pub use services::{OptionResolver, ScaffoldService};

pub use ports::{CommandError, CommandRunner, Filesystem, ProgressReporter, PromptError, Prompter};

pub use report::{ScaffoldOutcome, ScaffoldReport, StepOutcome};

pub use error::ApplicationError;
