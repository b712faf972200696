//! create-start-kit core - hexagonal architecture implementation
//!
//! This crate provides the domain and application layers for the
//! `create-start-kit` scaffolder, following the ports and adapters layout.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │        start-kit-cli (binary)           │
//! │   flags, dialoguer prompts, spinners    │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │   (OptionResolver, ScaffoldService)     │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │ (Filesystem, CommandRunner, Prompter,   │
//! │  ProgressReporter)                      │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │    start-kit-adapters (Infrastructure)  │
//! │ (LocalFilesystem, SystemCommandRunner)  │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Domain Layer (Pure Logic)       │
//! │ (TemplateCatalog, ProjectOptions, ...)  │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use start_kit_core::prelude::*;
//!
//! let catalog = Arc::new(TemplateCatalog::new(templates)?);
//!
//! // 1. Resolve options (prompts only for what is missing)
//! let resolver = OptionResolver::new(Arc::clone(&catalog));
//! let options = resolver.resolve(supplied, &prompter)?;
//!
//! // 2. Scaffold with injected adapters
//! let service = ScaffoldService::new(catalog, filesystem, runner, progress);
//! match service.scaffold(options, &cwd, &prompter)? {
//!     ScaffoldOutcome::Created(report) => { /* print next steps */ }
//!     ScaffoldOutcome::Cancelled => { /* nothing changed */ }
//! }
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        ApplicationError, OptionResolver, ScaffoldOutcome, ScaffoldReport, ScaffoldService,
        StepOutcome,
        ports::{CommandError, CommandRunner, Filesystem, ProgressReporter, PromptError, Prompter},
    };
    pub use crate::domain::{
        CommandLine, DomainError, NextSteps, PackageManager, ProjectName, ProjectOptions,
        SuppliedOptions, TemplateCatalog, TemplateDescriptor, WorkflowStep,
    };
    pub use crate::error::{ErrorCategory, StartKitError, StartKitResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
