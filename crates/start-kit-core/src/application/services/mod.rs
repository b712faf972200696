//! Application services - orchestrate use cases.
//!
//! Services coordinate the domain layer and ports to accomplish
//! the two use cases: "resolve the options" and "scaffold the project".

pub mod option_resolver;
pub mod scaffold_service;

pub use option_resolver::{DEFAULT_PROJECT_NAME, OptionResolver};
pub use scaffold_service::{INITIAL_COMMIT_MESSAGE, ScaffoldService, VCS_METADATA_DIR};
