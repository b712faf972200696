//! Application ports (traits) for external dependencies.
//!
//! In hexagonal architecture, ports define interfaces that the application
//! needs from the outside world. Adapters implement these.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: Called by application, implemented by infrastructure
//!   - `Filesystem`: file operations on the target directory
//!   - `CommandRunner`: blocking external commands (git, package managers)
//!   - `Prompter`: interactive question/answer oracle
//!   - `ProgressReporter`: step progress display
//!
//! - **Driving (Input) Ports**: Called by external world, implemented by application
//!   - (The CLI calls `OptionResolver` and `ScaffoldService` directly)

pub mod output;

pub use output::{
    CommandError, CommandRunner, Filesystem, ProgressReporter, PromptError, Prompter,
};

#[cfg(test)]
pub use output::{MockCommandRunner, MockFilesystem};
