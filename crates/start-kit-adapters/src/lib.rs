//! Infrastructure adapters for create-start-kit.
//!
//! This crate implements the ports defined in
//! `start_kit_core::application::ports`. It owns every real filesystem and
//! process interaction; terminal-bound adapters (dialoguer, indicatif) live
//! in the CLI crate.

pub mod builtin_templates;
pub mod filesystem;
pub mod process;
pub mod progress;
pub mod prompt;

// Re-export commonly used adapters
pub use builtin_templates::{builtin_catalog, builtin_templates};
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use process::{RecordingRunner, SystemCommandRunner};
pub use progress::SilentProgress;
pub use prompt::ScriptedPrompter;
