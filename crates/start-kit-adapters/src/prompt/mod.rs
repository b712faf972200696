//! Non-interactive prompt adapters.
//!
//! The terminal prompter lives in the CLI crate behind its `interactive`
//! feature.

mod scripted;

pub use scripted::{Answer, ScriptedPrompter};
