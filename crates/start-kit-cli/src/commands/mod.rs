//! Command handlers.
//!
//! The binary has a single command; it lives here so `main` stays limited
//! to startup and error translation.

pub mod create;
