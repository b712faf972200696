//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate never sees it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. Environment variables, `CREATE_START_KIT__SECTION__KEY`
//! 3. Config file: `--config <FILE>`, else `config.toml` in the platform
//!    config directory (optional)
//! 4. Built-in defaults (always present)
//!
//! ```toml
//! [defaults]
//! project_name = "my-app"
//!
//! [output]
//! no_color = true
//!
//! [[templates]]
//! key = "api-kit"
//! name = "API Kit"
//! repo = "https://github.com/acme/api-kit"
//! description = "Hono on Bun"
//! ```

use std::path::{Path, PathBuf};

use anyhow::Context;
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};

use start_kit_core::{
    application::services::DEFAULT_PROJECT_NAME, domain::TemplateDescriptor,
};

/// Environment variable prefix.
pub const ENV_PREFIX: &str = "CREATE_START_KIT";

/// Application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Default values for new projects.
    #[serde(default)]
    pub defaults: Defaults,
    /// Output settings.
    #[serde(default)]
    pub output: OutputConfig,
    /// Extra catalog entries, appended to (or overriding) the built-ins.
    #[serde(default)]
    pub templates: Vec<TemplateDescriptor>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Defaults {
    /// Suggested answer for the project-name prompt.
    pub project_name: String,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            project_name: DEFAULT_PROJECT_NAME.into(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub no_color: bool,
}

impl AppConfig {
    /// Load configuration from defaults, a file, and the environment.
    ///
    /// `config_file` is the path passed via `--config`; it must exist.
    /// Without it the platform default is used if present.
    pub fn load(config_file: Option<&Path>) -> anyhow::Result<Self> {
        let file = match config_file {
            Some(path) => File::from(path).required(true),
            None => File::from(Self::config_path()).required(false),
        };

        let settings = Config::builder()
            .set_default("defaults.project_name", DEFAULT_PROJECT_NAME)?
            .set_default("output.no_color", false)?
            .add_source(file)
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .context("Failed to read configuration")?;

        settings
            .try_deserialize()
            .context("Invalid configuration")
    }

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.create-start-kit.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("com", "start-kit", "create-start-kit")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(".create-start-kit.toml"))
    }
}
