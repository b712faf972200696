//! Domain value objects: ProjectName, PackageManager, CommandLine.
//!
//! # Design
//!
//! These are pure value types with equality-by-value and no identity.
//! `PackageManager` owns the per-manager command table; every lookup is a
//! total `match`, so the npm fallback for unknown names is an explicit arm
//! rather than a table miss.

use std::fmt;

use crate::domain::error::DomainError;

// ── ProjectName ──────────────────────────────────────────────────────────────

/// A validated project name: non-empty, `[A-Za-z0-9-_]+`.
///
/// The name doubles as the target directory name and the `package.json`
/// `name`, so anything that could escape the working directory is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ProjectName(String);

impl ProjectName {
    /// Validate and wrap a candidate name.
    pub fn parse(candidate: impl Into<String>) -> Result<Self, DomainError> {
        let candidate = candidate.into();
        Self::check(&candidate)?;
        Ok(Self(candidate))
    }

    /// Run the validation rules without taking ownership.
    pub fn check(candidate: &str) -> Result<(), DomainError> {
        if candidate.trim().is_empty() {
            return Err(DomainError::InvalidProjectName {
                name: candidate.to_string(),
                reason: "Project name is required".into(),
            });
        }
        if !candidate.chars().all(is_name_char) {
            return Err(DomainError::InvalidProjectName {
                name: candidate.to_string(),
                reason: "Project name can only contain letters, numbers, hyphens, and underscores"
                    .into(),
            });
        }
        Ok(())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

fn is_name_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '-' || c == '_'
}

impl fmt::Display for ProjectName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ProjectName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

// ── PackageManager ───────────────────────────────────────────────────────────

/// The package manager a project is set up with.
///
/// Values supplied on the command line are not checked against the known
/// set. Anything unknown is kept as [`PackageManager::Unrecognized`] and
/// uses the npm command set wherever a command is needed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum PackageManager {
    #[default]
    Npm,
    Yarn,
    Pnpm,
    Bun,
    /// A name outside the known set, kept verbatim.
    Unrecognized(String),
}

impl PackageManager {
    /// The managers offered in the interactive prompt, in display order.
    pub const KNOWN: [PackageManager; 4] = [Self::Npm, Self::Yarn, Self::Pnpm, Self::Bun];

    /// Interpret a user-supplied name. Never fails.
    pub fn from_name(name: &str) -> Self {
        match name {
            "npm" => Self::Npm,
            "yarn" => Self::Yarn,
            "pnpm" => Self::Pnpm,
            "bun" => Self::Bun,
            other => Self::Unrecognized(other.to_string()),
        }
    }

    /// The name as the user knows it (verbatim for unrecognized values).
    pub fn name(&self) -> &str {
        match self {
            Self::Npm => "npm",
            Self::Yarn => "yarn",
            Self::Pnpm => "pnpm",
            Self::Bun => "bun",
            Self::Unrecognized(name) => name,
        }
    }

    pub fn is_recognized(&self) -> bool {
        !matches!(self, Self::Unrecognized(_))
    }

    /// Command that installs the project's dependencies.
    pub fn install_command(&self) -> CommandLine {
        match self {
            Self::Npm | Self::Unrecognized(_) => CommandLine::new("npm", ["install"]),
            Self::Yarn => CommandLine::new("yarn", Vec::<String>::new()),
            Self::Pnpm => CommandLine::new("pnpm", ["install"]),
            Self::Bun => CommandLine::new("bun", ["install"]),
        }
    }

    /// Command that starts the development server.
    pub fn run_command(&self) -> CommandLine {
        match self {
            Self::Npm | Self::Unrecognized(_) => CommandLine::new("npm", ["run", "dev"]),
            Self::Yarn => CommandLine::new("yarn", ["dev"]),
            Self::Pnpm => CommandLine::new("pnpm", ["dev"]),
            Self::Bun => CommandLine::new("bun", ["dev"]),
        }
    }

    /// What to tell the user after a failed install: `"<name> install"`.
    ///
    /// Uses the name as given, not the fallback command.
    pub fn manual_install_hint(&self) -> String {
        format!("{} install", self.name())
    }
}

impl fmt::Display for PackageManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ── CommandLine ──────────────────────────────────────────────────────────────

/// An external command: program plus arguments, never a shell string.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CommandLine {
    pub program: String,
    pub args: Vec<String>,
}

impl CommandLine {
    pub fn new<I, S>(program: impl Into<String>, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            program: program.into(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }
}

impl fmt::Display for CommandLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.program)?;
        for arg in &self.args {
            if arg.is_empty() || arg.contains(char::is_whitespace) {
                write!(f, " \"{arg}\"")?;
            } else {
                write!(f, " {arg}")?;
            }
        }
        Ok(())
    }
}
