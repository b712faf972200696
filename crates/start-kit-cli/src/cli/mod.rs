//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! and help text.  No business logic lives here.

use clap::Parser;

use start_kit_core::domain::SuppliedOptions;

pub mod global;
pub use global::GlobalArgs;

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name     = "create-start-kit",
    bin_name = "create-start-kit",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Create a new project from a start-kit template",
    long_about = "create-start-kit clones a template repository, renames its \
                  package.json, installs dependencies and initializes git. \
                  Anything not given on the command line is asked for.",
    after_help = "EXAMPLES:\n\
        \x20 create-start-kit\n\
        \x20 create-start-kit my-app\n\
        \x20 create-start-kit my-app --template start-kit --package-manager pnpm\n\
        \x20 create-start-kit my-app -t mob-kit -p bun --no-install --no-git",
)]
pub struct Cli {
    /// Name of the project directory to create.
    #[arg(value_name = "PROJECT_NAME", help = "Project name")]
    pub project_name: Option<String>,

    /// Template key from the catalog.
    #[arg(
        short = 't',
        long = "template",
        value_name = "TEMPLATE",
        help = "Template to use (start-kit, mob-kit, or a configured key)"
    )]
    pub template: Option<String>,

    /// Package manager.  Not validated: unknown names fall back to npm's
    /// commands.
    #[arg(
        short = 'p',
        long = "package-manager",
        value_name = "MANAGER",
        help = "Package manager to use (npm, yarn, pnpm, bun)"
    )]
    pub package_manager: Option<String>,

    /// Default the install question to "no".
    #[arg(long = "no-install", help = "Skip installing dependencies")]
    pub no_install: bool,

    /// Default the git question to "no".
    #[arg(long = "no-git", help = "Skip git initialization")]
    pub no_git: bool,

    /// Flags that shape logging and output.
    #[command(flatten)]
    pub global: GlobalArgs,
}

impl Cli {
    /// What the command line supplied, for the option resolver.
    ///
    /// An empty value counts as not given, so it is asked for.
    pub fn supplied_options(&self) -> SuppliedOptions {
        SuppliedOptions {
            project_name: non_empty(&self.project_name),
            template_key: non_empty(&self.template),
            package_manager: non_empty(&self.package_manager),
            skip_install: self.no_install,
            skip_git: self.no_git,
        }
    }
}

fn non_empty(value: &Option<String>) -> Option<String> {
    value.as_ref().filter(|v| !v.is_empty()).cloned()
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli_structure() {
        Cli::command().debug_assert();
    }

    #[test]
    fn bare_invocation_supplies_nothing() {
        let cli = Cli::parse_from(["create-start-kit"]);
        assert_eq!(cli.supplied_options(), SuppliedOptions::default());
    }

    #[test]
    fn all_flags_are_supplied() {
        let cli = Cli::parse_from([
            "create-start-kit",
            "demo",
            "--template",
            "start-kit",
            "--package-manager",
            "pnpm",
            "--no-install",
            "--no-git",
        ]);
        assert_eq!(
            cli.supplied_options(),
            SuppliedOptions {
                project_name: Some("demo".into()),
                template_key: Some("start-kit".into()),
                package_manager: Some("pnpm".into()),
                skip_install: true,
                skip_git: true,
            }
        );
    }

    #[test]
    fn short_flags() {
        let cli = Cli::parse_from(["create-start-kit", "demo", "-t", "mob-kit", "-p", "bun"]);
        assert_eq!(cli.template.as_deref(), Some("mob-kit"));
        assert_eq!(cli.package_manager.as_deref(), Some("bun"));
        assert!(!cli.no_install);
    }

    #[test]
    fn package_manager_is_not_validated() {
        let cli = Cli::parse_from(["create-start-kit", "-p", "pnpm7"]);
        assert_eq!(cli.package_manager.as_deref(), Some("pnpm7"));
    }

    #[test]
    fn quiet_and_verbose_conflict() {
        let result = Cli::try_parse_from(["create-start-kit", "--quiet", "--verbose"]);
        assert!(result.is_err());
    }

    #[test]
    fn empty_values_are_asked_for() {
        let cli = Cli::parse_from(["create-start-kit", "", "-t", "", "-p", ""]);
        assert_eq!(cli.supplied_options(), SuppliedOptions::default());
    }

    #[test]
    fn no_color_env_accepts_any_value() {
        // The only test in this crate that touches NO_COLOR.
        unsafe { std::env::set_var("NO_COLOR", "1") };
        let set = Cli::try_parse_from(["create-start-kit", "demo"]);
        unsafe { std::env::set_var("NO_COLOR", "") };
        let empty = Cli::try_parse_from(["create-start-kit", "demo"]);
        unsafe { std::env::set_var("NO_COLOR", "false") };
        let falsey = Cli::try_parse_from(["create-start-kit", "demo"]);
        unsafe { std::env::remove_var("NO_COLOR") };

        assert!(set.unwrap().global.no_color);
        assert!(!empty.unwrap().global.no_color);
        assert!(!falsey.unwrap().global.no_color);
    }

    #[test]
    fn verbose_counts() {
        let cli = Cli::parse_from(["create-start-kit", "-vv"]);
        assert_eq!(cli.global.verbose, 2);
    }
}
