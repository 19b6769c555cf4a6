//! CLI structure and command definitions.
//!
//! Defines the main CLI structure using clap's derive macros, including
//! global options and subcommands.

use crate::commands::{
    BrowserPathCommand, CanonicalizeCommand, ClassifyCommand, CompletionsCommand,
    FixDriveCommand, IsUrlCommand, ResolveCommand, WebRootCommand,
};
use clap::{Parser, Subcommand};
use locmap::Platform;

/// Reconcile debugger script URLs with local paths.
#[derive(Parser)]
#[command(name = "locmap")]
#[command(version, about = "Reconcile debugger script URLs with local paths", long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Apply the path rules of this platform (windows, osx, linux)
    #[arg(long, value_name = "PLATFORM", global = true, value_parser = parse_platform)]
    pub platform: Option<Platform>,

    /// Override the configured web root
    #[arg(long, value_name = "PATH", global = true)]
    pub web_root: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand)]
pub enum Command {
    /// Print the canonical form of each locator
    Canonicalize(CanonicalizeCommand),

    /// Report whether a locator is a URL
    IsUrl(IsUrlCommand),

    /// Show how a locator's scheme is classified
    Classify(ClassifyCommand),

    /// Lowercase drive letters and normalize separators
    FixDrive(FixDriveCommand),

    /// Print the resolved web root
    WebRoot(WebRootCommand),

    /// Map a script URL to a local file
    Resolve(ResolveCommand),

    /// Print the browser executable location
    BrowserPath(BrowserPathCommand),

    /// Generate shell completion scripts
    Completions(CompletionsCommand),
}

fn parse_platform(s: &str) -> Result<Platform, String> {
    Platform::parse(s).map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_global_options_after_subcommand() {
        let cli = Cli::try_parse_from([
            "locmap",
            "canonicalize",
            "C:/a.js",
            "--platform",
            "windows",
            "--web-root",
            "/www",
        ])
        .unwrap();
        assert_eq!(cli.platform, Some(Platform::Windows));
        assert_eq!(cli.web_root.as_deref(), Some("/www"));
        assert!(matches!(cli.command, Command::Canonicalize(_)));
    }

    #[test]
    fn test_unknown_platform_rejected() {
        assert!(Cli::try_parse_from(["locmap", "--platform", "plan9", "web-root"]).is_err());
    }
}
