//! Main entry point for the locmap CLI.
//!
//! Commands for working with debugger script locators:
//! - `canonicalize`, `is-url`, `classify`, `fix-drive`: string operations
//! - `web-root`, `resolve`: map URLs onto the local web root
//! - `browser-path`: locate the browser executable

use clap::Parser;
use locmap_cli::cli::{Cli, Command};
use locmap_cli::utils::GlobalOptions;

fn main() {
    let cli = Cli::parse();

    // Route library diagnostics to stderr at the requested verbosity
    locmap::init_logger(cli.verbose, cli.quiet).install();

    let global = GlobalOptions {
        quiet: cli.quiet,
        platform: cli.platform,
        web_root: cli.web_root,
    };

    let result = match cli.command {
        Command::Canonicalize(cmd) => cmd.execute(&global),
        Command::IsUrl(cmd) => cmd.execute(&global),
        Command::Classify(cmd) => cmd.execute(&global),
        Command::FixDrive(cmd) => cmd.execute(&global),
        Command::WebRoot(cmd) => cmd.execute(&global),
        Command::Resolve(cmd) => cmd.execute(&global),
        Command::BrowserPath(cmd) => cmd.execute(&global),
        Command::Completions(cmd) => cmd.execute(&global),
    };

    match result {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(e.exit_code());
        }
    }
}
