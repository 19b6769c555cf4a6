//! Command to print the canonical form of locators.

use crate::error::CliError;
use crate::utils::{effective_platform, load_configuration, GlobalOptions};
use clap::Args;
use locmap::canonicalize_url;

/// Print the canonical form of each locator, one per line.
#[derive(Args)]
pub struct CanonicalizeCommand {
    /// URLs or paths to canonicalize
    #[arg(value_name = "LOCATOR", required = true)]
    pub locators: Vec<String>,
}

impl CanonicalizeCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let platform = effective_platform(&config);

        for locator in &self.locators {
            println!("{}", canonicalize_url(locator, platform));
        }
        Ok(())
    }
}
