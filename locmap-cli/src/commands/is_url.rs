//! Command to report whether a locator is a URL.

use crate::error::CliError;
use crate::utils::GlobalOptions;
use clap::Args;
use locmap::is_url;

/// Report whether a locator is a URL rather than a local path.
#[derive(Args)]
pub struct IsUrlCommand {
    /// URL or path to check
    #[arg(value_name = "LOCATOR")]
    pub locator: String,

    /// Print nothing; exit with status 1 unless the locator is a URL
    #[arg(long)]
    pub check: bool,
}

impl IsUrlCommand {
    pub fn execute(self, _global: &GlobalOptions) -> Result<(), CliError> {
        let url = is_url(&self.locator);

        if self.check {
            return if url {
                Ok(())
            } else {
                Err(CliError::SemanticFailure(format!(
                    "Not a URL: {}",
                    self.locator
                )))
            };
        }

        println!("{url}");
        Ok(())
    }
}
