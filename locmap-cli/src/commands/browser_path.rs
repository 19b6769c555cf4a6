//! Command to locate the browser executable.

use crate::error::CliError;
use crate::utils::{build_reconciler, GlobalOptions};
use clap::Args;

/// Print the configured browser, or the first known install location that
/// exists. Exits with status 1 when none is found.
#[derive(Args)]
pub struct BrowserPathCommand {}

impl BrowserPathCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let reconciler = build_reconciler(global)?;
        match reconciler.browser_path() {
            Some(path) => {
                println!("{path}");
                Ok(())
            }
            None => Err(CliError::SemanticFailure(format!(
                "No browser found for platform {}",
                reconciler.platform()
            ))),
        }
    }
}
