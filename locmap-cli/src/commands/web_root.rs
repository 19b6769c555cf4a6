//! Command to print the resolved web root.

use crate::error::CliError;
use crate::utils::{build_reconciler, GlobalOptions};
use clap::Args;

/// Print the web root after resolving it against the working directory.
#[derive(Args)]
pub struct WebRootCommand {}

impl WebRootCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let reconciler = build_reconciler(global)?;
        println!("{}", reconciler.web_root());
        Ok(())
    }
}
