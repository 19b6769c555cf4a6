//! Command to map a script URL to a local file.

use crate::error::CliError;
use crate::utils::{build_reconciler, GlobalOptions};
use clap::Args;

/// Map a script URL to an existing local file beneath the web root.
///
/// Prints nothing when no candidate exists, unless `--require` is given.
#[derive(Args)]
pub struct ResolveCommand {
    /// URL reported by the debug target
    #[arg(value_name = "URL")]
    pub url: String,

    /// Print every probed path, most specific first, instead of resolving
    #[arg(long, conflicts_with = "require")]
    pub candidates: bool,

    /// Exit with status 1 if no local file is found
    #[arg(long)]
    pub require: bool,
}

impl ResolveCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let reconciler = build_reconciler(global)?;

        if self.candidates {
            for candidate in reconciler.candidates(&self.url) {
                println!("{candidate}");
            }
            return Ok(());
        }

        let resolved = reconciler.resolve(&self.url);
        if resolved.is_empty() {
            if self.require {
                return Err(CliError::SemanticFailure(format!(
                    "No local file found for {} under {}",
                    self.url,
                    reconciler.web_root()
                )));
            }
            return Ok(());
        }

        println!("{resolved}");
        Ok(())
    }
}
