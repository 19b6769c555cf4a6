//! Command to fix drive letter case and separators.

use crate::error::CliError;
use crate::utils::{effective_platform, load_configuration, GlobalOptions};
use clap::Args;
use locmap::fix_drive_letter_and_slashes;

/// Lowercase drive letters and normalize separators, keeping `file:///`.
#[derive(Args)]
pub struct FixDriveCommand {
    /// Paths or file URLs to fix
    #[arg(value_name = "PATH", required = true)]
    pub paths: Vec<String>,
}

impl FixDriveCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let platform = effective_platform(&config);

        for path in &self.paths {
            println!("{}", fix_drive_letter_and_slashes(path, platform));
        }
        Ok(())
    }
}
