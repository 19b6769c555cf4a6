//! Shell completion generation command.

use crate::cli::Cli;
use crate::error::CliError;
use crate::utils::GlobalOptions;
use clap::{Args, CommandFactory};
use clap_complete::{generate, Shell};
use std::io;

/// Name of the installed binary.
const BIN_NAME: &str = "locmap";

/// Generate shell completion scripts
#[derive(Args)]
pub struct CompletionsCommand {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

impl CompletionsCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        if !global.quiet {
            eprintln!("# {} completions for {BIN_NAME}", self.shell);
            match self.shell {
                Shell::Bash => {
                    eprintln!("#   locmap completions bash > ~/.local/share/bash-completion/completions/locmap");
                }
                Shell::Zsh => eprintln!("#   locmap completions zsh > ~/.zsh/completions/_locmap"),
                Shell::Fish => {
                    eprintln!("#   locmap completions fish > ~/.config/fish/completions/locmap.fish");
                }
                Shell::PowerShell => eprintln!("#   locmap completions powershell > $PROFILE"),
                _ => {}
            }
        }

        let mut cmd = Cli::command();
        generate(self.shell, &mut cmd, BIN_NAME, &mut io::stdout());
        Ok(())
    }
}
