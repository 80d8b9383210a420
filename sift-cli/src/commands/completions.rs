//! Shell completion generation command.

use crate::cli::Cli;
use crate::error::CliError;
use crate::utils::GlobalOptions;
use clap::{Args, CommandFactory};
use clap_complete::{generate, Shell};
use std::io;

/// Name of the installed binary, which may differ from the package name.
const BIN_NAME: &str = "sift";

/// Generate shell completion scripts
#[derive(Args)]
pub struct CompletionsCommand {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

impl CompletionsCommand {
    /// Write the script to stdout and install hints to stderr.
    pub fn execute(&self, _global: &GlobalOptions) -> Result<(), CliError> {
        if let Some(hint) = install_hint(self.shell) {
            eprintln!("# To enable {} completions:", self.shell);
            eprintln!("#   {hint}");
            eprintln!();
        }

        let mut cmd = Cli::command();
        generate(self.shell, &mut cmd, BIN_NAME, &mut io::stdout());
        Ok(())
    }
}

fn install_hint(shell: Shell) -> Option<&'static str> {
    match shell {
        Shell::Bash => Some("sift completions bash > ~/.local/share/bash-completion/completions/sift"),
        Shell::Zsh => Some("sift completions zsh > ~/.zsh/completions/_sift  (must be on $fpath)"),
        Shell::Fish => Some("sift completions fish > ~/.config/fish/completions/sift.fish"),
        Shell::PowerShell => Some("sift completions powershell | Out-String | Invoke-Expression"),
        _ => None,
    }
}
