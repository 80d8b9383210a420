//! Command to validate a sift configuration file.
//!
//! Parse failures and rule violations both exit with status 1; a missing
//! file is an argument error.

use crate::error::CliError;
use crate::utils::GlobalOptions;
use clap::Args;
use sift::config::{Config, ConfigLoader, ConfigValidator};
use std::path::PathBuf;

/// Validate a sift configuration file.
#[derive(Args)]
pub struct ValidateCommand {
    /// Configuration file to validate
    #[arg(value_name = "CONFIG_PATH")]
    pub config_path: PathBuf,
}

impl ValidateCommand {
    pub fn execute(self, _global: &GlobalOptions) -> Result<(), CliError> {
        if !self.config_path.is_file() {
            return Err(CliError::InvalidArguments(format!(
                "File not found: {}",
                self.config_path.display()
            )));
        }

        let config = ConfigLoader::load_file(&self.config_path).map_err(|e| {
            eprintln!("Parse error: {e}");
            CliError::SemanticFailure("Configuration file is invalid".to_string())
        })?;

        ConfigValidator::validate(&config).map_err(|e| {
            eprintln!("Validation error: {e}");
            CliError::SemanticFailure("Configuration validation failed".to_string())
        })?;

        println!("Configuration is valid ({})", summarize(&config));
        Ok(())
    }
}

fn summarize(config: &Config) -> String {
    let count = |list: &Option<Vec<String>>| list.as_ref().map_or(0, Vec::len);
    format!(
        "{} path(s), {} exclusion(s), {} tool(s)",
        count(&config.paths),
        count(&config.exclude),
        config.tools.len()
    )
}
