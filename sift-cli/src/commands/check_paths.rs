//! Command to check that paths exist and are readable.

use crate::error::CliError;
use crate::utils::{display_relative, open_workspace, GlobalOptions};
use clap::{Args, ValueEnum};
use std::path::{Path, PathBuf};

/// Output formats for `check-paths`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum CheckFormat {
    /// One `status<TAB>path` line per path
    Human,
    /// The full report as JSON
    Json,
}

/// Check that paths exist and are readable.
///
/// Exits with status 1 when any path is invalid or inaccessible.
#[derive(Args)]
pub struct CheckPathsCommand {
    /// Paths to check, relative to the project root or absolute
    #[arg(value_name = "PATH", required = true)]
    pub paths: Vec<String>,

    /// Output format
    #[arg(long, value_enum, default_value_t = CheckFormat::Human)]
    pub format: CheckFormat,
}

impl CheckPathsCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let workspace = open_workspace(global)?;
        let root = workspace.resolver.project_root().to_path_buf();
        let report = workspace.resolver.validate(&self.paths);

        match self.format {
            CheckFormat::Human => {
                print_group("valid", &report.valid, &root);
                print_group("invalid", &report.invalid, &root);
                print_group("inaccessible", &report.inaccessible, &root);
            }
            CheckFormat::Json => {
                let json = serde_json::to_string_pretty(&report)
                    .map_err(|e| CliError::Io(e.into()))?;
                println!("{json}");
            }
        }

        if report.is_clean() {
            Ok(())
        } else {
            Err(CliError::SemanticFailure(format!(
                "{} invalid, {} inaccessible",
                report.invalid.len(),
                report.inaccessible.len()
            )))
        }
    }
}

fn print_group(status: &str, paths: &[PathBuf], root: &Path) {
    for path in paths {
        println!("{status}\t{}", display_relative(path, root));
    }
}
