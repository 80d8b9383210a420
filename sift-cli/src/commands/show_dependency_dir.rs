//! Command to show the detected dependency directory.

use crate::error::CliError;
use crate::utils::{detect_dependency_dir, load_configuration, resolve_project_root, GlobalOptions};
use clap::Args;

/// Show the detected dependency directory.
///
/// Exits with status 1 when no dependency directory exists.
#[derive(Args)]
pub struct ShowDependencyDirCommand {}

impl ShowDependencyDirCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let project_root = resolve_project_root(global)?;
        let config = load_configuration(global, &project_root)?;

        match detect_dependency_dir(&config, &project_root) {
            Some(dir) => {
                println!("{}", dir.display());
                Ok(())
            }
            None => Err(CliError::SemanticFailure(format!(
                "No dependency directory found under {}",
                project_root.display()
            ))),
        }
    }
}
