//! Command to print the resolved target paths.

use crate::error::CliError;
use crate::utils::{open_workspace, select_targets, GlobalOptions};
use clap::{Args, ValueEnum};

/// Output formats for `resolve`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ResolveFormat {
    /// One absolute path per line
    Lines,
    /// A JSON array of absolute paths
    Json,
}

/// Print the resolved target paths.
#[derive(Args)]
pub struct ResolveCommand {
    /// Patterns to resolve; `!`-prefixed entries exclude (defaults to configuration)
    #[arg(value_name = "PATTERN")]
    pub patterns: Vec<String>,

    /// Use the scan list and exclusions configured for this tool
    #[arg(long, value_name = "NAME")]
    pub tool: Option<String>,

    /// Additional exclusion pattern (repeatable)
    #[arg(long, value_name = "PAT")]
    pub exclude: Vec<String>,

    /// Output format
    #[arg(long, value_enum, default_value_t = ResolveFormat::Lines)]
    pub format: ResolveFormat,
}

impl ResolveCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let mut workspace = open_workspace(global)?;

        if let Some(tool) = self.tool.as_deref() {
            if !workspace.config.is_tool_enabled(tool) {
                log::warn!("tool '{tool}' is disabled in configuration");
                return Ok(());
            }
        }

        let targets = select_targets(
            &workspace.config,
            self.tool.as_deref(),
            &self.patterns,
            &self.exclude,
        );
        let resolved = workspace
            .resolver
            .resolve_with_exclusions(&targets.include, &targets.exclude);

        if resolved.is_empty() {
            log::info!("no paths matched");
        }

        match self.format {
            ResolveFormat::Lines => {
                for path in &resolved {
                    println!("{path}");
                }
            }
            ResolveFormat::Json => {
                let json = serde_json::to_string_pretty(&resolved)
                    .map_err(|e| CliError::Io(e.into()))?;
                println!("{json}");
            }
        }

        Ok(())
    }
}
