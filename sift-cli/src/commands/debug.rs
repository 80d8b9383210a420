//! Command to show how patterns were classified and resolved.

use crate::error::CliError;
use crate::utils::{display_relative, open_workspace, select_targets, GlobalOptions};
use clap::{Args, ValueEnum};
use sift::DebugReport;

/// Output formats for `debug`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum DebugFormat {
    /// Aligned, human-readable report
    Human,
    /// The full report as JSON
    Json,
}

/// Show how each pattern was classified and what it resolved to.
#[derive(Args)]
pub struct DebugCommand {
    /// Patterns to inspect (defaults to configuration)
    #[arg(value_name = "PATTERN")]
    pub patterns: Vec<String>,

    /// Use the scan list and exclusions configured for this tool
    #[arg(long, value_name = "NAME")]
    pub tool: Option<String>,

    /// Output format
    #[arg(long, value_enum, default_value_t = DebugFormat::Human)]
    pub format: DebugFormat,
}

impl DebugCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let mut workspace = open_workspace(global)?;
        let targets = select_targets(&workspace.config, self.tool.as_deref(), &self.patterns, &[]);
        let report = workspace.resolver.debug_info(&targets.to_patterns());

        match self.format {
            DebugFormat::Human => print!("{}", render_human(&report)),
            DebugFormat::Json => {
                let json = serde_json::to_string_pretty(&report)
                    .map_err(|e| CliError::Io(e.into()))?;
                println!("{json}");
            }
        }
        Ok(())
    }
}

fn render_human(report: &DebugReport) -> String {
    let root = &report.project_root;
    let mut out = String::new();

    out.push_str(&format!("project root:    {}\n", root.display()));
    let dependency = report
        .dependency_root
        .as_ref()
        .map_or_else(|| "(none)".to_string(), |d| d.display().to_string());
    out.push_str(&format!("dependency root: {dependency}\n"));

    let width = report
        .patterns
        .iter()
        .map(|p| p.pattern.len())
        .max()
        .unwrap_or(0);

    out.push_str("\npatterns:\n");
    for p in &report.patterns {
        let kind = if p.exclusion {
            format!("{} (exclusion)", p.kind)
        } else {
            p.kind.clone()
        };
        let absolute = p
            .absolute
            .as_ref()
            .map_or_else(|| "(unresolvable)".to_string(), |a| a.display().to_string());
        out.push_str(&format!("  {:<width$}  {kind:<32} {absolute}\n", p.pattern));
    }

    out.push_str(&format!("\nresolved ({}):\n", report.resolved.len()));
    for path in &report.resolved {
        out.push_str(&format!("  {}\n", display_relative(path.as_path(), root)));
    }
    out
}
