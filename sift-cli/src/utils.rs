//! Utility functions for CLI operations.
//!
//! This module provides the setup shared by every command: locating the
//! project root, loading configuration, detecting the dependency directory,
//! and assembling the pattern lists handed to the resolver.

use crate::error::CliError;
use sift::config::ConfigLoader;
use sift::path::normalize::absolutize;
use sift::{Config, ConfigBuilder, DependencyDetector, TargetResolver, TargetSpec};
use std::env;
use std::path::{Path, PathBuf};

/// Global CLI options shared across all commands.
#[derive(Debug, Clone, Default)]
#[allow(dead_code)] // verbose/quiet are consumed by the logger in main.rs
pub struct GlobalOptions {
    /// Enable verbose output.
    pub verbose: bool,

    /// Suppress non-essential output.
    pub quiet: bool,

    /// Explicit project root.
    pub project_root: Option<PathBuf>,

    /// Override the data directory location.
    pub data_dir: Option<PathBuf>,

    /// Override the configured dependency directory.
    pub dependency_dir: Option<PathBuf>,
}

/// Everything a resolving command needs.
pub struct Workspace {
    /// Merged configuration.
    pub config: Config,
    /// Resolver rooted at the project, with the detected dependency root set.
    pub resolver: TargetResolver,
}

/// Determine the project root.
///
/// An explicit `--project-root` is made absolute against the current
/// directory. Otherwise the nearest ancestor holding a project configuration
/// file wins, falling back to the current directory.
pub fn resolve_project_root(global: &GlobalOptions) -> Result<PathBuf, CliError> {
    let cwd = env::current_dir()?;
    match &global.project_root {
        Some(root) => absolutize(&cwd, root).map_err(|e| {
            CliError::InvalidArguments(format!("--project-root {}: {e}", root.display()))
        }),
        None => Ok(ConfigLoader::find_project_dir(&cwd).unwrap_or(cwd)),
    }
}

/// Load hierarchical configuration for `project_root`.
///
/// Configuration is merged from multiple sources with precedence:
/// 1. Global options (highest priority)
/// 2. Environment variables
/// 3. Configuration files
/// 4. Built-in defaults (lowest priority)
pub fn load_configuration(global: &GlobalOptions, project_root: &Path) -> Result<Config, CliError> {
    let mut builder = ConfigBuilder::new().with_working_dir(project_root);
    if let Some(data_dir) = &global.data_dir {
        builder = builder.with_data_dir(data_dir);
    }

    let mut config = builder.build().map_err(|e| CliError::Config(e.to_string()))?;
    if let Some(dir) = &global.dependency_dir {
        config.dependency_dir = Some(dir.clone());
    }
    Ok(config)
}

/// Find the dependency directory for `project_root`, honoring configuration.
pub fn detect_dependency_dir(config: &Config, project_root: &Path) -> Option<PathBuf> {
    let mut detector = DependencyDetector::new();
    if let Some(dir) = &config.dependency_dir {
        detector = detector.with_configured(dir.clone());
    }
    detector.detect(project_root)
}

/// Build the configuration and a resolver for the current invocation.
pub fn open_workspace(global: &GlobalOptions) -> Result<Workspace, CliError> {
    let project_root = resolve_project_root(global)?;
    let mut resolver = TargetResolver::new(&project_root).map_err(|e| {
        CliError::InvalidArguments(format!("cannot use project root: {e}"))
    })?;
    let config = load_configuration(global, &project_root)?;

    resolver.set_dependency_root(detect_dependency_dir(&config, &project_root).as_deref());

    Ok(Workspace { config, resolver })
}

/// Assemble the targets for a command.
///
/// Patterns given on the command line replace the configured scan list.
/// Configured exclusions (global, plus the tool's when `tool` is set) always
/// apply, and `extra_excludes` are appended to them.
pub fn select_targets(
    config: &Config,
    tool: Option<&str>,
    patterns: &[String],
    extra_excludes: &[String],
) -> TargetSpec {
    let mut targets = match tool {
        Some(name) => config.targets_for(name),
        None => config.global_targets(),
    };
    if !patterns.is_empty() {
        targets.include = patterns.to_vec();
    }
    targets.exclude.extend(extra_excludes.iter().cloned());
    targets
}

/// Shorten a path for display.
///
/// Paths under `root` are shown relative to it; everything else is shown
/// in full.
pub fn display_relative(path: &Path, root: &Path) -> String {
    match path.strip_prefix(root) {
        Ok(relative) if relative.as_os_str().is_empty() => ".".to_string(),
        Ok(relative) => relative.display().to_string(),
        Err(_) => path.display().to_string(),
    }
}
