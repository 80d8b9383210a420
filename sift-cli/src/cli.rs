//! CLI structure and command definitions.
//!
//! This module defines the main CLI structure using clap's derive macros,
//! including global options and subcommands.

use crate::commands::{
    CheckPathsCommand, CompletionsCommand, DebugCommand, ResolveCommand,
    ShowDependencyDirCommand, ValidateCommand,
};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Resolve analysis target paths from include and exclude patterns.
#[derive(Parser)]
#[command(name = "sift")]
#[command(version, about = "Resolve analysis target paths", long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Project root (defaults to the nearest directory holding a sift.yaml)
    #[arg(long, value_name = "DIR", global = true, env = "SIFT_PROJECT_ROOT")]
    pub project_root: Option<PathBuf>,

    /// Override the data directory location
    #[arg(long, value_name = "DIR", global = true, env = "SIFT_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    /// Dependency directory, relative to the project root or absolute
    #[arg(long, value_name = "DIR", global = true, env = "SIFT_DEPENDENCY_DIR")]
    pub dependency_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand)]
pub enum Command {
    /// Print the resolved target paths
    Resolve(ResolveCommand),

    /// Check that paths exist and are readable
    CheckPaths(CheckPathsCommand),

    /// Show how each pattern was classified and resolved
    Debug(DebugCommand),

    /// Validate a configuration file
    Validate(ValidateCommand),

    /// Show the detected dependency directory
    ShowDependencyDir(ShowDependencyDirCommand),

    /// Generate shell completion scripts
    Completions(CompletionsCommand),
}
