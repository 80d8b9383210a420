//! CLI command implementations.
//!
//! This module contains the implementations of all CLI commands:
//! - `resolve`: Print the resolved target paths
//! - `check_paths`: Partition paths into valid, invalid and inaccessible
//! - `debug`: Show pattern classification alongside the resolved list
//! - `validate`: Validate a configuration file
//! - `show_dependency_dir`: Show the detected dependency directory
//! - `completions`: Generate shell completion scripts

pub mod check_paths;
pub mod completions;
pub mod debug;
pub mod resolve;
pub mod show_dependency_dir;
pub mod validate;

pub use check_paths::CheckPathsCommand;
pub use completions::CompletionsCommand;
pub use debug::DebugCommand;
pub use resolve::ResolveCommand;
pub use show_dependency_dir::ShowDependencyDirCommand;
pub use validate::ValidateCommand;
