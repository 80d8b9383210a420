//! Configuration system for sift.
//!
//! This module provides hierarchical configuration with support for:
//! - YAML configuration files (user config and project `sift.yaml` files)
//! - Environment variable overrides
//! - Programmatic configuration via builder pattern
//! - Structural validation
//!
//! # Configuration Precedence
//!
//! Configuration is merged from multiple sources with the following precedence
//! (highest to lowest):
//!
//! 1. Programmatic overrides (via `ConfigBuilder::with_config`)
//! 2. Environment variables (`SIFT_*`)
//! 3. Private project config (`sift.local.yaml`)
//! 4. Project config (`sift.yaml`)
//! 5. User config (`~/.sift/config.yaml`)
//! 6. Built-in defaults
//!
//! # Examples
//!
//! Loading from a specific directory:
//!
//! ```no_run
//! use sift::config::ConfigBuilder;
//!
//! let config = ConfigBuilder::new()
//!     .with_working_dir("/path/to/project")
//!     .build()
//!     .unwrap();
//!
//! let targets = config.targets_for("phpstan");
//! println!("scan: {:?}, exclude: {:?}", targets.include, targets.exclude);
//! ```

pub mod builder;
pub mod environment;
pub mod loader;
pub mod merger;
#[cfg(all(test, feature = "property-tests"))]
mod proptests;
pub mod schema;
pub mod validator;

pub use builder::ConfigBuilder;
pub use environment::EnvironmentConfig;
pub use loader::{default_data_dir, ConfigLoader, ConfigSource};
pub use merger::ConfigMerger;
pub use schema::{Config, TargetSpec, ToolConfig, DEFAULT_PATHS};
pub use validator::ConfigValidator;
