//! Environment variable handling for configuration overrides.
//!
//! Recognized variables:
//!
//! - `SIFT_DEPENDENCY_DIR`: dependency directory
//! - `SIFT_PATHS`: comma-separated scan list (replaces configured paths)
//! - `SIFT_EXCLUDE`: comma-separated exclusions (added to configured ones)

use crate::config::schema::Config;
use crate::error::{Error, Result};
use std::env;
use std::path::PathBuf;

/// Handles environment variable overrides for configuration.
///
/// # Examples
///
/// ```no_run
/// use sift::config::{Config, EnvironmentConfig};
///
/// let mut config = Config::default();
/// EnvironmentConfig::apply_overrides(&mut config).unwrap();
/// ```
pub struct EnvironmentConfig;

impl EnvironmentConfig {
    /// Apply `SIFT_*` overrides to `config`.
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is set but empty after trimming.
    pub fn apply_overrides(config: &mut Config) -> Result<()> {
        if let Ok(dir) = env::var("SIFT_DEPENDENCY_DIR") {
            let dir = dir.trim();
            if dir.is_empty() {
                return Err(Error::Validation {
                    field: "SIFT_DEPENDENCY_DIR".into(),
                    message: "Must not be empty".into(),
                });
            }
            config.dependency_dir = Some(PathBuf::from(dir));
        }

        if let Ok(paths) = env::var("SIFT_PATHS") {
            config.paths = Some(Self::parse_list("SIFT_PATHS", &paths)?);
        }

        if let Ok(exclude) = env::var("SIFT_EXCLUDE") {
            let extra = Self::parse_list("SIFT_EXCLUDE", &exclude)?;
            let list = config.exclude.get_or_insert_with(Vec::new);
            for pattern in extra {
                if !list.contains(&pattern) {
                    list.push(pattern);
                }
            }
        }

        Ok(())
    }

    /// Split a comma-separated list, trimming entries and dropping blanks.
    fn parse_list(field: &str, s: &str) -> Result<Vec<String>> {
        let items: Vec<String> = s
            .split(',')
            .map(str::trim)
            .filter(|item| !item.is_empty())
            .map(str::to_string)
            .collect();

        if items.is_empty() {
            return Err(Error::Validation {
                field: field.into(),
                message: "Must contain at least one pattern".into(),
            });
        }

        Ok(items)
    }
}
