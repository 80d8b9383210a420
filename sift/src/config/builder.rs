//! Layered configuration assembly.

use std::env;
use std::path::{Path, PathBuf};

use crate::config::environment::EnvironmentConfig;
use crate::config::loader::ConfigLoader;
use crate::config::merger::ConfigMerger;
use crate::config::schema::Config;
use crate::config::validator::ConfigValidator;
use crate::error::{Error, Result};

/// Builds the effective configuration from files, environment and overrides.
///
/// # Examples
///
/// ```
/// use sift::config::{Config, ConfigBuilder};
///
/// let config = ConfigBuilder::new()
///     .skip_files()
///     .skip_env()
///     .with_config(Config { paths: Some(vec!["src".into()]), ..Default::default() })
///     .build()
///     .unwrap();
///
/// assert_eq!(config.paths, Some(vec!["src".to_string()]));
/// ```
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    working_dir: Option<PathBuf>,
    data_dir: Option<PathBuf>,
    skip_files: bool,
    skip_env: bool,
    overrides: Vec<Config>,
}

impl ConfigBuilder {
    /// Create a builder that reads files from the current directory upward.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Discover project files starting at `dir` instead of the current directory.
    #[must_use]
    pub fn with_working_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.working_dir = Some(dir.into());
        self
    }

    /// Read the user configuration from `dir` instead of `~/.sift`.
    #[must_use]
    pub fn with_data_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.data_dir = Some(dir.into());
        self
    }

    /// Ignore every configuration file.
    #[must_use]
    pub fn skip_files(mut self) -> Self {
        self.skip_files = true;
        self
    }

    /// Ignore `SIFT_*` environment variables.
    #[must_use]
    pub fn skip_env(mut self) -> Self {
        self.skip_env = true;
        self
    }

    /// Layer a programmatic override on top of everything else.
    #[must_use]
    pub fn with_config(mut self, config: Config) -> Self {
        self.overrides.push(config);
        self
    }

    /// Load, merge and validate.
    ///
    /// # Errors
    ///
    /// Returns an error if a configuration file cannot be read or parsed, an
    /// environment variable is malformed, or the merged result is invalid.
    pub fn build(self) -> Result<Config> {
        let mut config = Config::default();

        if !self.skip_files {
            let working_dir = match self.working_dir {
                Some(dir) => dir,
                None => env::current_dir().map_err(Error::Io)?,
            };
            let sources = ConfigLoader::load_all(&working_dir, self.data_dir.as_deref())?;
            for source in &sources {
                ConfigValidator::validate(&source.config).map_err(|e| Self::in_file(&source.path, e))?;
            }
            config = ConfigMerger::merge(sources);
        }

        if !self.skip_env {
            EnvironmentConfig::apply_overrides(&mut config)?;
        }

        for layer in &self.overrides {
            ConfigMerger::merge_into(&mut config, layer);
        }

        ConfigValidator::validate(&config)?;
        Ok(config)
    }

    fn in_file(path: &Path, error: Error) -> Error {
        match error {
            Error::Validation { field, message } => Error::Validation {
                field: format!("{}: {field}", path.display()),
                message,
            },
            other => other,
        }
    }
}
