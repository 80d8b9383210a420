//! Configuration file discovery and loading.
//!
//! Three files can contribute, lowest precedence first:
//!
//! 1. `<data-dir>/config.yaml` (data dir defaults to `~/.sift`)
//! 2. `sift.yaml` in the project
//! 3. `sift.local.yaml` in the project, for uncommitted overrides

use crate::config::schema::Config;
use crate::error::{Error, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Project configuration file name.
pub const PROJECT_CONFIG_FILE: &str = "sift.yaml";

/// Private project configuration file name.
pub const LOCAL_CONFIG_FILE: &str = "sift.local.yaml";

/// User configuration file name inside the data directory.
pub const USER_CONFIG_FILE: &str = "config.yaml";

/// Configuration source with its precedence level.
///
/// Lower precedence values are overridden by higher ones.
#[derive(Debug, Clone)]
pub struct ConfigSource {
    /// Path to the configuration file.
    pub path: PathBuf,
    /// Precedence level (higher values take priority).
    pub precedence: u8,
    /// Parsed configuration.
    pub config: Config,
}

/// The default data directory, `~/.sift`.
///
/// # Errors
///
/// Returns an error if the home directory cannot be determined.
pub fn default_data_dir() -> Result<PathBuf> {
    home::home_dir()
        .map(|home| home.join(".sift"))
        .ok_or_else(|| Error::InvalidPath {
            path: PathBuf::from("~/.sift"),
            reason: "Cannot determine home directory".to_string(),
        })
}

/// Loads configuration from various sources.
///
/// # Examples
///
/// ```no_run
/// use sift::config::ConfigLoader;
/// use std::path::Path;
///
/// let sources = ConfigLoader::load_all(Path::new("."), None).unwrap();
/// println!("Found {} configuration sources", sources.len());
/// ```
pub struct ConfigLoader;

impl ConfigLoader {
    /// Discover and load all configuration files, sorted by precedence.
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration file exists but cannot be read
    /// or parsed.
    pub fn load_all(working_dir: &Path, data_dir: Option<&Path>) -> Result<Vec<ConfigSource>> {
        let mut sources = Vec::new();

        if let Some(user_config) = Self::load_user_config(data_dir)? {
            sources.push(user_config);
        }

        sources.extend(Self::discover_project_configs(working_dir)?);
        sources.sort_by_key(|s| s.precedence);

        Ok(sources)
    }

    fn load_user_config(data_dir: Option<&Path>) -> Result<Option<ConfigSource>> {
        let config_path = match data_dir {
            Some(dir) => dir.join(USER_CONFIG_FILE),
            None => match default_data_dir() {
                Ok(dir) => dir.join(USER_CONFIG_FILE),
                Err(e) => {
                    log::debug!("skipping user config: {e}");
                    return Ok(None);
                }
            },
        };

        if !config_path.exists() {
            return Ok(None);
        }

        let config = Self::load_file(&config_path)?;
        Ok(Some(ConfigSource {
            path: config_path,
            precedence: 1,
            config,
        }))
    }

    /// Walk up from `start_dir` looking for project configuration.
    ///
    /// Stops at the first directory containing either `sift.yaml` or
    /// `sift.local.yaml`.
    ///
    /// # Errors
    ///
    /// Returns an error if any discovered file cannot be read or parsed.
    pub fn discover_project_configs(start_dir: &Path) -> Result<Vec<ConfigSource>> {
        let mut configs = Vec::new();
        let mut current = start_dir.to_path_buf();

        loop {
            for (name, precedence) in [(PROJECT_CONFIG_FILE, 2), (LOCAL_CONFIG_FILE, 3)] {
                let path = current.join(name);
                if path.is_file() {
                    let config = Self::load_file(&path)?;
                    log::debug!("loaded {}", path.display());
                    configs.push(ConfigSource {
                        path,
                        precedence,
                        config,
                    });
                }
            }

            if !configs.is_empty() || !current.pop() {
                break;
            }
        }

        Ok(configs)
    }

    /// Directory holding the nearest project configuration, if any.
    #[must_use]
    pub fn find_project_dir(start_dir: &Path) -> Option<PathBuf> {
        start_dir
            .ancestors()
            .find(|dir| dir.join(PROJECT_CONFIG_FILE).is_file() || dir.join(LOCAL_CONFIG_FILE).is_file())
            .map(Path::to_path_buf)
    }

    /// Load and parse a YAML configuration file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or the YAML is invalid.
    pub fn load_file(path: &Path) -> Result<Config> {
        let contents = fs::read_to_string(path).map_err(|e| Error::InvalidPath {
            path: path.to_path_buf(),
            reason: format!("Failed to read configuration file: {e}"),
        })?;

        if contents.trim().is_empty() {
            return Ok(Config::default());
        }

        serde_yaml::from_str(&contents).map_err(|e| Error::Validation {
            field: format!("{}", path.display()),
            message: format!("Invalid YAML: {e}"),
        })
    }
}
