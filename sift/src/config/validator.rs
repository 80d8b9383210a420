//! Configuration validation.
//!
//! Validation is structural only. Whether a pattern matches anything is a
//! resolution question, and resolution never fails on odd patterns.

use crate::config::schema::{Config, ToolConfig};
use crate::error::{Error, Result};
use crate::pattern::EXCLUSION_PREFIX;

/// Validates a merged or single-file configuration.
///
/// # Examples
///
/// ```
/// use sift::config::{Config, ConfigValidator};
///
/// let config = Config::default();
/// ConfigValidator::validate(&config).unwrap();
///
/// let bad = Config { exclude: Some(vec!["!vendor".into()]), ..Default::default() };
/// assert!(ConfigValidator::validate(&bad).is_err());
/// ```
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate a complete configuration.
    ///
    /// # Errors
    ///
    /// Returns a [`Error::Validation`] naming the first offending field.
    pub fn validate(config: &Config) -> Result<()> {
        if let Some(ref dir) = config.dependency_dir {
            if dir.as_os_str().is_empty() {
                return Err(Error::Validation {
                    field: "dependency_dir".into(),
                    message: "Cannot be empty".into(),
                });
            }
        }

        if let Some(ref paths) = config.paths {
            Self::validate_patterns("paths", paths)?;
        }

        if let Some(ref exclude) = config.exclude {
            Self::validate_exclusions("exclude", exclude)?;
        }

        for (name, tool) in &config.tools {
            Self::validate_tool_name(name)?;
            Self::validate_tool(name, tool)?;
        }

        Ok(())
    }

    fn validate_tool(name: &str, tool: &ToolConfig) -> Result<()> {
        if let Some(ref paths) = tool.paths {
            Self::validate_patterns(&format!("tools.{name}.paths"), paths)?;
        }

        if let Some(ref exclude) = tool.exclude {
            Self::validate_exclusions(&format!("tools.{name}.exclude"), exclude)?;
        }

        Ok(())
    }

    fn validate_patterns(field: &str, patterns: &[String]) -> Result<()> {
        for (i, pattern) in patterns.iter().enumerate() {
            let text = pattern.strip_prefix(EXCLUSION_PREFIX).unwrap_or(pattern);

            if text.trim().is_empty() {
                return Err(Error::Validation {
                    field: format!("{field}[{i}]"),
                    message: "Pattern cannot be empty".into(),
                });
            }

            if pattern.contains('\0') {
                return Err(Error::Validation {
                    field: format!("{field}[{i}]"),
                    message: "Pattern cannot contain null bytes".into(),
                });
            }
        }

        Ok(())
    }

    fn validate_exclusions(field: &str, patterns: &[String]) -> Result<()> {
        Self::validate_patterns(field, patterns)?;

        if let Some(i) = patterns.iter().position(|p| p.starts_with(EXCLUSION_PREFIX)) {
            return Err(Error::Validation {
                field: format!("{field}[{i}]"),
                message: format!("Exclusions are written without a leading '{EXCLUSION_PREFIX}'"),
            });
        }

        Ok(())
    }

    /// Tool names are identifiers: letters, digits, `_` and `-`.
    fn validate_tool_name(name: &str) -> Result<()> {
        if name.is_empty() {
            return Err(Error::Validation {
                field: "tools".into(),
                message: "Tool name cannot be empty".into(),
            });
        }

        if let Some(c) = name
            .chars()
            .find(|c| !c.is_ascii_alphanumeric() && *c != '_' && *c != '-')
        {
            return Err(Error::Validation {
                field: format!("tools.{name}"),
                message: format!("Tool name contains invalid character '{c}'"),
            });
        }

        Ok(())
    }
}
