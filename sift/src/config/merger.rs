//! Configuration merging and precedence handling.
//!
//! Scalars and scan lists are replaced by higher-precedence sources, while
//! exclusion lists accumulate so a local file can add to the project's
//! exclusions without repeating them.

use crate::config::loader::ConfigSource;
use crate::config::schema::{Config, ToolConfig};

/// Merges configuration sources according to precedence rules.
///
/// # Examples
///
/// ```
/// use sift::config::{Config, ConfigMerger};
///
/// let low = Config { exclude: Some(vec!["build".into()]), ..Default::default() };
/// let high = Config { exclude: Some(vec!["dist".into()]), ..Default::default() };
///
/// let mut result = low;
/// ConfigMerger::merge_into(&mut result, &high);
/// assert_eq!(result.exclude, Some(vec!["build".to_string(), "dist".to_string()]));
/// ```
pub struct ConfigMerger;

impl ConfigMerger {
    /// Merge sources given from lowest to highest precedence.
    #[must_use]
    pub fn merge(sources: Vec<ConfigSource>) -> Config {
        let mut result = Config::default();

        for source in sources {
            Self::merge_into(&mut result, &source.config);
        }

        result
    }

    /// Merge `source` into `target`; `source` wins.
    ///
    /// # Merging Rules
    ///
    /// - `dependency_dir`: overwritten if set
    /// - `paths`: replaced if set
    /// - `exclude`: accumulated, without duplicates
    /// - `tools`: merged per tool name, field by field
    pub fn merge_into(target: &mut Config, source: &Config) {
        if source.dependency_dir.is_some() {
            target.dependency_dir.clone_from(&source.dependency_dir);
        }

        if source.paths.is_some() {
            target.paths.clone_from(&source.paths);
        }

        if let Some(ref source_exclude) = source.exclude {
            Self::accumulate(&mut target.exclude, source_exclude);
        }

        for (name, source_tool) in &source.tools {
            let target_tool = target.tools.entry(name.clone()).or_default();
            Self::merge_tool(target_tool, source_tool);
        }
    }

    fn merge_tool(target: &mut ToolConfig, source: &ToolConfig) {
        if source.enabled.is_some() {
            target.enabled = source.enabled;
        }

        if source.paths.is_some() {
            target.paths.clone_from(&source.paths);
        }

        if let Some(ref source_exclude) = source.exclude {
            Self::accumulate(&mut target.exclude, source_exclude);
        }
    }

    fn accumulate(target: &mut Option<Vec<String>>, source: &[String]) {
        let list = target.get_or_insert_with(Vec::new);
        for pattern in source {
            if !list.contains(pattern) {
                list.push(pattern.clone());
            }
        }
    }
}
