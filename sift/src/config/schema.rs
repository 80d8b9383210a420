//! Configuration schema definitions.
//!
//! A configuration names the dependency directory, the global scan list, the
//! global exclusion list, and per-tool overrides of both lists.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::PathBuf;

use crate::pattern::EXCLUSION_PREFIX;

/// Scan list used when no configuration names one: the whole project.
pub const DEFAULT_PATHS: &[&str] = &["."];

/// Complete configuration structure.
///
/// Every field is optional so partial files can be layered.
///
/// # Examples
///
/// ```
/// use sift::config::Config;
///
/// let config: Config = serde_yaml::from_str(
///     "paths: [src, tests]\nexclude: [src/Legacy]\n",
/// ).unwrap();
///
/// let targets = config.targets_for("phpstan");
/// assert_eq!(targets.include, vec!["src", "tests"]);
/// assert_eq!(targets.exclude, vec!["src/Legacy"]);
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Dependency directory, relative to the project root or absolute.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dependency_dir: Option<PathBuf>,

    /// Global scan list. Entries may carry a leading `!`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub paths: Option<Vec<String>>,

    /// Global exclusion list, written without `!`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exclude: Option<Vec<String>>,

    /// Per-tool settings keyed by tool name.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub tools: BTreeMap<String, ToolConfig>,
}

/// Settings for a single tool.
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ToolConfig {
    /// Whether the tool runs at all.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,

    /// Scan list replacing the global one for this tool.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub paths: Option<Vec<String>>,

    /// Exclusions added to the global list for this tool.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exclude: Option<Vec<String>>,
}

/// Include and exclusion patterns for one tool, kept as separate arrays.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TargetSpec {
    /// Scan patterns (may still contain `!` entries from the scan list).
    pub include: Vec<String>,
    /// Exclusion patterns without `!`.
    pub exclude: Vec<String>,
}

impl TargetSpec {
    /// Merge into a single list, prefixing every exclusion with `!`.
    ///
    /// # Examples
    ///
    /// ```
    /// use sift::config::TargetSpec;
    ///
    /// let spec = TargetSpec {
    ///     include: vec!["src".into()],
    ///     exclude: vec!["src/Legacy".into()],
    /// };
    /// assert_eq!(spec.to_patterns(), vec!["src", "!src/Legacy"]);
    /// ```
    #[must_use]
    pub fn to_patterns(&self) -> Vec<String> {
        self.include
            .iter()
            .cloned()
            .chain(
                self.exclude
                    .iter()
                    .map(|e| format!("{EXCLUSION_PREFIX}{e}")),
            )
            .collect()
    }
}

impl Config {
    /// Whether `tool` is enabled. Tools without an entry are enabled.
    #[must_use]
    pub fn is_tool_enabled(&self, tool: &str) -> bool {
        self.tools
            .get(tool)
            .and_then(|t| t.enabled)
            .unwrap_or(true)
    }

    /// Target patterns for `tool`.
    ///
    /// The tool's `paths` replace the global scan list; its `exclude` entries
    /// are appended to the global exclusions. Unknown tools get the global
    /// lists.
    #[must_use]
    pub fn targets_for(&self, tool: &str) -> TargetSpec {
        let tool = self.tools.get(tool);

        let include = tool
            .and_then(|t| t.paths.clone())
            .or_else(|| self.paths.clone())
            .unwrap_or_else(|| DEFAULT_PATHS.iter().map(|p| (*p).to_string()).collect());

        let mut exclude = self.exclude.clone().unwrap_or_default();
        if let Some(extra) = tool.and_then(|t| t.exclude.as_ref()) {
            for pattern in extra {
                if !exclude.contains(pattern) {
                    exclude.push(pattern.clone());
                }
            }
        }

        TargetSpec { include, exclude }
    }

    /// Target patterns with no tool-specific overrides.
    #[must_use]
    pub fn global_targets(&self) -> TargetSpec {
        self.targets_for("")
    }
}
