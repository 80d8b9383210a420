//! Dependency-root auto-detection.
//!
//! A project's third-party packages usually live in a well-known directory
//! (`vendor` for Composer, `node_modules` for npm). [`DependencyDetector`]
//! picks the first one that exists, preferring an explicitly configured
//! directory, and remembers the answer per project root.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::path::canonicalize::try_canonicalize;
use crate::path::normalize::absolutize;

/// Candidate directory names tried when nothing is configured.
pub const DEFAULT_CANDIDATES: &[&str] = &["vendor", "node_modules"];

/// Finds the dependency root for a project.
///
/// The cache belongs to the detector instance; two detectors never share
/// answers.
///
/// # Examples
///
/// ```
/// use sift::DependencyDetector;
/// use std::fs;
///
/// let dir = tempfile::tempdir().unwrap();
/// fs::create_dir(dir.path().join("node_modules")).unwrap();
///
/// let mut detector = DependencyDetector::new();
/// let root = detector.detect(dir.path()).unwrap();
/// assert!(root.ends_with("node_modules"));
/// ```
#[derive(Debug, Clone)]
pub struct DependencyDetector {
    configured: Option<PathBuf>,
    candidates: Vec<String>,
    cache: HashMap<PathBuf, Option<PathBuf>>,
}

impl Default for DependencyDetector {
    fn default() -> Self {
        Self::new()
    }
}

impl DependencyDetector {
    /// Create a detector using [`DEFAULT_CANDIDATES`].
    #[must_use]
    pub fn new() -> Self {
        Self {
            configured: None,
            candidates: DEFAULT_CANDIDATES.iter().map(|c| (*c).to_string()).collect(),
            cache: HashMap::new(),
        }
    }

    /// Prefer `dir` (relative to the project root, or absolute) when it exists.
    #[must_use]
    pub fn with_configured(mut self, dir: impl Into<PathBuf>) -> Self {
        self.configured = Some(dir.into());
        self.cache.clear();
        self
    }

    /// Replace the candidate list.
    #[must_use]
    pub fn with_candidates<I, S>(mut self, candidates: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.candidates = candidates.into_iter().map(Into::into).collect();
        self.cache.clear();
        self
    }

    /// Detect the dependency root of `project_root`, memoized.
    ///
    /// Returns `None` when neither the configured directory nor any candidate
    /// exists. A configured directory that is missing falls through to the
    /// candidates.
    pub fn detect(&mut self, project_root: &Path) -> Option<PathBuf> {
        let key = try_canonicalize(project_root);
        if let Some(cached) = self.cache.get(&key) {
            return cached.clone();
        }

        let found = self.search(&key);
        match &found {
            Some(root) => log::debug!("dependency root for {}: {}", key.display(), root.display()),
            None => log::debug!("no dependency root found for {}", key.display()),
        }

        self.cache.insert(key, found.clone());
        found
    }

    fn search(&self, project_root: &Path) -> Option<PathBuf> {
        if let Some(configured) = &self.configured {
            match absolutize(project_root, configured) {
                Ok(dir) if dir.is_dir() => return Some(try_canonicalize(&dir)),
                Ok(dir) => log::warn!(
                    "configured dependency directory {} does not exist",
                    dir.display()
                ),
                Err(e) => log::warn!("ignoring dependency directory: {e}"),
            }
        }

        self.candidates
            .iter()
            .map(|name| project_root.join(name))
            .find(|dir| dir.is_dir())
            .map(|dir| try_canonicalize(&dir))
    }

    /// Forget every memoized answer.
    pub fn clear_cache(&mut self) {
        self.cache.clear();
    }
}
