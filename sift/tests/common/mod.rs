//! Common test utilities for integration tests.
//!
//! [`ProjectFixture`] builds a throwaway project tree on disk and hands out a
//! resolver rooted at it.

use std::fs;
use std::path::{Path, PathBuf};

use sift::{ResolvedPath, TargetResolver};
use tempfile::TempDir;

/// Builder for an on-disk project tree.
///
/// # Examples
///
/// ```no_run
/// # use common::ProjectFixture;
/// let project = ProjectFixture::new()
///     .dirs(&["src/Http", "vendor/acme/http"])
///     .files(&["composer.json"]);
/// let mut resolver = project.resolver_with_dependencies("vendor");
/// ```
pub struct ProjectFixture {
    dir: TempDir,
}

#[allow(dead_code)]
impl ProjectFixture {
    /// Creates an empty project in a temporary directory.
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().unwrap(),
        }
    }

    /// Creates each directory (and its parents).
    pub fn dirs(self, dirs: &[&str]) -> Self {
        for d in dirs {
            fs::create_dir_all(self.dir.path().join(d)).unwrap();
        }
        self
    }

    /// Creates each file, empty, with its parent directories.
    pub fn files(self, files: &[&str]) -> Self {
        for f in files {
            self.write(f, "");
        }
        self
    }

    /// Writes `contents` to `relative`.
    pub fn write(&self, relative: &str, contents: &str) -> PathBuf {
        let path = self.dir.path().join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, contents).unwrap();
        path
    }

    /// The project root as created (not canonicalized).
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// The canonical project root, as the resolver reports it.
    pub fn root(&self) -> PathBuf {
        fs::canonicalize(self.dir.path()).unwrap()
    }

    /// A resolver with no dependency root.
    pub fn resolver(&self) -> TargetResolver {
        TargetResolver::new(self.dir.path()).unwrap()
    }

    /// A resolver whose dependency root is `dependency_dir` under the project.
    pub fn resolver_with_dependencies(&self, dependency_dir: &str) -> TargetResolver {
        self.resolver().with_dependency_root(dependency_dir)
    }

    /// Strips the canonical root from resolved paths for readable assertions.
    pub fn relative(&self, resolved: &[ResolvedPath]) -> Vec<String> {
        let root = self.root();
        resolved
            .iter()
            .map(|p| {
                p.as_path()
                    .strip_prefix(&root)
                    .unwrap_or_else(|_| p.as_path())
                    .to_string_lossy()
                    .into_owned()
            })
            .collect()
    }
}
