//! Common test utilities for CLI integration tests.
//!
//! This module provides shared helpers for CLI testing, including:
//! - An isolated project tree and data directory per test
//! - Command builders with the sift environment scrubbed
//! - Output parsing helpers

use assert_cmd::Command;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Environment variables that would leak the developer's setup into tests.
const SIFT_ENV_VARS: &[&str] = &[
    "SIFT_PROJECT_ROOT",
    "SIFT_DATA_DIR",
    "SIFT_DEPENDENCY_DIR",
    "SIFT_PATHS",
    "SIFT_EXCLUDE",
    "SIFT_LOG_MODE",
];

/// Test environment with an isolated project and data directory.
pub struct TestEnv {
    /// Temporary directory (kept alive for the duration of the test)
    #[allow(dead_code)]
    temp_dir: TempDir,
    /// Project root under the temporary directory
    pub project: PathBuf,
    /// Data directory holding the user configuration (not created by default)
    pub data_dir: PathBuf,
}

#[allow(dead_code)]
impl TestEnv {
    /// Create a new test environment with an empty project directory.
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let project = temp_dir.path().join("project");
        std::fs::create_dir_all(&project).expect("Failed to create project dir");
        let data_dir = temp_dir.path().join("sift-data");

        Self {
            temp_dir,
            project,
            data_dir,
        }
    }

    /// Get a command builder with only the environment scrubbed.
    ///
    /// Use this when a test needs full control over the global flags.
    pub fn command_bare(&self) -> Command {
        let mut cmd = Command::cargo_bin("sift").expect("Failed to find sift binary");
        for var in SIFT_ENV_VARS {
            cmd.env_remove(var);
        }
        cmd
    }

    /// Get a command builder pointed at this environment's project and data
    /// directory.
    pub fn command(&self) -> Command {
        let mut cmd = self.command_bare();
        cmd.arg("--project-root")
            .arg(&self.project)
            .arg("--data-dir")
            .arg(&self.data_dir);
        cmd
    }

    /// Create directories under the project.
    pub fn dirs(&self, dirs: &[&str]) -> &Self {
        for d in dirs {
            std::fs::create_dir_all(self.project.join(d)).expect("Failed to create directory");
        }
        self
    }

    /// Write a file under the project, creating parent directories.
    pub fn write(&self, relative: &str, contents: &str) -> PathBuf {
        let path = self.project.join(relative);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&path, contents).expect("Failed to write file");
        path
    }

    /// The canonical project root, as sift prints it.
    pub fn root(&self) -> PathBuf {
        std::fs::canonicalize(&self.project).expect("Failed to canonicalize project")
    }

    /// Path of the temporary directory holding the project.
    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Run a command and return its stdout, asserting success.
    pub fn stdout_of(&self, args: &[&str]) -> String {
        let output = self
            .command()
            .args(args)
            .output()
            .expect("Failed to run sift");

        assert!(
            output.status.success(),
            "sift {args:?} failed: {}",
            String::from_utf8_lossy(&output.stderr)
        );

        String::from_utf8(output.stdout).expect("Invalid UTF-8 in output")
    }

    /// Run `resolve` with `args` and return the printed paths relative to the
    /// project root.
    pub fn resolve(&self, args: &[&str]) -> Vec<String> {
        let mut full = vec!["resolve"];
        full.extend_from_slice(args);
        let stdout = self.stdout_of(&full);
        relative_lines(&stdout, &self.root())
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}

/// Strip `root` from each non-empty output line.
#[allow(dead_code)]
pub fn relative_lines(stdout: &str, root: &Path) -> Vec<String> {
    stdout
        .lines()
        .filter(|l| !l.is_empty())
        .map(|line| {
            Path::new(line)
                .strip_prefix(root)
                .map_or_else(|_| line.to_string(), |p| p.to_string_lossy().into_owned())
        })
        .collect()
}
