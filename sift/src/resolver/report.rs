//! Diagnostic reports: path validation and pattern debugging.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::path::ResolvedPath;

/// Partition of a path list by existence and readability.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    /// Paths that exist and can be read, in canonical form.
    pub valid: Vec<PathBuf>,
    /// Paths that do not exist.
    pub invalid: Vec<PathBuf>,
    /// Paths that exist but cannot be read.
    pub inaccessible: Vec<PathBuf>,
}

impl ValidationReport {
    /// True when every path was valid.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.invalid.is_empty() && self.inaccessible.is_empty()
    }

    pub(crate) fn record(&mut self, path: PathBuf) {
        match probe(&path) {
            Probe::Readable(canonical) => self.valid.push(canonical),
            Probe::Missing => self.invalid.push(path),
            Probe::Unreadable => self.inaccessible.push(path),
        }
    }
}

enum Probe {
    Readable(PathBuf),
    Missing,
    Unreadable,
}

fn probe(path: &Path) -> Probe {
    let metadata = match fs::metadata(path) {
        Ok(metadata) => metadata,
        Err(e) if e.kind() == ErrorKind::PermissionDenied => return Probe::Unreadable,
        Err(_) => return Probe::Missing,
    };

    let readable = if metadata.is_dir() {
        fs::read_dir(path).is_ok()
    } else {
        fs::File::open(path).is_ok()
    };

    if !readable {
        return Probe::Unreadable;
    }

    match fs::canonicalize(path) {
        Ok(canonical) => Probe::Readable(canonical),
        Err(_) => Probe::Unreadable,
    }
}

/// How a single pattern was interpreted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PatternReport {
    /// The pattern as given, including any `!`.
    pub pattern: String,
    /// Dialect label: `direct`, `glob`, `dependency_glob` or `dependency_namespace`.
    pub kind: String,
    /// Whether the pattern is an exclusion.
    pub exclusion: bool,
    /// Absolute form after root selection, when one exists.
    pub absolute: Option<PathBuf>,
}

/// Full introspection of one resolution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DebugReport {
    /// Canonical project root.
    pub project_root: PathBuf,
    /// Dependency root in effect, if any.
    pub dependency_root: Option<PathBuf>,
    /// One entry per non-empty input pattern, in input order.
    pub patterns: Vec<PatternReport>,
    /// The final resolved list.
    pub resolved: Vec<ResolvedPath>,
}
