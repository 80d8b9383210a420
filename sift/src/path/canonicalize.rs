//! Path canonicalization functions.
//!
//! This module is the single place where symlinks and relative segments are
//! resolved against the real filesystem. Every resolver and the exclusion
//! filter go through [`resolve_existing`] so they agree on what a path's
//! canonical form is.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::path::types::ResolvedPath;

/// Canonicalize a path by following symlinks.
///
/// The path must exist for canonicalization to succeed.
///
/// # Errors
///
/// Returns an error if:
/// - The path does not exist (`PathNotFound`)
/// - Permission is denied (`PermissionDenied`)
/// - An I/O error occurs (including symlink loops)
///
/// # Examples
///
/// ```no_run
/// use sift::path::canonicalize::canonicalize;
/// use std::path::Path;
///
/// let canonical = canonicalize(Path::new("/tmp")).unwrap();
/// assert!(canonical.is_absolute());
/// ```
pub fn canonicalize(path: &Path) -> Result<PathBuf> {
    fs::canonicalize(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => Error::PathNotFound {
            path: path.to_path_buf(),
        },
        ErrorKind::PermissionDenied => Error::PermissionDenied {
            path: path.to_path_buf(),
        },
        _ => Error::Io(e),
    })
}

/// Resolve a path that must exist as a file or directory.
///
/// Returns `None` when the path is missing or cannot be canonicalized (for
/// example when it vanished between listing and resolution). Failures are
/// logged at trace level and otherwise swallowed.
///
/// # Examples
///
/// ```
/// use sift::path::canonicalize::resolve_existing;
/// use std::path::Path;
///
/// assert!(resolve_existing(Path::new("/definitely/not/here")).is_none());
/// ```
#[must_use]
pub fn resolve_existing(path: &Path) -> Option<ResolvedPath> {
    match canonicalize(path) {
        Ok(canonical) if canonical.is_dir() || canonical.is_file() => {
            Some(ResolvedPath::new_unchecked(canonical))
        }
        Ok(canonical) => {
            log::trace!("skipping {}: not a file or directory", canonical.display());
            None
        }
        Err(e) => {
            log::trace!("skipping {}: {e}", path.display());
            None
        }
    }
}

/// Canonicalize a path if it exists, returning the original otherwise.
///
/// # Examples
///
/// ```
/// use sift::path::canonicalize::try_canonicalize;
/// use std::path::Path;
///
/// let missing = Path::new("/nonexistent/path");
/// assert_eq!(try_canonicalize(missing), missing);
/// ```
#[must_use]
pub fn try_canonicalize(path: &Path) -> PathBuf {
    canonicalize(path).unwrap_or_else(|_| path.to_path_buf())
}

/// Canonicalize only the parent directory of `path`, keeping its last segment.
///
/// Used for prefix-style patterns such as `src/Legacy*`, where the final
/// segment is a partial name that never exists on its own but the directory
/// holding it may sit behind a symlink. When the parent is missing the path
/// comes back unchanged.
///
/// # Examples
///
/// ```
/// use sift::path::canonicalize::canonicalize_parent;
/// use std::path::Path;
///
/// let unchanged = canonicalize_parent(Path::new("/nonexistent/dir/Legacy"));
/// assert_eq!(unchanged, Path::new("/nonexistent/dir/Legacy"));
/// ```
#[must_use]
pub fn canonicalize_parent(path: &Path) -> PathBuf {
    let (Some(parent), Some(name)) = (path.parent(), path.file_name()) else {
        return path.to_path_buf();
    };

    if !parent.is_dir() {
        return path.to_path_buf();
    }

    match canonicalize(parent) {
        Ok(canonical) => canonical.join(name),
        Err(_) => path.to_path_buf(),
    }
}
