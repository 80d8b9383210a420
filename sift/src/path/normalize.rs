//! Lexical path normalization.
//!
//! Patterns are anchored before anything touches the disk, so a pattern for
//! a path that does not exist yet still has a well-defined absolute form.
//! Nothing here reads the filesystem apart from asking for the home and
//! current directories.

use std::env;
use std::path::{Component, Path, PathBuf};

use crate::error::{Error, Result};

fn invalid(path: &Path, reason: impl Into<String>) -> Error {
    Error::InvalidPath {
        path: path.to_path_buf(),
        reason: reason.into(),
    }
}

/// Replace a leading `~` or `~/` with the home directory.
///
/// `~user` forms are rejected rather than guessed at.
fn expand_home(path: &Path) -> Result<PathBuf> {
    let Some(text) = path.to_str() else {
        return Ok(path.to_path_buf());
    };
    let Some(rest) = text.strip_prefix('~') else {
        return Ok(path.to_path_buf());
    };

    let rest = match rest.strip_prefix(['/', '\\']) {
        Some(rest) => rest,
        None if rest.is_empty() => rest,
        None => return Err(invalid(path, "~user paths are not supported")),
    };

    let home = home::home_dir().ok_or_else(|| invalid(path, "home directory is unknown"))?;
    Ok(if rest.is_empty() { home } else { home.join(rest) })
}

/// Collapse `.` and `..` without consulting the filesystem.
///
/// `..` at the root stays at the root, as `/..` does on POSIX.
fn collapse(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                out.pop();
            }
            other => out.push(other.as_os_str()),
        }
    }
    out
}

/// Anchor `path` to `base` and resolve its `.`/`..` components.
///
/// Absolute inputs ignore `base`. Tilde is expanded first.
///
/// # Errors
///
/// Returns [`Error::InvalidPath`] for `~user` paths and when the home
/// directory is unknown.
///
/// # Examples
///
/// ```
/// use sift::path::normalize::absolutize;
/// use std::path::Path;
///
/// let abs = absolutize(Path::new("/p"), Path::new("./src/../lib")).unwrap();
/// assert_eq!(abs, Path::new("/p/lib"));
///
/// let abs = absolutize(Path::new("/p"), Path::new("/etc")).unwrap();
/// assert_eq!(abs, Path::new("/etc"));
///
/// let abs = absolutize(Path::new("/p"), Path::new("../../etc")).unwrap();
/// assert_eq!(abs, Path::new("/etc"));
/// ```
pub fn absolutize(base: &Path, path: &Path) -> Result<PathBuf> {
    let expanded = expand_home(path)?;
    if expanded.is_absolute() {
        Ok(collapse(&expanded))
    } else {
        Ok(collapse(&base.join(expanded)))
    }
}

/// [`absolutize`] against the current directory.
///
/// # Errors
///
/// As [`absolutize`], plus failure to read the current directory.
pub fn normalize(path: &Path) -> Result<PathBuf> {
    let cwd = env::current_dir()
        .map_err(|e| invalid(path, format!("current directory is unavailable: {e}")))?;
    absolutize(&cwd, path)
}
