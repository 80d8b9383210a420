//! Hierarchical containment between absolute paths.
//!
//! Comparisons are component-wise, so `/project/vendor2` is never treated as
//! living under `/project/vendor` the way a naive string prefix would, and
//! `/project/src/` equals `/project/src`.

use std::path::Path;

/// `path` is `directory` or lies beneath it, without touching the filesystem.
///
/// This is the test behind directory-shaped exclusions. Callers canonicalize
/// first when symlinks matter.
///
/// ```
/// use sift::path::is_within;
/// use std::path::Path;
///
/// let root = Path::new("/p/src");
/// assert!(is_within(Path::new("/p/src/Kernel.php"), root));
/// assert!(is_within(Path::new("/p/src/"), root));
/// assert!(!is_within(Path::new("/p/srcs"), root));
/// ```
#[must_use]
pub fn is_within(path: &Path, directory: &Path) -> bool {
    path.starts_with(directory)
}
