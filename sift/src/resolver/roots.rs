//! Root selection: which directory a pattern is anchored to.
//!
//! Every resolver, the exclusion filter and the debug report go through
//! [`Roots`] so they agree on the absolute form of a pattern:
//!
//! - absolute patterns are used as-is
//! - `dependency` and `dependency/<rest>` anchor to the dependency root when
//!   one is configured
//! - everything else anchors to the project root

use std::path::{Path, PathBuf};

use crate::path::normalize::absolutize;
use crate::pattern::glob::escape_literal;
use crate::pattern::strip_dependency_marker;

/// Borrowed view of the project and dependency roots.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Roots<'a> {
    project: &'a Path,
    dependency: Option<&'a Path>,
}

impl<'a> Roots<'a> {
    pub(crate) fn new(project: &'a Path, dependency: Option<&'a Path>) -> Self {
        Self {
            project,
            dependency,
        }
    }

    pub(crate) fn project(&self) -> &'a Path {
        self.project
    }

    pub(crate) fn dependency(&self) -> Option<&'a Path> {
        self.dependency
    }

    /// Split `text` into the base directory it is anchored to and the
    /// remaining relative text. Absolute patterns have no base.
    fn split<'t>(&self, text: &'t str) -> (Option<&'a Path>, &'t str) {
        if Path::new(text).is_absolute() {
            return (None, text);
        }

        if let (Some(dependency), Some(rest)) = (self.dependency, strip_dependency_marker(text)) {
            return (Some(dependency), rest);
        }

        (Some(self.project), text)
    }

    /// Lexically absolute form of `text`, or `None` when it cannot be
    /// expressed (unsupported `~user` syntax, unknown home directory).
    pub(crate) fn absolute(&self, text: &str) -> Option<PathBuf> {
        let (base, rest) = self.split(text);
        let base = base.unwrap_or_else(|| Path::new("/"));

        match absolutize(base, Path::new(rest)) {
            Ok(path) => Some(path),
            Err(e) => {
                log::trace!("pattern '{text}' has no absolute form: {e}");
                None
            }
        }
    }

    /// Absolute glob text for `pattern`, with the anchoring root escaped so
    /// metacharacters in directory names are matched literally.
    pub(crate) fn glob_text(&self, pattern: &str) -> String {
        match self.split(pattern) {
            (None, absolute) => absolute.to_string(),
            (Some(base), "") => escape_literal(base),
            (Some(base), rest) => join_glob(base, rest),
        }
    }
}

/// Append a relative glob to an escaped literal directory.
pub(crate) fn join_glob(base: &Path, rest: &str) -> String {
    let escaped = escape_literal(base);
    let rest = rest.trim_start_matches("./");
    if escaped.ends_with('/') {
        format!("{escaped}{rest}")
    } else {
        format!("{escaped}/{rest}")
    }
}
