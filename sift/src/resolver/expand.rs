//! Include-side resolution: direct paths, globs and dependency namespaces.

use std::collections::{BTreeSet, HashSet};
use std::fs;
use std::path::Path;

use crate::path::{resolve_existing, ResolvedPath};
use crate::pattern::glob::{expand_braces, has_glob_meta, MATCH_OPTIONS};
use crate::pattern::{classify, PatternKind};
use crate::resolver::roots::{join_glob, Roots};

/// Union of every include pattern's matches.
#[derive(Debug, Default)]
pub(crate) struct Expansion {
    /// Sorted, deduplicated candidates.
    pub(crate) paths: BTreeSet<ResolvedPath>,
    /// Candidates that came from an explicit dependency pattern.
    pub(crate) explicit: HashSet<ResolvedPath>,
}

impl Expansion {
    fn extend(&mut self, paths: Vec<ResolvedPath>, explicit: bool) {
        for path in paths {
            if explicit {
                self.explicit.insert(path.clone());
            }
            self.paths.insert(path);
        }
    }
}

/// Classify and resolve every include pattern.
pub(crate) fn expand_includes(roots: Roots<'_>, includes: &[String]) -> Expansion {
    let mut expansion = Expansion::default();

    for pattern in includes {
        let kind = classify(pattern, roots.dependency());
        let explicit = kind.is_explicit_dependency();

        let paths = match &kind {
            PatternKind::DependencyNamespace { namespace, suffix } => {
                resolve_namespace(roots, namespace, suffix.as_deref())
            }
            PatternKind::Glob { pattern, .. } => resolve_glob(roots, pattern),
            PatternKind::Direct(path) => resolve_direct(roots, path).into_iter().collect(),
        };

        log::debug!("'{pattern}' ({kind}) matched {} path(s)", paths.len());
        expansion.extend(paths, explicit);
    }

    expansion
}

/// Expand `<namespace>/*[/<suffix>]` against the dependency root.
///
/// Each visible package directory under `<dependency-root>/<namespace>` is
/// substituted for `*`. A suffix containing glob metacharacters, brace
/// alternation included, is itself expanded inside every package.
pub(crate) fn resolve_namespace(
    roots: Roots<'_>,
    namespace: &str,
    suffix: Option<&str>,
) -> Vec<ResolvedPath> {
    let Some(dependency) = roots.dependency() else {
        return Vec::new();
    };

    let namespace_dir = dependency.join(namespace);
    let mut resolved = Vec::new();

    for package in list_packages(&namespace_dir) {
        let package_dir = namespace_dir.join(&package);
        match suffix {
            None => resolved.extend(resolve_existing(&package_dir)),
            Some(suffix) if has_glob_meta(suffix) => {
                for alternative in expand_braces(suffix) {
                    resolved.extend(expand_glob(&join_glob(&package_dir, &alternative)));
                }
            }
            Some(suffix) => resolved.extend(resolve_existing(&package_dir.join(suffix))),
        }
    }

    resolved
}

/// Visible immediate subdirectories of `dir`, sorted by name.
fn list_packages(dir: &Path) -> Vec<String> {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) => {
            log::trace!("cannot list {}: {e}", dir.display());
            return Vec::new();
        }
    };

    let mut packages: Vec<String> = entries
        .filter_map(std::result::Result::ok)
        .filter(|entry| entry.path().is_dir())
        .filter_map(|entry| entry.file_name().into_string().ok())
        .filter(|name| !name.starts_with('.'))
        .collect();
    packages.sort();
    packages
}

/// Expand a glob anchored by the root-selection rule.
///
/// Brace alternatives are split out before anchoring so the escaped root is
/// never subject to alternation.
pub(crate) fn resolve_glob(roots: Roots<'_>, pattern: &str) -> Vec<ResolvedPath> {
    expand_braces(pattern)
        .iter()
        .flat_map(|alternative| expand_glob(&roots.glob_text(alternative)))
        .collect()
}

/// Run one absolute glob against the filesystem.
fn expand_glob(glob_text: &str) -> Vec<ResolvedPath> {
    let entries = match glob::glob_with(glob_text, MATCH_OPTIONS) {
        Ok(entries) => entries,
        Err(e) => {
            log::debug!("ignoring unparsable glob '{glob_text}': {e}");
            return Vec::new();
        }
    };

    entries
        .filter_map(|entry| match entry {
            Ok(path) => resolve_existing(&path),
            Err(e) => {
                log::trace!("glob entry skipped: {e}");
                None
            }
        })
        .collect()
}

/// Resolve a literal path, if it exists.
pub(crate) fn resolve_direct(roots: Roots<'_>, path: &str) -> Option<ResolvedPath> {
    resolve_existing(&roots.absolute(path)?)
}
