//! Exclusion filtering.
//!
//! Each exclusion pattern is compiled once into an [`ExclusionRule`] holding
//! every matching strategy that applies to its shape. A candidate is evicted
//! by the first rule with a matching strategy.
//!
//! Strategies, in the order they are tried:
//!
//! 1. trailing `*`: prefix match on the text before the `*`
//! 2. trailing `/`: the candidate lies within the directory
//! 3. exact: the candidate equals the (canonicalized) pattern
//! 4. directory prefix: the pattern is an existing directory and the
//!    candidate lies within it
//! 5. glob: the pattern has glob metacharacters and matches the candidate
//!
//! Rules whose text is exactly the dependency marker never evict explicit
//! dependency paths.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use globset::GlobMatcher;

use crate::path::canonicalize::{canonicalize_parent, try_canonicalize};
use crate::path::{is_within, ResolvedPath};
use crate::pattern::glob::{compile_matcher, expand_braces, has_glob_meta};
use crate::pattern::is_dependency_marker;
use crate::resolver::roots::Roots;

#[derive(Debug)]
enum Strategy {
    Prefix(String),
    Within(PathBuf),
    Exact(PathBuf),
    Glob(GlobMatcher),
}

impl Strategy {
    fn matches(&self, candidate: &Path) -> bool {
        match self {
            Self::Prefix(prefix) => candidate.to_string_lossy().starts_with(prefix.as_str()),
            Self::Within(dir) => is_within(candidate, dir),
            Self::Exact(path) => candidate == path,
            Self::Glob(matcher) => matcher.is_match(candidate),
        }
    }
}

/// A compiled exclusion pattern.
#[derive(Debug)]
pub(crate) struct ExclusionRule {
    text: String,
    exempts_explicit: bool,
    strategies: Vec<Strategy>,
}

impl ExclusionRule {
    /// Compile `text` (without its `!`) against the given roots.
    ///
    /// A pattern with no absolute form compiles to a rule that never matches.
    pub(crate) fn compile(roots: Roots<'_>, text: &str) -> Self {
        let mut strategies = Vec::new();

        if let Some(absolute) = roots.absolute(text) {
            if let Some(stem) = text.strip_suffix('*') {
                if let Some(prefix) = prefix_for(roots, stem) {
                    strategies.push(Strategy::Prefix(prefix));
                }
            }

            if text.ends_with('/') {
                strategies.push(Strategy::Within(canonical_if_dir(&absolute)));
            } else {
                strategies.push(Strategy::Exact(try_canonicalize(&absolute)));
                if absolute.is_dir() {
                    strategies.push(Strategy::Within(try_canonicalize(&absolute)));
                }
            }

            if has_glob_meta(text) {
                strategies.extend(
                    expand_braces(text)
                        .iter()
                        .filter_map(|alternative| compile_matcher(&roots.glob_text(alternative)))
                        .map(Strategy::Glob),
                );
            }
        }

        Self {
            text: text.to_string(),
            exempts_explicit: is_dependency_marker(text),
            strategies,
        }
    }

    /// Pattern text as written, without the `!`.
    pub(crate) fn text(&self) -> &str {
        &self.text
    }

    /// Whether this rule evicts `candidate`.
    pub(crate) fn matches(&self, candidate: &Path, explicit: bool) -> bool {
        if explicit && self.exempts_explicit {
            return false;
        }
        self.strategies.iter().any(|s| s.matches(candidate))
    }
}

/// String prefix for a trailing-`*` pattern.
///
/// `src/Legacy*` becomes `<root>/src/Legacy` with the parent canonicalized;
/// `vendor/*` and `*` become the directory followed by a separator so the
/// directory itself is not matched.
fn prefix_for(roots: Roots<'_>, stem: &str) -> Option<String> {
    if stem.is_empty() || stem.ends_with('/') {
        let dir = if stem.is_empty() {
            roots.project().to_path_buf()
        } else {
            canonical_if_dir(&roots.absolute(stem)?)
        };
        let mut prefix = dir.to_string_lossy().into_owned();
        if !prefix.ends_with('/') {
            prefix.push('/');
        }
        return Some(prefix);
    }

    let absolute = roots.absolute(stem)?;
    Some(canonicalize_parent(&absolute).to_string_lossy().into_owned())
}

fn canonical_if_dir(path: &Path) -> PathBuf {
    if path.is_dir() {
        try_canonicalize(path)
    } else {
        path.to_path_buf()
    }
}

/// Remove every candidate evicted by `rules`, preserving order.
pub(crate) fn apply(
    candidates: impl IntoIterator<Item = ResolvedPath>,
    rules: &[ExclusionRule],
    explicit: &HashSet<ResolvedPath>,
) -> Vec<ResolvedPath> {
    candidates
        .into_iter()
        .filter(|candidate| {
            let is_explicit = explicit.contains(candidate);
            match rules
                .iter()
                .find(|rule| rule.matches(candidate.as_path(), is_explicit))
            {
                Some(rule) => {
                    log::debug!("excluding {candidate} (matched '!{}')", rule.text());
                    false
                }
                None => true,
            }
        })
        .collect()
}
