//! Pattern parsing and dialect classification.
//!
//! A pattern list mixes four dialects:
//!
//! - **Direct paths** such as `src` or `./tests/Unit`
//! - **Globs** such as `packages/*/src` or `src/{Http,Cli}`
//! - **Dependency-namespace patterns** such as `acme/*`, which expand against
//!   `<dependency-root>/acme/*` rather than the project root
//! - **Exclusions**, any of the above prefixed with `!`
//!
//! Classification happens once, in [`classify`], and produces a
//! [`PatternKind`] that the resolvers and the debug report consume.
//!
//! ```
//! use sift::pattern::{classify, PatternKind};
//!
//! assert_eq!(classify("src", None), PatternKind::Direct("src".to_string()));
//! assert!(matches!(classify("src/*.php", None), PatternKind::Glob { .. }));
//! ```

pub mod glob;

use std::fmt;
use std::path::Path;

use self::glob::has_glob_meta;

/// Literal token that routes a pattern to the dependency root.
///
/// `dependency/acme/http` resolves to `<dependency-root>/acme/http`, and the
/// bare `dependency` (or `dependency/`) names the dependency root itself.
pub const DEPENDENCY_MARKER: &str = "dependency";

/// Prefix marking a pattern as an exclusion.
pub const EXCLUSION_PREFIX: char = '!';

/// One entry from a pattern list, split into its text and exclusion flag.
///
/// # Examples
///
/// ```
/// use sift::pattern::Pattern;
///
/// let pattern = Pattern::parse("!packages/legacy").unwrap();
/// assert!(pattern.is_exclusion());
/// assert_eq!(pattern.text(), "packages/legacy");
///
/// assert!(Pattern::parse("").is_none());
/// assert!(Pattern::parse("!").is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pattern {
    text: String,
    exclusion: bool,
}

impl Pattern {
    /// Parse a raw pattern. Empty patterns (including a bare `!`) yield `None`.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        let (text, exclusion) = match raw.strip_prefix(EXCLUSION_PREFIX) {
            Some(rest) => (rest, true),
            None => (raw, false),
        };

        if text.is_empty() {
            return None;
        }

        Some(Self {
            text: text.to_string(),
            exclusion,
        })
    }

    /// Pattern text without the exclusion prefix.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Whether the pattern was prefixed with `!`.
    #[must_use]
    pub fn is_exclusion(&self) -> bool {
        self.exclusion
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.exclusion {
            write!(f, "{EXCLUSION_PREFIX}")?;
        }
        write!(f, "{}", self.text)
    }
}

/// Split a raw pattern list into include and exclusion texts, preserving order.
///
/// # Examples
///
/// ```
/// use sift::pattern::split_patterns;
///
/// let (include, exclude) = split_patterns(&["src", "!src/Legacy", "tests", ""]);
/// assert_eq!(include, vec!["src", "tests"]);
/// assert_eq!(exclude, vec!["src/Legacy"]);
/// ```
#[must_use]
pub fn split_patterns<S: AsRef<str>>(patterns: &[S]) -> (Vec<String>, Vec<String>) {
    let mut include = Vec::new();
    let mut exclude = Vec::new();

    for pattern in patterns.iter().filter_map(|p| Pattern::parse(p.as_ref())) {
        if pattern.exclusion {
            exclude.push(pattern.text);
        } else {
            include.push(pattern.text);
        }
    }

    (include, exclude)
}

/// The dialect a pattern was classified as.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatternKind {
    /// A literal relative or absolute path.
    Direct(String),

    /// A filesystem glob.
    Glob {
        /// The glob text as written.
        pattern: String,
        /// Set when the glob starts with the `dependency/` marker, which makes
        /// its matches exempt from a blanket dependency exclusion.
        explicit_dependency: bool,
    },

    /// A `<namespace>/*[/<suffix>]` pattern expanded under the dependency root.
    DependencyNamespace {
        /// Directory name directly under the dependency root.
        namespace: String,
        /// Path below each package directory, if any.
        suffix: Option<String>,
    },
}

impl PatternKind {
    /// Short label used in debug output.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::Direct(_) => "direct",
            Self::Glob {
                explicit_dependency: false,
                ..
            } => "glob",
            Self::Glob {
                explicit_dependency: true,
                ..
            } => "dependency_glob",
            Self::DependencyNamespace { .. } => "dependency_namespace",
        }
    }

    /// Whether paths produced by this pattern are explicit dependency paths.
    #[must_use]
    pub fn is_explicit_dependency(&self) -> bool {
        matches!(
            self,
            Self::DependencyNamespace { .. }
                | Self::Glob {
                    explicit_dependency: true,
                    ..
                }
        )
    }
}

impl fmt::Display for PatternKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Classify a pattern (without its `!` prefix).
///
/// Checks run in a fixed order because namespace patterns are themselves
/// glob-shaped:
///
/// 1. `<ident>/*[/<rest>]` with a dependency root configured, no
///    `dependency/` prefix, and `<dependency-root>/<ident>` present as a
///    directory: [`PatternKind::DependencyNamespace`].
/// 2. Anything containing glob metacharacters: [`PatternKind::Glob`], flagged
///    as an explicit dependency glob when it starts with `dependency/`.
/// 3. Everything else: [`PatternKind::Direct`].
///
/// # Examples
///
/// ```
/// use sift::pattern::{classify, PatternKind};
///
/// // Without a dependency root, a namespace-shaped pattern is a plain glob.
/// assert_eq!(
///     classify("acme/*", None),
///     PatternKind::Glob { pattern: "acme/*".to_string(), explicit_dependency: false }
/// );
///
/// assert_eq!(
///     classify("dependency/acme/*", None),
///     PatternKind::Glob { pattern: "dependency/acme/*".to_string(), explicit_dependency: true }
/// );
/// ```
#[must_use]
pub fn classify(pattern: &str, dependency_root: Option<&Path>) -> PatternKind {
    if let Some(root) = dependency_root {
        if strip_dependency_marker(pattern).is_none() {
            if let Some((namespace, suffix)) = parse_namespace(pattern) {
                if root.join(namespace).is_dir() {
                    return PatternKind::DependencyNamespace {
                        namespace: namespace.to_string(),
                        suffix: suffix.map(str::to_string),
                    };
                }
                log::trace!(
                    "'{pattern}' is namespace-shaped but {} is not a directory",
                    root.join(namespace).display()
                );
            }
        }
    }

    if has_glob_meta(pattern) {
        return PatternKind::Glob {
            pattern: pattern.to_string(),
            explicit_dependency: strip_dependency_marker(pattern).is_some(),
        };
    }

    PatternKind::Direct(pattern.to_string())
}

/// If `text` is routed to the dependency root, return the remainder after the
/// marker (empty for the bare marker).
///
/// # Examples
///
/// ```
/// use sift::pattern::strip_dependency_marker;
///
/// assert_eq!(strip_dependency_marker("dependency/acme/http"), Some("acme/http"));
/// assert_eq!(strip_dependency_marker("dependency/"), Some(""));
/// assert_eq!(strip_dependency_marker("dependency"), Some(""));
/// assert_eq!(strip_dependency_marker("dependency-tools"), None);
/// ```
#[must_use]
pub fn strip_dependency_marker(text: &str) -> Option<&str> {
    let rest = text.strip_prefix(DEPENDENCY_MARKER)?;
    if rest.is_empty() {
        Some(rest)
    } else {
        rest.strip_prefix('/')
    }
}

/// Whether `text` is exactly the dependency marker (`dependency` or `dependency/`).
#[must_use]
pub fn is_dependency_marker(text: &str) -> bool {
    text == DEPENDENCY_MARKER
        || text
            .strip_prefix(DEPENDENCY_MARKER)
            .is_some_and(|rest| rest == "/")
}

/// Parse `<ident>/*[/<rest>]` into the namespace and optional suffix.
fn parse_namespace(pattern: &str) -> Option<(&str, Option<&str>)> {
    let (namespace, rest) = pattern.split_once('/')?;

    let is_ident = !namespace.is_empty()
        && namespace
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
    if !is_ident {
        return None;
    }

    if rest == "*" {
        return Some((namespace, None));
    }

    let suffix = rest.strip_prefix("*/")?;
    let suffix = suffix.trim_end_matches('/');
    Some((namespace, (!suffix.is_empty()).then_some(suffix)))
}
