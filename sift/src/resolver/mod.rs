//! Target resolution: from a pattern list to the paths a tool should visit.
//!
//! [`TargetResolver`] is built once per project root and reused for every
//! pattern list in a run. Resolution follows one pipeline:
//!
//! 1. split the list into include and exclusion patterns
//! 2. classify each include pattern and resolve it with the matching resolver
//! 3. union and deduplicate, remembering which paths came from explicit
//!    dependency patterns
//! 4. evict paths matched by an exclusion pattern
//! 5. sort, cache and return
//!
//! ```
//! use sift::TargetResolver;
//! use std::fs;
//!
//! let dir = tempfile::tempdir().unwrap();
//! for pkg in ["good1", "good2", "legacy"] {
//!     fs::create_dir_all(dir.path().join("packages").join(pkg)).unwrap();
//! }
//!
//! let mut resolver = TargetResolver::new(dir.path()).unwrap();
//! let resolved = resolver.resolve(&["packages/*", "!packages/legacy"]);
//!
//! assert_eq!(resolved.len(), 2);
//! assert!(resolved[0].as_path().ends_with("packages/good1"));
//! assert!(resolved[1].as_path().ends_with("packages/good2"));
//! ```

mod cache;
mod exclusion;
mod expand;
#[cfg(all(test, feature = "property-tests"))]
mod proptests;
mod report;
mod roots;

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::path::canonicalize::{canonicalize, try_canonicalize};
use crate::path::normalize::{absolutize, normalize};
use crate::path::ResolvedPath;
use crate::pattern::{classify, split_patterns, Pattern, PatternKind, EXCLUSION_PREFIX};

use self::cache::{cache_key, ResolutionCache};
use self::exclusion::ExclusionRule;
use self::roots::Roots;

pub use self::report::{DebugReport, PatternReport, ValidationReport};

/// Resolves pattern lists against a project root and optional dependency root.
///
/// Resolution never fails: patterns that match nothing contribute nothing.
/// Only construction can fail, when the project root is unusable.
#[derive(Debug)]
pub struct TargetResolver {
    project_root: PathBuf,
    dependency_root: Option<PathBuf>,
    cache: ResolutionCache,
}

impl TargetResolver {
    /// Create a resolver for `project_root`.
    ///
    /// Relative roots are taken from the current directory. The root is
    /// canonicalized, so symlinked checkouts resolve to their real location.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPath`] when the root is empty, cannot be made
    /// absolute, or is not an existing directory.
    pub fn new(project_root: impl AsRef<Path>) -> Result<Self> {
        let project_root = project_root.as_ref();

        if project_root.as_os_str().is_empty() {
            return Err(Error::InvalidPath {
                path: project_root.to_path_buf(),
                reason: "project root is empty".to_string(),
            });
        }

        let absolute = normalize(project_root)?;
        if !absolute.is_dir() {
            return Err(Error::InvalidPath {
                path: absolute,
                reason: "project root is not an existing directory".to_string(),
            });
        }

        let project_root = canonicalize(&absolute).map_err(|e| Error::InvalidPath {
            path: absolute.clone(),
            reason: e.to_string(),
        })?;

        log::debug!("resolver project root: {}", project_root.display());

        Ok(Self {
            project_root,
            dependency_root: None,
            cache: ResolutionCache::default(),
        })
    }

    /// Set the dependency root (builder form of [`set_dependency_root`](Self::set_dependency_root)).
    #[must_use]
    pub fn with_dependency_root(mut self, dependency_root: impl AsRef<Path>) -> Self {
        self.set_dependency_root(Some(dependency_root.as_ref()));
        self
    }

    /// Replace the dependency root. A relative path is taken from the project
    /// root. Any change clears the whole cache.
    pub fn set_dependency_root(&mut self, dependency_root: Option<&Path>) {
        let resolved = dependency_root.map(|root| {
            let absolute = absolutize(&self.project_root, root)
                .unwrap_or_else(|_| self.project_root.join(root));
            try_canonicalize(&absolute)
        });

        if resolved != self.dependency_root {
            log::debug!(
                "dependency root changed to {}; clearing {} cached result(s)",
                resolved
                    .as_deref()
                    .map_or_else(|| "<none>".to_string(), |p| p.display().to_string()),
                self.cache.len()
            );
            self.cache.clear();
            self.dependency_root = resolved;
        }
    }

    /// The canonical project root.
    #[must_use]
    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    /// The dependency root in effect, if any.
    #[must_use]
    pub fn dependency_root(&self) -> Option<&Path> {
        self.dependency_root.as_deref()
    }

    fn roots(&self) -> Roots<'_> {
        Roots::new(&self.project_root, self.dependency_root.as_deref())
    }

    /// Classify a single pattern (without its `!`) under the current dependency root.
    #[must_use]
    pub fn classify(&self, pattern: &str) -> PatternKind {
        classify(pattern, self.dependency_root())
    }

    /// Resolve a pattern list where exclusions carry a leading `!`.
    ///
    /// The result is sorted, deduplicated, and every entry existed when it
    /// was resolved. Results are cached per pattern list and dependency root.
    pub fn resolve<S: AsRef<str>>(&mut self, patterns: &[S]) -> Vec<ResolvedPath> {
        let key = cache_key(patterns, self.dependency_root());
        if let Some(hit) = self.cache.get(&key) {
            log::trace!("cache hit for {} pattern(s)", patterns.len());
            return hit.clone();
        }

        let (include, exclude) = split_patterns(patterns);
        let roots = self.roots();

        let expansion = expand::expand_includes(roots, &include);
        let rules: Vec<_> = exclude
            .iter()
            .map(|text| ExclusionRule::compile(roots, text))
            .collect();
        let resolved = exclusion::apply(expansion.paths, &rules, &expansion.explicit);

        log::debug!(
            "resolved {} include / {} exclude pattern(s) to {} path(s)",
            include.len(),
            exclude.len(),
            resolved.len()
        );

        self.cache.insert(key, resolved.clone());
        resolved
    }

    /// Resolve include patterns with a separate exclusion list.
    ///
    /// Exclusions may be given with or without their `!`.
    ///
    /// ```
    /// use sift::TargetResolver;
    /// use std::fs;
    ///
    /// let dir = tempfile::tempdir().unwrap();
    /// fs::create_dir_all(dir.path().join("src/Legacy")).unwrap();
    /// fs::create_dir_all(dir.path().join("tests")).unwrap();
    ///
    /// let mut resolver = TargetResolver::new(dir.path()).unwrap();
    /// let resolved = resolver.resolve_with_exclusions(&["src/*", "tests"], &["src/Legacy"]);
    /// assert_eq!(resolved.len(), 1);
    /// ```
    pub fn resolve_with_exclusions<S: AsRef<str>, E: AsRef<str>>(
        &mut self,
        patterns: &[S],
        exclusions: &[E],
    ) -> Vec<ResolvedPath> {
        let merged: Vec<String> = patterns
            .iter()
            .map(|p| p.as_ref().to_string())
            .chain(exclusions.iter().map(|e| {
                let text = e.as_ref();
                let text = text.strip_prefix(EXCLUSION_PREFIX).unwrap_or(text);
                format!("{EXCLUSION_PREFIX}{text}")
            }))
            .collect();
        self.resolve(&merged)
    }

    /// Apply exclusion patterns to an already-resolved candidate list.
    ///
    /// Candidates in `explicit` are spared by a bare `dependency` or
    /// `dependency/` exclusion but still subject to every other pattern.
    /// Order is preserved.
    pub fn filter_exclusions<S: AsRef<str>>(
        &self,
        candidates: Vec<ResolvedPath>,
        exclusions: &[S],
        explicit: &HashSet<ResolvedPath>,
    ) -> Vec<ResolvedPath> {
        let roots = self.roots();
        let rules: Vec<_> = exclusions
            .iter()
            .filter_map(|e| {
                let text = e.as_ref();
                let text = text.strip_prefix(EXCLUSION_PREFIX).unwrap_or(text);
                (!text.is_empty()).then(|| ExclusionRule::compile(roots, text))
            })
            .collect();
        exclusion::apply(candidates, &rules, explicit)
    }

    /// Drop every cached result.
    pub fn clear_cache(&mut self) {
        self.cache.clear();
    }

    /// Number of cached pattern lists.
    #[must_use]
    pub fn cache_len(&self) -> usize {
        self.cache.len()
    }

    /// Partition `paths` into valid, invalid (missing) and inaccessible.
    ///
    /// Relative paths follow the same root selection as patterns.
    #[must_use]
    pub fn validate<S: AsRef<str>>(&self, paths: &[S]) -> ValidationReport {
        let roots = self.roots();
        let mut report = ValidationReport::default();

        for raw in paths {
            let raw = raw.as_ref();
            match roots.absolute(raw) {
                Some(absolute) => report.record(absolute),
                None => report.invalid.push(PathBuf::from(raw)),
            }
        }

        report
    }

    /// Describe how every pattern is interpreted, plus the resolved result.
    pub fn debug_info<S: AsRef<str>>(&mut self, patterns: &[S]) -> DebugReport {
        let roots = self.roots();
        let reports = patterns
            .iter()
            .filter_map(|raw| {
                let raw = raw.as_ref();
                let pattern = Pattern::parse(raw)?;
                Some(PatternReport {
                    pattern: raw.to_string(),
                    kind: classify(pattern.text(), roots.dependency()).label().to_string(),
                    exclusion: pattern.is_exclusion(),
                    absolute: roots.absolute(pattern.text()),
                })
            })
            .collect();

        DebugReport {
            project_root: self.project_root.clone(),
            dependency_root: self.dependency_root.clone(),
            patterns: reports,
            resolved: self.resolve(patterns),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::{tempdir, TempDir};

    fn project(dirs: &[&str]) -> (TempDir, TargetResolver) {
        let dir = tempdir().unwrap();
        for d in dirs {
            fs::create_dir_all(dir.path().join(d)).unwrap();
        }
        let resolver = TargetResolver::new(dir.path()).unwrap();
        (dir, resolver)
    }

    fn relative(resolver: &TargetResolver, resolved: &[ResolvedPath]) -> Vec<String> {
        resolved
            .iter()
            .map(|p| {
                p.as_path()
                    .strip_prefix(resolver.project_root())
                    .unwrap()
                    .to_string_lossy()
                    .into_owned()
            })
            .collect()
    }

    #[test]
    fn test_new_rejects_bad_roots() {
        assert!(matches!(TargetResolver::new(""), Err(Error::InvalidPath { .. })));
        assert!(matches!(
            TargetResolver::new("/definitely/not/a/dir"),
            Err(Error::InvalidPath { .. })
        ));

        let dir = tempdir().unwrap();
        let file = dir.path().join("file");
        fs::write(&file, "").unwrap();
        assert!(matches!(TargetResolver::new(&file), Err(Error::InvalidPath { .. })));
    }

    #[test]
    fn test_new_strips_trailing_separator() {
        let dir = tempdir().unwrap();
        let with_slash = format!("{}/", dir.path().display());
        let resolver = TargetResolver::new(with_slash).unwrap();
        assert_eq!(resolver.project_root(), fs::canonicalize(dir.path()).unwrap());
    }

    #[test]
    fn test_packages_with_exclusion() {
        let (_dir, mut resolver) =
            project(&["packages/good1", "packages/good2", "packages/legacy"]);

        let resolved = resolver.resolve(&["packages/*", "!packages/legacy"]);
        assert_eq!(
            relative(&resolver, &resolved),
            vec!["packages/good1", "packages/good2"]
        );
    }

    #[test]
    fn test_nonexistent_resolves_to_nothing() {
        let (_dir, mut resolver) = project(&["src"]);
        assert!(resolver.resolve(&["nonexistent-dir"]).is_empty());
    }

    #[test]
    fn test_duplicates_collapse() {
        let (_dir, mut resolver) = project(&["src"]);
        let resolved = resolver.resolve(&["src", "src", "./src", "src/"]);
        assert_eq!(relative(&resolver, &resolved), vec!["src"]);
    }

    #[test]
    fn test_only_exclusions_is_empty() {
        let (_dir, mut resolver) = project(&["src"]);
        assert!(resolver.resolve(&["!src"]).is_empty());
        assert!(resolver.resolve::<&str>(&[]).is_empty());
    }

    #[test]
    fn test_dependency_gating() {
        let (dir, mut resolver) = project(&["vendor/acme/http", "vendor/acme/cli"]);

        assert!(resolver.resolve(&["acme/*"]).is_empty());

        resolver.set_dependency_root(Some(Path::new("vendor")));
        let resolved = resolver.resolve(&["acme/*"]);
        assert_eq!(
            relative(&resolver, &resolved),
            vec!["vendor/acme/cli", "vendor/acme/http"]
        );
        assert_eq!(
            resolver.dependency_root(),
            Some(fs::canonicalize(dir.path().join("vendor")).unwrap().as_path())
        );
    }

    #[test]
    fn test_explicit_dependency_survives_blanket_exclusion() {
        let (_dir, resolver) = project(&["vendor/acme/http", "vendor/other/lib", "src"]);
        let mut resolver = resolver.with_dependency_root("vendor");

        let resolved = resolver.resolve(&["acme/*", "vendor/other/lib", "src", "!dependency/"]);
        assert_eq!(relative(&resolver, &resolved), vec!["src", "vendor/acme/http"]);

        let resolved = resolver.resolve(&["acme/*", "!dependency/acme/http"]);
        assert!(resolved.is_empty());
    }

    #[test]
    fn test_dependency_star_exclusion_is_not_exempt() {
        let (_dir, resolver) = project(&["vendor/acme/http"]);
        let mut resolver = resolver.with_dependency_root("vendor");

        assert!(resolver.resolve(&["acme/*", "!dependency/*"]).is_empty());
    }

    #[test]
    fn test_filter_exclusions_exemption_scenario() {
        let (_dir, resolver) = project(&["vendor/acme/pkg1", "vendor/acme/pkg2", "lib"]);
        let mut resolver = resolver.with_dependency_root("vendor");

        let explicit_paths = resolver.resolve(&["acme/*"]);
        let lib = resolver.resolve(&["lib"]);
        let explicit: HashSet<_> = explicit_paths.iter().cloned().collect();

        let mut candidates = explicit_paths.clone();
        candidates.extend(lib);

        let kept = resolver.filter_exclusions(candidates.clone(), &["dependency/"], &explicit);
        assert_eq!(kept, candidates);

        let kept = resolver.filter_exclusions(candidates, &["!dependency/acme/pkg1"], &explicit);
        assert_eq!(relative(&resolver, &kept), vec!["vendor/acme/pkg2", "lib"]);
    }

    #[test]
    fn test_cache_hits_and_invalidation() {
        let (_dir, mut resolver) = project(&["src", "vendor", "node_modules"]);

        let first = resolver.resolve(&["src"]);
        assert_eq!(resolver.resolve(&["src"]), first);
        assert_eq!(resolver.cache_len(), 1);

        resolver.resolve(&["vendor"]);
        assert_eq!(resolver.cache_len(), 2);

        resolver.set_dependency_root(Some(Path::new("vendor")));
        assert_eq!(resolver.cache_len(), 0);

        resolver.resolve(&["src"]);
        resolver.set_dependency_root(Some(Path::new("vendor")));
        assert_eq!(resolver.cache_len(), 1, "same root keeps the cache");

        resolver.set_dependency_root(Some(Path::new("node_modules")));
        assert_eq!(resolver.cache_len(), 0);

        resolver.resolve(&["src"]);
        resolver.clear_cache();
        assert_eq!(resolver.cache_len(), 0);
    }

    #[test]
    fn test_cached_result_ignores_filesystem_changes() {
        let (dir, mut resolver) = project(&["packages/a"]);

        assert_eq!(resolver.resolve(&["packages/*"]).len(), 1);
        fs::create_dir(dir.path().join("packages/b")).unwrap();
        assert_eq!(resolver.resolve(&["packages/*"]).len(), 1);

        resolver.clear_cache();
        assert_eq!(resolver.resolve(&["packages/*"]).len(), 2);
    }

    #[test]
    fn test_resolve_with_exclusions_matches_merged_form() {
        let (_dir, mut resolver) = project(&["src/Legacy", "src/Modern", "tests"]);

        let separate = resolver.resolve_with_exclusions(&["src/*", "tests"], &["src/Legacy"]);
        let merged = resolver.resolve(&["src/*", "tests", "!src/Legacy"]);
        assert_eq!(separate, merged);
        assert_eq!(relative(&resolver, &separate), vec!["src/Modern", "tests"]);

        let prefixed = resolver.resolve_with_exclusions(&["src/*"], &["!src/Legacy"]);
        assert_eq!(relative(&resolver, &prefixed), vec!["src/Modern"]);
    }

    #[test]
    fn test_result_sorted_bytewise() {
        let (_dir, mut resolver) = project(&["b/c", "b-c", "a"]);
        let resolved = resolver.resolve(&["b/c", "b-c", "a"]);
        assert_eq!(relative(&resolver, &resolved), vec!["a", "b-c", "b/c"]);
    }

    #[test]
    fn test_hostile_patterns_degrade() {
        let (_dir, mut resolver) = project(&["src"]);
        let long = "a/".repeat(4096);
        let resolved = resolver.resolve(&[
            "$(touch pwned)",
            "; rm -rf /",
            "../../../../../../../../../../../../etc/nonexistent",
            "[[[",
            "{{{,}",
            long.as_str(),
            "src",
        ]);
        assert_eq!(relative(&resolver, &resolved), vec!["src"]);
    }

    #[test]
    fn test_validate_partitions() {
        let (dir, resolver) = project(&["src"]);
        fs::write(dir.path().join("README.md"), "").unwrap();

        let report = resolver.validate(&["src", "README.md", "missing", "~nobody/src"]);
        assert_eq!(report.valid.len(), 2);
        assert_eq!(report.invalid.len(), 2);
        assert!(report.inaccessible.is_empty());
    }

    #[test]
    fn test_validate_parent_of_root_is_root() {
        let (_dir, resolver) = project(&["src"]);
        let climbing = format!("{}/{}", resolver.project_root().display(), "../".repeat(30));
        let relative = "../".repeat(30);

        let report = resolver.validate(&[climbing.as_str(), relative.as_str()]);
        assert!(report.invalid.is_empty(), "{report:?}");
        assert_eq!(report.valid, vec![PathBuf::from("/"), PathBuf::from("/")]);
    }

    #[test]
    fn test_namespace_brace_suffix_matches_dependency_glob() {
        let (_dir, resolver) = project(&[
            "vendor/acme/http/src",
            "vendor/acme/http/lib",
            "vendor/acme/http/docs",
        ]);
        let mut resolver = resolver.with_dependency_root("vendor");

        assert!(matches!(
            resolver.classify("acme/*/{src,lib}"),
            PatternKind::DependencyNamespace { .. }
        ));
        let namespace = resolver.resolve(&["acme/*/{src,lib}"]);
        let explicit = resolver.resolve(&["dependency/acme/*/{src,lib}"]);
        assert_eq!(namespace.len(), 2);
        assert_eq!(namespace, explicit);
    }

    #[test]
    fn test_debug_info_describes_patterns() {
        let (_dir, resolver) = project(&["src", "vendor/acme/http"]);
        let mut resolver = resolver.with_dependency_root("vendor");

        let report = resolver.debug_info(&["src", "acme/*", "dependency/*", "src/*", "!src", ""]);

        let kinds: Vec<_> = report.patterns.iter().map(|p| p.kind.as_str()).collect();
        assert_eq!(
            kinds,
            vec!["direct", "dependency_namespace", "dependency_glob", "glob", "direct"]
        );
        assert!(report.patterns[4].exclusion);
        assert_eq!(report.patterns[4].pattern, "!src");
        assert_eq!(
            report.patterns[0].absolute.as_deref(),
            Some(resolver.project_root().join("src").as_path())
        );
        assert_eq!(report.dependency_root.as_deref(), resolver.dependency_root());
        assert_eq!(
            relative(&resolver, &report.resolved),
            vec!["vendor/acme", "vendor/acme/http"]
        );
    }
}
