//! Property-based tests for resolution.
//!
//! A single fixture tree is built per case; pattern lists are drawn from a
//! pool that mixes direct paths, globs, namespace patterns and exclusions.

use super::TargetResolver;
use proptest::prelude::*;
use std::collections::BTreeSet;
use std::fs;
use tempfile::TempDir;

const DIRS: &[&str] = &[
    "src/Http",
    "src/Cli",
    "src/Legacy",
    "tests/Unit",
    "packages/good1",
    "packages/good2",
    "packages/legacy",
    "vendor/acme/http",
    "vendor/acme/cli",
    "vendor/other/lib",
];

const POOL: &[&str] = &[
    "src",
    "./src",
    "src/",
    "src/*",
    "src/{Http,Cli}",
    "tests",
    "tests/*",
    "packages/*",
    "acme/*",
    "dependency/acme/*",
    "vendor/other/lib",
    "nonexistent-dir",
    "*",
    "!src/Legacy",
    "!packages/legacy",
    "!dependency/",
    "!src/L*",
    "!tests/",
    "!vendor",
];

fn fixture() -> (TempDir, TargetResolver) {
    let dir = TempDir::new().unwrap();
    for d in DIRS {
        fs::create_dir_all(dir.path().join(d)).unwrap();
    }
    fs::write(dir.path().join("src/Kernel.php"), "").unwrap();
    let resolver = TargetResolver::new(dir.path())
        .unwrap()
        .with_dependency_root("vendor");
    (dir, resolver)
}

fn patterns_strategy() -> impl Strategy<Value = Vec<&'static str>> {
    prop::collection::vec(prop::sample::select(POOL), 0..8)
}

fn includes_only(patterns: &[&'static str]) -> Vec<&'static str> {
    patterns.iter().copied().filter(|p| !p.starts_with('!')).collect()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 64,
        .. ProptestConfig::default()
    })]

    // resolve(p) == resolve(p), with and without the cache
    #[test]
    fn resolution_idempotent(patterns in patterns_strategy()) {
        let (_dir, mut resolver) = fixture();
        let first = resolver.resolve(&patterns);
        let cached = resolver.resolve(&patterns);
        resolver.clear_cache();
        let fresh = resolver.resolve(&patterns);

        prop_assert_eq!(&first, &cached);
        prop_assert_eq!(&first, &fresh);
    }

    // Output is strictly ascending, which also rules out duplicates
    #[test]
    fn resolution_sorted_and_unique(patterns in patterns_strategy()) {
        let (_dir, mut resolver) = fixture();
        let resolved = resolver.resolve(&patterns);
        for pair in resolved.windows(2) {
            prop_assert!(pair[0] < pair[1]);
        }
    }

    // Every path exists and lies under the project root
    #[test]
    fn resolution_contained(patterns in patterns_strategy()) {
        let (_dir, mut resolver) = fixture();
        let root = resolver.project_root().to_path_buf();
        for path in resolver.resolve(&patterns) {
            prop_assert!(path.as_path().exists());
            prop_assert!(path.as_path().starts_with(&root));
        }
    }

    // Adding exclusions never grows the result
    #[test]
    fn exclusion_monotonic(patterns in patterns_strategy()) {
        let (_dir, mut resolver) = fixture();
        let includes = includes_only(&patterns);

        let with = resolver.resolve(&patterns);
        let without = resolver.resolve(&includes);
        prop_assert!(with.len() <= without.len());

        let without: BTreeSet<_> = without.into_iter().collect();
        prop_assert!(with.iter().all(|p| without.contains(p)));
    }

    // Permuting the input does not change the resolved set
    #[test]
    fn resolution_order_independent(
        (patterns, shuffled) in patterns_strategy()
            .prop_flat_map(|p| (Just(p.clone()), Just(p).prop_shuffle()))
    ) {
        let (_dir, mut resolver) = fixture();
        prop_assert_eq!(resolver.resolve(&patterns), resolver.resolve(&shuffled));
    }
}
