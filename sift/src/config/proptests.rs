//! Property-based tests for configuration merging.

use super::merger::ConfigMerger;
use super::schema::{Config, ToolConfig};
use proptest::prelude::*;
use std::collections::BTreeMap;
use std::path::PathBuf;

fn pattern_list() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[a-z]{1,8}(/[a-z*]{1,8}){0,2}", 0..5)
}

fn tool_strategy() -> impl Strategy<Value = ToolConfig> {
    (
        prop::option::of(any::<bool>()),
        prop::option::of(pattern_list()),
        prop::option::of(pattern_list()),
    )
        .prop_map(|(enabled, paths, exclude)| ToolConfig {
            enabled,
            paths,
            exclude,
        })
}

fn config_strategy() -> impl Strategy<Value = Config> {
    (
        prop::option::of("[a-z_]{1,12}"),
        prop::option::of(pattern_list()),
        prop::option::of(pattern_list()),
        prop::collection::btree_map("[a-z-]{1,10}", tool_strategy(), 0..3),
    )
        .prop_map(|(dependency_dir, paths, exclude, tools)| Config {
            dependency_dir: dependency_dir.map(PathBuf::from),
            paths,
            exclude,
            tools,
        })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 1000,
        .. ProptestConfig::default()
    })]

    // Set values in the higher-precedence layer always win
    #[test]
    fn config_merge_higher_precedence_wins(low in config_strategy(), high in config_strategy()) {
        let mut result = low.clone();
        ConfigMerger::merge_into(&mut result, &high);

        prop_assert_eq!(
            result.dependency_dir.as_ref(),
            high.dependency_dir.as_ref().or(low.dependency_dir.as_ref())
        );
        prop_assert_eq!(result.paths.as_ref(), high.paths.as_ref().or(low.paths.as_ref()));
    }

    // Exclusions from both layers survive, lower layer first
    #[test]
    fn config_merge_exclusions_accumulate(low in config_strategy(), high in config_strategy()) {
        let mut result = low.clone();
        ConfigMerger::merge_into(&mut result, &high);

        let merged = result.exclude.unwrap_or_default();
        for pattern in low.exclude.iter().chain(high.exclude.iter()).flatten() {
            prop_assert!(merged.contains(pattern));
        }

        let mut seen = std::collections::HashSet::new();
        for pattern in &merged {
            if low.exclude.as_ref().map_or(true, |l| !l.contains(pattern)) {
                prop_assert!(seen.insert(pattern), "duplicate {pattern} introduced by merge");
            }
        }
    }

    // Merging a config with itself changes nothing
    #[test]
    fn config_merge_self_idempotent(config in config_strategy()) {
        let mut once = Config::default();
        ConfigMerger::merge_into(&mut once, &config);
        let mut twice = once.clone();
        ConfigMerger::merge_into(&mut twice, &config);

        prop_assert_eq!(once, twice);
    }

    // Every tool from either layer is present after merging
    #[test]
    fn config_merge_keeps_all_tools(low in config_strategy(), high in config_strategy()) {
        let mut result = low.clone();
        ConfigMerger::merge_into(&mut result, &high);

        let expected: BTreeMap<_, _> = low.tools.keys().chain(high.tools.keys()).map(|k| (k, ())).collect();
        prop_assert_eq!(result.tools.len(), expected.len());
    }
}
