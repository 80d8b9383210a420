//! Per-resolver memoization of resolution results.

use std::collections::HashMap;
use std::path::Path;

use sha2::{Digest, Sha256};

use crate::path::ResolvedPath;

/// SHA-256 digest identifying an ordered pattern list and dependency root.
pub(crate) type CacheKey = [u8; 32];

/// Derive the cache key for `patterns` under `dependency_root`.
///
/// Every pattern is length-prefixed so `["ab", "c"]` and `["a", "bc"]` hash
/// differently.
pub(crate) fn cache_key<S: AsRef<str>>(patterns: &[S], dependency_root: Option<&Path>) -> CacheKey {
    let mut hasher = Sha256::new();

    hasher.update((patterns.len() as u64).to_le_bytes());
    for pattern in patterns {
        let bytes = pattern.as_ref().as_bytes();
        hasher.update((bytes.len() as u64).to_le_bytes());
        hasher.update(bytes);
    }

    match dependency_root {
        Some(root) => {
            hasher.update([1]);
            hasher.update(root.to_string_lossy().as_bytes());
        }
        None => hasher.update([0]),
    }

    hasher.finalize().into()
}

/// Resolution results keyed by [`cache_key`].
#[derive(Debug, Default)]
pub(crate) struct ResolutionCache {
    entries: HashMap<CacheKey, Vec<ResolvedPath>>,
}

impl ResolutionCache {
    pub(crate) fn get(&self, key: &CacheKey) -> Option<&Vec<ResolvedPath>> {
        self.entries.get(key)
    }

    pub(crate) fn insert(&mut self, key: CacheKey, paths: Vec<ResolvedPath>) {
        self.entries.insert(key, paths);
    }

    pub(crate) fn clear(&mut self) {
        self.entries.clear();
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_key_is_stable() {
        assert_eq!(cache_key(&["src", "!src/Legacy"], None), cache_key(&["src", "!src/Legacy"], None));
    }

    #[test]
    fn test_key_depends_on_order_and_boundaries() {
        assert_ne!(cache_key(&["a", "b"], None), cache_key(&["b", "a"], None));
        assert_ne!(cache_key(&["ab", "c"], None), cache_key(&["a", "bc"], None));
        assert_ne!(cache_key(&["a"], None), cache_key(&["a", ""], None));
    }

    #[test]
    fn test_key_depends_on_dependency_root() {
        let patterns = ["acme/*"];
        let none = cache_key(&patterns, None);
        let vendor = cache_key(&patterns, Some(Path::new("/p/vendor")));
        let modules = cache_key(&patterns, Some(Path::new("/p/node_modules")));

        assert_ne!(none, vendor);
        assert_ne!(vendor, modules);
    }

    #[test]
    fn test_cache_insert_get_clear() {
        let mut cache = ResolutionCache::default();
        let key = cache_key(&["src"], None);
        let paths = vec![ResolvedPath::new_unchecked(PathBuf::from("/p/src"))];

        assert!(cache.get(&key).is_none());
        cache.insert(key, paths.clone());
        assert_eq!(cache.get(&key), Some(&paths));
        assert_eq!(cache.len(), 1);

        cache.clear();
        assert_eq!(cache.len(), 0);
    }
}
