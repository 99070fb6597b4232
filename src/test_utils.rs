//! Test utilities for property-based testing
//!
//! This module provides generators and helpers for proptest.

#[cfg(test)]
pub mod generators {
    use proptest::prelude::*;

    /// Generate a project-relative JavaScript source path
    pub fn source_path() -> impl Strategy<Value = String> {
        ("[a-z][a-z0-9_]{0,12}", "[a-z][a-z0-9_]{0,12}")
            .prop_map(|(dir, file)| format!("{dir}/{file}.js"))
    }

    /// Generate a realistic fingerprint (seconds since epoch), including
    /// the absent sentinel
    pub fn fingerprint() -> impl Strategy<Value = u64> {
        prop_oneof![
            1 => Just(0u64),
            9 => 1u64..2_000_000_000,
        ]
    }

    /// Generate a target identifier (artifact path)
    pub fn target_id() -> impl Strategy<Value = String> {
        "[a-z][a-z0-9_]{0,12}".prop_map(|name| format!("js/min.{name}.js"))
    }
}

#[cfg(test)]
mod tests {
    use super::generators::*;
    use crate::core::cache::{BuildCache, FingerprintSet};
    use proptest::prelude::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        #[test]
        fn test_source_path_generator(path in source_path()) {
            prop_assert!(path.ends_with(".js"));
            prop_assert!(path.contains('/'));
        }

        #[test]
        fn test_cache_json_round_trips(
            entries in proptest::collection::btree_map(source_path(), fingerprint(), 0..8),
            target in target_id(),
        ) {
            let mut set = FingerprintSet::default();
            for (src, fp) in &entries {
                set.insert(src.clone(), *fp);
            }
            let mut cache = BuildCache::default();
            cache.record(target, set);

            let json = serde_json::to_string(&cache).expect("serialize");
            let back: BuildCache = serde_json::from_str(&json).expect("deserialize");
            prop_assert_eq!(back, cache);
        }

        #[test]
        fn test_recorded_fingerprints_read_back(
            target in target_id(),
            src in source_path(),
            fp in fingerprint(),
        ) {
            let mut set = FingerprintSet::default();
            set.insert(src.clone(), fp);
            let mut cache = BuildCache::default();
            cache.record(target.clone(), set);

            let recorded = cache.fingerprints(&target).expect("entry exists");
            prop_assert_eq!(recorded.get(&src), fp);
        }
    }
}
