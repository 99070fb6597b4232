//! Staleness detection
//!
//! Decides whether a target must rebuild. The check is equality-based, not
//! newer-than: any difference between a source's current fingerprint and
//! the recorded one dirties the target, including fingerprints that moved
//! backwards (e.g. a file restored from backup with an older mtime).
//! Changing this to a classic "target older than source" comparison would
//! change observable rebuild behavior.

use crate::config::BuildConfig;
use crate::core::cache::BuildCache;
use crate::core::fingerprint::{self, ABSENT};
use crate::core::target::BuildTarget;

/// Whether `target` must be rebuilt.
///
/// True when caching is disabled, when the artifact is missing from disk,
/// or when any declared source's current fingerprint differs from the one
/// recorded at the last successful build (missing records read as absent).
pub fn needs_rebuild(config: &BuildConfig, target: &BuildTarget, cache: &BuildCache) -> bool {
    if config.no_cache {
        return true;
    }

    if !config.project_dir.join(&target.output).exists() {
        return true;
    }

    let recorded = cache.fingerprints(&target.output);
    target.sources.iter().any(|src| {
        let current = fingerprint::fingerprint(&config.project_dir.join(src));
        let cached = recorded.map_or(ABSENT, |set| set.get(src));
        current != cached
    })
}
