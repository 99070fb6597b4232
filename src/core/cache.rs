//! Persisted build cache
//!
//! Maps each target identifier (its artifact path) to the fingerprints its
//! sources had at the last successful build. Persisted as a single JSON
//! object; a missing, unreadable or structurally invalid cache file is
//! equivalent to an empty cache, so loading can never fail a build.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::fingerprint::{self, Fingerprint, ABSENT};
use crate::error::CacheError;

/// Recorded fingerprints of all sources for one target, as of its last
/// successful build
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FingerprintSet {
    entries: BTreeMap<String, Fingerprint>,
}

impl FingerprintSet {
    /// Snapshot the current fingerprints of every path in `sources`
    pub fn capture(project_dir: &Path, sources: &[String]) -> Self {
        let entries = sources
            .iter()
            .map(|src| (src.clone(), fingerprint::fingerprint(&project_dir.join(src))))
            .collect();
        Self { entries }
    }

    /// Recorded fingerprint for `source`, or [`ABSENT`] when never recorded
    pub fn get(&self, source: &str) -> Fingerprint {
        self.entries.get(source).copied().unwrap_or(ABSENT)
    }

    /// Record a fingerprint for `source`
    pub fn insert(&mut self, source: impl Into<String>, value: Fingerprint) {
        self.entries.insert(source.into(), value);
    }

    /// Number of recorded sources
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no sources are recorded
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Persisted mapping from target identifier to [`FingerprintSet`]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BuildCache {
    targets: BTreeMap<String, FingerprintSet>,
}

impl BuildCache {
    /// Load the cache from `path`.
    ///
    /// Missing file, I/O error, malformed JSON or a JSON value of the wrong
    /// shape all yield an empty cache; every target is then treated as
    /// never built.
    pub fn load(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match serde_json::from_str(&content) {
                Ok(cache) => cache,
                Err(e) => {
                    tracing::debug!("Ignoring unparsable build cache '{}': {e}", path.display());
                    Self::default()
                }
            },
            Err(e) => {
                tracing::debug!("No usable build cache at '{}': {e}", path.display());
                Self::default()
            }
        }
    }

    /// Best-effort write of the cache to `path`.
    ///
    /// Callers downgrade a failure to a warning; losing the cache only
    /// costs rebuild time on the next run.
    pub fn save(&self, path: &Path) -> Result<(), CacheError> {
        let content = serde_json::to_string(self).map_err(|e| CacheError::SaveFailed {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;
        std::fs::write(path, content).map_err(|e| CacheError::SaveFailed {
            path: path.to_path_buf(),
            error: e.to_string(),
        })
    }

    /// Fingerprints recorded for `target_id`, if it ever built successfully
    pub fn fingerprints(&self, target_id: &str) -> Option<&FingerprintSet> {
        self.targets.get(target_id)
    }

    /// Replace the entry for `target_id` wholesale.
    ///
    /// Entries are never merged; stale sources from an earlier source-list
    /// version must not survive a successful rebuild.
    pub fn record(&mut self, target_id: impl Into<String>, set: FingerprintSet) {
        self.targets.insert(target_id.into(), set);
    }

    /// Number of targets with a recorded entry
    pub fn len(&self) -> usize {
        self.targets.len()
    }

    /// Whether the cache holds no entries
    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }
}
