//! Build driver
//!
//! Sequences one build invocation: resolve applicable targets from the
//! manifest, load the cache, fan the builders out through the scheduler,
//! merge fingerprint updates after the barrier and persist the cache on
//! success. The cache is persisted exactly once, never while a builder
//! could still be running, and not at all when the run fails or caching
//! is disabled.

use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::config::{BuildConfig, Manifest};
use crate::core::cache::BuildCache;
use crate::core::scheduler;
use crate::core::target::{BuildTarget, TaskOutcome};
use crate::error::JsbuildError;

/// Summary of a completed build run
#[derive(Debug)]
pub struct BuildReport {
    /// Targets whose artifact was regenerated
    pub built: usize,
    /// Targets that were up to date
    pub skipped: usize,
    /// Wall-clock duration of the whole run
    pub duration: Duration,
}

/// Targets applicable under this configuration, resolved in manifest order
pub fn applicable_targets(manifest: &Manifest, config: &BuildConfig) -> Vec<BuildTarget> {
    manifest
        .targets
        .iter()
        .filter(|spec| config.debug || !spec.debug_only)
        .map(|spec| BuildTarget::resolve(spec, config))
        .collect()
}

/// Run one full build invocation.
///
/// Returns the first failed target's error (in submission order) after
/// every in-flight builder has finished; successful siblings keep their
/// artifacts either way.
pub async fn execute(manifest: &Manifest, config: &BuildConfig) -> Result<BuildReport, JsbuildError> {
    let started = Instant::now();
    let targets = applicable_targets(manifest, config);
    tracing::info!(
        "Building {} targets with {} jobs",
        targets.len(),
        config.jobs
    );

    let cache = if config.no_cache {
        BuildCache::default()
    } else {
        BuildCache::load(&config.cache_path())
    };

    let shared_cache = Arc::new(cache);
    let results = scheduler::run_all(
        Arc::new(config.clone()),
        targets,
        Arc::clone(&shared_cache),
    )
    .await;

    // The barrier has released: no builder holds the cache any more.
    let mut cache = Arc::try_unwrap(shared_cache).unwrap_or_else(|arc| (*arc).clone());

    let mut built = 0;
    let mut skipped = 0;
    let mut first_failure = None;
    for result in results {
        match result.outcome {
            TaskOutcome::Skipped => skipped += 1,
            TaskOutcome::Built { fingerprints } => {
                built += 1;
                cache.record(result.target, fingerprints);
            }
            TaskOutcome::Failed(e) => {
                if first_failure.is_none() {
                    first_failure = Some(e);
                }
            }
        }
    }

    if let Some(error) = first_failure {
        return Err(error.into());
    }

    if !config.no_cache {
        if let Err(e) = cache.save(&config.cache_path()) {
            tracing::warn!("Failed to save build cache: {e}");
        }
    }

    Ok(BuildReport {
        built,
        skipped,
        duration: started.elapsed(),
    })
}
