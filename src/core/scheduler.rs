//! Concurrent task scheduling
//!
//! Flat fan-out/fan-in over independent target builders. Every applicable
//! target gets its own blocking task; a semaphore bounds how many run at
//! once. Targets never depend on each other's artifacts, so no ordering is
//! guaranteed between them.
//!
//! Results are collected in submission order, which makes the failure the
//! driver reports deterministic instead of "whichever unit finished
//! first". A failing unit never cancels its siblings; the barrier releases
//! only after every unit ran to completion.

use std::sync::Arc;

use tokio::sync::Semaphore;

use crate::config::BuildConfig;
use crate::core::builder;
use crate::core::cache::BuildCache;
use crate::core::target::{BuildTarget, TaskOutcome, TaskResult};
use crate::error::BuildError;

/// Run every target builder concurrently and wait for all of them.
///
/// The cache is shared read-only; fingerprint updates come back inside
/// each [`TaskResult`] and are merged by the driver after this returns.
pub async fn run_all(
    config: Arc<BuildConfig>,
    targets: Vec<BuildTarget>,
    cache: Arc<BuildCache>,
) -> Vec<TaskResult> {
    let semaphore = Arc::new(Semaphore::new(config.jobs.max(1)));

    let mut handles = Vec::with_capacity(targets.len());
    for target in targets {
        let permit = semaphore
            .clone()
            .acquire_owned()
            .await
            .expect("build semaphore closed unexpectedly");
        let target_id = target.output.clone();
        let config = Arc::clone(&config);
        let cache = Arc::clone(&cache);
        let handle = tokio::task::spawn_blocking(move || {
            let _permit = permit;
            builder::run_target(&config, &target, &cache)
        });
        handles.push((target_id, handle));
    }

    let mut results = Vec::with_capacity(handles.len());
    for (target_id, handle) in handles {
        match handle.await {
            Ok(result) => results.push(result),
            // A panicked builder must not take the whole run down silently;
            // surface it as that target's failed outcome.
            Err(e) => results.push(TaskResult {
                target: target_id.clone(),
                outcome: TaskOutcome::Failed(BuildError::TaskAborted {
                    target: target_id,
                    error: e.to_string(),
                }),
            }),
        }
    }
    results
}
