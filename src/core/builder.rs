//! Target builder
//!
//! Runs one target end to end: staleness check, artifact production and
//! capture of fresh source fingerprints. Production writes to a temporary
//! path and renames into place so a failed run never leaves a partial file
//! that passes for a valid artifact.
//!
//! A builder never writes the shared cache. Fresh fingerprints travel back
//! in the [`TaskOutcome`] and the driver merges them after the scheduler
//! barrier, keyed strictly by this target's own identifier.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::config::{defaults, BuildConfig};
use crate::core::cache::{BuildCache, FingerprintSet};
use crate::core::staleness;
use crate::core::target::{BuildAction, BuildTarget, TaskOutcome, TaskResult};
use crate::error::BuildError;
use crate::infra::minifier;

/// Run one target against the shared (read-only) cache.
///
/// Production failures are folded into [`TaskOutcome::Failed`]; this
/// function itself never errors, so sibling builders always run to
/// completion regardless of what happens here.
pub fn run_target(config: &BuildConfig, target: &BuildTarget, cache: &BuildCache) -> TaskResult {
    if !staleness::needs_rebuild(config, target, cache) {
        tracing::info!("Skipping {} (up to date)", target.output);
        return TaskResult {
            target: target.output.clone(),
            outcome: TaskOutcome::Skipped,
        };
    }

    tracing::info!("Generating {}...", target.output);
    let outcome = match produce(config, target) {
        Ok(()) => TaskOutcome::Built {
            fingerprints: FingerprintSet::capture(&config.project_dir, &target.sources),
        },
        Err(e) => {
            tracing::error!("Failed to generate {}: {e}", target.output);
            TaskOutcome::Failed(e)
        }
    };
    TaskResult {
        target: target.output.clone(),
        outcome,
    }
}

/// Perform the target's production step
fn produce(config: &BuildConfig, target: &BuildTarget) -> Result<(), BuildError> {
    let output_path = config.project_dir.join(&target.output);
    if let Some(parent) = output_path.parent() {
        fs::create_dir_all(parent).map_err(|e| BuildError::WriteArtifact {
            target: target.name.clone(),
            path: parent.to_path_buf(),
            error: e.to_string(),
        })?;
    }

    let tmp_rel = format!("{}{}", target.output, defaults::TMP_SUFFIX);
    let tmp_path = config.project_dir.join(&tmp_rel);

    let result = match target.action {
        BuildAction::Concatenate => concatenate(config, target, &tmp_path),
        BuildAction::Minify => minifier::minify(
            &config.project_dir,
            &config.minifier,
            &target.name,
            &target.sources,
            &tmp_rel,
        ),
    };

    match result {
        Ok(()) => fs::rename(&tmp_path, &output_path).map_err(|e| BuildError::WriteArtifact {
            target: target.name.clone(),
            path: output_path,
            error: e.to_string(),
        }),
        Err(e) => {
            // Leave no half-written file behind
            let _ = fs::remove_file(&tmp_path);
            Err(e)
        }
    }
}

/// Concatenate all sources, in declared order, into `tmp_path`.
///
/// Sources that do not exist are skipped silently; a newline separates
/// consecutive files so the artifact stays valid when a source lacks a
/// trailing one.
fn concatenate(
    config: &BuildConfig,
    target: &BuildTarget,
    tmp_path: &Path,
) -> Result<(), BuildError> {
    let write_err = |path: PathBuf, e: std::io::Error| BuildError::WriteArtifact {
        target: target.name.clone(),
        path,
        error: e.to_string(),
    };

    let mut out = fs::File::create(tmp_path).map_err(|e| write_err(tmp_path.to_path_buf(), e))?;
    for src in &target.sources {
        let src_path = config.project_dir.join(src);
        if !src_path.exists() {
            tracing::debug!("Source {src} missing, skipping during concatenation");
            continue;
        }
        let content = fs::read(&src_path).map_err(|e| BuildError::ReadSource {
            target: target.name.clone(),
            path: src_path,
            error: e.to_string(),
        })?;
        out.write_all(&content)
            .and_then(|()| out.write_all(b"\n"))
            .map_err(|e| write_err(tmp_path.to_path_buf(), e))?;
    }
    out.flush().map_err(|e| write_err(tmp_path.to_path_buf(), e))
}
