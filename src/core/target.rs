//! Build targets and task outcomes
//!
//! A [`BuildTarget`] is a resolved unit of work: artifact path, the full
//! ordered source list and the production step. Targets are constructed
//! fresh every invocation from the manifest plus directory enumeration and
//! are never persisted. Targets never consume another target's artifact.

use crate::config::{BuildConfig, TargetKind, TargetSpec};
use crate::core::cache::FingerprintSet;
use crate::error::BuildError;
use crate::infra::scan;

/// Production step a builder performs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildAction {
    /// Concatenate all sources, in order, into the artifact
    Concatenate,
    /// Invoke the external minifier over the ordered source list
    Minify,
}

impl From<TargetKind> for BuildAction {
    fn from(kind: TargetKind) -> Self {
        match kind {
            TargetKind::Concat => BuildAction::Concatenate,
            TargetKind::Minify => BuildAction::Minify,
        }
    }
}

/// A named unit of work: artifact, ordered sources and production step
#[derive(Debug, Clone)]
pub struct BuildTarget {
    /// Manifest target name
    pub name: String,
    /// Artifact path relative to the project directory; doubles as the
    /// cache key for this target
    pub output: String,
    /// Full ordered source list, relative to the project directory
    pub sources: Vec<String>,
    /// Production step
    pub action: BuildAction,
    /// Only applicable when the debug flag is set
    pub debug_only: bool,
}

impl BuildTarget {
    /// Resolve a manifest spec into a concrete target.
    ///
    /// Source order is: static `sources`, then each `source_dirs` entry's
    /// recursive `.js` enumeration (sorted per directory), then
    /// `tail_sources`.
    pub fn resolve(spec: &TargetSpec, config: &BuildConfig) -> Self {
        let mut sources = spec.sources.clone();
        for dir in &spec.source_dirs {
            sources.extend(scan::scan_js_files(&config.project_dir, dir));
        }
        sources.extend(spec.tail_sources.iter().cloned());

        Self {
            name: spec.name.clone(),
            output: spec.output.clone(),
            sources,
            action: spec.kind.into(),
            debug_only: spec.debug_only,
        }
    }
}

/// Result of one scheduled target builder
#[derive(Debug)]
pub enum TaskOutcome {
    /// Target was up to date; nothing was touched
    Skipped,
    /// Artifact regenerated; carries the fresh source fingerprints the
    /// driver merges into the cache after the scheduler barrier
    Built { fingerprints: FingerprintSet },
    /// Production failed; the cache entry for this target is left untouched
    Failed(BuildError),
}

/// A task outcome tagged with the target it belongs to
#[derive(Debug)]
pub struct TaskResult {
    /// Target identifier (artifact path)
    pub target: String,
    /// What happened
    pub outcome: TaskOutcome,
}
