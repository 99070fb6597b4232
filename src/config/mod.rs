//! Configuration module
//!
//! Manifest parsing (`jsbuild.toml`) and the explicit run configuration
//! passed into the build pipeline. Nothing in here performs build work;
//! the manifest only *describes* targets, which [`crate::core`] resolves
//! and executes.

pub mod defaults;

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ManifestError;

/// Project metadata section
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectSection {
    /// Project name, used in log output only
    pub name: String,
}

/// Build settings section
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BuildSection {
    /// External minifier command; defaults to `bun run terser`
    #[serde(default)]
    pub minifier: Option<Vec<String>>,
}

/// Kind of production step a target performs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TargetKind {
    /// Concatenate all sources into the artifact
    Concat,
    /// Run the external minifier over all sources
    Minify,
}

/// One declared build target
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TargetSpec {
    /// Target name, unique within the manifest
    pub name: String,
    /// Artifact path, relative to the project directory
    pub output: String,
    /// Production step
    pub kind: TargetKind,
    /// Leading source files, in build order
    #[serde(default)]
    pub sources: Vec<String>,
    /// Directories scanned recursively for `.js` files (sorted), inserted
    /// after `sources`
    #[serde(default)]
    pub source_dirs: Vec<String>,
    /// Trailing source files, appended after scanned directories
    #[serde(default)]
    pub tail_sources: Vec<String>,
    /// Only built when the debug flag is set
    #[serde(default)]
    pub debug_only: bool,
}

/// Parsed project manifest
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Manifest {
    /// Project metadata
    pub project: ProjectSection,
    /// Build settings
    #[serde(default)]
    pub build: BuildSection,
    /// Declared targets
    #[serde(default, rename = "target")]
    pub targets: Vec<TargetSpec>,
}

impl Manifest {
    /// Parse a manifest from TOML content
    pub fn from_toml(content: &str) -> Result<Self, ManifestError> {
        let manifest: Manifest = toml::from_str(content)?;
        manifest.validate()?;
        Ok(manifest)
    }

    /// Load and parse the manifest file at `path`
    pub fn load(path: &Path) -> Result<Self, ManifestError> {
        if !path.exists() {
            return Err(ManifestError::NotFound {
                path: path.to_path_buf(),
            });
        }
        let content = std::fs::read_to_string(path).map_err(|e| ManifestError::ReadFailed {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;
        Self::from_toml(&content)
    }

    /// Minifier command, falling back to the default
    pub fn minifier(&self) -> Vec<String> {
        self.build
            .minifier
            .clone()
            .unwrap_or_else(defaults::default_minifier)
    }

    /// Whether any target uses the external minifier
    pub fn uses_minifier(&self, debug: bool) -> bool {
        self.targets
            .iter()
            .filter(|t| debug || !t.debug_only)
            .any(|t| t.kind == TargetKind::Minify)
    }

    fn validate(&self) -> Result<(), ManifestError> {
        if self.targets.is_empty() {
            return Err(ManifestError::NoTargets);
        }
        if let Some(minifier) = &self.build.minifier {
            if minifier.is_empty() {
                return Err(ManifestError::EmptyMinifier);
            }
        }
        for (i, target) in self.targets.iter().enumerate() {
            for earlier in &self.targets[..i] {
                if earlier.name == target.name {
                    return Err(ManifestError::DuplicateName {
                        name: target.name.clone(),
                    });
                }
                if earlier.output == target.output {
                    return Err(ManifestError::DuplicateOutput {
                        first: earlier.name.clone(),
                        second: target.name.clone(),
                        output: target.output.clone(),
                    });
                }
            }
        }
        Ok(())
    }
}

/// Explicit run configuration, constructed once by the build command and
/// passed into the staleness detector, builders and scheduler
#[derive(Debug, Clone)]
pub struct BuildConfig {
    /// Project root; all manifest paths resolve against this
    pub project_dir: PathBuf,
    /// Include debug-only targets
    pub debug: bool,
    /// Treat every target as stale and skip cache persistence
    pub no_cache: bool,
    /// Maximum number of concurrently running target builders
    pub jobs: usize,
    /// External minifier command
    pub minifier: Vec<String>,
}

impl BuildConfig {
    /// Path of the persisted build cache for this project
    pub fn cache_path(&self) -> PathBuf {
        self.project_dir.join(defaults::CACHE_FILE)
    }
}
