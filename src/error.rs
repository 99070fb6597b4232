//! Error types for jsbuild
//!
//! Domain-specific error types using thiserror.

use std::path::PathBuf;
use thiserror::Error;

/// Manifest loading and validation errors
#[derive(Error, Debug)]
pub enum ManifestError {
    /// Manifest file not found
    #[error("No manifest found at '{path}'. Create a jsbuild.toml to define build targets.")]
    NotFound { path: PathBuf },

    /// IO error reading the manifest
    #[error("Failed to read manifest '{path}': {error}")]
    ReadFailed { path: PathBuf, error: String },

    /// Manifest parse error
    #[error("Failed to parse manifest: {source}")]
    Parse {
        #[from]
        source: toml::de::Error,
    },

    /// No targets declared
    #[error("Manifest declares no build targets")]
    NoTargets,

    /// Duplicate target name
    #[error("Duplicate target name '{name}'")]
    DuplicateName { name: String },

    /// Two targets writing the same artifact
    #[error("Targets '{first}' and '{second}' declare the same output '{output}'")]
    DuplicateOutput {
        first: String,
        second: String,
        output: String,
    },

    /// Minifier command declared without a program
    #[error("Minifier command must not be empty")]
    EmptyMinifier,
}

/// Target production errors
#[derive(Error, Debug)]
pub enum BuildError {
    /// Failed to read a source file during concatenation
    #[error("Failed to read source '{path}' for target '{target}': {error}")]
    ReadSource {
        target: String,
        path: PathBuf,
        error: String,
    },

    /// Failed to write the target artifact
    #[error("Failed to write artifact '{path}' for target '{target}': {error}")]
    WriteArtifact {
        target: String,
        path: PathBuf,
        error: String,
    },

    /// Could not launch the external minifier
    #[error("Failed to launch minifier '{program}' for target '{target}': {error}")]
    MinifierLaunch {
        target: String,
        program: String,
        error: String,
    },

    /// Minifier exited with a failure status
    #[error("Minifier failed for target '{target}' ({status}): {stderr}")]
    MinifierFailed {
        target: String,
        status: String,
        stderr: String,
    },

    /// A build task panicked or was aborted by the runtime
    #[error("Build task for target '{target}' did not complete: {error}")]
    TaskAborted { target: String, error: String },
}

/// Cache persistence errors
///
/// Loading never fails (a corrupt or missing cache degrades to an empty
/// one), so only saving has an error type.
#[derive(Error, Debug)]
pub enum CacheError {
    /// Failed to serialize or write the cache file
    #[error("Failed to save build cache '{path}': {error}")]
    SaveFailed { path: PathBuf, error: String },
}

/// Environment precondition errors
#[derive(Error, Debug)]
pub enum EnvError {
    /// Required external tool is not available
    #[error("Required tool '{tool}' not found in PATH. {hint}")]
    ToolNotFound { tool: String, hint: String },
}

/// Top-level jsbuild error type
#[derive(Error, Debug)]
pub enum JsbuildError {
    /// Manifest error
    #[error("Manifest error: {0}")]
    Manifest(#[from] ManifestError),

    /// Build error
    #[error("Build error: {0}")]
    Build(#[from] BuildError),

    /// Cache error
    #[error("Cache error: {0}")]
    Cache(#[from] CacheError),

    /// Environment error
    #[error("Environment error: {0}")]
    Env(#[from] EnvError),

    /// IO error
    #[error("IO error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },

    /// Generic error
    #[error("{0}")]
    Generic(String),
}
