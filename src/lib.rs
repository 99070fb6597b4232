//! Jsbuild - Incremental JavaScript bundle builder
//!
//! This library provides the core functionality for assembling JavaScript
//! bundle artifacts (concatenated and externally-minified) from a manifest
//! of build targets, rebuilding only the targets whose sources changed.
//!
//! # Architecture
//!
//! The crate is organized into several modules:
//!
//! - [`cli`] - Command-line interface parsing and output formatting
//! - [`core`] - Build orchestration logic (staleness, cache, scheduling)
//! - [`infra`] - Infrastructure layer (filesystem scans, external processes)
//! - [`config`] - Manifest parsing, run configuration and constants
//! - [`error`] - Error types and handling

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod infra;

#[cfg(test)]
pub mod test_utils;
