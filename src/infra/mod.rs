//! Infrastructure layer
//!
//! Filesystem enumeration and external process invocation. Kept separate
//! from [`crate::core`] so orchestration logic stays testable without
//! touching real tooling.

pub mod environment;
pub mod minifier;
pub mod scan;
