//! Build orchestration logic
//!
//! The incremental build pipeline: fingerprinting sources, deciding
//! staleness against the persisted cache, producing artifacts and running
//! independent target builders concurrently.

pub mod builder;
pub mod cache;
pub mod driver;
pub mod fingerprint;
pub mod scheduler;
pub mod staleness;
pub mod target;
