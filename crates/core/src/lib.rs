//! SRRIP cache replacement engine.
//!
//! This crate implements Static Re-Reference Interval Prediction for
//! set-associative caches:
//! 1. **Policy:** Per-line RRPV store, promote-on-hit, install-on-replace, and aging victim search.
//! 2. **Cache:** A minimal tag store that drives a policy through its callback contract.
//! 3. **Simulation:** Trace parsing and replay.
//! 4. **Support:** Configuration, error types, and statistics.

/// Cache host and replacement policies.
pub mod cache;
/// Shared error types.
pub mod common;
/// Engine and cache configuration (defaults, JSON).
pub mod config;
/// Trace parsing and replay.
pub mod sim;
/// Policy and cache statistics.
pub mod stats;

/// Set-associative cache host; construct with `CacheSim::new`.
pub use crate::cache::CacheSim;
/// Replacement policy trait and the SRRIP engine.
pub use crate::cache::policies::{Promotion, ReplacementPolicy, SrripPolicy};
/// Root configuration type; use `Config::default()` or `Config::from_json`.
pub use crate::config::Config;
