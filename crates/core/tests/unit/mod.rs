//! # Unit Components
//!
//! Organizes the unit tests by crate module.

/// Tests for the SRRIP policy, RRPV invariants, and the cache host.
pub mod cache;
