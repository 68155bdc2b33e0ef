//! Common types shared across the replacement engine.
//!
//! This module provides the error types used by the policy, the cache host,
//! and the trace reader.

/// Error types for policies, cache geometry, and traces.
pub mod error;

pub use error::{PolicyError, TraceError};
