//! Error definitions for the replacement engine and its host.
//!
//! This module defines the failure conditions surfaced by the library. It provides:
//! 1. **Policy errors:** Invalid engine configuration and caller logic errors.
//! 2. **Geometry errors:** Cache shapes that do not divide into whole sets or
//!    that outgrow the policy handed to them.
//! 3. **Trace errors:** Unreadable or malformed memory-access traces.

use std::io;

use thiserror::Error;

/// Errors raised by a replacement policy or by the cache that hosts it.
///
/// Every variant is a fatal precondition violation: nothing is retried and
/// the engine state is left untouched when one is returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PolicyError {
    /// The policy was constructed over zero lines.
    #[error("invalid configuration: a replacement policy needs at least one line")]
    ZeroLines,

    /// The policy was constructed with a maximal RRPV of zero.
    ///
    /// Insertion places new lines at `rpv_max - 1`, which has no value when
    /// `rpv_max` is zero.
    #[error("invalid configuration: rpv_max must be at least 1")]
    ZeroRpvMax,

    /// Victim selection was requested over an empty candidate set.
    #[error("victim selection called with an empty candidate set")]
    EmptyCandidates,

    /// The cache geometry does not describe a whole number of sets.
    #[error(
        "invalid cache geometry: {size_bytes} bytes with {line_bytes}-byte lines and {ways} ways"
    )]
    InvalidGeometry {
        /// Total cache size in bytes.
        size_bytes: usize,
        /// Line size in bytes.
        line_bytes: usize,
        /// Associativity.
        ways: usize,
    },

    /// The policy handed to a cache tracks fewer slots than the cache has.
    #[error("policy tracks {available} lines but the cache needs {required}")]
    PolicyTooSmall {
        /// Slots the cache geometry requires.
        required: usize,
        /// Slots the policy tracks.
        available: usize,
    },
}

/// Errors raised while reading a memory-access trace.
#[derive(Debug, Error)]
pub enum TraceError {
    /// The trace file could not be read.
    #[error("could not read trace '{path}': {source}")]
    Io {
        /// Path that failed to open.
        path: String,
        /// Underlying I/O failure.
        #[source]
        source: io::Error,
    },

    /// A line could not be parsed as an access.
    #[error("malformed trace line {line}: '{content}'")]
    Malformed {
        /// 1-based line number.
        line: usize,
        /// Offending line, trimmed.
        content: String,
    },
}
