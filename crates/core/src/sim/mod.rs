//! Trace-driven simulation.
//!
//! Reads memory-access traces and replays them through a [`CacheSim`].

/// Memory-access trace parsing.
pub mod trace;

pub use trace::{Access, load_trace, parse_trace};

use tracing::debug;

use crate::cache::CacheSim;
use crate::cache::policies::ReplacementPolicy;
use crate::common::PolicyError;
use crate::stats::CacheStats;

/// Replays `accesses` in order and returns the cache counters afterwards.
///
/// # Errors
///
/// Stops at and returns the first policy error.
pub fn replay<P: ReplacementPolicy>(
    cache: &mut CacheSim<P>,
    accesses: &[Access],
) -> Result<CacheStats, PolicyError> {
    for access in accesses {
        let _outcome = cache.access(access.addr, access.is_write)?;
    }
    debug!(accesses = accesses.len(), "trace replayed");
    Ok(*cache.stats())
}
