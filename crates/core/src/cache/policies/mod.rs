//! Cache Replacement Policies.
//!
//! Implements re-reference interval prediction for selecting victim lines in
//! set-associative caches.
//!
//! # Policies
//!
//! - `Srrip`: Static RRIP. New lines are inserted with a long (but not maximal)
//!   predicted re-reference interval; hits predict near-immediate reuse.
//!
//! # Call Contract
//!
//! The owning cache calls `promote_on_hit` on every hit. On a miss it calls
//! `select_victim` with the candidate set, then `install_on_replace` on the
//! returned id before any further call on the same instance.

/// Fixed-size store of per-line re-reference prediction values.
pub mod rrpv;

/// Static RRIP replacement policy.
pub mod srrip;

pub use rrpv::RrpvStore;
pub use srrip::{LastAction, SrripPolicy};

use crate::common::PolicyError;

/// Outcome of a promote-on-hit callback.
#[must_use]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Promotion {
    /// The line's prediction value was set to zero.
    Promoted,
    /// A preceding install suppressed this promotion; no value was written.
    Suppressed,
}

/// Trait for cache replacement policies.
///
/// Slot ids are flat indices in `[0, num_lines)`. Ids outside that range are
/// a caller contract violation and panic.
pub trait ReplacementPolicy: Send + Sync {
    /// Number of slots the policy tracks.
    fn num_lines(&self) -> usize;

    /// Updates the policy state when an access hits a resident line.
    ///
    /// # Arguments
    ///
    /// * `line` - The slot id that was hit.
    fn promote_on_hit(&mut self, line: usize) -> Promotion;

    /// Records that a new line now occupies the slot chosen by `select_victim`.
    ///
    /// # Arguments
    ///
    /// * `line` - The slot id being filled.
    fn install_on_replace(&mut self, line: usize);

    /// Selects a victim from a candidate set.
    ///
    /// The candidates are re-iterated once per scan, so any cheaply clonable
    /// iterable works: ranges, copied slice iterators, or small vectors.
    /// Ties break on the caller's iteration order.
    ///
    /// # Arguments
    ///
    /// * `candidates` - The slot ids of the associativity set.
    ///
    /// # Returns
    ///
    /// The slot id to evict.
    ///
    /// # Errors
    ///
    /// Returns [`PolicyError::EmptyCandidates`] if `candidates` yields nothing.
    fn select_victim<C>(&mut self, candidates: C) -> Result<usize, PolicyError>
    where
        C: IntoIterator<Item = usize> + Clone;

    /// Selects a victim among `ways` contiguous slots starting at `base`.
    ///
    /// The range is clamped at `usize::MAX`.
    ///
    /// # Errors
    ///
    /// Returns [`PolicyError::EmptyCandidates`] if the range is empty.
    #[inline]
    fn select_victim_in_range(&mut self, base: usize, ways: usize) -> Result<usize, PolicyError> {
        self.select_victim(base..base.saturating_add(ways))
    }
}
