//! Static Re-Reference Interval Prediction (SRRIP) Replacement Policy.
//!
//! Each line carries an RRPV in `[0, rpv_max]`. A hit predicts near-immediate
//! reuse and sets the line's RRPV to 0. A newly installed line is predicted
//! to be re-referenced after a long interval and starts at `rpv_max - 1`.
//! On a miss the victim is the first candidate whose RRPV equals `rpv_max`;
//! if none does, every candidate is aged by one and the scan repeats.
//!
//! # Performance
//!
//! - **Time Complexity:**
//!   - `promote_on_hit()`: O(1)
//!   - `install_on_replace()`: O(1)
//!   - `select_victim()`: O(W × rpv_max) where W is the candidate count
//! - **Space Complexity:** O(N) counters where N is the number of lines
//! - **Hardware Cost:** Low - log2(rpv_max + 1) bits per line
//! - **Best Case:** Mixed workloads where scans would flush an LRU cache
//! - **Worst Case:** Working sets that are re-referenced just after insertion
//!
//! # Suppression
//!
//! An install records a pending [`LastAction::Installed`]. The next
//! promotion consumes it and, depending on [`SuppressionScope`], is skipped.
//! Under `AnyLine` the skip applies to whatever line that promotion targets;
//! under `InstalledLine` it applies only to the line just installed.

use tracing::{debug, trace};

use super::{Promotion, ReplacementPolicy, RrpvStore};
use crate::common::PolicyError;
use crate::config::{SrripConfig, SuppressionScope};
use crate::stats::PolicyStats;

/// The most recent policy action relevant to promotion suppression.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LastAction {
    /// No install is pending; the next promotion proceeds.
    #[default]
    Idle,
    /// The previous call installed a new line into this slot.
    Installed(usize),
}

/// SRRIP Policy state.
#[derive(Debug, Clone)]
pub struct SrripPolicy {
    store: RrpvStore,
    scope: SuppressionScope,
    pending: LastAction,
    stats: PolicyStats,
}

impl SrripPolicy {
    /// Creates a new SRRIP policy with reference suppression semantics.
    ///
    /// # Arguments
    ///
    /// * `num_lines` - Total number of cache slots tracked.
    /// * `rpv_max` - Maximal RRPV.
    ///
    /// # Errors
    ///
    /// Returns [`PolicyError::ZeroLines`] if `num_lines` is zero and
    /// [`PolicyError::ZeroRpvMax`] if `rpv_max` is zero.
    pub fn new(num_lines: usize, rpv_max: u32) -> Result<Self, PolicyError> {
        Self::with_scope(num_lines, rpv_max, SuppressionScope::AnyLine)
    }

    /// Creates a new SRRIP policy with an explicit suppression scope.
    ///
    /// # Errors
    ///
    /// Same as [`SrripPolicy::new`].
    pub fn with_scope(
        num_lines: usize,
        rpv_max: u32,
        scope: SuppressionScope,
    ) -> Result<Self, PolicyError> {
        if num_lines == 0 {
            return Err(PolicyError::ZeroLines);
        }
        if rpv_max == 0 {
            return Err(PolicyError::ZeroRpvMax);
        }
        debug!(num_lines, rpv_max, ?scope, "srrip policy created");
        Ok(Self {
            store: RrpvStore::new(num_lines, rpv_max),
            scope,
            pending: LastAction::Idle,
            stats: PolicyStats::default(),
        })
    }

    /// Creates a policy over `num_lines` slots from configuration.
    ///
    /// # Errors
    ///
    /// Same as [`SrripPolicy::new`].
    pub fn from_config(num_lines: usize, config: &SrripConfig) -> Result<Self, PolicyError> {
        Self::with_scope(num_lines, config.rpv_max, config.suppression)
    }

    /// Maximal RRPV.
    #[inline]
    pub const fn rpv_max(&self) -> u32 {
        self.store.max()
    }

    /// Suppression scope in effect.
    #[inline]
    pub const fn scope(&self) -> SuppressionScope {
        self.scope
    }

    /// Pending suppression state.
    #[inline]
    pub const fn pending(&self) -> LastAction {
        self.pending
    }

    /// RRPV of `line`, or `None` if out of range.
    #[inline]
    pub fn rrpv(&self, line: usize) -> Option<u32> {
        self.store.get(line)
    }

    /// All RRPVs in slot order.
    #[inline]
    pub fn rrpvs(&self) -> &[u32] {
        self.store.as_slice()
    }

    /// Counters accumulated since construction or the last reset.
    #[inline]
    pub const fn stats(&self) -> &PolicyStats {
        &self.stats
    }

    /// Restores the cold-start state: every RRPV at `rpv_max`, nothing pending,
    /// counters cleared.
    pub fn reset(&mut self) {
        self.store.reset();
        self.pending = LastAction::Idle;
        self.stats = PolicyStats::default();
    }

    /// Whether a promotion of `line` is suppressed by the pending install.
    const fn suppresses(&self, line: usize) -> bool {
        match (self.pending, self.scope) {
            (LastAction::Idle, _) => false,
            (LastAction::Installed(_), SuppressionScope::AnyLine) => true,
            (LastAction::Installed(installed), SuppressionScope::InstalledLine) => {
                installed == line
            }
        }
    }
}

impl ReplacementPolicy for SrripPolicy {
    #[inline]
    fn num_lines(&self) -> usize {
        self.store.len()
    }

    /// Predicts near-immediate re-reference for `line`.
    ///
    /// Skipped when a pending install suppresses it. The pending state is
    /// cleared either way.
    fn promote_on_hit(&mut self, line: usize) -> Promotion {
        let suppressed = self.suppresses(line);
        self.pending = LastAction::Idle;

        if suppressed {
            self.stats.suppressed_promotions += 1;
            trace!(line, "promotion suppressed");
            return Promotion::Suppressed;
        }

        self.store.set(line, 0);
        self.stats.promotions += 1;
        trace!(line, "promoted");
        Promotion::Promoted
    }

    /// Inserts `line` at `rpv_max - 1` and arms suppression.
    fn install_on_replace(&mut self, line: usize) {
        self.store.set(line, self.store.max() - 1);
        self.pending = LastAction::Installed(line);
        self.stats.installs += 1;
        trace!(line, rrpv = self.store.max() - 1, "installed");
    }

    /// Returns the first candidate at `rpv_max`, aging the set until one is.
    ///
    /// Each aging pass raises every non-maximal candidate by one, so at most
    /// `rpv_max` passes run before a victim exists. The victim's own RRPV is
    /// left for `install_on_replace` to overwrite.
    fn select_victim<C>(&mut self, candidates: C) -> Result<usize, PolicyError>
    where
        C: IntoIterator<Item = usize> + Clone,
    {
        let mut passes: u32 = 0;
        loop {
            let mut seen = false;
            for line in candidates.clone() {
                seen = true;
                if self.store.is_max(line) {
                    debug_assert!(passes <= self.store.max());
                    self.stats.record_search(passes);
                    trace!(victim = line, passes, "victim selected");
                    return Ok(line);
                }
            }
            if !seen {
                return Err(PolicyError::EmptyCandidates);
            }

            for line in candidates.clone() {
                self.store.age(line);
            }
            passes += 1;
        }
    }
}
