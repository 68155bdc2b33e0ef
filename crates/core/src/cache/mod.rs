//! Set-Associative Cache Host.
//!
//! This module implements a minimal set-associative tag store that drives a
//! replacement policy through its callback contract. It models hits, misses,
//! evictions, and dirty write-backs; it does not model timing.
//!
//! Slot ids handed to the policy are flat: `set * ways + way`.

/// Cache replacement policy implementations (SRRIP).
pub mod policies;

use tracing::{debug, trace};

use self::policies::{ReplacementPolicy, SrripPolicy};
use crate::common::PolicyError;
use crate::config::CacheConfig;
use crate::stats::CacheStats;

/// Cache line entry containing tag, validity, and dirty bits.
#[derive(Clone, Copy, Debug, Default)]
struct CacheLine {
    tag: u64,
    valid: bool,
    dirty: bool,
}

/// Result of a single cache access.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AccessOutcome {
    /// The line was resident.
    pub hit: bool,
    /// Slot id that was hit or filled.
    pub slot: usize,
    /// Line address of the valid line displaced by the fill, if any.
    pub evicted: Option<u64>,
    /// The displaced line was dirty.
    pub writeback: bool,
}

/// Cache simulator implementing a set-associative cache over policy `P`.
///
/// Dispatch to the policy is static; every hit calls `promote_on_hit` and
/// every miss calls `select_victim` followed by `install_on_replace`.
#[derive(Debug)]
pub struct CacheSim<P> {
    lines: Vec<CacheLine>,
    num_sets: usize,
    ways: usize,
    line_bytes: usize,
    policy: P,
    stats: CacheStats,
}

impl CacheSim<SrripPolicy> {
    /// Creates a cache with an SRRIP policy built from `config.srrip`.
    ///
    /// # Errors
    ///
    /// Returns [`PolicyError::InvalidGeometry`] if the geometry does not divide
    /// into whole sets, or the policy's construction error.
    pub fn new(config: &CacheConfig) -> Result<Self, PolicyError> {
        let policy = SrripPolicy::from_config(config.num_lines(), &config.srrip)?;
        Self::with_policy(config, policy)
    }
}

impl<P: ReplacementPolicy> CacheSim<P> {
    /// Creates a cache over an already constructed policy.
    ///
    /// # Errors
    ///
    /// Returns [`PolicyError::InvalidGeometry`] if the geometry does not divide
    /// into whole sets, and [`PolicyError::PolicyTooSmall`] if the policy
    /// tracks fewer slots than the cache holds.
    pub fn with_policy(config: &CacheConfig, policy: P) -> Result<Self, PolicyError> {
        let num_sets = config.num_sets().ok_or(PolicyError::InvalidGeometry {
            size_bytes: config.size_bytes,
            line_bytes: config.line_bytes,
            ways: config.ways,
        })?;
        let required = num_sets * config.ways;
        if policy.num_lines() < required {
            return Err(PolicyError::PolicyTooSmall {
                required,
                available: policy.num_lines(),
            });
        }

        debug!(
            num_sets,
            ways = config.ways,
            line_bytes = config.line_bytes,
            "cache created"
        );

        Ok(Self {
            lines: vec![CacheLine::default(); required],
            num_sets,
            ways: config.ways,
            line_bytes: config.line_bytes,
            policy,
            stats: CacheStats::default(),
        })
    }

    /// Number of sets.
    pub const fn num_sets(&self) -> usize {
        self.num_sets
    }

    /// Associativity.
    pub const fn ways(&self) -> usize {
        self.ways
    }

    /// The replacement policy.
    pub const fn policy(&self) -> &P {
        &self.policy
    }

    /// Access counters.
    pub const fn stats(&self) -> &CacheStats {
        &self.stats
    }

    /// Splits `addr` into `(set index, tag)`.
    fn locate(&self, addr: u64) -> (usize, u64) {
        let block = addr / self.line_bytes as u64;
        let set_index = (block % self.num_sets as u64) as usize;
        let tag = block / self.num_sets as u64;
        (set_index, tag)
    }

    /// Reconstructs the line address held by `tag` in `set_index`.
    fn line_addr(&self, set_index: usize, tag: u64) -> u64 {
        (tag * self.num_sets as u64 + set_index as u64) * self.line_bytes as u64
    }

    /// Slot id of the resident line for `addr`, if any.
    fn find(&self, addr: u64) -> Option<usize> {
        let (set_index, tag) = self.locate(addr);
        let base = set_index * self.ways;
        (base..base + self.ways).find(|&idx| self.lines[idx].valid && self.lines[idx].tag == tag)
    }

    /// Checks if the cache contains the specified address.
    pub fn contains(&self, addr: u64) -> bool {
        self.find(addr).is_some()
    }

    /// Accesses the cache for the specified address.
    ///
    /// On a hit the policy is told to promote the line. On a miss the policy
    /// selects a victim among the set's slots and the new line is installed
    /// there.
    ///
    /// # Arguments
    ///
    /// * `addr` - The byte address to access
    /// * `is_write` - Whether this is a write operation
    ///
    /// # Errors
    ///
    /// Propagates the policy's victim-selection error.
    pub fn access(&mut self, addr: u64, is_write: bool) -> Result<AccessOutcome, PolicyError> {
        self.stats.accesses += 1;

        if let Some(slot) = self.find(addr) {
            self.stats.hits += 1;
            let promotion = self.policy.promote_on_hit(slot);
            if is_write {
                self.lines[slot].dirty = true;
            }
            trace!(addr, slot, ?promotion, "hit");
            return Ok(AccessOutcome {
                hit: true,
                slot,
                evicted: None,
                writeback: false,
            });
        }

        self.stats.misses += 1;
        let (set_index, tag) = self.locate(addr);
        let base = set_index * self.ways;
        let slot = self.policy.select_victim_in_range(base, self.ways)?;

        let victim = self.lines[slot];
        let evicted = victim.valid.then(|| self.line_addr(set_index, victim.tag));
        let writeback = victim.valid && victim.dirty;
        if evicted.is_some() {
            self.stats.evictions += 1;
        }
        if writeback {
            self.stats.writebacks += 1;
        }

        self.lines[slot] = CacheLine {
            tag,
            valid: true,
            dirty: is_write,
        };
        self.policy.install_on_replace(slot);
        trace!(addr, slot, ?evicted, writeback, "miss");

        Ok(AccessOutcome {
            hit: false,
            slot,
            evicted,
            writeback,
        })
    }

    /// Invalidates every line.
    ///
    /// Policy state is left as is; the next misses still go through
    /// victim selection.
    pub fn flush(&mut self) {
        for line in &mut self.lines {
            *line = CacheLine::default();
        }
    }
}
