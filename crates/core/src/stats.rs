//! Replacement statistics collection and reporting.
//!
//! This module tracks the counters produced while a cache drives its policy. It provides:
//! 1. **Policy counters:** Promotions, suppressed promotions, installs, and aging work.
//! 2. **Cache counters:** Accesses, hits, misses, evictions, and write-backs.
//! 3. **Reporting:** A fixed-width text report and `Serialize` for JSON output.

use std::fmt;

use serde::Serialize;

/// Counters maintained by a replacement policy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct PolicyStats {
    /// Hits that set a line's RRPV to zero.
    pub promotions: u64,
    /// Hits whose promotion was skipped after an install.
    pub suppressed_promotions: u64,
    /// Lines installed after a victim search.
    pub installs: u64,
    /// Completed victim searches.
    pub victim_searches: u64,
    /// Aging passes summed over all searches.
    pub aging_passes: u64,
    /// Largest number of aging passes any single search needed.
    pub max_aging_passes: u32,
}

impl PolicyStats {
    /// Records one completed victim search that needed `passes` aging passes.
    pub fn record_search(&mut self, passes: u32) {
        self.victim_searches += 1;
        self.aging_passes += u64::from(passes);
        self.max_aging_passes = self.max_aging_passes.max(passes);
    }

    /// Mean aging passes per victim search.
    pub fn mean_aging_passes(&self) -> f64 {
        if self.victim_searches == 0 {
            0.0
        } else {
            self.aging_passes as f64 / self.victim_searches as f64
        }
    }
}

/// Counters maintained by the cache host.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CacheStats {
    /// Total accesses.
    pub accesses: u64,
    /// Accesses that found the line resident.
    pub hits: u64,
    /// Accesses that required a fill.
    pub misses: u64,
    /// Fills that displaced a valid line.
    pub evictions: u64,
    /// Evictions of dirty lines.
    pub writebacks: u64,
}

impl CacheStats {
    /// Fraction of accesses that hit, or 0 with no accesses.
    pub fn hit_rate(&self) -> f64 {
        if self.accesses == 0 {
            0.0
        } else {
            self.hits as f64 / self.accesses as f64
        }
    }

    /// Fraction of accesses that missed, or 0 with no accesses.
    pub fn miss_rate(&self) -> f64 {
        if self.accesses == 0 {
            0.0
        } else {
            self.misses as f64 / self.accesses as f64
        }
    }
}

/// Combined statistics for one trace replay.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct ReplayStats {
    /// Cache counters.
    pub cache: CacheStats,
    /// Policy counters.
    pub policy: PolicyStats,
}

impl fmt::Display for ReplayStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let c = &self.cache;
        let p = &self.policy;
        writeln!(f, "==========================================================")?;
        writeln!(f, "SRRIP REPLACEMENT STATISTICS")?;
        writeln!(f, "==========================================================")?;
        writeln!(f, "cache.accesses           {}", c.accesses)?;
        writeln!(f, "cache.hits               {}", c.hits)?;
        writeln!(f, "cache.misses             {}", c.misses)?;
        writeln!(f, "cache.hit_rate           {:.4}", c.hit_rate())?;
        writeln!(f, "cache.evictions          {}", c.evictions)?;
        writeln!(f, "cache.writebacks         {}", c.writebacks)?;
        writeln!(f, "----------------------------------------------------------")?;
        writeln!(f, "policy.promotions        {}", p.promotions)?;
        writeln!(f, "policy.suppressed        {}", p.suppressed_promotions)?;
        writeln!(f, "policy.installs          {}", p.installs)?;
        writeln!(f, "policy.victim_searches   {}", p.victim_searches)?;
        writeln!(f, "policy.aging_passes      {}", p.aging_passes)?;
        writeln!(f, "policy.aging_mean        {:.4}", p.mean_aging_passes())?;
        writeln!(f, "policy.aging_max         {}", p.max_aging_passes)?;
        write!(f, "==========================================================")
    }
}
