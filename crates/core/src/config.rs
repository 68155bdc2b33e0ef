//! Configuration for the SRRIP engine and its cache host.
//!
//! This module defines the configuration structures used to parameterize
//! the replacement engine. It provides:
//! 1. **Defaults:** Baseline constants (RRPV width, cache geometry).
//! 2. **Structures:** `SrripConfig` for the policy, `CacheConfig` for the host, `Config` as root.
//! 3. **Enums:** The suppression scope applied after a replacement-install.
//!
//! Configuration is supplied as JSON (`Config::from_json`) or built from `Config::default()`.

use serde::Deserialize;

/// Default configuration constants.
mod defaults {
    /// Maximal RRPV (2-bit counters, values 0..=3).
    pub const RPV_MAX: u32 = 3;

    /// Default cache size in bytes (4 KiB).
    pub const CACHE_SIZE: usize = 4096;

    /// Default cache line size in bytes (64 bytes).
    pub const CACHE_LINE: usize = 64;

    /// Default cache associativity (4 ways).
    pub const CACHE_WAYS: usize = 4;
}

/// Which promotion a replacement-install suppresses.
///
/// After `install_on_replace`, the next `promote_on_hit` call may be skipped.
/// The scope decides whether that applies to any line or only to the line
/// that was just installed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SuppressionScope {
    /// The next promotion is skipped whatever line it targets.
    ///
    /// Matches the reference SRRIP policy bit for bit.
    #[default]
    #[serde(alias = "AnyLine")]
    AnyLine,
    /// Only a promotion of the just-installed line is skipped.
    #[serde(alias = "InstalledLine")]
    InstalledLine,
}

/// SRRIP policy configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct SrripConfig {
    /// Maximal re-reference prediction value; new lines are inserted at `rpv_max - 1`.
    #[serde(default = "SrripConfig::default_rpv_max")]
    pub rpv_max: u32,

    /// Scope of promotion suppression after an install.
    #[serde(default)]
    pub suppression: SuppressionScope,
}

impl SrripConfig {
    /// Returns the default maximal RRPV.
    fn default_rpv_max() -> u32 {
        defaults::RPV_MAX
    }
}

impl Default for SrripConfig {
    fn default() -> Self {
        Self {
            rpv_max: defaults::RPV_MAX,
            suppression: SuppressionScope::default(),
        }
    }
}

/// Set-associative cache geometry plus its replacement policy settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CacheConfig {
    /// Total cache size in bytes
    #[serde(default = "CacheConfig::default_size")]
    pub size_bytes: usize,

    /// Cache line size in bytes
    #[serde(default = "CacheConfig::default_line")]
    pub line_bytes: usize,

    /// Associativity (number of ways)
    #[serde(default = "CacheConfig::default_ways")]
    pub ways: usize,

    /// Replacement policy settings
    #[serde(default)]
    pub srrip: SrripConfig,
}

impl CacheConfig {
    /// Returns the default cache size in bytes.
    fn default_size() -> usize {
        defaults::CACHE_SIZE
    }

    /// Returns the default cache line size in bytes.
    fn default_line() -> usize {
        defaults::CACHE_LINE
    }

    /// Returns the default cache associativity (number of ways).
    fn default_ways() -> usize {
        defaults::CACHE_WAYS
    }

    /// Total number of line slots (`size_bytes / line_bytes`).
    pub const fn num_lines(&self) -> usize {
        if self.line_bytes == 0 {
            0
        } else {
            self.size_bytes / self.line_bytes
        }
    }

    /// Number of sets, or `None` if the geometry does not divide evenly or
    /// the set size overflows `usize`.
    pub const fn num_sets(&self) -> Option<usize> {
        if self.size_bytes == 0 || self.line_bytes == 0 || self.ways == 0 {
            return None;
        }
        let Some(set_bytes) = self.line_bytes.checked_mul(self.ways) else {
            return None;
        };
        if self.size_bytes % set_bytes != 0 {
            return None;
        }
        Some(self.size_bytes / set_bytes)
    }
}

impl Default for CacheConfig {
    /// Creates a default 4 KiB, 4-way cache with 64-byte lines and 2-bit SRRIP.
    fn default() -> Self {
        Self {
            size_bytes: defaults::CACHE_SIZE,
            line_bytes: defaults::CACHE_LINE,
            ways: defaults::CACHE_WAYS,
            srrip: SrripConfig::default(),
        }
    }
}

/// Root configuration.
///
/// # Examples
///
/// ```
/// use srrip_core::config::{Config, SuppressionScope};
///
/// let json = r#"{
///     "cache": {
///         "size_bytes": 8192,
///         "ways": 8,
///         "srrip": { "rpv_max": 7, "suppression": "installed_line" }
///     }
/// }"#;
///
/// let config = Config::from_json(json).unwrap();
/// assert_eq!(config.cache.size_bytes, 8192);
/// assert_eq!(config.cache.line_bytes, 64);
/// assert_eq!(config.cache.srrip.rpv_max, 7);
/// assert_eq!(config.cache.srrip.suppression, SuppressionScope::InstalledLine);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Config {
    /// Cache geometry and policy
    #[serde(default)]
    pub cache: CacheConfig,
}

impl Config {
    /// Parses a configuration from JSON, filling omitted fields with defaults.
    ///
    /// # Errors
    ///
    /// Returns the `serde_json` error if the input is not valid configuration JSON.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
