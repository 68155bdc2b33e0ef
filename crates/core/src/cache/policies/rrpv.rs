//! Re-Reference Prediction Value (RRPV) Store.
//!
//! Owns one saturating counter per cache slot. Higher values predict a more
//! distant re-reference and therefore a higher eviction priority. Every
//! entry stays within `[0, max]` for the lifetime of the store.

/// Fixed-size array of per-line RRPVs.
///
/// Allocated once at construction and never resized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RrpvStore {
    values: Box<[u32]>,
    max: u32,
}

impl RrpvStore {
    /// Creates a store of `num_lines` entries, all at `max`.
    ///
    /// Cold lines start as maximal-priority eviction candidates.
    pub fn new(num_lines: usize, max: u32) -> Self {
        Self {
            values: vec![max; num_lines].into_boxed_slice(),
            max,
        }
    }

    /// The saturation value.
    #[inline]
    pub const fn max(&self) -> u32 {
        self.max
    }

    /// Number of slots.
    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the store has no slots.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Current value of `line`, or `None` if out of range.
    #[inline]
    pub fn get(&self, line: usize) -> Option<u32> {
        self.values.get(line).copied()
    }

    /// Overwrites the value of `line`.
    ///
    /// # Panics
    ///
    /// Panics if `line` is out of range.
    #[inline]
    pub fn set(&mut self, line: usize, value: u32) {
        debug_assert!(value <= self.max, "RRPV {value} exceeds max {}", self.max);
        self.values[line] = value.min(self.max);
    }

    /// Whether `line` holds the maximal value.
    ///
    /// # Panics
    ///
    /// Panics if `line` is out of range.
    #[inline]
    pub fn is_max(&self, line: usize) -> bool {
        self.values[line] == self.max
    }

    /// Increments `line` by one, saturating at `max`.
    ///
    /// # Panics
    ///
    /// Panics if `line` is out of range.
    #[inline]
    pub fn age(&mut self, line: usize) {
        let value = &mut self.values[line];
        *value = value.saturating_add(1).min(self.max);
    }

    /// Returns every slot to `max` without reallocating.
    pub fn reset(&mut self) {
        self.values.fill(self.max);
    }

    /// All values in slot order.
    #[inline]
    pub fn as_slice(&self) -> &[u32] {
        &self.values
    }
}
