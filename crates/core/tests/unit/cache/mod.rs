//! Cache and replacement policy tests.



/// Randomized invariant checks over operation sequences.
pub mod properties;
