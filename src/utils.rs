//! Shared constants and the seeded input generator.

use rand::Rng;
use std::ops::Range;

/// Inputs shorter than this are enumerated; longer ones go to a DP variant.
pub const DEFAULT_NAIVE_THRESHOLD: usize = 20;

/// Largest input the bitmask enumerator accepts (`2^63` masks fit a `u64`).
pub const MAX_ENUMERATION_LEN: usize = 63;

/// Default cell budget for reachability state (one byte per cell).
pub const DEFAULT_MAX_CELLS: usize = 1 << 30;

/// Draw `len` integers uniformly from `range` using the caller's generator.
///
/// Passing the generator in keeps inputs reproducible: the same seed always
/// yields the same sequence.
///
/// # Panics
/// Panics if `range` is empty and `len > 0`.
pub fn random_elements<R: Rng>(rng: &mut R, len: usize, range: Range<i64>) -> Vec<i64> {
    (0..len).map(|_| rng.gen_range(range.clone())).collect()
}
