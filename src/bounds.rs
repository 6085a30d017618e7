//! Sum bounds `[A, B]` of an input sequence.
//!
//! `A` is the sum of all negative elements and `B` the sum of all positive
//! ones, so every subset sum of every prefix lies in `[A, B]`. Targets outside
//! that interval are rejected before any reachability state is allocated.

use crate::error::{Result, SubsetSumError};

/// Closed interval `[lower, upper]` of achievable subset sums.
///
/// Invariant: `lower <= 0 <= upper`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SumBounds {
    lower: i64,
    upper: i64,
}

impl SumBounds {
    /// Compute `A` and `B` for `elements`, failing loudly on `i64` overflow.
    pub fn of(elements: &[i64]) -> Result<Self> {
        let mut lower = 0i64;
        let mut upper = 0i64;
        for &e in elements {
            if e < 0 {
                lower = lower
                    .checked_add(e)
                    .ok_or(SubsetSumError::Overflow { stage: "negative sum bound" })?;
            } else {
                upper = upper
                    .checked_add(e)
                    .ok_or(SubsetSumError::Overflow { stage: "positive sum bound" })?;
            }
        }
        Ok(Self { lower, upper })
    }

    /// `A`: sum of the negative elements.
    #[inline]
    pub fn lower(&self) -> i64 {
        self.lower
    }

    /// `B`: sum of the positive elements.
    #[inline]
    pub fn upper(&self) -> i64 {
        self.upper
    }

    #[inline]
    pub fn contains(&self, sum: i64) -> bool {
        self.lower <= sum && sum <= self.upper
    }

    /// Number of candidate sums, `B - A + 1`.
    pub fn width(&self) -> Result<usize> {
        let span = (self.upper as i128) - (self.lower as i128) + 1;
        usize::try_from(span).map_err(|_| SubsetSumError::Overflow { stage: "sum range width" })
    }

    /// Dense position of `sum`, i.e. `sum - A`, or `None` outside `[A, B]`.
    #[inline]
    pub fn offset(&self, sum: i64) -> Option<usize> {
        if !self.contains(sum) {
            return None;
        }
        usize::try_from((sum as i128) - (self.lower as i128)).ok()
    }

    /// Inverse of [`offset`](Self::offset). Callers pass offsets below `width()`.
    #[inline]
    pub fn sum_at(&self, offset: usize) -> i64 {
        ((self.lower as i128) + offset as i128) as i64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounds_split_signs() {
        let b = SumBounds::of(&[-2, -1, 5, 5, -1, 10, 4]).unwrap();
        assert_eq!(b.lower(), -4);
        assert_eq!(b.upper(), 24);
        assert_eq!(b.width().unwrap(), 29);
    }

    #[test]
    fn empty_input_is_the_zero_interval() {
        let b = SumBounds::of(&[]).unwrap();
        assert_eq!((b.lower(), b.upper()), (0, 0));
        assert!(b.contains(0));
        assert!(!b.contains(1));
        assert_eq!(b.width().unwrap(), 1);
    }

    #[test]
    fn offset_maps_lower_bound_to_zero() {
        let b = SumBounds::of(&[-3, 4]).unwrap();
        assert_eq!(b.offset(-3), Some(0));
        assert_eq!(b.offset(0), Some(3));
        assert_eq!(b.offset(4), Some(7));
        assert_eq!(b.offset(5), None);
        assert_eq!(b.offset(-4), None);
        for off in 0..b.width().unwrap() {
            assert_eq!(b.offset(b.sum_at(off)), Some(off));
        }
    }

    #[test]
    fn overflowing_sum_is_reported() {
        let err = SumBounds::of(&[i64::MAX, 1]).unwrap_err();
        assert_eq!(err, SubsetSumError::Overflow { stage: "positive sum bound" });
        let err = SumBounds::of(&[i64::MIN, -1]).unwrap_err();
        assert_eq!(err, SubsetSumError::Overflow { stage: "negative sum bound" });
    }

    #[test]
    fn width_overflow_is_reported_not_wrapped() {
        let b = SumBounds::of(&[i64::MIN, i64::MAX]).unwrap();
        if usize::BITS <= 64 {
            assert!(matches!(b.width(), Err(SubsetSumError::Overflow { .. })));
        }
    }
}
