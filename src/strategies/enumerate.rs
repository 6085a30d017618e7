//! Exhaustive bitmask enumeration.
//!
//! Every mask in `1..2^N` selects a non-empty subset (bit `i` set means
//! `elements[i]` is included). O(N * 2^N) time, constant extra space, so it is
//! only used below the selector threshold.

use crate::bounds::SumBounds;
use crate::error::{Result, SubsetSumError};
use crate::traits::{Decision, ScanStats, StrategyKind, SubsetSumStrategy};
use crate::utils::MAX_ENUMERATION_LEN;

#[derive(Debug, Clone, Copy, Default)]
pub struct Enumeration;

impl SubsetSumStrategy for Enumeration {
    fn kind(&self) -> StrategyKind {
        StrategyKind::Enumeration
    }

    fn solve(&self, elements: &[i64], target: i64) -> Result<Decision> {
        let n = elements.len();
        if n > MAX_ENUMERATION_LEN {
            return Err(SubsetSumError::EnumerationTooLarge { len: n });
        }
        // Also guarantees every partial sum below stays inside [A, B].
        let bounds = SumBounds::of(elements)?;
        if n == 0 || !bounds.contains(target) {
            return Ok(Decision::rejected());
        }

        #[cfg(feature = "tracing")]
        let span = tracing::trace_span!("enumeration", n, target);
        #[cfg(feature = "tracing")]
        let _enter = span.enter();

        let end = 1u64 << n;
        let mut stats = ScanStats::default();
        for mask in 1..end {
            stats.subsets += 1;
            let sum: i64 = elements
                .iter()
                .enumerate()
                .filter(|(i, _)| mask & (1u64 << i) != 0)
                .map(|(_, &e)| e)
                .sum();
            if sum == target {
                return Ok(Decision {
                    reachable: true,
                    stats,
                });
            }
        }
        Ok(Decision {
            reachable: false,
            stats,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decide(elements: &[i64], target: i64) -> bool {
        Enumeration.solve(elements, target).unwrap().reachable
    }

    #[test]
    fn empty_subset_is_never_a_solution() {
        assert!(!decide(&[], 0));
        assert!(decide(&[0], 0));
        assert!(!decide(&[5], 0));
    }

    #[test]
    fn finds_mixed_sign_subsets() {
        assert!(decide(&[-1, 10, 5, 3, 2, 1], 0));
        assert!(decide(&[-2, -1, 5, 5, -1, 10, 4], 0));
        assert!(!decide(&[1, 2, 4], 8));
        assert!(decide(&[1, 2, 4], 7));
    }

    #[test]
    fn visits_every_mask_when_unreachable() {
        let d = Enumeration.solve(&[1, 2, 4], -1).unwrap();
        assert!(!d.reachable);
        assert_eq!(d.stats.subsets, 0, "target below A is rejected up front");
        let d = Enumeration.solve(&[2, 4, 6], 5).unwrap();
        assert!(!d.reachable);
        assert_eq!(d.stats.subsets, 7);
    }

    #[test]
    fn refuses_unrepresentable_mask_space() {
        let elements = vec![1i64; MAX_ENUMERATION_LEN + 1];
        assert_eq!(
            Enumeration.solve(&elements, 0).unwrap_err(),
            SubsetSumError::EnumerationTooLarge {
                len: MAX_ENUMERATION_LEN + 1
            }
        );
    }
}
