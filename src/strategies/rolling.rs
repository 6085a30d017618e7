//! Rolling pair of reachability rows.
//!
//! Same recurrence and early exit as [`Table`](super::table::Table), but only
//! the previous and current rows are live. Row `i` is computed exclusively
//! from the fully settled row `i - 1`; the rows are then swapped and the new
//! current row cleared, so no allocation happens inside the loop.

use crate::bounds::SumBounds;
use crate::error::Result;
use crate::frontier::{check_capacity, ReachRow};
use crate::traits::{Decision, ScanStats, StrategyKind, SubsetSumStrategy};
use crate::utils::DEFAULT_MAX_CELLS;

#[derive(Debug, Clone, Copy)]
pub struct RollingPair {
    max_cells: usize,
}

impl Default for RollingPair {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_CELLS)
    }
}

impl RollingPair {
    /// `max_cells` bounds both rows together.
    pub fn new(max_cells: usize) -> Self {
        Self { max_cells }
    }
}

impl SubsetSumStrategy for RollingPair {
    fn kind(&self) -> StrategyKind {
        StrategyKind::RollingPair
    }

    fn solve(&self, elements: &[i64], target: i64) -> Result<Decision> {
        let bounds = SumBounds::of(elements)?;
        if elements.is_empty() || !bounds.contains(target) {
            return Ok(Decision::rejected());
        }

        #[cfg(feature = "tracing")]
        let span = tracing::trace_span!("rolling_pair", n = elements.len(), target);
        #[cfg(feature = "tracing")]
        let _enter = span.enter();

        check_capacity(2 * bounds.width()? as u128, self.max_cells)?;
        let mut prev = ReachRow::new(bounds, self.max_cells)?;
        let mut curr = ReachRow::new(bounds, self.max_cells)?;
        let mut stats = ScanStats {
            rows: 1,
            cells: 1,
            subsets: 0,
        };

        prev.set(elements[0]);
        if elements[0] == target {
            return Ok(Decision {
                reachable: true,
                stats,
            });
        }

        let width = prev.len();
        for &e in &elements[1..] {
            stats.rows += 1;
            for off in 0..width {
                let j = bounds.sum_at(off);
                stats.cells += 1;
                let reachable = prev.get(j)
                    || e == j
                    || j.checked_sub(e).is_some_and(|rest| prev.get(rest));
                if reachable {
                    curr.set(j);
                    if j == target {
                        return Ok(Decision {
                            reachable: true,
                            stats,
                        });
                    }
                }
            }
            std::mem::swap(&mut prev, &mut curr);
            curr.clear();
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
    use crate::error::SubsetSumError;
    use crate::strategies::table::Table;

    #[test]
    fn agrees_with_table_on_reference_inputs() {
        let cases: &[(&[i64], i64)] = &[
            (&[-1, 10, 5, 3, 2, 1], 0),
            (&[-2, -1, 5, 5, -1, 10, 4], 0),
            (&[-4, 2], 0),
            (&[3, 3, 3], 9),
            (&[3, 3, 3], 12),
            (&[7], 7),
        ];
        for &(elements, target) in cases {
            let pair = RollingPair::default().solve(elements, target).unwrap();
            let table = Table::default().solve(elements, target).unwrap();
            assert_eq!(pair.reachable, table.reachable, "{elements:?} -> {target}");
            assert_eq!(pair.stats, table.stats, "same recurrence, same work");
        }
    }

    #[test]
    fn never_reuses_an_element_within_a_step() {
        // {-4}, {2}, {-4, 2}: 0 needs 2 twice.
        assert!(!RollingPair::default().solve(&[-4, 2], 0).unwrap().reachable);
    }

    #[test]
    fn budget_counts_both_rows() {
        // width 6, two rows
        let err = RollingPair::new(11).solve(&[-2, 3], 1).unwrap_err();
        assert!(matches!(err, SubsetSumError::CapacityExceeded { required: 12, .. }));
        assert!(RollingPair::new(12).solve(&[-2, 3], 1).unwrap().reachable);
    }
}
