//! Full 2-D reachability table.
//!
//! Row `i` holds every sum reachable from `elements[0..=i]`:
//!
//! ```text
//! reach(0, j) = (elements[0] == j)
//! reach(i, j) = reach(i-1, j) || elements[i] == j || reach(i-1, j - elements[i])
//! ```
//!
//! O(N * (B - A)) time and space. The plain decision short-circuits as soon as
//! the target cell turns reachable; the witness path fills every row so the
//! history can be walked backwards.

use crate::bounds::SumBounds;
use crate::error::Result;
use crate::frontier::ReachTable;
use crate::traits::{Decision, ScanStats, StrategyKind, SubsetSumStrategy};
use crate::utils::DEFAULT_MAX_CELLS;

#[derive(Debug, Clone, Copy)]
pub struct Table {
    max_cells: usize,
}

impl Default for Table {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_CELLS)
    }
}

enum Fill {
    /// Target reached before the table was complete.
    Stopped(Decision),
    Complete(ReachTable, ScanStats),
}

impl Table {
    /// `max_cells` bounds the whole `N x (B - A + 1)` table.
    pub fn new(max_cells: usize) -> Self {
        Self { max_cells }
    }

    fn fill(
        &self,
        elements: &[i64],
        target: i64,
        bounds: SumBounds,
        stop_early: bool,
    ) -> Result<Fill> {
        let n = elements.len();
        let mut table = ReachTable::new(bounds, n, self.max_cells)?;
        let mut stats = ScanStats {
            rows: 1,
            cells: 1,
            subsets: 0,
        };

        table.set(0, elements[0]);
        if stop_early && elements[0] == target {
            return Ok(Fill::Stopped(Decision {
                reachable: true,
                stats,
            }));
        }

        let width = table.width();
        for (i, &e) in elements.iter().enumerate().skip(1) {
            stats.rows += 1;
            for off in 0..width {
                let j = bounds.sum_at(off);
                stats.cells += 1;
                let reachable = table.get(i - 1, j)
                    || e == j
                    || j.checked_sub(e).is_some_and(|rest| table.get(i - 1, rest));
                if reachable {
                    table.set(i, j);
                    if stop_early && j == target {
                        return Ok(Fill::Stopped(Decision {
                            reachable: true,
                            stats,
                        }));
                    }
                }
            }
        }
        Ok(Fill::Complete(table, stats))
    }

    /// Decide and, when reachable, return indices of one witness subset in
    /// ascending order.
    ///
    /// Never short-circuits: the full table is needed for the backward walk.
    pub fn solve_with_witness(
        &self,
        elements: &[i64],
        target: i64,
    ) -> Result<(Decision, Option<Vec<usize>>)> {
        let bounds = SumBounds::of(elements)?;
        if elements.is_empty() || !bounds.contains(target) {
            return Ok((Decision::rejected(), None));
        }

        #[cfg(feature = "tracing")]
        let span = tracing::trace_span!("table_witness", n = elements.len(), target);
        #[cfg(feature = "tracing")]
        let _enter = span.enter();

        let (table, stats) = match self.fill(elements, target, bounds, false)? {
            Fill::Complete(table, stats) => (table, stats),
            Fill::Stopped(decision) => return Ok((decision, None)),
        };
        let last = elements.len() - 1;
        if !table.get(last, target) {
            return Ok((
                Decision {
                    reachable: false,
                    stats,
                },
                None,
            ));
        }

        let indices = reconstruct(&table, elements, last, target);
        Ok((
            Decision {
                reachable: true,
                stats,
            },
            Some(indices),
        ))
    }
}

/// Walk rows backwards from `row`, where `remaining` is known reachable.
///
/// The lowest row at which `remaining` is reachable is where its last element
/// was folded in; that element is part of the witness.
fn reconstruct(table: &ReachTable, elements: &[i64], mut row: usize, target: i64) -> Vec<usize> {
    let mut remaining = target;
    let mut picked = Vec::new();
    loop {
        while row > 0 && table.get(row - 1, remaining) {
            row -= 1;
        }
        picked.push(row);
        let e = elements[row];
        // Row 0 only reaches elements[0], so row > 0 whenever e != remaining.
        if e == remaining || row == 0 {
            break;
        }
        remaining -= e;
        row -= 1;
    }
    picked.reverse();
    picked
}

impl SubsetSumStrategy for Table {
    fn kind(&self) -> StrategyKind {
        StrategyKind::Table
    }

    fn solve(&self, elements: &[i64], target: i64) -> Result<Decision> {
        let bounds = SumBounds::of(elements)?;
        if elements.is_empty() || !bounds.contains(target) {
            return Ok(Decision::rejected());
        }

        #[cfg(feature = "tracing")]
        let span = tracing::trace_span!("table", n = elements.len(), target);
        #[cfg(feature = "tracing")]
        let _enter = span.enter();

        match self.fill(elements, target, bounds, true)? {
            Fill::Stopped(decision) => Ok(decision),
            Fill::Complete(_, stats) => Ok(Decision {
                reachable: false,
                stats,
            }),
        }
    }
}
