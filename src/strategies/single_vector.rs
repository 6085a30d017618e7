//! Single reusable reachability vector.
//!
//! One row accumulates every sum reachable so far. Each step only scans the
//! candidate sums that can change, `[min(lo + e, e), max(hi + e, e)]`, where
//! `[lo, hi]` is the span of sums reached by earlier elements. That span is
//! the bookkeeping that bounds work to sums actually reachable so far.
//!
//! Two update modes exist:
//!
//! - [`UpdateMode::Snapshot`] (default): the reachable span is frozen into a
//!   read-only snapshot before each step and every read for `j - e` goes to
//!   the snapshot. Equivalent to the rolling pair; one extra row, allocated
//!   once per query.
//! - [`UpdateMode::InPlace`]: fast but unverified. The row is updated while it
//!   is scanned in ascending order, so `row[j - e]` may already include the
//!   current element and a sum can be counted with `e` used twice. For
//!   `[-4, 2]` it reports `0` as reachable (`-4 + 2 + 2`). Kept only for
//!   benchmarking and never the selector default.

use crate::bounds::SumBounds;
use crate::error::Result;
use crate::frontier::{check_capacity, ReachRow};
use crate::traits::{Decision, ScanStats, StrategyKind, SubsetSumStrategy};
use crate::utils::DEFAULT_MAX_CELLS;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum UpdateMode {
    #[default]
    Snapshot,
    InPlace,
}

#[derive(Debug, Clone, Copy)]
pub struct SingleVector {
    max_cells: usize,
    mode: UpdateMode,
}

impl Default for SingleVector {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_CELLS, UpdateMode::Snapshot)
    }
}

impl SingleVector {
    pub fn new(max_cells: usize, mode: UpdateMode) -> Self {
        Self { max_cells, mode }
    }

    /// The hazardous in-place variant, see the module docs.
    pub fn in_place(max_cells: usize) -> Self {
        Self::new(max_cells, UpdateMode::InPlace)
    }

    pub fn mode(&self) -> UpdateMode {
        self.mode
    }
}

impl SubsetSumStrategy for SingleVector {
    fn kind(&self) -> StrategyKind {
        match self.mode {
            UpdateMode::Snapshot => StrategyKind::SingleVector,
            UpdateMode::InPlace => StrategyKind::SingleVectorInPlace,
        }
    }

    fn solve(&self, elements: &[i64], target: i64) -> Result<Decision> {
        let bounds = SumBounds::of(elements)?;
        if elements.is_empty() || !bounds.contains(target) {
            return Ok(Decision::rejected());
        }

        #[cfg(feature = "tracing")]
        let span = tracing::trace_span!(
            "single_vector",
            n = elements.len(),
            target,
            mode = ?self.mode
        );
        #[cfg(feature = "tracing")]
        let _enter = span.enter();

        let rows_needed = match self.mode {
            UpdateMode::Snapshot => 2,
            UpdateMode::InPlace => 1,
        };
        check_capacity(rows_needed * bounds.width()? as u128, self.max_cells)?;

        let mut row = ReachRow::new(bounds, self.max_cells)?;
        let mut snapshot = match self.mode {
            UpdateMode::Snapshot => Some(ReachRow::new(bounds, self.max_cells)?),
            UpdateMode::InPlace => None,
        };
        let mut stats = ScanStats {
            rows: 1,
            cells: 1,
            subsets: 0,
        };

        let first = elements[0];
        row.set(first);
        if first == target {
            return Ok(Decision {
                reachable: true,
                stats,
            });
        }
        let (mut lo, mut hi) = (first, first);

        for &e in &elements[1..] {
            stats.rows += 1;
            // Sums of earlier subsets plus e lie in [A, B], so these cannot overflow.
            let scan_lo = (lo + e).min(e).max(bounds.lower());
            let scan_hi = (hi + e).max(e).min(bounds.upper());

            let found = match snapshot.as_mut() {
                Some(frozen) => {
                    frozen.copy_span_from(&row, lo, hi);
                    step_from_snapshot(&mut row, frozen, e, target, scan_lo, scan_hi, &mut stats)
                }
                None => step_in_place(&mut row, e, target, scan_lo, scan_hi, &mut stats),
            };
            if found {
                return Ok(Decision {
                    reachable: true,
                    stats,
                });
            }
            lo = lo.min(scan_lo);
            hi = hi.max(scan_hi);
        }

        Ok(Decision {
            reachable: false,
            stats,
        })
    }
}

fn step_from_snapshot(
    row: &mut ReachRow,
    frozen: &ReachRow,
    e: i64,
    target: i64,
    scan_lo: i64,
    scan_hi: i64,
    stats: &mut ScanStats,
) -> bool {
    for j in scan_lo..=scan_hi {
        stats.cells += 1;
        if e == j || j.checked_sub(e).is_some_and(|rest| frozen.get(rest)) {
            row.set(j);
        }
        if j == target && row.get(j) {
            return true;
        }
    }
    false
}

fn step_in_place(
    row: &mut ReachRow,
    e: i64,
    target: i64,
    scan_lo: i64,
    scan_hi: i64,
    stats: &mut ScanStats,
) -> bool {
    row.set(e);
    for j in scan_lo..=scan_hi {
        stats.cells += 1;
        // Reads cells this same pass may already have written.
        if j.checked_sub(e).is_some_and(|rest| row.get(rest)) {
            row.set(j);
        }
        if j == target && row.get(j) {
            return true;
        }
    }
    false
}
