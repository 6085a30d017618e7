//! Offset-indexed reachability state.
//!
//! A frontier maps every candidate sum in `[A, B]` to a boolean, stored densely
//! at position `sum - A`. All reads go through [`SumBounds::offset`], so a sum
//! outside the interval simply reads as unreachable.

use crate::bounds::SumBounds;
use crate::error::{Result, SubsetSumError};

/// Fail with `CapacityExceeded` if `required` cells do not fit `limit`.
pub fn check_capacity(required: u128, limit: usize) -> Result<usize> {
    if required > limit as u128 {
        return Err(SubsetSumError::CapacityExceeded { required, limit });
    }
    Ok(required as usize)
}

fn allocate(cells: usize) -> Result<Vec<bool>> {
    let mut v = Vec::new();
    v.try_reserve_exact(cells)
        .map_err(|_| SubsetSumError::AllocationFailed { cells })?;
    v.resize(cells, false);
    Ok(v)
}

/// One row of reachability: `get(j)` answers "is sum `j` reachable".
#[derive(Debug, Clone)]
pub struct ReachRow {
    bounds: SumBounds,
    cells: Vec<bool>,
}

impl ReachRow {
    /// Allocate an all-false row covering `bounds`, at most `max_cells` wide.
    pub fn new(bounds: SumBounds, max_cells: usize) -> Result<Self> {
        let width = check_capacity(bounds.width()? as u128, max_cells)?;
        Ok(Self {
            bounds,
            cells: allocate(width)?,
        })
    }

    #[inline]
    pub fn bounds(&self) -> SumBounds {
        self.bounds
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Out-of-range sums read as `false`.
    #[inline]
    pub fn get(&self, sum: i64) -> bool {
        match self.bounds.offset(sum) {
            Some(off) => self.cells[off],
            None => false,
        }
    }

    /// Mark `sum` reachable. Returns `true` if the cell flipped.
    /// Out-of-range sums are ignored.
    #[inline]
    pub fn set(&mut self, sum: i64) -> bool {
        match self.bounds.offset(sum) {
            Some(off) => !std::mem::replace(&mut self.cells[off], true),
            None => false,
        }
    }

    pub fn clear(&mut self) {
        self.cells.fill(false);
    }

    /// Copy the cells for sums in `[lo, hi]` from `other`. Both rows must
    /// share bounds; the span is clipped to `[A, B]`.
    pub fn copy_span_from(&mut self, other: &ReachRow, lo: i64, hi: i64) {
        debug_assert_eq!(self.bounds, other.bounds);
        let lo = lo.max(self.bounds.lower());
        let hi = hi.min(self.bounds.upper());
        let (Some(a), Some(b)) = (self.bounds.offset(lo), self.bounds.offset(hi)) else {
            return;
        };
        if a <= b {
            self.cells[a..=b].copy_from_slice(&other.cells[a..=b]);
        }
    }
}

/// Full `rows x (B - A + 1)` table, row-major.
#[derive(Debug, Clone)]
pub struct ReachTable {
    bounds: SumBounds,
    width: usize,
    rows: usize,
    cells: Vec<bool>,
}

impl ReachTable {
    pub fn new(bounds: SumBounds, rows: usize, max_cells: usize) -> Result<Self> {
        let width = bounds.width()?;
        let cells = check_capacity(rows as u128 * width as u128, max_cells)?;
        Ok(Self {
            bounds,
            width,
            rows,
            cells: allocate(cells)?,
        })
    }

    #[inline]
    pub fn bounds(&self) -> SumBounds {
        self.bounds
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Reads outside the table (row or sum) are `false`.
    #[inline]
    pub fn get(&self, row: usize, sum: i64) -> bool {
        if row >= self.rows {
            return false;
        }
        match self.bounds.offset(sum) {
            Some(off) => self.cells[row * self.width + off],
            None => false,
        }
    }

    #[inline]
    pub fn set(&mut self, row: usize, sum: i64) {
        if row >= self.rows {
            return;
        }
        if let Some(off) = self.bounds.offset(sum) {
            self.cells[row * self.width + off] = true;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bounds(elements: &[i64]) -> SumBounds {
        SumBounds::of(elements).unwrap()
    }

    #[test]
    fn row_reads_out_of_range_as_false() {
        let mut row = ReachRow::new(bounds(&[-2, 3]), 64).unwrap();
        assert_eq!(row.len(), 6);
        assert!(row.set(-2));
        assert!(!row.set(-2), "second set is not a flip");
        assert!(row.get(-2));
        assert!(!row.get(-3));
        assert!(!row.get(4));
        assert!(!row.set(100));
        row.clear();
        assert!(!row.get(-2));
    }

    #[test]
    fn span_copy_leaves_outside_cells_alone() {
        let b = bounds(&[-3, 3]);
        let mut src = ReachRow::new(b, 64).unwrap();
        let mut dst = ReachRow::new(b, 64).unwrap();
        src.set(-3);
        src.set(0);
        src.set(3);
        dst.copy_span_from(&src, -1, 1);
        assert!(dst.get(0));
        assert!(!dst.get(-3));
        assert!(!dst.get(3));
        dst.copy_span_from(&src, -10, 10);
        assert!(dst.get(-3) && dst.get(3));
    }

    #[test]
    fn row_respects_cell_budget() {
        let err = ReachRow::new(bounds(&[-5, 5]), 10).unwrap_err();
        assert_eq!(
            err,
            SubsetSumError::CapacityExceeded {
                required: 11,
                limit: 10
            }
        );
    }

    #[test]
    fn table_is_row_major_and_bounded() {
        let mut t = ReachTable::new(bounds(&[-1, 2]), 2, 64).unwrap();
        assert_eq!((t.rows(), t.width()), (2, 4));
        t.set(1, 2);
        assert!(t.get(1, 2));
        assert!(!t.get(0, 2));
        assert!(!t.get(2, 2));
        assert!(!t.get(1, 3));
        t.set(5, 0);
        assert!(!t.get(5, 0));
    }

    #[test]
    fn table_budget_counts_all_rows() {
        let err = ReachTable::new(bounds(&[-1, 2]), 3, 11).unwrap_err();
        assert!(matches!(err, SubsetSumError::CapacityExceeded { required: 12, .. }));
    }
}
