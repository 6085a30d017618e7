//! Strategy selector.
//!
//! Inputs shorter than the naive threshold are answered by bitmask
//! enumeration; everything else goes to exactly one DP variant (the rolling
//! pair unless configured otherwise). One synchronous query per call, no state
//! carried between queries.

use crate::error::Result;
use crate::strategies::{Enumeration, RollingPair, SingleVector, Table, UpdateMode};
use crate::traits::{Decision, StrategyKind, SubsetSumStrategy};
use crate::utils::{DEFAULT_MAX_CELLS, DEFAULT_NAIVE_THRESHOLD};

/// DP variant the selector routes large inputs to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DpVariant {
    Table,
    #[default]
    RollingPair,
    SingleVector,
    /// Fast but unverified, see [`crate::strategies::single_vector`].
    SingleVectorInPlace,
}

impl DpVariant {
    pub fn kind(&self) -> StrategyKind {
        match self {
            DpVariant::Table => StrategyKind::Table,
            DpVariant::RollingPair => StrategyKind::RollingPair,
            DpVariant::SingleVector => StrategyKind::SingleVector,
            DpVariant::SingleVectorInPlace => StrategyKind::SingleVectorInPlace,
        }
    }
}

/// Decision plus the strategy that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Report {
    pub strategy: StrategyKind,
    pub decision: Decision,
}

/// Subset-sum decision engine.
///
/// Typical usage:
/// ```
/// use subset_sum_dp::SubsetSumSolver;
///
/// let solver = SubsetSumSolver::default();
/// assert!(solver.decide(&[-2, -1, 5, 5, -1, 10, 4], 0).unwrap());
/// assert!(!solver.decide(&[5], 0).unwrap());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubsetSumSolver {
    naive_threshold: usize,
    dp_variant: DpVariant,
    max_cells: usize,
}

impl Default for SubsetSumSolver {
    fn default() -> Self {
        Self {
            naive_threshold: DEFAULT_NAIVE_THRESHOLD,
            dp_variant: DpVariant::default(),
            max_cells: DEFAULT_MAX_CELLS,
        }
    }
}

impl SubsetSumSolver {
    /// Parameters are validated by [`SolverBuilder`](crate::SolverBuilder).
    pub(crate) fn from_parts(
        naive_threshold: usize,
        dp_variant: DpVariant,
        max_cells: usize,
    ) -> Self {
        Self {
            naive_threshold,
            dp_variant,
            max_cells,
        }
    }

    pub fn naive_threshold(&self) -> usize {
        self.naive_threshold
    }

    pub fn dp_variant(&self) -> DpVariant {
        self.dp_variant
    }

    pub fn max_cells(&self) -> usize {
        self.max_cells
    }

    /// Strategy used for an input of `len` elements.
    pub fn route(&self, len: usize) -> StrategyKind {
        if len < self.naive_threshold {
            StrategyKind::Enumeration
        } else {
            self.dp_variant.kind()
        }
    }

    /// Run a specific strategy with this solver's cell budget.
    pub fn solve_with(
        &self,
        kind: StrategyKind,
        elements: &[i64],
        target: i64,
    ) -> Result<Decision> {
        match kind {
            StrategyKind::Enumeration => Enumeration.solve(elements, target),
            StrategyKind::Table => Table::new(self.max_cells).solve(elements, target),
            StrategyKind::RollingPair => RollingPair::new(self.max_cells).solve(elements, target),
            StrategyKind::SingleVector => {
                SingleVector::new(self.max_cells, UpdateMode::Snapshot).solve(elements, target)
            }
            StrategyKind::SingleVectorInPlace => {
                SingleVector::in_place(self.max_cells).solve(elements, target)
            }
        }
    }

    /// Route and solve, reporting which strategy answered.
    pub fn decide_report(&self, elements: &[i64], target: i64) -> Result<Report> {
        #[cfg(feature = "tracing")]
        let span = tracing::info_span!("subset_sum_decide", n = elements.len(), target);
        #[cfg(feature = "tracing")]
        let _enter = span.enter();

        let strategy = self.route(elements.len());
        #[cfg(feature = "tracing")]
        tracing::debug!(
            strategy = strategy.label(),
            threshold = self.naive_threshold,
            "routed"
        );

        let decision = self.solve_with(strategy, elements, target)?;
        #[cfg(feature = "tracing")]
        if decision.stats == crate::traits::ScanStats::default() && !decision.reachable {
            tracing::debug!("rejected without scanning");
        }

        Ok(Report { strategy, decision })
    }

    /// Does a non-empty subset of `elements` sum to `target`?
    pub fn decide(&self, elements: &[i64], target: i64) -> Result<bool> {
        Ok(self.decide_report(elements, target)?.decision.reachable)
    }

    /// Decide through the full table and return one witness subset's values.
    ///
    /// Uses the table variant regardless of input size, since it is the only
    /// one that keeps enough history to reconstruct a subset.
    pub fn decide_with_witness(
        &self,
        elements: &[i64],
        target: i64,
    ) -> Result<(bool, Option<Vec<i64>>)> {
        #[cfg(feature = "tracing")]
        let span = tracing::info_span!("subset_sum_witness", n = elements.len(), target);
        #[cfg(feature = "tracing")]
        let _enter = span.enter();

        let (decision, indices) =
            Table::new(self.max_cells).solve_with_witness(elements, target)?;
        let values = indices.map(|idx| idx.into_iter().map(|i| elements[i]).collect());
        Ok((decision.reachable, values))
    }
}

/// Decide with the default solver (threshold 20, rolling pair).
pub fn decide_subset_sum(elements: &[i64], target: i64) -> Result<bool> {
    SubsetSumSolver::default().decide(elements, target)
}

/// Decide with the default cell budget and return one witness subset.
pub fn decide_subset_sum_with_witness(
    elements: &[i64],
    target: i64,
) -> Result<(bool, Option<Vec<i64>>)> {
    SubsetSumSolver::default().decide_with_witness(elements, target)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SubsetSumError;

    #[test]
    fn routes_on_threshold() {
        let solver = SubsetSumSolver::default();
        assert_eq!(solver.route(0), StrategyKind::Enumeration);
        assert_eq!(solver.route(19), StrategyKind::Enumeration);
        assert_eq!(solver.route(20), StrategyKind::RollingPair);
        assert_eq!(solver.route(2_000), StrategyKind::RollingPair);
    }

    #[test]
    fn report_names_the_answering_strategy() {
        let solver = SubsetSumSolver::from_parts(3, DpVariant::Table, DEFAULT_MAX_CELLS);
        let small = solver.decide_report(&[1, -1], 0).unwrap();
        assert_eq!(small.strategy, StrategyKind::Enumeration);
        assert!(small.decision.reachable);
        let large = solver.decide_report(&[1, 2, -3], 0).unwrap();
        assert_eq!(large.strategy, StrategyKind::Table);
        assert!(large.decision.reachable);
    }

    #[test]
    fn witness_values_come_from_input() {
        let elements = [-1, 10, 5, 3, 2, 1];
        let (found, witness) = decide_subset_sum_with_witness(&elements, 0).unwrap();
        assert!(found);
        let witness = witness.unwrap();
        assert_eq!(witness.iter().sum::<i64>(), 0);
        assert!(witness.iter().all(|w| elements.contains(w)));
    }

    #[test]
    fn capacity_failure_is_surfaced() {
        let solver = SubsetSumSolver::from_parts(1, DpVariant::RollingPair, 8);
        let err = solver.decide(&[-100, 100], 0).unwrap_err();
        assert!(matches!(err, SubsetSumError::CapacityExceeded { .. }));
    }
}
