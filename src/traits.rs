//! Core trait definitions for subset-sum strategies.
//!
//! Every strategy answers the same question for a fixed `(elements, target)`
//! pair: does some non-empty subset of `elements` sum to `target`?
//!
//! The trait encodes the contract shared by all of them:
//! - The empty subset is never a solution, so an empty input is `false`.
//! - A target outside `[A, B]` (see [`SumBounds`](crate::bounds::SumBounds))
//!   is `false` before any reachability state is touched.
//! - Resource exhaustion and overflow are errors; nothing else is.
//!
//! The layered strategies treat element `i` as layer `i`: the frontier at
//! layer `i` holds every sum reachable from `elements[0..=i]`, and each step
//! only folds one more element into the previous frontier.

use crate::error::Result;

/// Work counters reported with every decision.
///
/// A fast rejection reports all zeros, which is how tests observe that no
/// table cell was touched.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanStats {
    /// Frontier layers materialised (DP strategies).
    pub rows: usize,
    /// Candidate-sum cells evaluated (DP strategies).
    pub cells: u64,
    /// Subset masks evaluated (enumeration).
    pub subsets: u64,
}

/// Outcome of a single query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Decision {
    pub reachable: bool,
    pub stats: ScanStats,
}

impl Decision {
    /// Answer reached without scanning anything.
    pub(crate) fn rejected() -> Self {
        Self {
            reachable: false,
            stats: ScanStats::default(),
        }
    }
}

/// Names of the concrete strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StrategyKind {
    Enumeration,
    Table,
    RollingPair,
    /// Single vector, reading from a frozen per-step snapshot.
    SingleVector,
    /// Single vector updated in place. Fast but unverified: it can reuse the
    /// element of the current step more than once.
    SingleVectorInPlace,
}

impl StrategyKind {
    pub fn label(&self) -> &'static str {
        match self {
            StrategyKind::Enumeration => "enumeration",
            StrategyKind::Table => "table",
            StrategyKind::RollingPair => "rolling_pair",
            StrategyKind::SingleVector => "single_vector",
            StrategyKind::SingleVectorInPlace => "single_vector_in_place",
        }
    }
}

/// A subset-sum decision procedure.
///
/// Implementations keep no state between calls: every query allocates its
/// own reachability state and drops it on return.
pub trait SubsetSumStrategy {
    fn kind(&self) -> StrategyKind;

    /// Decide whether a non-empty subset of `elements` sums to `target`.
    fn solve(&self, elements: &[i64], target: i64) -> Result<Decision>;
}
