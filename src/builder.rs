use crate::engine::{DpVariant, SubsetSumSolver};
use crate::error::{Result, SubsetSumError};
use crate::utils::{DEFAULT_MAX_CELLS, DEFAULT_NAIVE_THRESHOLD, MAX_ENUMERATION_LEN};

/// Configures a [`SubsetSumSolver`].
///
/// ```
/// use subset_sum_dp::{DpVariant, SolverBuilder};
///
/// let solver = SolverBuilder::new()
///     .with_naive_threshold(12)
///     .with_dp_variant(DpVariant::SingleVector)
///     .build()
///     .unwrap();
/// assert!(solver.decide(&[3, 34, 4, 12, 5, 2], 9).unwrap());
/// ```
#[derive(Debug, Clone, Default)]
pub struct SolverBuilder {
    naive_threshold: Option<usize>,
    dp_variant: DpVariant,
    max_cells: Option<usize>,
}

impl SolverBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inputs shorter than `threshold` are enumerated. Must be in `1..=64`.
    pub fn with_naive_threshold(mut self, threshold: usize) -> Self {
        self.naive_threshold = Some(threshold);
        self
    }

    pub fn with_dp_variant(mut self, variant: DpVariant) -> Self {
        self.dp_variant = variant;
        self
    }

    /// Upper bound on reachability cells allocated per query.
    pub fn with_max_cells(mut self, max_cells: usize) -> Self {
        self.max_cells = Some(max_cells);
        self
    }

    pub fn build(self) -> Result<SubsetSumSolver> {
        let threshold = self.naive_threshold.unwrap_or(DEFAULT_NAIVE_THRESHOLD);
        if threshold == 0 || threshold > MAX_ENUMERATION_LEN + 1 {
            return Err(SubsetSumError::InvalidThreshold { threshold });
        }
        Ok(SubsetSumSolver::from_parts(
            threshold,
            self.dp_variant,
            self.max_cells.unwrap_or(DEFAULT_MAX_CELLS),
        ))
    }
}
