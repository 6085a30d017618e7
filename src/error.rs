//! Error type shared by every strategy.
//!
//! Boundary conditions (empty input, target outside `[A, B]`, out-of-range
//! reads) are never errors; they resolve to a plain `false`. Only conditions
//! the caller has to act on are surfaced here.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubsetSumError {
    /// A sum bound or the table width does not fit the integer width in use.
    #[error("integer overflow while computing {stage}")]
    Overflow { stage: &'static str },

    /// The reachability structure would exceed the configured cell budget.
    #[error("reachability state needs {required} cells, limit is {limit}")]
    CapacityExceeded { required: u128, limit: usize },

    /// The allocator refused the reachability structure.
    #[error("failed to allocate {cells} reachability cells")]
    AllocationFailed { cells: usize },

    /// Bitmask enumeration only covers inputs whose mask space fits in a `u64`.
    #[error("bitmask enumeration supports at most 63 elements, got {len}")]
    EnumerationTooLarge { len: usize },

    #[error("naive threshold must be in 1..=64, got {threshold}")]
    InvalidThreshold { threshold: usize },
}

pub type Result<T> = std::result::Result<T, SubsetSumError>;
