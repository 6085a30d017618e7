//! Subset-sum decision engine.
//!
//! Decides whether a finite sequence of signed integers has a *non-empty*
//! subset summing to a target (zero in the classic formulation).
//!
//! ## Core idea
//! 1. Bound every subset sum by `[A, B]`: `A` sums the negative elements, `B`
//!    the positive ones. A target outside that interval is `false` at once.
//! 2. Small inputs are answered by enumerating all `2^N - 1` subsets.
//! 3. Larger inputs fold one element per layer into a reachability frontier
//!    indexed by `sum - A`, stopping as soon as the target is reached.
//!
//! The DP work is pseudo-polynomial, O(N * (B - A)), so the frontier size is
//! the dominant resource. Every structure is allocated against a cell budget
//! and exceeding it is reported as an error rather than a crash.
//!
//! ## Quick start
//! ```
//! use subset_sum_dp::{decide_subset_sum, decide_subset_sum_with_witness};
//!
//! assert!(decide_subset_sum(&[-1, 10, 5, 3, 2, 1], 0).unwrap());
//! assert!(!decide_subset_sum(&[], 0).unwrap());
//!
//! let (found, witness) = decide_subset_sum_with_witness(&[3, 34, 4, 12, 5, 2], 9).unwrap();
//! assert!(found);
//! assert_eq!(witness.unwrap().iter().sum::<i64>(), 9);
//! ```
//!
//! ## Strategies
//! The `strategies` module contains:
//! - bitmask enumeration,
//! - the full 2-D reachability table (the only one that can return a witness),
//! - a rolling pair of rows,
//! - a single reused row, either snapshot-based or updated in place.
//!
//! The in-place single row is fast but unverified: it can count the current
//! element twice. It is never the default route.

pub mod bounds;
pub mod builder;
pub mod engine;
pub mod error;
pub mod frontier;
pub mod strategies;
pub mod traits;
pub mod utils;

pub use crate::builder::SolverBuilder;
pub use crate::engine::{
    decide_subset_sum, decide_subset_sum_with_witness, DpVariant, Report, SubsetSumSolver,
};
pub use crate::error::SubsetSumError;
pub use crate::traits::{Decision, ScanStats, StrategyKind, SubsetSumStrategy};
