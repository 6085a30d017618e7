//! Concrete subset-sum strategies.
//!
//! - [`enumerate`]     : bitmask enumeration of every non-empty subset.
//! - [`table`]         : full 2-D reachability table, with optional witness.
//! - [`rolling`]       : previous/current row pair.
//! - [`single_vector`] : one reused row, snapshot or in-place update.

pub mod enumerate;
pub mod rolling;
pub mod single_vector;
pub mod table;

pub use enumerate::Enumeration;
pub use rolling::RollingPair;
pub use single_vector::{SingleVector, UpdateMode};
pub use table::Table;
