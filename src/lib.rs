//! # Range Aggregation Tree
//!
//! Array-backed segment tree over a fixed-length sequence.
//!
//! ## Core Algorithm
//!
//! 1. **Padding**: the input of length N is padded to P = N.next_power_of_two()
//!    leaves; padding leaves hold the combiner's identity
//! 2. **Implicit layout**: node i has children 2i+1 and 2i+2, backing array
//!    holds 2P - 1 aggregates
//! 3. **Midpoint recursion**: node [lx, rx] splits at m = ⌊(lx + rx) / 2⌋
//!    into [lx, m] and [m+1, rx]
//! 4. **Heap-aggregate invariant**: every internal node equals
//!    combine(left, right)
//!
//! Result: range query and point update in O(log N), construction in O(N)
//!
//! ## Usage Example
//!
//! ```
//! use range_aggregation_tree::{algebra::Max, RangeAggregationTree};
//!
//! let mut tree = RangeAggregationTree::new(&[1i64, 6, 4, 7, 2, 8])?;
//! assert_eq!(tree.query(3, 5)?, 17);
//! tree.update(0, 10)?;
//! assert_eq!(tree.query(0, 5)?, 37);
//! tree.delete(0)?;
//! assert_eq!(tree.query(0, 5)?, 27);
//!
//! let peaks = RangeAggregationTree::with_combiner(&[6i64, 3, 6, 87, 2, 5], Max::new())?;
//! assert_eq!(peaks.query(2, 4)?, 87);
//! # Ok::<(), range_aggregation_tree::TreeError>(())
//! ```

#![warn(missing_docs, missing_debug_implementations)]

pub mod algebra; // Combine capability and stock operations
pub mod tree;    // The array-backed tree itself
pub mod util;    // Capacity arithmetic

// Re-exports for convenience
pub use algebra::{Combiner, FnCombiner, Gcd, Max, Min, MinMax, Sum, WideSum};
pub use tree::{Dump, RangeAggregationTree, Slot};

use thiserror::Error;

/// Errors returned by tree construction, queries and updates
///
/// Every variant is a caller-correctable condition; indices are never clamped.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TreeError {
    /// Construction was attempted over an empty sequence
    #[error("cannot build a range aggregation tree over an empty sequence")]
    EmptySequence,

    /// Query bounds were reversed or outside the sequence
    #[error("invalid query range [{left}, {right}] for sequence of length {len}")]
    InvalidRange {
        /// Requested left bound (inclusive)
        left: usize,
        /// Requested right bound (inclusive)
        right: usize,
        /// Length of the original sequence
        len: usize,
    },

    /// Update, delete or lookup position outside the sequence
    #[error("position {position} out of range for sequence of length {len}")]
    PositionOutOfRange {
        /// Requested position
        position: usize,
        /// Length of the original sequence
        len: usize,
    },
}

/// Coarse classification of [`TreeError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Bad construction input
    InvalidArgument,
    /// Index or bounds outside `[0, N-1]`
    Range,
}

impl TreeError {
    /// Which kind of caller mistake produced this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            TreeError::EmptySequence => ErrorKind::InvalidArgument,
            TreeError::InvalidRange { .. } | TreeError::PositionOutOfRange { .. } => {
                ErrorKind::Range
            }
        }
    }
}
