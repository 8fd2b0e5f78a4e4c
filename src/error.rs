//! Errors for the fallible constructors in this crate. Lookups never fail, they
//! return `None` when a value isn't in the tree.

use thiserror::Error;

/// Things that can go wrong while building a tree or generating sample input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Input to [`Tree::from_sorted`][crate::Tree::from_sorted] was not strictly ascending.
    /// `index` is the first position where `sorted[index] >= sorted[index + 1]`.
    #[error("input is not sorted and unique at index {index}")]
    NotSortedUnique {
        /// Offending position in the input.
        index: usize,
    },
    /// The lower bound of a random range was above its upper bound.
    #[error("invalid range: {min} > {max}")]
    InvalidRange {
        /// Requested lower bound.
        min: i64,
        /// Requested upper bound.
        max: i64,
    },
    /// More distinct values were requested than the range holds.
    #[error("cannot draw {requested} distinct values from a range of {available}")]
    NotEnoughValues {
        /// How many values were asked for.
        requested: usize,
        /// How many distinct integers the range holds.
        available: u128,
    },
}
