//! QueryError: error type for the few fallible lazy-query APIs.
//!
//! Absence (an empty sequence, an out-of-range index) is never an error in this
//! crate and is reported through `Option`. `QueryError` covers usage errors that
//! must fail loudly instead of silently defaulting.

use thiserror::Error;

/// Error type for lazy-query operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum QueryError {
    /// `try_sort_by` was called without an ordering function.
    #[error("Invalid argument: sort requires a comparator")]
    MissingComparator,
    /// An internal structure failed its consistency check.
    #[error("Invariant violation: {0}")]
    InvariantViolation(String),
}
