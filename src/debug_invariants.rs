//! Bookkeeping checks for sequences that carry state between traversals.
//!
//! Adapters are stateless and re-derive everything on each traversal, so there
//! is nothing in them to check. A [`Memoize`](crate::sequence::Memoize) buffer
//! is different: it grows across traversals and shares one upstream cursor
//! between all of its handles, and its element count must always match the
//! number of elements that cursor has produced.

use crate::query_error::QueryError;

/// Consistency checks for stateful sequences such as memo buffers.
pub trait DebugInvariants {
    /// Panic if the state is inconsistent. Compiled out of release builds
    /// unless `strict-invariants` or `check-invariants` is enabled.
    fn debug_assert_invariants(&self);
    /// Report the first inconsistency as [`QueryError::InvariantViolation`].
    fn validate_invariants(&self) -> Result<(), QueryError>;
}

/// Evaluate `$check` (a `Result<(), QueryError>`) and panic with the sequence
/// name in `$ctx` when it fails.
///
/// ```should_panic
/// use lazy_query::query_error::QueryError;
///
/// let broken: Result<(), QueryError> =
///     Err(QueryError::InvariantViolation("buffer shorter than pulled count".into()));
/// lazy_query::debug_invariants!(broken, "Memoize");
/// ```
#[macro_export]
macro_rules! debug_invariants {
    ($check:expr, $($ctx:tt)*) => {
        #[cfg(any(debug_assertions, feature = "strict-invariants", feature = "check-invariants"))]
        if let Err(err) = $check {
            panic!(concat!("[lazy-query invariants] ", $($ctx)*, ": {}"), err);
        }
    };
}

#[cfg(test)]
mod tests {
    use crate::query_error::QueryError;

    #[test]
    fn passing_check_is_silent() {
        let ok: Result<(), QueryError> = Ok(());
        crate::debug_invariants!(ok, "Memoize");
    }

    #[test]
    #[should_panic(expected = "[lazy-query invariants] Memoize: Invariant violation: 3 != 2")]
    fn failing_check_names_the_sequence() {
        let broken: Result<(), QueryError> =
            Err(QueryError::InvariantViolation("3 != 2".to_string()));
        crate::debug_invariants!(broken, "Memoize");
    }
}
