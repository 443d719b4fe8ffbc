//! # lazy-query
//!
//! lazy-query is a small library of lazy, composable queries over sequences.
//! Chaining an operation wraps the source in an adapter and does no work; the
//! work happens one element at a time when a cursor is advanced.
//!
//! ## Features
//! - A single [`Sequence`](sequence::Sequence) capability, implemented by every
//!   source and adapter, with the full chaining and terminal surface on
//!   [`SequenceExt`](sequence::SequenceExt)
//! - Memoization with replay ([`Memoize`](sequence::Memoize)), and replay-only
//!   views ([`OnlyMemoized`](sequence::OnlyMemoized)) for sequences defined in
//!   terms of their own output
//! - Permutations, subsequences, de-duplication, zipping, transposition
//! - Numeric and boolean folds with fixed results for empty input
//!
//! ## Usage
//! ```
//! use lazy_query::prelude::*;
//!
//! let fib = Memoize::<u64>::recursive(|fib| {
//!     from_vec(vec![0u64, 1]).append(
//!         zip(fib.clone().only_memoized(), fib.only_memoized().drop(1)).map(|(a, b)| a + b),
//!     )
//! });
//! assert_eq!(fib.clone().take(8).to_vec(), vec![0, 1, 1, 2, 3, 5, 8, 13]);
//! ```
//!
//! ## Cargo features
//! - `strict-invariants`, `check-invariants`: run the
//!   [`DebugInvariants`] checks in release builds too.
//!
//! Sequences use `Rc` internally and are neither `Send` nor `Sync`.

pub mod algs;
pub mod debug_invariants;
pub mod query_error;
pub mod sequence;

pub use debug_invariants::DebugInvariants;

/// A convenient prelude to import the most-used traits & types:
pub mod prelude {
    pub use crate::algs::aggregate::Unbounded;
    pub use crate::debug_invariants::DebugInvariants;
    pub use crate::query_error::QueryError;
    pub use crate::sequence::{
        empty, from_iter, from_vec, zip, BoxedSequence, Elements, Memoize, OnlyMemoized, Recurse,
        Sequence, SequenceExt,
    };
}
