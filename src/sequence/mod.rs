//! Lazy sequences: the core trait, leaf sources, adapters and memoization.

pub mod boxed;
pub mod combinatorics;
pub mod combine;
pub mod memoize;
pub mod query_ext;
pub mod repeat;
pub mod sequence_trait;
pub mod source;
pub mod transform;
pub mod unique;

// Re-export the core trait, the extension surface and the constructors at top level
pub use boxed::BoxedSequence;
pub use combinatorics::{Permutations, Subsequences};
pub use combine::{zip, Append, Concat, Prepend, Transpose, Zip};
pub use memoize::{Memoize, OnlyMemoized, Recurse};
pub use query_ext::SequenceExt;
pub use repeat::{Cycle, Iterate};
pub use sequence_trait::Sequence;
pub use source::{empty, from_iter, from_vec, Elements, Empty, Iterable};
pub use transform::{DropFirst, DropWhile, Filter, FilterMap, Intersperse, Map, Take, TakeWhile};
pub use unique::{Unique, UniqueBy, UniqueHashed};
