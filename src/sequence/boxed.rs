//! Type erasure for sequences.
//!
//! Adapter chains have long, closure-bearing types. [`BoxedSequence`] hides them
//! behind a trait object so different chains with the same item type can be
//! stored together or returned from a function.

use std::rc::Rc;

use super::sequence_trait::Sequence;

/// Boxed cursor over `T`.
pub type BoxedCursor<T> = Box<dyn Iterator<Item = T>>;

/// Object-safe form of [`Sequence`].
trait DynSequence<T> {
    fn traverse_boxed(&self, replay_only: bool) -> BoxedCursor<T>;
}

impl<S> DynSequence<S::Item> for S
where
    S: Sequence,
    S::Cursor: 'static,
{
    fn traverse_boxed(&self, replay_only: bool) -> BoxedCursor<S::Item> {
        Box::new(self.traverse(replay_only))
    }
}

/// A cheaply cloneable, type-erased sequence of `T`.
pub struct BoxedSequence<T> {
    inner: Rc<dyn DynSequence<T>>,
}

impl<T> Clone for BoxedSequence<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<T> BoxedSequence<T> {
    pub fn new<S>(source: S) -> Self
    where
        S: Sequence<Item = T> + 'static,
        S::Cursor: 'static,
    {
        Self {
            inner: Rc::new(source),
        }
    }
}

impl<T> Sequence for BoxedSequence<T> {
    type Item = T;
    type Cursor = BoxedCursor<T>;

    #[inline]
    fn traverse(&self, replay_only: bool) -> Self::Cursor {
        self.inner.traverse_boxed(replay_only)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sequence::source::{from_iter, from_vec};
    use crate::sequence::transform::{Filter, Take};

    #[test]
    fn heterogeneous_chains_share_a_type() {
        let chains: Vec<BoxedSequence<u32>> = vec![
            BoxedSequence::new(from_vec(vec![1, 2])),
            BoxedSequence::new(Take::new(Filter::new(from_iter(0u32..), |v: &u32| v % 3 == 0), 2)),
        ];
        let out: Vec<Vec<u32>> = chains.iter().map(|c| c.cursor().collect()).collect();
        assert_eq!(out, vec![vec![1, 2], vec![0, 3]]);
    }
}
