//! Core trait for lazy sequences.
//!
//! This module defines the [`Sequence`] trait, the single capability every adapter in
//! this crate implements: hand out a fresh cursor over the elements, optionally
//! restricted to elements that were already produced and memoized.

use std::rc::Rc;

/// A lazily evaluated, re-traversable series of elements.
///
/// A `Sequence` is a description of work, not a container. Nothing is computed
/// until a cursor returned by [`traverse`](Sequence::traverse) is advanced, and
/// every call to `traverse` starts an independent pass.
///
/// # Associated Types
/// - `Item`: the element type produced by cursors.
/// - `Cursor`: the owned traversal state. Cursors keep their own handles to any
///   upstream state, so they are not tied to the borrow of `self`.
///
/// # Replay-only traversal
/// When `replay_only` is `true` the cursor must only yield elements that some
/// memo buffer upstream has already committed, and must never trigger new
/// upstream work. Adapters forward the flag unchanged to every upstream sequence
/// they traverse; only [`Memoize`](super::Memoize) interprets it.
pub trait Sequence {
    type Item;
    type Cursor: Iterator<Item = Self::Item>;

    /// Open a fresh cursor over this sequence.
    fn traverse(&self, replay_only: bool) -> Self::Cursor;

    /// Open a cursor in normal (computing) mode.
    #[inline]
    fn cursor(&self) -> Self::Cursor {
        self.traverse(false)
    }
}

impl<S: Sequence + ?Sized> Sequence for &S {
    type Item = S::Item;
    type Cursor = S::Cursor;

    #[inline]
    fn traverse(&self, replay_only: bool) -> Self::Cursor {
        (**self).traverse(replay_only)
    }
}

impl<S: Sequence + ?Sized> Sequence for Rc<S> {
    type Item = S::Item;
    type Cursor = S::Cursor;

    #[inline]
    fn traverse(&self, replay_only: bool) -> Self::Cursor {
        (**self).traverse(replay_only)
    }
}

impl<S: Sequence + ?Sized> Sequence for Box<S> {
    type Item = S::Item;
    type Cursor = S::Cursor;

    #[inline]
    fn traverse(&self, replay_only: bool) -> Self::Cursor {
        (**self).traverse(replay_only)
    }
}
