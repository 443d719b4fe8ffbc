//! Leaf sequences that wrap plain data.
//!
//! - [`Elements`]: a shared, immutable in-memory slice. Cloning is cheap (one
//!   `Rc` bump) and every traversal yields clones of the stored values.
//! - [`Iterable`]: any cloneable `IntoIterator` (ranges, `Vec`, `str::chars`,
//!   `std::iter::successors`, ...). Each traversal clones the source and
//!   iterates it, so infinite sources are fine.
//! - [`Empty`]: a sequence with no elements.
//!
//! Leaf sequences hold no memo buffer, so the replay-only flag has nothing to
//! restrict and is ignored.

use std::marker::PhantomData;
use std::rc::Rc;

use super::sequence_trait::Sequence;

/// An immutable, shared in-memory sequence.
#[derive(Debug)]
pub struct Elements<T> {
    data: Rc<[T]>,
}

impl<T> Clone for Elements<T> {
    fn clone(&self) -> Self {
        Self {
            data: Rc::clone(&self.data),
        }
    }
}

impl<T> Elements<T> {
    /// Number of stored elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Borrow the stored elements.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }
}

impl<T> From<Vec<T>> for Elements<T> {
    fn from(v: Vec<T>) -> Self {
        Self { data: v.into() }
    }
}

impl<T> FromIterator<T> for Elements<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            data: iter.into_iter().collect(),
        }
    }
}

impl<T: PartialEq> PartialEq for Elements<T> {
    fn eq(&self, other: &Self) -> bool {
        self.data[..] == other.data[..]
    }
}

impl<T: Clone> Sequence for Elements<T> {
    type Item = T;
    type Cursor = ElementsCursor<T>;

    #[inline]
    fn traverse(&self, _replay_only: bool) -> Self::Cursor {
        ElementsCursor {
            data: Rc::clone(&self.data),
            pos: 0,
        }
    }
}

impl<T: Clone> IntoIterator for Elements<T> {
    type Item = T;
    type IntoIter = ElementsCursor<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.traverse(false)
    }
}

impl<T: Clone> IntoIterator for &Elements<T> {
    type Item = T;
    type IntoIter = ElementsCursor<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.traverse(false)
    }
}

/// Cursor over an [`Elements`] slice.
#[derive(Debug, Clone)]
pub struct ElementsCursor<T> {
    data: Rc<[T]>,
    pos: usize,
}

impl<T: Clone> Iterator for ElementsCursor<T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        let v = self.data.get(self.pos)?.clone();
        self.pos += 1;
        Some(v)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let rest = self.data.len().saturating_sub(self.pos);
        (rest, Some(rest))
    }
}

impl<T: Clone> ExactSizeIterator for ElementsCursor<T> {}

/// A sequence backed by any cloneable `IntoIterator`.
#[derive(Debug, Clone)]
pub struct Iterable<I> {
    source: I,
}

impl<I> Sequence for Iterable<I>
where
    I: IntoIterator + Clone,
{
    type Item = I::Item;
    type Cursor = I::IntoIter;

    #[inline]
    fn traverse(&self, _replay_only: bool) -> Self::Cursor {
        self.source.clone().into_iter()
    }
}

/// The sequence with no elements.
#[derive(Debug)]
pub struct Empty<T>(PhantomData<fn() -> T>);

impl<T> Clone for Empty<T> {
    fn clone(&self) -> Self {
        Empty(PhantomData)
    }
}

impl<T> Copy for Empty<T> {}

impl<T> Sequence for Empty<T> {
    type Item = T;
    type Cursor = std::iter::Empty<T>;

    #[inline]
    fn traverse(&self, _replay_only: bool) -> Self::Cursor {
        std::iter::empty()
    }
}

/// Wrap a vector as a shared in-memory sequence.
pub fn from_vec<T>(v: Vec<T>) -> Elements<T> {
    Elements::from(v)
}

/// Wrap any cloneable iterable (finite or infinite) as a sequence.
///
/// ```
/// use lazy_query::prelude::*;
/// let evens = from_iter(0u32..).filter(|v| v % 2 == 0);
/// assert_eq!(evens.take(3).to_vec(), vec![0, 2, 4]);
/// ```
pub fn from_iter<I>(source: I) -> Iterable<I>
where
    I: IntoIterator + Clone,
{
    Iterable { source }
}

/// A sequence with no elements.
pub fn empty<T>() -> Empty<T> {
    Empty(PhantomData)
}
