//! Chaining and terminal operations for every [`Sequence`].
//!
//! [`SequenceExt`] is blanket-implemented, so each adapter and each source gets
//! the whole surface without modifying the core trait. Chaining methods consume
//! the receiver and wrap it in an adapter; terminal methods borrow it, open a
//! computing cursor and drive it.

use std::cmp::Ordering;
use std::fmt::Display;
use std::hash::Hash;
use std::ops::{Add, Mul};

use num_traits::{One, ToPrimitive, Zero};

use super::boxed::BoxedSequence;
use super::combinatorics::{Permutations, Subsequences};
use super::combine::{Append, Concat, Prepend, Transpose, Zip};
use super::memoize::{Memoize, OnlyMemoized};
use super::repeat::{Cycle, Iterate};
use super::sequence_trait::Sequence;
use super::source::Elements;
use super::transform::{
    DropFirst, DropWhile, Filter, FilterMap, Intersperse, Map, Take, TakeWhile,
};
use super::unique::{Unique, UniqueBy, UniqueHashed};
use crate::algs::aggregate::{self, Unbounded};
use crate::algs::sort::sort_vec;
use crate::query_error::QueryError;

/// Extension methods for building and running queries.
///
/// ```
/// use lazy_query::prelude::*;
///
/// let evens = from_iter(0u32..).filter(|v| v % 2 == 0).map(|v| v * 10);
/// assert_eq!(evens.clone().take(3).to_vec(), vec![0, 20, 40]);
/// assert_eq!(evens.get(4), Some(80));
/// ```
pub trait SequenceExt: Sequence {
    // --- chaining ---

    fn map<U, F>(self, f: F) -> Map<Self, F>
    where
        Self: Sized,
        F: Fn(Self::Item) -> U,
    {
        Map::new(self, f)
    }

    fn filter<P>(self, pred: P) -> Filter<Self, P>
    where
        Self: Sized,
        P: Fn(&Self::Item) -> bool,
    {
        Filter::new(self, pred)
    }

    /// Filter and convert in one step: keeps the `Some` results of `f`.
    fn filter_map<U, F>(self, f: F) -> FilterMap<Self, F>
    where
        Self: Sized,
        F: Fn(Self::Item) -> Option<U>,
    {
        FilterMap::new(self, f)
    }

    /// At most the first `count` elements. `take(0)` never touches the upstream.
    fn take(self, count: usize) -> Take<Self>
    where
        Self: Sized,
    {
        Take::new(self, count)
    }

    /// Everything after the first `count` elements.
    fn drop(self, count: usize) -> DropFirst<Self>
    where
        Self: Sized,
    {
        DropFirst::new(self, count)
    }

    fn take_while<P>(self, pred: P) -> TakeWhile<Self, P>
    where
        Self: Sized,
        P: Fn(&Self::Item) -> bool,
    {
        TakeWhile::new(self, pred)
    }

    fn drop_while<P>(self, pred: P) -> DropWhile<Self, P>
    where
        Self: Sized,
        P: Fn(&Self::Item) -> bool,
    {
        DropWhile::new(self, pred)
    }

    /// `separator` between each pair of adjacent elements.
    fn intersperse(self, separator: Self::Item) -> Intersperse<Self, Self::Item>
    where
        Self: Sized,
        Self::Item: Clone,
    {
        Intersperse::new(self, separator)
    }

    fn append<O>(self, other: O) -> Append<Self, O>
    where
        Self: Sized,
        O: Sequence<Item = Self::Item>,
    {
        Append::new(self, other)
    }

    fn prepend<O>(self, other: O) -> Prepend<Self, O>
    where
        Self: Sized,
        O: Sequence<Item = Self::Item>,
    {
        Prepend::new(self, other)
    }

    /// Repeat the whole sequence forever. An empty sequence stays empty.
    fn cycle(self) -> Cycle<Self>
    where
        Self: Sized + Clone,
    {
        Cycle::new(self)
    }

    /// The first upstream element, then `f` applied repeatedly to the previous
    /// output. The rest of the upstream is ignored.
    fn iterate<F>(self, f: F) -> Iterate<Self, F>
    where
        Self: Sized,
        Self::Item: Clone,
        F: Fn(&Self::Item) -> Self::Item,
    {
        Iterate::new(self, f)
    }

    /// Flatten one level of nesting.
    fn concat(self) -> Concat<Self>
    where
        Self: Sized,
        Self::Item: IntoIterator,
    {
        Concat::new(self)
    }

    /// Rows to columns. Ragged rows make later columns shorter.
    fn transpose(self) -> Transpose<Self>
    where
        Self: Sized,
        Self::Item: IntoIterator,
    {
        Transpose::new(self)
    }

    fn zip<B>(self, other: B) -> Zip<Self, B>
    where
        Self: Sized,
        B: Sequence,
    {
        Zip::new(self, other)
    }

    /// Cache the elements as they are produced; see [`Memoize`].
    fn memoize(self) -> Memoize<Self::Item>
    where
        Self: Sized,
        Self::Item: Clone + 'static,
        Self::Cursor: 'static,
    {
        Memoize::new(self)
    }

    /// Only what the memo buffers upstream already hold; see [`OnlyMemoized`].
    fn only_memoized(self) -> OnlyMemoized<Self>
    where
        Self: Sized,
    {
        OnlyMemoized::new(self)
    }

    fn permutations(self) -> Permutations<Self>
    where
        Self: Sized,
        Self::Item: Clone,
    {
        Permutations::new(self)
    }

    fn subsequences(self) -> Subsequences<Self>
    where
        Self: Sized,
        Self::Item: Clone,
    {
        Subsequences::new(self)
    }

    /// Drop repeats, keeping first occurrences. Compares each element with
    /// every element already emitted.
    fn unique(self) -> Unique<Self>
    where
        Self: Sized,
        Self::Item: PartialEq + Clone,
    {
        Unique::new(self)
    }

    /// Like [`unique`](SequenceExt::unique), tracking seen elements in a hash set.
    fn unique_hashed(self) -> UniqueHashed<Self>
    where
        Self: Sized,
        Self::Item: Eq + Hash + Clone,
    {
        UniqueHashed::new(self)
    }

    fn unique_by<E>(self, eq: E) -> UniqueBy<Self, E>
    where
        Self: Sized,
        Self::Item: Clone,
        E: Fn(&Self::Item, &Self::Item) -> bool,
    {
        UniqueBy::new(self, eq)
    }

    fn boxed(self) -> BoxedSequence<Self::Item>
    where
        Self: Sized + 'static,
        Self::Cursor: 'static,
    {
        BoxedSequence::new(self)
    }

    // --- terminal ---

    fn to_vec(&self) -> Vec<Self::Item> {
        self.cursor().collect()
    }

    /// The `Display` forms of all elements, concatenated without separator.
    fn join_to_string(&self) -> String
    where
        Self::Item: Display,
    {
        itertools::join(self.cursor(), "")
    }

    /// Fold without an initial value; `None` for an empty sequence.
    fn reduce<F>(&self, f: F) -> Option<Self::Item>
    where
        F: FnMut(Self::Item, Self::Item) -> Self::Item,
    {
        self.cursor().reduce(f)
    }

    fn fold<U, F>(&self, init: U, f: F) -> U
    where
        F: FnMut(U, Self::Item) -> U,
    {
        self.cursor().fold(init, f)
    }

    fn count(&self) -> usize {
        self.cursor().count()
    }

    fn count_where<P>(&self, mut pred: P) -> usize
    where
        P: FnMut(&Self::Item) -> bool,
    {
        self.cursor().filter(|v| pred(v)).count()
    }

    fn first(&self) -> Option<Self::Item> {
        self.cursor().next()
    }

    fn last(&self) -> Option<Self::Item> {
        self.cursor().last()
    }

    /// Element at `index`, or `None` past the end.
    fn get(&self, index: usize) -> Option<Self::Item> {
        self.cursor().nth(index)
    }

    fn find<P>(&self, mut pred: P) -> Option<Self::Item>
    where
        P: FnMut(&Self::Item) -> bool,
    {
        self.cursor().find(|v| pred(v))
    }

    fn contains(&self, value: &Self::Item) -> bool
    where
        Self::Item: PartialEq,
    {
        self.cursor().any(|v| v == *value)
    }

    /// `true` for an empty sequence.
    fn all<P>(&self, pred: P) -> bool
    where
        P: FnMut(Self::Item) -> bool,
    {
        self.cursor().all(pred)
    }

    /// Stops at the first element that satisfies `pred`.
    fn any<P>(&self, pred: P) -> bool
    where
        P: FnMut(Self::Item) -> bool,
    {
        self.cursor().any(pred)
    }

    fn is_empty(&self) -> bool {
        self.cursor().next().is_none()
    }

    /// Run `f` on every element for its side effects.
    fn exec<F>(&self, f: F)
    where
        F: FnMut(Self::Item),
    {
        self.cursor().for_each(f)
    }

    fn sum(&self) -> Self::Item
    where
        Self::Item: Zero + Add<Output = Self::Item>,
    {
        aggregate::sum(self.cursor())
    }

    fn product(&self) -> Self::Item
    where
        Self::Item: One + Mul<Output = Self::Item>,
    {
        aggregate::product(self.cursor())
    }

    /// Largest element; [`Unbounded::lower`] when empty.
    fn max(&self) -> Self::Item
    where
        Self::Item: Unbounded,
    {
        aggregate::max(self.cursor())
    }

    /// Smallest element; [`Unbounded::upper`] when empty.
    fn min(&self) -> Self::Item
    where
        Self::Item: Unbounded,
    {
        aggregate::min(self.cursor())
    }

    fn average(&self) -> f64
    where
        Self::Item: ToPrimitive,
    {
        aggregate::average(self.cursor())
    }

    fn average_by<F>(&self, f: F) -> f64
    where
        F: FnMut(Self::Item) -> f64,
    {
        aggregate::average_of(self.cursor().map(f))
    }

    fn and(&self) -> bool
    where
        Self: Sequence<Item = bool>,
    {
        aggregate::and(self.cursor())
    }

    fn or(&self) -> bool
    where
        Self: Sequence<Item = bool>,
    {
        aggregate::or(self.cursor())
    }

    // --- eager reshaping ---

    /// All elements in reverse order, materialized.
    fn reverse(&self) -> Elements<Self::Item> {
        let mut v = self.to_vec();
        v.reverse();
        Elements::from(v)
    }

    /// All elements sorted by `cmp`, materialized. Not stable.
    fn sort_by<F>(&self, cmp: F) -> Elements<Self::Item>
    where
        F: FnMut(&Self::Item, &Self::Item) -> Ordering,
    {
        Elements::from(sort_vec(self.to_vec(), cmp))
    }

    /// Like [`sort_by`](SequenceExt::sort_by), for a comparator that may be absent.
    ///
    /// # Errors
    /// [`QueryError::MissingComparator`] when `cmp` is `None`; nothing is
    /// traversed in that case.
    fn try_sort_by<F>(&self, cmp: Option<F>) -> Result<Elements<Self::Item>, QueryError>
    where
        F: FnMut(&Self::Item, &Self::Item) -> Ordering,
    {
        let cmp = cmp.ok_or(QueryError::MissingComparator)?;
        Ok(self.sort_by(cmp))
    }
}

impl<S: Sequence + ?Sized> SequenceExt for S {}
