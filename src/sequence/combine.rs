//! Adapters that combine several sequences, or nested collections, into one.

use super::sequence_trait::Sequence;

/// `source` followed by `other`.
#[derive(Clone, Debug)]
pub struct Append<S, O> {
    source: S,
    other: O,
}

/// `other` followed by `source`.
#[derive(Clone, Debug)]
pub struct Prepend<S, O> {
    source: S,
    other: O,
}

/// Flattens a sequence of collections, one collection at a time.
#[derive(Clone, Debug)]
pub struct Concat<S> {
    source: S,
}

/// Turns a sequence of rows into a sequence of columns.
///
/// Rows may be ragged: a row that runs out simply stops contributing, so later
/// columns are shorter.
#[derive(Clone, Debug)]
pub struct Transpose<S> {
    source: S,
}

/// Pairs two sequences element by element, stopping at the shorter one.
#[derive(Clone, Debug)]
pub struct Zip<A, B> {
    a: A,
    b: B,
}

impl<S, O> Append<S, O> {
    pub fn new(source: S, other: O) -> Self {
        Self { source, other }
    }
}

impl<S, O> Prepend<S, O> {
    pub fn new(source: S, other: O) -> Self {
        Self { source, other }
    }
}

impl<S> Concat<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }
}

impl<S> Transpose<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }
}

impl<A, B> Zip<A, B> {
    pub fn new(a: A, b: B) -> Self {
        Self { a, b }
    }
}

/// Pair two sequences into a sequence of tuples.
///
/// ```
/// use lazy_query::prelude::*;
/// let pairs = zip(from_vec(vec![1, 2, 3]), from_vec(vec![4, 5]));
/// assert_eq!(pairs.to_vec(), vec![(1, 4), (2, 5)]);
/// ```
pub fn zip<A: Sequence, B: Sequence>(a: A, b: B) -> Zip<A, B> {
    Zip::new(a, b)
}

// --- Append / Prepend ---

/// Cursor that exhausts `front` and then `back`.
pub struct ChainCursor<F, B> {
    front: Option<F>,
    back: B,
}

impl<F, B> Iterator for ChainCursor<F, B>
where
    F: Iterator,
    B: Iterator<Item = F::Item>,
{
    type Item = F::Item;

    fn next(&mut self) -> Option<F::Item> {
        if let Some(front) = self.front.as_mut() {
            if let Some(v) = front.next() {
                return Some(v);
            }
            self.front = None;
        }
        self.back.next()
    }
}

impl<S, O> Sequence for Append<S, O>
where
    S: Sequence,
    O: Sequence<Item = S::Item>,
{
    type Item = S::Item;
    type Cursor = ChainCursor<S::Cursor, O::Cursor>;

    fn traverse(&self, replay_only: bool) -> Self::Cursor {
        ChainCursor {
            front: Some(self.source.traverse(replay_only)),
            back: self.other.traverse(replay_only),
        }
    }
}

impl<S, O> Sequence for Prepend<S, O>
where
    S: Sequence,
    O: Sequence<Item = S::Item>,
{
    type Item = S::Item;
    type Cursor = ChainCursor<O::Cursor, S::Cursor>;

    fn traverse(&self, replay_only: bool) -> Self::Cursor {
        ChainCursor {
            front: Some(self.other.traverse(replay_only)),
            back: self.source.traverse(replay_only),
        }
    }
}

// --- Concat ---

pub struct ConcatCursor<C>
where
    C: Iterator,
    C::Item: IntoIterator,
{
    outer: C,
    inner: Option<<C::Item as IntoIterator>::IntoIter>,
}

impl<S> Sequence for Concat<S>
where
    S: Sequence,
    S::Item: IntoIterator,
{
    type Item = <S::Item as IntoIterator>::Item;
    type Cursor = ConcatCursor<S::Cursor>;

    fn traverse(&self, replay_only: bool) -> Self::Cursor {
        ConcatCursor {
            outer: self.source.traverse(replay_only),
            inner: None,
        }
    }
}

impl<C> Iterator for ConcatCursor<C>
where
    C: Iterator,
    C::Item: IntoIterator,
{
    type Item = <C::Item as IntoIterator>::Item;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(inner) = self.inner.as_mut() {
                if let Some(v) = inner.next() {
                    return Some(v);
                }
                self.inner = None;
            }
            self.inner = Some(self.outer.next()?.into_iter());
        }
    }
}

// --- Transpose ---

pub struct TransposeCursor<C>
where
    C: Iterator,
    C::Item: IntoIterator,
{
    /// Consumed on the first advance.
    rows_source: Option<C>,
    rows: Vec<<C::Item as IntoIterator>::IntoIter>,
}

impl<S> Sequence for Transpose<S>
where
    S: Sequence,
    S::Item: IntoIterator,
{
    type Item = Vec<<S::Item as IntoIterator>::Item>;
    type Cursor = TransposeCursor<S::Cursor>;

    fn traverse(&self, replay_only: bool) -> Self::Cursor {
        TransposeCursor {
            rows_source: Some(self.source.traverse(replay_only)),
            rows: Vec::new(),
        }
    }
}

impl<C> Iterator for TransposeCursor<C>
where
    C: Iterator,
    C::Item: IntoIterator,
{
    type Item = Vec<<C::Item as IntoIterator>::Item>;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(src) = self.rows_source.take() {
            self.rows = src.map(IntoIterator::into_iter).collect();
        }
        let mut column = Vec::with_capacity(self.rows.len());
        self.rows.retain_mut(|row| match row.next() {
            Some(v) => {
                column.push(v);
                true
            }
            None => false,
        });
        if column.is_empty() { None } else { Some(column) }
    }
}

// --- Zip ---

pub struct ZipCursor<A, B> {
    a: A,
    b: B,
}

impl<A: Sequence, B: Sequence> Sequence for Zip<A, B> {
    type Item = (A::Item, B::Item);
    type Cursor = ZipCursor<A::Cursor, B::Cursor>;

    fn traverse(&self, replay_only: bool) -> Self::Cursor {
        ZipCursor {
            a: self.a.traverse(replay_only),
            b: self.b.traverse(replay_only),
        }
    }
}

impl<A: Iterator, B: Iterator> Iterator for ZipCursor<A, B> {
    type Item = (A::Item, B::Item);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let a = self.a.next()?;
        let b = self.b.next()?;
        Some((a, b))
    }
}
