//! Single-source, stateless transform adapters.
//!
//! Each adapter owns its upstream sequence plus a parameter (function, count or
//! separator). Closures are held behind `Rc` so cursors can own a handle to them
//! without requiring `F: Clone`. Nothing is cached between traversals.

use std::rc::Rc;

use super::sequence_trait::Sequence;

/// Applies a transform to every element, 1:1.
pub struct Map<S, F> {
    source: S,
    f: Rc<F>,
}

/// Keeps elements satisfying a predicate, preserving order.
pub struct Filter<S, P> {
    source: S,
    pred: Rc<P>,
}

/// Filter that also narrows the element type: keeps the `Some` results.
pub struct FilterMap<S, F> {
    source: S,
    f: Rc<F>,
}

/// Yields at most `count` leading elements.
#[derive(Clone, Debug)]
pub struct Take<S> {
    source: S,
    count: usize,
}

/// Discards `count` leading elements.
#[derive(Clone, Debug)]
pub struct DropFirst<S> {
    source: S,
    count: usize,
}

/// Yields the longest prefix satisfying a predicate.
pub struct TakeWhile<S, P> {
    source: S,
    pred: Rc<P>,
}

/// Discards the longest prefix satisfying a predicate.
pub struct DropWhile<S, P> {
    source: S,
    pred: Rc<P>,
}

/// Places a separator between consecutive elements.
#[derive(Clone, Debug)]
pub struct Intersperse<S, T> {
    source: S,
    separator: T,
}

macro_rules! impl_clone_with_fn {
    ($name:ident, $field:ident) => {
        impl<S: Clone, F> Clone for $name<S, F> {
            fn clone(&self) -> Self {
                Self {
                    source: self.source.clone(),
                    $field: Rc::clone(&self.$field),
                }
            }
        }
    };
}

impl_clone_with_fn!(Map, f);
impl_clone_with_fn!(Filter, pred);
impl_clone_with_fn!(FilterMap, f);
impl_clone_with_fn!(TakeWhile, pred);
impl_clone_with_fn!(DropWhile, pred);

impl<S, F> Map<S, F> {
    pub fn new(source: S, f: F) -> Self {
        Self {
            source,
            f: Rc::new(f),
        }
    }
}

impl<S, P> Filter<S, P> {
    pub fn new(source: S, pred: P) -> Self {
        Self {
            source,
            pred: Rc::new(pred),
        }
    }
}

impl<S, F> FilterMap<S, F> {
    pub fn new(source: S, f: F) -> Self {
        Self {
            source,
            f: Rc::new(f),
        }
    }
}

impl<S> Take<S> {
    pub fn new(source: S, count: usize) -> Self {
        Self { source, count }
    }
}

impl<S> DropFirst<S> {
    pub fn new(source: S, count: usize) -> Self {
        Self { source, count }
    }
}

impl<S, P> TakeWhile<S, P> {
    pub fn new(source: S, pred: P) -> Self {
        Self {
            source,
            pred: Rc::new(pred),
        }
    }
}

impl<S, P> DropWhile<S, P> {
    pub fn new(source: S, pred: P) -> Self {
        Self {
            source,
            pred: Rc::new(pred),
        }
    }
}

impl<S, T> Intersperse<S, T> {
    pub fn new(source: S, separator: T) -> Self {
        Self { source, separator }
    }
}

// --- Map ---

pub struct MapCursor<C, F> {
    upstream: C,
    f: Rc<F>,
}

impl<S, F, U> Sequence for Map<S, F>
where
    S: Sequence,
    F: Fn(S::Item) -> U,
{
    type Item = U;
    type Cursor = MapCursor<S::Cursor, F>;

    fn traverse(&self, replay_only: bool) -> Self::Cursor {
        MapCursor {
            upstream: self.source.traverse(replay_only),
            f: Rc::clone(&self.f),
        }
    }
}

impl<C, F, U> Iterator for MapCursor<C, F>
where
    C: Iterator,
    F: Fn(C::Item) -> U,
{
    type Item = U;

    #[inline]
    fn next(&mut self) -> Option<U> {
        self.upstream.next().map(|v| (self.f)(v))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.upstream.size_hint()
    }
}

// --- Filter ---

pub struct FilterCursor<C, P> {
    upstream: C,
    pred: Rc<P>,
}

impl<S, P> Sequence for Filter<S, P>
where
    S: Sequence,
    P: Fn(&S::Item) -> bool,
{
    type Item = S::Item;
    type Cursor = FilterCursor<S::Cursor, P>;

    fn traverse(&self, replay_only: bool) -> Self::Cursor {
        FilterCursor {
            upstream: self.source.traverse(replay_only),
            pred: Rc::clone(&self.pred),
        }
    }
}

impl<C, P> Iterator for FilterCursor<C, P>
where
    C: Iterator,
    P: Fn(&C::Item) -> bool,
{
    type Item = C::Item;

    fn next(&mut self) -> Option<C::Item> {
        loop {
            let v = self.upstream.next()?;
            if (self.pred)(&v) {
                return Some(v);
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.upstream.size_hint().1)
    }
}

// --- FilterMap ---

pub struct FilterMapCursor<C, F> {
    upstream: C,
    f: Rc<F>,
}

impl<S, F, U> Sequence for FilterMap<S, F>
where
    S: Sequence,
    F: Fn(S::Item) -> Option<U>,
{
    type Item = U;
    type Cursor = FilterMapCursor<S::Cursor, F>;

    fn traverse(&self, replay_only: bool) -> Self::Cursor {
        FilterMapCursor {
            upstream: self.source.traverse(replay_only),
            f: Rc::clone(&self.f),
        }
    }
}

impl<C, F, U> Iterator for FilterMapCursor<C, F>
where
    C: Iterator,
    F: Fn(C::Item) -> Option<U>,
{
    type Item = U;

    fn next(&mut self) -> Option<U> {
        loop {
            let v = self.upstream.next()?;
            if let Some(u) = (self.f)(v) {
                return Some(u);
            }
        }
    }
}

// --- Take ---

pub struct TakeCursor<C> {
    upstream: C,
    remaining: usize,
}

impl<S: Sequence> Sequence for Take<S> {
    type Item = S::Item;
    type Cursor = TakeCursor<S::Cursor>;

    fn traverse(&self, replay_only: bool) -> Self::Cursor {
        TakeCursor {
            upstream: self.source.traverse(replay_only),
            remaining: self.count,
        }
    }
}

impl<C: Iterator> Iterator for TakeCursor<C> {
    type Item = C::Item;

    #[inline]
    fn next(&mut self) -> Option<C::Item> {
        // never touch upstream once the budget is spent
        if self.remaining == 0 {
            return None;
        }
        let v = self.upstream.next()?;
        self.remaining -= 1;
        Some(v)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.remaining == 0 {
            return (0, Some(0));
        }
        let (lo, hi) = self.upstream.size_hint();
        let hi = hi.map_or(self.remaining, |h| h.min(self.remaining));
        (lo.min(self.remaining), Some(hi))
    }
}

// --- DropFirst ---

pub struct DropCursor<C> {
    upstream: C,
    to_skip: usize,
}

impl<S: Sequence> Sequence for DropFirst<S> {
    type Item = S::Item;
    type Cursor = DropCursor<S::Cursor>;

    fn traverse(&self, replay_only: bool) -> Self::Cursor {
        DropCursor {
            upstream: self.source.traverse(replay_only),
            to_skip: self.count,
        }
    }
}

impl<C: Iterator> Iterator for DropCursor<C> {
    type Item = C::Item;

    fn next(&mut self) -> Option<C::Item> {
        while self.to_skip > 0 {
            self.to_skip -= 1;
            self.upstream.next()?;
        }
        self.upstream.next()
    }
}

// --- TakeWhile ---

pub struct TakeWhileCursor<C, P> {
    upstream: C,
    pred: Rc<P>,
    done: bool,
}

impl<S, P> Sequence for TakeWhile<S, P>
where
    S: Sequence,
    P: Fn(&S::Item) -> bool,
{
    type Item = S::Item;
    type Cursor = TakeWhileCursor<S::Cursor, P>;

    fn traverse(&self, replay_only: bool) -> Self::Cursor {
        TakeWhileCursor {
            upstream: self.source.traverse(replay_only),
            pred: Rc::clone(&self.pred),
            done: false,
        }
    }
}

impl<C, P> Iterator for TakeWhileCursor<C, P>
where
    C: Iterator,
    P: Fn(&C::Item) -> bool,
{
    type Item = C::Item;

    fn next(&mut self) -> Option<C::Item> {
        if self.done {
            return None;
        }
        match self.upstream.next() {
            Some(v) if (self.pred)(&v) => Some(v),
            _ => {
                self.done = true;
                None
            }
        }
    }
}

// --- DropWhile ---

pub struct DropWhileCursor<C, P> {
    upstream: C,
    pred: Rc<P>,
    dropping: bool,
}

impl<S, P> Sequence for DropWhile<S, P>
where
    S: Sequence,
    P: Fn(&S::Item) -> bool,
{
    type Item = S::Item;
    type Cursor = DropWhileCursor<S::Cursor, P>;

    fn traverse(&self, replay_only: bool) -> Self::Cursor {
        DropWhileCursor {
            upstream: self.source.traverse(replay_only),
            pred: Rc::clone(&self.pred),
            dropping: true,
        }
    }
}

impl<C, P> Iterator for DropWhileCursor<C, P>
where
    C: Iterator,
    P: Fn(&C::Item) -> bool,
{
    type Item = C::Item;

    fn next(&mut self) -> Option<C::Item> {
        if self.dropping {
            self.dropping = false;
            loop {
                let v = self.upstream.next()?;
                if !(self.pred)(&v) {
                    return Some(v);
                }
            }
        }
        self.upstream.next()
    }
}

// --- Intersperse ---

pub struct IntersperseCursor<C: Iterator> {
    upstream: C,
    separator: C::Item,
    started: bool,
    pending: Option<C::Item>,
}

impl<S, T> Sequence for Intersperse<S, T>
where
    S: Sequence<Item = T>,
    T: Clone,
{
    type Item = S::Item;
    type Cursor = IntersperseCursor<S::Cursor>;

    fn traverse(&self, replay_only: bool) -> Self::Cursor {
        IntersperseCursor {
            upstream: self.source.traverse(replay_only),
            separator: self.separator.clone(),
            started: false,
            pending: None,
        }
    }
}

impl<C> Iterator for IntersperseCursor<C>
where
    C: Iterator,
    C::Item: Clone,
{
    type Item = C::Item;

    fn next(&mut self) -> Option<C::Item> {
        if let Some(v) = self.pending.take() {
            return Some(v);
        }
        let v = self.upstream.next()?;
        if !self.started {
            self.started = true;
            return Some(v);
        }
        self.pending = Some(v);
        Some(self.separator.clone())
    }
}
