//! Potentially infinite adapters: [`Cycle`] and [`Iterate`].
//!
//! Terminal operations on a non-empty `Cycle` or on any `Iterate` never return
//! unless a bounding adapter (`take`, `take_while`) sits in between.

use std::rc::Rc;

use super::sequence_trait::Sequence;

/// Replays the whole upstream traversal over and over.
///
/// Each pass re-traverses the source. The cycle ends as soon as a pass yields
/// nothing, so an empty source gives an empty cycle.
#[derive(Clone, Debug)]
pub struct Cycle<S> {
    source: S,
}

/// Seeds from the first upstream element, then applies `f` to the previous
/// output forever. The rest of the upstream is ignored.
pub struct Iterate<S, F> {
    source: S,
    f: Rc<F>,
}

impl<S: Clone, F> Clone for Iterate<S, F> {
    fn clone(&self) -> Self {
        Self {
            source: self.source.clone(),
            f: Rc::clone(&self.f),
        }
    }
}

impl<S> Cycle<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }
}

impl<S, F> Iterate<S, F> {
    pub fn new(source: S, f: F) -> Self {
        Self {
            source,
            f: Rc::new(f),
        }
    }
}

// --- Cycle ---

pub struct CycleCursor<S: Sequence> {
    source: S,
    current: S::Cursor,
    replay_only: bool,
    yielded_this_pass: bool,
    done: bool,
}

impl<S> Sequence for Cycle<S>
where
    S: Sequence + Clone,
{
    type Item = S::Item;
    type Cursor = CycleCursor<S>;

    fn traverse(&self, replay_only: bool) -> Self::Cursor {
        CycleCursor {
            source: self.source.clone(),
            current: self.source.traverse(replay_only),
            replay_only,
            yielded_this_pass: false,
            done: false,
        }
    }
}

impl<S: Sequence> Iterator for CycleCursor<S> {
    type Item = S::Item;

    fn next(&mut self) -> Option<S::Item> {
        if self.done {
            return None;
        }
        loop {
            if let Some(v) = self.current.next() {
                self.yielded_this_pass = true;
                return Some(v);
            }
            if !self.yielded_this_pass {
                self.done = true;
                return None;
            }
            self.current = self.source.traverse(self.replay_only);
            self.yielded_this_pass = false;
        }
    }
}

// --- Iterate ---

enum IterateState<C, T> {
    Seed(C),
    Running(T),
    Done,
}

pub struct IterateCursor<C: Iterator, F> {
    state: IterateState<C, C::Item>,
    f: Rc<F>,
}

impl<S, F> Sequence for Iterate<S, F>
where
    S: Sequence,
    S::Item: Clone,
    F: Fn(&S::Item) -> S::Item,
{
    type Item = S::Item;
    type Cursor = IterateCursor<S::Cursor, F>;

    fn traverse(&self, replay_only: bool) -> Self::Cursor {
        IterateCursor {
            state: IterateState::Seed(self.source.traverse(replay_only)),
            f: Rc::clone(&self.f),
        }
    }
}

impl<C, F> Iterator for IterateCursor<C, F>
where
    C: Iterator,
    C::Item: Clone,
    F: Fn(&C::Item) -> C::Item,
{
    type Item = C::Item;

    fn next(&mut self) -> Option<C::Item> {
        let next = match &mut self.state {
            IterateState::Seed(upstream) => upstream.next(),
            IterateState::Running(prev) => Some((self.f)(prev)),
            IterateState::Done => None,
        };
        match next {
            Some(v) => {
                self.state = IterateState::Running(v.clone());
                Some(v)
            }
            None => {
                // upstream cursor dropped here
                self.state = IterateState::Done;
                None
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.state {
            IterateState::Done => (0, Some(0)),
            IterateState::Seed(_) => (0, None),
            IterateState::Running(_) => (usize::MAX, None),
        }
    }
}
