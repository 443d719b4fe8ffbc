//! Duplicate removal, preserving first-occurrence order.
//!
//! [`Unique`] and [`UniqueBy`] compare each candidate against every element
//! already emitted (with `PartialEq`, or with a caller-supplied equality), which
//! is quadratic in the number of distinct elements but needs nothing beyond
//! equality. [`UniqueHashed`] trades the extra `Eq + Hash` bound for a hash set
//! of the elements seen so far.

use std::hash::Hash;
use std::rc::Rc;

use hashbrown::HashSet;

use super::sequence_trait::Sequence;

/// Drops elements equal (by `PartialEq`) to an earlier element.
#[derive(Clone, Debug)]
pub struct Unique<S> {
    source: S,
}

/// Drops elements equal (by `Eq`) to an earlier element, tracked in a hash set.
#[derive(Clone, Debug)]
pub struct UniqueHashed<S> {
    source: S,
}

/// Drops elements that `eq` reports equal to an earlier emitted element.
pub struct UniqueBy<S, E> {
    source: S,
    eq: Rc<E>,
}

impl<S: Clone, E> Clone for UniqueBy<S, E> {
    fn clone(&self) -> Self {
        Self {
            source: self.source.clone(),
            eq: Rc::clone(&self.eq),
        }
    }
}

impl<S> Unique<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }
}

impl<S> UniqueHashed<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }
}

impl<S, E> UniqueBy<S, E> {
    pub fn new(source: S, eq: E) -> Self {
        Self {
            source,
            eq: Rc::new(eq),
        }
    }
}

pub struct UniqueCursor<C: Iterator> {
    upstream: C,
    emitted: Vec<C::Item>,
}

impl<S> Sequence for Unique<S>
where
    S: Sequence,
    S::Item: PartialEq + Clone,
{
    type Item = S::Item;
    type Cursor = UniqueCursor<S::Cursor>;

    fn traverse(&self, replay_only: bool) -> Self::Cursor {
        UniqueCursor {
            upstream: self.source.traverse(replay_only),
            emitted: Vec::new(),
        }
    }
}

impl<C> Iterator for UniqueCursor<C>
where
    C: Iterator,
    C::Item: PartialEq + Clone,
{
    type Item = C::Item;

    fn next(&mut self) -> Option<C::Item> {
        loop {
            let v = self.upstream.next()?;
            if !self.emitted.contains(&v) {
                self.emitted.push(v.clone());
                return Some(v);
            }
        }
    }
}

pub struct UniqueHashedCursor<C: Iterator> {
    upstream: C,
    seen: HashSet<C::Item>,
}

impl<S> Sequence for UniqueHashed<S>
where
    S: Sequence,
    S::Item: Eq + Hash + Clone,
{
    type Item = S::Item;
    type Cursor = UniqueHashedCursor<S::Cursor>;

    fn traverse(&self, replay_only: bool) -> Self::Cursor {
        UniqueHashedCursor {
            upstream: self.source.traverse(replay_only),
            seen: HashSet::new(),
        }
    }
}

impl<C> Iterator for UniqueHashedCursor<C>
where
    C: Iterator,
    C::Item: Eq + Hash + Clone,
{
    type Item = C::Item;

    fn next(&mut self) -> Option<C::Item> {
        loop {
            let v = self.upstream.next()?;
            if self.seen.insert(v.clone()) {
                return Some(v);
            }
        }
    }
}

pub struct UniqueByCursor<C: Iterator, E> {
    upstream: C,
    eq: Rc<E>,
    emitted: Vec<C::Item>,
}

impl<S, E> Sequence for UniqueBy<S, E>
where
    S: Sequence,
    S::Item: Clone,
    E: Fn(&S::Item, &S::Item) -> bool,
{
    type Item = S::Item;
    type Cursor = UniqueByCursor<S::Cursor, E>;

    fn traverse(&self, replay_only: bool) -> Self::Cursor {
        UniqueByCursor {
            upstream: self.source.traverse(replay_only),
            eq: Rc::clone(&self.eq),
            emitted: Vec::new(),
        }
    }
}

impl<C, E> Iterator for UniqueByCursor<C, E>
where
    C: Iterator,
    C::Item: Clone,
    E: Fn(&C::Item, &C::Item) -> bool,
{
    type Item = C::Item;

    fn next(&mut self) -> Option<C::Item> {
        loop {
            let v = self.upstream.next()?;
            if !self.emitted.iter().any(|prev| (self.eq)(prev, &v)) {
                self.emitted.push(v.clone());
                return Some(v);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sequence::source::{empty, from_vec};

    #[test]
    fn unique_keeps_first_occurrence() {
        let u = Unique::new(from_vec(vec![1, 2, 2, 1, 2]));
        assert_eq!(u.cursor().collect::<Vec<_>>(), vec![1, 2]);
        assert!(Unique::new(empty::<u8>()).cursor().next().is_none());
    }

    #[test]
    fn unique_needs_only_partial_eq() {
        let u = Unique::new(from_vec(vec![0.5, 1.5, 0.5, -0.0, 0.0]));
        // -0.0 == 0.0 under PartialEq
        assert_eq!(u.cursor().collect::<Vec<f64>>(), vec![0.5, 1.5, -0.0]);
        let nan = Unique::new(from_vec(vec![f64::NAN, f64::NAN]));
        assert_eq!(nan.cursor().count(), 2);
    }

    #[test]
    fn hashed_and_linear_agree() {
        let values = vec!["b", "a", "b", "c", "a"];
        let linear: Vec<_> = Unique::new(from_vec(values.clone())).cursor().collect();
        let hashed: Vec<_> = UniqueHashed::new(from_vec(values)).cursor().collect();
        assert_eq!(linear, vec!["b", "a", "c"]);
        assert_eq!(hashed, linear);
    }

    #[test]
    fn unique_by_custom_equality() {
        #[derive(Clone, Debug, PartialEq)]
        struct Rec {
            a: i32,
            tag: &'static str,
        }
        let src = from_vec(vec![
            Rec { a: 1, tag: "x" },
            Rec { a: 2, tag: "y" },
            Rec { a: 1, tag: "z" },
        ]);
        let u = UniqueBy::new(src, |l: &Rec, r: &Rec| l.a == r.a);
        let tags: Vec<_> = u.cursor().map(|r| r.tag).collect();
        assert_eq!(tags, vec!["x", "y"]);
    }
}
