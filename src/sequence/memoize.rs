//! Memoization: compute once, replay many times.
//!
//! This module provides:
//! 1. [`Memoize`]: a shared append-only buffer in front of one persistent upstream
//!    cursor. Every traversal replays the buffer and then extends it on demand,
//!    so each upstream element is produced exactly once no matter how many
//!    traversals (or interleaved cursors) read it.
//! 2. [`OnlyMemoized`]: a view that forces replay-only traversal on its upstream,
//!    yielding exactly what the memo buffer already holds.
//! 3. [`Recurse`] and [`Memoize::recursive`]: two-phase construction for sequences
//!    defined in terms of their own earlier output.
//!
//! # Re-entrancy
//! While a `Memoize` pulls from its upstream, the upstream may read the same
//! buffer again (that is the point of self-reference), but only through a
//! replay-only traversal. A computing traversal that re-enters a buffer that is
//! mid-extension is a programmer error and panics instead of recursing forever.
//!
//! # Example
//! ```
//! use lazy_query::prelude::*;
//!
//! let primes = Memoize::<u64>::recursive(|primes| {
//!     from_iter(2u64..).filter(move |&n| {
//!         !primes
//!             .clone()
//!             .only_memoized()
//!             .take_while(move |p| p * p <= n)
//!             .any(|p| n % p == 0)
//!     })
//! });
//! assert_eq!(primes.clone().take(6).to_vec(), vec![2, 3, 5, 7, 11, 13]);
//! ```

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use once_cell::unsync::OnceCell;

use super::sequence_trait::Sequence;
use crate::debug_invariants::DebugInvariants;
use crate::query_error::QueryError;

/// Type-erased access to a memo buffer, independent of the upstream cursor type.
trait MemoBuffer<T> {
    /// Element `index`, pulling it from upstream unless `replay_only` is set.
    fn fetch(&self, index: usize, replay_only: bool) -> Option<T>;
    /// Number of committed elements.
    fn committed(&self) -> usize;
    /// Number of elements ever pulled from upstream.
    fn pulled(&self) -> usize;
    /// Whether the upstream cursor has been exhausted.
    fn is_exhausted(&self) -> bool;
}

struct MemoState<T, C> {
    data: RefCell<Vec<T>>,
    /// `None` once the upstream cursor has been exhausted.
    upstream: RefCell<Option<C>>,
    pulled: Cell<usize>,
}

impl<T, C> MemoBuffer<T> for MemoState<T, C>
where
    T: Clone,
    C: Iterator<Item = T>,
{
    fn fetch(&self, index: usize, replay_only: bool) -> Option<T> {
        if let Some(v) = self.data.borrow().get(index) {
            return Some(v.clone());
        }
        if replay_only {
            return None;
        }
        let mut upstream = match self.upstream.try_borrow_mut() {
            Ok(guard) => guard,
            Err(_) => panic!(
                "memoized sequence re-entered while extending its buffer; \
                 self-references must go through only_memoized()"
            ),
        };
        // the data borrow is released here: the upstream may replay this buffer
        let next = upstream.as_mut()?.next();
        match next {
            Some(v) => {
                self.pulled.set(self.pulled.get() + 1);
                let mut data = self.data.borrow_mut();
                data.push(v.clone());
                log::trace!("memoize: committed element #{}", data.len() - 1);
                Some(v)
            }
            None => {
                log::debug!(
                    "memoize: upstream exhausted after {} elements",
                    self.pulled.get()
                );
                *upstream = None;
                None
            }
        }
    }

    fn committed(&self) -> usize {
        self.data.borrow().len()
    }

    fn pulled(&self) -> usize {
        self.pulled.get()
    }

    fn is_exhausted(&self) -> bool {
        // `try_borrow` fails only while the buffer is being extended
        self.upstream.try_borrow().map(|u| u.is_none()).unwrap_or(false)
    }
}

/// A memoized sequence handle.
///
/// Cloning the handle shares the buffer and the upstream cursor.
pub struct Memoize<T> {
    buffer: Rc<dyn MemoBuffer<T>>,
}

impl<T> Clone for Memoize<T> {
    fn clone(&self) -> Self {
        Self {
            buffer: Rc::clone(&self.buffer),
        }
    }
}

impl<T: Clone + 'static> Memoize<T> {
    /// Memoize `source`, opening its persistent cursor right away.
    ///
    /// Opening the cursor does not produce any element.
    pub fn new<S>(source: S) -> Self
    where
        S: Sequence<Item = T>,
        S::Cursor: 'static,
    {
        let state = MemoState {
            data: RefCell::new(Vec::new()),
            upstream: RefCell::new(Some(source.traverse(false))),
            pulled: Cell::new(0),
        };
        Self {
            buffer: Rc::new(state),
        }
    }

    /// Build a sequence that may read its own memoized output.
    ///
    /// `build` receives an unbound [`Recurse`] handle, returns the generating
    /// sequence, and the handle is bound to the memo buffer of that sequence
    /// before anything is traversed. Inside `build`, read the handle through
    /// `only_memoized()`.
    pub fn recursive<S, F>(build: F) -> Self
    where
        F: FnOnce(Recurse<T>) -> S,
        S: Sequence<Item = T>,
        S::Cursor: 'static,
    {
        let handle = Recurse {
            slot: Rc::new(OnceCell::new()),
        };
        let memo = Self::new(build(handle.clone()));
        let bound = handle.slot.set(Rc::downgrade(&memo.buffer)).is_ok();
        debug_assert!(bound, "self-reference handle bound twice");
        memo
    }
}

impl<T> Memoize<T> {
    /// Number of elements committed to the buffer so far.
    pub fn memoized_len(&self) -> usize {
        self.buffer.committed()
    }

    /// Whether the upstream has reported its end.
    pub fn is_exhausted(&self) -> bool {
        self.buffer.is_exhausted()
    }
}

impl<T: Clone> Sequence for Memoize<T> {
    type Item = T;
    type Cursor = MemoCursor<T>;

    fn traverse(&self, replay_only: bool) -> Self::Cursor {
        MemoCursor {
            buffer: Rc::clone(&self.buffer),
            index: 0,
            replay_only,
        }
    }
}

impl<T> DebugInvariants for Memoize<T> {
    fn debug_assert_invariants(&self) {
        crate::debug_invariants!(self.validate_invariants(), "Memoize");
    }

    fn validate_invariants(&self) -> Result<(), QueryError> {
        let committed = self.buffer.committed();
        let pulled = self.buffer.pulled();
        if committed != pulled {
            return Err(QueryError::InvariantViolation(format!(
                "memo buffer holds {committed} elements but {pulled} were pulled from upstream"
            )));
        }
        Ok(())
    }
}

/// Cursor over a memo buffer.
pub struct MemoCursor<T> {
    buffer: Rc<dyn MemoBuffer<T>>,
    index: usize,
    replay_only: bool,
}

impl<T> Iterator for MemoCursor<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        let v = self.buffer.fetch(self.index, self.replay_only)?;
        self.index += 1;
        Some(v)
    }
}

/// Restricts its upstream to replay-only traversal.
#[derive(Clone, Debug)]
pub struct OnlyMemoized<S> {
    source: S,
}

impl<S> OnlyMemoized<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }
}

impl<S: Sequence> Sequence for OnlyMemoized<S> {
    type Item = S::Item;
    type Cursor = S::Cursor;

    #[inline]
    fn traverse(&self, _replay_only: bool) -> Self::Cursor {
        self.source.traverse(true)
    }
}

/// Deferred reference to a memo buffer that is still being defined.
///
/// Holds the buffer weakly, so a definition that captures its own handle does
/// not keep itself alive. Traversing a handle that is unbound, or whose
/// [`Memoize`] has been dropped, yields nothing.
pub struct Recurse<T> {
    slot: Rc<OnceCell<Weak<dyn MemoBuffer<T>>>>,
}

impl<T> Clone for Recurse<T> {
    fn clone(&self) -> Self {
        Self {
            slot: Rc::clone(&self.slot),
        }
    }
}

impl<T> Recurse<T> {
    /// Whether the handle has been bound to a live buffer.
    pub fn is_bound(&self) -> bool {
        self.slot.get().is_some_and(|w| w.strong_count() > 0)
    }
}

impl<T: Clone> Sequence for Recurse<T> {
    type Item = T;
    type Cursor = RecurseCursor<T>;

    fn traverse(&self, replay_only: bool) -> Self::Cursor {
        RecurseCursor {
            slot: Rc::clone(&self.slot),
            index: 0,
            replay_only,
            warned: false,
        }
    }
}

/// Cursor over a [`Recurse`] handle.
///
/// The handle is resolved on every advance rather than when the cursor is
/// opened: cursors opened while the definition is still being built (before
/// the handle is bound) must see the buffer once it exists.
pub struct RecurseCursor<T> {
    slot: Rc<OnceCell<Weak<dyn MemoBuffer<T>>>>,
    index: usize,
    replay_only: bool,
    warned: bool,
}

impl<T> Iterator for RecurseCursor<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        let Some(buffer) = self.slot.get().and_then(Weak::upgrade) else {
            if !self.warned {
                log::warn!("traversing a self-reference that is not bound to a live memo buffer");
                self.warned = true;
            }
            return None;
        };
        let v = buffer.fetch(self.index, self.replay_only)?;
        self.index += 1;
        Some(v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sequence::source::{empty, from_vec};
    use crate::sequence::combine::Append;
    use crate::sequence::transform::{Map, Take};

    #[test]
    fn replays_without_recomputing() {
        let calls = Rc::new(Cell::new(0));
        let counter = Rc::clone(&calls);
        let m = Memoize::new(Map::new(from_vec(vec![0, 1]), move |v: i32| {
            counter.set(counter.get() + 1);
            v
        }));
        assert_eq!(m.cursor().collect::<Vec<_>>(), vec![0, 1]);
        assert_eq!(m.cursor().collect::<Vec<_>>(), vec![0, 1]);
        assert_eq!(calls.get(), 2);
        assert_eq!(m.memoized_len(), 2);
        assert!(m.is_exhausted());
        m.debug_assert_invariants();
    }

    #[test]
    fn empty_source() {
        let m = Memoize::new(empty::<u8>());
        assert!(m.cursor().next().is_none());
        assert!(m.cursor().next().is_none());
        assert_eq!(m.memoized_len(), 0);
    }

    #[test]
    fn replay_only_sees_committed_prefix() {
        let m = Memoize::new(from_vec(vec![1, 4, 0, 2, 3]));
        assert!(OnlyMemoized::new(m.clone()).cursor().next().is_none());
        let _ = Take::new(m.clone(), 3).cursor().count();
        let seen: Vec<_> = OnlyMemoized::new(m.clone()).cursor().collect();
        assert_eq!(seen, vec![1, 4, 0]);
        assert!(!m.is_exhausted());
    }

    #[test]
    fn interleaved_cursors_share_the_buffer() {
        let m = Memoize::new(from_vec(vec!['a', 'b', 'c']));
        let mut c1 = m.cursor();
        let mut c2 = m.cursor();
        assert_eq!(c1.next(), Some('a'));
        assert_eq!(c1.next(), Some('b'));
        assert_eq!(c2.next(), Some('a'));
        assert_eq!(c2.next(), Some('b'));
        assert_eq!(c2.next(), Some('c'));
        assert_eq!(c1.next(), Some('c'));
        assert_eq!(c1.next(), None);
        assert_eq!(m.validate_invariants(), Ok(()));
    }

    #[test]
    fn unbound_recurse_is_empty() {
        let r = Recurse::<u8> {
            slot: Rc::new(OnceCell::new()),
        };
        assert!(!r.is_bound());
        assert!(r.cursor().next().is_none());
    }

    #[test]
    fn cursor_opened_before_binding_sees_the_buffer() {
        // `Append` opens both cursors up front, before `recursive` binds the handle
        let m = Memoize::recursive(|this: Recurse<u32>| {
            Append::new(
                from_vec(vec![1u32]),
                Map::new(Take::new(OnlyMemoized::new(this), 3), |v: u32| v * 2),
            )
        });
        assert_eq!(m.cursor().collect::<Vec<_>>(), vec![1, 2, 4, 8]);
    }

    #[test]
    fn dropped_memoize_unbinds_its_handle() {
        let mut handle = None;
        let m = Memoize::recursive(|this: Recurse<u8>| {
            handle = Some(this);
            from_vec(vec![1u8])
        });
        let handle = handle.unwrap();
        assert!(handle.is_bound());
        drop(m);
        assert!(!handle.is_bound());
        assert!(handle.cursor().next().is_none());
    }

    #[test]
    #[should_panic(expected = "re-entered")]
    fn computing_self_reference_panics() {
        let m = Memoize::recursive(|this: Recurse<u32>| {
            // reads itself in computing mode: programmer error
            Map::new(from_vec(vec![1u32]), move |v: u32| v + this.cursor().count() as u32)
        });
        let _ = m.cursor().next();
    }
}
