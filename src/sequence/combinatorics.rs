//! Combinatorial generators: permutations (Heap's algorithm) and subsequences
//! (the power set).
//!
//! Both need the complete input, so the upstream is drained into a buffer on the
//! first advance of a cursor. They must not be applied to infinite sequences.

use super::sequence_trait::Sequence;

/// All orderings of the upstream elements, in Heap's-algorithm order.
///
/// `n` elements give `n!` permutations; an empty upstream gives exactly one,
/// empty, permutation.
#[derive(Clone, Debug)]
pub struct Permutations<S> {
    source: S,
}

/// Every subsequence of the upstream, ordered by the rightmost element used.
///
/// `n` elements give `2^n` subsequences, starting with the empty one. Those
/// ending at the same position come shortest first, then in lexicographic
/// order of their positions. Equal values at different positions count as
/// distinct.
#[derive(Clone, Debug)]
pub struct Subsequences<S> {
    source: S,
}

impl<S> Permutations<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }
}

impl<S> Subsequences<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }
}

// --- Permutations ---

pub struct PermutationsCursor<C: Iterator> {
    /// Drained on the first advance.
    source: Option<C>,
    values: Vec<C::Item>,
    /// Heap's per-level swap counters.
    c: Vec<usize>,
    i: usize,
}

impl<S> Sequence for Permutations<S>
where
    S: Sequence,
    S::Item: Clone,
{
    type Item = Vec<S::Item>;
    type Cursor = PermutationsCursor<S::Cursor>;

    fn traverse(&self, replay_only: bool) -> Self::Cursor {
        PermutationsCursor {
            source: Some(self.source.traverse(replay_only)),
            values: Vec::new(),
            c: Vec::new(),
            i: 0,
        }
    }
}

impl<C> Iterator for PermutationsCursor<C>
where
    C: Iterator,
    C::Item: Clone,
{
    type Item = Vec<C::Item>;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(src) = self.source.take() {
            self.values = src.collect();
            self.c = vec![0; self.values.len()];
            return Some(self.values.clone());
        }
        while self.i < self.values.len() {
            let i = self.i;
            if self.c[i] < i {
                if i % 2 == 0 {
                    self.values.swap(0, i);
                } else {
                    self.values.swap(self.c[i], i);
                }
                self.c[i] += 1;
                self.i = 0;
                return Some(self.values.clone());
            }
            self.c[i] = 0;
            self.i += 1;
        }
        None
    }
}

// --- Subsequences ---

pub struct SubsequencesCursor<C: Iterator> {
    /// Drained on the first advance.
    source: Option<C>,
    values: Vec<C::Item>,
    /// Index of the rightmost element every current combination ends with.
    right: usize,
    /// Current strictly increasing index combination; its last entry is `right`.
    combo: Vec<usize>,
}

impl<S> Sequence for Subsequences<S>
where
    S: Sequence,
    S::Item: Clone,
{
    type Item = Vec<S::Item>;
    type Cursor = SubsequencesCursor<S::Cursor>;

    fn traverse(&self, replay_only: bool) -> Self::Cursor {
        SubsequencesCursor {
            source: Some(self.source.traverse(replay_only)),
            values: Vec::new(),
            right: 0,
            combo: vec![0],
        }
    }
}

impl<C: Iterator> SubsequencesCursor<C> {
    /// Step `combo` to the next combination ending in `right`; after the last
    /// one, restart at the lowest combination that is one element longer.
    fn advance_combo(&mut self) {
        let len = self.combo.len();
        // the last slot is pinned to `right`; find the rightmost free slot that can move
        let movable = (0..len.saturating_sub(1))
            .rev()
            .find(|&j| self.combo[j] + 1 < self.combo[j + 1]);
        match movable {
            Some(j) => {
                // bump slot `j` and restart every free slot after it right behind it
                self.combo[j] += 1;
                for k in j + 1..len - 1 {
                    self.combo[k] = self.combo[k - 1] + 1;
                }
            }
            None => {
                for (j, slot) in self.combo.iter_mut().enumerate() {
                    *slot = j;
                }
                self.combo.push(self.right);
            }
        }
    }
}

impl<C> Iterator for SubsequencesCursor<C>
where
    C: Iterator,
    C::Item: Clone,
{
    type Item = Vec<C::Item>;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(src) = self.source.take() {
            self.values = src.collect();
            return Some(Vec::new());
        }
        while self.right < self.values.len() {
            if self.combo.len() <= self.right + 1 {
                let out = self
                    .combo
                    .iter()
                    .map(|&k| self.values[k].clone())
                    .collect();
                self.advance_combo();
                return Some(out);
            }
            self.right += 1;
            self.combo = vec![self.right];
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use hashbrown::HashSet;

    use super::*;
    use crate::sequence::source::{empty, from_iter, from_vec};

    #[test]
    fn permutations_follow_heap_order() {
        let p = Permutations::new(from_vec(vec![1, 2, 3]));
        let all: Vec<_> = p.cursor().collect();
        assert_eq!(
            all,
            vec![
                vec![1, 2, 3],
                vec![2, 1, 3],
                vec![3, 1, 2],
                vec![1, 3, 2],
                vec![2, 3, 1],
                vec![3, 2, 1],
            ]
        );
    }

    #[test]
    fn permutations_of_empty_and_singleton() {
        let e: Vec<Vec<u8>> = Permutations::new(empty::<u8>()).cursor().collect();
        assert_eq!(e, vec![Vec::<u8>::new()]);
        let one: Vec<_> = Permutations::new(from_vec(vec![7])).cursor().collect();
        assert_eq!(one, vec![vec![7]]);
    }

    #[test]
    fn subsequences_in_rightmost_order() {
        let s = Subsequences::new(from_iter("abc".chars()));
        let words: Vec<String> = s.cursor().map(|v| v.into_iter().collect()).collect();
        assert_eq!(words, vec!["", "a", "b", "ab", "c", "ac", "bc", "abc"]);
    }

    #[test]
    fn subsequences_of_four() {
        let s = Subsequences::new(from_iter("abcd".chars()));
        let words: Vec<String> = s.cursor().map(|v| v.into_iter().collect()).collect();
        assert_eq!(
            words,
            vec![
                "", "a", "b", "ab", "c", "ac", "bc", "abc", "d", "ad", "bd", "cd", "abd", "acd",
                "bcd", "abcd"
            ]
        );
    }

    #[test]
    fn subsequences_of_five_include_every_subset() {
        let s = Subsequences::new(from_iter("abcde".chars()));
        let words: Vec<String> = s.cursor().map(|v| v.into_iter().collect()).collect();
        assert_eq!(words.len(), 32);
        assert!(words.contains(&"bce".to_string()));
        // right = 4, length 3: lexicographic over positions
        let tail: Vec<&str> = words[21..27].iter().map(String::as_str).collect();
        assert_eq!(tail, vec!["abe", "ace", "ade", "bce", "bde", "cde"]);
    }

    #[test]
    fn subsequences_are_the_whole_power_set() {
        for n in 0..=8usize {
            let all: Vec<Vec<usize>> = Subsequences::new(from_iter(0..n)).cursor().collect();
            assert_eq!(all.len(), 1 << n, "n = {n}");
            let distinct: HashSet<Vec<usize>> = all.iter().cloned().collect();
            assert_eq!(distinct.len(), 1 << n, "n = {n}");
            assert!(all.iter().all(|v| v.windows(2).all(|w| w[0] < w[1])));
        }
    }

    #[test]
    fn subsequences_keep_duplicates() {
        let s = Subsequences::new(from_vec(vec![1, 1]));
        let all: Vec<_> = s.cursor().collect();
        assert_eq!(all, vec![vec![], vec![1], vec![1], vec![1, 1]]);
    }
}
