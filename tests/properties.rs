use proptest::prelude::*;

use lazy_query::prelude::*;

fn factorial(n: usize) -> usize {
    (1..=n).product()
}

proptest! {
    #[test]
    fn take_count_is_min(values in proptest::collection::vec(any::<i32>(), 0..64), n in 0usize..100) {
        let s = from_vec(values.clone());
        prop_assert_eq!(s.take(n).count(), n.min(values.len()));
    }

    #[test]
    fn sort_agrees_with_slice_sort(values in proptest::collection::vec(any::<i64>(), 0..300)) {
        let sorted = from_vec(values.clone()).sort_by(|a, b| a.cmp(b));
        let mut expected = values;
        expected.sort();
        prop_assert_eq!(sorted.to_vec(), expected);
    }

    #[test]
    fn drop_then_take_is_a_window(values in proptest::collection::vec(any::<u8>(), 0..40), d in 0usize..50, t in 0usize..50) {
        let got = from_vec(values.clone()).drop(d).take(t).to_vec();
        let expected: Vec<u8> = values.into_iter().skip(d).take(t).collect();
        prop_assert_eq!(got, expected);
    }

    #[test]
    fn memoize_is_transparent(values in proptest::collection::vec(any::<u16>(), 0..50), k in 0usize..60) {
        let m = from_vec(values.clone()).memoize();
        let _ = m.clone().take(k).count();
        prop_assert_eq!(m.clone().only_memoized().count(), k.min(values.len()));
        prop_assert_eq!(m.to_vec(), values);
    }

    #[test]
    fn permutation_and_subsequence_counts(n in 0usize..6) {
        let s = from_iter(0..n);
        prop_assert_eq!(s.clone().permutations().count(), factorial(n));
        prop_assert_eq!(s.subsequences().count(), 1usize << n);
    }

    #[test]
    fn unique_matches_first_occurrence(values in proptest::collection::vec(0u8..8, 0..40)) {
        let mut seen = Vec::new();
        for v in &values {
            if !seen.contains(v) {
                seen.push(*v);
            }
        }
        prop_assert_eq!(from_vec(values.clone()).unique().to_vec(), seen.clone());
        prop_assert_eq!(from_vec(values.clone()).unique_hashed().to_vec(), seen.clone());
        prop_assert_eq!(from_vec(values).unique_by(|a, b| a == b).to_vec(), seen);
    }
}
