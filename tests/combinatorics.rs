use lazy_query::prelude::*;

#[test]
fn permutations_heap_order() {
    let all = from_vec(vec![1, 2, 3]).permutations().to_vec();
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
fn permutations_of_nothing() {
    assert_eq!(empty::<u8>().permutations().to_vec(), vec![Vec::<u8>::new()]);
}

#[test]
fn permutations_are_distinct() {
    let perms = from_iter(0..5).permutations();
    assert_eq!(perms.count(), 120);
    assert_eq!(perms.unique().count(), 120);
}

#[test]
fn subsequences_of_abc() {
    let words: Vec<String> = from_iter("abc".chars())
        .subsequences()
        .map(|v| v.into_iter().collect::<String>())
        .to_vec();
    assert_eq!(words, vec!["", "a", "b", "ab", "c", "ac", "bc", "abc"]);
}

#[test]
fn subsequences_cover_every_bitmask_grouped_by_highest_bit() {
    let values = vec![1u32, 2, 4, 8, 16];
    let sums = from_vec(values).subsequences().map(|v| v.iter().sum::<u32>()).to_vec();
    // up to three elements the order is plain binary counting
    assert_eq!(sums[..8], [0, 1, 2, 3, 4, 5, 6, 7]);
    // after that, grouped by the rightmost element, shortest subsets first
    assert_eq!(sums[8..16], [8, 9, 10, 12, 11, 13, 14, 15]);
    assert!(sums[16..].iter().all(|s| (16..32).contains(s)));
    let mut sorted = sums.clone();
    sorted.sort();
    assert_eq!(sorted, (0..32).collect::<Vec<_>>());
}

#[test]
fn combinatorics_reopen_on_each_traversal() {
    let p = from_vec(vec!['x', 'y']).permutations();
    assert_eq!(p.to_vec(), p.to_vec());
    assert_eq!(p.first(), Some(vec!['x', 'y']));
}
