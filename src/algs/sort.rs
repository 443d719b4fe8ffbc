//! Dual-pivot quicksort used by `sort_by`.
//!
//! Sorts an inclusive index range of a slice in place, with a three-way
//! comparator. Ranges shorter than [`INSERTION_THRESHOLD`] use insertion sort;
//! larger ones pick two pivots from the tertiles, partition into
//! `< p1 | p1..=p2 | > p2` and recurse. The sort is not stable.

use std::cmp::Ordering;

/// Ranges shorter than this fall back to insertion sort.
pub const INSERTION_THRESHOLD: usize = 27;

/// A middle partition spanning more than `len - EQUAL_KEYS_SLACK` triggers the
/// pass that moves keys equal to either pivot out of the way.
const EQUAL_KEYS_SLACK: usize = 13;

/// Sort `arr[left..=right]` in place according to `cmp`.
///
/// `div` is the pivot-sampling counter threaded through recursion (start at 3);
/// it is bumped whenever the middle partition comes out small. An empty slice,
/// or `left >= right`, is a no-op. `right` must be a valid index otherwise.
///
/// ```
/// use lazy_query::algs::sort::quicksort;
/// let mut v = vec![5, 3, 2, 1, 4];
/// let last = v.len() - 1;
/// quicksort(&mut v, 0, last, 3, &mut |a: &i32, b: &i32| a.cmp(b));
/// assert_eq!(v, vec![1, 2, 3, 4, 5]);
/// ```
pub fn quicksort<T, F>(arr: &mut [T], left: usize, right: usize, div: usize, cmp: &mut F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    if arr.is_empty() || left >= right {
        return;
    }
    let len = right - left;
    if len < INSERTION_THRESHOLD {
        insertion_sort(arr, left, right, cmp);
        return;
    }

    let m1 = (left + len / 3).max(left + 1);
    let m2 = (right - (len + 2) / 3).min(right - 1);
    if cmp(&arr[m1], &arr[m2]) == Ordering::Less {
        arr.swap(m1, left);
        arr.swap(m2, right);
    } else {
        arr.swap(m1, right);
        arr.swap(m2, left);
    }

    // pivots now live at arr[left] and arr[right]
    let mut less = left + 1;
    let mut great = right - 1;
    let mut k = less;
    while k <= great {
        if cmp(&arr[k], &arr[left]) == Ordering::Less {
            arr.swap(k, less);
            less += 1;
        } else if cmp(&arr[k], &arr[right]) == Ordering::Greater {
            while k < great && cmp(&arr[great], &arr[right]) == Ordering::Greater {
                great -= 1;
            }
            arr.swap(k, great);
            great -= 1;
            if cmp(&arr[k], &arr[left]) == Ordering::Less {
                arr.swap(k, less);
                less += 1;
            }
        }
        k += 1;
    }

    // `great + 1 >= less` always holds, so the middle may be empty (dist == -1)
    let dist = great as isize - less as isize;
    let slack = EQUAL_KEYS_SLACK as isize;
    let div = if dist < slack { div + 1 } else { div };

    arr.swap(less - 1, left);
    arr.swap(great + 1, right);
    let p1 = less - 1;
    let p2 = great + 1;

    if p1 > left {
        quicksort(arr, left, p1 - 1, div, cmp);
    }
    quicksort(arr, p2 + 1, right, div, cmp);

    let pivot_order = cmp(&arr[p1], &arr[p2]);
    if dist > len as isize - slack && pivot_order != Ordering::Equal {
        let mut k = less;
        while k <= great {
            if cmp(&arr[k], &arr[p1]) == Ordering::Equal {
                arr.swap(k, less);
                less += 1;
            } else if cmp(&arr[k], &arr[p2]) == Ordering::Equal {
                arr.swap(k, great);
                // `great` cannot underflow: k <= great and k >= less >= 1
                great -= 1;
                if cmp(&arr[k], &arr[p1]) == Ordering::Equal {
                    arr.swap(k, less);
                    less += 1;
                }
            }
            k += 1;
        }
    }

    if pivot_order == Ordering::Less && less < great {
        quicksort(arr, less, great, div, cmp);
    }
}

fn insertion_sort<T, F>(arr: &mut [T], left: usize, right: usize, cmp: &mut F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    for i in left + 1..=right {
        let mut j = i;
        while j > left && cmp(&arr[j], &arr[j - 1]) == Ordering::Less {
            arr.swap(j, j - 1);
            j -= 1;
        }
    }
}

/// Sort a whole vector with [`quicksort`] and return it.
pub fn sort_vec<T, F>(mut v: Vec<T>, mut cmp: F) -> Vec<T>
where
    F: FnMut(&T, &T) -> Ordering,
{
    if let Some(last) = v.len().checked_sub(1) {
        quicksort(&mut v, 0, last, 3, &mut cmp);
    }
    v
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn small_inputs() {
        assert_eq!(sort_vec(Vec::<i32>::new(), |a, b| a.cmp(b)), Vec::<i32>::new());
        assert_eq!(sort_vec(vec![0], |a, b| a.cmp(b)), vec![0]);
        assert_eq!(sort_vec(vec![1, 0], |a, b| a.cmp(b)), vec![0, 1]);
        assert_eq!(sort_vec(vec![5, 3, 2, 1, 4], |a, b| a.cmp(b)), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn hundred_shuffled() {
        let input = vec![
            43, 44, 17, 18, 19, 20, 21, 10, 11, 12, 0, 1, 45, 46, 47, 48, 49, 50, 33, 34, 35, 39,
            51, 52, 53, 54, 58, 9, 2, 3, 4, 5, 6, 7, 8, 13, 14, 15, 32, 40, 36, 37, 38, 41, 42, 55,
            56, 57, 59, 60, 61, 62, 63, 64, 65, 66, 67, 68, 69, 70, 71, 16, 22, 23, 24, 25, 26, 27,
            28, 29, 30, 31, 72, 73, 74, 75, 76, 77, 78, 79, 80, 81, 82, 83, 84, 95, 96, 97, 98, 99,
            88, 85, 86, 87, 92, 93, 94, 89, 90, 91,
        ];
        let sorted = sort_vec(input, |a, b| a.cmp(b));
        assert_eq!(sorted, (0..100).collect::<Vec<_>>());
    }

    #[test]
    fn many_duplicates_and_descending() {
        let input: Vec<u8> = (0..200).map(|i| (i % 5) as u8).collect();
        let mut expected = input.clone();
        expected.sort();
        assert_eq!(sort_vec(input, |a, b| a.cmp(b)), expected);

        let desc: Vec<i32> = (0..64).collect();
        let sorted = sort_vec(desc, |a, b| b.cmp(a));
        assert_eq!(sorted, (0..64).rev().collect::<Vec<_>>());
    }

    #[test]
    fn partial_range_only() {
        let mut v = vec![9, 8, 7, 6, 5];
        quicksort(&mut v, 1, 3, 3, &mut |a: &i32, b: &i32| a.cmp(b));
        assert_eq!(v, vec![9, 6, 7, 8, 5]);
    }
}
