//! Numeric and boolean folds behind the terminal operations of
//! [`SequenceExt`](crate::sequence::SequenceExt).
//!
//! Each fold has a fixed value for the empty input: `sum = 0`, `product = 1`,
//! `max = -inf`, `min = +inf`, `average = 0`, `and = true`, `or = false`.

use core::ops::{Add, Mul};

use num_traits::{One, ToPrimitive, Zero};

/// Types with identities for `max`/`min` over an empty input.
///
/// Floats use the infinities. Integers have none, so they use their extreme
/// values, which act the same way under comparison.
pub trait Unbounded: PartialOrd {
    /// Larger than or equal to every value: the result of `min` on nothing.
    fn upper() -> Self;
    /// Smaller than or equal to every value: the result of `max` on nothing.
    fn lower() -> Self;
}

macro_rules! impl_unbounded_float {
    ($($t:ty),*) => {$(
        impl Unbounded for $t {
            #[inline]
            fn upper() -> Self { <$t>::INFINITY }
            #[inline]
            fn lower() -> Self { <$t>::NEG_INFINITY }
        }
    )*};
}

macro_rules! impl_unbounded_int {
    ($($t:ty),*) => {$(
        impl Unbounded for $t {
            #[inline]
            fn upper() -> Self { <$t>::MAX }
            #[inline]
            fn lower() -> Self { <$t>::MIN }
        }
    )*};
}

impl_unbounded_float!(f32, f64);
impl_unbounded_int!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

pub fn sum<I>(iter: I) -> I::Item
where
    I: Iterator,
    I::Item: Zero + Add<Output = I::Item>,
{
    iter.fold(<I::Item as Zero>::zero(), |acc, v| acc + v)
}

pub fn product<I>(iter: I) -> I::Item
where
    I: Iterator,
    I::Item: One + Mul<Output = I::Item>,
{
    iter.fold(<I::Item as One>::one(), |acc, v| acc * v)
}

/// Largest element; NaN-like incomparable values never replace the current maximum.
pub fn max<I>(iter: I) -> I::Item
where
    I: Iterator,
    I::Item: Unbounded,
{
    iter.fold(<I::Item as Unbounded>::lower(), |m, v| if v > m { v } else { m })
}

pub fn min<I>(iter: I) -> I::Item
where
    I: Iterator,
    I::Item: Unbounded,
{
    iter.fold(<I::Item as Unbounded>::upper(), |m, v| if v < m { v } else { m })
}

/// Arithmetic mean as `f64`; `0.0` for an empty input.
///
/// Values that do not fit an `f64` count as NaN.
pub fn average<I>(iter: I) -> f64
where
    I: Iterator,
    I::Item: ToPrimitive,
{
    average_of(iter.map(|v| v.to_f64().unwrap_or(f64::NAN)))
}

pub fn average_of<I>(iter: I) -> f64
where
    I: Iterator<Item = f64>,
{
    let (total, count) = iter.fold((0.0, 0usize), |(t, c), v| (t + v, c + 1));
    if count > 0 { total / count as f64 } else { 0.0 }
}

pub fn and<I: Iterator<Item = bool>>(mut iter: I) -> bool {
    iter.all(|b| b)
}

pub fn or<I: Iterator<Item = bool>>(mut iter: I) -> bool {
    iter.any(|b| b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_identities() {
        let none = || std::iter::empty::<f64>();
        assert_eq!(sum(none()), 0.0);
        assert_eq!(product(none()), 1.0);
        assert_eq!(max(none()), f64::NEG_INFINITY);
        assert_eq!(min(none()), f64::INFINITY);
        assert_eq!(average(none()), 0.0);
        assert!(and(std::iter::empty()));
        assert!(!or(std::iter::empty()));
    }

    #[test]
    fn integer_folds() {
        assert_eq!(sum([1, 3].into_iter()), 4);
        assert_eq!(product([3, 2, 0, 6, 8].into_iter()), 0);
        assert_eq!(max([2, 4, 0, 6, 9].into_iter()), 9);
        assert_eq!(min([3, 1, 9, 4, 7].into_iter()), 1);
        assert_eq!(max(std::iter::empty::<i32>()), i32::MIN);
        assert_eq!(average([1u8, 5].into_iter()), 3.0);
    }
}
