//! Eager algorithms behind the terminal operations.

pub mod aggregate;
pub mod sort;

pub use aggregate::Unbounded;
pub use sort::{quicksort, sort_vec};
