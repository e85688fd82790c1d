//! The total order a [`Tree`][crate::Tree] sorts its elements by.
//!
//! # Examples
//!
//! ```
//! use std::cmp::Ordering;
//!
//! use plain_bst::{Comparator, NaturalOrder};
//!
//! assert_eq!(NaturalOrder.compare(&1, &2), Ordering::Less);
//!
//! // Closures are comparators too.
//! let descending = |a: &i32, b: &i32| b.cmp(a);
//! assert_eq!(descending.compare(&1, &2), Ordering::Greater);
//! ```

use std::cmp::Ordering;

/// Compares two elements. Implementations must be deterministic, free of side effects and
/// describe a total order, otherwise the tree can't keep its elements in order.
pub trait Comparator<T: ?Sized> {
    /// Returns how `a` is ordered relative to `b`.
    fn compare(&self, a: &T, b: &T) -> Ordering;
}

/// Orders elements by their [`Ord`] implementation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct NaturalOrder;

impl<T> Comparator<T> for NaturalOrder
where
    T: Ord + ?Sized,
{
    fn compare(&self, a: &T, b: &T) -> Ordering {
        a.cmp(b)
    }
}

impl<T, F> Comparator<T> for F
where
    T: ?Sized,
    F: Fn(&T, &T) -> Ordering,
{
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self(a, b)
    }
}
