//! Ordering strategies for [`PriorityHeap`](super::PriorityHeap).
//!
//! A comparator is a total pre-order over `T`. `Less` means "closer to
//! the root", so the heap always yields the minimum under the comparator.

use std::cmp::Ordering;
use std::fmt::Debug;

/// A total-order comparison strategy.
///
/// Any closure `Fn(&T, &T) -> Ordering` is a comparator:
///
/// ```
/// use u_partition::heap::PriorityHeap;
///
/// let mut heap = PriorityHeap::with_comparator(|a: &i32, b: &i32| b.cmp(a));
/// heap.extend([7, 4, 6]);
/// assert_eq!(heap.extract_min(), Ok(7));
/// ```
pub trait Comparator<T: ?Sized> {
    /// Compares two elements. `Less` = `a` has higher priority than `b`.
    fn compare(&self, a: &T, b: &T) -> Ordering;
}

impl<T: ?Sized, F> Comparator<T> for F
where
    F: Fn(&T, &T) -> Ordering,
{
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self(a, b)
    }
}

/// Natural order of `T` (via [`Ord`]). Smallest element first.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NaturalOrder;

impl<T: Ord + ?Sized> Comparator<T> for NaturalOrder {
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        a.cmp(b)
    }
}

/// Inverts another comparator, turning the min-heap into a max-heap.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Reversed<C>(pub C);

impl<T: ?Sized, C: Comparator<T>> Comparator<T> for Reversed<C> {
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self.0.compare(b, a)
    }
}

/// Orders elements by a key extracted from each one.
///
/// # Example
/// ```
/// use u_partition::heap::{ByKey, PriorityHeap};
///
/// let mut heap = PriorityHeap::with_comparator(ByKey::new(|s: &&str| s.len()));
/// heap.extend(["ccc", "a", "bb"]);
/// assert_eq!(heap.extract_min(), Ok("a"));
/// ```
#[derive(Clone, Copy)]
pub struct ByKey<F> {
    key: F,
}

impl<F> ByKey<F> {
    /// Creates a key-based comparator.
    pub fn new(key: F) -> Self {
        Self { key }
    }
}

impl<T, K, F> Comparator<T> for ByKey<F>
where
    F: Fn(&T) -> K,
    K: Ord,
{
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        (self.key)(a).cmp(&(self.key)(b))
    }
}

impl<F> Debug for ByKey<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ByKey").finish_non_exhaustive()
    }
}
