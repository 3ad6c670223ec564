//! Array-backed binary min-heap.
//!
//! # Layout
//! The backing `Vec` is read as a complete binary tree: the children of
//! index `i` live at `2i + 1` and `2i + 2`, the parent at `(i - 1) / 2`.
//!
//! # Invariant
//! For every non-root index `i`, `compare(data[parent(i)], data[i])` is
//! never `Greater`. Equal elements come out in unspecified order.

use std::fmt::Debug;
use std::iter::FusedIterator;

use tracing::debug;

use super::{Comparator, EmptyHeapError, NaturalOrder};

#[inline]
fn parent_index(index: usize) -> usize {
    (index - 1) / 2
}

#[inline]
fn left_child_index(index: usize) -> usize {
    2 * index + 1
}

#[inline]
fn right_child_index(index: usize) -> usize {
    2 * index + 2
}

/// A binary min-heap ordered by an injected comparator.
///
/// The comparator is stored for the lifetime of the heap. Without one,
/// [`PriorityHeap::new`] uses the natural order of `T`.
///
/// # Example
///
/// ```
/// use u_partition::heap::PriorityHeap;
///
/// let mut heap = PriorityHeap::new();
/// for v in [7, 4, 6, 3, 2, 5, 1, 8] {
///     heap.insert(v);
/// }
/// assert_eq!(heap.count(), 8);
///
/// let drained: Vec<i32> = heap.drain_sorted().collect();
/// assert_eq!(drained, vec![1, 2, 3, 4, 5, 6, 7, 8]);
/// assert!(heap.extract_min().is_err());
/// ```
#[derive(Clone)]
pub struct PriorityHeap<T, C = NaturalOrder> {
    data: Vec<T>,
    comparator: C,
}

impl<T: Ord> PriorityHeap<T> {
    /// Creates an empty heap ordered by `T`'s natural order.
    pub fn new() -> Self {
        Self::with_comparator(NaturalOrder)
    }
}

impl<T: Ord> Default for PriorityHeap<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Ord> From<Vec<T>> for PriorityHeap<T> {
    /// Bulk-builds a natural-order heap in O(n), reusing the vector's storage.
    fn from(data: Vec<T>) -> Self {
        Self::build_from(data, NaturalOrder)
    }
}

impl<T, C> PriorityHeap<T, C> {
    /// Creates an empty heap with the given comparator.
    pub fn with_comparator(comparator: C) -> Self {
        Self {
            data: Vec::new(),
            comparator,
        }
    }

    /// Creates an empty heap with room for `capacity` elements.
    pub fn with_capacity(capacity: usize, comparator: C) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
            comparator,
        }
    }

    /// Number of elements.
    #[inline]
    pub fn count(&self) -> usize {
        self.data.len()
    }

    /// Whether the heap holds no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// The minimum element, if any, without removing it.
    pub fn peek(&self) -> Option<&T> {
        self.data.first()
    }

    /// The backing storage in heap (tree) order.
    ///
    /// Read-only: renderers and invariant checks walk this by index.
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// The comparator this heap was built with.
    pub fn comparator(&self) -> &C {
        &self.comparator
    }

    /// Consumes the heap and returns its storage in heap order.
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }
}

impl<T, C: Comparator<T>> PriorityHeap<T, C> {
    /// Builds a heap that adopts `data` as its storage.
    ///
    /// Runs bottom-up heapification: sift-down from the last parent
    /// (`len / 2 - 1`) to the root. O(n) overall, versus O(n log n) for
    /// inserting each element.
    ///
    /// # Example
    /// ```
    /// use u_partition::heap::PriorityHeap;
    ///
    /// let heap = PriorityHeap::build_from(vec![5, 3, 8, 1], |a: &i32, b: &i32| a.cmp(b));
    /// assert_eq!(heap.peek(), Some(&1));
    /// assert!(heap.is_heap());
    /// ```
    pub fn build_from(data: Vec<T>, comparator: C) -> Self {
        let mut heap = Self { data, comparator };
        if heap.data.is_empty() {
            return heap;
        }
        for index in (0..heap.data.len() / 2).rev() {
            heap.sift_down(index);
        }
        debug!(count = heap.data.len(), "heap built from existing storage");
        heap
    }

    /// Inserts a value. O(log n).
    pub fn insert(&mut self, value: T) {
        self.data.push(value);
        self.sift_up(self.data.len() - 1);
    }

    /// Removes and returns the minimum element. O(log n).
    ///
    /// # Errors
    /// [`EmptyHeapError`] if the heap is empty; the heap is left unchanged.
    pub fn extract_min(&mut self) -> Result<T, EmptyHeapError> {
        if self.data.is_empty() {
            return Err(EmptyHeapError);
        }
        // Last element moves into the root slot
        let min = self.data.swap_remove(0);
        self.sift_down(0);
        Ok(min)
    }

    /// Extracts elements in priority order until the heap is empty.
    ///
    /// Dropping the iterator early leaves the remaining elements in the heap.
    pub fn drain_sorted(&mut self) -> DrainSorted<'_, T, C> {
        DrainSorted { heap: self }
    }

    /// Consumes the heap, returning its elements in priority order.
    pub fn into_sorted_vec(mut self) -> Vec<T> {
        let mut sorted = Vec::with_capacity(self.data.len());
        while let Ok(value) = self.extract_min() {
            sorted.push(value);
        }
        sorted
    }

    /// Checks the heap property over the whole backing storage.
    pub fn is_heap(&self) -> bool {
        (1..self.data.len()).all(|i| {
            self.comparator
                .compare(&self.data[parent_index(i)], &self.data[i])
                .is_le()
        })
    }

    fn sift_up(&mut self, mut index: usize) {
        while index > 0 {
            let parent = parent_index(index);
            if self
                .comparator
                .compare(&self.data[index], &self.data[parent])
                .is_ge()
            {
                break;
            }
            self.data.swap(index, parent);
            index = parent;
        }
    }

    fn sift_down(&mut self, mut index: usize) {
        let len = self.data.len();
        loop {
            let left = left_child_index(index);
            if left >= len {
                break;
            }

            let right = right_child_index(index);
            let child = if right < len
                && self
                    .comparator
                    .compare(&self.data[right], &self.data[left])
                    .is_lt()
            {
                right
            } else {
                left
            };

            if self
                .comparator
                .compare(&self.data[index], &self.data[child])
                .is_le()
            {
                break;
            }
            self.data.swap(index, child);
            index = child;
        }
    }
}

impl<T, C: Comparator<T>> Extend<T> for PriorityHeap<T, C> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        self.data.reserve(iter.size_hint().0);
        for value in iter {
            self.insert(value);
        }
    }
}

impl<T: Debug, C> Debug for PriorityHeap<T, C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PriorityHeap")
            .field("data", &self.data)
            .finish_non_exhaustive()
    }
}

/// Draining iterator returned by [`PriorityHeap::drain_sorted`].
pub struct DrainSorted<'a, T, C: Comparator<T>> {
    heap: &'a mut PriorityHeap<T, C>,
}

impl<T, C: Comparator<T>> Iterator for DrainSorted<'_, T, C> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.heap.extract_min().ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.heap.count();
        (len, Some(len))
    }
}

impl<T, C: Comparator<T>> ExactSizeIterator for DrainSorted<'_, T, C> {}

impl<T, C: Comparator<T>> FusedIterator for DrainSorted<'_, T, C> {}

/// Sorts a vector in non-decreasing natural order via bulk build + drain.
///
/// Not stable.
pub fn heap_sort<T: Ord>(data: Vec<T>) -> Vec<T> {
    PriorityHeap::from(data).into_sorted_vec()
}
