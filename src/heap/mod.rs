//! Comparator-driven binary min-heap.
//!
//! Provides an array-backed priority queue whose ordering is injected at
//! construction as a [`Comparator`] strategy rather than fixed by the
//! element type.
//!
//! # Complexity
//!
//! | Operation | Cost |
//! |-----------|------|
//! | `insert` | O(log n) |
//! | `extract_min` | O(log n) |
//! | `peek` / `count` | O(1) |
//! | `build_from` | O(n) |
//!
//! # Usage
//!
//! ```
//! use u_partition::heap::{PriorityHeap, Reversed, NaturalOrder};
//!
//! let mut max_first = PriorityHeap::with_comparator(Reversed(NaturalOrder));
//! max_first.extend([3, 9, 1]);
//! assert_eq!(max_first.extract_min(), Ok(9));
//! ```
//!
//! # References
//!
//! - Williams (1964), "Algorithm 232: Heapsort"
//! - Floyd (1964), "Algorithm 245: Treesort 3" (bottom-up heap construction)
//! - Cormen et al. (2009), "Introduction to Algorithms", Ch. 6

mod binary;
mod compare;
mod error;

pub use binary::{heap_sort, DrainSorted, PriorityHeap};
pub use compare::{ByKey, Comparator, NaturalOrder, Reversed};
pub use error::EmptyHeapError;
