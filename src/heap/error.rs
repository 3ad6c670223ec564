use thiserror::Error;

/// Returned by [`PriorityHeap::extract_min`](super::PriorityHeap::extract_min)
/// when the heap holds no elements.
///
/// Signals caller misuse: check [`count`](super::PriorityHeap::count) or
/// use [`peek`](super::PriorityHeap::peek) before extracting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("cannot extract an element from an empty heap")]
pub struct EmptyHeapError;
