//! Task (interval) model.
//!
//! A task occupies the half-open time interval `[start, end)`. Two tasks
//! overlap iff `s1 < e2 && s2 < e1`, so a task ending at `t` never
//! conflicts with one starting at `t`.
//!
//! `start < end` is assumed but never checked. Inverted or zero-length
//! tasks flow through [`Task::overlaps`] by its literal definition.

use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::heap::Comparator;

/// A task to be partitioned onto machines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Task {
    /// Start time.
    pub start: i64,
    /// End time (exclusive).
    pub end: i64,
}

impl Task {
    /// Creates a task over `[start, end)`.
    pub fn new(start: i64, end: i64) -> Self {
        Self { start, end }
    }

    /// Length of the interval. Negative for inverted tasks.
    #[inline]
    pub fn duration(&self) -> i64 {
        self.end - self.start
    }

    /// Whether `start < end`.
    #[inline]
    pub fn is_well_formed(&self) -> bool {
        self.start < self.end
    }

    /// Whether the two intervals overlap.
    #[inline]
    pub fn overlaps(&self, other: &Task) -> bool {
        self.start < other.end && other.start < self.end
    }

    /// Whether time `t` lies within `[start, end)`.
    #[inline]
    pub fn contains(&self, t: i64) -> bool {
        self.start <= t && t < self.end
    }
}

impl From<(i64, i64)> for Task {
    fn from((start, end): (i64, i64)) -> Self {
        Self::new(start, end)
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.start, self.end)
    }
}

/// Orders tasks by start time only. Ties (equal start) are unordered.
///
/// This is the heap order the scheduler expects its input drained in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ByStart;

impl Comparator<Task> for ByStart {
    #[inline]
    fn compare(&self, a: &Task, b: &Task) -> Ordering {
        a.start.cmp(&b.start)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_task_basics() {
        let t = Task::new(2, 5);
        assert_eq!(t.duration(), 3);
        assert!(t.is_well_formed());
        assert!(t.contains(2));
        assert!(t.contains(4));
        assert!(!t.contains(5));
        assert_eq!(t.to_string(), "(2, 5)");
        assert_eq!(Task::from((2, 5)), t);
    }

    #[test]
    fn test_overlap() {
        let a = Task::new(1, 3);
        assert!(a.overlaps(&Task::new(2, 5)));
        assert!(Task::new(2, 5).overlaps(&a));
        assert!(a.overlaps(&Task::new(0, 10)));
        // Touching endpoints do not overlap
        assert!(!a.overlaps(&Task::new(3, 4)));
        assert!(!Task::new(3, 4).overlaps(&a));
        assert!(!a.overlaps(&Task::new(5, 6)));
    }

    #[test]
    fn test_malformed_overlap_is_literal() {
        // Zero-length task strictly inside another: 2 < 3 && 1 < 2
        let point = Task::new(2, 2);
        assert!(!point.is_well_formed());
        assert!(point.overlaps(&Task::new(1, 3)));
        // At the other's start: 1 < 3 holds but 1 < 1 fails
        assert!(!Task::new(1, 1).overlaps(&Task::new(1, 3)));
        let inverted = Task::new(5, 2);
        assert_eq!(inverted.duration(), -3);
        assert!(inverted.overlaps(&Task::new(0, 10)));
        assert!(!inverted.overlaps(&Task::new(3, 4)));
    }

    #[test]
    fn test_by_start() {
        let early_long = Task::new(1, 9);
        let late_short = Task::new(2, 3);
        assert_eq!(ByStart.compare(&early_long, &late_short), Ordering::Less);
        assert_eq!(
            ByStart.compare(&Task::new(1, 3), &Task::new(1, 4)),
            Ordering::Equal
        );
    }

    #[test]
    fn test_task_serde() {
        let t = Task::new(4, 7);
        let json = serde_json::to_string(&t).unwrap();
        assert_eq!(json, r#"{"start":4,"end":7}"#);
        let back: Task = serde_json::from_str(&json).unwrap();
        assert_eq!(back, t);
    }
}
