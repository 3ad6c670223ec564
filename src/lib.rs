//! Comparator-driven binary heap and greedy interval partitioning.
//!
//! Provides a priority queue whose ordering is injected at construction,
//! and a scheduler that drains a start-ordered queue to split tasks across
//! the fewest non-conflicting machines.
//!
//! # Modules
//!
//! - **`heap`**: `PriorityHeap`, `Comparator` strategies, `EmptyHeapError`,
//!   `heap_sort`
//! - **`models`**: Domain types — `Task`, `Machine`, `ByStart`, `ConflictCheck`
//! - **`scheduler`**: `IntervalScheduler`, `PartitionKpi`, `overlap_depth`
//! - **`validation`**: Start-order, malformed-task, and conflict checks
//! - **`render`**: DOT (heap tree) and TikZ (partition) text output
//! - **`generate`**: Random demo tasks and values
//!
//! # Example
//!
//! ```
//! use u_partition::models::Task;
//! use u_partition::scheduler::{IntervalScheduler, PartitionKpi};
//!
//! let tasks = vec![Task::new(1, 3), Task::new(2, 5), Task::new(3, 7)];
//! let scheduler = IntervalScheduler::partition(tasks);
//! let kpi = PartitionKpi::calculate(scheduler.machines());
//! assert_eq!(kpi.machine_count, 2);
//! assert_eq!(kpi.is_optimal(), Some(true));
//! ```
//!
//! # Thread Safety
//!
//! None of the types synchronize internally. Share them across threads
//! only behind exclusive ownership.
//!
//! # References
//!
//! - Cormen et al. (2009), "Introduction to Algorithms", Ch. 6 (Heaps)
//! - Kleinberg & Tardos (2005), "Algorithm Design", Ch. 4.1

pub mod generate;
pub mod heap;
pub mod models;
pub mod render;
pub mod scheduler;
pub mod validation;
