//! Greedy interval partitioning.
//!
//! # Algorithm
//!
//! 1. Drain tasks from a [`PriorityHeap`] ordered [`ByStart`].
//! 2. Place each task on the first machine (in creation order) it does
//!    not conflict with.
//! 3. If every machine conflicts, open a new one.
//!
//! # Optimality
//! With non-decreasing start times a new machine is opened only when the
//! incoming task overlaps the last task of every existing machine. Those
//! tasks all started no later than it and are still running at its start,
//! so `machines + 1` tasks share that instant. The machine count therefore
//! equals the overlap depth, which lower-bounds any valid partition.
//! The bound holds for well-formed tasks; malformed ones are placed by the
//! literal overlap test and carry no optimality guarantee.
//!
//! # Complexity
//! O(n * m) with [`ConflictCheck::LastTask`], O(n^2) worst case with
//! [`ConflictCheck::FullScan`], where n = tasks and m = machines.
//!
//! # Reference
//! Kleinberg & Tardos (2005), "Algorithm Design", Ch. 4.1: Interval Partitioning

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::heap::{Comparator, PriorityHeap};
use crate::models::{ByStart, ConflictCheck, Machine, Task};

/// Scheduler configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchedulerConfig {
    /// How each machine is checked for conflicts.
    pub conflict_check: ConflictCheck,
}

impl SchedulerConfig {
    /// Creates the default configuration (full scan).
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the conflict check strategy.
    pub fn with_conflict_check(mut self, conflict_check: ConflictCheck) -> Self {
        self.conflict_check = conflict_check;
        self
    }
}

/// Greedy interval-partitioning scheduler.
///
/// Callers must feed tasks in non-decreasing start order for the machine
/// count to be minimal; this is not verified. Every partition produced
/// under [`ConflictCheck::FullScan`] is conflict-free regardless of order;
/// under [`ConflictCheck::LastTask`] only for start-ordered input.
///
/// # Example
///
/// ```
/// use u_partition::heap::PriorityHeap;
/// use u_partition::models::{ByStart, Task};
/// use u_partition::scheduler::IntervalScheduler;
///
/// let mut tasks = PriorityHeap::with_comparator(ByStart);
/// for (s, e) in [(1, 3), (1, 4), (2, 5), (6, 9), (3, 7), (4, 7), (7, 8)] {
///     tasks.insert(Task::new(s, e));
/// }
///
/// let mut scheduler = IntervalScheduler::new();
/// scheduler.drain_heap(&mut tasks);
/// assert_eq!(scheduler.machine_count(), 3);
/// ```
#[derive(Debug, Clone, Default)]
pub struct IntervalScheduler {
    machines: Vec<Machine>,
    config: SchedulerConfig,
}

impl IntervalScheduler {
    /// Creates a scheduler with no machines.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a scheduler with the given configuration.
    pub fn with_config(config: SchedulerConfig) -> Self {
        Self {
            machines: Vec::new(),
            config,
        }
    }

    /// Sets the conflict check strategy.
    pub fn with_conflict_check(mut self, conflict_check: ConflictCheck) -> Self {
        self.config.conflict_check = conflict_check;
        self
    }

    /// Partitions `tasks` in one shot.
    ///
    /// Bulk-builds a start-ordered heap over `tasks` (O(n)) and drains it.
    pub fn partition(tasks: Vec<Task>) -> Self {
        let mut scheduler = Self::new();
        let mut heap = PriorityHeap::build_from(tasks, ByStart);
        scheduler.drain_heap(&mut heap);
        scheduler
    }

    /// Assigns `task` to the first non-conflicting machine, opening a new
    /// one if none qualifies. Returns the index of the machine used.
    pub fn schedule(&mut self, task: Task) -> usize {
        let check = self.config.conflict_check;
        if let Some(index) = self
            .machines
            .iter()
            .position(|m| !m.conflicts(&task, check))
        {
            self.machines[index].add(task);
            trace!(%task, machine = index, "task placed");
            return index;
        }

        self.machines.push(Machine::with_task(task));
        let index = self.machines.len() - 1;
        debug!(%task, machine = index, "no free machine, opened new one");
        index
    }

    /// Shorthand for `schedule(Task::new(start, end))`.
    pub fn schedule_interval(&mut self, start: i64, end: i64) -> usize {
        self.schedule(Task::new(start, end))
    }

    /// Drains `heap` in priority order, scheduling every task.
    ///
    /// The heap should order tasks by start time (e.g. [`ByStart`]).
    pub fn drain_heap<C: Comparator<Task>>(&mut self, heap: &mut PriorityHeap<Task, C>) {
        for task in heap.drain_sorted() {
            self.schedule(task);
        }
    }

    /// Machines in creation order.
    pub fn machines(&self) -> &[Machine] {
        &self.machines
    }

    /// Number of machines opened.
    pub fn machine_count(&self) -> usize {
        self.machines.len()
    }

    /// Number of tasks scheduled.
    pub fn task_count(&self) -> usize {
        self.machines.iter().map(Machine::task_count).sum()
    }

    /// The active configuration.
    pub fn config(&self) -> &SchedulerConfig {
        &self.config
    }

    /// Consumes the scheduler, returning its machines.
    pub fn into_machines(self) -> Vec<Machine> {
        self.machines
    }
}
