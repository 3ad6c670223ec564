//! Machine model.
//!
//! A machine holds the tasks assigned to it, in assignment order. When
//! the scheduler is fed tasks by non-decreasing start, that order is also
//! non-decreasing by start and the last well-formed task has the latest end.

use serde::{Deserialize, Serialize};

use super::Task;

/// How a machine checks an incoming task for conflicts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConflictCheck {
    /// Compare against every task on the machine. Exact under any input order.
    #[default]
    FullScan,
    /// Compare against the most recently assigned well-formed task only.
    ///
    /// Malformed incoming tasks (`start >= end`) still get a full scan, and
    /// malformed tasks already on the machine are skipped when locating the
    /// latest one. Equivalent to `FullScan` when tasks arrive by
    /// non-decreasing start; may miss conflicts otherwise.
    LastTask,
}

/// A machine and its assigned tasks.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Machine {
    /// Assigned tasks, in assignment order.
    pub tasks: Vec<Task>,
}

impl Machine {
    /// Creates an idle machine.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a machine whose first task is `task`.
    pub fn with_task(task: Task) -> Self {
        Self { tasks: vec![task] }
    }

    /// Whether `task` overlaps anything already on this machine.
    pub fn conflicts(&self, task: &Task, check: ConflictCheck) -> bool {
        match check {
            ConflictCheck::FullScan => self.tasks.iter().any(|t| t.overlaps(task)),
            ConflictCheck::LastTask if !task.is_well_formed() => {
                self.conflicts(task, ConflictCheck::FullScan)
            }
            // A stored malformed task never overlaps a later-starting one,
            // but it must not hide the well-formed task below it.
            ConflictCheck::LastTask => self
                .tasks
                .iter()
                .rev()
                .find(|t| t.is_well_formed())
                .is_some_and(|t| t.overlaps(task)),
        }
    }

    /// Appends a task. Does not check for conflicts.
    pub fn add(&mut self, task: Task) {
        self.tasks.push(task);
    }

    /// Most recently assigned task.
    pub fn last(&self) -> Option<&Task> {
        self.tasks.last()
    }

    /// Assigned tasks, in assignment order.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Number of assigned tasks.
    pub fn task_count(&self) -> usize {
        self.tasks.len()
    }

    /// Latest end time across assigned tasks (0 when idle).
    pub fn finish_time(&self) -> i64 {
        self.tasks.iter().map(|t| t.end).max().unwrap_or(0)
    }

    /// Sum of task durations.
    pub fn busy_time(&self) -> i64 {
        self.tasks.iter().map(Task::duration).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_machine() -> Machine {
        let mut m = Machine::with_task(Task::new(1, 3));
        m.add(Task::new(3, 7));
        m
    }

    #[test]
    fn test_machine_accessors() {
        let m = sample_machine();
        assert_eq!(m.task_count(), 2);
        assert_eq!(m.last(), Some(&Task::new(3, 7)));
        assert_eq!(m.finish_time(), 7);
        assert_eq!(m.busy_time(), 6);
        assert_eq!(m.tasks(), &[Task::new(1, 3), Task::new(3, 7)]);
    }

    #[test]
    fn test_idle_machine() {
        let m = Machine::new();
        assert!(m.last().is_none());
        assert_eq!(m.finish_time(), 0);
        assert!(!m.conflicts(&Task::new(0, 1), ConflictCheck::FullScan));
        assert!(!m.conflicts(&Task::new(0, 1), ConflictCheck::LastTask));
    }

    #[test]
    fn test_conflict_in_order() {
        let m = sample_machine();
        for check in [ConflictCheck::FullScan, ConflictCheck::LastTask] {
            assert!(m.conflicts(&Task::new(6, 8), check));
            assert!(!m.conflicts(&Task::new(7, 8), check));
        }
    }

    #[test]
    fn test_last_task_misses_earlier_conflict() {
        // Out of order: overlaps (1,3) but not (3,7)
        let m = sample_machine();
        let early = Task::new(0, 2);
        assert!(m.conflicts(&early, ConflictCheck::FullScan));
        assert!(!m.conflicts(&early, ConflictCheck::LastTask));
    }

    #[test]
    fn test_last_task_skips_stored_malformed() {
        // (2,1) sits on top of (1,10) but (3,4) still conflicts with (1,10)
        let mut m = Machine::with_task(Task::new(1, 10));
        m.add(Task::new(2, 1));
        assert!(m.conflicts(&Task::new(3, 4), ConflictCheck::LastTask));
        assert!(!m.conflicts(&Task::new(10, 12), ConflictCheck::LastTask));
    }

    #[test]
    fn test_last_task_scans_for_malformed_incoming() {
        // Zero-length (2,2) overlaps (1,3) but not the latest task (3,7)
        let m = sample_machine();
        let point = Task::new(2, 2);
        assert!(m.conflicts(&point, ConflictCheck::FullScan));
        assert!(m.conflicts(&point, ConflictCheck::LastTask));
    }

    #[test]
    fn test_machine_serde() {
        let m = sample_machine();
        let json = serde_json::to_string(&m).unwrap();
        let back: Machine = serde_json::from_str(&json).unwrap();
        assert_eq!(back, m);

        let check: ConflictCheck = serde_json::from_str(r#""LastTask""#).unwrap();
        assert_eq!(check, ConflictCheck::LastTask);
    }
}
