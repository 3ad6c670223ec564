//! Partition quality metrics (KPIs).
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Machine count | Machines opened by the scheduler |
//! | Depth | Max number of tasks sharing one instant (lower bound) |
//! | Optimal | Machine count equals depth (undefined with malformed tasks) |
//! | Makespan | Latest end across all tasks |
//! | Utilization | Busy time / makespan, per machine |
//!
//! # Reference
//! Kleinberg & Tardos (2005), "Algorithm Design", Ch. 4.1 (depth lower bound)

use crate::models::{Machine, Task};

/// Maximum number of well-formed tasks that share a single instant.
///
/// Tasks are half-open, so one ending at `t` and one starting at `t` do
/// not count together. Tasks with `start >= end` are ignored, so for
/// input containing them this is not a lower bound on machine count.
///
/// O(n log n) sweep over start/end events.
pub fn overlap_depth(tasks: &[Task]) -> usize {
    // (time, delta): ends sort before starts at equal times
    let mut events: Vec<(i64, i32)> = Vec::with_capacity(tasks.len() * 2);
    for task in tasks.iter().filter(|t| t.is_well_formed()) {
        events.push((task.start, 1));
        events.push((task.end, -1));
    }
    events.sort_unstable();

    let mut current: i64 = 0;
    let mut depth: i64 = 0;
    for (_, delta) in events {
        current += i64::from(delta);
        depth = depth.max(current);
    }
    depth as usize
}

/// Partition performance indicators.
#[derive(Debug, Clone, PartialEq)]
pub struct PartitionKpi {
    /// Machines used.
    pub machine_count: usize,
    /// Tasks placed.
    pub task_count: usize,
    /// Overlap depth of the placed well-formed tasks.
    pub depth: usize,
    /// Placed tasks with `start >= end`.
    pub malformed_count: usize,
    /// Latest end time (0 when empty).
    pub makespan: i64,
    /// Busy time / makespan, indexed by machine.
    pub utilization_by_machine: Vec<f64>,
    /// Mean of `utilization_by_machine` (0.0 when empty).
    pub avg_utilization: f64,
}

impl PartitionKpi {
    /// Computes KPIs from a finished partition.
    pub fn calculate(machines: &[Machine]) -> Self {
        let tasks: Vec<Task> = machines
            .iter()
            .flat_map(|m| m.tasks().iter().copied())
            .collect();
        let makespan = machines.iter().map(Machine::finish_time).max().unwrap_or(0);

        let utilization_by_machine: Vec<f64> = if makespan <= 0 {
            vec![0.0; machines.len()]
        } else {
            machines
                .iter()
                .map(|m| m.busy_time() as f64 / makespan as f64)
                .collect()
        };

        let avg_utilization = if utilization_by_machine.is_empty() {
            0.0
        } else {
            utilization_by_machine.iter().sum::<f64>() / utilization_by_machine.len() as f64
        };

        Self {
            machine_count: machines.len(),
            task_count: tasks.len(),
            depth: overlap_depth(&tasks),
            malformed_count: tasks.iter().filter(|t| !t.is_well_formed()).count(),
            makespan,
            utilization_by_machine,
            avg_utilization,
        }
    }

    /// Whether the partition uses exactly as many machines as the depth.
    ///
    /// `None` when any placed task is malformed: the scheduler still puts
    /// those through the literal overlap test, but depth does not model it.
    pub fn is_optimal(&self) -> Option<bool> {
        if self.malformed_count > 0 {
            return None;
        }
        Some(self.machine_count == self.depth)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scheduler::IntervalScheduler;

    fn tasks(pairs: &[(i64, i64)]) -> Vec<Task> {
        pairs.iter().copied().map(Task::from).collect()
    }

    #[test]
    fn test_depth_example() {
        let t = tasks(&[(1, 3), (1, 4), (2, 5), (6, 9), (3, 7), (4, 7), (7, 8)]);
        assert_eq!(overlap_depth(&t), 3);
    }

    #[test]
    fn test_depth_touching_intervals() {
        assert_eq!(overlap_depth(&tasks(&[(1, 2), (2, 3), (3, 4)])), 1);
        assert_eq!(overlap_depth(&tasks(&[(1, 3), (1, 3), (1, 3)])), 3);
    }

    #[test]
    fn test_depth_ignores_malformed() {
        assert_eq!(overlap_depth(&tasks(&[(1, 5), (3, 3), (6, 2)])), 1);
        assert_eq!(overlap_depth(&[]), 0);
    }

    #[test]
    fn test_kpi_example() {
        let t = tasks(&[(1, 3), (1, 4), (2, 5), (6, 9), (3, 7), (4, 7), (7, 8)]);
        let scheduler = IntervalScheduler::partition(t);
        let kpi = PartitionKpi::calculate(scheduler.machines());

        assert_eq!(kpi.machine_count, 3);
        assert_eq!(kpi.task_count, 7);
        assert_eq!(kpi.depth, 3);
        assert_eq!(kpi.is_optimal(), Some(true));
        assert_eq!(kpi.makespan, 9);
        assert_eq!(kpi.utilization_by_machine.len(), 3);
        // Total busy time 2+3+3+3+4+3+1 = 19 over 3 machines * 9
        assert!((kpi.avg_utilization - 19.0 / 27.0).abs() < 1e-10);
    }

    #[test]
    fn test_kpi_single_machine() {
        let machines = vec![Machine {
            tasks: tasks(&[(0, 2), (2, 4)]),
        }];
        let kpi = PartitionKpi::calculate(&machines);
        assert_eq!(kpi.makespan, 4);
        assert!((kpi.utilization_by_machine[0] - 1.0).abs() < 1e-10);
        assert_eq!(kpi.is_optimal(), Some(true));
    }

    #[test]
    fn test_kpi_with_malformed_has_no_optimality() {
        // (3,3) overlaps (1,5) literally, forcing a second machine
        let scheduler = IntervalScheduler::partition(tasks(&[(1, 5), (3, 3)]));
        let kpi = PartitionKpi::calculate(scheduler.machines());
        assert_eq!(kpi.machine_count, 2);
        assert_eq!(kpi.depth, 1);
        assert_eq!(kpi.malformed_count, 1);
        assert_eq!(kpi.is_optimal(), None);
    }

    #[test]
    fn test_kpi_empty() {
        let kpi = PartitionKpi::calculate(&[]);
        assert_eq!(kpi.machine_count, 0);
        assert_eq!(kpi.depth, 0);
        assert_eq!(kpi.makespan, 0);
        assert_eq!(kpi.avg_utilization, 0.0);
        assert_eq!(kpi.is_optimal(), Some(true));
    }
}
