//! Random demo data.
//!
//! Produces task sets for the scheduler and value sets for heapsort.
//! Callers supply the RNG, so seeded generators give reproducible data.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::models::Task;

/// Random task generator.
///
/// Each task starts uniformly in `1..=max_start` and runs for a duration
/// uniform in `1..=max_running`, so every generated task is well-formed.
///
/// # Example
///
/// ```
/// use rand::SeedableRng;
/// use rand::rngs::SmallRng;
/// use u_partition::generate::TaskGenerator;
///
/// let mut rng = SmallRng::seed_from_u64(1);
/// let tasks = TaskGenerator::default().generate(&mut rng);
/// assert_eq!(tasks.len(), 16);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskGenerator {
    /// Number of tasks to produce.
    pub count: usize,
    /// Latest possible start time (inclusive, at least 1).
    pub max_start: i64,
    /// Longest possible duration (inclusive, at least 1).
    pub max_running: i64,
}

impl Default for TaskGenerator {
    fn default() -> Self {
        Self {
            count: 16,
            max_start: 10,
            max_running: 6,
        }
    }
}

impl TaskGenerator {
    /// Creates a generator with the given bounds.
    ///
    /// Bounds below 1 are raised to 1.
    pub fn new(count: usize, max_start: i64, max_running: i64) -> Self {
        Self {
            count,
            max_start: max_start.max(1),
            max_running: max_running.max(1),
        }
    }

    /// Produces one task.
    ///
    /// Near `i64::MAX` the start range shrinks so that `end` stays
    /// representable.
    pub fn task<R: Rng>(&self, rng: &mut R) -> Task {
        let running = rng.random_range(1..=self.max_running.clamp(1, i64::MAX - 1));
        let start = rng.random_range(1..=self.max_start.clamp(1, i64::MAX - running));
        Task::new(start, start + running)
    }

    /// Produces `count` tasks.
    pub fn generate<R: Rng>(&self, rng: &mut R) -> Vec<Task> {
        (0..self.count).map(|_| self.task(rng)).collect()
    }
}

/// Produces `n` uniformly random non-negative values.
pub fn random_values<R: Rng>(rng: &mut R, n: usize) -> Vec<u32> {
    (0..n).map(|_| rng.random_range(0..=i32::MAX as u32)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::heap::heap_sort;
    use crate::scheduler::{overlap_depth, IntervalScheduler};
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    #[test]
    fn test_generated_bounds() {
        let mut rng = SmallRng::seed_from_u64(42);
        let generator = TaskGenerator::new(200, 10, 6);
        for task in generator.generate(&mut rng) {
            assert!((1..=10).contains(&task.start));
            assert!((1..=6).contains(&task.duration()));
            assert!(task.is_well_formed());
        }
    }

    #[test]
    fn test_seeded_determinism() {
        let generator = TaskGenerator::default();
        let a = generator.generate(&mut SmallRng::seed_from_u64(9));
        let b = generator.generate(&mut SmallRng::seed_from_u64(9));
        assert_eq!(a, b);
    }

    #[test]
    fn test_bounds_clamped() {
        let generator = TaskGenerator::new(5, 0, -3);
        assert_eq!(generator.max_start, 1);
        assert_eq!(generator.max_running, 1);
        let mut rng = SmallRng::seed_from_u64(0);
        assert!(generator
            .generate(&mut rng)
            .iter()
            .all(|t| *t == Task::new(1, 2)));
    }

    #[test]
    fn test_extreme_bounds_stay_well_formed() {
        let generator = TaskGenerator {
            count: 200,
            max_start: i64::MAX,
            max_running: i64::MAX,
        };
        let mut rng = SmallRng::seed_from_u64(11);
        for task in generator.generate(&mut rng) {
            assert!(task.start >= 1);
            assert!(task.is_well_formed());
        }
    }

    #[test]
    fn test_generated_tasks_partition_optimally() {
        let mut rng = SmallRng::seed_from_u64(3);
        for _ in 0..20 {
            let tasks = TaskGenerator::default().generate(&mut rng);
            let depth = overlap_depth(&tasks);
            let scheduler = IntervalScheduler::partition(tasks);
            assert_eq!(scheduler.machine_count(), depth);
        }
    }

    #[test]
    fn test_random_values_heap_sort() {
        let mut rng = SmallRng::seed_from_u64(5);
        let values = random_values(&mut rng, 1000);
        assert_eq!(values.len(), 1000);
        assert!(values.iter().all(|&v| v <= i32::MAX as u32));

        let sorted = heap_sort(values);
        assert!(sorted.windows(2).all(|w| w[0] <= w[1]));
    }
}
