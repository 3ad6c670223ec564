//! Input and output checks for interval partitioning.
//!
//! The scheduler itself never rejects input. These checks let callers
//! inspect what it was given and what it produced. Detects:
//! - Tasks fed out of start order (breaks machine-count optimality)
//! - Malformed tasks (`start >= end`)
//! - Overlapping tasks on the same machine
//!
//! # Reference
//! Kleinberg & Tardos (2005), "Algorithm Design", Ch. 4.1

use crate::models::{Machine, Task};

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// A task starts earlier than the one before it.
    OutOfOrder,
    /// A task has `start >= end`.
    MalformedTask,
    /// Two tasks on the same machine overlap.
    ConflictingAssignment,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Checks that tasks are in non-decreasing start order.
pub fn validate_order(tasks: &[Task]) -> ValidationResult {
    let errors: Vec<ValidationError> = tasks
        .windows(2)
        .enumerate()
        .filter(|(_, pair)| pair[1].start < pair[0].start)
        .map(|(i, pair)| {
            ValidationError::new(
                ValidationErrorKind::OutOfOrder,
                format!(
                    "Task {} at index {} starts before task {} at index {}",
                    pair[1],
                    i + 1,
                    pair[0],
                    i
                ),
            )
        })
        .collect();

    into_result(errors)
}

/// Reports tasks with `start >= end`.
///
/// Such tasks are still scheduled; this is informational.
pub fn validate_tasks(tasks: &[Task]) -> ValidationResult {
    let errors: Vec<ValidationError> = tasks
        .iter()
        .enumerate()
        .filter(|(_, t)| !t.is_well_formed())
        .map(|(i, t)| {
            ValidationError::new(
                ValidationErrorKind::MalformedTask,
                format!("Task {t} at index {i} does not end after it starts"),
            )
        })
        .collect();

    into_result(errors)
}

/// Checks that no machine holds two overlapping tasks.
pub fn validate_partition(machines: &[Machine]) -> ValidationResult {
    let mut errors = Vec::new();

    for (m, machine) in machines.iter().enumerate() {
        let tasks = machine.tasks();
        for (i, a) in tasks.iter().enumerate() {
            for b in &tasks[i + 1..] {
                if a.overlaps(b) {
                    errors.push(ValidationError::new(
                        ValidationErrorKind::ConflictingAssignment,
                        format!("Machine {m}: task {a} overlaps task {b}"),
                    ));
                }
            }
        }
    }

    into_result(errors)
}

fn into_result(errors: Vec<ValidationError>) -> ValidationResult {
    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
