//! Interval partitioning domain models.
//!
//! Provides the data types the scheduler consumes and produces.
//!
//! # Domain Mappings
//!
//! | u-partition | Classroom | Compute | Logistics |
//! |-------------|-----------|---------|-----------|
//! | Task | Lecture | Job | Delivery window |
//! | Machine | Room | Worker | Truck |

mod machine;
mod task;

pub use machine::{ConflictCheck, Machine};
pub use task::{ByStart, Task};
