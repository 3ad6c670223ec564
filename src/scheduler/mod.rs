//! Greedy interval partitioning and partition metrics.
//!
//! # Algorithm
//!
//! `IntervalScheduler` consumes tasks by non-decreasing start time and
//! puts each on the first machine it does not conflict with, opening a
//! new machine only when all existing ones conflict. This yields the
//! minimum machine count (interval-graph coloring).
//!
//! # KPI
//!
//! `PartitionKpi` reports machine count, overlap depth, optimality,
//! makespan, and utilization.
//!
//! # References
//!
//! - Kleinberg & Tardos (2005), "Algorithm Design", Ch. 4.1
//! - Golumbic (2004), "Algorithmic Graph Theory and Perfect Graphs", Ch. 8

mod interval;
mod kpi;

pub use interval::{IntervalScheduler, SchedulerConfig};
pub use kpi::{overlap_depth, PartitionKpi};
