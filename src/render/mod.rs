//! Text renderers for heaps and partitions.
//!
//! Both renderers are read-only: they borrow their input and write to any
//! [`std::fmt::Write`] sink.
//!
//! - **`dot`**: heap tree as a Graphviz digraph
//! - **`tikz`**: machine/task partition as a LaTeX TikZ picture

pub mod dot;
pub mod tikz;

pub use dot::{heap_to_dot, write_dot};
pub use tikz::{partition_to_tikz, write_tikz, TikzOptions};
