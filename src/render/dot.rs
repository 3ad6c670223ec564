//! Graphviz DOT output for a heap's tree shape.
//!
//! Leaves are drawn as rectangles. Missing children get invisible
//! placeholder nodes so Graphviz keeps left and right children apart.
//! Labels come from each element's `Display`, so duplicate values share
//! a node.

use std::fmt::{self, Display, Write};

use crate::heap::PriorityHeap;

enum Step {
    /// Emit the left edge (or leaf marker) of a node.
    Left(usize),
    /// Emit the right edge of a node, after its left subtree.
    Right(usize),
}

/// Writes `heap` as a DOT digraph.
///
/// Walks the backing storage by index with an explicit stack, in
/// pre-order with each left subtree finished before the right edge.
pub fn write_dot<W: Write, T: Display, C>(out: &mut W, heap: &PriorityHeap<T, C>) -> fmt::Result {
    let data = heap.as_slice();
    writeln!(out, "digraph G {{")?;

    let mut empties = 0usize;
    let mut stack = if data.is_empty() {
        Vec::new()
    } else {
        vec![Step::Left(0)]
    };

    while let Some(step) = stack.pop() {
        match step {
            Step::Left(index) => {
                stack.push(Step::Right(index));
                let left = 2 * index + 1;
                if left < data.len() {
                    writeln!(out, "  \"{}\" -> \"{}\"", data[index], data[left])?;
                    stack.push(Step::Left(left));
                } else {
                    writeln!(out, "  \"{}\" [shape=rectangle];", data[index])?;
                    write_empty(out, &data[index], &mut empties)?;
                }
            }
            Step::Right(index) => {
                let right = 2 * index + 2;
                if right < data.len() {
                    writeln!(out, "  \"{}\" -> \"{}\"", data[index], data[right])?;
                    stack.push(Step::Left(right));
                } else {
                    write_empty(out, &data[index], &mut empties)?;
                }
            }
        }
    }

    writeln!(out, "}}")
}

/// Renders `heap` as a DOT digraph string.
///
/// # Errors
/// Propagates a [`fmt::Error`] returned by an element's `Display` impl.
pub fn heap_to_dot<T: Display, C>(heap: &PriorityHeap<T, C>) -> Result<String, fmt::Error> {
    let mut out = String::new();
    write_dot(&mut out, heap)?;
    Ok(out)
}

fn write_empty<W: Write, T: Display>(out: &mut W, value: &T, empties: &mut usize) -> fmt::Result {
    writeln!(out, "  empty{empties} [label=\"\", style=invis];")?;
    writeln!(out, "  \"{value}\" -> empty{empties}")?;
    *empties += 1;
    Ok(())
}
