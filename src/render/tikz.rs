//! TikZ Gantt-style picture of a partition.
//!
//! Machine `k` (1-based) occupies the row `[k, k + 1)`. Each task is a
//! filled rectangle spanning `[start, end]` horizontally, followed by
//! machine labels on the y axis and integer ticks on the time axis.
//!
//! Number formatting is controlled by [`TikzOptions`] only; nothing here
//! depends on process locale.

use std::fmt::{self, Write};

use serde::{Deserialize, Serialize};

use crate::models::Machine;

/// Formatting options for [`write_tikz`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TikzOptions {
    /// Fill style for task rectangles.
    pub fill: String,
    /// Offset of a rectangle's bottom edge within its row.
    pub row_bottom: f64,
    /// Offset of a rectangle's top edge within its row.
    pub row_top: f64,
    /// Digits after the decimal point for fractional coordinates.
    pub precision: usize,
    /// Prefix for y-axis labels (`"Machine"` → `Machine 1`).
    pub machine_label: String,
}

impl Default for TikzOptions {
    fn default() -> Self {
        Self {
            fill: "blue!40".to_string(),
            row_bottom: 0.1,
            row_top: 0.8,
            precision: 1,
            machine_label: "Machine".to_string(),
        }
    }
}

impl TikzOptions {
    /// Sets the rectangle fill style.
    pub fn with_fill(mut self, fill: impl Into<String>) -> Self {
        self.fill = fill.into();
        self
    }

    /// Sets the decimal precision.
    pub fn with_precision(mut self, precision: usize) -> Self {
        self.precision = precision;
        self
    }

    /// Sets the machine label prefix.
    pub fn with_machine_label(mut self, label: impl Into<String>) -> Self {
        self.machine_label = label.into();
        self
    }
}

/// Writes `machines` as a `tikzpicture`.
pub fn write_tikz<W: Write>(out: &mut W, machines: &[Machine], options: &TikzOptions) -> fmt::Result {
    let p = options.precision;
    writeln!(out, "\\begin{{tikzpicture}}[>=latex]")?;

    let mut max_time: i64 = 0;
    for (row, machine) in machines.iter().enumerate() {
        let y = (row + 1) as f64;
        let bottom = y + options.row_bottom;
        let top = y + options.row_top;
        for task in machine.tasks() {
            writeln!(
                out,
                "  \\draw[fill={}]({},{bottom:.p$}) rectangle ({},{top:.p$});",
                options.fill, task.start, task.end
            )?;
            max_time = max_time.max(task.end);
        }
    }

    writeln!(
        out,
        "  \\draw[thick,->](-0.2,0.8) -- ++(0,{});",
        machines.len() + 1
    )?;
    for i in 1..=machines.len() {
        let y = i as f64 + 0.5;
        writeln!(
            out,
            "    \\draw(-0.4, {y:.p$}) node[left]{{{} {i}}} -- ++ (0.4,0);",
            options.machine_label
        )?;
    }

    writeln!(
        out,
        "  \\draw[thick,->](-0.2,0.8) -- ++({},0) node[right]{{time}};",
        max_time + 1
    )?;
    for t in 1..=max_time {
        writeln!(out, "    \\draw({t}, 0.6) node[below]{{{t}}} -- ++ (0,0.4);")?;
    }

    writeln!(out, "\\end{{tikzpicture}}")
}

/// Renders `machines` as a `tikzpicture` string.
///
/// # Errors
/// Propagates a [`fmt::Error`] from the formatting machinery.
pub fn partition_to_tikz(machines: &[Machine], options: &TikzOptions) -> Result<String, fmt::Error> {
    let mut out = String::new();
    write_tikz(&mut out, machines, options)?;
    Ok(out)
}
