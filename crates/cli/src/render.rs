//! Text rendering of simulation output.
//!
//! Produces the frame-by-time table (one row per frame slot, one column per
//! step), the cumulative fault/hit series table, and the policy comparison
//! table. All functions return plain strings; callers decide where they go.

use pagesim_core::{CumulativeCounts, RunSummary, StepHistory};

/// Renders the frame-by-time table for a run.
///
/// Each column is one step, each row one frame slot. Empty slots show `-`;
/// the slot written by a fault is marked with `*`.
pub fn frame_table(history: &StepHistory) -> String {
    let steps = history.steps();
    let frame_count = history.frame_count();

    let mut rows: Vec<Vec<String>> = Vec::with_capacity(frame_count);
    for slot in 0..frame_count {
        let mut row = Vec::with_capacity(steps.len());
        for record in steps {
            let cell = match record.frames[slot] {
                Some(page) if record.fault && record.updated_slot == Some(slot) => {
                    format!("{page}*")
                }
                Some(page) => page.to_string(),
                None => "-".to_owned(),
            };
            row.push(cell);
        }
        rows.push(row);
    }

    let label_width = format!("Frame {frame_count}").len();
    let mut cell_width = 2;
    for index in 0..steps.len() {
        cell_width = cell_width.max(format!("T{}", index + 1).len());
    }
    for row in &rows {
        for cell in row {
            cell_width = cell_width.max(cell.len());
        }
    }

    let mut out = String::new();
    out.push_str(&format!("{:<label_width$}", "Frame"));
    for index in 0..steps.len() {
        let label = format!("T{}", index + 1);
        out.push_str(&format!("  {label:>cell_width$}"));
    }
    out.push('\n');

    for (slot, row) in rows.iter().enumerate() {
        let label = format!("Frame {}", slot + 1);
        out.push_str(&format!("{label:<label_width$}"));
        for cell in row {
            out.push_str(&format!("  {cell:>cell_width$}"));
        }
        out.push('\n');
    }

    out.push_str("\n* page fault (page loaded into this frame)\n");
    out
}

/// Renders the cumulative fault/hit counts as a per-step table.
pub fn cumulative_table(counts: &CumulativeCounts) -> String {
    let mut out = String::new();
    out.push_str("step    faults  hits\n");
    for index in 0..counts.len() {
        out.push_str(&format!(
            "T{:<6} {:<7} {}\n",
            index + 1,
            counts.faults[index],
            counts.hits[index]
        ));
    }
    out
}

/// Renders the fault-count comparison across policies.
///
/// Optimal is annotated as the lower bound it is.
pub fn comparison_table(summaries: &[RunSummary]) -> String {
    let mut out = String::new();
    out.push_str("Policy         Faults  Hits    Fault rate\n");
    for summary in summaries {
        out.push_str(&format!(
            "{:<14} {:<7} {:<7} {:.2}%{}\n",
            summary.policy.to_string(),
            summary.total_faults,
            summary.total_hits,
            summary.fault_rate() * 100.0,
            if summary.policy == pagesim_core::PolicyKind::Optimal {
                "  (lower bound)"
            } else {
                ""
            }
        ));
    }
    out
}
