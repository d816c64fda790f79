//! Aggregate statistics and narrative output for a simulation run.
//!
//! This module serves the analytics and narrative layers. It provides:
//! 1. **Cumulative series:** Per-step running fault and hit counts for
//!    plotting performance over time.
//! 2. **Run summary:** Policy, frame count, totals, and rates, with a
//!    stdout report.
//! 3. **Narrative hand-off:** The textual prompt a downstream explainer
//!    receives.
//!
//! Everything here is derived from per-step fault flags and run parameters
//! alone; frame contents are never needed.

use serde::Serialize;

use crate::history::{PageId, StepHistory};
use crate::policy::PolicyKind;

/// Running fault and hit counts over time, one entry per step.
///
/// The two series a performance chart plots against the step axis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CumulativeCounts {
    /// `faults[i]` is the number of faults in steps `1..=i+1`.
    pub faults: Vec<usize>,
    /// `hits[i]` is the number of hits in steps `1..=i+1`.
    pub hits: Vec<usize>,
}

impl CumulativeCounts {
    /// Builds the series from per-step fault flags.
    pub fn from_flags<I>(flags: I) -> Self
    where
        I: IntoIterator<Item = bool>,
    {
        let mut faults = Vec::new();
        let mut hits = Vec::new();
        let mut fault_total = 0;
        let mut hit_total = 0;
        for fault in flags {
            if fault {
                fault_total += 1;
            } else {
                hit_total += 1;
            }
            faults.push(fault_total);
            hits.push(hit_total);
        }
        Self { faults, hits }
    }

    /// Builds the series from a run's history.
    pub fn from_history(history: &StepHistory) -> Self {
        Self::from_flags(history.iter().map(|record| record.fault))
    }

    /// Number of steps covered.
    pub fn len(&self) -> usize {
        self.faults.len()
    }

    /// Whether the series is empty.
    pub fn is_empty(&self) -> bool {
        self.faults.is_empty()
    }
}

/// Aggregate outcome of one run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RunSummary {
    /// Policy the run executed.
    pub policy: PolicyKind,
    /// Frame slots available throughout the run.
    pub frame_count: usize,
    /// Length of the reference stream.
    pub references: usize,
    /// Total page faults.
    pub total_faults: usize,
    /// Total page hits.
    pub total_hits: usize,
}

impl RunSummary {
    /// Summarizes a run; totals are taken from the recomputed counters.
    pub fn new(history: &StepHistory) -> Self {
        Self {
            policy: history.policy(),
            frame_count: history.frame_count(),
            references: history.len(),
            total_faults: history.total_faults(),
            total_hits: history.total_hits(),
        }
    }

    /// Fraction of references that faulted, in `[0, 1]`.
    pub fn fault_rate(&self) -> f64 {
        if self.references == 0 {
            return 0.0;
        }
        self.total_faults as f64 / self.references as f64
    }

    /// Prints the summary block to stdout.
    pub fn print(&self) {
        println!("==========================================================");
        println!("PAGE REPLACEMENT SIMULATION STATISTICS");
        println!("==========================================================");
        println!("policy                   {}", self.policy);
        println!("frames                   {}", self.frame_count);
        println!("references               {}", self.references);
        println!("page_faults              {}", self.total_faults);
        println!("page_hits                {}", self.total_hits);
        println!("fault_rate               {:.2}%", self.fault_rate() * 100.0);
        println!("==========================================================");
    }

    /// The explanation request handed to a narrative layer.
    ///
    /// `pages` is the reference stream the run replayed; it is part of the
    /// request wording, not of the summary itself.
    pub fn feedback_prompt(&self, pages: &[PageId]) -> String {
        let sequence = pages
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ");
        format!(
            "The user has just completed a page replacement simulation using the {} algorithm \
             with {} frames and the page reference sequence {}. There were {} page faults. \
             Provide a simple explanation of the results and suggest if a different algorithm \
             might perform better.",
            self.policy, self.frame_count, sequence, self.total_faults
        )
    }
}
