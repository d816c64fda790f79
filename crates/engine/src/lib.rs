//! Page-replacement policy simulation library.
//!
//! This crate implements a deterministic simulator for the classical
//! virtual-memory page-replacement policies. It provides:
//! 1. **Input:** Validated reference streams and frame counts, with
//!    field-specific rejection of malformed input.
//! 2. **Policies:** FIFO, Second-Chance (modified FIFO), exact LRU, and
//!    Optimal (Belady) victim selection.
//! 3. **Engine:** A shared stepping loop producing a complete, replayable
//!    step history (per-step frame snapshots, fault/hit classification,
//!    updated slot).
//! 4. **Analytics:** Aggregate counters, cumulative fault/hit time series,
//!    run summaries, and per-step narration for presentation layers.
//!
//! Each simulation run is a pure function of its inputs: all frame and
//! policy state is constructed fresh per call and nothing survives between
//! calls, so independent runs are safe to execute concurrently.

/// Simulation engine: the shared stepping loop over a reference stream.
pub mod engine;
/// Boundary error types for input validation.
pub mod error;
/// Step history: replayable per-step records of a simulation run.
pub mod history;
/// Validated input types (reference stream, frame count).
pub mod input;
/// Replacement policy identifiers and per-policy victim selection.
pub mod policy;
/// Aggregate statistics, cumulative series, and run summaries.
pub mod stats;

/// Runs one simulation; the only operation of the engine.
pub use crate::engine::simulate;
/// Boundary error reported before any simulation starts.
pub use crate::error::SimError;
/// Complete, immutable record of one simulation run.
pub use crate::history::{FrameSlot, PageId, StepHistory, StepRecord};
/// Validated inputs; construct via `parse` or `new`.
pub use crate::input::{FrameCount, ReferenceStream};
/// The closed set of supported replacement policies.
pub use crate::policy::PolicyKind;
/// Aggregate output consumed by analytics and narrative layers.
pub use crate::stats::{CumulativeCounts, RunSummary};
