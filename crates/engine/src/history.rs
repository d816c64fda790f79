//! Step history: the replayable record of one simulation run.
//!
//! The engine produces one [`StepRecord`] per reference-stream element. Each
//! record carries a value copy of the frame set at that instant, so earlier
//! records stay correct no matter what later steps do. The aggregate fault
//! and hit counters are recomputed from the records on every query; they are
//! derived facts, never independently settable caches that could drift.

use serde::Serialize;
use serde::ser::SerializeStruct;

use crate::policy::PolicyKind;

/// A page identifier. Plain integer, sign-agnostic.
pub type PageId = i64;

/// One frame slot: a resident page, or `None` while still empty.
pub type FrameSlot = Option<PageId>;

/// Immutable snapshot produced once per input page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StepRecord {
    /// 1-based position in the reference stream.
    pub step: usize,
    /// The page identifier referenced at this step.
    pub page: PageId,
    /// Value copy of the frame set after this step's mutation.
    pub frames: Vec<FrameSlot>,
    /// Whether this reference missed and had to load the page.
    pub fault: bool,
    /// The slot written this step; `None` on a hit.
    pub updated_slot: Option<usize>,
}

impl StepRecord {
    /// One-sentence narration of this step for presentation layers.
    pub fn narration(&self) -> String {
        match self.updated_slot {
            Some(slot) if self.fault => format!(
                "At time T{}, page {} caused a page fault and was loaded into Frame {}.",
                self.step,
                self.page,
                slot + 1
            ),
            _ => format!(
                "At time T{}, page {} was already in memory. No page fault occurred.",
                self.step, self.page
            ),
        }
    }
}

/// The ordered sequence of step records for one run, plus run parameters.
///
/// Produced once per [`crate::simulate`] call and immutable thereafter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepHistory {
    policy: PolicyKind,
    frame_count: usize,
    steps: Vec<StepRecord>,
}

impl StepHistory {
    /// Creates an empty history sized for `capacity` steps.
    pub(crate) fn with_capacity(policy: PolicyKind, frame_count: usize, capacity: usize) -> Self {
        Self {
            policy,
            frame_count,
            steps: Vec::with_capacity(capacity),
        }
    }

    /// Appends the record for the next step.
    pub(crate) fn push(&mut self, record: StepRecord) {
        self.steps.push(record);
    }

    /// The policy this history was produced under.
    pub fn policy(&self) -> PolicyKind {
        self.policy
    }

    /// Number of frame slots in every snapshot.
    pub fn frame_count(&self) -> usize {
        self.frame_count
    }

    /// All step records, in reference order.
    pub fn steps(&self) -> &[StepRecord] {
        &self.steps
    }

    /// Number of steps (equals the reference-stream length).
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Whether the history holds no steps.
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Total page faults, recomputed from the records.
    pub fn total_faults(&self) -> usize {
        self.steps.iter().filter(|record| record.fault).count()
    }

    /// Total page hits, recomputed from the records.
    pub fn total_hits(&self) -> usize {
        self.len() - self.total_faults()
    }

    /// Iterates over the step records.
    pub fn iter(&self) -> std::slice::Iter<'_, StepRecord> {
        self.steps.iter()
    }
}

impl<'a> IntoIterator for &'a StepHistory {
    type Item = &'a StepRecord;
    type IntoIter = std::slice::Iter<'a, StepRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl Serialize for StepHistory {
    /// Serializes the run with its derived totals.
    ///
    /// The totals are recomputed here rather than stored, keeping the
    /// serialized form consistent with the records by construction.
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let mut state = serializer.serialize_struct("StepHistory", 5)?;
        state.serialize_field("policy", &self.policy)?;
        state.serialize_field("frameCount", &self.frame_count)?;
        state.serialize_field("totalFaults", &self.total_faults())?;
        state.serialize_field("totalHits", &self.total_hits())?;
        state.serialize_field("steps", &self.steps)?;
        state.end()
    }
}
