//! The simulation engine: one shared stepping loop for all policies.
//!
//! `simulate` replays a reference stream against a fixed-size frame set and
//! records every step. The per-step procedure is identical for all four
//! policies except the choose-eviction-victim sub-step:
//! 1. Look up whether the page already occupies a slot.
//! 2. Hit: record it and update the policy's recency/reference bookkeeping.
//! 3. Fault: fill the lowest-indexed empty slot, or ask the policy for a
//!    victim once no slot is empty; write the page there.
//! 4. Snapshot the frame set into the step record.
//!
//! Steps are strictly sequential: every policy's choice depends on the
//! cumulative state left by all prior steps. Independent runs share nothing.

use tracing::{debug, trace};

use crate::history::{FrameSlot, StepHistory, StepRecord};
use crate::input::{FrameCount, ReferenceStream};
use crate::policy::{PolicyKind, PolicyState};

/// Replays `refs` against `frames` slots under `policy`.
///
/// Deterministic: identical inputs always yield an identical history. The
/// frame set and policy bookkeeping are built fresh here on every call, so
/// no state leaks between runs and concurrent runs are safe by
/// construction. Runs in O(refs × frames) time; Optimal's look-ahead scan
/// dominates.
pub fn simulate(policy: PolicyKind, refs: &ReferenceStream, frames: FrameCount) -> StepHistory {
    let frame_count = frames.get();
    let mut slots: Vec<FrameSlot> = vec![None; frame_count];
    let mut state = PolicyState::new(policy, frame_count);
    let mut history = StepHistory::with_capacity(policy, frame_count, refs.len());

    debug!(%policy, frame_count, references = refs.len(), "starting simulation run");

    for (index, &page) in refs.pages().iter().enumerate() {
        let record = match slots.iter().position(|slot| *slot == Some(page)) {
            Some(slot) => {
                state.record_hit(slot);
                StepRecord {
                    step: index + 1,
                    page,
                    frames: slots.clone(),
                    fault: false,
                    updated_slot: None,
                }
            }
            None => {
                let target = slots
                    .iter()
                    .position(Option::is_none)
                    .unwrap_or_else(|| state.choose_victim(&slots, index, refs.pages()));
                slots[target] = Some(page);
                state.record_insert(target);
                StepRecord {
                    step: index + 1,
                    page,
                    // Value copy: later steps must not rewrite this snapshot.
                    frames: slots.clone(),
                    fault: true,
                    updated_slot: Some(target),
                }
            }
        };
        trace!(
            step = record.step,
            page,
            fault = record.fault,
            "reference processed"
        );
        history.push(record);
    }

    history
}
