//! Simulation Engine Tests.
//!
//! Exercises the shared stepping loop end to end: the cold-start fill rule,
//! hit/fault classification, snapshot semantics, and the classic textbook
//! scenarios that pin down each policy's exact eviction order rather than
//! just its fault count.

use pretty_assertions::assert_eq;
use rstest::rstest;

use pagesim_core::{FrameCount, PolicyKind, ReferenceStream, simulate};

/// Builds validated inputs for a test run.
fn inputs(pages: &[i64], frames: usize) -> (ReferenceStream, FrameCount) {
    let stream = ReferenceStream::new(pages.to_vec()).expect("non-empty stream");
    let count = FrameCount::new(frames).expect("positive frame count");
    (stream, count)
}

/// Convenience wrapper returning the full history.
fn run(policy: PolicyKind, pages: &[i64], frames: usize) -> pagesim_core::StepHistory {
    let (stream, count) = inputs(pages, frames);
    simulate(policy, &stream, count)
}

// ══════════════════════════════════════════════════════════
// 1. Shared stepping contract
// ══════════════════════════════════════════════════════════

/// One record per reference, in input order, for every policy.
#[rstest]
#[case(PolicyKind::Fifo)]
#[case(PolicyKind::SecondChance)]
#[case(PolicyKind::Lru)]
#[case(PolicyKind::Optimal)]
fn one_record_per_reference(#[case] policy: PolicyKind) {
    let pages = [3, 1, 4, 1, 5, 9, 2, 6];
    let history = run(policy, &pages, 3);

    assert_eq!(history.len(), pages.len());
    for (index, record) in history.iter().enumerate() {
        assert_eq!(record.step, index + 1);
        assert_eq!(record.page, pages[index]);
        assert_eq!(record.frames.len(), 3);
    }
}

/// The first `frame_count` distinct references always fault (cold start).
#[rstest]
#[case(PolicyKind::Fifo)]
#[case(PolicyKind::SecondChance)]
#[case(PolicyKind::Lru)]
#[case(PolicyKind::Optimal)]
fn cold_start_faults_on_distinct_references(#[case] policy: PolicyKind) {
    let history = run(policy, &[10, 20, 30], 3);

    assert!(history.iter().all(|record| record.fault));
    assert_eq!(history.total_faults(), 3);
}

/// Faults fill the lowest-indexed empty slot while any slot is empty.
#[rstest]
#[case(PolicyKind::Fifo)]
#[case(PolicyKind::SecondChance)]
#[case(PolicyKind::Lru)]
#[case(PolicyKind::Optimal)]
fn fills_lowest_empty_slot_first(#[case] policy: PolicyKind) {
    let history = run(policy, &[8, 9], 3);

    assert_eq!(history.steps()[0].updated_slot, Some(0));
    assert_eq!(history.steps()[1].updated_slot, Some(1));
    assert_eq!(history.steps()[1].frames, vec![Some(8), Some(9), None]);
}

/// Hits never mark a slot as updated, for any policy.
#[rstest]
#[case(PolicyKind::Fifo)]
#[case(PolicyKind::SecondChance)]
#[case(PolicyKind::Lru)]
#[case(PolicyKind::Optimal)]
fn hits_update_no_slot(#[case] policy: PolicyKind) {
    let history = run(policy, &[1, 2, 1, 2, 1], 3);

    for record in history.iter().filter(|record| !record.fault) {
        assert_eq!(record.updated_slot, None);
    }
    assert_eq!(history.total_faults(), 2);
}

/// With no repeated pages, eviction policy is irrelevant: every reference
/// faults exactly once under all four policies.
#[test]
fn no_repeats_fault_identically_across_policies() {
    let pages = [1, 2, 3, 4, 5, 6, 7];
    for policy in PolicyKind::ALL {
        let history = run(policy, &pages, 3);
        assert_eq!(history.total_faults(), pages.len(), "policy {policy}");
    }
}

/// A single frame faults on every change of page and never on a repeat.
#[rstest]
#[case(PolicyKind::Fifo)]
#[case(PolicyKind::SecondChance)]
#[case(PolicyKind::Lru)]
#[case(PolicyKind::Optimal)]
fn single_frame_boundary(#[case] policy: PolicyKind) {
    assert_eq!(run(policy, &[5, 5, 5], 1).total_faults(), 1);
    assert_eq!(run(policy, &[1, 2, 1, 2], 1).total_faults(), 4);
}

/// Identical inputs yield bit-for-bit identical histories.
#[test]
fn simulate_is_deterministic() {
    let pages = [7, 0, 1, 2, 0, 3, 0, 4, 2, 3, 0, 3, 2];
    for policy in PolicyKind::ALL {
        assert_eq!(run(policy, &pages, 3), run(policy, &pages, 3));
    }
}

/// Snapshots are value copies: the first record still shows the cold-start
/// frame set after the run has long since overwritten every slot.
#[test]
fn snapshots_are_defensive_copies() {
    let history = run(PolicyKind::Fifo, &[1, 2, 3, 4, 5, 6], 2);

    assert_eq!(history.steps()[0].frames, vec![Some(1), None]);
    assert_eq!(history.steps()[5].frames, vec![Some(5), Some(6)]);
}

/// The fault counter is the count of fault-marked records, always.
#[test]
fn total_faults_matches_fault_records() {
    let history = run(PolicyKind::Lru, &[7, 0, 1, 2, 0, 3, 0, 4, 2, 3, 0, 3, 2], 3);

    let counted = history.iter().filter(|record| record.fault).count();
    assert_eq!(history.total_faults(), counted);
    assert_eq!(history.total_hits(), history.len() - counted);
}

// ══════════════════════════════════════════════════════════
// 2. FIFO — Belady's anomaly
// ══════════════════════════════════════════════════════════

/// The classic anomaly string: FIFO with MORE frames faults MORE. This
/// checks eviction order, not just fault counting.
#[test]
fn fifo_exhibits_beladys_anomaly() {
    let pages = [1, 2, 3, 4, 1, 2, 5, 1, 2, 3, 4, 5];

    let three = run(PolicyKind::Fifo, &pages, 3);
    let four = run(PolicyKind::Fifo, &pages, 4);

    assert_eq!(three.total_faults(), 9);
    assert_eq!(four.total_faults(), 10);
    assert!(three.total_faults() < four.total_faults());
}

/// Queue-order eviction, step by step: hits on 1 and 2 do not save them
/// from being the oldest insertions.
#[test]
fn fifo_evicts_in_insertion_order() {
    let history = run(PolicyKind::Fifo, &[1, 2, 3, 4, 1, 2, 5], 3);

    // 4 evicts 1 (slot 0), 1 evicts 2 (slot 1), 2 evicts 3 (slot 2),
    // 5 evicts 4 (slot 0 again).
    let updated: Vec<_> = history.iter().map(|record| record.updated_slot).collect();
    assert_eq!(
        updated,
        vec![
            Some(0),
            Some(1),
            Some(2),
            Some(0),
            Some(1),
            Some(2),
            Some(0)
        ]
    );
    assert_eq!(history.total_faults(), 7);
}

// ══════════════════════════════════════════════════════════
// 3. LRU — textbook reference string
// ══════════════════════════════════════════════════════════

/// The standard OS-textbook string: 9 faults with 3 frames, with the exact
/// eviction order the full-history recency list dictates.
#[test]
fn lru_textbook_reference_string() {
    let history = run(PolicyKind::Lru, &[7, 0, 1, 2, 0, 3, 0, 4, 2, 3, 0, 3, 2], 3);

    assert_eq!(history.total_faults(), 9);

    // Page 3 (step 6) evicts page 1 from slot 2; page 4 (step 8) evicts
    // page 2 from slot 0; page 0 (step 11) evicts page 4 from slot 0.
    assert_eq!(history.steps()[5].updated_slot, Some(2));
    assert_eq!(history.steps()[7].updated_slot, Some(0));
    assert_eq!(history.steps()[10].updated_slot, Some(0));

    // Final residency: 0, 3, 2.
    assert_eq!(
        history.steps()[12].frames,
        vec![Some(0), Some(3), Some(2)]
    );
}

/// LRU eviction follows use order, not insertion order.
#[test]
fn lru_differs_from_fifo_on_reuse() {
    let pages = [1, 2, 3, 1, 4];

    let lru = run(PolicyKind::Lru, &pages, 3);
    let fifo = run(PolicyKind::Fifo, &pages, 3);

    // The hit on 1 protects it under LRU: 4 evicts 2 (slot 1).
    assert_eq!(lru.steps()[4].updated_slot, Some(1));
    // FIFO ignores the hit: 4 evicts 1 (slot 0).
    assert_eq!(fifo.steps()[4].updated_slot, Some(0));
}

// ══════════════════════════════════════════════════════════
// 4. Optimal — exact victim choice
// ══════════════════════════════════════════════════════════

/// The scenario pinning Belady's look-ahead: 5 faults total, and the fault
/// at page 4 must evict page 3 (never referenced again) rather than the
/// sooner-reused 1 or 2.
#[test]
fn optimal_scenario_exact_victims() {
    let history = run(PolicyKind::Optimal, &[1, 2, 3, 4, 1, 2, 5], 3);

    assert_eq!(history.total_faults(), 5);

    // Step 4: frames were [1, 2, 3]; 3 never recurs, so slot 2 goes.
    assert_eq!(history.steps()[3].updated_slot, Some(2));
    assert_eq!(history.steps()[3].frames, vec![Some(1), Some(2), Some(4)]);

    // Steps 5 and 6 hit.
    assert!(!history.steps()[4].fault);
    assert!(!history.steps()[5].fault);

    // Step 7: nothing recurs; the tie breaks to slot 0.
    assert_eq!(history.steps()[6].updated_slot, Some(0));
}

/// Optimal never faults more than any other policy on the same input.
#[test]
fn optimal_is_lower_bound_on_textbook_strings() {
    let cases: [&[i64]; 3] = [
        &[1, 2, 3, 4, 1, 2, 5, 1, 2, 3, 4, 5],
        &[7, 0, 1, 2, 0, 3, 0, 4, 2, 3, 0, 3, 2],
        &[1, 2, 3, 1, 2, 4],
    ];

    for pages in cases {
        for frames in 1..=4 {
            let optimal = run(PolicyKind::Optimal, pages, frames).total_faults();
            for policy in [PolicyKind::Fifo, PolicyKind::SecondChance, PolicyKind::Lru] {
                let faults = run(policy, pages, frames).total_faults();
                assert!(
                    optimal <= faults,
                    "optimal {optimal} > {policy} {faults} on {pages:?} with {frames} frames"
                );
            }
        }
    }
}

// ══════════════════════════════════════════════════════════
// 5. Second-Chance — reference bits
// ══════════════════════════════════════════════════════════

/// Hits on pages 1 and 2 set their bits, so the fault on 4 must evict
/// page 3, the only slot still unreferenced.
#[test]
fn second_chance_evicts_unreferenced_page() {
    let history = run(PolicyKind::SecondChance, &[1, 2, 3, 1, 2, 4], 3);

    assert_eq!(history.total_faults(), 4);
    assert_eq!(history.steps()[5].updated_slot, Some(2));
    assert_eq!(
        history.steps()[5].frames,
        vec![Some(1), Some(2), Some(4)]
    );
}

/// Without hits, Second-Chance matches FIFO record for record.
#[test]
fn second_chance_matches_fifo_without_hits() {
    let pages = [1, 2, 3, 4, 5, 1, 2];

    let fifo = run(PolicyKind::Fifo, &pages, 3);
    let second_chance = run(PolicyKind::SecondChance, &pages, 3);

    assert_eq!(fifo.total_faults(), second_chance.total_faults());
    for (a, b) in fifo.iter().zip(second_chance.iter()) {
        assert_eq!(a.frames, b.frames);
        assert_eq!(a.updated_slot, b.updated_slot);
    }
}
