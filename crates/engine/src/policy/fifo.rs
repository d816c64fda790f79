//! First-In, First-Out (FIFO) Replacement Policy.
//!
//! This policy evicts the page resident longest by insertion order,
//! regardless of how recently it was used. It operates as a single rotating
//! pointer over the frame slots: every fault writes at the pointer and
//! advances it, so eviction order is pure queue order.
//!
//! # Performance
//!
//! - **Time Complexity:**
//!   - `record_insert()`: O(1)
//!   - `victim()`: O(1)
//! - **Space Complexity:** O(1) regardless of frame count
//! - **Best Case:** Streaming references where no page is reused
//! - **Worst Case:** Loops slightly larger than the frame set; exhibits
//!   Belady's anomaly (more frames can fault more)

/// FIFO policy state: the rotating pointer.
#[derive(Debug)]
pub struct FifoState {
    /// Next slot to overwrite on a fault.
    next_slot: usize,
    /// Number of frame slots.
    frame_count: usize,
}

impl FifoState {
    /// Creates FIFO state for `frame_count` slots, pointer at slot 0.
    pub fn new(frame_count: usize) -> Self {
        Self {
            next_slot: 0,
            frame_count,
        }
    }

    /// The slot the rotating pointer currently indicates.
    ///
    /// Hit/miss history is irrelevant: the pointer alone decides.
    pub fn victim(&self) -> usize {
        self.next_slot
    }

    /// Advances the pointer past a slot just written.
    ///
    /// Called for cold-start fills as well as evictions; fills land at the
    /// pointer position, so queue order is maintained from the first fault.
    pub fn record_insert(&mut self, slot: usize) {
        self.next_slot = (slot + 1) % self.frame_count;
    }
}
