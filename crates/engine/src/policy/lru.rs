//! Least Recently Used (LRU) Replacement Policy.
//!
//! Exact LRU over the full reference history, not an approximation. The
//! state is a recency-ordered list of slot indices: least-recent at the
//! head, most-recent at the tail. Every reference (hit or fill) promotes
//! the touched slot to the tail; the victim is always the head. Tracking
//! slots rather than pages is equivalent, because a page's slot never
//! changes while it is resident.
//!
//! # Performance
//!
//! - **Time Complexity:**
//!   - `record_hit()` / `record_insert()`: O(F) where F is the frame count
//!   - `victim()`: O(1)
//! - **Space Complexity:** O(F)
//! - **Best Case:** Workloads with strong temporal locality
//! - **Worst Case:** Cyclic scans one page larger than the frame set

/// LRU policy state: slot indices in recency order.
#[derive(Debug)]
pub struct LruState {
    /// Head is least-recently-used, tail is most-recently-used.
    recency: Vec<usize>,
}

impl LruState {
    /// Creates LRU state for `frame_count` slots.
    ///
    /// The list starts as `[0, 1, .., frame_count - 1]`; cold-start fills
    /// touch slots in exactly that order, so the ordering is consistent
    /// from the first reference.
    pub fn new(frame_count: usize) -> Self {
        Self {
            recency: (0..frame_count).collect(),
        }
    }

    /// Promotes a hit slot to the most-recently-used position.
    pub fn record_hit(&mut self, slot: usize) {
        self.promote(slot);
    }

    /// Promotes a just-written slot to the most-recently-used position.
    pub fn record_insert(&mut self, slot: usize) {
        self.promote(slot);
    }

    /// The least-recently-used slot.
    pub fn victim(&self) -> usize {
        self.recency[0]
    }

    fn promote(&mut self, slot: usize) {
        if let Some(position) = self.recency.iter().position(|&s| s == slot) {
            self.recency.remove(position);
        }
        self.recency.push(slot);
    }
}
