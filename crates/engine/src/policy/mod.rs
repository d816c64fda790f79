//! Page Replacement Policies.
//!
//! Implements the victim-selection algorithms for the simulation engine.
//!
//! # Policies
//!
//! - `Fifo`: First-In, First-Out (rotating pointer).
//! - `SecondChance`: Modified FIFO with one reference bit per slot.
//! - `Lru`: Exact Least Recently Used (full-history recency order).
//! - `Optimal`: Belady's algorithm (largest next-use distance).
//!
//! The policy set is closed: dispatch is a `match` over [`PolicyKind`]
//! rather than trait objects, since no policy can be added at runtime.

/// First-In, First-Out replacement policy.
pub mod fifo;

/// Exact Least Recently Used replacement policy.
pub mod lru;

/// Optimal (Belady) replacement policy.
pub mod optimal;

/// Second-Chance (modified FIFO) replacement policy.
pub mod second_chance;

pub use fifo::FifoState;
pub use lru::LruState;
pub use optimal::OptimalState;
pub use second_chance::SecondChanceState;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::SimError;
use crate::history::{FrameSlot, PageId};

/// The closed set of supported replacement policies.
///
/// Serialized names match the identifiers the original front end used in
/// its algorithm selector (`FIFO`, `FIFOM`, `LRU`, `Optimal`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum PolicyKind {
    /// First-In, First-Out: evict in insertion order, ignoring use.
    #[default]
    #[serde(alias = "Fifo")]
    Fifo,
    /// Modified FIFO: a reference bit grants each used page one reprieve.
    #[serde(rename = "FIFOM", alias = "SecondChance")]
    SecondChance,
    /// Least Recently Used: evict the page unused for the longest time.
    #[serde(alias = "Lru")]
    Lru,
    /// Belady's optimal policy: evict the page with the farthest next use.
    ///
    /// Requires full knowledge of the future reference stream, so it is not
    /// implementable online; it exists as the fault-count lower bound.
    #[serde(rename = "Optimal")]
    Optimal,
}

impl PolicyKind {
    /// All supported policies, in presentation order.
    pub const ALL: [Self; 4] = [Self::Fifo, Self::SecondChance, Self::Lru, Self::Optimal];
}

impl fmt::Display for PolicyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fifo => write!(f, "FIFO"),
            Self::SecondChance => write!(f, "Second-Chance"),
            Self::Lru => write!(f, "LRU"),
            Self::Optimal => write!(f, "Optimal"),
        }
    }
}

impl FromStr for PolicyKind {
    type Err = SimError;

    /// Parses a policy name, case-insensitively.
    ///
    /// Accepts `fifo`, `second-chance` (also `fifom`, the original front
    /// end's identifier), `lru`, and `optimal`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fifo" => Ok(Self::Fifo),
            "second-chance" | "secondchance" | "second_chance" | "fifom" => Ok(Self::SecondChance),
            "lru" => Ok(Self::Lru),
            "optimal" => Ok(Self::Optimal),
            _ => Err(SimError::UnsupportedPolicy(s.to_owned())),
        }
    }
}

/// Per-run policy bookkeeping, private to the engine.
///
/// Constructed fresh for every simulation run; nothing survives between
/// runs. Each variant owns exactly the state its policy needs.
#[derive(Debug)]
pub(crate) enum PolicyState {
    Fifo(FifoState),
    SecondChance(SecondChanceState),
    Lru(LruState),
    Optimal(OptimalState),
}

impl PolicyState {
    /// Creates the bookkeeping for `kind` over `frame_count` slots.
    pub(crate) fn new(kind: PolicyKind, frame_count: usize) -> Self {
        match kind {
            PolicyKind::Fifo => Self::Fifo(FifoState::new(frame_count)),
            PolicyKind::SecondChance => Self::SecondChance(SecondChanceState::new(frame_count)),
            PolicyKind::Lru => Self::Lru(LruState::new(frame_count)),
            PolicyKind::Optimal => Self::Optimal(OptimalState::new()),
        }
    }

    /// Updates recency/reference bookkeeping for a hit on `slot`.
    pub(crate) fn record_hit(&mut self, slot: usize) {
        match self {
            Self::Fifo(_) | Self::Optimal(_) => {}
            Self::SecondChance(state) => state.record_hit(slot),
            Self::Lru(state) => state.record_hit(slot),
        }
    }

    /// Updates bookkeeping after a fault wrote a page into `slot`.
    pub(crate) fn record_insert(&mut self, slot: usize) {
        match self {
            Self::Fifo(state) => state.record_insert(slot),
            Self::SecondChance(state) => state.record_insert(slot),
            Self::Lru(state) => state.record_insert(slot),
            Self::Optimal(_) => {}
        }
    }

    /// Chooses the slot to overwrite when every slot is occupied.
    ///
    /// `position` is the 0-based index of the faulting reference and `refs`
    /// the full stream; only Optimal looks at them.
    pub(crate) fn choose_victim(
        &mut self,
        frames: &[FrameSlot],
        position: usize,
        refs: &[PageId],
    ) -> usize {
        match self {
            Self::Fifo(state) => state.victim(),
            Self::SecondChance(state) => state.victim(),
            Self::Lru(state) => state.victim(),
            Self::Optimal(state) => state.victim(frames, position, refs),
        }
    }
}
