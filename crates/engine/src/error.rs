//! Boundary error definitions.
//!
//! All errors are raised while validating caller input, before a simulation
//! starts. Once inputs are validated the engine is total: `simulate` cannot
//! fail mid-run, and any panic on valid input is an implementation bug.

use thiserror::Error;

/// Input rejection reported to the caller before simulating.
///
/// The three kinds are distinct so a front end can attach each message to
/// the field that caused it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SimError {
    /// The reference stream was empty or contained a token that does not
    /// parse as an integer.
    #[error("invalid reference stream: {0}")]
    InvalidReferenceStream(String),

    /// The frame count was non-numeric, zero, or negative.
    #[error("invalid frame count: {0}")]
    InvalidFrameCount(String),

    /// The policy identifier is not one of the four supported kinds.
    ///
    /// Kept separate from the numeric-input errors: an unknown policy is a
    /// programming or UI wiring mistake, never a data-entry mistake.
    #[error("unsupported policy: {0:?}")]
    UnsupportedPolicy(String),
}
