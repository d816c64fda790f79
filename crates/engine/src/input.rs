//! Validated simulation inputs.
//!
//! The engine only accepts inputs through the types in this module, so all
//! malformed data is rejected at the boundary (§ error kinds in
//! [`crate::error::SimError`]) and `simulate` itself never fails. Both types
//! offer a `parse` constructor for raw text (the shape an input form hands
//! over) and a `new` constructor for already-typed values.

use crate::error::SimError;
use crate::history::PageId;

/// An ordered, non-empty sequence of page identifiers.
///
/// Indices are the simulation's logical time axis. Page identifiers are
/// plain integers; the engine is agnostic to their sign.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReferenceStream(Vec<PageId>);

impl ReferenceStream {
    /// Wraps an already-parsed sequence, rejecting an empty one.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::InvalidReferenceStream`] if `pages` is empty.
    pub fn new(pages: Vec<PageId>) -> Result<Self, SimError> {
        if pages.is_empty() {
            return Err(SimError::InvalidReferenceStream(
                "no page references supplied".to_owned(),
            ));
        }
        Ok(Self(pages))
    }

    /// Parses a whitespace-delimited list of integers.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::InvalidReferenceStream`] if the input contains no
    /// tokens or any token does not parse as an integer.
    pub fn parse(input: &str) -> Result<Self, SimError> {
        let mut pages = Vec::new();
        for token in input.split_whitespace() {
            let page = token.parse::<PageId>().map_err(|_| {
                SimError::InvalidReferenceStream(format!("token {token:?} is not an integer"))
            })?;
            pages.push(page);
        }
        Self::new(pages)
    }

    /// The page identifiers in reference order.
    pub fn pages(&self) -> &[PageId] {
        &self.0
    }

    /// Number of references (always at least 1).
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false; present for slice-like symmetry.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// A positive number of page frames, fixed for a whole run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameCount(usize);

impl FrameCount {
    /// Wraps a frame count, rejecting zero.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::InvalidFrameCount`] if `count` is zero.
    pub fn new(count: usize) -> Result<Self, SimError> {
        if count == 0 {
            return Err(SimError::InvalidFrameCount(
                "frame count must be positive".to_owned(),
            ));
        }
        Ok(Self(count))
    }

    /// Parses a frame count from text.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::InvalidFrameCount`] if the input is not an
    /// integer, or is zero or negative.
    pub fn parse(input: &str) -> Result<Self, SimError> {
        let trimmed = input.trim();
        let value = trimmed.parse::<i64>().map_err(|_| {
            SimError::InvalidFrameCount(format!("{trimmed:?} is not an integer"))
        })?;
        if value <= 0 {
            return Err(SimError::InvalidFrameCount(format!(
                "{value} is not positive"
            )));
        }
        Ok(Self(value as usize))
    }

    /// The validated count.
    pub fn get(self) -> usize {
        self.0
    }
}
