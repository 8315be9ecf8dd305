// src/types.rs

//! Small shared types used across the crate.

use std::fmt;

use crate::errors::{Result, StepdagError};

/// Identifier of a single worker slot in the pool.
///
/// Workers are interchangeable; the id only matters for deterministic
/// tie-breaking and for addressing timeline rows.
pub type WorkerId = usize;

/// A discrete simulated time unit.
pub type Tick = u64;

/// A single step in the dependency graph, identified by an uppercase
/// ASCII letter.
///
/// `Ord` on `Step` is the ordering used everywhere a deterministic
/// tie-break is required (ready-set iteration, completion-event ties).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Step(char);

impl Step {
    /// Construct a step from an uppercase ASCII letter.
    pub fn new(letter: char) -> Result<Self> {
        if letter.is_ascii_uppercase() {
            Ok(Step(letter))
        } else {
            Err(StepdagError::MalformedInstruction(format!(
                "step identifier must be an uppercase ASCII letter (got {letter:?})"
            )))
        }
    }

    /// The underlying letter.
    pub fn letter(self) -> char {
        self.0
    }

    /// 1-indexed position in the alphabet (A = 1, ..., Z = 26).
    ///
    /// Used by the letter-based duration convention.
    pub fn ordinal(self) -> u32 {
        self.0 as u32 - 'A' as u32 + 1
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
