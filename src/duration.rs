// src/duration.rs

//! Duration conventions for the worker pool.
//!
//! The core simulator takes an opaque `Fn(Step) -> i64`; the exact
//! formula is a configuration decision, not part of the algorithm. The
//! conventional choice is "base offset plus the step's position in the
//! alphabet" with the offset supplied by the host (0 for the worked
//! example, 60 for the full puzzle input).

use crate::types::Step;

/// Duration function for the letter-based convention:
/// `base_offset + ordinal(step)` where A = 1, ..., Z = 26.
pub fn letter_duration(base_offset: u32) -> impl Fn(Step) -> i64 {
    move |step: Step| i64::from(base_offset) + i64::from(step.ordinal())
}

/// The same duration for every step.
///
/// Handy in tests and when only the ordering pressure of the pool
/// matters, not per-step variance.
pub fn uniform_duration(ticks: i64) -> impl Fn(Step) -> i64 {
    move |_step: Step| ticks
}
