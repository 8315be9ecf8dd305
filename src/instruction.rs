// src/instruction.rs

//! Parsing of textual ordering constraints.
//!
//! One line of input describes one directed edge:
//!
//! ```text
//! Step C must be finished before step A can begin.
//! ```
//!
//! Parsing is stateless: each line goes in, an [`Instruction`] or an
//! error comes out. The compiled regex lives in a `OnceLock` so the
//! pattern is only built once, but it carries no mutable state.

use std::sync::OnceLock;

use regex::Regex;
use tracing::trace;

use crate::errors::{Result, StepdagError};
use crate::types::Step;

const INSTRUCTION_PATTERN: &str =
    r"^Step ([A-Z]) must be finished before step ([A-Z]) can begin\.$";

fn instruction_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| {
        Regex::new(INSTRUCTION_PATTERN).expect("instruction pattern is a valid regex")
    })
}

/// One ordering constraint: `prerequisite` must finish before
/// `dependent` may start.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Instruction {
    pub prerequisite: Step,
    pub dependent: Step,
}

/// Parse a single constraint line.
///
/// The line must match the grammar exactly; anything else (empty input,
/// stray whitespace, lowercase letters, missing trailing period) is a
/// [`StepdagError::MalformedInstruction`]. A constraint from a step to
/// itself is rejected here as well, so downstream code never sees a
/// self-loop.
pub fn parse_instruction(line: &str) -> Result<Instruction> {
    if line.trim().is_empty() {
        return Err(StepdagError::MalformedInstruction(
            "instruction line is empty or whitespace-only".to_string(),
        ));
    }

    let caps = instruction_regex().captures(line).ok_or_else(|| {
        StepdagError::MalformedInstruction(format!(
            "line does not match the instruction grammar: {line:?}"
        ))
    })?;

    let prerequisite = capture_step(&caps, 1)?;
    let dependent = capture_step(&caps, 2)?;

    if prerequisite == dependent {
        return Err(StepdagError::MalformedInstruction(format!(
            "step {prerequisite} cannot depend on itself"
        )));
    }

    trace!(%prerequisite, %dependent, "parsed instruction");

    Ok(Instruction {
        prerequisite,
        dependent,
    })
}

/// Pull a single-letter capture group out as a [`Step`].
///
/// The character class in the pattern guarantees exactly one uppercase
/// letter, so a failure here indicates the pattern itself changed.
fn capture_step(caps: &regex::Captures<'_>, group: usize) -> Result<Step> {
    let letter = caps
        .get(group)
        .and_then(|m| m.as_str().chars().next())
        .ok_or_else(|| {
            StepdagError::MalformedInstruction(format!(
                "instruction pattern has no capture group {group}"
            ))
        })?;
    Step::new(letter)
}

/// Parse a collection of constraint lines, failing fast on the first
/// malformed line.
///
/// There is no best-effort mode: either every line parses or the whole
/// input is rejected.
pub fn parse_lines<'a>(lines: impl IntoIterator<Item = &'a str>) -> Result<Vec<Instruction>> {
    lines.into_iter().map(parse_instruction).collect()
}
