// tests/instruction_parsing.rs
mod common;
use crate::common::builders::{step, EXAMPLE_LINES};
use crate::common::init_tracing;

use stepdag::errors::StepdagError;
use stepdag::instruction::{parse_instruction, parse_lines};

#[test]
fn parses_all_example_lines() {
    init_tracing();

    let instructions = parse_lines(EXAMPLE_LINES).expect("example lines parse");

    assert_eq!(instructions.len(), 7);
    for ins in &instructions {
        assert!(ins.prerequisite.letter().is_ascii_uppercase());
        assert!(ins.dependent.letter().is_ascii_uppercase());
        assert_ne!(ins.prerequisite, ins.dependent);
    }

    assert_eq!(instructions[0].prerequisite, step('C'));
    assert_eq!(instructions[0].dependent, step('A'));
    assert_eq!(instructions[6].prerequisite, step('F'));
    assert_eq!(instructions[6].dependent, step('E'));
}

#[test]
fn rejects_empty_and_whitespace_lines() {
    for line in ["", "   ", "\t"] {
        let err = parse_instruction(line).unwrap_err();
        assert!(matches!(err, StepdagError::MalformedInstruction(_)), "{line:?}: {err}");
    }
}

#[test]
fn rejects_lines_off_the_grammar() {
    let bad = [
        // lowercase letters
        "Step c must be finished before step A can begin.",
        "Step C must be finished before step a can begin.",
        // multi-letter identifiers
        "Step CC must be finished before step A can begin.",
        // missing trailing period
        "Step C must be finished before step A can begin",
        // leading/trailing noise
        " Step C must be finished before step A can begin.",
        "Step C must be finished before step A can begin. ",
        "xStep C must be finished before step A can begin.",
        // wrong wording
        "Step C should be finished before step A can begin.",
    ];

    for line in bad {
        let err = parse_instruction(line).unwrap_err();
        assert!(matches!(err, StepdagError::MalformedInstruction(_)), "{line:?}: {err}");
    }
}

#[test]
fn rejects_self_loops() {
    let err =
        parse_instruction("Step A must be finished before step A can begin.").unwrap_err();
    assert!(matches!(err, StepdagError::MalformedInstruction(_)));
}

#[test]
fn parse_lines_fails_fast_on_first_bad_line() {
    let lines = [
        "Step C must be finished before step A can begin.",
        "not an instruction",
        "Step A must be finished before step B can begin.",
    ];

    let err = parse_lines(lines).unwrap_err();
    match err {
        StepdagError::MalformedInstruction(msg) => {
            assert!(msg.contains("not an instruction"), "{msg}");
        }
        other => panic!("expected MalformedInstruction, got {other}"),
    }
}
