#![allow(dead_code)]

use stepdag::dag::StepGraph;
use stepdag::instruction::Instruction;
use stepdag::types::Step;

/// The seven example constraint lines used throughout the tests:
///
/// ```text
/// C -> A, C -> F, A -> B, A -> D, B -> E, D -> E, F -> E
/// ```
pub const EXAMPLE_LINES: [&str; 7] = [
    "Step C must be finished before step A can begin.",
    "Step C must be finished before step F can begin.",
    "Step A must be finished before step B can begin.",
    "Step A must be finished before step D can begin.",
    "Step B must be finished before step E can begin.",
    "Step D must be finished before step E can begin.",
    "Step F must be finished before step E can begin.",
];

/// Shorthand step constructor for tests.
pub fn step(letter: char) -> Step {
    Step::new(letter).expect("test step letters are uppercase")
}

/// Builder for instruction lists from plain `(prerequisite, dependent)`
/// letter pairs, to keep test fixtures compact.
pub struct InstructionsBuilder {
    instructions: Vec<Instruction>,
}

impl InstructionsBuilder {
    pub fn new() -> Self {
        Self {
            instructions: Vec::new(),
        }
    }

    /// Add an edge: `prerequisite` must finish before `dependent`.
    pub fn edge(mut self, prerequisite: char, dependent: char) -> Self {
        self.instructions.push(Instruction {
            prerequisite: step(prerequisite),
            dependent: step(dependent),
        });
        self
    }

    pub fn build(self) -> Vec<Instruction> {
        self.instructions
    }

    /// Build the instructions and assemble the graph in one go.
    pub fn build_graph(self) -> StepGraph {
        StepGraph::from_instructions(&self.instructions)
            .expect("builder graphs are expected to be acyclic")
    }
}

impl Default for InstructionsBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Instructions for the classic six-step example graph.
pub fn example_instructions() -> Vec<Instruction> {
    InstructionsBuilder::new()
        .edge('C', 'A')
        .edge('C', 'F')
        .edge('A', 'B')
        .edge('A', 'D')
        .edge('B', 'E')
        .edge('D', 'E')
        .edge('F', 'E')
        .build()
}

/// The classic six-step example graph.
pub fn example_graph() -> StepGraph {
    StepGraph::from_instructions(&example_instructions())
        .expect("example graph is acyclic")
}
