// src/dag/graph.rs

use std::collections::{BTreeMap, BTreeSet};

use petgraph::algo::toposort;
use petgraph::graphmap::DiGraphMap;

use crate::errors::{Result, StepdagError};
use crate::instruction::Instruction;
use crate::types::Step;

/// Internal node structure: stores immediate prerequisites and dependents.
#[derive(Debug, Clone, Default)]
struct StepNode {
    /// Direct prerequisites: steps that must finish before this one starts.
    prerequisites: BTreeSet<Step>,
    /// Direct dependents: steps that list this one as a prerequisite.
    dependents: BTreeSet<Step>,
}

/// Immutable dependency graph over steps.
///
/// Built once from the full instruction list and read-only thereafter.
/// Scheduling progress is never recorded here; both schedulers track an
/// external completed-set and ask [`StepGraph::ready_steps`] what may
/// run next. That keeps readiness a pure query over (graph, completed)
/// and makes every scheduling decision replayable.
///
/// All containers are ordered (`BTreeMap` / `BTreeSet`), so iteration
/// order is deterministic without any extra sorting.
#[derive(Debug, Clone)]
pub struct StepGraph {
    nodes: BTreeMap<Step, StepNode>,
}

impl StepGraph {
    /// Build a graph from parsed instructions.
    ///
    /// The step set is the union of both endpoints across all
    /// instructions; a step that never appears as a dependent has an
    /// empty prerequisite set and is immediately ready.
    ///
    /// Fails with [`StepdagError::CyclicDependency`] if the constraints
    /// admit no valid schedule, so an invalid graph cannot be
    /// constructed at all.
    pub fn from_instructions(instructions: &[Instruction]) -> Result<Self> {
        let mut nodes: BTreeMap<Step, StepNode> = BTreeMap::new();

        for ins in instructions {
            nodes.entry(ins.prerequisite).or_default();
            nodes
                .entry(ins.dependent)
                .or_default()
                .prerequisites
                .insert(ins.prerequisite);
        }

        // Second pass: populate dependents from the prerequisite sets.
        let edges: Vec<(Step, Step)> = nodes
            .iter()
            .flat_map(|(step, node)| node.prerequisites.iter().map(|p| (*p, *step)))
            .collect();
        for (prerequisite, dependent) in edges {
            if let Some(node) = nodes.get_mut(&prerequisite) {
                node.dependents.insert(dependent);
            }
        }

        let graph = Self { nodes };
        graph.validate()?;
        Ok(graph)
    }

    /// Check that the graph is acyclic.
    ///
    /// Edge direction: prerequisite -> dependent. A topological sort
    /// will fail if and only if there is a cycle.
    pub fn validate(&self) -> Result<()> {
        let mut graph: DiGraphMap<Step, ()> = DiGraphMap::new();

        for step in self.nodes.keys() {
            graph.add_node(*step);
        }

        for (step, node) in self.nodes.iter() {
            for prerequisite in node.prerequisites.iter() {
                graph.add_edge(*prerequisite, *step, ());
            }
        }

        match toposort(&graph, None) {
            Ok(_order) => Ok(()),
            Err(cycle) => Err(StepdagError::CyclicDependency(format!(
                "cycle involving step '{}'",
                cycle.node_id()
            ))),
        }
    }

    /// All steps in ascending identifier order.
    pub fn steps(&self) -> impl Iterator<Item = Step> + '_ {
        self.nodes.keys().copied()
    }

    /// Number of distinct steps.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// `true` if the graph holds no steps at all.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// `true` if the step appears in the graph.
    pub fn contains(&self, step: Step) -> bool {
        self.nodes.contains_key(&step)
    }

    /// Immediate prerequisites of a step.
    pub fn prerequisites_of(&self, step: Step) -> impl Iterator<Item = Step> + '_ {
        self.nodes
            .get(&step)
            .into_iter()
            .flat_map(|n| n.prerequisites.iter().copied())
    }

    /// Immediate dependents of a step.
    pub fn dependents_of(&self, step: Step) -> impl Iterator<Item = Step> + '_ {
        self.nodes
            .get(&step)
            .into_iter()
            .flat_map(|n| n.dependents.iter().copied())
    }

    /// Steps whose every prerequisite is in `completed` and which are
    /// not themselves in `completed`, in ascending identifier order.
    ///
    /// This is the single readiness rule shared by both schedulers.
    pub fn ready_steps(&self, completed: &BTreeSet<Step>) -> Vec<Step> {
        self.nodes
            .iter()
            .filter(|(step, node)| {
                !completed.contains(step)
                    && node.prerequisites.iter().all(|p| completed.contains(p))
            })
            .map(|(step, _)| *step)
            .collect()
    }
}
