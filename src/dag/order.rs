// src/dag/order.rs

//! Deterministic single-resource topological ordering.

use std::collections::BTreeSet;

use tracing::debug;

use crate::dag::graph::StepGraph;
use crate::errors::{Result, StepdagError};
use crate::types::Step;

/// Produce the unique greedy topological order of the graph.
///
/// Repeatedly selects the smallest currently-ready step, appends it and
/// marks it completed. Among all valid topological orders of the graph
/// this yields the lexicographically smallest one, which is the fixed
/// tie-break rule callers rely on.
///
/// Terminates in exactly N iterations for N steps. If an iteration
/// finds no ready step while steps remain, the constraints admit no
/// schedule and [`StepdagError::CyclicDependency`] is returned instead
/// of looping forever.
pub fn order_steps(graph: &StepGraph) -> Result<Vec<Step>> {
    let mut completed: BTreeSet<Step> = BTreeSet::new();
    let mut order: Vec<Step> = Vec::with_capacity(graph.len());

    while completed.len() < graph.len() {
        // ready_steps returns ascending order, so the first entry is
        // the smallest ready identifier.
        let next = match graph.ready_steps(&completed).first().copied() {
            Some(step) => step,
            None => {
                let stuck: Vec<String> = graph
                    .steps()
                    .filter(|s| !completed.contains(s))
                    .map(|s| s.to_string())
                    .collect();
                return Err(StepdagError::CyclicDependency(format!(
                    "no step is ready but {} remain: {}",
                    stuck.len(),
                    stuck.join(", ")
                )));
            }
        };

        debug!(step = %next, position = order.len(), "selected next step");
        completed.insert(next);
        order.push(next);
    }

    Ok(order)
}

/// The greedy topological order rendered as a single string, e.g.
/// `"CABDFE"`.
pub fn order_string(graph: &StepGraph) -> Result<String> {
    Ok(order_steps(graph)?.into_iter().map(Step::letter).collect())
}
