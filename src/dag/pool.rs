// src/dag/pool.rs

//! Discrete-time simulation of the step graph over a fixed worker pool.
//!
//! The simulation is single-threaded and fully deterministic: "workers"
//! are simulated resource slots, time is a logical tick counter, and
//! the only concurrency invariant is that no (tick, worker) cell ever
//! holds two steps, which the write-once [`Timeline`] enforces.

use std::collections::{BTreeMap, BTreeSet};

use tracing::debug;

use crate::dag::graph::StepGraph;
use crate::dag::timeline::Timeline;
use crate::errors::{Result, StepdagError};
use crate::types::{Step, Tick, WorkerId};

/// One completion event: `step` finished at the end of `finished_at`
/// (its last occupied tick).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Completion {
    pub step: Step,
    pub finished_at: Tick,
}

/// Result of a full pool simulation.
#[derive(Debug, Clone)]
pub struct PoolOutcome {
    /// Full occupancy record, for inspection and debugging.
    pub timeline: Timeline,
    /// One past the last occupied tick across all workers.
    pub total_ticks: Tick,
    /// Completion events in chronological order, ties broken by step
    /// identifier.
    pub completions: Vec<Completion>,
}

impl PoolOutcome {
    /// The completion sequence rendered as a single string, e.g.
    /// `"CABFDE"`.
    pub fn finish_order_string(&self) -> String {
        self.completions.iter().map(|c| c.step.letter()).collect()
    }
}

/// Simulate executing `graph` on `worker_count` interchangeable workers.
///
/// `duration` maps each step to its length in ticks and must return a
/// positive value; zero or negative is [`StepdagError::InvalidDuration`].
///
/// Steps are assigned greedily: at each decision point the ready steps
/// (all prerequisites already placed) are visited in ascending
/// identifier order, and each is placed at the earliest tick at or
/// after its lower bound where some worker is free for its whole
/// duration, preferring the lowest free worker id. The lower bound is
/// one past the latest prerequisite finish tick, so a step never shares
/// its first tick with a prerequisite's last.
///
/// Given the same graph, worker count and duration function the
/// returned timeline and completion order are identical across runs;
/// every collection iterated here is ordered.
pub fn simulate(
    graph: &StepGraph,
    worker_count: usize,
    duration: impl Fn(Step) -> i64,
) -> Result<PoolOutcome> {
    if worker_count == 0 {
        return Err(StepdagError::ConfigError(
            "worker count must be >= 1 (got 0)".to_string(),
        ));
    }

    let mut timeline = Timeline::new(worker_count);
    // Steps already placed on the timeline, with their last occupied tick.
    let mut finish: BTreeMap<Step, Tick> = BTreeMap::new();
    let mut placed: BTreeSet<Step> = BTreeSet::new();

    while placed.len() < graph.len() {
        let ready = graph.ready_steps(&placed);
        if ready.is_empty() {
            let stuck: Vec<String> = graph
                .steps()
                .filter(|s| !placed.contains(s))
                .map(|s| s.to_string())
                .collect();
            return Err(StepdagError::CyclicDependency(format!(
                "no step is ready but {} remain: {}",
                stuck.len(),
                stuck.join(", ")
            )));
        }

        for step in ready {
            let ticks = step_duration(&duration, step)?;

            // A step must begin strictly after every prerequisite's
            // last occupied tick.
            let lower_bound = graph
                .prerequisites_of(step)
                .filter_map(|p| finish.get(&p).copied())
                .map(|last| last + 1)
                .max()
                .unwrap_or(0);

            let (start, worker) = earliest_slot(&timeline, lower_bound, ticks)?;
            timeline.reserve(worker, start, ticks, step)?;

            let finished_at = start + ticks - 1;
            debug!(
                step = %step,
                worker,
                start,
                finished_at,
                "placed step on timeline"
            );

            finish.insert(step, finished_at);
            placed.insert(step);
        }
    }

    let mut completions: Vec<Completion> = finish
        .iter()
        .map(|(step, finished_at)| Completion {
            step: *step,
            finished_at: *finished_at,
        })
        .collect();
    completions.sort_by_key(|c| (c.finished_at, c.step));

    let total_ticks = timeline.total_ticks();

    Ok(PoolOutcome {
        timeline,
        total_ticks,
        completions,
    })
}

/// Evaluate the duration function for one step, rejecting non-positive
/// results.
fn step_duration(duration: &impl Fn(Step) -> i64, step: Step) -> Result<Tick> {
    let raw = duration(step);
    if raw <= 0 {
        return Err(StepdagError::InvalidDuration(format!(
            "duration of step '{step}' must be positive (got {raw})"
        )));
    }
    Ok(raw as Tick)
}

/// The earliest (tick, worker) pair at or after `lower_bound` where the
/// worker is free for the full duration.
///
/// Each worker's earliest candidate is found by scanning upward from
/// the lower bound; the scan terminates because every row is empty past
/// its current end. `min` on (tick, worker) then picks the earliest
/// tick and, among equal ticks, the lowest worker id.
fn earliest_slot(timeline: &Timeline, lower_bound: Tick, ticks: Tick) -> Result<(Tick, WorkerId)> {
    (0..timeline.worker_count())
        .map(|worker| {
            let mut start = lower_bound;
            while !timeline.is_free(worker, start, ticks) {
                start += 1;
            }
            (start, worker)
        })
        .min()
        .ok_or_else(|| StepdagError::ConfigError("worker pool is empty".to_string()))
}
