// src/dag/timeline.rs

//! Write-once occupancy record for the worker pool.

use std::fmt::Write as _;

use crate::errors::{Result, StepdagError};
use crate::types::{Step, Tick, WorkerId};

/// Mapping from (tick, worker) to the step occupying that cell.
///
/// Cells are write-once: a reservation over an occupied cell is a
/// scheduler bug and fails with [`StepdagError::SchedulingConflict`]
/// rather than silently overwriting. Rows grow on demand as
/// reservations extend the horizon.
#[derive(Debug, Clone)]
pub struct Timeline {
    /// One row per worker, indexed by tick.
    rows: Vec<Vec<Option<Step>>>,
}

impl Timeline {
    /// An empty timeline with the given number of worker rows.
    pub fn new(worker_count: usize) -> Self {
        Self {
            rows: vec![Vec::new(); worker_count],
        }
    }

    /// Number of worker rows.
    pub fn worker_count(&self) -> usize {
        self.rows.len()
    }

    /// The step occupying `(worker, tick)`, if any.
    ///
    /// Out-of-range coordinates read as empty.
    pub fn cell(&self, worker: WorkerId, tick: Tick) -> Option<Step> {
        self.rows
            .get(worker)
            .and_then(|row| row.get(tick as usize))
            .copied()
            .flatten()
    }

    /// `true` if the worker's cells over `[start, start + duration)`
    /// are all empty.
    pub fn is_free(&self, worker: WorkerId, start: Tick, duration: Tick) -> bool {
        (start..start + duration).all(|t| self.cell(worker, t).is_none())
    }

    /// Reserve `[start, start + duration)` on `worker` for `step`.
    ///
    /// Every cell in the range must be empty; a double-booking is an
    /// internal invariant violation and is reported as
    /// [`StepdagError::SchedulingConflict`].
    pub fn reserve(
        &mut self,
        worker: WorkerId,
        start: Tick,
        duration: Tick,
        step: Step,
    ) -> Result<()> {
        let worker_count = self.rows.len();
        let row = self.rows.get_mut(worker).ok_or_else(|| {
            StepdagError::SchedulingConflict(format!(
                "worker {worker} does not exist (pool has {worker_count} workers)"
            ))
        })?;

        let end = (start + duration) as usize;
        if row.len() < end {
            row.resize(end, None);
        }

        for tick in start..start + duration {
            let cell = &mut row[tick as usize];
            if let Some(occupant) = *cell {
                return Err(StepdagError::SchedulingConflict(format!(
                    "worker {worker} tick {tick}: cell already holds step '{occupant}' \
                     while reserving step '{step}'"
                )));
            }
            *cell = Some(step);
        }

        Ok(())
    }

    /// Total elapsed time: one past the last occupied tick across all
    /// workers. Zero for an empty timeline.
    pub fn total_ticks(&self) -> Tick {
        self.rows
            .iter()
            .map(|row| {
                row.iter()
                    .rposition(|cell| cell.is_some())
                    .map(|idx| idx as Tick + 1)
                    .unwrap_or(0)
            })
            .max()
            .unwrap_or(0)
    }

    /// Render the occupancy grid as a table, one row per tick, for
    /// inspection and debugging. Empty cells show as '.'.
    pub fn render(&self) -> String {
        let total = self.total_ticks();
        let mut out = String::new();

        let _ = write!(out, "tick");
        for worker in 0..self.rows.len() {
            let _ = write!(out, "  w{worker}");
        }
        out.push('\n');

        for tick in 0..total {
            let _ = write!(out, "{tick:>4}");
            for worker in 0..self.rows.len() {
                match self.cell(worker, tick) {
                    Some(step) => {
                        let _ = write!(out, "   {step}");
                    }
                    None => out.push_str("   ."),
                }
            }
            out.push('\n');
        }

        out
    }
}
