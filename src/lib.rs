// src/lib.rs

pub mod cli;
pub mod config;
pub mod dag;
pub mod duration;
pub mod errors;
pub mod instruction;
pub mod logging;
pub mod types;

use std::fs;

use tracing::{debug, info};

use crate::cli::CliArgs;
use crate::config::model::ScheduleSection;
use crate::config::{default_config_path, load_and_validate};
use crate::dag::StepGraph;
use crate::duration::letter_duration;
use crate::errors::Result;
use crate::instruction::parse_lines;

/// High-level entry point used by `main.rs`.
///
/// This wires together:
/// - optional config loading (CLI flags take precedence)
/// - instruction parsing
/// - graph construction
/// - the topological order
/// - the worker-pool simulation
pub fn run(args: CliArgs) -> Result<()> {
    let schedule = resolve_schedule(&args)?;
    info!(
        workers = schedule.workers,
        base_offset = schedule.base_offset,
        "resolved schedule configuration"
    );

    let contents = fs::read_to_string(&args.input)?;
    // `lines()` drops only the final newline's empty remainder; an
    // interior blank line still reaches the parser and fails there.
    let lines: Vec<&str> = contents.lines().collect();
    let instructions = parse_lines(lines)?;
    debug!(count = instructions.len(), "parsed instructions");

    let graph = StepGraph::from_instructions(&instructions)?;
    info!(steps = graph.len(), "built step graph");

    let order = dag::order_string(&graph)?;
    println!("order: {order}");

    if args.order_only {
        return Ok(());
    }

    let outcome = dag::simulate(
        &graph,
        schedule.workers,
        letter_duration(schedule.base_offset),
    )?;

    println!("finish order: {}", outcome.finish_order_string());
    println!("total time: {}", outcome.total_ticks);

    if args.timeline {
        print!("{}", outcome.timeline.render());
    }

    Ok(())
}

/// Merge the schedule section from an optional config file with CLI
/// overrides.
///
/// - `--config PATH` loads that file (an error if missing or invalid).
/// - Without the flag, `Stepdag.toml` is used only if it exists.
/// - `--workers` / `--base-offset` override the file values.
fn resolve_schedule(args: &CliArgs) -> Result<ScheduleSection> {
    let mut schedule = match &args.config {
        Some(path) => load_and_validate(path)?.schedule,
        None => {
            let path = default_config_path();
            if path.exists() {
                load_and_validate(&path)?.schedule
            } else {
                ScheduleSection::default()
            }
        }
    };

    if let Some(workers) = args.workers {
        schedule.workers = workers;
    }
    if let Some(base_offset) = args.base_offset {
        schedule.base_offset = base_offset;
    }

    if schedule.workers == 0 {
        return Err(errors::StepdagError::ConfigError(
            "--workers must be >= 1 (got 0)".to_string(),
        ));
    }

    Ok(schedule)
}
