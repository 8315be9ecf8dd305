// tests/worker_pool.rs
mod common;
use crate::common::builders::{example_graph, step, InstructionsBuilder};
use crate::common::init_tracing;

use stepdag::dag::{simulate, Timeline};
use stepdag::duration::{letter_duration, uniform_duration};
use stepdag::errors::StepdagError;

#[test]
fn two_workers_finish_example_in_fifteen_ticks() {
    init_tracing();

    let graph = example_graph();
    let outcome = simulate(&graph, 2, letter_duration(0)).unwrap();

    assert_eq!(outcome.finish_order_string(), "CABFDE");
    assert_eq!(outcome.total_ticks, 15);
}

#[test]
fn two_worker_timeline_matches_the_worked_example() {
    let graph = example_graph();
    let outcome = simulate(&graph, 2, letter_duration(0)).unwrap();
    let timeline = &outcome.timeline;

    // C runs alone on worker 0 for its three ticks.
    for tick in 0..3 {
        assert_eq!(timeline.cell(0, tick), Some(step('C')));
        assert_eq!(timeline.cell(1, tick), None);
    }
    // A (one tick) lands on worker 0, F (six ticks) on worker 1.
    assert_eq!(timeline.cell(0, 3), Some(step('A')));
    for tick in 3..9 {
        assert_eq!(timeline.cell(1, tick), Some(step('F')));
    }
    // B then D follow on worker 0.
    for tick in 4..6 {
        assert_eq!(timeline.cell(0, tick), Some(step('B')));
    }
    for tick in 6..10 {
        assert_eq!(timeline.cell(0, tick), Some(step('D')));
    }
    // E waits for B, D and F, then takes its five ticks on worker 0.
    for tick in 10..15 {
        assert_eq!(timeline.cell(0, tick), Some(step('E')));
    }
    assert_eq!(timeline.cell(0, 15), None);
    assert_eq!(timeline.total_ticks(), 15);
}

#[test]
fn single_worker_serializes_all_steps() {
    let graph = example_graph();
    let outcome = simulate(&graph, 1, letter_duration(0)).unwrap();

    // One worker can never overlap, so the total is the sum of all
    // durations: 1 + 2 + 3 + 4 + 5 + 6.
    assert_eq!(outcome.total_ticks, 21);
    assert_eq!(outcome.finish_order_string(), "CAFBDE");
}

#[test]
fn completion_order_respects_prerequisites() {
    let graph = example_graph();
    let outcome = simulate(&graph, 3, letter_duration(7)).unwrap();

    let finish =
        |s| outcome.completions.iter().find(|c| c.step == s).unwrap().finished_at;

    for dependent in graph.steps() {
        let duration = letter_duration(7)(dependent) as u64;
        let start = finish(dependent) + 1 - duration;
        for prerequisite in graph.prerequisites_of(dependent) {
            assert!(
                start > finish(prerequisite),
                "{dependent} starts at {start}, not after {prerequisite} \
                 finishing at {}",
                finish(prerequisite)
            );
        }
    }
}

#[test]
fn more_workers_never_slow_the_schedule_down() {
    let graph = example_graph();

    let mut previous = None;
    for workers in 1..=4 {
        let outcome = simulate(&graph, workers, letter_duration(0)).unwrap();
        if let Some(prev) = previous {
            assert!(
                outcome.total_ticks <= prev,
                "{workers} workers took {} ticks, more than {prev}",
                outcome.total_ticks
            );
        }
        previous = Some(outcome.total_ticks);
    }
}

#[test]
fn simulation_is_deterministic_across_runs() {
    let graph = example_graph();

    let first = simulate(&graph, 2, letter_duration(60)).unwrap();
    let second = simulate(&graph, 2, letter_duration(60)).unwrap();

    assert_eq!(first.total_ticks, second.total_ticks);
    assert_eq!(first.completions, second.completions);
    assert_eq!(first.timeline.render(), second.timeline.render());
}

#[test]
fn zero_duration_is_rejected() {
    let graph = example_graph();

    let err = simulate(&graph, 2, uniform_duration(0)).unwrap_err();
    assert!(matches!(err, StepdagError::InvalidDuration(_)), "{err}");
}

#[test]
fn negative_duration_is_rejected() {
    let graph = example_graph();

    // A function that dips negative for one step only.
    let duration = |s| if s == step('D') { -3 } else { 5 };
    let err = simulate(&graph, 2, duration).unwrap_err();
    assert!(matches!(err, StepdagError::InvalidDuration(_)), "{err}");
}

#[test]
fn zero_workers_is_a_config_error() {
    let graph = example_graph();

    let err = simulate(&graph, 0, letter_duration(0)).unwrap_err();
    assert!(matches!(err, StepdagError::ConfigError(_)), "{err}");
}

#[test]
fn empty_graph_simulates_to_nothing() {
    let graph = InstructionsBuilder::new().build_graph();

    let outcome = simulate(&graph, 2, letter_duration(0)).unwrap();
    assert_eq!(outcome.total_ticks, 0);
    assert!(outcome.completions.is_empty());
}

#[test]
fn timeline_rejects_double_booking() {
    let mut timeline = Timeline::new(2);

    timeline.reserve(0, 0, 3, step('C')).unwrap();
    // Overlapping the tail of C on the same worker must fail loudly.
    let err = timeline.reserve(0, 2, 2, step('A')).unwrap_err();
    assert!(matches!(err, StepdagError::SchedulingConflict(_)), "{err}");

    // The other worker is unaffected.
    timeline.reserve(1, 2, 2, step('A')).unwrap();
    assert_eq!(timeline.cell(1, 2), Some(step('A')));
}

#[test]
fn timeline_rejects_unknown_worker() {
    let mut timeline = Timeline::new(1);

    let err = timeline.reserve(3, 0, 1, step('A')).unwrap_err();
    assert!(matches!(err, StepdagError::SchedulingConflict(_)), "{err}");
}

#[test]
fn timeline_render_shows_occupancy() {
    let graph = example_graph();
    let outcome = simulate(&graph, 2, letter_duration(0)).unwrap();

    let table = outcome.timeline.render();
    assert!(table.starts_with("tick  w0  w1"));
    // 15 tick rows plus the header.
    assert_eq!(table.lines().count(), 16);
    assert!(table.contains('C'));
    assert!(table.contains('E'));
}
