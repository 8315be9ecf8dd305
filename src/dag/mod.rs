// src/dag/mod.rs

//! Dependency graph and the two schedulers built on top of it.
//!
//! - [`graph`] holds the immutable step graph and the readiness query.
//! - [`order`] produces the deterministic greedy topological order.
//! - [`pool`] simulates execution across a fixed worker pool.
//! - [`timeline`] is the write-once occupancy record used by the pool.

pub mod graph;
pub mod order;
pub mod pool;
pub mod timeline;

pub use graph::StepGraph;
pub use order::{order_steps, order_string};
pub use pool::{simulate, Completion, PoolOutcome};
pub use timeline::Timeline;
