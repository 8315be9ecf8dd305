// src/cli.rs

//! CLI argument parsing using `clap`.

use clap::{Parser, ValueEnum};

/// Command-line arguments for `stepdag`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "stepdag",
    version,
    about = "Order dependency-constrained steps and simulate them on a worker pool.",
    long_about = None
)]
pub struct CliArgs {
    /// Path to the instruction file (one constraint per line).
    #[arg(value_name = "INPUT")]
    pub input: String,

    /// Path to an optional config file (TOML).
    ///
    /// Default: `Stepdag.toml` in the current working directory, if it
    /// exists.
    #[arg(long, value_name = "PATH")]
    pub config: Option<String>,

    /// Number of worker slots. Overrides `[schedule].workers`.
    #[arg(long, value_name = "N")]
    pub workers: Option<usize>,

    /// Base offset added to each step's letter ordinal to get its
    /// duration. Overrides `[schedule].base_offset`.
    #[arg(long, value_name = "TICKS")]
    pub base_offset: Option<u32>,

    /// Only compute and print the topological order; skip the pool
    /// simulation.
    #[arg(long)]
    pub order_only: bool,

    /// Print the full (tick, worker) occupancy table after simulating.
    #[arg(long)]
    pub timeline: bool,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `STEPDAG_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,
}

/// Log level as exposed on the CLI.
#[derive(Debug, Copy, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Convenience wrapper around `CliArgs::parse()`.
pub fn parse() -> CliArgs {
    CliArgs::parse()
}
