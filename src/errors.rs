// src/errors.rs

//! Crate-wide error aliases and helpers.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum StepdagError {
    #[error("Malformed instruction: {0}")]
    MalformedInstruction(String),

    #[error("Cycle detected in step graph: {0}")]
    CyclicDependency(String),

    #[error("Scheduling conflict: {0}")]
    SchedulingConflict(String),

    #[error("Invalid duration: {0}")]
    InvalidDuration(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub use anyhow::Error;
pub type Result<T> = std::result::Result<T, StepdagError>;
