// src/config/mod.rs

//! Optional TOML configuration for the CLI host.
//!
//! - [`model`] defines the raw (deserialized) and validated config types.
//! - [`loader`] reads a file from disk.
//! - [`validate`] turns a raw config into a validated one.

pub mod loader;
pub mod model;
pub mod validate;

pub use loader::{default_config_path, load_and_validate, load_from_path};
pub use model::{ConfigFile, RawConfigFile, ScheduleSection};
