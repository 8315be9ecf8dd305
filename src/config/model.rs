// src/config/model.rs

use serde::Deserialize;

/// `[schedule]` section of the config file.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ScheduleSection {
    /// Number of concurrent worker slots in the pool simulation.
    #[serde(default = "default_workers")]
    pub workers: usize,

    /// Base offset added to each step's letter ordinal to get its
    /// duration (0 for the worked example, 60 for the full puzzle).
    #[serde(default)]
    pub base_offset: u32,
}

fn default_workers() -> usize {
    1
}

impl Default for ScheduleSection {
    fn default() -> Self {
        Self {
            workers: default_workers(),
            base_offset: 0,
        }
    }
}

/// Config file exactly as deserialized, before semantic validation.
///
/// Use [`ConfigFile::try_from`] (via `config::validate`) to obtain a
/// validated config.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawConfigFile {
    #[serde(default)]
    pub schedule: ScheduleSection,
}

/// Validated configuration.
///
/// Construction goes through `TryFrom<RawConfigFile>`, so holders of a
/// `ConfigFile` can rely on `schedule.workers >= 1`.
#[derive(Debug, Clone)]
pub struct ConfigFile {
    pub schedule: ScheduleSection,
}

impl ConfigFile {
    /// Construct without validation. Only `config::validate` should
    /// call this.
    pub(crate) fn new_unchecked(schedule: ScheduleSection) -> Self {
        Self { schedule }
    }
}
