//! Configuration system for the blueprint simulator.
//!
//! This module defines all configuration structures used to parameterize loading
//! and real-time simulation. It provides:
//! 1. **Defaults:** Baseline constants (tick rate, catch-up budget, pixel limit).
//! 2. **Structures:** Hierarchical config for general, load and driver settings.
//! 3. **Parsing:** JSON deserialization from a string or a file.
//!
//! Every field is optional in JSON; missing fields fall back to `Config::default()`.

use std::fs;
use std::path::Path;
use std::time::Duration;

use serde::Deserialize;

use crate::common::ConfigError;

/// Default configuration constants for the simulator.
mod defaults {
    /// Simulation ticks per wall-clock second.
    pub const RATE_HZ: u32 = 60;

    /// Wall-clock budget, in milliseconds of simulated time, that one driver
    /// call may spend catching up before remaining ticks are dropped.
    pub const MAX_CATCH_UP_MS: u64 = 1000;

    /// Interval between driver status lines, in milliseconds.
    pub const REPORT_INTERVAL_MS: u64 = 100;

    /// Largest accepted blueprint (4096 x 4096).
    pub const MAX_PIXELS: u64 = 4096 * 4096;
}

/// Root configuration structure.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// General simulation options.
    #[serde(default)]
    pub general: GeneralConfig,
    /// Blueprint loading limits.
    #[serde(default)]
    pub load: LoadConfig,
    /// Real-time driver pacing.
    #[serde(default)]
    pub driver: DriverConfig,
}

impl Config {
    /// Parses a configuration from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] if the text is not valid configuration JSON.
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(text)?)
    }

    /// Reads and parses a JSON configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read and
    /// [`ConfigError::Parse`] if its contents are invalid.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json(&text)
    }
}

/// General simulation settings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GeneralConfig {
    /// Emit a trace-level event for every simulation tick.
    #[serde(default)]
    pub trace_ticks: bool,
}

/// Limits applied when a blueprint is loaded.
#[derive(Debug, Clone, Deserialize)]
pub struct LoadConfig {
    /// Images with more pixels than this are rejected with `LoadError::TooLarge`.
    #[serde(default = "LoadConfig::default_max_pixels")]
    pub max_pixels: u64,
}

impl LoadConfig {
    /// Returns the default pixel limit.
    fn default_max_pixels() -> u64 {
        defaults::MAX_PIXELS
    }
}

impl Default for LoadConfig {
    fn default() -> Self {
        Self {
            max_pixels: defaults::MAX_PIXELS,
        }
    }
}

/// Pacing of the real-time driver.
#[derive(Debug, Clone, Deserialize)]
pub struct DriverConfig {
    /// Simulation ticks per wall-clock second.
    #[serde(default = "DriverConfig::default_rate_hz")]
    pub rate_hz: u32,

    /// Catch-up budget per driver call, in milliseconds of simulated time.
    #[serde(default = "DriverConfig::default_max_catch_up_ms")]
    pub max_catch_up_ms: u64,

    /// Interval between status reports, in milliseconds.
    #[serde(default = "DriverConfig::default_report_interval_ms")]
    pub report_interval_ms: u64,
}

impl DriverConfig {
    /// Returns the default tick rate.
    fn default_rate_hz() -> u32 {
        defaults::RATE_HZ
    }

    /// Returns the default catch-up budget.
    fn default_max_catch_up_ms() -> u64 {
        defaults::MAX_CATCH_UP_MS
    }

    /// Returns the default report interval.
    fn default_report_interval_ms() -> u64 {
        defaults::REPORT_INTERVAL_MS
    }

    /// Most ticks one driver call may run: `rate_hz * max_catch_up_ms / 1000`, at least 1.
    pub fn max_ticks_per_advance(&self) -> u64 {
        (u64::from(self.rate_hz).saturating_mul(self.max_catch_up_ms) / 1000).max(1)
    }

    /// Report interval as a `Duration`.
    pub const fn report_interval(&self) -> Duration {
        Duration::from_millis(self.report_interval_ms)
    }
}

impl Default for DriverConfig {
    fn default() -> Self {
        Self {
            rate_hz: defaults::RATE_HZ,
            max_catch_up_ms: defaults::MAX_CATCH_UP_MS,
            report_interval_ms: defaults::REPORT_INTERVAL_MS,
        }
    }
}
