//! Configuration types for Game of Life simulations.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

fn default_tick_interval_ms() -> u64 {
    100
}

/// Top-level simulation configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Grid height in cells.
    pub rows: usize,
    /// Grid width in cells.
    pub cols: usize,
    /// Delay between generations while running, in milliseconds.
    #[serde(default = "default_tick_interval_ms")]
    pub tick_interval_ms: u64,
    /// Stop after this many generations. `None` runs until extinction.
    #[serde(default)]
    pub max_generations: Option<u64>,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            rows: 16,
            cols: 16,
            tick_interval_ms: default_tick_interval_ms(),
            max_generations: None,
        }
    }
}

impl SimulationConfig {
    /// Get total cell count (rows * cols), saturating on unvalidated configs.
    #[inline]
    pub fn grid_size(&self) -> usize {
        self.rows.saturating_mul(self.cols)
    }

    /// Parse and validate a JSON configuration.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON configuration file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let json = fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// Validate configuration parameters.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.rows == 0 || self.cols == 0 || self.rows.checked_mul(self.cols).is_none() {
            return Err(ConfigError::InvalidDimensions);
        }
        if self.tick_interval_ms == 0 {
            return Err(ConfigError::InvalidTickInterval);
        }
        Ok(())
    }
}

/// Configuration loading and validation errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Grid dimensions (rows, cols) must be non-zero and their product must fit in usize")]
    InvalidDimensions,
    #[error("Tick interval must be positive")]
    InvalidTickInterval,
    #[error("Error reading config: {0}")]
    Io(#[from] std::io::Error),
    #[error("Error parsing config: {0}")]
    Parse(#[from] serde_json::Error),
}
