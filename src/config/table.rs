//! Table sizing and growth configuration.

use super::{parse_env_var, Config};
use crate::error::{ProbeTableError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Initial slot count used when none is given
pub const DEFAULT_INITIAL_CAPACITY: usize = 16;
/// Load factor at which a table grows (inclusive)
pub const DEFAULT_LOAD_THRESHOLD: f64 = 0.75;
/// Multiplier applied to the slot count on growth
pub const DEFAULT_RESIZE_FACTOR: usize = 2;

/// Sizing and growth policy for an [`OpenAddressTable`](crate::OpenAddressTable).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableConfig {
    /// Number of slots allocated at construction, must be positive
    pub initial_capacity: usize,
    /// Growth happens once `size / capacity` reaches this value, in (0, 1]
    pub load_threshold: f64,
    /// Integer growth multiplier, at least 2
    pub resize_factor: usize,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            initial_capacity: DEFAULT_INITIAL_CAPACITY,
            load_threshold: DEFAULT_LOAD_THRESHOLD,
            resize_factor: DEFAULT_RESIZE_FACTOR,
        }
    }
}

impl TableConfig {
    /// Default policy with a custom initial capacity
    pub fn with_capacity(initial_capacity: usize) -> Self {
        Self {
            initial_capacity,
            ..Self::default()
        }
    }

    /// Set the load threshold
    pub fn load_threshold(mut self, load_threshold: f64) -> Self {
        self.load_threshold = load_threshold;
        self
    }

    /// Set the resize factor
    pub fn resize_factor(mut self, resize_factor: usize) -> Self {
        self.resize_factor = resize_factor;
        self
    }

    /// Defaults overridden by `{prefix}TABLE_*` variables, not yet validated
    ///
    /// For callers that apply further overrides before calling
    /// [`Config::validate`].
    pub fn read_env(prefix: &str) -> Self {
        let defaults = Self::default();
        Self {
            initial_capacity: parse_env_var(
                &format!("{}TABLE_INITIAL_CAPACITY", prefix),
                defaults.initial_capacity,
            ),
            load_threshold: parse_env_var(
                &format!("{}TABLE_LOAD_THRESHOLD", prefix),
                defaults.load_threshold,
            ),
            resize_factor: parse_env_var(
                &format!("{}TABLE_RESIZE_FACTOR", prefix),
                defaults.resize_factor,
            ),
        }
    }
}

impl Config for TableConfig {
    fn validate(&self) -> Result<()> {
        if self.initial_capacity == 0 {
            return Err(ProbeTableError::configuration(
                "initial_capacity must be greater than 0",
            ));
        }
        if !self.load_threshold.is_finite()
            || self.load_threshold <= 0.0
            || self.load_threshold > 1.0
        {
            return Err(ProbeTableError::configuration(format!(
                "load_threshold must be in (0, 1], got {}",
                self.load_threshold
            )));
        }
        if self.resize_factor < 2 {
            return Err(ProbeTableError::configuration(format!(
                "resize_factor must be at least 2, got {}",
                self.resize_factor
            )));
        }
        Ok(())
    }

    fn from_env_with_prefix(prefix: &str) -> Result<Self> {
        let config = Self::read_env(prefix);
        config.validate()?;
        Ok(config)
    }

    fn performance_preset() -> Self {
        Self { initial_capacity: 64, load_threshold: 0.5, resize_factor: 2 }
    }

    fn memory_preset() -> Self {
        Self { initial_capacity: 8, load_threshold: 0.9, resize_factor: 2 }
    }

    fn realtime_preset() -> Self {
        Self { initial_capacity: 256, load_threshold: 0.5, resize_factor: 4 }
    }

    fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let serialized = serde_json::to_string_pretty(self).map_err(|e| {
            ProbeTableError::configuration(format!("Failed to serialize table config: {}", e))
        })?;
        std::fs::write(path, serialized).map_err(|e| {
            ProbeTableError::configuration(format!("Failed to write table config file: {}", e))
        })?;
        Ok(())
    }

    fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            ProbeTableError::configuration(format!("Failed to read table config file: {}", e))
        })?;
        let config: Self = serde_json::from_str(&content).map_err(|e| {
            ProbeTableError::configuration(format!("Failed to parse table config file: {}", e))
        })?;
        config.validate()?;
        Ok(config)
    }
}
