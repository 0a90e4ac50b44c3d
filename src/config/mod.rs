//! Configuration APIs for linprobe
//!
//! The configuration layer controls how tables are sized and when they grow.
//! Every configuration type implements [`Config`], which provides validation,
//! environment initialization, presets and JSON file persistence.
//!
//! # Environment Initialization
//!
//! ```rust
//! use linprobe::config::{Config, TableConfig};
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! // Reads LINPROBE_TABLE_INITIAL_CAPACITY and friends
//! let config = TableConfig::from_env()?;
//! assert!(config.initial_capacity > 0);
//! # Ok(())
//! # }
//! ```

use crate::error::Result;
use std::env;
use std::fmt;
use std::path::Path;

pub mod table;

#[cfg(test)]
mod tests;

pub use table::TableConfig;

/// Prefix of every environment variable read by [`Config::from_env`]
pub const ENV_PREFIX: &str = "LINPROBE_";

/// Common configuration trait providing validation, environment initialization,
/// and preset management functionality.
pub trait Config: Clone + fmt::Debug {
    /// Validate the configuration for correctness and consistency.
    fn validate(&self) -> Result<()>;

    /// Initialize configuration from environment variables.
    ///
    /// Environment variables use the format `LINPROBE_{COMPONENT}_{FIELD}`,
    /// for example `LINPROBE_TABLE_LOAD_THRESHOLD=0.5`.
    fn from_env() -> Result<Self>
    where
        Self: Default,
    {
        Self::from_env_with_prefix(ENV_PREFIX)
    }

    /// Initialize configuration from environment variables with a custom prefix.
    fn from_env_with_prefix(prefix: &str) -> Result<Self>
    where
        Self: Default;

    /// Preset tuned for fewer collisions at the cost of memory.
    fn performance_preset() -> Self;

    /// Preset tuned for a dense slot array.
    fn memory_preset() -> Self;

    /// Preset tuned for rare, predictable growth events.
    fn realtime_preset() -> Self;

    /// Balanced preset, identical to the default.
    fn balanced_preset() -> Self
    where
        Self: Default,
    {
        Self::default()
    }

    /// Save configuration to a JSON file.
    fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()>;

    /// Load and validate configuration from a JSON file.
    fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self>;
}

/// Parse an environment variable, falling back to `default` when it is unset
/// or does not parse.
pub fn parse_env_var<T>(var_name: &str, default: T) -> T
where
    T: std::str::FromStr + Clone,
{
    env::var(var_name)
        .ok()
        .and_then(|s| s.trim().parse().ok())
        .unwrap_or(default)
}
