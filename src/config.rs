//! Configuration Module
//!
//! Handles loading the driver configuration from environment variables.

use std::env;

/// Driver configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// Maximum number of entries the cache can hold
    pub capacity: usize,
    /// Seconds between periodic stats log lines, 0 disables the reporter
    pub stats_interval: u64,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `CACHE_CAPACITY` - Maximum cache entries (default: 1000)
    /// - `STATS_INTERVAL` - Stats reporting period in seconds (default: 0, disabled)
    ///
    /// Unparsable values fall back to the default. A capacity of 0 is kept
    /// as-is and rejected when the cache is built.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            capacity: env::var("CACHE_CAPACITY")
                .ok()
                .and_then(|v| v.trim().parse().ok())
                .unwrap_or(defaults.capacity),
            stats_interval: env::var("STATS_INTERVAL")
                .ok()
                .and_then(|v| v.trim().parse().ok())
                .unwrap_or(defaults.stats_interval),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            capacity: 1000,
            stats_interval: 0,
        }
    }
}
