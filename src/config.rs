//! Configuration Module
//!
//! Handles loading cache and workload configuration from environment variables.

use std::env;
use std::time::Duration;

/// Cache and workload configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// TTL in seconds applied to every entry, 0 = entries never expire
    pub ttl_secs: u64,
    /// Number of concurrent workers driving the cache
    pub workers: usize,
    /// Number of distinct keys each worker writes
    pub keys_per_worker: usize,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `CACHE_TTL_SECS` - Entry TTL in seconds, 0 disables expiry (default: 300)
    /// - `WORKLOAD_WORKERS` - Concurrent workers (default: 8)
    /// - `WORKLOAD_KEYS_PER_WORKER` - Keys written per worker (default: 1000)
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            ttl_secs: parse_var("CACHE_TTL_SECS").unwrap_or(defaults.ttl_secs),
            workers: parse_var("WORKLOAD_WORKERS").unwrap_or(defaults.workers),
            keys_per_worker: parse_var("WORKLOAD_KEYS_PER_WORKER")
                .unwrap_or(defaults.keys_per_worker),
        }
    }

    /// Returns the configured TTL, or `None` when expiry is disabled.
    pub fn ttl(&self) -> Option<Duration> {
        match self.ttl_secs {
            0 => None,
            secs => Some(Duration::from_secs(secs)),
        }
    }
}

fn parse_var<T: std::str::FromStr>(name: &str) -> Option<T> {
    env::var(name).ok().and_then(|v| v.parse().ok())
}

impl Default for Config {
    fn default() -> Self {
        Self {
            ttl_secs: 300,
            workers: 8,
            keys_per_worker: 1000,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.ttl_secs, 300);
        assert_eq!(config.workers, 8);
        assert_eq!(config.keys_per_worker, 1000);
    }

    #[test]
    fn test_config_from_env_defaults() {
        // Clear any existing env vars to test defaults
        env::remove_var("CACHE_TTL_SECS");
        env::remove_var("WORKLOAD_WORKERS");
        env::remove_var("WORKLOAD_KEYS_PER_WORKER");

        let config = Config::from_env();
        assert_eq!(config.ttl_secs, 300);
        assert_eq!(config.workers, 8);
        assert_eq!(config.keys_per_worker, 1000);
    }

    #[test]
    fn test_zero_ttl_disables_expiry() {
        let config = Config {
            ttl_secs: 0,
            ..Config::default()
        };
        assert!(config.ttl().is_none());
        assert_eq!(Config::default().ttl(), Some(Duration::from_secs(300)));
    }
}
