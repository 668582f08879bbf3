//! Configuration Module
//!
//! Handles loading toolkit settings from environment variables.

use std::env;
use std::time::Duration;

/// Toolkit configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// Default TTL in seconds for cached values without explicit TTL
    pub default_ttl: u64,
    /// Maximum number of distinct inputs the format memo holds
    pub memo_capacity: usize,
    /// Simulated per-item processing delay in milliseconds
    pub item_delay_ms: u64,
    /// Simulated formatting cost in milliseconds, paid on memo misses only
    pub format_delay_ms: u64,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `DEFAULT_TTL` - Default cache TTL in seconds (default: 300)
    /// - `MEMO_CAPACITY` - Memoized format capacity (default: 1000)
    /// - `ITEM_DELAY_MS` - Per-item processing delay (default: 10)
    /// - `FORMAT_DELAY_MS` - Per-miss formatting delay (default: 1)
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            default_ttl: parse_var("DEFAULT_TTL").unwrap_or(defaults.default_ttl),
            memo_capacity: parse_var("MEMO_CAPACITY").unwrap_or(defaults.memo_capacity),
            item_delay_ms: parse_var("ITEM_DELAY_MS").unwrap_or(defaults.item_delay_ms),
            format_delay_ms: parse_var("FORMAT_DELAY_MS").unwrap_or(defaults.format_delay_ms),
        }
    }

    pub fn item_delay(&self) -> Duration {
        Duration::from_millis(self.item_delay_ms)
    }

    pub fn format_delay(&self) -> Duration {
        Duration::from_millis(self.format_delay_ms)
    }
}

fn parse_var<T: std::str::FromStr>(name: &str) -> Option<T> {
    env::var(name).ok().and_then(|v| v.parse().ok())
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_ttl: 300,
            memo_capacity: 1000,
            item_delay_ms: 10,
            format_delay_ms: 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.default_ttl, 300);
        assert_eq!(config.memo_capacity, 1000);
        assert_eq!(config.item_delay_ms, 10);
        assert_eq!(config.format_delay_ms, 1);
    }

    #[test]
    fn test_config_from_env() {
        // Single test touches the environment so parallel tests cannot race on it
        env::remove_var("DEFAULT_TTL");
        env::remove_var("ITEM_DELAY_MS");
        env::remove_var("FORMAT_DELAY_MS");
        env::set_var("MEMO_CAPACITY", "not-a-number");

        let config = Config::from_env();
        assert_eq!(config.default_ttl, 300);
        assert_eq!(config.memo_capacity, 1000);
        assert_eq!(config.item_delay_ms, 10);
        assert_eq!(config.format_delay_ms, 1);

        env::set_var("MEMO_CAPACITY", "16");
        env::set_var("ITEM_DELAY_MS", "0");
        let config = Config::from_env();
        assert_eq!(config.memo_capacity, 16);
        assert_eq!(config.item_delay(), Duration::ZERO);

        env::remove_var("MEMO_CAPACITY");
        env::remove_var("ITEM_DELAY_MS");
    }
}
