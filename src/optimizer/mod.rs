//! Performance Optimizer Module
//!
//! A memoized string formatter with batch mapping and hit/miss metrics.

mod memo;
mod stats;


use std::num::NonZeroUsize;
use std::thread::sleep;
use std::time::Duration;

use tracing::info;

pub use memo::Memo;
pub use stats::MemoStats;

use crate::config::Config;
use crate::error::{Result, UtilError};
use crate::models::{now_rfc3339, stable_hash, Metrics, Value};

/// Default number of distinct inputs remembered.
pub const DEFAULT_MEMO_CAPACITY: usize = 1000;

// == Performance Optimizer ==
/// Owns the memo for `memoized_format`; dropping the optimizer drops the
/// cache with it.
#[derive(Debug)]
pub struct PerformanceOptimizer {
    memo: Memo<String>,
    /// Simulated cost of one uncached format
    delay: Duration,
}

impl PerformanceOptimizer {
    // == Constructor ==
    /// # Arguments
    /// * `capacity` - Distinct inputs held before LRU eviction starts
    /// * `delay` - Artificial cost paid on every memo miss
    pub fn new(capacity: NonZeroUsize, delay: Duration) -> Self {
        Self {
            memo: Memo::new(capacity),
            delay,
        }
    }

    /// Builds an optimizer from configuration, rejecting a zero capacity.
    pub fn from_config(config: &Config) -> Result<Self> {
        let capacity = NonZeroUsize::new(config.memo_capacity).ok_or_else(|| {
            UtilError::InvalidConfig("memo_capacity must be greater than zero".to_string())
        })?;
        Ok(Self::new(capacity, config.format_delay()))
    }

    // == Memoized Format ==
    /// Returns `processed_<input>_<hash>`, computing it at most once per
    /// input while the input stays in the memo.
    pub fn memoized_format(&mut self, input: &str) -> String {
        let delay = self.delay;
        self.memo.get_or_insert_with(input, || {
            if !delay.is_zero() {
                sleep(delay);
            }
            format!("processed_{}_{}", input, stable_hash(input))
        })
    }

    // == Batch Format ==
    /// Formats each item's display form, preserving input order.
    pub fn batch_format(&mut self, items: &[Value]) -> Vec<String> {
        let results: Vec<String> = items
            .iter()
            .map(|item| self.memoized_format(&item.to_string()))
            .collect();

        let stats = self.memo.stats();
        info!(
            "Batch formatted {} items (hits={}, misses={})",
            results.len(),
            stats.hits,
            stats.misses
        );
        results
    }

    // == Metrics ==
    /// Memo size and cumulative counters, stamped with the current time.
    pub fn metrics(&self) -> Metrics {
        let stats = self.memo.stats();
        Metrics {
            cache_size: self.memo.len(),
            cache_hits: stats.hits,
            cache_misses: stats.misses,
            evictions: stats.evictions,
            hit_rate: stats.hit_rate(),
            timestamp: now_rfc3339(),
        }
    }

    pub fn capacity(&self) -> usize {
        self.memo.capacity()
    }

    /// Empties the memo and resets its counters.
    pub fn clear(&mut self) {
        self.memo.clear();
    }
}

impl Default for PerformanceOptimizer {
    fn default() -> Self {
        let capacity = NonZeroUsize::new(DEFAULT_MEMO_CAPACITY).unwrap_or(NonZeroUsize::MIN);
        Self::new(capacity, Duration::from_millis(1))
    }
}
