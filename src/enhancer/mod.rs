//! Enhancer Module
//!
//! Fan-out item processing, TTL-checked value caching and dataset analytics,
//! with an append-only log of processing runs.

mod analytics;
mod entry;
mod processor;
mod ttl_cache;

use std::time::Duration;

use tracing::info;

pub use analytics::summarize;
pub use entry::TimedEntry;
pub use processor::{process_all, process_item};
pub use ttl_cache::TtlCache;

use crate::config::Config;
use crate::error::Result;
use crate::models::{now_rfc3339, BatchReport, EnhancementRecord, Summary, Value};

/// Feature name recorded for fan-out processing runs.
pub const ASYNC_PROCESSING: &str = "async_processing";

// == Feature Enhancer ==
/// Owns a TTL cache of computed values and the log of processing runs.
///
/// Nothing is shared between instances; both the cache and the log live
/// exactly as long as the enhancer.
#[derive(Debug)]
pub struct FeatureEnhancer {
    cache: TtlCache<Value>,
    log: Vec<EnhancementRecord>,
    item_delay: Duration,
}

impl FeatureEnhancer {
    pub fn new(config: &Config) -> Self {
        Self {
            cache: TtlCache::new(config.default_ttl),
            log: Vec::new(),
            item_delay: config.item_delay(),
        }
    }

    // == Process Items ==
    /// Processes all items concurrently and appends one summary record to
    /// the history.
    ///
    /// Fail-fast: if any item task fails the error is returned and no
    /// record is written.
    pub async fn process_items_concurrently(&mut self, items: Vec<Value>) -> Result<BatchReport> {
        let (results, elapsed) = process_all(items, self.item_delay).await?;
        let processing_time = elapsed.as_secs_f64();

        self.log.push(EnhancementRecord {
            feature: ASYNC_PROCESSING.to_string(),
            items_processed: results.len(),
            processing_time,
            timestamp: now_rfc3339(),
        });

        Ok(BatchReport {
            items_count: results.len(),
            results,
            processing_time,
        })
    }

    // == Cached Value ==
    /// Returns the cached value for `key` if younger than `ttl` seconds
    /// (default 300), otherwise stores and returns `producer()`.
    pub fn cached_value<F>(&mut self, key: &str, producer: F, ttl: Option<u64>) -> Value
    where
        F: FnOnce() -> Value,
    {
        self.cache.get_or_compute(key, producer, ttl)
    }

    /// Like [`FeatureEnhancer::cached_value`] but with a fallible producer.
    /// Errors propagate and nothing is cached.
    pub fn try_cached_value<F, E>(
        &mut self,
        key: &str,
        producer: F,
        ttl: Option<u64>,
    ) -> std::result::Result<Value, E>
    where
        F: FnOnce() -> std::result::Result<Value, E>,
    {
        self.cache.try_get_or_compute(key, producer, ttl)
    }

    pub fn cache_len(&self) -> usize {
        self.cache.len()
    }

    // == Summarize ==
    /// Type histogram, duplicate flag and insights for `data`.
    pub fn summarize(&self, data: &[Value]) -> Result<Summary> {
        let summary = summarize(data)?;
        info!(
            "Summarized {} items across {} types",
            summary.total_items,
            summary.data_types.len()
        );
        Ok(summary)
    }

    // == History ==
    /// All processing runs so far, oldest first.
    pub fn enhancement_history(&self) -> &[EnhancementRecord] {
        &self.log
    }
}

impl Default for FeatureEnhancer {
    fn default() -> Self {
        Self::new(&Config::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    fn fast_enhancer() -> FeatureEnhancer {
        let config = Config {
            item_delay_ms: 1,
            ..Config::default()
        };
        FeatureEnhancer::new(&config)
    }

    #[tokio::test]
    async fn test_process_items_appends_history() {
        let mut enhancer = fast_enhancer();
        let items: Vec<Value> = ["item1", "item2", "item3"]
            .into_iter()
            .map(Value::from)
            .collect();

        let report = enhancer.process_items_concurrently(items).await.unwrap();
        assert_eq!(report.items_count, 3);
        assert_eq!(report.results.len(), 3);
        assert_eq!(report.results[1].original, Value::from("item2"));
        assert!(report.results[1].processed.starts_with("enhanced_item2_"));

        let history = enhancer.enhancement_history();
        assert_eq!(history.len(), 1);
        assert_eq!(history[0].feature, ASYNC_PROCESSING);
        assert_eq!(history[0].items_processed, 3);
        assert_eq!(history[0].processing_time, report.processing_time);
    }

    #[tokio::test]
    async fn test_history_is_append_only() {
        let mut enhancer = fast_enhancer();
        enhancer
            .process_items_concurrently(vec![Value::from(1)])
            .await
            .unwrap();
        enhancer.process_items_concurrently(Vec::new()).await.unwrap();

        let history = enhancer.enhancement_history();
        assert_eq!(history.len(), 2);
        assert_eq!(history[0].items_processed, 1);
        assert_eq!(history[1].items_processed, 0);
    }

    #[test]
    fn test_cached_value_calls_producer_once() {
        let mut enhancer = FeatureEnhancer::default();
        let calls = Cell::new(0);
        let producer = || {
            calls.set(calls.get() + 1);
            Value::from((0..1_000_000i64).sum::<i64>())
        };

        let first = enhancer.cached_value("sum_test", producer, Some(300));
        let second = enhancer.cached_value("sum_test", producer, Some(300));

        assert_eq!(first, Value::Int(499_999_500_000));
        assert_eq!(first, second);
        assert_eq!(calls.get(), 1);
        assert_eq!(enhancer.cache_len(), 1);
    }

    #[test]
    fn test_try_cached_value_error_propagates() {
        let mut enhancer = FeatureEnhancer::default();
        let result: std::result::Result<Value, String> =
            enhancer.try_cached_value("k", || Err("nope".to_string()), None);
        assert_eq!(result, Err("nope".to_string()));
        assert_eq!(enhancer.cache_len(), 0);
    }

    #[test]
    fn test_summarize_delegates() {
        let enhancer = FeatureEnhancer::default();
        assert!(enhancer.summarize(&[]).is_err());
        let summary = enhancer
            .summarize(&[Value::from(1), Value::from(1), Value::from(2)])
            .unwrap();
        assert!(summary.has_duplicates);
        assert_eq!(summary.total_items, 3);
    }
}
