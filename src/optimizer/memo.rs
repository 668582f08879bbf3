//! Bounded memoization
//!
//! LRU-evicting memo for a pure `&str -> V` computation.

use std::num::NonZeroUsize;

use lru::LruCache;
use tracing::debug;

use super::stats::MemoStats;

// == Memo ==
/// Remembers results by exact input, evicting the least recently used
/// input once `capacity` distinct inputs are held.
///
/// Both hits and inserts refresh recency.
#[derive(Debug)]
pub struct Memo<V> {
    entries: LruCache<String, V>,
    stats: MemoStats,
}

impl<V: Clone> Memo<V> {
    pub fn new(capacity: NonZeroUsize) -> Self {
        Self {
            entries: LruCache::new(capacity),
            stats: MemoStats::new(),
        }
    }

    // == Get Or Insert ==
    /// Returns the memoized result for `input`, computing and storing it
    /// on a miss.
    pub fn get_or_insert_with<F>(&mut self, input: &str, compute: F) -> V
    where
        F: FnOnce() -> V,
    {
        if let Some(value) = self.entries.get(input) {
            self.stats.record_hit();
            return value.clone();
        }

        self.stats.record_miss();
        let value = compute();

        // Inputs are only pushed on a miss, so any returned pair is an eviction
        if let Some((evicted, _)) = self.entries.push(input.to_string(), value.clone()) {
            debug!(evicted = %evicted, "memo at capacity, evicted least recently used input");
            self.stats.record_eviction();
        }
        value
    }

    /// Checks membership without touching recency or statistics.
    pub fn contains(&self, input: &str) -> bool {
        self.entries.contains(input)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.entries.cap().get()
    }

    pub fn stats(&self) -> MemoStats {
        self.stats
    }

    /// Drops every entry and zeroes the statistics.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.stats = MemoStats::new();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn memo(capacity: usize) -> Memo<String> {
        Memo::new(NonZeroUsize::new(capacity).unwrap())
    }

    #[test]
    fn test_hit_skips_compute() {
        let mut memo = memo(4);
        let mut calls = 0;

        let first = memo.get_or_insert_with("a", || {
            calls += 1;
            "A".to_string()
        });
        let second = memo.get_or_insert_with("a", || {
            calls += 1;
            "other".to_string()
        });

        assert_eq!(first, "A");
        assert_eq!(second, "A");
        assert_eq!(calls, 1);
        assert_eq!(memo.stats().hits, 1);
        assert_eq!(memo.stats().misses, 1);
    }

    #[test]
    fn test_evicts_least_recently_used() {
        let mut memo = memo(2);
        memo.get_or_insert_with("a", || "A".to_string());
        memo.get_or_insert_with("b", || "B".to_string());
        memo.get_or_insert_with("c", || "C".to_string());

        assert_eq!(memo.len(), 2);
        assert!(!memo.contains("a"));
        assert!(memo.contains("b"));
        assert!(memo.contains("c"));
        assert_eq!(memo.stats().evictions, 1);
    }

    #[test]
    fn test_hit_refreshes_recency() {
        let mut memo = memo(2);
        memo.get_or_insert_with("a", || "A".to_string());
        memo.get_or_insert_with("b", || "B".to_string());
        // Touch "a" so "b" becomes the eviction candidate
        memo.get_or_insert_with("a", || unreachable!());
        memo.get_or_insert_with("c", || "C".to_string());

        assert!(memo.contains("a"));
        assert!(!memo.contains("b"));
    }

    #[test]
    fn test_evicted_input_recomputed_as_miss() {
        let mut memo = memo(1);
        memo.get_or_insert_with("a", || "A".to_string());
        memo.get_or_insert_with("b", || "B".to_string());
        memo.get_or_insert_with("a", || "A".to_string());

        let stats = memo.stats();
        assert_eq!(stats.hits, 0);
        assert_eq!(stats.misses, 3);
        assert_eq!(stats.evictions, 2);
    }

    #[test]
    fn test_clear_resets() {
        let mut memo = memo(3);
        memo.get_or_insert_with("a", || "A".to_string());
        memo.get_or_insert_with("a", || "A".to_string());
        memo.clear();

        assert!(memo.is_empty());
        assert_eq!(memo.stats(), MemoStats::new());
        assert_eq!(memo.capacity(), 3);
    }
}
