//! TTL Cache Module
//!
//! Keyed store of computed values judged fresh by age at lookup time.

use std::collections::HashMap;
use std::convert::Infallible;

use tracing::debug;

use super::entry::TimedEntry;

// == TTL Cache ==
/// Unbounded mapping from key to the most recently computed value.
///
/// Stale entries are never removed; they stay in memory until the next
/// lookup for the same key recomputes and overwrites them.
#[derive(Debug)]
pub struct TtlCache<V> {
    /// Key-value storage
    entries: HashMap<String, TimedEntry<V>>,
    /// TTL in seconds applied when a lookup does not supply one
    default_ttl: u64,
}

impl<V: Clone> TtlCache<V> {
    // == Constructor ==
    pub fn new(default_ttl: u64) -> Self {
        Self {
            entries: HashMap::new(),
            default_ttl,
        }
    }

    // == Get Or Compute ==
    /// Returns the stored value for `key` if it is younger than `ttl`
    /// seconds, otherwise calls `producer`, stores its result and returns it.
    ///
    /// # Arguments
    /// * `key` - Cache key
    /// * `producer` - Computes the value on a miss; not called on a hit
    /// * `ttl` - Freshness window in seconds (uses default_ttl if None)
    pub fn get_or_compute<F>(&mut self, key: &str, producer: F, ttl: Option<u64>) -> V
    where
        F: FnOnce() -> V,
    {
        let result = self.try_get_or_compute(key, || Ok::<V, Infallible>(producer()), ttl);
        match result {
            Ok(value) => value,
            Err(never) => match never {},
        }
    }

    // == Try Get Or Compute ==
    /// Fallible variant of [`TtlCache::get_or_compute`].
    ///
    /// A producer error is returned unchanged and leaves any existing
    /// (stale) entry in place.
    pub fn try_get_or_compute<F, E>(
        &mut self,
        key: &str,
        producer: F,
        ttl: Option<u64>,
    ) -> Result<V, E>
    where
        F: FnOnce() -> Result<V, E>,
    {
        let ttl = ttl.unwrap_or(self.default_ttl);

        if let Some(entry) = self.entries.get(key) {
            if entry.is_fresh(ttl) {
                debug!(key, age_ms = entry.age_ms(), "TTL cache hit");
                return Ok(entry.value.clone());
            }
            debug!(key, ttl, "TTL cache entry stale, recomputing");
        } else {
            debug!(key, "TTL cache miss");
        }

        let value = producer()?;
        self.entries
            .insert(key.to_string(), TimedEntry::new(value.clone()));
        Ok(value)
    }

    // == Length ==
    /// Number of stored entries, fresh or stale.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
