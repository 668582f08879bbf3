//! Timed Entry Module
//!
//! A cached value stamped with its creation time.

use std::time::{SystemTime, UNIX_EPOCH};

// == Timed Entry ==
/// A stored value together with the moment it was computed.
///
/// Entries carry no expiry of their own; freshness is judged against the
/// TTL supplied at lookup time.
#[derive(Debug, Clone)]
pub struct TimedEntry<V> {
    /// The stored value
    pub value: V,
    /// Creation timestamp (Unix milliseconds)
    pub created_at: u64,
}

impl<V> TimedEntry<V> {
    /// Creates an entry stamped with the current time.
    pub fn new(value: V) -> Self {
        Self {
            value,
            created_at: current_timestamp_ms(),
        }
    }

    // == Age ==
    /// Milliseconds elapsed since creation, saturating at zero if the clock
    /// moved backwards.
    pub fn age_ms(&self) -> u64 {
        current_timestamp_ms().saturating_sub(self.created_at)
    }

    // == Is Fresh ==
    /// Returns `true` while the entry's age is strictly below `ttl_seconds`.
    ///
    /// Boundary condition: an entry whose age equals the TTL is stale, so a
    /// TTL of zero never yields a fresh entry.
    pub fn is_fresh(&self, ttl_seconds: u64) -> bool {
        self.age_ms() < ttl_seconds.saturating_mul(1000)
    }
}

// == Utility Functions ==
/// Returns current Unix timestamp in milliseconds.
pub fn current_timestamp_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}
