//! Report DTOs
//!
//! Defines the structured results returned by each toolkit component.

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use super::Value;

/// One item after fan-out processing.
#[derive(Debug, Clone, Serialize)]
pub struct ProcessedItem {
    /// The item as supplied
    pub original: Value,
    /// Derived label combining a tag and a hash of the item
    pub processed: String,
    /// Completion time in RFC 3339
    pub timestamp: String,
}

/// Aggregate result of processing a batch of items.
#[derive(Debug, Clone, Serialize)]
pub struct BatchReport {
    /// Per-item results, in input order
    pub results: Vec<ProcessedItem>,
    /// Wall time for the whole batch in seconds
    pub processing_time: f64,
    pub items_count: usize,
}

/// Entry in the enhancer's append-only operation log.
#[derive(Debug, Clone, Serialize)]
pub struct EnhancementRecord {
    pub feature: String,
    pub items_processed: usize,
    pub processing_time: f64,
    pub timestamp: String,
}

// == Type Histogram ==
/// Count per variant name, kept in the order each name was first seen.
///
/// Serializes as a JSON object in that same order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TypeHistogram {
    counts: Vec<(String, usize)>,
}

impl TypeHistogram {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one occurrence of `name`.
    pub fn record(&mut self, name: &str) {
        match self.counts.iter_mut().find(|(n, _)| n == name) {
            Some((_, count)) => *count += 1,
            None => self.counts.push((name.to_string(), 1)),
        }
    }

    pub fn get(&self, name: &str) -> Option<usize> {
        self.counts
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, count)| *count)
    }

    /// Name with the highest count; ties go to the name seen first.
    pub fn most_common(&self) -> Option<&str> {
        let mut best: Option<&(String, usize)> = None;
        for entry in &self.counts {
            if best.map_or(true, |b| entry.1 > b.1) {
                best = Some(entry);
            }
        }
        best.map(|(name, _)| name.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.counts.iter().map(|(name, count)| (name.as_str(), *count))
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }
}

impl Serialize for TypeHistogram {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.counts.len()))?;
        for (name, count) in &self.counts {
            map.serialize_entry(name, count)?;
        }
        map.end()
    }
}

/// Analytics over a non-empty dataset.
#[derive(Debug, Clone, Serialize)]
pub struct Summary {
    pub total_items: usize,
    /// Histogram of variant names
    pub data_types: TypeHistogram,
    pub has_duplicates: bool,
    /// Human-readable observations, most common type first
    pub insights: Vec<String>,
    pub timestamp: String,
}

/// Error counter snapshot for an `ErrorHandler`.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorStats {
    pub total_errors: u64,
    /// Construction time of the handler, not the time of the call
    pub timestamp: String,
}

/// Memoization metrics for a `PerformanceOptimizer`.
#[derive(Debug, Clone, Serialize)]
pub struct Metrics {
    pub cache_size: usize,
    pub cache_hits: u64,
    pub cache_misses: u64,
    pub evictions: u64,
    pub hit_rate: f64,
    /// Time of the call in RFC 3339
    pub timestamp: String,
}

/// Error body for operations that report failure as data.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    /// Error message describing what went wrong
    pub error: String,
}

impl ErrorResponse {
    /// Creates a new ErrorResponse
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

/// Current time in RFC 3339, shared by every report timestamp.
pub fn now_rfc3339() -> String {
    chrono::Utc::now().to_rfc3339()
}
