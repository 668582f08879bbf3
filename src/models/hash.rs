//! Deterministic string hashing for derived labels.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

/// Hashes `input` with fixed keys so equal inputs yield equal labels
/// across calls and instances.
pub fn stable_hash(input: &str) -> u64 {
    let mut hasher = DefaultHasher::new();
    input.hash(&mut hasher);
    hasher.finish()
}
