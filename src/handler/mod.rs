//! Error Handler Module
//!
//! Validation predicate plus a formatter that logs and counts failures
//! instead of propagating them.

mod formatter;
mod validation;

#[cfg(test)]
mod property_tests;

use tracing::error;

pub use formatter::{format_value, Category};
pub use validation::validate;

use crate::error::UtilError;
use crate::models::{now_rfc3339, ErrorStats, Value};

// == Error Handler ==
/// Formats values safely and keeps a running count of failures.
#[derive(Debug)]
pub struct ErrorHandler {
    /// Failures caught since construction; never reset
    error_count: u64,
    /// Construction time, reported by `error_stats`
    created_at: String,
}

impl ErrorHandler {
    pub fn new() -> Self {
        Self {
            error_count: 0,
            created_at: now_rfc3339(),
        }
    }

    /// `false` for null, blank text and empty collections.
    pub fn validate(&self, input: &Value) -> bool {
        validate(input)
    }

    // == Safe Format ==
    /// Formats `data`, returning `None` on failure.
    ///
    /// A missing value and any other formatting failure are both logged
    /// and counted; neither is propagated.
    pub fn safe_format(&mut self, data: &Value) -> Option<String> {
        match format_value(data) {
            Ok(label) => Some(label),
            Err(UtilError::MissingValue) => {
                error!("Missing value in safe_format: {}", UtilError::MissingValue);
                self.error_count += 1;
                None
            }
            Err(e) => {
                error!("Unexpected error in safe_format: {}", e);
                self.error_count += 1;
                None
            }
        }
    }

    // == Error Stats ==
    /// Current error count. The timestamp is the handler's construction
    /// time, not the time of this call.
    pub fn error_stats(&self) -> ErrorStats {
        ErrorStats {
            total_errors: self.error_count,
            timestamp: self.created_at.clone(),
        }
    }
}

impl Default for ErrorHandler {
    fn default() -> Self {
        Self::new()
    }
}
