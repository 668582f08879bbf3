//! Error types for the utility toolkit
//!
//! Provides unified error handling using thiserror.

use thiserror::Error;

use crate::models::ErrorResponse;

// == Util Error Enum ==
/// Unified error type for all toolkit components.
#[derive(Error, Debug)]
pub enum UtilError {
    /// Input was the explicit "no value" marker
    #[error("Input data cannot be null")]
    MissingValue,

    /// Analytics requested over an empty dataset
    #[error("No data provided")]
    NoData,

    /// Formatting could not produce a label
    #[error("Format error: {0}")]
    Format(String),

    /// A spawned item task panicked or was cancelled
    #[error("Task failed: {0}")]
    Task(#[from] tokio::task::JoinError),

    /// Configuration value outside its accepted range
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

// == Error Body Conversion ==
impl From<&UtilError> for ErrorResponse {
    fn from(err: &UtilError) -> Self {
        ErrorResponse::new(err.to_string())
    }
}

impl UtilError {
    /// Renders the error as an `{"error": ...}` body.
    pub fn to_response(&self) -> ErrorResponse {
        ErrorResponse::from(self)
    }
}

// == Result Type Alias ==
/// Convenience Result type for the toolkit.
pub type Result<T> = std::result::Result<T, UtilError>;
