//! Shared data models for the toolkit
//!
//! The dynamic `Value` accepted at every entry point and the report DTOs
//! each component returns.

pub mod hash;
pub mod reports;
pub mod value;

// Re-export commonly used types
pub use reports::{
    now_rfc3339, BatchReport, EnhancementRecord, ErrorResponse, ErrorStats, Metrics,
    ProcessedItem, Summary, TypeHistogram,
};
pub use hash::stable_hash;
pub use value::Value;
