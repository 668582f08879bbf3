//! Utilkit - in-memory utility toolkit
//!
//! Three independent components, each owning its own state:
//! - [`FeatureEnhancer`]: fan-out item processing, TTL caching, analytics
//! - [`ErrorHandler`]: validation and failure-counting safe formatting
//! - [`PerformanceOptimizer`]: LRU-memoized formatting with metrics

pub mod config;
pub mod enhancer;
pub mod error;
pub mod handler;
pub mod models;
pub mod optimizer;

pub use config::Config;
pub use enhancer::FeatureEnhancer;
pub use error::{Result, UtilError};
pub use handler::ErrorHandler;
pub use models::Value;
pub use optimizer::PerformanceOptimizer;
