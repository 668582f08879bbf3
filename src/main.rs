//! Utilkit demo runner
//!
//! Exercises each component in turn and prints its results to stdout.

use std::time::Instant;

use anyhow::Context;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use utilkit::{Config, ErrorHandler, FeatureEnhancer, PerformanceOptimizer, Value};

/// Main entry point for the demo runner.
///
/// # Sequence
/// 1. Initialize tracing subscriber for logging
/// 2. Load configuration from environment variables
/// 3. Run the enhancer, error handler and optimizer demos
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Defaults to "info" level, can be overridden with RUST_LOG env var
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "utilkit=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env();
    info!(
        "Configuration loaded: default_ttl={}s, memo_capacity={}, item_delay={}ms, format_delay={}ms",
        config.default_ttl, config.memo_capacity, config.item_delay_ms, config.format_delay_ms
    );

    run_enhancer_demo(&config).await?;
    run_error_handler_demo();
    run_optimizer_demo(&config)?;

    info!("All demos complete");
    Ok(())
}

async fn run_enhancer_demo(config: &Config) -> anyhow::Result<()> {
    info!("Running feature enhancer demo");
    let mut enhancer = FeatureEnhancer::new(config);

    let cached = enhancer.cached_value(
        "sum_test",
        || Value::from((0..1_000_000i64).sum::<i64>()),
        None,
    );
    println!("Cached result: {}", cached);

    let sample = vec![
        Value::from(1),
        Value::from(2),
        Value::from("hello"),
        Value::from(3.14),
        Value::from("world"),
        Value::from(1),
        Value::from(true),
        Value::from(false),
    ];
    match enhancer.summarize(&sample) {
        Ok(summary) => println!("Analytics: {}", serde_json::to_string(&summary)?),
        Err(e) => println!("Analytics: {}", serde_json::to_string(&e.to_response())?),
    }

    let items: Vec<Value> = (1..=5).map(|i| Value::from(format!("item{}", i))).collect();
    let report = enhancer
        .process_items_concurrently(items)
        .await
        .context("async processing failed")?;
    println!("Async processing result: {}", serde_json::to_string(&report)?);

    println!(
        "Enhancement history: {}",
        serde_json::to_string(enhancer.enhancement_history())?
    );
    Ok(())
}

fn run_error_handler_demo() {
    info!("Running error handler demo");
    let mut handler = ErrorHandler::new();

    let cases = [
        Value::Null,
        Value::from(""),
        Value::from("  "),
        Value::from("valid_string"),
        Value::from(42),
        Value::from(3.14),
        Value::List(Vec::new()),
        Value::Map(Default::default()),
    ];

    for case in &cases {
        if handler.validate(case) {
            let result = handler.safe_format(case);
            println!("Input: {} -> Result: {:?}", case, result);
        } else {
            println!("Invalid input: {}", case);
        }
    }

    let stats = handler.error_stats();
    println!(
        "Error statistics: total_errors={}, timestamp={}",
        stats.total_errors, stats.timestamp
    );
}

fn run_optimizer_demo(config: &Config) -> anyhow::Result<()> {
    info!("Running performance optimizer demo");
    let mut optimizer = PerformanceOptimizer::from_config(config)?;

    let items: Vec<Value> = (0..100).map(|i| Value::from(format!("item_{}", i))).collect();

    let start = Instant::now();
    let results = optimizer.batch_format(&items);
    let elapsed = start.elapsed();

    println!(
        "Processed {} items in {:.4} seconds",
        results.len(),
        elapsed.as_secs_f64()
    );
    println!(
        "Performance metrics: {}",
        serde_json::to_string(&optimizer.metrics())?
    );
    Ok(())
}
