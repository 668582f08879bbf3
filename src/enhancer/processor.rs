//! Fan-out Processor
//!
//! Spawns one task per item and joins the results back in input order.

use std::time::{Duration, Instant};

use futures::future::try_join_all;
use tracing::{debug, info};

use crate::error::Result;
use crate::models::{now_rfc3339, stable_hash, ProcessedItem, Value};

/// Processes every item on its own tokio task.
///
/// Items share no state, so tasks run independently; `try_join_all`
/// restores input order. The batch is fail-fast: the first task that
/// panics or is cancelled aborts the whole call with `UtilError::Task`.
///
/// Returns the processed items and the batch wall time.
pub async fn process_all(
    items: Vec<Value>,
    item_delay: Duration,
) -> Result<(Vec<ProcessedItem>, Duration)> {
    let start = Instant::now();
    let count = items.len();

    let handles = items
        .into_iter()
        .map(|item| tokio::spawn(process_item(item, item_delay)));
    let results = try_join_all(handles).await?;

    let elapsed = start.elapsed();
    info!("Processed {} items in {:.4}s", count, elapsed.as_secs_f64());
    Ok((results, elapsed))
}

/// Simulated unit of work for a single item.
pub async fn process_item(item: Value, delay: Duration) -> ProcessedItem {
    if !delay.is_zero() {
        tokio::time::sleep(delay).await;
    }

    let text = item.to_string();
    let processed = format!("enhanced_{}_{}", text, stable_hash(&text));
    debug!(item = %text, "item processed");

    ProcessedItem {
        original: item,
        processed,
        timestamp: now_rfc3339(),
    }
}
