//! Batched detail fetching with pacing.
//!
//! References are split into contiguous batches. Every item in a batch is fetched
//! concurrently after a short stagger; the batch waits for all of them to settle,
//! keeps the successes, then pauses before the next batch starts.

use std::future::Future;
use std::time::Duration;

use futures::stream::{FuturesUnordered, StreamExt};
use log::debug;

use crate::error::{Error, Result};

/// Default number of references per batch
pub const DEFAULT_BATCH_SIZE: usize = 25;
/// Default delay before each item fetch inside a batch
pub const DEFAULT_STAGGER: Duration = Duration::from_millis(15);
/// Default pause between consecutive batches
pub const DEFAULT_PAUSE: Duration = Duration::from_millis(150);

/// Pacing knobs for `load_in_batches`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BatchOptions {
    pub batch_size: usize,
    pub stagger: Duration,
    pub pause: Duration,
}

impl Default for BatchOptions {
    fn default() -> Self {
        Self {
            batch_size: DEFAULT_BATCH_SIZE,
            stagger: DEFAULT_STAGGER,
            pause: DEFAULT_PAUSE,
        }
    }
}

/// Fetch one item per reference, batch by batch.
///
/// Output keeps batch order; within a batch, items appear in the order their
/// fetches settled. Failed items are dropped. Returns `Error::EmptyResult` when
/// nothing at all resolved.
///
/// # Example
///
/// ```ignore
/// let entities = load_in_batches(
///     page.results,
///     |reference| async move { catalog.fetch_entity(&reference.name).await },
///     &BatchOptions::default(),
/// )
/// .await?;
/// ```
pub async fn load_in_batches<R, T, F, Fut>(
    references: Vec<R>,
    fetch_one: F,
    options: &BatchOptions,
) -> Result<Vec<T>>
where
    F: Fn(R) -> Fut,
    Fut: Future<Output = Result<T>>,
{
    let batch_size = options.batch_size.max(1);
    let total = references.len();
    let batch_count = total.div_ceil(batch_size);

    debug!(
        "Loading {} references in {} batches of up to {}",
        total, batch_count, batch_size
    );

    let mut loaded = Vec::with_capacity(total);
    let mut pending = references.into_iter();

    for batch_index in 0..batch_count {
        let mut in_flight: FuturesUnordered<_> = pending
            .by_ref()
            .take(batch_size)
            .map(|reference| {
                let fut = fetch_one(reference);
                let stagger = options.stagger;
                async move {
                    tokio::time::sleep(stagger).await;
                    fut.await
                }
            })
            .collect();

        let mut failed = 0usize;
        while let Some(result) = in_flight.next().await {
            match result {
                Ok(item) => loaded.push(item),
                Err(e) => {
                    failed += 1;
                    debug!("Dropping failed item in batch {}: {}", batch_index, e);
                }
            }
        }

        debug!(
            "Batch {}/{} settled ({} failed)",
            batch_index + 1,
            batch_count,
            failed
        );

        if batch_index + 1 < batch_count {
            tokio::time::sleep(options.pause).await;
        }
    }

    if loaded.is_empty() {
        return Err(Error::EmptyResult("entries".to_string()));
    }

    debug!("Loaded {} of {} references", loaded.len(), total);
    Ok(loaded)
}
