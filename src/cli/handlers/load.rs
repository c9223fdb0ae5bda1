//! Cancel-aware top-level loads
//!
//! Every loading command runs its catalog work through `run_load`: the load is
//! spawned on its own task with a fresh generation ticket, a spinner covers the
//! wait, and Ctrl-C invalidates the ticket so a late result is discarded instead
//! of reaching the output.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};
use log::debug;

use crate::error::{Error, Result};
use crate::index::{Latest, LoadGeneration};

/// Run `load` to completion unless the user interrupts it.
///
/// # Example
///
/// ```ignore
/// let catalog = ctx.catalog.clone();
/// let entities = run_load("Loading catalog", async move { catalog.load_first(151).await })
///     .await
///     .map_err(|e| e.presented(LIST_FAILED))?;
/// ```
pub async fn run_load<T, Fut>(message: &str, load: Fut) -> Result<T>
where
    T: Send + 'static,
    Fut: Future<Output = Result<T>> + Send + 'static,
{
    let generation = Arc::new(LoadGeneration::new());
    let latest: Arc<Latest<Result<T>>> = Arc::new(Latest::new(generation.clone()));
    let ticket = generation.issue();

    let task = {
        let latest = latest.clone();
        tokio::spawn(async move {
            let result = load.await;
            if !latest.apply(ticket, result) {
                debug!("Discarding result of superseded load {}", ticket.value());
            }
        })
    };

    let spinner = spinner(message);

    tokio::select! {
        joined = task => {
            spinner.finish_and_clear();
            joined.map_err(|e| Error::Other(format!("Load task failed: {}", e)))?;
            latest.take().unwrap_or(Err(Error::Cancelled))
        }
        _ = tokio::signal::ctrl_c() => {
            generation.cancel();
            spinner.finish_and_clear();
            debug!("Load {} cancelled by user", ticket.value());
            Err(Error::Cancelled)
        }
    }
}

/// Spinner on stderr; hidden automatically when stderr is not a terminal.
fn spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::with_template("{spinner:.cyan} {msg} [{elapsed}]")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}
