//! Cooperative, chunked row filtering for large tables.
//!
//! The scan runs in slices of a bounded number of scan steps and yields to
//! the async runtime between slices, so a single-threaded host stays
//! responsive while tens of thousands of rows are tested. Slices of one call
//! run strictly one after another inside the same future. There is no
//! cancellation; dropping the future abandons the scan.

use crate::word_match::{RowMatcher, WordQuery};
use rowsift_core::{Result, Table};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Default number of scan steps per slice.
pub const DEFAULT_SCAN_STEPS_PER_CHUNK: usize = 2000;

/// Default pause between slices, in milliseconds.
pub const DEFAULT_YIELD_DELAY_MS: u64 = 5;

/// Scheduling options for [`filter_rows_batched`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BatchConfig {
    /// Scan steps per slice. A row costs one step per search term plus one.
    pub scan_steps_per_chunk: usize,
    /// Pause between slices. Zero only yields to the scheduler.
    pub yield_delay_ms: u64,
}

impl Default for BatchConfig {
    fn default() -> Self {
        BatchConfig {
            scan_steps_per_chunk: DEFAULT_SCAN_STEPS_PER_CHUNK,
            yield_delay_ms: DEFAULT_YIELD_DELAY_MS,
        }
    }
}

impl BatchConfig {
    /// Set the slice size in scan steps
    #[must_use]
    pub fn with_scan_steps(mut self, steps: usize) -> Self {
        self.scan_steps_per_chunk = steps;
        self
    }

    /// Set the pause between slices
    #[must_use]
    pub fn with_yield_delay(mut self, delay: Duration) -> Self {
        self.yield_delay_ms = u64::try_from(delay.as_millis()).unwrap_or(u64::MAX);
        self
    }

    async fn pause(&self) {
        if self.yield_delay_ms == 0 {
            tokio::task::yield_now().await;
        } else {
            tokio::time::sleep(Duration::from_millis(self.yield_delay_ms)).await;
        }
    }
}

/// Filter rows in cooperative slices.
///
/// With `keep` set, rows satisfying the query are returned; otherwise the
/// rows that do not. A query whose terms are all blank returns the table
/// untouched. The result is always the same as the single-pass
/// [`match_rows`](crate::match_rows) / [`remove_rows`](crate::remove_rows).
pub async fn filter_rows_batched(
    table: Table,
    query: &WordQuery,
    keep: bool,
    config: &BatchConfig,
) -> Result<Table> {
    let matcher = RowMatcher::new(query)?;
    if matcher.is_noop() {
        tracing::debug!("No search terms given, returning {} rows unfiltered", table.row_count());
        return Ok(table);
    }

    let total = table.row_count();
    let step_limit = config.scan_steps_per_chunk.max(1);
    let mut rows = table.into_iter();
    let mut kept = Table::new();
    let mut scanned = 0usize;
    let mut chunks = 0usize;

    loop {
        let chunk_start = scanned;
        let mut steps = 0usize;
        while steps < step_limit {
            let Some(row) = rows.next() else { break };
            steps += matcher.steps_per_row();
            if matcher.matches_row(&row) == keep {
                kept.push(row);
            }
            scanned += 1;
        }
        chunks += 1;

        tracing::trace!(
            "Scanned rows {}..{} of {}, {} kept so far",
            chunk_start,
            scanned,
            total,
            kept.row_count()
        );

        if scanned >= total {
            break;
        }
        config.pause().await;
    }

    tracing::debug!(
        "Batched filter ({}, keep={}) kept {} of {} rows in {} chunks",
        query.mode,
        keep,
        kept.row_count(),
        total,
        chunks
    );
    Ok(kept)
}

/// Rows that satisfy the query, scanned in cooperative slices.
pub async fn match_rows_batched(table: Table, query: &WordQuery, config: &BatchConfig) -> Result<Table> {
    filter_rows_batched(table, query, true, config).await
}

/// Rows that do not satisfy the query, scanned in cooperative slices.
pub async fn remove_rows_batched(table: Table, query: &WordQuery, config: &BatchConfig) -> Result<Table> {
    filter_rows_batched(table, query, false, config).await
}

/// [`filter_rows_batched`] reporting through a completion callback.
///
/// `on_complete` runs exactly once, after the last slice.
pub async fn filter_rows_batched_with<F>(
    table: Table,
    query: &WordQuery,
    keep: bool,
    config: &BatchConfig,
    on_complete: F,
) where
    F: FnOnce(Result<Table>),
{
    on_complete(filter_rows_batched(table, query, keep, config).await);
}
