// File: crates/earnings/src/loader.rs
// Summary: Delayed loading of a year of records, simulating a remote API call.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;
use tracing::debug;

use crate::error::DataError;
use crate::record::{validate_year, MonthlyRecord};
use crate::source::RecordSource;

/// Artificial latency of the simulated API.
pub const DEFAULT_DELAY: Duration = Duration::from_millis(750);

/// Wraps a [`RecordSource`] with a fixed delay and shape validation.
///
/// `load` never touches shared state; callers decide what to do with the result.
pub struct DataLoader<S> {
    source: S,
    delay: Duration,
    completed: AtomicU64,
}

impl<S: RecordSource> DataLoader<S> {
    pub fn new(source: S) -> Self {
        Self { source, delay: DEFAULT_DELAY, completed: AtomicU64::new(0) }
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Number of loads that resolved successfully.
    pub fn generation(&self) -> u64 {
        self.completed.load(Ordering::Relaxed)
    }

    /// Wait for the configured delay, then fetch and validate twelve records.
    pub async fn load(&self) -> Result<Vec<MonthlyRecord>, DataError> {
        debug!(delay_ms = self.delay.as_millis() as u64, "loading monthly records");
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        let records = self.source.fetch().await?;
        validate_year(&records)?;
        let generation = self.completed.fetch_add(1, Ordering::Relaxed) + 1;
        debug!(generation, records = records.len(), "monthly records resolved");
        Ok(records)
    }
}
