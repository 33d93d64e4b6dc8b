use async_trait::async_trait;

use crate::{ScanError, TickerStats};

/// Trait for market snapshot sources.
///
/// A provider delivers one complete snapshot per call; on failure the caller
/// skips the refresh cycle rather than analyzing a partial batch.
#[async_trait]
pub trait SnapshotProvider: Send + Sync {
    async fn fetch_snapshot(&self) -> Result<Vec<TickerStats>, ScanError>;
}
