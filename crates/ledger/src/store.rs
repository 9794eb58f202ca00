use async_trait::async_trait;
use common::OrderId;

use crate::Result;

/// Durable set of order ids that have already been notified.
///
/// Presence of an id means "do not reprocess this order", regardless of
/// whether the downstream notification actually succeeded. Implementations
/// must be append-only and thread-safe (Send + Sync); entries are never
/// removed or rewritten.
#[async_trait]
pub trait ProcessedLedger: Send + Sync {
    /// Returns true iff the order id was previously recorded.
    async fn contains(&self, order_id: OrderId) -> Result<bool>;

    /// Records the order id in durable storage.
    ///
    /// Recording the same id twice is harmless but not prevented.
    async fn record(&self, order_id: OrderId) -> Result<()>;
}
