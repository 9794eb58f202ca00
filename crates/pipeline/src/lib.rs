//! Fulfillment notification pipeline.
//!
//! Drives the per-order flow over one batch of recently shipped orders:
//!
//! 1. List candidate orders from the order provider.
//! 2. Filter to personal, shipped, not-yet-notified orders.
//! 3. Publish the invoice to the file host.
//! 4. Send the shipment notification.
//! 5. Record the order in the processed ledger.
//!
//! Each order advances independently; a failure is caught at the order
//! boundary and the batch continues. Only a ledger failure aborts the run.

pub mod coordinator;
pub mod error;
pub mod notifier;
pub mod outcome;
pub mod publisher;

pub use coordinator::{FulfillmentPipeline, PipelineSettings};
pub use error::{PipelineError, Result};
pub use notifier::{DeliveryMode, Notifier};
pub use outcome::{OrderOutcome, RunReport, SkipReason};
pub use publisher::InvoicePublisher;
