//! Gateways to the three external services the pipeline depends on.
//!
//! Each service is a trait seam with one HTTP implementation and one
//! in-memory fake, so the pipeline can be exercised deterministically
//! without network access:
//!
//! - [`OrderProvider`] — the order-management connector
//!   ([`BaselinkerProvider`] over its form-encoded RPC surface)
//! - [`FileHost`] — public file hosting ([`DriveHost`])
//! - [`Messenger`] — outbound customer messaging ([`TwilioMessenger`])
//!
//! Gateways perform no retries; failure policy belongs to the pipeline.

pub mod baselinker;
pub mod drive;
pub mod error;
pub mod messaging;
pub mod orders;
pub mod storage;
pub mod twilio;

pub use baselinker::BaselinkerProvider;
pub use drive::DriveHost;
pub use error::{GatewayError, Result};
pub use messaging::{InMemoryMessenger, Messenger, SentMessage};
pub use orders::{InMemoryOrderProvider, OrderProvider};
pub use storage::{FileHost, InMemoryFileHost};
pub use twilio::TwilioMessenger;
