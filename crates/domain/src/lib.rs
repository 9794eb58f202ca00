//! Domain rules for the shipment notification flow.
//!
//! Holds the order model as returned by the order provider, the
//! eligibility rules that gate notification, the delivery date estimator,
//! and the notification message template. Everything here is pure; all
//! I/O lives in the gateway and pipeline crates.

pub mod delivery;
pub mod message;
pub mod order;

pub use delivery::{estimate_delivery, estimate_from_datetime};
pub use message::shipment_message;
pub use order::{Order, PERSONAL_SOURCE};
