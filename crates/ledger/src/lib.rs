//! Durable processed-order ledger.
//!
//! The ledger is the only state that survives between runs. It records the
//! ids of orders that have already been notified so repeated runs never
//! message the same customer twice. Entries are append-only; the set of
//! recorded ids only grows.

pub mod error;
pub mod file;
pub mod memory;
pub mod store;

pub use error::{LedgerError, Result};
pub use file::FileLedger;
pub use memory::InMemoryLedger;
pub use store::ProcessedLedger;
