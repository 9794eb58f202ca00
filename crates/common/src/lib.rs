pub mod types;

pub use types::{InvoiceId, OrderId};
