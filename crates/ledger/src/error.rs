use thiserror::Error;

/// Errors raised by the processed-order ledger.
///
/// A ledger failure is not recoverable within a run: without the processed
/// set every candidate order risks a duplicate notification, so callers
/// must abort rather than treat the ledger as empty.
#[derive(Debug, Error)]
pub enum LedgerError {
    /// The durable store could not be read or written.
    #[error("Ledger I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A persisted entry is not a valid order id.
    #[error("Ledger entry '{0}' is not a valid order id")]
    Corrupt(String),
}

/// Result type for ledger operations.
pub type Result<T> = std::result::Result<T, LedgerError>;
