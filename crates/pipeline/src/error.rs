use gateway::GatewayError;
use ledger::LedgerError;
use thiserror::Error;

/// Errors raised while driving the fulfillment pipeline.
///
/// Gateway and invoice-file errors are scoped to the order being
/// processed; a ledger error is fatal to the whole run.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// Talking to an external service failed.
    #[error("Gateway error: {0}")]
    Gateway(#[from] GatewayError),

    /// Writing the local invoice artifact failed.
    #[error("Invoice file error: {0}")]
    InvoiceFile(#[from] std::io::Error),

    /// The durable ledger failed; the run cannot safely continue.
    #[error("Ledger error: {0}")]
    Ledger(#[from] LedgerError),
}

/// Result type for pipeline operations.
pub type Result<T> = std::result::Result<T, PipelineError>;
