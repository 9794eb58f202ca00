use thiserror::Error;

/// Errors surfaced by the external-service gateways.
///
/// Gateways perform no retries themselves; every failure is reported to
/// the caller, which decides whether it aborts the order or the run.
#[derive(Debug, Error)]
pub enum GatewayError {
    /// Network or protocol failure talking to an external service.
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The service answered with a non-success status or error payload.
    #[error("{service} request failed: {detail}")]
    Api {
        service: &'static str,
        detail: String,
    },

    /// A response document could not be base64-decoded.
    #[error("Base64 decode error: {0}")]
    Base64(#[from] base64::DecodeError),

    /// A request or response body could not be (de)serialized.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Reading a local file for upload failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for gateway operations.
pub type Result<T> = std::result::Result<T, GatewayError>;
