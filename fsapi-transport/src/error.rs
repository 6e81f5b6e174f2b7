//! Error types for the HTTP transport

use thiserror::Error;

/// Errors that can occur while talking HTTP to a radio
#[derive(Debug, Error)]
pub enum TransportError {
    /// Network or HTTP communication error
    #[error("Network/HTTP error: {0}")]
    Network(String),

    /// The device answered with a non-success HTTP status
    #[error("HTTP status {0}")]
    HttpStatus(u16),

    /// The response body could not be read as text
    #[error("Failed to read response body: {0}")]
    Body(String),
}
