//! Error types for the discovery system.

use thiserror::Error;

/// Error type for discovery operations.
///
/// Represents the failure modes of device discovery: socket and HTTP
/// problems, unparseable announcements or descriptions, and devices that
/// do not expose an FSAPI endpoint.
#[derive(Debug, Error)]
pub enum DiscoveryError {
    /// Network-related errors (socket creation, HTTP requests, etc.)
    #[error("Network error: {0}")]
    NetworkError(String),
    /// Parsing errors (XML, SSDP response, etc.)
    #[error("Parse error: {0}")]
    ParseError(String),
    /// Invalid device data, e.g. a description without a `webfsapi` URL
    #[error("Invalid device: {0}")]
    InvalidDevice(String),
}

/// Convenience Result type alias for discovery operations.
pub type Result<T> = std::result::Result<T, DiscoveryError>;
