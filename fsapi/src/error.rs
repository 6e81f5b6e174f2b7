use fsapi_transport::TransportError;
use thiserror::Error;

use crate::status;
use crate::verb::Verb;

/// A response did not have the shape expected for its verb and command
///
/// These are client-side defects: either the command table is incomplete or
/// the device speaks a protocol revision this crate does not know. They are
/// never produced for a well-formed `FS_OK` response of a registered command.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// The body is not well-formed XML
    #[error("Malformed XML: {0}")]
    Xml(String),

    /// A required element is absent
    #[error("Missing <{0}> element")]
    MissingElement(String),

    /// A list item lacks a named field
    #[error("Missing field '{0}'")]
    MissingField(String),

    /// A required attribute is absent
    #[error("Missing '{attribute}' attribute on <{element}>")]
    MissingAttribute {
        element: &'static str,
        attribute: &'static str,
    },

    /// A numeric element or attribute did not parse as its declared type
    #[error("Invalid {kind} value '{text}'")]
    InvalidNumber { kind: &'static str, text: String },

    /// A typed value element carried a different tag than the registered type
    #[error("Expected <{expected}> value but found <{found}>")]
    UnexpectedType {
        expected: &'static str,
        found: String,
    },

    /// The decoded payload cannot be converted into the requested Rust type
    #[error("Expected {expected} but decoded {found}")]
    UnexpectedResponse {
        expected: &'static str,
        found: &'static str,
    },

    /// No decoder is registered for a command, or a value tag is unknown
    #[error("Not implemented: {0}")]
    NotImplemented(String),
}

/// Errors returned by every FSAPI operation
///
/// Each failed operation carries exactly one of these; no operation returns
/// a value alongside an error.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The device answered with a status other than `FS_OK`
    ///
    /// Carries the status token verbatim, e.g. `FS_TIMEOUT` or
    /// `FS_NODE_DOES_NOT_EXIST`.
    #[error("Device status: {0}")]
    DeviceStatus(String),

    /// The response could not be decoded for the requested verb and command
    #[error("Decode error: {0}")]
    Decode(#[from] DecodeError),

    /// The HTTP exchange failed; passed through from the transport unchanged
    #[error("Transport error: {0}")]
    Transport(#[from] TransportError),

    /// A verb other than CreateSession was issued without an active session
    #[error("No active session")]
    NoSession,

    /// Get, Set and ListGetNext need a command path
    #[error("{0} requires a command")]
    MissingCommand(Verb),

    /// Invalid caller-supplied parameter or configuration value
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),
}

impl ApiError {
    /// The device status token, if this is a device status error
    pub fn status(&self) -> Option<&str> {
        match self {
            ApiError::DeviceStatus(status) => Some(status),
            _ => None,
        }
    }

    /// The device reported `FS_TIMEOUT`
    pub fn is_timeout(&self) -> bool {
        self.status() == Some(status::FS_TIMEOUT)
    }

    /// The device reported `FS_LIST_END` (no items after the cursor)
    pub fn is_list_end(&self) -> bool {
        self.status() == Some(status::FS_LIST_END)
    }

    /// The device does not know the requested node
    pub fn is_node_missing(&self) -> bool {
        self.status() == Some(status::FS_NODE_DOES_NOT_EXIST)
    }
}

/// Type alias for results that can return an ApiError
pub type Result<T> = std::result::Result<T, ApiError>;
