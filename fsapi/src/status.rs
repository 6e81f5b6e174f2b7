//! Status tokens returned in the `<status>` element of every response
//!
//! Only [`FS_OK`] means success; every other token is surfaced to the caller
//! as [`ApiError::DeviceStatus`](crate::ApiError::DeviceStatus).

/// The request succeeded
pub const FS_OK: &str = "FS_OK";

/// Generic failure, e.g. a value out of range for SET
pub const FS_FAIL: &str = "FS_FAIL";

/// The request was malformed
pub const FS_PACKET_BAD: &str = "FS_PACKET_BAD";

/// The node exists but cannot be accessed in the current mode
pub const FS_NODE_BLOCKED: &str = "FS_NODE_BLOCKED";

/// The device does not implement the node
pub const FS_NODE_DOES_NOT_EXIST: &str = "FS_NODE_DOES_NOT_EXIST";

/// The device did not answer in time (also returned by GET_NOTIFIES when
/// nothing changed)
pub const FS_TIMEOUT: &str = "FS_TIMEOUT";

/// No list items after the requested cursor
pub const FS_LIST_END: &str = "FS_LIST_END";
