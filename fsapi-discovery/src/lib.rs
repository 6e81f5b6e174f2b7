//! FSAPI radio discovery library
//!
//! Finds Frontier Silicon based radios on the local network using SSDP and
//! reads each device's description document to learn where its FSAPI
//! endpoint lives.
//!
//! # Quick Start
//!
//! ```no_run
//! use fsapi_discovery::get;
//!
//! for device in get() {
//!     println!("Found {} at {}", device.friendly_name, device.web_api_url);
//! }
//! ```
//!
//! # Iterator-based Discovery
//!
//! ```no_run
//! use fsapi_discovery::{get_iter, DeviceEvent};
//!
//! for event in get_iter() {
//!     match event {
//!         DeviceEvent::Found(device) => {
//!             println!("Found: {}", device);
//!             break;
//!         }
//!     }
//! }
//! ```

mod error;
mod ssdp;
pub mod device;
mod discovery;

pub use device::DeviceInformation;
pub use discovery::DiscoveryIterator;
pub use error::{DiscoveryError, Result};
pub use ssdp::FSAPI_SEARCH_TARGET;

use std::time::Duration;

/// Default time to wait for SSDP answers and description fetches
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(3);

/// Events emitted during device discovery.
#[derive(Debug, Clone)]
pub enum DeviceEvent {
    /// An FSAPI radio was found on the network
    Found(DeviceInformation),
}

/// Discover all FSAPI radios with the default 3-second timeout.
pub fn get() -> Vec<DeviceInformation> {
    get_with_timeout(DEFAULT_TIMEOUT)
}

/// Discover all FSAPI radios, waiting at most `timeout` for network answers.
pub fn get_with_timeout(timeout: Duration) -> Vec<DeviceInformation> {
    get_iter_with_timeout(timeout)
        .map(|event| match event {
            DeviceEvent::Found(device) => device,
        })
        .collect()
}

/// Iterator over discovery events with the default 3-second timeout.
pub fn get_iter() -> DiscoveryIterator {
    get_iter_with_timeout(DEFAULT_TIMEOUT)
}

/// Iterator over discovery events with a custom timeout.
///
/// If the UDP socket cannot be set up the iterator is empty; the failure is
/// logged rather than returned.
pub fn get_iter_with_timeout(timeout: Duration) -> DiscoveryIterator {
    DiscoveryIterator::new(timeout).unwrap_or_else(|e| {
        tracing::warn!(error = %e, "discovery unavailable");
        DiscoveryIterator::empty()
    })
}
