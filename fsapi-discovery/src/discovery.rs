//! Discovery iterator.
//!
//! Sends one SSDP M-SEARCH for the FSAPI search target, buffers the
//! announcements, then resolves each unique location into a
//! [`DeviceInformation`] on demand.

use std::collections::HashSet;
use std::time::Duration;
use tracing::{debug, warn};
use crate::device::DeviceInformation;
use crate::error::{DiscoveryError, Result};
use crate::ssdp::{SsdpClient, SsdpResponse, FSAPI_SEARCH_TARGET};
use crate::DeviceEvent;

/// Iterator that discovers FSAPI radios on the local network.
///
/// Yields `DeviceEvent::Found` once per unique SSDP location whose
/// description document could be fetched and advertises an FSAPI endpoint.
/// Announcements from other device types are skipped.
pub struct DiscoveryIterator {
    ssdp_client: Option<SsdpClient>,
    ssdp_buffer: Vec<SsdpResponse>,
    buffer_index: usize,
    seen_locations: HashSet<String>,
    http_client: reqwest::blocking::Client,
}

impl DiscoveryIterator {
    /// Create a new discovery iterator with the specified timeout
    pub fn new(timeout: Duration) -> Result<Self> {
        let ssdp_client = SsdpClient::new(timeout)?;
        let http_client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| DiscoveryError::NetworkError(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            ssdp_client: Some(ssdp_client),
            ssdp_buffer: Vec::new(),
            buffer_index: 0,
            seen_locations: HashSet::new(),
            http_client,
        })
    }

    /// Create an empty iterator that yields no results
    pub(crate) fn empty() -> Self {
        Self {
            ssdp_client: None,
            ssdp_buffer: Vec::new(),
            buffer_index: 0,
            seen_locations: HashSet::new(),
            http_client: reqwest::blocking::Client::new(),
        }
    }

    /// Whether an announcement looks like it came from an FSAPI radio
    fn is_likely_fsapi(response: &SsdpResponse) -> bool {
        let mentions_fsapi = |s: &Option<String>| {
            s.as_deref()
                .map(|v| v.contains("fsapi") || v.contains("frontier-silicon"))
                .unwrap_or(false)
        };
        // Some firmwares omit ST in unicast replies; the location decides then.
        response.search_target.is_none()
            || mentions_fsapi(&response.search_target)
            || mentions_fsapi(&response.usn)
    }

    fn fill_buffer(&mut self) {
        let Some(client) = self.ssdp_client.take() else {
            return;
        };
        match client.search(FSAPI_SEARCH_TARGET) {
            Ok(iter) => {
                for result in iter {
                    match result {
                        Ok(response) => self.ssdp_buffer.push(response),
                        Err(e) => warn!(error = %e, "SSDP receive failed"),
                    }
                }
            }
            Err(e) => warn!(error = %e, "SSDP search failed"),
        }
        debug!(responses = self.ssdp_buffer.len(), "SSDP search finished");
    }
}

impl Iterator for DiscoveryIterator {
    type Item = DeviceEvent;

    fn next(&mut self) -> Option<Self::Item> {
        if self.ssdp_client.is_some() {
            self.fill_buffer();
        }

        while self.buffer_index < self.ssdp_buffer.len() {
            let ssdp_response = &self.ssdp_buffer[self.buffer_index];
            self.buffer_index += 1;

            if !self.seen_locations.insert(ssdp_response.location.clone()) {
                continue;
            }
            if !Self::is_likely_fsapi(ssdp_response) {
                continue;
            }

            match DeviceInformation::from_location(&self.http_client, &ssdp_response.location) {
                Ok(device) => return Some(DeviceEvent::Found(device)),
                Err(e) => {
                    debug!(location = %ssdp_response.location, error = %e, "skipping device");
                }
            }
        }
        None
    }
}
