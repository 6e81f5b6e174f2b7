//! SSDP (Simple Service Discovery Protocol) client for FSAPI radios
//!
//! Internal to the crate. Sends one M-SEARCH for the Frontier Silicon FSAPI
//! search target and yields the announcements that carry a `LOCATION`.

use std::net::UdpSocket;
use std::time::Duration;
use tracing::{debug, trace};
use crate::error::{DiscoveryError, Result};

/// Multicast address and port SSDP searches are sent to
pub(crate) const SSDP_ADDR: &str = "239.255.255.250:1900";

/// Search target advertised by FSAPI-capable radios
pub const FSAPI_SEARCH_TARGET: &str = "urn:schemas-frontier-silicon-com:fs_reference:fsapi:1";

/// One parsed SSDP announcement
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct SsdpResponse {
    pub location: String,
    pub search_target: Option<String>,
    pub usn: Option<String>,
    pub server: Option<String>,
}

/// SSDP client for device discovery
pub(crate) struct SsdpClient {
    socket: UdpSocket,
}

impl SsdpClient {
    /// Create a new SSDP client whose reads give up after `timeout`
    pub fn new(timeout: Duration) -> Result<Self> {
        let socket = UdpSocket::bind("0.0.0.0:0")
            .map_err(|e| DiscoveryError::NetworkError(format!("Failed to bind UDP socket: {}", e)))?;

        socket.set_read_timeout(Some(timeout))
            .map_err(|e| DiscoveryError::NetworkError(format!("Failed to set read timeout: {}", e)))?;

        socket.set_multicast_loop_v4(true)
            .map_err(|e| DiscoveryError::NetworkError(format!("Failed to set multicast loop: {}", e)))?;

        Ok(Self { socket })
    }

    /// Send an M-SEARCH request and return an iterator of responses
    pub fn search(&self, search_target: &str) -> Result<SsdpResponseIterator<'_>> {
        let request = build_search_request(search_target);
        debug!(search_target, "sending SSDP M-SEARCH");

        self.socket.send_to(request.as_bytes(), SSDP_ADDR)
            .map_err(|e| DiscoveryError::NetworkError(format!("Failed to send M-SEARCH: {}", e)))?;

        Ok(SsdpResponseIterator::new(&self.socket))
    }
}

fn build_search_request(search_target: &str) -> String {
    format!(
        "M-SEARCH * HTTP/1.1\r\n\
         HOST: {}\r\n\
         MAN: \"ssdp:discover\"\r\n\
         ST: {}\r\n\
         MX: 3\r\n\
         \r\n",
        SSDP_ADDR, search_target
    )
}

/// Iterator over SSDP responses until the socket read times out
pub(crate) struct SsdpResponseIterator<'a> {
    socket: &'a UdpSocket,
    buffer: [u8; 2048],
    finished: bool,
}

impl<'a> SsdpResponseIterator<'a> {
    fn new(socket: &'a UdpSocket) -> Self {
        Self {
            socket,
            buffer: [0; 2048],
            finished: false,
        }
    }
}

impl<'a> Iterator for SsdpResponseIterator<'a> {
    type Item = Result<SsdpResponse>;

    fn next(&mut self) -> Option<Self::Item> {
        while !self.finished {
            match self.socket.recv_from(&mut self.buffer) {
                Ok((size, from)) => {
                    let Ok(text) = std::str::from_utf8(&self.buffer[..size]) else {
                        trace!(%from, "skipping non UTF-8 SSDP datagram");
                        continue;
                    };
                    match parse_ssdp_response(text) {
                        Some(response) => return Some(Ok(response)),
                        None => trace!(%from, "skipping SSDP datagram without LOCATION"),
                    }
                }
                Err(e) => {
                    self.finished = true;
                    if e.kind() == std::io::ErrorKind::WouldBlock
                        || e.kind() == std::io::ErrorKind::TimedOut
                    {
                        return None;
                    }
                    return Some(Err(DiscoveryError::NetworkError(format!("Socket error: {}", e))));
                }
            }
        }
        None
    }
}

/// Parse the headers of an SSDP response; `None` when `LOCATION` is missing
fn parse_ssdp_response(response: &str) -> Option<SsdpResponse> {
    let mut location = None;
    let mut search_target = None;
    let mut usn = None;
    let mut server = None;

    for line in response.lines() {
        let Some((name, value)) = line.split_once(':') else {
            continue;
        };
        let value = value.trim().to_string();
        match name.trim().to_ascii_uppercase().as_str() {
            "LOCATION" => location = Some(value),
            "ST" => search_target = Some(value),
            "USN" => usn = Some(value),
            "SERVER" => server = Some(value),
            _ => {}
        }
    }

    location
        .filter(|l| !l.is_empty())
        .map(|location| SsdpResponse {
            location,
            search_target,
            usn,
            server,
        })
}
