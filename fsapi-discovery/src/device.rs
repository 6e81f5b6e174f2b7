//! Device description parsing.
//!
//! An FSAPI radio answers the SSDP `LOCATION` URL with a small `netRemote`
//! document naming the device, its firmware version and the base URL of its
//! FSAPI endpoint.

use crate::error::{DiscoveryError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Information about a discovered FSAPI radio.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeviceInformation {
    /// Friendly name configured on the radio, e.g. "Kitchen"
    pub friendly_name: String,
    /// Host name or IP address taken from the location URL
    pub host_name: String,
    /// Firmware version string
    pub version: String,
    /// Base URL of the FSAPI endpoint, e.g. "http://192.168.1.30:80/fsapi"
    pub web_api_url: String,
}

impl fmt::Display for DeviceInformation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.friendly_name)
    }
}

impl DeviceInformation {
    /// Fetch and parse the description document behind an SSDP location.
    pub fn from_location(client: &reqwest::blocking::Client, location: &str) -> Result<Self> {
        let response = client
            .get(location)
            .send()
            .map_err(|e| DiscoveryError::NetworkError(format!("Failed to fetch device description: {}", e)))?;

        let xml = response
            .text()
            .map_err(|e| DiscoveryError::NetworkError(format!("Failed to read response body: {}", e)))?;

        let host_name = extract_host_from_url(location)
            .ok_or_else(|| DiscoveryError::ParseError(format!("No host in location URL: {}", location)))?;

        DeviceDescription::from_xml(&xml)?.into_device_information(host_name)
    }
}

/// The `netRemote` description document served by the radio.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceDescription {
    pub friendly_name: String,
    #[serde(default)]
    pub version: String,
    #[serde(default)]
    pub webfsapi: String,
}

impl DeviceDescription {
    /// Parse a device description from XML.
    ///
    /// # Errors
    ///
    /// Returns `DiscoveryError::ParseError` if the XML is malformed or has no
    /// `friendlyName`.
    pub fn from_xml(xml: &str) -> Result<Self> {
        quick_xml::de::from_str(xml)
            .map_err(|e| DiscoveryError::ParseError(format!("Failed to parse device XML: {}", e)))
    }

    /// Whether the description advertises an FSAPI endpoint
    pub fn is_fsapi_device(&self) -> bool {
        !self.webfsapi.trim().is_empty()
    }

    /// Convert into the public type; fails for devices without an endpoint.
    pub fn into_device_information(self, host_name: String) -> Result<DeviceInformation> {
        if !self.is_fsapi_device() {
            return Err(DiscoveryError::InvalidDevice(format!(
                "{} does not advertise a webfsapi endpoint",
                self.friendly_name
            )));
        }
        Ok(DeviceInformation {
            friendly_name: self.friendly_name,
            host_name,
            version: self.version,
            web_api_url: self.webfsapi.trim().to_string(),
        })
    }
}

/// Extract the host portion of a URL.
///
/// `"http://192.168.1.30:80/device"` yields `"192.168.1.30"`.
pub fn extract_host_from_url(url: &str) -> Option<String> {
    let (_, rest) = url.split_once("://")?;
    let authority = rest.split('/').next()?;
    let host = authority.split(':').next()?;
    if host.is_empty() {
        None
    } else {
        Some(host.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const KITCHEN: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<netRemote>
  <friendlyName>Kitchen</friendlyName>
  <version>ir-mmi-FS2026-0500-0052.V2.5.15.EX51267-1RC3</version>
  <webfsapi>http://192.168.1.30:80/fsapi</webfsapi>
</netRemote>"#;

    #[test]
    fn test_extract_host_from_url() {
        assert_eq!(
            extract_host_from_url("http://192.168.1.30:80/device"),
            Some("192.168.1.30".to_string())
        );
        assert_eq!(
            extract_host_from_url("http://radio.local/device"),
            Some("radio.local".to_string())
        );
        assert_eq!(extract_host_from_url("invalid-url"), None);
        assert_eq!(extract_host_from_url("http:///device"), None);
    }

    #[test]
    fn test_device_from_xml() {
        let device = DeviceDescription::from_xml(KITCHEN).unwrap();

        assert_eq!(device.friendly_name, "Kitchen");
        assert_eq!(device.version, "ir-mmi-FS2026-0500-0052.V2.5.15.EX51267-1RC3");
        assert_eq!(device.webfsapi, "http://192.168.1.30:80/fsapi");
        assert!(device.is_fsapi_device());
    }

    #[test]
    fn test_into_device_information() {
        let info = DeviceDescription::from_xml(KITCHEN)
            .unwrap()
            .into_device_information("192.168.1.30".to_string())
            .unwrap();

        assert_eq!(info.friendly_name, "Kitchen");
        assert_eq!(info.host_name, "192.168.1.30");
        assert_eq!(info.web_api_url, "http://192.168.1.30:80/fsapi");
        assert_eq!(info.to_string(), "Kitchen");
    }

    #[test]
    fn test_description_without_endpoint_is_rejected() {
        let xml = "<netRemote><friendlyName>Printer</friendlyName></netRemote>";
        let desc = DeviceDescription::from_xml(xml).unwrap();
        assert!(!desc.is_fsapi_device());

        let result = desc.into_device_information("192.168.1.99".to_string());
        assert!(matches!(result, Err(DiscoveryError::InvalidDevice(_))));
    }

    #[test]
    fn test_malformed_xml() {
        let result = DeviceDescription::from_xml("<netRemote><version>1</version></netRemote>");
        assert!(matches!(result, Err(DiscoveryError::ParseError(_))));
    }
}
