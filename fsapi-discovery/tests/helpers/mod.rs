//! Test helpers for fixture-based integration tests

use std::fs;
use std::path::PathBuf;

/// A captured `netRemote` description document
#[derive(Debug, Clone)]
pub struct DeviceFixture {
    pub name: String,
    pub host: String,
    pub xml_content: String,
}

impl DeviceFixture {
    /// Load a fixture from the fixtures directory
    pub fn load(filename: &str, host: &str) -> Self {
        let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
        path.push("tests/fixtures");
        path.push(filename);

        let xml_content = fs::read_to_string(&path)
            .unwrap_or_else(|e| panic!("Failed to load fixture {}: {}", filename, e));

        Self {
            name: filename.to_string(),
            host: host.to_string(),
            xml_content,
        }
    }
}

/// Collection of device fixtures for testing scenarios
pub struct FixtureSet {
    pub devices: Vec<DeviceFixture>,
}

impl FixtureSet {
    pub fn new(devices: Vec<DeviceFixture>) -> Self {
        Self { devices }
    }

    pub fn single_radio() -> Self {
        Self::new(vec![DeviceFixture::load("kitchen_radio.xml", "192.168.1.30")])
    }

    pub fn all_radios() -> Self {
        Self::new(vec![
            DeviceFixture::load("kitchen_radio.xml", "192.168.1.30"),
            DeviceFixture::load("living_room_radio.xml", "192.168.1.31"),
            DeviceFixture::load("minimal_radio.xml", "10.0.0.7"),
        ])
    }

    /// Radios plus a device without an FSAPI endpoint
    pub fn mixed_devices() -> Self {
        Self::new(vec![
            DeviceFixture::load("kitchen_radio.xml", "192.168.1.30"),
            DeviceFixture::load("non_fsapi_device.xml", "192.168.1.200"),
            DeviceFixture::load("living_room_radio.xml", "192.168.1.31"),
        ])
    }

    pub fn empty() -> Self {
        Self::new(vec![])
    }
}
