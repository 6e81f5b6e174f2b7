//! Client configuration
//!
//! Where the device lives, which PIN unlocks it and how long the transport
//! waits. Values come from code, from the environment, or from a radio found
//! by discovery.

use std::time::Duration;

use fsapi_discovery::DeviceInformation;
use fsapi_transport::{DEFAULT_CONNECT_TIMEOUT, DEFAULT_READ_TIMEOUT};

use crate::error::{ApiError, Result};
use crate::session::DEFAULT_PIN;

/// Environment variable holding the FSAPI base URL
pub const ENV_URL: &str = "FSAPI_URL";

/// Environment variable holding the device PIN
pub const ENV_PIN: &str = "FSAPI_PIN";

/// Configuration for [`FsClient`](crate::FsClient)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Base URL of the device's FSAPI endpoint, e.g. `http://192.168.1.30/fsapi`
    /// Default: empty (must be set)
    pub base_url: String,

    /// Device PIN
    /// Default: 1234
    pub pin: u32,

    /// Time allowed to establish the TCP connection
    /// Default: 5 seconds
    pub connect_timeout: Duration,

    /// Time allowed for the device to answer; GET_NOTIFIES blocks on the
    /// device side, so keep this above its hold time
    /// Default: 10 seconds
    pub read_timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            pin: DEFAULT_PIN,
            connect_timeout: DEFAULT_CONNECT_TIMEOUT,
            read_timeout: DEFAULT_READ_TIMEOUT,
        }
    }
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Default::default()
        }
    }

    /// Configuration for a radio found by discovery
    pub fn for_device(device: &DeviceInformation, pin: u32) -> Self {
        Self::new(device.web_api_url.clone()).with_pin(pin)
    }

    /// Read `FSAPI_URL` and, if present, `FSAPI_PIN`
    pub fn from_env() -> Result<Self> {
        let base_url = std::env::var(ENV_URL)
            .map_err(|_| ApiError::InvalidParameter(format!("{} is not set", ENV_URL)))?;

        let mut config = Self::new(base_url);
        if let Ok(pin) = std::env::var(ENV_PIN) {
            config.pin = pin
                .trim()
                .parse()
                .map_err(|_| ApiError::InvalidParameter(format!("{}={} is not a PIN", ENV_PIN, pin)))?;
        }
        config.validate()?;
        Ok(config)
    }

    pub fn with_pin(mut self, pin: u32) -> Self {
        self.pin = pin;
        self
    }

    pub fn with_connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }

    pub fn with_read_timeout(mut self, timeout: Duration) -> Self {
        self.read_timeout = timeout;
        self
    }

    /// Validate the configuration and return any issues
    pub fn validate(&self) -> Result<()> {
        let url = url::Url::parse(&self.base_url).map_err(|e| {
            ApiError::InvalidParameter(format!("Invalid base URL '{}': {}", self.base_url, e))
        })?;

        if !matches!(url.scheme(), "http" | "https") {
            return Err(ApiError::InvalidParameter(format!(
                "Base URL must use http or https, got '{}'",
                url.scheme()
            )));
        }

        if url.host_str().is_none() {
            return Err(ApiError::InvalidParameter(
                "Base URL must name a host".to_string(),
            ));
        }

        if self.connect_timeout == Duration::ZERO {
            return Err(ApiError::InvalidParameter(
                "Connect timeout must be greater than 0".to_string(),
            ));
        }

        if self.read_timeout == Duration::ZERO {
            return Err(ApiError::InvalidParameter(
                "Read timeout must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }
}
