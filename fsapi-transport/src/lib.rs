//! Private HTTP transport for FSAPI device communication
//!
//! This crate provides the minimal blocking HTTP client the FSAPI protocol
//! engine needs: a single `GET` against the device's `webfsapi` endpoint,
//! returning the raw XML body. Everything protocol-specific (verbs, sessions,
//! status codes) lives in the `fsapi` crate; this crate only moves bytes.

mod error;

pub use error::TransportError;

use std::sync::Arc;
use std::time::Duration;
use tracing::trace;

/// Default connect timeout used by [`HttpTransport::new`]
pub const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(5);

/// Default read timeout used by [`HttpTransport::new`]
pub const DEFAULT_READ_TIMEOUT: Duration = Duration::from_secs(10);

/// The transport collaborator consumed by the protocol engine.
///
/// `path_and_query` is relative to the device's FSAPI base address, e.g.
/// `GET/netRemote.sys.power?pin=1234&session=42`.
pub trait Transport {
    /// Perform a GET and return the response body as text
    fn get(&self, path_and_query: &str) -> Result<String, TransportError>;
}

impl<T: Transport + ?Sized> Transport for &T {
    fn get(&self, path_and_query: &str) -> Result<String, TransportError> {
        (**self).get(path_and_query)
    }
}

impl<T: Transport + ?Sized> Transport for Box<T> {
    fn get(&self, path_and_query: &str) -> Result<String, TransportError> {
        (**self).get(path_and_query)
    }
}

impl<T: Transport + ?Sized> Transport for Arc<T> {
    fn get(&self, path_and_query: &str) -> Result<String, TransportError> {
        (**self).get(path_and_query)
    }
}

/// A minimal HTTP transport bound to one device's FSAPI endpoint
#[derive(Debug, Clone)]
pub struct HttpTransport {
    agent: ureq::Agent,
    base_url: String,
}

impl HttpTransport {
    /// Create a transport for `base_url` (e.g. `http://192.168.1.30/fsapi`)
    /// with the default timeouts
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_timeouts(base_url, DEFAULT_CONNECT_TIMEOUT, DEFAULT_READ_TIMEOUT)
    }

    /// Create a transport with explicit connect and read timeouts
    pub fn with_timeouts(
        base_url: impl Into<String>,
        connect_timeout: Duration,
        read_timeout: Duration,
    ) -> Self {
        Self {
            agent: ureq::AgentBuilder::new()
                .timeout_connect(connect_timeout)
                .timeout_read(read_timeout)
                .build(),
            base_url: base_url.into(),
        }
    }

    /// The FSAPI base address requests are resolved against
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn resolve(&self, path_and_query: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path_and_query.trim_start_matches('/')
        )
    }
}

impl Transport for HttpTransport {
    fn get(&self, path_and_query: &str) -> Result<String, TransportError> {
        let url = self.resolve(path_and_query);
        trace!(base = %self.base_url, "HTTP GET");

        let response = self
            .agent
            .get(&url)
            .set("Cache-Control", "no-cache")
            .call()
            .map_err(|e| match e {
                ureq::Error::Status(code, _) => TransportError::HttpStatus(code),
                ureq::Error::Transport(t) => TransportError::Network(t.to_string()),
            })?;

        response
            .into_string()
            .map_err(|e| TransportError::Body(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_joins_without_double_slash() {
        let transport = HttpTransport::new("http://192.168.1.30/fsapi/");
        assert_eq!(
            transport.resolve("/GET/netRemote.sys.power?pin=1234"),
            "http://192.168.1.30/fsapi/GET/netRemote.sys.power?pin=1234"
        );

        let transport = HttpTransport::new("http://192.168.1.30/fsapi");
        assert_eq!(
            transport.resolve("CREATE_SESSION?pin=1234"),
            "http://192.168.1.30/fsapi/CREATE_SESSION?pin=1234"
        );
    }

    #[test]
    fn test_get_returns_body() {
        let mut server = mockito::Server::new();
        let mock = server
            .mock("GET", "/fsapi/CREATE_SESSION")
            .match_query(mockito::Matcher::UrlEncoded("pin".into(), "1234".into()))
            .match_header("cache-control", "no-cache")
            .with_status(200)
            .with_body("<fsapiResponse><status>FS_OK</status></fsapiResponse>")
            .create();

        let transport = HttpTransport::new(format!("{}/fsapi", server.url()));
        let body = transport.get("CREATE_SESSION?pin=1234").unwrap();

        assert!(body.contains("FS_OK"));
        mock.assert();
    }

    #[test]
    fn test_http_error_status_is_reported() {
        let mut server = mockito::Server::new();
        let _mock = server
            .mock("GET", "/fsapi/GET/netRemote.sys.power")
            .match_query(mockito::Matcher::Any)
            .with_status(403)
            .create();

        let transport = HttpTransport::new(format!("{}/fsapi", server.url()));
        match transport.get("GET/netRemote.sys.power?pin=0000") {
            Err(TransportError::HttpStatus(code)) => assert_eq!(code, 403),
            other => panic!("Expected HttpStatus error, got {:?}", other),
        }
    }

    #[test]
    fn test_unreachable_host_is_network_error() {
        let transport = HttpTransport::with_timeouts(
            "http://127.0.0.1:1/fsapi",
            Duration::from_millis(200),
            Duration::from_millis(200),
        );
        assert!(matches!(
            transport.get("CREATE_SESSION?pin=1234"),
            Err(TransportError::Network(_))
        ));
    }
}
