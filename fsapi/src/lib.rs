//! Type-safe client for the FSAPI protocol of Frontier Silicon based radios
//!
//! FSAPI is a session-based HTTP/XML protocol: every request is a `GET` whose
//! path names a verb and a node (`GET/netRemote.sys.audio.volume`) and whose
//! query carries the PIN and session id. Responses are small XML documents
//! with a status token and a typed payload.
//!
//! The crate is layered:
//!
//! - [`request`] builds request URLs from a [`Session`], a [`Verb`] and a
//!   command path from [`command`];
//! - [`response`] checks the status and decodes the payload through a
//!   [`DecoderRegistry`] into scalars, item lists or notifications;
//! - [`Communicator`] runs one request end to end over any [`Transport`];
//! - [`FsClient`] wraps it with one method per device capability.
//!
//! # Example
//!
//! ```rust,no_run
//! use fsapi::{discovery, ClientConfig, FsClient};
//!
//! for device in discovery::get() {
//!     let mut client = FsClient::from_config(&ClientConfig::for_device(&device, 1234))?;
//!     client.create_session()?;
//!     println!("{} is playing {}", device, client.play_info_name()?);
//! }
//! # Ok::<(), fsapi::ApiError>(())
//! ```
//!
//! # Notifications
//!
//! ```rust,no_run
//! # use fsapi::{ClientConfig, FsClient};
//! # let mut client = FsClient::from_config(&ClientConfig::new("http://192.168.1.30/fsapi"))?;
//! # client.create_session()?;
//! loop {
//!     match client.notifications() {
//!         Ok(batch) => batch.iter().for_each(|n| println!("{} = {}", n.name, n.value)),
//!         Err(e) if e.is_timeout() => continue,
//!         Err(e) => return Err(e),
//!     }
//! }
//! # Ok::<(), fsapi::ApiError>(())
//! ```

pub mod client;
pub mod command;
pub mod communicator;
pub mod config;
pub mod error;
pub mod logging;
pub mod request;
pub mod response;
pub mod session;
pub mod status;
pub mod value;
pub mod verb;
mod xml;

pub use client::FsClient;
pub use communicator::Communicator;
pub use config::ClientConfig;
pub use error::{ApiError, DecodeError, Result};
pub use request::Args;
pub use response::{
    decode, Decoder, DecoderRegistry, EqBandListItem, EqualizerPreset, FromResponse, ItemList,
    ItemShape, KeyedLabel, NavListItem, Notification, Preset, RadioMode, Response,
};
pub use session::{Session, DEFAULT_PIN};
pub use value::{Value, ValueType};
pub use verb::Verb;

pub use fsapi_transport::{HttpTransport, Transport, TransportError};

/// Radio discovery, re-exported from `fsapi-sdk-discovery`
pub mod discovery {
    pub use fsapi_discovery::*;
}
