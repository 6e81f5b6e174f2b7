//! Response decoding
//!
//! Every FSAPI response is an `<fsapiResponse>` document with a `<status>`
//! element. Anything but `FS_OK` is returned as a device status error before
//! the payload is looked at; otherwise the [`DecoderRegistry`] decides how the
//! rest of the document is read.

pub mod items;
pub mod notification;
pub mod registry;

pub use items::{
    EqBandListItem, EqualizerPreset, ItemList, ItemShape, KeyedLabel, NavListItem, Preset,
    RadioMode,
};
pub use notification::Notification;
pub use registry::{Decoder, DecoderRegistry};

use crate::error::{ApiError, DecodeError, Result};
use crate::status::FS_OK;
use crate::value::{self, Value};
use crate::verb::Verb;
use crate::xml;

/// The decoded payload of a successful response
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Response {
    /// Session id handed out by CREATE_SESSION
    Session(u32),
    /// DELETE_SESSION and SET carry no payload
    Ack,
    Value(Value),
    List(ItemList),
    Notifications(Vec<Notification>),
}

impl Response {
    /// Short description of the variant, used in conversion errors
    pub fn kind(&self) -> &'static str {
        match self {
            Response::Session(_) => "session id",
            Response::Ack => "acknowledgement",
            Response::Value(_) => "value",
            Response::List(_) => "item list",
            Response::Notifications(_) => "notifications",
        }
    }
}

/// Decode `body`, the response to `verb` on `command`
pub fn decode(
    registry: &DecoderRegistry,
    verb: Verb,
    command: Option<&str>,
    body: &str,
) -> Result<Response> {
    let root = xml::parse(body)?;
    let status = xml::text(xml::child(&root, "status")?);
    let status = status.trim();
    if status != FS_OK {
        return Err(ApiError::DeviceStatus(status.to_string()));
    }

    let response = match registry.resolve(verb, command)? {
        Decoder::SessionId => {
            let id = value::parse_number(xml::child(&root, "sessionId")?, "session id")?;
            Response::Session(id)
        }
        Decoder::Ack => Response::Ack,
        Decoder::Scalar(value_type) => {
            Response::Value(value::decode_expected(xml::child(&root, "value")?, value_type)?)
        }
        Decoder::List(shape) => Response::List(items::parse_items(&root, shape)?),
        Decoder::Notifications => {
            Response::Notifications(notification::parse_notifications(&root)?)
        }
    };
    Ok(response)
}

/// Conversion from a decoded [`Response`] into the type a caller asked for
pub trait FromResponse: Sized {
    fn from_response(response: Response) -> std::result::Result<Self, DecodeError>;
}

fn mismatch(expected: &'static str, response: &Response) -> DecodeError {
    DecodeError::UnexpectedResponse {
        expected,
        found: response.kind(),
    }
}

impl FromResponse for Response {
    fn from_response(response: Response) -> std::result::Result<Self, DecodeError> {
        Ok(response)
    }
}

impl FromResponse for () {
    fn from_response(response: Response) -> std::result::Result<Self, DecodeError> {
        match response {
            Response::Ack => Ok(()),
            other => Err(mismatch("acknowledgement", &other)),
        }
    }
}

impl FromResponse for Value {
    fn from_response(response: Response) -> std::result::Result<Self, DecodeError> {
        match response {
            Response::Value(value) => Ok(value),
            other => Err(mismatch("value", &other)),
        }
    }
}

impl FromResponse for ItemList {
    fn from_response(response: Response) -> std::result::Result<Self, DecodeError> {
        match response {
            Response::List(list) => Ok(list),
            other => Err(mismatch("item list", &other)),
        }
    }
}

impl FromResponse for Vec<Notification> {
    fn from_response(response: Response) -> std::result::Result<Self, DecodeError> {
        match response {
            Response::Notifications(notifications) => Ok(notifications),
            other => Err(mismatch("notifications", &other)),
        }
    }
}

macro_rules! impl_from_response_scalar {
    ($($ty:ty),* $(,)?) => {
        $(
            impl FromResponse for $ty {
                fn from_response(response: Response) -> std::result::Result<Self, DecodeError> {
                    Value::from_response(response)?.into_typed()
                }
            }
        )*
    };
}

impl_from_response_scalar!(bool, u8, u16, u32, i16, String);

macro_rules! impl_from_response_list {
    ($($item:ty => $variant:ident),* $(,)?) => {
        $(
            impl FromResponse for Vec<$item> {
                fn from_response(response: Response) -> std::result::Result<Self, DecodeError> {
                    match response {
                        Response::List(ItemList::$variant(items)) => Ok(items),
                        other => Err(mismatch(stringify!($item), &other)),
                    }
                }
            }
        )*
    };
}

impl_from_response_list!(
    RadioMode => RadioModes,
    EqualizerPreset => EqualizerPresets,
    Preset => Presets,
    NavListItem => NavList,
    EqBandListItem => EqBands,
);
