//! Scalar values carried in `<value>` and `<field>` elements
//!
//! FSAPI wraps every scalar in an element named after its wire type:
//! `<u8>`, `<u16>`, `<s16>`, `<u32>` or `<c8_array>`. GET responses are
//! decoded against the type registered for the command; notifications are
//! decoded by looking at the tag itself.

use serde::Serialize;
use std::fmt;
use std::str::FromStr;
use xmltree::Element;

use crate::error::DecodeError;
use crate::xml;

/// Static type of a scalar command
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueType {
    /// `u8` on the wire, 0 is false and anything else true
    Bool,
    U8,
    U16,
    U32,
    S16,
    /// `c8_array` on the wire
    Text,
}

impl ValueType {
    /// The XML element name carrying values of this type
    pub fn tag(&self) -> &'static str {
        match self {
            ValueType::Bool | ValueType::U8 => "u8",
            ValueType::U16 => "u16",
            ValueType::U32 => "u32",
            ValueType::S16 => "s16",
            ValueType::Text => "c8_array",
        }
    }

    /// The type selected by a tag when nothing else is known about the node
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "u8" => Some(ValueType::U8),
            "u16" => Some(ValueType::U16),
            "u32" => Some(ValueType::U32),
            "s16" => Some(ValueType::S16),
            "c8_array" => Some(ValueType::Text),
            _ => None,
        }
    }
}

/// A decoded scalar
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Value {
    Bool(bool),
    U8(u8),
    U16(u16),
    U32(u32),
    S16(i16),
    Text(String),
}

impl Value {
    /// Short name of the variant, used in conversion errors
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Bool(_) => "bool",
            Value::U8(_) => "u8",
            Value::U16(_) => "u16",
            Value::U32(_) => "u32",
            Value::S16(_) => "s16",
            Value::Text(_) => "text",
        }
    }

    /// The value as it is written into a SET request's `value` argument
    pub fn to_arg(&self) -> String {
        match self {
            Value::Bool(b) => u8::from(*b).to_string(),
            Value::U8(v) => v.to_string(),
            Value::U16(v) => v.to_string(),
            Value::U32(v) => v.to_string(),
            Value::S16(v) => v.to_string(),
            Value::Text(s) => s.clone(),
        }
    }

    /// Convert into a concrete Rust type
    pub fn into_typed<T>(self) -> Result<T, DecodeError>
    where
        T: TryFrom<Value, Error = DecodeError>,
    {
        T::try_from(self)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Bool(b) => write!(f, "{}", b),
            Value::Text(s) => f.write_str(s),
            other => f.write_str(&other.to_arg()),
        }
    }
}

/// Decode the typed child of `container`, which must match `expected`
pub(crate) fn decode_expected(container: &Element, expected: ValueType) -> Result<Value, DecodeError> {
    let typed = typed_child(container)?;
    if typed.name != expected.tag() {
        return Err(DecodeError::UnexpectedType {
            expected: expected.tag(),
            found: typed.name.clone(),
        });
    }
    decode_as(typed, expected)
}

/// Decode the typed child of `container`, choosing the type from its tag
pub(crate) fn decode_tagged(container: &Element) -> Result<Value, DecodeError> {
    let typed = typed_child(container)?;
    let value_type = ValueType::from_tag(&typed.name)
        .ok_or_else(|| DecodeError::NotImplemented(format!("value type <{}>", typed.name)))?;
    decode_as(typed, value_type)
}

fn typed_child(container: &Element) -> Result<&Element, DecodeError> {
    xml::child_elements(container)
        .next()
        .ok_or_else(|| DecodeError::MissingElement(format!("{} value", container.name)))
}

fn decode_as(typed: &Element, value_type: ValueType) -> Result<Value, DecodeError> {
    Ok(match value_type {
        ValueType::Bool => Value::Bool(parse_number::<u8>(typed, "u8")? != 0),
        ValueType::U8 => Value::U8(parse_number(typed, "u8")?),
        ValueType::U16 => Value::U16(parse_number(typed, "u16")?),
        ValueType::U32 => Value::U32(parse_number(typed, "u32")?),
        ValueType::S16 => Value::S16(parse_number(typed, "s16")?),
        ValueType::Text => Value::Text(xml::text(typed)),
    })
}

pub(crate) fn parse_number<T: FromStr>(element: &Element, kind: &'static str) -> Result<T, DecodeError> {
    let text = xml::text(element);
    text.trim()
        .parse()
        .map_err(|_| DecodeError::InvalidNumber { kind, text })
}

fn mismatch(expected: &'static str, value: &Value) -> DecodeError {
    DecodeError::UnexpectedResponse {
        expected,
        found: value.type_name(),
    }
}

impl TryFrom<Value> for bool {
    type Error = DecodeError;

    /// Notifications carry booleans as plain `u8`, so those convert too.
    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Bool(b) => Ok(b),
            Value::U8(v) => Ok(v != 0),
            other => Err(mismatch("bool", &other)),
        }
    }
}

macro_rules! impl_try_from_value {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl TryFrom<Value> for $ty {
                type Error = DecodeError;

                fn try_from(value: Value) -> Result<Self, Self::Error> {
                    match value {
                        Value::$variant(v) => Ok(v),
                        other => Err(mismatch(stringify!($ty), &other)),
                    }
                }
            }
        )*
    };
}

impl_try_from_value!(u8 => U8, u16 => U16, u32 => U32, i16 => S16, String => Text);

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<u8> for Value {
    fn from(v: u8) -> Self {
        Value::U8(v)
    }
}

impl From<u16> for Value {
    fn from(v: u16) -> Self {
        Value::U16(v)
    }
}

impl From<u32> for Value {
    fn from(v: u32) -> Self {
        Value::U32(v)
    }
}

impl From<i16> for Value {
    fn from(v: i16) -> Self {
        Value::S16(v)
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::Text(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Text(v.to_string())
    }
}
