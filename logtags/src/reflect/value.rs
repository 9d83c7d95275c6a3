//! Borrowed dynamic values of message fields.

use std::{borrow::Cow, fmt};

use super::{Message, timestamp::Timestamp};

/// Current value of a field, borrowed from the message for one extraction.
///
/// Lists and maps hold their elements in iteration order; map keys are kept
/// in their natural string form.
#[derive(Clone)]
pub enum Value<'a> {
    Bool(bool),
    I64(i64),
    U64(u64),
    F32(f32),
    F64(f64),
    String(Cow<'a, str>),
    Bytes(Cow<'a, [u8]>),
    /// Enum number. Names are not rendered, so a renamed enum value keeps
    /// its tag.
    Enum(i32),
    /// Well-known timestamp, rendered as RFC 3339 rather than walked.
    Timestamp(Timestamp),
    Message(&'a dyn Message),
    List(Vec<Value<'a>>),
    Map(Vec<(Cow<'a, str>, Value<'a>)>),
}

impl Value<'_> {
    /// Short name of the variant, used in mismatch diagnostics.
    #[must_use]
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Bool(_) => "bool",
            Value::I64(_) => "int",
            Value::U64(_) => "uint",
            Value::F32(_) | Value::F64(_) => "float",
            Value::String(_) => "string",
            Value::Bytes(_) => "bytes",
            Value::Enum(_) => "enum",
            Value::Timestamp(_) => "timestamp",
            Value::Message(_) => "message",
            Value::List(_) => "list",
            Value::Map(_) => "map",
        }
    }
}

impl fmt::Debug for Value<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Bool(value) => f.debug_tuple("Bool").field(value).finish(),
            Value::I64(value) => f.debug_tuple("I64").field(value).finish(),
            Value::U64(value) => f.debug_tuple("U64").field(value).finish(),
            Value::F32(value) => f.debug_tuple("F32").field(value).finish(),
            Value::F64(value) => f.debug_tuple("F64").field(value).finish(),
            Value::String(value) => f.debug_tuple("String").field(value).finish(),
            Value::Bytes(value) => f.debug_tuple("Bytes").field(value).finish(),
            Value::Enum(value) => f.debug_tuple("Enum").field(value).finish(),
            Value::Timestamp(value) => f.debug_tuple("Timestamp").field(value).finish(),
            Value::Message(_) => f.write_str("Message(..)"),
            Value::List(values) => f.debug_tuple("List").field(values).finish(),
            Value::Map(entries) => f.debug_tuple("Map").field(entries).finish(),
        }
    }
}

impl From<bool> for Value<'_> {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<i64> for Value<'_> {
    fn from(value: i64) -> Self {
        Value::I64(value)
    }
}

impl From<u64> for Value<'_> {
    fn from(value: u64) -> Self {
        Value::U64(value)
    }
}

impl From<f64> for Value<'_> {
    fn from(value: f64) -> Self {
        Value::F64(value)
    }
}

impl<'a> From<&'a str> for Value<'a> {
    fn from(value: &'a str) -> Self {
        Value::String(Cow::Borrowed(value))
    }
}

impl From<String> for Value<'_> {
    fn from(value: String) -> Self {
        Value::String(Cow::Owned(value))
    }
}

impl From<Timestamp> for Value<'_> {
    fn from(value: Timestamp) -> Self {
        Value::Timestamp(value)
    }
}
