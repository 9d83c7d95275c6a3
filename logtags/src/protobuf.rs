//! `Message` support for protobuf messages through `prost-reflect`.
//!
//! A [`DynamicMessage`] lists exactly the fields protobuf considers present.
//! Display directives are read from the `logtags.options.log_formatting`
//! field option (see `proto/logtags/options.proto`); fields without the
//! option are shown.
//!
//! ```ignore
//! let message = DynamicMessage::decode(descriptor, bytes)?;
//! let tags = logtags::extract_tags(&message);
//! ```

use std::borrow::Cow;

use prost_reflect::{
    DynamicMessage, FieldDescriptor as ProtoField, Kind, MapKey, ReflectMessage,
    Value as ProtoValue,
};

use crate::{
    directive::{DisplayDirective, DisplayMode, FieldLogging},
    reflect::{
        FieldDescriptor, FieldShape, FieldView, Message, Timestamp, Value, ValueKind,
    },
};

/// Full name of the field option carrying a [`FieldLogging`] annotation.
pub const LOG_FORMATTING_EXTENSION: &str = "logtags.options.log_formatting";

const TIMESTAMP_MESSAGE: &str = "google.protobuf.Timestamp";

impl Message for DynamicMessage {
    fn fields(&self) -> Vec<FieldView<'_>> {
        DynamicMessage::fields(self)
            .map(|(field, value)| {
                let descriptor = FieldDescriptor::new(field.name().to_owned(), value_kind(&field))
                    .with_shape(field_shape(&field))
                    .with_directive(directive_for(&field));
                FieldView::new(descriptor, convert(value))
            })
            .collect()
    }
}

/// Resolves the display directive annotated on a protobuf field.
///
/// Returns [`DisplayDirective::Show`] when the option is not set or the
/// extension is not part of the field's descriptor pool.
#[must_use]
pub fn directive_for(field: &ProtoField) -> DisplayDirective {
    let Some(extension) = field.parent_pool().get_extension_by_name(LOG_FORMATTING_EXTENSION)
    else {
        return DisplayDirective::Show;
    };
    let options = field.options();
    if !options.has_extension(&extension) {
        return DisplayDirective::Show;
    }
    match options.get_extension(&extension).as_ref() {
        ProtoValue::Message(logging) => field_logging(logging).directive(),
        _ => DisplayDirective::Show,
    }
}

/// Reads a `logtags.options.FieldLogging` message.
///
/// Missing or mistyped fields keep their protobuf defaults.
#[must_use]
pub fn field_logging(message: &DynamicMessage) -> FieldLogging {
    let display = message
        .get_field_by_name("display")
        .and_then(|value| value.as_enum_number())
        .map(DisplayMode::from_number)
        .unwrap_or_default();
    let replacement = message
        .get_field_by_name("replacement")
        .and_then(|value| value.as_str().map(str::to_owned))
        .unwrap_or_default();
    let count = |name: &str| {
        message
            .get_field_by_name(name)
            .and_then(|value| value.as_i64())
            .unwrap_or_default()
    };

    FieldLogging {
        display,
        replacement,
        head_chars: count("head_chars"),
        tail_chars: count("tail_chars"),
    }
}

fn field_shape(field: &ProtoField) -> FieldShape {
    if field.is_map() {
        FieldShape::Map
    } else if field.is_list() {
        FieldShape::List
    } else {
        FieldShape::Singular
    }
}

/// Kind of the field's values (for maps, of the entry values).
fn field_kind(field: &ProtoField) -> Kind {
    match field.kind() {
        Kind::Message(entry) if field.is_map() => entry.map_entry_value_field().kind(),
        kind => kind,
    }
}

fn value_kind(field: &ProtoField) -> ValueKind {
    if field.is_group() {
        return ValueKind::Group;
    }
    match field_kind(field) {
        Kind::Double => ValueKind::Double,
        Kind::Float => ValueKind::Float,
        Kind::Int32 => ValueKind::Int32,
        Kind::Int64 => ValueKind::Int64,
        Kind::Uint32 => ValueKind::Uint32,
        Kind::Uint64 => ValueKind::Uint64,
        Kind::Sint32 => ValueKind::Sint32,
        Kind::Sint64 => ValueKind::Sint64,
        Kind::Fixed32 => ValueKind::Fixed32,
        Kind::Fixed64 => ValueKind::Fixed64,
        Kind::Sfixed32 => ValueKind::Sfixed32,
        Kind::Sfixed64 => ValueKind::Sfixed64,
        Kind::Bool => ValueKind::Bool,
        Kind::String => ValueKind::String,
        Kind::Bytes => ValueKind::Bytes,
        Kind::Message(_) => ValueKind::Message,
        Kind::Enum(_) => ValueKind::Enum,
    }
}

/// Enum values convert to their number, so tags survive enum renames.
fn convert(value: &ProtoValue) -> Value<'_> {
    match value {
        ProtoValue::Bool(v) => Value::Bool(*v),
        ProtoValue::I32(v) => Value::I64(i64::from(*v)),
        ProtoValue::I64(v) => Value::I64(*v),
        ProtoValue::U32(v) => Value::U64(u64::from(*v)),
        ProtoValue::U64(v) => Value::U64(*v),
        ProtoValue::F32(v) => Value::F32(*v),
        ProtoValue::F64(v) => Value::F64(*v),
        ProtoValue::String(v) => Value::String(Cow::Borrowed(v.as_str())),
        ProtoValue::Bytes(v) => Value::Bytes(Cow::Borrowed(v.as_ref())),
        ProtoValue::EnumNumber(number) => Value::Enum(*number),
        ProtoValue::Message(message) => {
            if message.descriptor().full_name() == TIMESTAMP_MESSAGE {
                Value::Timestamp(timestamp(message))
            } else {
                Value::Message(message)
            }
        }
        ProtoValue::List(items) => Value::List(items.iter().map(convert).collect()),
        ProtoValue::Map(entries) => Value::Map(
            entries
                .iter()
                .map(|(key, item)| (map_key(key), convert(item)))
                .collect(),
        ),
    }
}

fn timestamp(message: &DynamicMessage) -> Timestamp {
    let seconds = message
        .get_field_by_name("seconds")
        .and_then(|value| value.as_i64())
        .unwrap_or_default();
    let nanos = message
        .get_field_by_name("nanos")
        .and_then(|value| value.as_i32())
        .unwrap_or_default();
    Timestamp::new(seconds, nanos)
}

fn map_key(key: &MapKey) -> Cow<'_, str> {
    match key {
        MapKey::Bool(v) => Cow::Owned(v.to_string()),
        MapKey::I32(v) => Cow::Owned(v.to_string()),
        MapKey::I64(v) => Cow::Owned(v.to_string()),
        MapKey::U32(v) => Cow::Owned(v.to_string()),
        MapKey::U64(v) => Cow::Owned(v.to_string()),
        MapKey::String(v) => Cow::Borrowed(v.as_str()),
    }
}
