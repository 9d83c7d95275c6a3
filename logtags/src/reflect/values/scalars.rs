//! Scalar and string `FieldValue` implementations.

use std::borrow::Cow;

use super::{ElementValue, FieldValue, impl_field_value_scalar};
use crate::reflect::{Value, ValueKind};

// =============================================================================
// Numbers and booleans
// =============================================================================

impl_field_value_scalar!(bool, Bool, |v| Value::Bool(v));

// Signed integers
impl_field_value_scalar!(i8, Int32, |v| Value::I64(i64::from(v)));
impl_field_value_scalar!(i16, Int32, |v| Value::I64(i64::from(v)));
impl_field_value_scalar!(i32, Int32, |v| Value::I64(i64::from(v)));
impl_field_value_scalar!(i64, Int64, |v| Value::I64(v));
impl_field_value_scalar!(isize, Int64, |v| Value::I64(
    i64::try_from(v).unwrap_or(i64::MAX)
));

// Unsigned integers
impl_field_value_scalar!(u8, Uint32, |v| Value::U64(u64::from(v)));
impl_field_value_scalar!(u16, Uint32, |v| Value::U64(u64::from(v)));
impl_field_value_scalar!(u32, Uint32, |v| Value::U64(u64::from(v)));
impl_field_value_scalar!(u64, Uint64, |v| Value::U64(v));
impl_field_value_scalar!(usize, Uint64, |v| Value::U64(
    u64::try_from(v).unwrap_or(u64::MAX)
));

// Floating point
impl_field_value_scalar!(f32, Float, |v| Value::F32(v));
impl_field_value_scalar!(f64, Double, |v| Value::F64(v));

impl_field_value_scalar!(char, String, |v| Value::String(Cow::Owned(v.to_string())));

// =============================================================================
// Strings
// =============================================================================

impl FieldValue for str {
    const KIND: ValueKind = ValueKind::String;

    fn field_value(&self) -> Option<Value<'_>> {
        Some(self.element_value())
    }
}

impl ElementValue for str {
    fn element_value(&self) -> Value<'_> {
        Value::String(Cow::Borrowed(self))
    }
}

impl FieldValue for String {
    const KIND: ValueKind = ValueKind::String;

    fn field_value(&self) -> Option<Value<'_>> {
        Some(self.element_value())
    }
}

impl ElementValue for String {
    fn element_value(&self) -> Value<'_> {
        Value::String(Cow::Borrowed(self.as_str()))
    }
}

impl FieldValue for Cow<'_, str> {
    const KIND: ValueKind = ValueKind::String;

    fn field_value(&self) -> Option<Value<'_>> {
        Some(self.element_value())
    }
}

impl ElementValue for Cow<'_, str> {
    fn element_value(&self) -> Value<'_> {
        Value::String(Cow::Borrowed(self.as_ref()))
    }
}

#[cfg(feature = "uuid")]
impl FieldValue for uuid::Uuid {
    const KIND: ValueKind = ValueKind::String;

    fn field_value(&self) -> Option<Value<'_>> {
        Some(self.element_value())
    }
}

#[cfg(feature = "uuid")]
impl ElementValue for uuid::Uuid {
    fn element_value(&self) -> Value<'_> {
        Value::String(Cow::Owned(self.hyphenated().to_string()))
    }
}

// =============================================================================
// Bytes
// =============================================================================

impl FieldValue for bytes::Bytes {
    const KIND: ValueKind = ValueKind::Bytes;

    fn field_value(&self) -> Option<Value<'_>> {
        Some(self.element_value())
    }
}

impl ElementValue for bytes::Bytes {
    fn element_value(&self) -> Value<'_> {
        Value::Bytes(Cow::Borrowed(self.as_ref()))
    }
}
