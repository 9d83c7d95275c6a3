//! `FieldValue` implementations for timestamps.
//!
//! Every timestamp-like type reports the `message` kind and is shown through
//! its canonical RFC 3339 form.

use std::time::SystemTime;

use chrono::{DateTime, Utc};

use super::{ElementValue, FieldValue};
use crate::reflect::{Timestamp, Value, ValueKind};

impl FieldValue for Timestamp {
    const KIND: ValueKind = ValueKind::Message;

    fn field_value(&self) -> Option<Value<'_>> {
        Some(self.element_value())
    }
}

impl ElementValue for Timestamp {
    fn element_value(&self) -> Value<'_> {
        Value::Timestamp(*self)
    }
}

impl FieldValue for SystemTime {
    const KIND: ValueKind = ValueKind::Message;

    fn field_value(&self) -> Option<Value<'_>> {
        Some(self.element_value())
    }
}

impl ElementValue for SystemTime {
    fn element_value(&self) -> Value<'_> {
        Value::Timestamp(Timestamp::from(*self))
    }
}

impl FieldValue for DateTime<Utc> {
    const KIND: ValueKind = ValueKind::Message;

    fn field_value(&self) -> Option<Value<'_>> {
        Some(self.element_value())
    }
}

impl ElementValue for DateTime<Utc> {
    fn element_value(&self) -> Value<'_> {
        Value::Timestamp(Timestamp::from(*self))
    }
}

#[cfg(feature = "time")]
impl FieldValue for time::OffsetDateTime {
    const KIND: ValueKind = ValueKind::Message;

    fn field_value(&self) -> Option<Value<'_>> {
        Some(self.element_value())
    }
}

#[cfg(feature = "time")]
impl ElementValue for time::OffsetDateTime {
    fn element_value(&self) -> Value<'_> {
        Value::Timestamp(Timestamp::from(*self))
    }
}
