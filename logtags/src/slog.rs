//! Adapters for emitting tags through `slog`.
//!
//! [`Tags`] and [`CallFields`] implement `slog::Value` by serializing into a
//! nested JSON object through `slog`'s nested-value support, so drains that
//! understand structured values (such as `slog-json`) keep the field paths as
//! object keys instead of a single flattened string.
//!
//! ```ignore
//! use logtags::slog::SlogTagsExt;
//!
//! info!(logger, "Invoked RPC method"; "tags" => request.slog_tags());
//! ```

use slog::{Key, Record, Result as SlogResult, Serializer, Value as SlogValue};

use crate::{CallFields, Message, Tags, extract_tags};

impl SlogValue for Tags {
    fn serialize(
        &self,
        record: &Record<'_>,
        key: Key,
        serializer: &mut dyn Serializer,
    ) -> SlogResult {
        let nested = slog::Serde(self.to_json());
        SlogValue::serialize(&nested, record, key, serializer)
    }
}

impl SlogValue for CallFields {
    fn serialize(
        &self,
        record: &Record<'_>,
        key: Key,
        serializer: &mut dyn Serializer,
    ) -> SlogResult {
        let nested = slog::Serde(self.to_json());
        SlogValue::serialize(&nested, record, key, serializer)
    }
}

/// Extension trait for logging the tags of a message with `slog`.
pub trait SlogTagsExt: Message + Sized {
    /// Extracts the tags of `self`; a message without tags logs as `{}`.
    fn slog_tags(&self) -> Tags {
        extract_tags(self).unwrap_or_default()
    }
}

impl<T> SlogTagsExt for T where T: Message {}
