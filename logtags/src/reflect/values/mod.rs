//! `FieldValue` implementations for standard library and ecosystem types.
//!
//! This module maps Rust field types onto the engine's kind, shape and value
//! model so `#[derive(Message)]` can describe a struct without schema code.
//!
//! ## Presence
//!
//! `Option::None` and empty lists or maps are absent: the derived `fields()`
//! skips them, like protobuf skips unset optional and empty repeated fields.
//! Every other value, including zero scalars and empty strings, is present.
//!
//! ## Byte Strings
//!
//! `Vec<u8>` is a list of integers. Use `bytes::Bytes` for a field that should
//! be shown as base64.
//!
//! ## Map Keys
//!
//! Map keys are rendered through `Display` into the `name.[key]` path.
//!
//! ## Elements
//!
//! List elements and map values must implement [`ElementValue`]: a value that
//! is always present and is not itself a collection. `Vec<Vec<T>>` and
//! `Vec<Option<T>>` are rejected at compile time, so every element keeps its
//! index.

mod collections;
mod scalars;
mod time;
mod wrappers;


use super::{FieldShape, Value, ValueKind};

/// Maps a Rust type onto a field kind, shape and current value.
///
/// Implemented for scalars, strings, `bytes::Bytes`, timestamps, standard
/// collections and smart pointers. `#[derive(Message)]` implements it for the
/// derived type itself (as a nested message).
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot be used as a message field",
    label = "this type has no tag representation",
    note = "derive `Message` on nested structs, or mark the field `#[tags(skip)]`"
)]
pub trait FieldValue {
    /// Kind of the value, or of the elements for lists and maps.
    const KIND: ValueKind;

    /// Cardinality of the field.
    const SHAPE: FieldShape = FieldShape::Singular;

    /// Returns the current value, or `None` when the field is absent.
    fn field_value(&self) -> Option<Value<'_>>;
}

/// A [`FieldValue`] that can be a list element or a map value.
///
/// Element values are always present and never collections themselves.
/// Options, lists and maps do not implement it. `#[derive(Message)]`
/// implements it for the derived type.
///
/// ```compile_fail
/// use logtags::Message;
///
/// #[derive(Message)]
/// struct Grid {
///     rows: Vec<Vec<u32>>,
/// }
/// ```
///
/// ```compile_fail
/// use logtags::Message;
///
/// #[derive(Message)]
/// struct Sparse {
///     slots: Vec<Option<String>>,
/// }
/// ```
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot be a list element or map value",
    label = "lists and maps hold present, non-collection values",
    note = "wrap nested collections or optional values in a struct deriving `Message`"
)]
pub trait ElementValue: FieldValue {
    /// Returns the value of the element.
    fn element_value(&self) -> Value<'_>;
}

// =============================================================================
// Scalar implementation helper
// =============================================================================

macro_rules! impl_field_value_scalar {
    ($ty:ty, $kind:ident, |$value:ident| $convert:expr) => {
        impl crate::reflect::FieldValue for $ty {
            const KIND: crate::reflect::ValueKind = crate::reflect::ValueKind::$kind;

            fn field_value(&self) -> Option<crate::reflect::Value<'_>> {
                Some(crate::reflect::ElementValue::element_value(self))
            }
        }

        impl crate::reflect::ElementValue for $ty {
            fn element_value(&self) -> crate::reflect::Value<'_> {
                let $value = *self;
                $convert
            }
        }
    };
}

pub(super) use impl_field_value_scalar;
