//! Schema abstraction: the view of a message the extraction engine walks.
//!
//! The engine never depends on a concrete schema library. It only needs the
//! [`Message`] capability, which lists the present fields of an instance as
//! [`FieldView`]s (a [`FieldDescriptor`] plus the current [`Value`]).
//!
//! - **`descriptor`**: field metadata (`FieldDescriptor`, `ValueKind`, `FieldShape`)
//! - **`value`**: borrowed dynamic values (`Value`)
//! - **`timestamp`**: the well-known `Timestamp` type
//! - **`values`**: `FieldValue` and `ElementValue` implementations mapping Rust
//!   types onto values
//!
//! Implementations exist for `#[derive(Message)]` structs and, behind the
//! `prost-reflect` feature, for `prost_reflect::DynamicMessage`.

mod descriptor;
mod timestamp;
mod value;
mod values;

pub use descriptor::{FieldClass, FieldDescriptor, FieldShape, ValueKind};
pub use timestamp::{INVALID_TIMESTAMP, Timestamp};
pub use value::Value;
pub use values::{ElementValue, FieldValue};

use std::borrow::Cow;

use crate::directive::DisplayDirective;

// =============================================================================
// Message - the schema capability
// =============================================================================

/// A structured value whose fields can be enumerated generically.
///
/// `fields` returns the *present* fields in declaration order. What counts as
/// present is a decision of the schema system: derived structs omit `None`
/// options and empty collections, protobuf messages follow protobuf presence.
///
/// Implementations must not mutate the message and should not panic; a panic
/// is contained by [`crate::TagExtractor::extract`] but costs the whole tag set.
#[diagnostic::on_unimplemented(
    message = "`{Self}` does not implement `Message`",
    label = "this type cannot be walked for tags",
    note = "use `#[derive(Message)]` on the type definition"
)]
pub trait Message {
    /// Lists the present fields of this instance.
    fn fields(&self) -> Vec<FieldView<'_>>;
}

impl<T: Message + ?Sized> Message for &T {
    fn fields(&self) -> Vec<FieldView<'_>> {
        (**self).fields()
    }
}

impl<T: Message + ?Sized> Message for Box<T> {
    fn fields(&self) -> Vec<FieldView<'_>> {
        (**self).fields()
    }
}

// =============================================================================
// FieldView
// =============================================================================

/// One present field of a message instance.
#[derive(Clone, Debug)]
pub struct FieldView<'a> {
    pub descriptor: FieldDescriptor,
    pub value: Value<'a>,
}

impl<'a> FieldView<'a> {
    #[must_use]
    pub fn new(descriptor: FieldDescriptor, value: Value<'a>) -> Self {
        Self { descriptor, value }
    }

    /// Builds the view of a Rust field, or `None` when the field is absent.
    ///
    /// Kind and shape come from the field's [`FieldValue`] implementation.
    /// This is the constructor `#[derive(Message)]` expands to.
    pub fn of<T>(
        name: impl Into<Cow<'static, str>>,
        directive: DisplayDirective,
        value: &'a T,
    ) -> Option<Self>
    where
        T: FieldValue + ?Sized,
    {
        let value = value.field_value()?;
        let descriptor = FieldDescriptor::new(name, T::KIND)
            .with_shape(T::SHAPE)
            .with_directive(directive);
        Some(Self { descriptor, value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Pair {
        left: i64,
        right: Option<String>,
    }

    impl Message for Pair {
        fn fields(&self) -> Vec<FieldView<'_>> {
            [
                FieldView::of("left", DisplayDirective::Show, &self.left),
                FieldView::of("right", DisplayDirective::Hide, &self.right),
            ]
            .into_iter()
            .flatten()
            .collect()
        }
    }

    #[test]
    fn field_view_of_skips_absent_values() {
        let pair = Pair {
            left: 3,
            right: None,
        };
        let fields = pair.fields();
        assert_eq!(fields.len(), 1);
        assert_eq!(fields[0].descriptor.name(), "left");
        assert_eq!(fields[0].descriptor.kind(), ValueKind::Int64);
    }

    #[test]
    fn field_view_of_carries_shape_and_directive() {
        let tags = vec!["a".to_string()];
        let view = FieldView::of("tags", DisplayDirective::Hide, &tags).unwrap();
        assert_eq!(view.descriptor.shape(), FieldShape::List);
        assert_eq!(view.descriptor.kind(), ValueKind::String);
        assert_eq!(view.descriptor.directive(), &DisplayDirective::Hide);
    }

    #[test]
    fn references_and_boxes_forward_fields() {
        let pair = Pair {
            left: 1,
            right: Some("r".into()),
        };
        let boxed: Box<dyn Message> = Box::new(pair);
        assert_eq!(boxed.fields().len(), 2);
        assert_eq!((&boxed).fields().len(), 2);
    }
}
