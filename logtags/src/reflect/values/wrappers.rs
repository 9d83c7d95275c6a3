//! `FieldValue` implementations for optional and pointer wrappers.
//!
//! Wrappers are transparent: they report the kind and shape of what they hold.
//! Pointers are list elements when their target is; `Option` never is.

use std::{rc::Rc, sync::Arc};

use super::{ElementValue, FieldValue};
use crate::reflect::{FieldShape, Message, Value, ValueKind};

impl<T: FieldValue> FieldValue for Option<T> {
    const KIND: ValueKind = T::KIND;
    const SHAPE: FieldShape = T::SHAPE;

    fn field_value(&self) -> Option<Value<'_>> {
        self.as_ref().and_then(T::field_value)
    }
}

impl<T: FieldValue + ?Sized> FieldValue for &T {
    const KIND: ValueKind = T::KIND;
    const SHAPE: FieldShape = T::SHAPE;

    fn field_value(&self) -> Option<Value<'_>> {
        (**self).field_value()
    }
}

impl<T: ElementValue + ?Sized> ElementValue for &T {
    fn element_value(&self) -> Value<'_> {
        (**self).element_value()
    }
}

impl<T: FieldValue + ?Sized> FieldValue for Box<T> {
    const KIND: ValueKind = T::KIND;
    const SHAPE: FieldShape = T::SHAPE;

    fn field_value(&self) -> Option<Value<'_>> {
        (**self).field_value()
    }
}

impl<T: ElementValue + ?Sized> ElementValue for Box<T> {
    fn element_value(&self) -> Value<'_> {
        (**self).element_value()
    }
}

impl<T: FieldValue + ?Sized> FieldValue for Arc<T> {
    const KIND: ValueKind = T::KIND;
    const SHAPE: FieldShape = T::SHAPE;

    fn field_value(&self) -> Option<Value<'_>> {
        (**self).field_value()
    }
}

impl<T: ElementValue + ?Sized> ElementValue for Arc<T> {
    fn element_value(&self) -> Value<'_> {
        (**self).element_value()
    }
}

impl<T: FieldValue + ?Sized> FieldValue for Rc<T> {
    const KIND: ValueKind = T::KIND;
    const SHAPE: FieldShape = T::SHAPE;

    fn field_value(&self) -> Option<Value<'_>> {
        (**self).field_value()
    }
}

impl<T: ElementValue + ?Sized> ElementValue for Rc<T> {
    fn element_value(&self) -> Value<'_> {
        (**self).element_value()
    }
}

/// Type-erased messages are nested messages, so `Box<dyn Message>` fields work
/// in derived structs.
impl FieldValue for dyn Message + '_ {
    const KIND: ValueKind = ValueKind::Message;

    fn field_value(&self) -> Option<Value<'_>> {
        Some(self.element_value())
    }
}

impl ElementValue for dyn Message + '_ {
    fn element_value(&self) -> Value<'_> {
        Value::Message(self)
    }
}
