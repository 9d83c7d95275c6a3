//! List and map `FieldValue` implementations.
//!
//! Elements and map values are bounded by [`ElementValue`], so nested
//! collections (`Vec<Vec<T>>`) and optional elements do not compile.

use std::{
    borrow::Cow,
    collections::{BTreeMap, HashMap, VecDeque},
    fmt::Display,
    hash::BuildHasher,
};

use super::{ElementValue, FieldValue};
use crate::reflect::{FieldShape, Value, ValueKind};

fn list_value<'a, T, I>(items: I) -> Option<Value<'a>>
where
    T: ElementValue + 'a,
    I: IntoIterator<Item = &'a T>,
{
    let values: Vec<Value<'a>> = items.into_iter().map(T::element_value).collect();
    if values.is_empty() {
        None
    } else {
        Some(Value::List(values))
    }
}

fn map_value<'a, K, V, I>(entries: I) -> Option<Value<'a>>
where
    K: Display + 'a,
    V: ElementValue + 'a,
    I: IntoIterator<Item = (&'a K, &'a V)>,
{
    let values: Vec<(Cow<'a, str>, Value<'a>)> = entries
        .into_iter()
        .map(|(key, value)| (Cow::Owned(key.to_string()), value.element_value()))
        .collect();
    if values.is_empty() {
        None
    } else {
        Some(Value::Map(values))
    }
}

// =============================================================================
// Lists
// =============================================================================

impl<T: ElementValue> FieldValue for [T] {
    const KIND: ValueKind = T::KIND;
    const SHAPE: FieldShape = FieldShape::List;

    fn field_value(&self) -> Option<Value<'_>> {
        list_value(self)
    }
}

impl<T: ElementValue, const N: usize> FieldValue for [T; N] {
    const KIND: ValueKind = T::KIND;
    const SHAPE: FieldShape = FieldShape::List;

    fn field_value(&self) -> Option<Value<'_>> {
        list_value(self)
    }
}

impl<T: ElementValue> FieldValue for Vec<T> {
    const KIND: ValueKind = T::KIND;
    const SHAPE: FieldShape = FieldShape::List;

    fn field_value(&self) -> Option<Value<'_>> {
        list_value(self)
    }
}

impl<T: ElementValue> FieldValue for VecDeque<T> {
    const KIND: ValueKind = T::KIND;
    const SHAPE: FieldShape = FieldShape::List;

    fn field_value(&self) -> Option<Value<'_>> {
        list_value(self)
    }
}

// =============================================================================
// Maps (keys rendered through Display)
// =============================================================================

impl<K, V, S> FieldValue for HashMap<K, V, S>
where
    K: Display,
    V: ElementValue,
    S: BuildHasher,
{
    const KIND: ValueKind = V::KIND;
    const SHAPE: FieldShape = FieldShape::Map;

    fn field_value(&self) -> Option<Value<'_>> {
        map_value(self)
    }
}

impl<K, V> FieldValue for BTreeMap<K, V>
where
    K: Display,
    V: ElementValue,
{
    const KIND: ValueKind = V::KIND;
    const SHAPE: FieldShape = FieldShape::Map;

    fn field_value(&self) -> Option<Value<'_>> {
        map_value(self)
    }
}
