//! One function per display directive.
//!
//! Every policy turns a single field (descriptor plus value) into tags.
//! Trimming directives share three rules:
//!
//! - a zero count hides the field entirely;
//! - list fields keep a subset of their elements under the original indices;
//! - string fields are cut with [`TrimConfig`]; any other field renders
//!   [`UNSUPPORTED_FORMAT`].

use super::{ExtractError, walk::Walker};
use crate::{
    Tags,
    directive::TrimConfig,
    reflect::{FieldDescriptor, FieldShape, Value, ValueKind},
};

/// Text rendered when a trimming directive is applied to a field it cannot trim.
pub const UNSUPPORTED_FORMAT: &str = "<unsupported format>";

pub(crate) fn show(
    walker: &Walker<'_>,
    descriptor: &FieldDescriptor,
    value: &Value<'_>,
) -> Result<Tags, ExtractError> {
    walker.show(descriptor, value)
}

pub(crate) fn hide() -> Tags {
    Tags::new()
}

/// Renders `"(<kind>) <replacement>"` without reading the value.
pub(crate) fn obfuscate(descriptor: &FieldDescriptor, replacement: &str, default_mask: &str) -> Tags {
    let kind = match descriptor.shape() {
        FieldShape::Map => ValueKind::Message,
        FieldShape::Singular | FieldShape::List => descriptor.kind(),
    };
    let mask = if replacement.is_empty() {
        default_mask
    } else {
        replacement
    };

    let mut tags = Tags::new();
    tags.insert(descriptor.name(), format!("({kind}) {mask}"));
    tags
}

pub(crate) fn trim_head(
    walker: &Walker<'_>,
    descriptor: &FieldDescriptor,
    value: &Value<'_>,
    tail_chars: usize,
) -> Result<Tags, ExtractError> {
    if tail_chars == 0 {
        return Ok(hide());
    }
    match descriptor.shape() {
        FieldShape::List => {
            let items = walker.list_elements(descriptor, value)?;
            if tail_chars >= items.len() {
                return walker.show(descriptor, value);
            }
            let start = items.len() - tail_chars;
            elements(walker, descriptor, items, start..items.len())
        }
        FieldShape::Map => Ok(unsupported(descriptor)),
        FieldShape::Singular => Ok(trim_string(descriptor, value, TrimConfig::tail(tail_chars))),
    }
}

pub(crate) fn trim_tail(
    walker: &Walker<'_>,
    descriptor: &FieldDescriptor,
    value: &Value<'_>,
    head_chars: usize,
) -> Result<Tags, ExtractError> {
    if head_chars == 0 {
        return Ok(hide());
    }
    match descriptor.shape() {
        FieldShape::List => {
            let items = walker.list_elements(descriptor, value)?;
            if head_chars > items.len() {
                return walker.show(descriptor, value);
            }
            elements(walker, descriptor, items, 0..head_chars)
        }
        FieldShape::Map => Ok(unsupported(descriptor)),
        FieldShape::Singular => Ok(trim_string(descriptor, value, TrimConfig::head(head_chars))),
    }
}

/// Keeps both ends of a string or list.
///
/// For lists the result is the union of `trim_head(tail_chars)` and
/// `trim_tail(head_chars)` applied to the same list.
pub(crate) fn trim_middle(
    walker: &Walker<'_>,
    descriptor: &FieldDescriptor,
    value: &Value<'_>,
    head_chars: usize,
    tail_chars: usize,
) -> Result<Tags, ExtractError> {
    if head_chars == 0 && tail_chars == 0 {
        return Ok(hide());
    }
    match descriptor.shape() {
        FieldShape::List => {
            let items = walker.list_elements(descriptor, value)?;
            if head_chars.saturating_add(tail_chars) >= items.len() {
                return walker.show(descriptor, value);
            }
            let mut tags = trim_head(walker, descriptor, value, tail_chars)?;
            tags.merge(trim_tail(walker, descriptor, value, head_chars)?);
            Ok(tags)
        }
        FieldShape::Map => Ok(unsupported(descriptor)),
        FieldShape::Singular => Ok(trim_string(
            descriptor,
            value,
            TrimConfig::both(head_chars, tail_chars),
        )),
    }
}

fn elements(
    walker: &Walker<'_>,
    descriptor: &FieldDescriptor,
    items: &[Value<'_>],
    range: std::ops::Range<usize>,
) -> Result<Tags, ExtractError> {
    let mut tags = Tags::new();
    for index in range {
        if let Some(item) = items.get(index) {
            tags.merge(walker.element(descriptor, index, item)?);
        }
    }
    Ok(tags)
}

fn trim_string(descriptor: &FieldDescriptor, value: &Value<'_>, config: TrimConfig) -> Tags {
    match (descriptor.kind(), value) {
        (ValueKind::String, Value::String(text)) => {
            let mut tags = Tags::new();
            tags.insert(descriptor.name(), config.apply_to(text));
            tags
        }
        _ => unsupported(descriptor),
    }
}

fn unsupported(descriptor: &FieldDescriptor) -> Tags {
    tracing::debug!(
        field = descriptor.name(),
        kind = %descriptor.kind(),
        shape = ?descriptor.shape(),
        "trimming directive does not apply to this field"
    );
    let mut tags = Tags::new();
    tags.insert(descriptor.name(), UNSUPPORTED_FORMAT);
    tags
}
