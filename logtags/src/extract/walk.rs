//! Recursive message walk.
//!
//! The walker visits the present fields of a message, hands each one to the
//! policy matching its directive and merges the results. Nested messages
//! re-enter [`Walker::message`] one level deeper and have their paths
//! prefixed with the parent field name.

use std::fmt;

use base64::{Engine as _, engine::general_purpose::STANDARD};

use super::{ExtractError, ExtractOptions, policies};
use crate::{
    Tags,
    directive::DisplayDirective,
    reflect::{FieldClass, FieldDescriptor, FieldView, Message, Value, ValueKind},
};

pub(crate) struct Walker<'o> {
    options: &'o ExtractOptions,
    depth: usize,
}

impl<'o> Walker<'o> {
    pub(crate) fn new(options: &'o ExtractOptions) -> Self {
        Self { options, depth: 0 }
    }

    /// Extracts the tags of every present field of `message`.
    pub(crate) fn message(&self, message: &dyn Message) -> Result<Tags, ExtractError> {
        if self.depth > self.options.max_depth {
            return Err(ExtractError::DepthLimitExceeded {
                limit: self.options.max_depth,
            });
        }

        let mut tags = Tags::new();
        for view in message.fields() {
            tags.merge(self.field(&view)?);
        }
        Ok(tags)
    }

    /// Dispatches one field to the policy named by its directive.
    pub(crate) fn field(&self, view: &FieldView<'_>) -> Result<Tags, ExtractError> {
        let descriptor = &view.descriptor;
        let value = &view.value;
        match descriptor.directive() {
            DisplayDirective::Show => policies::show(self, descriptor, value),
            DisplayDirective::Hide => Ok(policies::hide()),
            DisplayDirective::Obfuscate { replacement } => Ok(policies::obfuscate(
                descriptor,
                replacement,
                &self.options.default_mask,
            )),
            DisplayDirective::TrimHead { tail_chars } => {
                policies::trim_head(self, descriptor, value, *tail_chars)
            }
            DisplayDirective::TrimTail { head_chars } => {
                policies::trim_tail(self, descriptor, value, *head_chars)
            }
            DisplayDirective::TrimMiddle {
                head_chars,
                tail_chars,
            } => policies::trim_middle(self, descriptor, value, *head_chars, *tail_chars),
        }
    }

    /// Returns the elements of a list field's value.
    pub(crate) fn list_elements<'v, 'a>(
        &self,
        descriptor: &FieldDescriptor,
        value: &'v Value<'a>,
    ) -> Result<&'v [Value<'a>], ExtractError> {
        match value {
            Value::List(items) => Ok(items),
            other => Err(ExtractError::mismatch(
                descriptor.name(),
                "list",
                other.type_name(),
            )),
        }
    }

    /// Renders the element at `index` of a list field.
    pub(crate) fn element(
        &self,
        descriptor: &FieldDescriptor,
        index: usize,
        item: &Value<'_>,
    ) -> Result<Tags, ExtractError> {
        let path = format!("{}.[{index}]", descriptor.name());
        self.value(&path, descriptor.kind(), item)
    }

    /// Renders a field's value in full, as the `Show` directive does.
    pub(crate) fn show(
        &self,
        descriptor: &FieldDescriptor,
        value: &Value<'_>,
    ) -> Result<Tags, ExtractError> {
        match descriptor.class() {
            FieldClass::Ignorable => Ok(Tags::new()),
            FieldClass::Scalar | FieldClass::Bytes | FieldClass::Message => {
                self.value(descriptor.name(), descriptor.kind(), value)
            }
            FieldClass::List => {
                let mut tags = Tags::new();
                for (index, item) in self.list_elements(descriptor, value)?.iter().enumerate() {
                    tags.merge(self.element(descriptor, index, item)?);
                }
                Ok(tags)
            }
            FieldClass::Map => {
                let Value::Map(entries) = value else {
                    return Err(ExtractError::mismatch(
                        descriptor.name(),
                        "map",
                        value.type_name(),
                    ));
                };
                let mut tags = Tags::new();
                for (key, item) in entries {
                    let path = format!("{}.[{key}]", descriptor.name());
                    tags.merge(self.value(&path, descriptor.kind(), item)?);
                }
                Ok(tags)
            }
        }
    }

    /// Renders a single (non-collection) value of `kind` at `path`.
    fn value(&self, path: &str, kind: ValueKind, value: &Value<'_>) -> Result<Tags, ExtractError> {
        let mut tags = Tags::new();
        match (kind, value) {
            (ValueKind::Group, _) => {}
            (ValueKind::Message, Value::Timestamp(ts)) => {
                tags.insert(path, ts.to_string());
            }
            (ValueKind::Message, Value::Message(nested)) => {
                let nested = self.nested().message(*nested)?;
                return Ok(nested.prefixed(&format!("{path}.")));
            }
            (ValueKind::Message, other) => {
                return Err(ExtractError::mismatch(path, "message", other.type_name()));
            }
            (_, other) => match render_scalar(other) {
                Some(text) => {
                    tags.insert(path, text);
                }
                None => return Err(ExtractError::mismatch(path, "scalar", other.type_name())),
            },
        }
        Ok(tags)
    }

    fn nested(&self) -> Self {
        Self {
            options: self.options,
            depth: self.depth + 1,
        }
    }
}

/// Default textual form of a scalar value, or `None` for composite values.
pub(crate) fn render_scalar(value: &Value<'_>) -> Option<String> {
    let text = match value {
        Value::Bool(v) => v.to_string(),
        Value::I64(v) => v.to_string(),
        Value::U64(v) => v.to_string(),
        Value::F32(v) => render_float(v),
        Value::F64(v) => render_float(v),
        Value::String(v) => v.to_string(),
        Value::Bytes(v) => STANDARD.encode(v),
        Value::Enum(number) => number.to_string(),
        Value::Timestamp(v) => v.to_string(),
        Value::Message(_) | Value::List(_) | Value::Map(_) => return None,
    };
    Some(text)
}

/// Shortest round-trip text of a float in `%g` style: plain digits for
/// decimal exponents in `-4..6`, otherwise `d.ddde±XX` with at least two
/// exponent digits. Infinities are signed (`+Inf`, `-Inf`).
fn render_float<F>(value: &F) -> String
where
    F: fmt::Display + fmt::LowerExp,
{
    let scientific = format!("{value:e}");
    let Some((mantissa, exponent)) = scientific.split_once('e') else {
        return match scientific.as_str() {
            "inf" => "+Inf".to_owned(),
            "-inf" => "-Inf".to_owned(),
            _ => scientific,
        };
    };
    let Ok(exponent) = exponent.parse::<i32>() else {
        return scientific;
    };
    if (-4..6).contains(&exponent) {
        return value.to_string();
    }
    let sign = if exponent < 0 { '-' } else { '+' };
    format!("{mantissa}e{sign}{:02}", exponent.unsigned_abs())
}

#[cfg(test)]
mod tests {
    use std::borrow::Cow;

    use super::*;
    use crate::reflect::Timestamp;

    struct Inner;

    impl Message for Inner {
        fn fields(&self) -> Vec<FieldView<'_>> {
            vec![FieldView::new(
                FieldDescriptor::new("id", ValueKind::Int64),
                Value::I64(9),
            )]
        }
    }

    struct Outer {
        inner: Inner,
    }

    impl Message for Outer {
        fn fields(&self) -> Vec<FieldView<'_>> {
            vec![
                FieldView::new(
                    FieldDescriptor::new("inner", ValueKind::Message),
                    Value::Message(&self.inner),
                ),
                FieldView::new(
                    FieldDescriptor::new("legacy", ValueKind::Group),
                    Value::Bool(true),
                ),
            ]
        }
    }

    #[test]
    fn scalars_render_with_their_default_text() {
        assert_eq!(render_scalar(&Value::Bool(true)).as_deref(), Some("true"));
        assert_eq!(render_scalar(&Value::I64(-3)).as_deref(), Some("-3"));
        assert_eq!(render_scalar(&Value::F64(1.5)).as_deref(), Some("1.5"));
        assert_eq!(
            render_scalar(&Value::Bytes(Cow::Borrowed(b"hi"))).as_deref(),
            Some("aGk=")
        );
        assert_eq!(render_scalar(&Value::Enum(7)).as_deref(), Some("7"));
        assert!(render_scalar(&Value::List(Vec::new())).is_none());
    }

    #[test]
    fn floats_switch_to_exponent_form_outside_small_magnitudes() {
        let render = |value: f64| render_scalar(&Value::F64(value)).unwrap();
        assert_eq!(render(3.0), "3");
        assert_eq!(render(0.5), "0.5");
        assert_eq!(render(123_456.0), "123456");
        assert_eq!(render(0.0001), "0.0001");
        assert_eq!(render(1e21), "1e+21");
        assert_eq!(render(1_234_567.0), "1.234567e+06");
        assert_eq!(render(0.00001), "1e-05");
        assert_eq!(render(-2.5e-300), "-2.5e-300");
        assert_eq!(render(f64::INFINITY), "+Inf");
        assert_eq!(render(f64::NEG_INFINITY), "-Inf");
        assert_eq!(render(f64::NAN), "NaN");
    }

    #[test]
    fn single_precision_floats_keep_their_shortest_form() {
        assert_eq!(render_scalar(&Value::F32(0.1)).as_deref(), Some("0.1"));
        assert_eq!(render_scalar(&Value::F32(3e7)).as_deref(), Some("3e+07"));
    }

    #[test]
    fn nested_messages_are_prefixed_and_groups_skipped() {
        let options = ExtractOptions::default();
        let tags = Walker::new(&options)
            .message(&Outer { inner: Inner })
            .unwrap();
        assert_eq!(tags.iter().collect::<Vec<_>>(), vec![("inner.id", "9")]);
    }

    #[test]
    fn timestamps_render_as_rfc3339() {
        let options = ExtractOptions::default();
        let descriptor = FieldDescriptor::new("at", ValueKind::Message);
        let tags = Walker::new(&options)
            .show(&descriptor, &Value::Timestamp(Timestamp::new(0, 0)))
            .unwrap();
        assert_eq!(tags.get("at"), Some("1970-01-01T00:00:00Z"));
    }

    #[test]
    fn composite_value_in_scalar_field_is_a_mismatch() {
        let options = ExtractOptions::default();
        let descriptor = FieldDescriptor::new("id", ValueKind::Int64);
        let err = Walker::new(&options)
            .show(&descriptor, &Value::List(vec![Value::I64(1)]))
            .unwrap_err();
        assert_eq!(err, ExtractError::mismatch("id", "scalar", "list"));
    }

    #[test]
    fn zero_depth_limit_rejects_nested_messages() {
        let options = ExtractOptions::default().with_max_depth(0);
        let err = Walker::new(&options)
            .message(&Outer { inner: Inner })
            .unwrap_err();
        assert_eq!(err, ExtractError::DepthLimitExceeded { limit: 0 });
    }
}
