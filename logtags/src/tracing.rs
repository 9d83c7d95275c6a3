//! Adapters for emitting tags through `tracing`.
//!
//! - **`TracingTagsExt`**: logs the tags of a message as one display string
//!   (`key=value` pairs). Works with any subscriber.
//! - **`Valuable` for `Tags`** (requires the `tracing-valuable` feature): logs
//!   the tags as a structured map that `valuable`-aware subscribers can walk.
//!
//! ```ignore
//! use logtags::tracing::TracingTagsExt;
//!
//! tracing::info!(tags = %request.tracing_tags(), "Invoked RPC method");
//! ```

use tracing::field::{DisplayValue, display};

use crate::{Message, Tags, extract_tags};

/// Extension trait for logging the tags of a message as a display value.
pub trait TracingTagsExt {
    /// Extracts the tags and wraps their text form for a `tracing` field.
    ///
    /// A message without tags renders as an empty string.
    fn tracing_tags(&self) -> DisplayValue<String>;
}

impl<T> TracingTagsExt for T
where
    T: Message,
{
    fn tracing_tags(&self) -> DisplayValue<String> {
        let text = extract_tags(self)
            .map(|tags| tags.to_string())
            .unwrap_or_default();
        display(text)
    }
}

impl Tags {
    /// Wraps the tags for a `tracing` field as a display value.
    #[must_use]
    pub fn as_tracing_display(&self) -> DisplayValue<String> {
        display(self.to_string())
    }
}

#[cfg(feature = "tracing-valuable")]
mod valuable_support {
    use valuable::{Mappable, Valuable, Value, Visit};

    use crate::Tags;

    impl Valuable for Tags {
        fn as_value(&self) -> Value<'_> {
            Value::Mappable(self)
        }

        fn visit(&self, visit: &mut dyn Visit) {
            for (key, value) in self.iter() {
                visit.visit_entry(Value::String(key), Value::String(value));
            }
        }
    }

    impl Mappable for Tags {
        fn size_hint(&self) -> (usize, Option<usize>) {
            (self.len(), Some(self.len()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        DisplayDirective,
        reflect::{FieldDescriptor, FieldView, Value, ValueKind},
    };

    struct Greeting;

    impl Message for Greeting {
        fn fields(&self) -> Vec<FieldView<'_>> {
            vec![
                FieldView::new(
                    FieldDescriptor::new("text", ValueKind::String),
                    Value::from("hi there"),
                ),
                FieldView::new(
                    FieldDescriptor::new("token", ValueKind::String)
                        .with_directive(DisplayDirective::Hide),
                    Value::from("secret"),
                ),
            ]
        }
    }

    #[test]
    fn tracing_tags_renders_visible_fields_only() {
        let value = Greeting.tracing_tags();
        let rendered = format!("{value:?}");
        assert_eq!(rendered, r#"text="hi there""#);
    }

    #[test]
    fn tags_display_value_matches_display() {
        let tags: Tags = [("a", "1")].into_iter().collect();
        assert_eq!(format!("{:?}", tags.as_tracing_display()), "a=1");
    }

    #[cfg(feature = "tracing-valuable")]
    #[test]
    fn tags_are_mappable() {
        let tags: Tags = [("a", "1"), ("b", "2")].into_iter().collect();
        assert!(matches!(valuable::Valuable::as_value(&tags), valuable::Value::Mappable(_)));
        assert_eq!(valuable::Mappable::size_hint(&tags), (2, Some(2)));
    }
}
