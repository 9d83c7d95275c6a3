//! Tag extraction: walking a message and applying display directives.
//!
//! - **`walk`**: the recursive field walker
//! - **`policies`**: one function per [`crate::DisplayDirective`]
//! - **`error`**: [`ExtractError`]
//! - **`options`**: [`ExtractOptions`]
//!
//! The public entry points are [`TagExtractor`], [`extract_tags`] and the
//! [`MessageTagsExt`] extension trait.

mod error;
mod options;
pub(crate) mod policies;
mod walk;

use std::panic::{self, AssertUnwindSafe};

pub use error::ExtractError;
pub use options::{DEFAULT_ERROR_KEY, DEFAULT_MAX_DEPTH, ExtractOptions};
pub use policies::UNSUPPORTED_FORMAT;

use crate::{Tags, reflect::Message};
use walk::Walker;

// =============================================================================
// TagExtractor
// =============================================================================

/// Extracts flat tags from messages according to their display directives.
///
/// An extractor only holds read-only [`ExtractOptions`]; share one per
/// service.
///
/// ```
/// use logtags::{Message, TagExtractor};
///
/// #[derive(Message)]
/// struct Login {
///     user: String,
///     #[tags(obfuscate)]
///     password: String,
/// }
///
/// let login = Login { user: "ada".into(), password: "hunter2".into() };
/// let tags = TagExtractor::default().extract(&login).unwrap();
/// assert_eq!(tags.get("user"), Some("ada"));
/// assert_eq!(tags.get("password"), Some("(string) *****"));
/// ```
#[derive(Clone, Debug, Default)]
pub struct TagExtractor {
    options: ExtractOptions,
}

impl TagExtractor {
    #[must_use]
    pub fn new(options: ExtractOptions) -> Self {
        Self { options }
    }

    #[must_use]
    pub fn options(&self) -> &ExtractOptions {
        &self.options
    }

    /// Extracts tags, containing every failure.
    ///
    /// Returns `None` when no field produced a tag. If the walk fails or a
    /// `Message` implementation panics, the result holds exactly one entry
    /// under [`ExtractOptions::error_key`] describing the failure, and the
    /// failure is logged at `warn` level.
    pub fn extract(&self, message: &dyn Message) -> Option<Tags> {
        let outcome = panic::catch_unwind(AssertUnwindSafe(|| self.try_extract(message)))
            .unwrap_or_else(|payload| Err(ExtractError::from_panic(payload.as_ref())));

        match outcome {
            Ok(tags) => tags,
            Err(err) => {
                tracing::warn!(error = %err, "failed to extract tags from message");
                Some(Tags::diagnostic(self.options.error_key.as_ref(), &err))
            }
        }
    }

    /// Extracts tags, returning walk failures to the caller.
    ///
    /// Panics raised by `Message` implementations are not caught here.
    ///
    /// # Errors
    ///
    /// Returns [`ExtractError`] when a value does not match its descriptor or
    /// messages nest deeper than [`ExtractOptions::max_depth`].
    pub fn try_extract(&self, message: &dyn Message) -> Result<Option<Tags>, ExtractError> {
        Walker::new(&self.options)
            .message(message)
            .map(Tags::non_empty)
    }
}

/// Extracts tags with the default options.
///
/// See [`TagExtractor::extract`].
pub fn extract_tags(message: &dyn Message) -> Option<Tags> {
    TagExtractor::default().extract(message)
}

// =============================================================================
// MessageTagsExt
// =============================================================================

/// Extension trait adding `.tags()` to every [`Message`].
pub trait MessageTagsExt: Message {
    /// Extracts tags with the default options. See [`extract_tags`].
    fn tags(&self) -> Option<Tags>
    where
        Self: Sized,
    {
        extract_tags(self)
    }

    /// Extracts tags with the given extractor.
    fn tags_with(&self, extractor: &TagExtractor) -> Option<Tags>
    where
        Self: Sized,
    {
        extractor.extract(self)
    }
}

impl<T: Message + ?Sized> MessageTagsExt for T {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        directive::DisplayDirective,
        reflect::{FieldDescriptor, FieldView, Value, ValueKind},
    };

    struct Panicking;

    impl Message for Panicking {
        fn fields(&self) -> Vec<FieldView<'_>> {
            panic!("descriptor pool is gone")
        }
    }

    struct Hidden;

    impl Message for Hidden {
        fn fields(&self) -> Vec<FieldView<'_>> {
            vec![FieldView::new(
                FieldDescriptor::new("secret", ValueKind::String)
                    .with_directive(DisplayDirective::Hide),
                Value::from("s3cr3t"),
            )]
        }
    }

    #[test]
    fn panics_become_the_diagnostic_entry() {
        let tags = extract_tags(&Panicking).unwrap();
        assert_eq!(tags.len(), 1);
        assert_eq!(
            tags.get(DEFAULT_ERROR_KEY),
            Some("[UNEXPECTED] error when tags extracting: panic while reading fields: descriptor pool is gone")
        );
    }

    #[test]
    fn custom_error_key_is_used() {
        let extractor = TagExtractor::new(ExtractOptions::default().with_error_key("_err"));
        let tags = extractor.extract(&Panicking).unwrap();
        assert!(tags.contains_key("_err"));
    }

    #[test]
    fn fully_hidden_message_yields_none() {
        assert!(extract_tags(&Hidden).is_none());
        assert_eq!(TagExtractor::default().try_extract(&Hidden), Ok(None));
        assert!(Hidden.tags().is_none());
    }

    #[test]
    fn extractor_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<TagExtractor>();
    }
}
