//! Errors raised while walking a message.

use thiserror::Error;

/// Unexpected condition that aborts a whole extraction.
///
/// Expected policy outcomes (for example trimming a number) are not errors;
/// they are rendered as sentinel text instead. [`crate::TagExtractor::extract`]
/// converts every `ExtractError` into the diagnostic tag.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ExtractError {
    /// A field's value does not match what its descriptor declares.
    #[error("field `{field}`: expected {expected} value, found {found}")]
    ValueMismatch {
        field: String,
        expected: &'static str,
        found: &'static str,
    },

    /// Nested messages went deeper than the configured limit.
    #[error("message nesting exceeds the limit of {limit} levels")]
    DepthLimitExceeded { limit: usize },

    /// A `Message` implementation panicked while listing its fields.
    #[error("panic while reading fields: {0}")]
    Panicked(String),
}

impl ExtractError {
    pub(crate) fn mismatch(
        field: impl Into<String>,
        expected: &'static str,
        found: &'static str,
    ) -> Self {
        Self::ValueMismatch {
            field: field.into(),
            expected,
            found,
        }
    }

    /// Builds [`ExtractError::Panicked`] from a caught panic payload.
    pub(crate) fn from_panic(payload: &(dyn std::any::Any + Send)) -> Self {
        let message = payload
            .downcast_ref::<&str>()
            .map(|s| (*s).to_owned())
            .or_else(|| payload.downcast_ref::<String>().cloned())
            .unwrap_or_else(|| "non-string panic payload".to_owned());
        Self::Panicked(message)
    }
}
