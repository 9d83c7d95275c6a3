//! Extraction configuration.

use std::borrow::Cow;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::directive::DEFAULT_MASK;

/// Key of the single entry reported when extraction fails.
pub const DEFAULT_ERROR_KEY: &str = "_xxx_tags_extracting_error";

/// Default limit on nested message depth.
pub const DEFAULT_MAX_DEPTH: usize = 64;

/// Read-only configuration of a [`crate::TagExtractor`].
///
/// Services usually keep the defaults. With the `serde` feature the options
/// can be loaded from a config file; missing keys fall back to the defaults.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ExtractOptions {
    /// Key of the diagnostic entry produced on failure.
    pub error_key: Cow<'static, str>,
    /// Mask used by `Obfuscate` directives with an empty replacement.
    pub default_mask: Cow<'static, str>,
    /// Deepest nested message the walker enters.
    pub max_depth: usize,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            error_key: Cow::Borrowed(DEFAULT_ERROR_KEY),
            default_mask: Cow::Borrowed(DEFAULT_MASK),
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl ExtractOptions {
    #[must_use]
    pub fn with_error_key(mut self, key: impl Into<Cow<'static, str>>) -> Self {
        self.error_key = key.into();
        self
    }

    #[must_use]
    pub fn with_default_mask(mut self, mask: impl Into<Cow<'static, str>>) -> Self {
        self.default_mask = mask.into();
        self
    }

    #[must_use]
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let options = ExtractOptions::default();
        assert_eq!(options.error_key, "_xxx_tags_extracting_error");
        assert_eq!(options.default_mask, "*****");
        assert_eq!(options.max_depth, 64);
    }

    #[test]
    fn builders_override_fields() {
        let options = ExtractOptions::default()
            .with_error_key("_err")
            .with_default_mask("###")
            .with_max_depth(3);
        assert_eq!(options.error_key, "_err");
        assert_eq!(options.default_mask, "###");
        assert_eq!(options.max_depth, 3);
    }

    #[cfg(feature = "json")]
    #[test]
    fn partial_config_uses_defaults() {
        let options: ExtractOptions =
            serde_json::from_str(r#"{"max_depth": 8}"#).expect("valid options");
        assert_eq!(options.max_depth, 8);
        assert_eq!(options.error_key, DEFAULT_ERROR_KEY);
    }
}
