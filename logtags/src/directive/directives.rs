//! Display directives and the schema annotation they are declared with.
//!
//! This module provides:
//!
//! - **The directive**: [`DisplayDirective`], the resolved per-field policy the
//!   extraction engine dispatches on.
//!
//! - **The annotation**: [`FieldLogging`], the record a schema attaches to a
//!   field (`display`, `replacement`, `head_chars`, `tail_chars`), mirroring
//!   the `logtags.options.FieldLogging` protobuf message.
//!
//! # Example
//!
//! ```rust
//! use logtags::{DisplayDirective, DisplayMode, FieldLogging};
//!
//! let annotation = FieldLogging {
//!     display: DisplayMode::TrimHead,
//!     tail_chars: 4,
//!     ..FieldLogging::default()
//! };
//! assert_eq!(annotation.directive(), DisplayDirective::TrimHead { tail_chars: 4 });
//! ```

use std::borrow::Cow;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Mask used by [`DisplayDirective::Obfuscate`] when no replacement is given
/// and the extractor is not configured with another one.
pub const DEFAULT_MASK: &str = "*****";

/// How a single field is rendered into tags.
///
/// Exactly one directive applies per field. Fields without a declared
/// directive use [`DisplayDirective::Show`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum DisplayDirective {
    /// Render the value, fanning out lists, maps and nested messages.
    #[default]
    Show,
    /// Render nothing.
    Hide,
    /// Render a single `"(<kind>) <replacement>"` entry without reading the value.
    ///
    /// An empty replacement falls back to the extractor's default mask
    /// ([`DEFAULT_MASK`] unless configured otherwise).
    Obfuscate {
        /// The mask text.
        replacement: Cow<'static, str>,
    },
    /// Keep only the trailing `tail_chars` characters or list elements.
    TrimHead {
        /// Number of trailing characters/elements to keep.
        tail_chars: usize,
    },
    /// Keep only the leading `head_chars` characters or list elements.
    TrimTail {
        /// Number of leading characters/elements to keep.
        head_chars: usize,
    },
    /// Keep the leading `head_chars` and trailing `tail_chars` characters or
    /// list elements.
    TrimMiddle {
        /// Number of leading characters/elements to keep.
        head_chars: usize,
        /// Number of trailing characters/elements to keep.
        tail_chars: usize,
    },
}

impl DisplayDirective {
    /// Constructs [`DisplayDirective::Obfuscate`] using the extractor's default mask.
    #[must_use]
    pub fn obfuscate() -> Self {
        Self::obfuscate_with("")
    }

    /// Constructs [`DisplayDirective::Obfuscate`] with a custom replacement.
    #[must_use]
    pub fn obfuscate_with<R>(replacement: R) -> Self
    where
        R: Into<Cow<'static, str>>,
    {
        Self::Obfuscate {
            replacement: replacement.into(),
        }
    }

    /// Returns the annotation mode this directive corresponds to.
    #[must_use]
    pub fn mode(&self) -> DisplayMode {
        match self {
            Self::Show => DisplayMode::Show,
            Self::Hide => DisplayMode::Hide,
            Self::Obfuscate { .. } => DisplayMode::Obfuscate,
            Self::TrimHead { .. } => DisplayMode::TrimHead,
            Self::TrimTail { .. } => DisplayMode::TrimTail,
            Self::TrimMiddle { .. } => DisplayMode::TrimMiddle,
        }
    }
}

/// The `display` enum of the [`FieldLogging`] annotation.
///
/// Discriminants match the protobuf enum numbers.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum DisplayMode {
    #[default]
    Show = 0,
    Hide = 1,
    Obfuscate = 2,
    TrimHead = 3,
    TrimTail = 4,
    TrimMiddle = 5,
}

impl DisplayMode {
    /// Maps a protobuf enum number onto a mode.
    ///
    /// Unknown numbers map to [`DisplayMode::Show`], the protobuf default.
    #[must_use]
    pub fn from_number(number: i32) -> Self {
        match number {
            1 => Self::Hide,
            2 => Self::Obfuscate,
            3 => Self::TrimHead,
            4 => Self::TrimTail,
            5 => Self::TrimMiddle,
            _ => Self::Show,
        }
    }
}

/// Per-field logging annotation as declared on a schema.
///
/// Only the parameters relevant to `display` are read; the others are ignored.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct FieldLogging {
    pub display: DisplayMode,
    pub replacement: String,
    pub head_chars: i64,
    pub tail_chars: i64,
}

impl FieldLogging {
    /// Resolves the annotation into a [`DisplayDirective`].
    ///
    /// Negative counts are treated as zero. An empty replacement is kept
    /// empty so the extractor's configured mask applies.
    #[must_use]
    pub fn directive(&self) -> DisplayDirective {
        match self.display {
            DisplayMode::Show => DisplayDirective::Show,
            DisplayMode::Hide => DisplayDirective::Hide,
            DisplayMode::Obfuscate => DisplayDirective::obfuscate_with(self.replacement.clone()),
            DisplayMode::TrimHead => DisplayDirective::TrimHead {
                tail_chars: count(self.tail_chars),
            },
            DisplayMode::TrimTail => DisplayDirective::TrimTail {
                head_chars: count(self.head_chars),
            },
            DisplayMode::TrimMiddle => DisplayDirective::TrimMiddle {
                head_chars: count(self.head_chars),
                tail_chars: count(self.tail_chars),
            },
        }
    }
}

impl From<&FieldLogging> for DisplayDirective {
    fn from(annotation: &FieldLogging) -> Self {
        annotation.directive()
    }
}

impl From<FieldLogging> for DisplayDirective {
    fn from(annotation: FieldLogging) -> Self {
        annotation.directive()
    }
}

fn count(value: i64) -> usize {
    if value <= 0 {
        0
    } else {
        usize::try_from(value).unwrap_or(usize::MAX)
    }
}
