//! Trimming arithmetic for string values.
//!
//! This module provides [`TrimConfig`], the pure string transformation behind
//! the `TrimHead`, `TrimTail` and `TrimMiddle` directives. It does not decide
//! whether a field is trimmable or what a zero count means; that belongs to
//! the policy functions in `crate::extract`.

use std::borrow::Cow;

/// Marker inserted where characters were cut out of a trimmed string.
pub const TRIM_MARKER: &str = "<...>";

/// Configuration that keeps leading and/or trailing characters visible and
/// replaces everything in between with [`TRIM_MARKER`].
///
/// The configuration operates on Unicode scalar values, so a cut never splits a
/// multi-byte sequence. If the kept spans cover the entire value, the value is
/// returned unchanged.
///
/// Use the constructor methods [`TrimConfig::head`], [`TrimConfig::tail`] and
/// [`TrimConfig::both`] to create instances.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TrimConfig {
    /// Number of leading characters to keep.
    head: usize,
    /// Number of trailing characters to keep.
    tail: usize,
}

impl TrimConfig {
    /// Keeps only the first `head` scalar values.
    #[must_use]
    pub fn head(head: usize) -> Self {
        Self { head, tail: 0 }
    }

    /// Keeps only the last `tail` scalar values.
    #[must_use]
    pub fn tail(tail: usize) -> Self {
        Self { head: 0, tail }
    }

    /// Keeps the first `head` and the last `tail` scalar values.
    #[must_use]
    pub fn both(head: usize, tail: usize) -> Self {
        Self { head, tail }
    }

    /// Returns `true` when a value of `len` scalar values is kept in full.
    #[must_use]
    pub fn keeps_all(&self, len: usize) -> bool {
        self.head.saturating_add(self.tail) >= len
    }

    /// Applies the configuration to `value`.
    ///
    /// This method is total: it never fails and never panics, whatever the
    /// counts or the input.
    #[must_use]
    pub fn apply_to<'a>(&self, value: &'a str) -> Cow<'a, str> {
        let total = value.chars().count();
        if self.keeps_all(total) {
            return Cow::Borrowed(value);
        }

        let head_end = byte_offset(value, self.head);
        let tail_start = byte_offset(value, total - self.tail);

        let mut trimmed =
            String::with_capacity(head_end + TRIM_MARKER.len() + (value.len() - tail_start));
        trimmed.push_str(&value[..head_end]);
        trimmed.push_str(TRIM_MARKER);
        trimmed.push_str(&value[tail_start..]);
        Cow::Owned(trimmed)
    }
}

/// Byte offset of the `index`-th scalar value, or the string length past the end.
fn byte_offset(value: &str, index: usize) -> usize {
    value
        .char_indices()
        .nth(index)
        .map_or(value.len(), |(offset, _)| offset)
}
