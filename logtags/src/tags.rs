//! The extraction result: a flat, ordered map from field path to text.

use std::{
    collections::{BTreeMap, btree_map},
    fmt,
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Flat tags extracted from a message.
///
/// Keys are field paths (`user.name`, `items.[2]`, `limits.[eu]`), values are
/// display strings. Iteration is ordered by key.
///
/// Insertion keeps the first value written for a key; later writes for the
/// same key are ignored.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Tags(BTreeMap<String, String>);

impl Tags {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the single-entry result reported when extraction fails.
    #[must_use]
    pub fn diagnostic(key: impl Into<String>, message: impl fmt::Display) -> Self {
        let mut tags = Self::new();
        tags.insert(
            key,
            format!("[UNEXPECTED] error when tags extracting: {message}"),
        );
        tags
    }

    /// Inserts a tag unless the key is already present.
    ///
    /// Returns `true` when the value was stored.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) -> bool {
        match self.0.entry(key.into()) {
            btree_map::Entry::Vacant(slot) => {
                slot.insert(value.into());
                true
            }
            btree_map::Entry::Occupied(_) => false,
        }
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// Merges `other` into `self`, keeping existing values on key collision.
    pub fn merge(&mut self, other: Self) {
        for (key, value) in other.0 {
            self.0.entry(key).or_insert(value);
        }
    }

    /// Returns a copy of the tags with every key prefixed by `prefix`.
    #[must_use]
    pub fn prefixed(self, prefix: &str) -> Self {
        Self(
            self.0
                .into_iter()
                .map(|(key, value)| (format!("{prefix}{key}"), value))
                .collect(),
        )
    }

    /// Converts an empty result into `None`.
    #[must_use]
    pub fn non_empty(self) -> Option<Self> {
        if self.is_empty() { None } else { Some(self) }
    }

    #[must_use]
    pub fn into_inner(self) -> BTreeMap<String, String> {
        self.0
    }
}

impl From<Tags> for BTreeMap<String, String> {
    fn from(tags: Tags) -> Self {
        tags.0
    }
}

impl<K, V> FromIterator<(K, V)> for Tags
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut tags = Self::new();
        tags.extend(iter);
        tags
    }
}

impl<K, V> Extend<(K, V)> for Tags
where
    K: Into<String>,
    V: Into<String>,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl IntoIterator for Tags {
    type Item = (String, String);
    type IntoIter = btree_map::IntoIter<String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Tags {
    type Item = (&'a String, &'a String);
    type IntoIter = btree_map::Iter<'a, String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Renders tags as space separated `key=value` pairs.
///
/// Values containing whitespace, quotes or `=` are quoted with `{:?}`.
impl fmt::Display for Tags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, (key, value)) in self.0.iter().enumerate() {
            if index > 0 {
                f.write_str(" ")?;
            }
            if needs_quoting(value) {
                write!(f, "{key}={value:?}")?;
            } else {
                write!(f, "{key}={value}")?;
            }
        }
        Ok(())
    }
}

fn needs_quoting(value: &str) -> bool {
    value.is_empty()
        || value
            .chars()
            .any(|c| c.is_whitespace() || c == '"' || c == '=' || c.is_control())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_write_wins() {
        let mut tags = Tags::new();
        assert!(tags.insert("id", "1"));
        assert!(!tags.insert("id", "2"));
        assert_eq!(tags.get("id"), Some("1"));
    }

    #[test]
    fn merge_keeps_existing_values() {
        let mut left: Tags = [("a", "1"), ("b", "2")].into_iter().collect();
        let right: Tags = [("b", "x"), ("c", "3")].into_iter().collect();
        left.merge(right);
        assert_eq!(
            left.iter().collect::<Vec<_>>(),
            vec![("a", "1"), ("b", "2"), ("c", "3")]
        );
    }

    #[test]
    fn prefixed_rewrites_every_key() {
        let tags: Tags = [("id", "7"), ("items.[0]", "x")].into_iter().collect();
        let tags = tags.prefixed("order.");
        assert_eq!(
            tags.keys().collect::<Vec<_>>(),
            vec!["order.id", "order.items.[0]"]
        );
    }

    #[test]
    fn empty_tags_become_none() {
        assert!(Tags::new().non_empty().is_none());
        let tags: Tags = [("a", "b")].into_iter().collect();
        assert!(tags.non_empty().is_some());
    }

    #[test]
    fn diagnostic_has_single_entry() {
        let tags = Tags::diagnostic("_err", "boom");
        assert_eq!(tags.len(), 1);
        assert_eq!(
            tags.get("_err"),
            Some("[UNEXPECTED] error when tags extracting: boom")
        );
    }

    #[test]
    fn display_is_logfmt_like() {
        let tags: Tags = [("b", "two words"), ("a", "1"), ("c", "")]
            .into_iter()
            .collect();
        assert_eq!(tags.to_string(), r#"a=1 b="two words" c="""#);
    }
}
