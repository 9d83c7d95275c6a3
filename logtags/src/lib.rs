//! Flat log tags from structured messages, with per-field display policies.
//!
//! Services log a request or response as a flat set of `path -> text` tags.
//! Each field of a message carries a display directive saying whether and how
//! its value may appear in logs: shown in full, hidden, masked, or trimmed to
//! a few leading or trailing characters or list elements.
//!
//! What this crate does:
//! - walks any [`Message`] (derived structs, or `prost_reflect::DynamicMessage`
//!   behind the `prost-reflect` feature) and flattens it into [`Tags`]
//! - applies the [`DisplayDirective`] declared on every field
//! - contains failures: extraction never panics and never returns an error to
//!   the caller of [`extract_tags`]
//! - merges message tags with RPC transport fields ([`CallFields`])
//!
//! What it does not do:
//! - configure a logger or perform I/O
//! - decide which fields are sensitive
//!
//! ```
//! use logtags::{Message, extract_tags};
//!
//! #[derive(Message)]
//! struct Charge {
//!     #[tags(trim_head = 4)]
//!     card: String,
//!     #[tags(trim_tail = 2)]
//!     items: Vec<String>,
//!     #[tags(obfuscate)]
//!     cvc: String,
//!     amount: u64,
//! }
//!
//! let charge = Charge {
//!     card: "4111111111111111".into(),
//!     items: vec!["a".into(), "b".into(), "c".into()],
//!     cvc: "123".into(),
//!     amount: 1250,
//! };
//!
//! let tags = extract_tags(&charge).unwrap();
//! assert_eq!(tags.get("card"), Some("<...>1111"));
//! assert_eq!(tags.get("items.[1]"), Some("b"));
//! assert_eq!(tags.get("items.[2]"), None);
//! assert_eq!(tags.get("cvc"), Some("(string) *****"));
//! assert_eq!(tags.get("amount"), Some("1250"));
//! ```
//!
//! The `Message` derive macro lives in `logtags-derive` and is re-exported
//! from this crate.

// <https://doc.rust-lang.org/rustc/lints/listing/allowed-by-default.html>
#![warn(
    anonymous_parameters,
    bare_trait_objects,
    elided_lifetimes_in_paths,
    missing_copy_implementations,
    rust_2018_idioms,
    trivial_casts,
    trivial_numeric_casts,
    unreachable_pub,
    unsafe_code,
    unused_extern_crates,
    unused_import_braces
)]
// <https://rust-lang.github.io/rust-clippy/stable>
#![warn(
    clippy::all,
    clippy::cargo,
    clippy::dbg_macro,
    clippy::float_cmp_const,
    clippy::get_unwrap,
    clippy::mem_forget,
    clippy::nursery,
    clippy::pedantic,
    clippy::todo,
    clippy::unwrap_used,
    clippy::uninlined_format_args
)]
// Allow some clippy lints
#![allow(
    clippy::default_trait_access,
    clippy::doc_markdown,
    clippy::if_not_else,
    clippy::module_name_repetitions,
    clippy::multiple_crate_versions,
    clippy::must_use_candidate,
    clippy::needless_pass_by_value,
    clippy::needless_ifs,
    clippy::use_self,
    clippy::cargo_common_metadata,
    clippy::missing_errors_doc,
    clippy::enum_glob_use,
    clippy::struct_excessive_bools,
    clippy::missing_const_for_fn,
    clippy::redundant_pub_crate,
    clippy::result_large_err,
    clippy::future_not_send,
    clippy::option_if_let_else,
    clippy::from_over_into,
    clippy::manual_inspect
)]
// Allow some lints while testing
#![cfg_attr(test, allow(clippy::non_ascii_literal, clippy::unwrap_used))]

#[cfg(feature = "derive")]
pub use logtags_derive::Message;

#[allow(unused_extern_crates)]
extern crate self as logtags;

// Module declarations
pub mod directive;
pub mod extract;
mod fields;
#[cfg(feature = "json")]
mod json;
#[cfg(feature = "prost-reflect")]
pub mod protobuf;
pub mod reflect;
#[cfg(feature = "slog")]
pub mod slog;
mod tags;
pub mod tracing;

// Re-exports from directive module
pub use directive::{
    DEFAULT_MASK, DisplayDirective, DisplayMode, FieldLogging, TRIM_MARKER, TrimConfig,
};
// Re-exports from extract module
pub use extract::{
    DEFAULT_ERROR_KEY, ExtractError, ExtractOptions, MessageTagsExt, TagExtractor,
    UNSUPPORTED_FORMAT, extract_tags,
};
pub use fields::{CallFields, REQUEST_ID_METADATA, REQUEST_UID, RESPONSE_PREFIX};
// Re-exports from reflect module
pub use reflect::{
    ElementValue, FieldClass, FieldDescriptor, FieldShape, FieldValue, FieldView, Message,
    Timestamp, Value, ValueKind,
};
#[cfg(feature = "slog")]
pub use slog::SlogTagsExt;
pub use tags::Tags;
pub use tracing::TracingTagsExt;
