//! Derive macro for `logtags`.
//!
//! This crate generates the field listing behind `#[derive(Message)]`. It:
//! - reads `#[tags(...)]` field attributes
//! - emits `logtags::Message` and `logtags::FieldValue` implementations
//!
//! It does **not** render or trim values. That happens at runtime in the main
//! `logtags` crate.

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

#[allow(unused_extern_crates)]
extern crate proc_macro;

use proc_macro_crate::{FoundCrate, crate_name};
use quote::{format_ident, quote};
use syn::{Data, DeriveInput, Result, parse_macro_input};

mod derive_struct;
mod generics;
mod strategy;
mod types;
use derive_struct::derive_struct;
use strategy::reject_container_attrs;

/// Derives `logtags::Message` (and `logtags::FieldValue`) for structs.
///
/// The generated `fields()` lists every field in declaration order, skipping
/// absent values (`None`, empty collections), `PhantomData` fields and fields
/// marked `#[tags(skip)]`. Field types must implement `logtags::FieldValue`;
/// nested structs do so by deriving `Message` themselves.
///
/// # Field Attributes
///
/// At most one display directive per field:
///
/// - **No annotation**: the value is shown in full.
/// - `#[tags(hide)]`: the field produces no tags.
/// - `#[tags(obfuscate)]` / `#[tags(obfuscate = "mask")]`: one
///   `"(<kind>) <mask>"` entry; the value is never read.
/// - `#[tags(trim_head = N)]`: keeps the last `N` characters or list elements.
/// - `#[tags(trim_tail = N)]`: keeps the first `N` characters or list elements.
/// - `#[tags(trim_middle(head = H, tail = T))]`: keeps both ends.
///
/// Other options:
///
/// - `#[tags(rename = "name")]`: uses `name` as the field's path segment.
/// - `#[tags(skip)]`: leaves the field out entirely. Use this for types
///   without a `FieldValue` implementation.
///
/// Enums and unions are rejected at compile time.
#[proc_macro_derive(Message, attributes(tags))]
pub fn derive_message(input: proc_macro::TokenStream) -> proc_macro::TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    match expand(input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.into_compile_error().into(),
    }
}

fn expand(input: DeriveInput) -> Result<proc_macro2::TokenStream> {
    let DeriveInput {
        ident,
        generics,
        data,
        attrs,
        ..
    } = input;

    reject_container_attrs(&attrs)?;

    match &data {
        Data::Struct(data) => derive_struct(&ident, data, &generics),
        Data::Enum(data) => Err(syn::Error::new(
            data.enum_token.span,
            "`Message` cannot be derived for enums; derive it on a struct, \
             or implement `logtags::FieldValue` for the enum",
        )),
        Data::Union(data) => Err(syn::Error::new(
            data.union_token.span,
            "`Message` cannot be derived for unions",
        )),
    }
}

/// Returns the token stream to reference the logtags crate root.
///
/// Handles crate renaming (e.g., `tags = { package = "logtags", ... }`).
fn crate_root() -> proc_macro2::TokenStream {
    match crate_name("logtags") {
        // The crate aliases itself with `extern crate self as logtags`, so the
        // absolute path also resolves in its own doctests and integration tests.
        Ok(FoundCrate::Itself) => quote! { ::logtags },
        Ok(FoundCrate::Name(name)) => {
            let ident = format_ident!("{}", name);
            quote! { ::#ident }
        }
        Err(_) => quote! { ::logtags },
    }
}
