//! Parsing of `#[tags(...)]` field attributes.
//!
//! This module maps attribute syntax to a display directive, an optional
//! rename and the skip flag, and produces spanned errors for invalid forms.

use proc_macro2::{Span, TokenStream};
use quote::quote;
use syn::{Attribute, LitInt, LitStr, Result, meta::ParseNestedMeta, spanned::Spanned};

/// Display directive requested by a field attribute.
///
/// | Attribute                                  | Directive                  |
/// |--------------------------------------------|----------------------------|
/// | None                                       | `Show`                     |
/// | `#[tags(hide)]`                            | `Hide`                     |
/// | `#[tags(obfuscate)]`                       | `Obfuscate` (default mask) |
/// | `#[tags(obfuscate = "mask")]`              | `Obfuscate { "mask" }`     |
/// | `#[tags(trim_head = N)]`                   | `TrimHead { tail_chars }`  |
/// | `#[tags(trim_tail = N)]`                   | `TrimTail { head_chars }`  |
/// | `#[tags(trim_middle(head = H, tail = T))]` | `TrimMiddle`               |
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum Directive {
    Show,
    Hide,
    Obfuscate(Option<String>),
    TrimHead(usize),
    TrimTail(usize),
    TrimMiddle { head: usize, tail: usize },
}

impl Directive {
    /// Expression constructing the runtime `DisplayDirective`.
    pub(crate) fn expand(&self, root: &TokenStream) -> TokenStream {
        match self {
            Self::Show => quote! { #root::DisplayDirective::Show },
            Self::Hide => quote! { #root::DisplayDirective::Hide },
            Self::Obfuscate(None) => quote! { #root::DisplayDirective::obfuscate() },
            Self::Obfuscate(Some(mask)) => {
                quote! { #root::DisplayDirective::obfuscate_with(#mask) }
            }
            Self::TrimHead(tail) => {
                quote! { #root::DisplayDirective::TrimHead { tail_chars: #tail } }
            }
            Self::TrimTail(head) => {
                quote! { #root::DisplayDirective::TrimTail { head_chars: #head } }
            }
            Self::TrimMiddle { head, tail } => quote! {
                #root::DisplayDirective::TrimMiddle { head_chars: #head, tail_chars: #tail }
            },
        }
    }
}

/// Everything `#[tags(...)]` says about one field.
#[derive(Clone, Debug)]
pub(crate) struct FieldOptions {
    pub(crate) directive: Directive,
    pub(crate) rename: Option<String>,
    pub(crate) skip: bool,
}

#[derive(Default)]
struct Builder {
    directive: Option<(Directive, Span)>,
    rename: Option<String>,
    skip: Option<Span>,
}

impl Builder {
    fn set_directive(&mut self, next: Directive, span: Span) -> Result<()> {
        if self.directive.is_some() {
            return Err(syn::Error::new(
                span,
                "multiple display directives on the same field; use exactly one of \
                 hide, obfuscate, trim_head, trim_tail, trim_middle",
            ));
        }
        self.directive = Some((next, span));
        Ok(())
    }

    fn finish(self) -> Result<FieldOptions> {
        if let Some(span) = self.skip {
            if self.directive.is_some() || self.rename.is_some() {
                return Err(syn::Error::new(
                    span,
                    "#[tags(skip)] cannot be combined with other options",
                ));
            }
        }
        Ok(FieldOptions {
            directive: self
                .directive
                .map_or(Directive::Show, |(directive, _)| directive),
            rename: self.rename,
            skip: self.skip.is_some(),
        })
    }
}

fn parse_count(meta: &ParseNestedMeta<'_>) -> Result<usize> {
    let lit: LitInt = meta.value()?.parse()?;
    lit.base10_parse::<usize>()
}

fn parse_trim_middle(meta: &ParseNestedMeta<'_>) -> Result<Directive> {
    let mut head = None;
    let mut tail = None;
    meta.parse_nested_meta(|inner| {
        if inner.path.is_ident("head") {
            head = Some(parse_count(&inner)?);
            Ok(())
        } else if inner.path.is_ident("tail") {
            tail = Some(parse_count(&inner)?);
            Ok(())
        } else {
            Err(inner.error("expected `head = N` or `tail = N`"))
        }
    })?;
    if head.is_none() && tail.is_none() {
        return Err(meta.error("trim_middle needs `head = N`, `tail = N`, or both"));
    }
    Ok(Directive::TrimMiddle {
        head: head.unwrap_or(0),
        tail: tail.unwrap_or(0),
    })
}

fn parse_entry(meta: &ParseNestedMeta<'_>, builder: &mut Builder) -> Result<()> {
    let span = meta.path.span();
    if meta.path.is_ident("hide") {
        builder.set_directive(Directive::Hide, span)
    } else if meta.path.is_ident("obfuscate") {
        let mask = if meta.input.peek(syn::Token![=]) {
            let lit: LitStr = meta.value()?.parse()?;
            Some(lit.value())
        } else {
            None
        };
        builder.set_directive(Directive::Obfuscate(mask), span)
    } else if meta.path.is_ident("trim_head") {
        let count = parse_count(meta)?;
        builder.set_directive(Directive::TrimHead(count), span)
    } else if meta.path.is_ident("trim_tail") {
        let count = parse_count(meta)?;
        builder.set_directive(Directive::TrimTail(count), span)
    } else if meta.path.is_ident("trim_middle") {
        let directive = parse_trim_middle(meta)?;
        builder.set_directive(directive, span)
    } else if meta.path.is_ident("rename") {
        if builder.rename.is_some() {
            return Err(meta.error("duplicate `rename`"));
        }
        let lit: LitStr = meta.value()?.parse()?;
        if lit.value().is_empty() {
            return Err(syn::Error::new(lit.span(), "`rename` cannot be empty"));
        }
        builder.rename = Some(lit.value());
        Ok(())
    } else if meta.path.is_ident("skip") {
        builder.skip = Some(span);
        Ok(())
    } else {
        Err(meta.error(
            "unknown tags option; expected one of hide, obfuscate, trim_head, \
             trim_tail, trim_middle, rename, skip",
        ))
    }
}

pub(crate) fn parse_field_options(attrs: &[Attribute]) -> Result<FieldOptions> {
    let mut builder = Builder::default();
    for attr in attrs {
        if !attr.path().is_ident("tags") {
            continue;
        }
        if let syn::Meta::Path(_) = &attr.meta {
            return Err(syn::Error::new(
                attr.span(),
                "expected #[tags(...)] with at least one option",
            ));
        }
        attr.parse_nested_meta(|meta| parse_entry(&meta, &mut builder))?;
    }
    builder.finish()
}

/// Rejects `#[tags(...)]` on the type itself.
pub(crate) fn reject_container_attrs(attrs: &[Attribute]) -> Result<()> {
    match attrs.iter().find(|attr| attr.path().is_ident("tags")) {
        Some(attr) => Err(syn::Error::new(
            attr.span(),
            "#[tags(...)] is a field attribute and cannot be placed on the type",
        )),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use quote::quote;
    use syn::DeriveInput;

    use super::*;

    fn parse_attrs(tokens: TokenStream) -> Vec<Attribute> {
        let input: DeriveInput = syn::parse2(quote! {
            #tokens
            struct Dummy;
        })
        .expect("should parse as DeriveInput");
        input.attrs
    }

    fn parse(tokens: TokenStream) -> Result<FieldOptions> {
        parse_field_options(&parse_attrs(tokens))
    }

    #[test]
    fn no_attribute_shows() {
        let options = parse(quote! {}).unwrap();
        assert_eq!(options.directive, Directive::Show);
        assert!(options.rename.is_none());
        assert!(!options.skip);
    }

    #[test]
    fn hide_and_obfuscate() {
        assert_eq!(parse(quote! { #[tags(hide)] }).unwrap().directive, Directive::Hide);
        assert_eq!(
            parse(quote! { #[tags(obfuscate)] }).unwrap().directive,
            Directive::Obfuscate(None)
        );
        assert_eq!(
            parse(quote! { #[tags(obfuscate = "[masked]")] })
                .unwrap()
                .directive,
            Directive::Obfuscate(Some("[masked]".into()))
        );
    }

    #[test]
    fn trim_counts() {
        assert_eq!(
            parse(quote! { #[tags(trim_head = 4)] }).unwrap().directive,
            Directive::TrimHead(4)
        );
        assert_eq!(
            parse(quote! { #[tags(trim_tail = 2)] }).unwrap().directive,
            Directive::TrimTail(2)
        );
        assert_eq!(
            parse(quote! { #[tags(trim_middle(head = 3, tail = 5))] })
                .unwrap()
                .directive,
            Directive::TrimMiddle { head: 3, tail: 5 }
        );
        assert_eq!(
            parse(quote! { #[tags(trim_middle(tail = 5))] })
                .unwrap()
                .directive,
            Directive::TrimMiddle { head: 0, tail: 5 }
        );
    }

    #[test]
    fn rename_combines_with_a_directive() {
        let options = parse(quote! { #[tags(rename = "user.id", hide)] }).unwrap();
        assert_eq!(options.rename.as_deref(), Some("user.id"));
        assert_eq!(options.directive, Directive::Hide);
    }

    #[test]
    fn directives_across_attributes_conflict() {
        let err = parse(quote! {
            #[tags(hide)]
            #[tags(obfuscate)]
        })
        .unwrap_err();
        assert!(err.to_string().contains("multiple display directives"));
    }

    #[test]
    fn skip_rejects_other_options() {
        assert!(parse(quote! { #[tags(skip)] }).unwrap().skip);
        let err = parse(quote! { #[tags(skip, hide)] }).unwrap_err();
        assert!(err.to_string().contains("cannot be combined"));
    }

    #[test]
    fn malformed_options_error() {
        assert!(parse(quote! { #[tags] }).is_err());
        assert!(parse(quote! { #[tags(trim_head = "4")] }).is_err());
        assert!(parse(quote! { #[tags(trim_head = -1)] }).is_err());
        assert!(parse(quote! { #[tags(trim_middle())] }).is_err());
        assert!(parse(quote! { #[tags(trim_middle(body = 1))] }).is_err());
        assert!(parse(quote! { #[tags(rename = "")] }).is_err());
        let err = parse(quote! { #[tags(secret)] }).unwrap_err();
        assert!(err.to_string().contains("unknown tags option"));
    }

    #[test]
    fn other_attributes_ignored() {
        let options = parse(quote! {
            #[derive(Clone)]
            #[serde(skip)]
        })
        .unwrap();
        assert_eq!(options.directive, Directive::Show);
    }

    #[test]
    fn tokens_name_the_runtime_directive() {
        let root = quote! { ::logtags };
        let tokens = Directive::TrimTail(2).expand(&root).to_string();
        assert!(tokens.contains("TrimTail"));
        assert!(tokens.contains("head_chars"));
    }
}
