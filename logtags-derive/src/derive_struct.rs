//! Struct-specific `Message` derivation.
//!
//! Every listed field becomes one `FieldView::of(name, directive, &self.field)`
//! call in the generated `fields()` body; absent values are filtered at
//! runtime by the field type's `FieldValue` implementation. The derived type
//! is also an `ElementValue`, so it can sit in lists and maps.

use proc_macro2::{Ident, TokenStream};
use quote::{quote, quote_spanned};
use syn::{DataStruct, Index, Result, ext::IdentExt, spanned::Spanned};

use crate::{
    crate_root,
    generics::add_field_value_bounds,
    strategy::parse_field_options,
    types::is_phantom_data,
};

/// One field that appears in the generated `fields()` list.
struct ListedField<'a> {
    name: String,
    access: TokenStream,
    directive: TokenStream,
    ty: &'a syn::Type,
    span: proc_macro2::Span,
}

fn listed_fields<'a>(data: &'a DataStruct, root: &TokenStream) -> Result<Vec<ListedField<'a>>> {
    let mut listed = Vec::new();
    for (index, field) in data.fields.iter().enumerate() {
        let options = parse_field_options(&field.attrs)?;
        if options.skip || is_phantom_data(&field.ty) {
            continue;
        }

        let (default_name, access) = match &field.ident {
            Some(ident) => (ident.unraw().to_string(), quote! { #ident }),
            None => {
                let index = Index::from(index);
                (index.index.to_string(), quote! { #index })
            }
        };

        listed.push(ListedField {
            name: options.rename.unwrap_or(default_name),
            access,
            directive: options.directive.expand(root),
            ty: &field.ty,
            span: field.span(),
        });
    }
    Ok(listed)
}

pub(crate) fn derive_struct(
    name: &Ident,
    data: &DataStruct,
    generics: &syn::Generics,
) -> Result<TokenStream> {
    let root = crate_root();
    let fields = listed_fields(data, &root)?;

    let field_value_path = quote! { #root::FieldValue };
    let field_types: Vec<&syn::Type> = fields.iter().map(|field| field.ty).collect();
    let generics = add_field_value_bounds(generics.clone(), &field_types, &field_value_path);
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    let capacity = fields.len();
    let pushes = fields.iter().map(|field| {
        let ListedField {
            name,
            access,
            directive,
            span,
            ..
        } = field;
        quote_spanned! { *span =>
            if let ::core::option::Option::Some(view) =
                #root::FieldView::of(#name, #directive, &self.#access)
            {
                fields.push(view);
            }
        }
    });

    Ok(quote! {
        impl #impl_generics #root::Message for #name #ty_generics #where_clause {
            fn fields(&self) -> ::std::vec::Vec<#root::FieldView<'_>> {
                #[allow(unused_mut)]
                let mut fields = ::std::vec::Vec::with_capacity(#capacity);
                #(#pushes)*
                fields
            }
        }

        impl #impl_generics #root::FieldValue for #name #ty_generics #where_clause {
            const KIND: #root::ValueKind = #root::ValueKind::Message;

            fn field_value(&self) -> ::core::option::Option<#root::Value<'_>> {
                ::core::option::Option::Some(#root::Value::Message(self))
            }
        }

        impl #impl_generics #root::ElementValue for #name #ty_generics #where_clause {
            fn element_value(&self) -> #root::Value<'_> {
                #root::Value::Message(self)
            }
        }
    })
}
