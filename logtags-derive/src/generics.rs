//! Generic type parameter handling and trait bound management.
//!
//! Bounds are added per field type rather than per parameter: a field of type
//! `Vec<T>` gets `Vec<T>: FieldValue` in the where clause, a field of type
//! `BTreeMap<K, V>` gets `BTreeMap<K, V>: FieldValue`. This keeps the bounds
//! exactly as strong as the generated `fields()` body needs, without forcing
//! map keys to implement `FieldValue`.
//!
//! ## PhantomData Handling
//!
//! `PhantomData<T>` fields are never listed as message fields, so they add no
//! bounds:
//!
//! ```ignore
//! #[derive(Message)]
//! struct TypedId<T> {
//!     id: String,
//!     _marker: PhantomData<T>,  // T needs no FieldValue impl
//! }
//! ```

use syn::{Ident, WherePredicate, parse_quote};

fn visit_type_param_bound(bound: &syn::TypeParamBound, params: &[Ident]) -> bool {
    match bound {
        syn::TypeParamBound::Trait(trait_bound) => visit_path(&trait_bound.path, params),
        _ => false,
    }
}

fn visit_path_arguments(args: &syn::PathArguments, params: &[Ident]) -> bool {
    match args {
        syn::PathArguments::AngleBracketed(args) => args.args.iter().any(|arg| match arg {
            syn::GenericArgument::Type(inner) => visit_type(inner, params),
            syn::GenericArgument::AssocType(assoc) => visit_type(&assoc.ty, params),
            syn::GenericArgument::Constraint(constraint) => constraint
                .bounds
                .iter()
                .any(|bound| visit_type_param_bound(bound, params)),
            _ => false,
        }),
        syn::PathArguments::Parenthesized(args) => {
            args.inputs.iter().any(|input| visit_type(input, params))
                || matches!(&args.output, syn::ReturnType::Type(_, output) if visit_type(output, params))
        }
        syn::PathArguments::None => false,
    }
}

fn visit_path(path: &syn::Path, params: &[Ident]) -> bool {
    path.segments.iter().any(|segment| {
        params.iter().any(|param| segment.ident == *param)
            || visit_path_arguments(&segment.arguments, params)
    })
}

fn visit_type(ty: &syn::Type, params: &[Ident]) -> bool {
    match ty {
        syn::Type::Path(type_path) => {
            type_path
                .qself
                .as_ref()
                .is_some_and(|qself| visit_type(&qself.ty, params))
                || visit_path(&type_path.path, params)
        }
        syn::Type::Reference(reference) => visit_type(&reference.elem, params),
        syn::Type::Ptr(pointer) => visit_type(&pointer.elem, params),
        syn::Type::Slice(slice) => visit_type(&slice.elem, params),
        syn::Type::Array(array) => visit_type(&array.elem, params),
        syn::Type::Tuple(tuple) => tuple.elems.iter().any(|elem| visit_type(elem, params)),
        syn::Type::Paren(paren) => visit_type(&paren.elem, params),
        syn::Type::Group(group) => visit_type(&group.elem, params),
        syn::Type::TraitObject(obj) => obj
            .bounds
            .iter()
            .any(|bound| visit_type_param_bound(bound, params)),
        syn::Type::ImplTrait(impl_trait) => impl_trait
            .bounds
            .iter()
            .any(|bound| visit_type_param_bound(bound, params)),
        _ => false,
    }
}

/// Returns `true` when `ty` mentions one of the type parameters of `generics`.
pub(crate) fn mentions_type_param(ty: &syn::Type, generics: &syn::Generics) -> bool {
    let params: Vec<Ident> = generics
        .type_params()
        .map(|param| param.ident.clone())
        .collect();
    !params.is_empty() && visit_type(ty, &params)
}

/// Adds `#ty: FieldValue` for every listed field type that depends on a
/// type parameter.
pub(crate) fn add_field_value_bounds(
    mut generics: syn::Generics,
    field_types: &[&syn::Type],
    field_value_path: &proc_macro2::TokenStream,
) -> syn::Generics {
    let predicates: Vec<WherePredicate> = field_types
        .iter()
        .filter(|ty| mentions_type_param(ty, &generics))
        .map(|ty| parse_quote!(#ty: #field_value_path))
        .collect();
    if !predicates.is_empty() {
        generics.make_where_clause().predicates.extend(predicates);
    }
    generics
}
