//! stencil-macros - Marker attributes for the stencil generators
//!
//! This crate provides:
//! - `#[handler]` - Mark a struct for the handler generator
//!
//! The attribute itself expands to the struct unchanged. The handler
//! generator reads marked structs from source, so the macro only rejects
//! shapes that generated code cannot extend, reporting them at the marked
//! struct instead of inside a generated file.

use proc_macro::TokenStream;
use quote::quote;
use syn::parse_macro_input;
use syn::spanned::Spanned;

/// Attribute for marking a struct as a handler
///
/// Every `pub(crate)` (or otherwise restricted) field becomes a handled
/// member: the generator emits a `<Name>Base` trait with one
/// `handle_<field>` method per member, plus `<Name>::new` and
/// `<Name>::handle` built on top of it.
///
/// # Example
///
/// ```ignore
/// use stencil::handler;
///
/// #[handler]
/// pub struct Thing {
///     pub(crate) name: String,
///     id: uuid::Uuid,
/// }
///
/// impl ThingBase for Thing {
///     fn handle_name(&self, value: &String) -> String {
///         value.clone()
///     }
/// }
/// ```
#[proc_macro_attribute]
pub fn handler(attr: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as syn::ItemStruct);

    let expanded = match check_handler(attr.into(), &input) {
        Ok(()) => quote! { #input },
        Err(e) => {
            let error = e.to_compile_error();
            quote! {
                #input
                #error
            }
        }
    };

    TokenStream::from(expanded)
}

/// Reject handler structs the generator cannot extend
fn check_handler(attr: proc_macro2::TokenStream, input: &syn::ItemStruct) -> syn::Result<()> {
    if !attr.is_empty() {
        return Err(syn::Error::new(
            attr.span(),
            "#[handler] does not take arguments",
        ));
    }

    if !input.generics.params.is_empty() {
        return Err(syn::Error::new(
            input.generics.span(),
            "#[handler] structs cannot be generic",
        ));
    }

    match &input.fields {
        syn::Fields::Named(_) => Ok(()),
        other => Err(syn::Error::new(
            other.span(),
            "#[handler] structs need named fields",
        )),
    }
}

#[cfg(test)]
mod lib_tests;
