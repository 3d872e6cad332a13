#![allow(non_snake_case)]

use super::*;
use syn::parse_quote;

// check_handler tests

#[test]
fn check_handler___named_fields___accepted() {
    let input: syn::ItemStruct = parse_quote! {
        pub struct Thing {
            pub(crate) name: String,
            id: u64,
        }
    };

    assert!(check_handler(proc_macro2::TokenStream::new(), &input).is_ok());
}

#[test]
fn check_handler___arguments___rejected() {
    let input: syn::ItemStruct = parse_quote! {
        pub struct Thing {
            pub(crate) name: String,
        }
    };

    let err = check_handler(quote! { verbose }, &input).unwrap_err();

    assert_eq!(err.to_string(), "#[handler] does not take arguments");
}

#[test]
fn check_handler___generic_struct___rejected() {
    let input: syn::ItemStruct = parse_quote! {
        pub struct Wrapper<T> {
            pub(crate) inner: T,
        }
    };

    let err = check_handler(proc_macro2::TokenStream::new(), &input).unwrap_err();

    assert_eq!(err.to_string(), "#[handler] structs cannot be generic");
}

#[test]
fn check_handler___tuple_struct___rejected() {
    let input: syn::ItemStruct = parse_quote! {
        pub struct Pair(pub(crate) i32, pub(crate) i32);
    };

    let err = check_handler(proc_macro2::TokenStream::new(), &input).unwrap_err();

    assert_eq!(err.to_string(), "#[handler] structs need named fields");
}

#[test]
fn check_handler___unit_struct___rejected() {
    let input: syn::ItemStruct = parse_quote! {
        pub struct Marker;
    };

    assert!(check_handler(proc_macro2::TokenStream::new(), &input).is_err());
}
