//! Template synthesis.
//!
//! Each generator kind builds a `proc_macro2::TokenStream` with `quote!`,
//! which [`render`] checks by parsing it as a `syn::File` and then prints with
//! `prettyplease`. A stream that does not parse never becomes an artifact.

pub mod api;
pub mod handler;
pub mod mapping;

use crate::error::{GenerateError, GenerateResult};
use crate::model::GeneratedArtifact;
use proc_macro2::TokenStream;

/// First line of every artifact.
pub const HEADER: &str = "// @generated by stencil. Do not edit.";

/// Validate `tokens` as a Rust file and render it under [`HEADER`].
pub fn render(artifact_id: &str, tokens: TokenStream) -> GenerateResult<GeneratedArtifact> {
    let file: syn::File = syn::parse2(tokens).map_err(|e| GenerateError::Malformed {
        artifact: artifact_id.to_string(),
        message: e.to_string(),
    })?;

    let body = prettyplease::unparse(&file);
    let text = if body.is_empty() {
        format!("{HEADER}\n")
    } else {
        format!("{HEADER}\n\n{body}")
    };

    Ok(GeneratedArtifact::new(artifact_id, text))
}

pub(crate) fn parse_type(type_name: &str, context: &str) -> GenerateResult<syn::Type> {
    syn::parse_str(type_name).map_err(|_| GenerateError::InvalidType {
        type_name: type_name.to_string(),
        context: context.to_string(),
    })
}

pub(crate) fn parse_path(path: &str, context: &str) -> GenerateResult<syn::Path> {
    syn::parse_str(path).map_err(|_| GenerateError::InvalidType {
        type_name: path.to_string(),
        context: context.to_string(),
    })
}
