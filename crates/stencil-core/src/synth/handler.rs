//! Handler plumbing synthesis.
//!
//! For `#[handler] struct Thing { pub(crate) name: String, pub(crate) count: i32 }`
//! the artifact declares a `ThingBase` trait with one `handle_<member>` method
//! per member for hand-written code to implement, and adds `Thing::new` and
//! `Thing::handle` on top of it.

use crate::error::GenerateResult;
use crate::model::{GeneratedArtifact, HandlerDescription};
use crate::naming::{ident, to_snake_case};
use crate::synth::{parse_type, render};
use quote::{format_ident, quote};

/// Artifact id for one handler.
pub fn artifact_id(handler: &HandlerDescription) -> String {
    format!("{}_handler.generated.rs", to_snake_case(&handler.class_name))
}

/// Emit the base trait and the inherent constructor and `handle` method.
///
/// `handle` joins each member's result followed by `;`, separated by single
/// spaces: `"hello; aaa;"`.
pub fn synthesize_handler(handler: &HandlerDescription) -> GenerateResult<GeneratedArtifact> {
    let context = &handler.type_path;
    let self_ty = parse_type(&handler.type_path, context)?;
    let base = format_ident!("{}Base", handler.class_name);

    let mut fields = Vec::with_capacity(handler.members.len());
    let mut types = Vec::with_capacity(handler.members.len());
    for member in &handler.members {
        fields.push(ident(&member.label, context)?);
        types.push(parse_type(&member.type_name, context)?);
    }

    let labels: Vec<&str> = handler.members.iter().map(|m| m.label.as_str()).collect();
    let handlers: Vec<_> = labels.iter().map(|l| format_ident!("handle_{}", l)).collect();
    let values: Vec<_> = labels.iter().map(|l| format_ident!("value_{}", l)).collect();
    let handled: Vec<_> = labels.iter().map(|l| format_ident!("handled_{}", l)).collect();

    let template = labels
        .iter()
        .map(|l| format!("{{handled_{l}}};"))
        .collect::<Vec<_>>()
        .join(" ");

    let fill = handler
        .fills_remaining
        .then(|| quote! { ..::core::default::Default::default() });

    let tokens = quote! {
        #[allow(clippy::ptr_arg)]
        pub trait #base {
            #(fn #handlers(&self, value: &#types) -> ::std::string::String;)*
        }

        impl #self_ty {
            #[allow(clippy::too_many_arguments)]
            pub fn new(#(#values: #types),*) -> Self {
                Self {
                    #(#fields: #values,)*
                    #fill
                }
            }

            pub fn handle(&self) -> ::std::string::String {
                #(let #handled = <Self as #base>::#handlers(self, &self.#fields);)*
                ::std::format!(#template)
            }
        }
    };

    render(&artifact_id(handler), tokens)
}
