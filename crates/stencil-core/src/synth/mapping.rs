//! Mapping extension synthesis.
//!
//! All descriptors go into one artifact. Descriptors are grouped by source
//! namespace into `pub mod mapping_extensions_<namespace>`, and inside each
//! module by destination into one `MapTo<Dest>` trait implemented for every
//! source mapped to it:
//!
//! ```ignore
//! pub mod mapping_extensions_crate_models {
//!     pub trait MapToStuff {
//!         fn map_to_stuff(
//!             &self,
//!             additional_mappings: Option<&dyn Fn(&Self, &mut crate::models::Stuff)>,
//!         ) -> crate::models::Stuff;
//!     }
//!
//!     impl MapToStuff for crate::models::Thing { /* .. */ }
//! }
//! ```

use crate::error::{GenerateError, GenerateResult};
use crate::model::{GeneratedArtifact, MappingDescriptor, MemberAccess, MemberPair};
use crate::naming::{ident, namespace_slug, to_snake_case};
use crate::synth::{parse_type, render};
use proc_macro2::{Ident, TokenStream};
use quote::{format_ident, quote};

/// Artifact id of the mapping artifact.
pub const ARTIFACT: &str = "mappings.generated.rs";

/// The mapping artifact plus the descriptors that could not be emitted.
#[derive(Debug)]
pub struct MappingOutput {
    pub artifact: GeneratedArtifact,
    pub failures: Vec<GenerateError>,
}

struct Namespace<'a> {
    name: &'a str,
    module: Ident,
    targets: Vec<Target<'a>>,
}

struct Target<'a> {
    display: &'a str,
    dest_path: &'a str,
    dest: syn::Type,
    impls: Vec<TokenStream>,
}

impl Target<'_> {
    fn trait_ident(&self) -> Ident {
        format_ident!("MapTo{}", self.display)
    }

    fn method_ident(&self) -> Ident {
        format_ident!("map_to_{}", to_snake_case(self.display))
    }
}

/// Emit every descriptor into the mapping artifact.
///
/// The artifact is produced even when no descriptor survives. A descriptor
/// whose destination shares its display name with an earlier, different
/// destination from the same namespace is reported as
/// [`GenerateError::ConflictingMapping`] and left out. A descriptor whose
/// namespace flattens to a module name already taken by another namespace is
/// reported as [`GenerateError::ConflictingNamespace`].
pub fn synthesize_mappings(descriptors: &[MappingDescriptor]) -> GenerateResult<MappingOutput> {
    let mut namespaces: Vec<Namespace<'_>> = Vec::new();
    let mut failures = Vec::new();

    for descriptor in descriptors {
        if let Err(e) = place(&mut namespaces, descriptor) {
            failures.push(e);
        }
    }

    let modules = namespaces.iter().map(|ns| {
        let module = &ns.module;
        let targets = ns.targets.iter().map(|target| {
            let trait_ident = target.trait_ident();
            let method = target.method_ident();
            let dest = &target.dest;
            let impls = &target.impls;
            quote! {
                pub trait #trait_ident {
                    fn #method(
                        &self,
                        additional_mappings: ::core::option::Option<&dyn Fn(&Self, &mut #dest)>,
                    ) -> #dest;
                }

                #(#impls)*
            }
        });
        quote! {
            pub mod #module {
                #(#targets)*
            }
        }
    });

    let artifact = render(ARTIFACT, quote! { #(#modules)* })?;
    Ok(MappingOutput { artifact, failures })
}

fn place<'a>(
    namespaces: &mut Vec<Namespace<'a>>,
    descriptor: &'a MappingDescriptor,
) -> GenerateResult<()> {
    let context = format!(
        "{} -> {}",
        descriptor.source_type_name, descriptor.dest_type_name
    );
    let source = parse_type(&descriptor.source_type_name, &context)?;
    let dest = parse_type(&descriptor.dest_type_name, &context)?;
    ident(&descriptor.dest_display_name, &context)?;
    let module = ident(
        &format!(
            "mapping_extensions_{}",
            namespace_slug(&descriptor.source_namespace)
        ),
        &context,
    )?;
    let assignments = descriptor
        .member_pairs
        .iter()
        .map(|pair| assignment(pair, &context))
        .collect::<GenerateResult<Vec<_>>>()?;

    let index = match namespaces
        .iter()
        .position(|ns| ns.name == descriptor.source_namespace)
    {
        Some(index) => index,
        None => {
            if let Some(taken) = namespaces.iter().find(|ns| ns.module == module) {
                return Err(GenerateError::ConflictingNamespace {
                    namespace: descriptor.source_namespace.clone(),
                    existing: taken.name.to_string(),
                    module: module.to_string(),
                });
            }
            namespaces.push(Namespace {
                name: &descriptor.source_namespace,
                module,
                targets: Vec::new(),
            });
            namespaces.len() - 1
        }
    };
    let namespace = &mut namespaces[index];

    let target_index = match namespace
        .targets
        .iter()
        .position(|t| t.display == descriptor.dest_display_name)
    {
        Some(i) if namespace.targets[i].dest_path != descriptor.dest_type_name => {
            return Err(GenerateError::ConflictingMapping {
                namespace: descriptor.source_namespace.clone(),
                display: descriptor.dest_display_name.clone(),
                dest: descriptor.dest_type_name.clone(),
                existing: namespace.targets[i].dest_path.to_string(),
            });
        }
        Some(i) => i,
        None => {
            namespace.targets.push(Target {
                display: &descriptor.dest_display_name,
                dest_path: &descriptor.dest_type_name,
                dest,
                impls: Vec::new(),
            });
            namespace.targets.len() - 1
        }
    };
    let target = &mut namespace.targets[target_index];

    let trait_ident = target.trait_ident();
    let method = target.method_ident();
    let dest = &target.dest;
    let body = quote! {
        impl #trait_ident for #source {
            fn #method(
                &self,
                additional_mappings: ::core::option::Option<&dyn Fn(&Self, &mut #dest)>,
            ) -> #dest {
                let mut mapped = <#dest as ::core::default::Default>::default();
                #(#assignments)*
                if let ::core::option::Option::Some(additional_mappings) = additional_mappings {
                    additional_mappings(self, &mut mapped);
                }
                mapped
            }
        }
    };
    target.impls.push(body);

    Ok(())
}

fn assignment(pair: &MemberPair, context: &str) -> GenerateResult<TokenStream> {
    let source = ident(&pair.source, context)?;
    let value = match pair.source_access {
        MemberAccess::Getter => quote! { self.#source() },
        MemberAccess::Field | MemberAccess::Setter => {
            quote! { ::core::clone::Clone::clone(&self.#source) }
        }
    };

    let dest = ident(&pair.dest, context)?;
    Ok(match pair.dest_access {
        MemberAccess::Setter => {
            let setter = format_ident!("set_{}", pair.dest);
            quote! { mapped.#setter(#value); }
        }
        MemberAccess::Field | MemberAccess::Getter => quote! { mapped.#dest = #value; },
    })
}

#[cfg(test)]
#[path = "mapping/mapping_tests.rs"]
mod mapping_tests;
