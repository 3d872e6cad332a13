//! Repository, model and controller synthesis for schema entities.
//!
//! For an entity `User { Id: int (key), Name: string }` the artifact
//! `user_api.generated.rs` contains:
//!
//! ```ignore
//! #[derive(Default)]
//! pub struct UserRepository {
//!     entries: ::stencil::KeyedStore<i32, UserModel>,
//! }
//!
//! #[derive(Debug, Clone, PartialEq, Default)]
//! pub struct UserModel {
//!     pub id: i32,
//!     pub name: String,
//! }
//!
//! pub struct UserController {
//!     repository: ::std::sync::Arc<UserRepository>,
//! }
//! ```
//!
//! plus `get`, `get_all`, `post`, `patch` and `delete` on the controller.
//! Composite keys become tuples in key declaration order.

use crate::config::GeneratorConfig;
use crate::error::{GenerateError, GenerateResult};
use crate::model::{EntityDescription, GeneratedArtifact};
use crate::naming::{ident, to_snake_case};
use crate::synth::{parse_type, render};
use proc_macro2::Ident;
use quote::{format_ident, quote};
use std::collections::HashSet;

/// Artifact id of the bootstrap artifact.
pub const BOOTSTRAP_ARTIFACT: &str = "repositories.generated.rs";

/// Artifact id for one entity.
pub fn artifact_id(entity: &EntityDescription) -> String {
    format!("{}_api.generated.rs", to_snake_case(&entity.name))
}

struct Field {
    ident: Ident,
    ty: syn::Type,
    is_key: bool,
}

fn fields(entity: &EntityDescription, config: &GeneratorConfig) -> GenerateResult<Vec<Field>> {
    let mut seen = HashSet::new();

    entity
        .members
        .iter()
        .map(|member| {
            let snake = to_snake_case(&member.name);
            if !seen.insert(snake.clone()) {
                return Err(GenerateError::DuplicateMember {
                    entity: entity.name.clone(),
                    member: member.name.clone(),
                });
            }
            Ok(Field {
                ident: ident(&snake, &entity.name)?,
                ty: parse_type(config.api.resolve_type_name(&member.type_name), &entity.name)?,
                is_key: member.is_key,
            })
        })
        .collect()
}

/// Emit the repository, model and controller for one entity.
///
/// Fails with [`GenerateError::NoKeys`] when no member is a key.
pub fn synthesize_entity(
    entity: &EntityDescription,
    config: &GeneratorConfig,
) -> GenerateResult<GeneratedArtifact> {
    entity.validate()?;
    let fields = fields(entity, config)?;
    let (keys, values): (Vec<&Field>, Vec<&Field>) = fields.iter().partition(|f| f.is_key);
    if keys.is_empty() {
        return Err(GenerateError::NoKeys {
            entity: entity.name.clone(),
        });
    }

    let rt = config.runtime()?;
    let derives = config.api.derive_paths()?;
    let repository = format_ident!("{}Repository", entity.name);
    let model = format_ident!("{}Model", entity.name);
    let controller = format_ident!("{}Controller", entity.name);
    let route = format!("{}{}", config.api.route_prefix, to_snake_case(&entity.name));

    let key_idents: Vec<&Ident> = keys.iter().map(|f| &f.ident).collect();
    let key_types: Vec<&syn::Type> = keys.iter().map(|f| &f.ty).collect();
    let (key_type, param_key, model_key) = match (key_idents.as_slice(), key_types.as_slice()) {
        ([k], [ty]) => (
            quote! { #ty },
            quote! { #k },
            quote! { ::core::clone::Clone::clone(&model.#k) },
        ),
        _ => (
            quote! { ( #(#key_types),* ) },
            quote! { ( #(#key_idents),* ) },
            quote! { ( #(::core::clone::Clone::clone(&model.#key_idents)),* ) },
        ),
    };

    let field_idents = fields.iter().map(|f| &f.ident);
    let field_types = fields.iter().map(|f| &f.ty);
    let derive_attr = (!derives.is_empty()).then(|| quote! { #[derive(#(#derives),*)] });

    let value_idents: Vec<&Ident> = values.iter().map(|f| &f.ident).collect();
    let existing = if value_idents.is_empty() {
        format_ident!("_existing")
    } else {
        format_ident!("existing")
    };

    let tokens = quote! {
        #[derive(Default)]
        pub struct #repository {
            entries: #rt::KeyedStore<#key_type, #model>,
        }

        impl #repository {
            pub fn new() -> Self {
                Self::default()
            }
        }

        impl ::core::ops::Deref for #repository {
            type Target = #rt::KeyedStore<#key_type, #model>;

            fn deref(&self) -> &Self::Target {
                &self.entries
            }
        }

        #derive_attr
        pub struct #model {
            #(pub #field_idents: #field_types,)*
        }

        pub struct #controller {
            repository: ::std::sync::Arc<#repository>,
        }

        impl #controller {
            pub const ROUTE: &str = #route;

            pub fn new(repository: ::std::sync::Arc<#repository>) -> Self {
                Self { repository }
            }

            pub fn get(&self, #(#key_idents: #key_types),*) -> ::core::option::Option<#model> {
                self.repository.get(&#param_key)
            }

            pub fn get_all(&self) -> ::std::vec::Vec<#model> {
                self.repository.values()
            }

            pub fn post(&self, model: #model) -> #model {
                self.repository.insert(#model_key, ::core::clone::Clone::clone(&model));
                model
            }

            pub fn patch(&self, model: #model) -> ::core::result::Result<#model, #rt::NotFound> {
                self.repository
                    .update(&#model_key, |#existing| {
                        #(#existing.#value_idents = ::core::clone::Clone::clone(&model.#value_idents);)*
                    })
                    .ok_or(#rt::NotFound)
            }

            pub fn delete(&self, #(#key_idents: #key_types),*) {
                self.repository.remove(&#param_key);
            }
        }
    };

    render(&artifact_id(entity), tokens)
}

/// Emit `add_generated_repositories`, registering one repository per entity
/// in the given order.
pub fn synthesize_bootstrap(
    entities: &[&EntityDescription],
    config: &GeneratorConfig,
) -> GenerateResult<GeneratedArtifact> {
    let rt = config.runtime()?;
    let repositories = entities
        .iter()
        .map(|e| format_ident!("{}Repository", e.name));

    let tokens = quote! {
        pub fn add_generated_repositories(
            services: &mut #rt::ServiceRegistry,
        ) -> &mut #rt::ServiceRegistry {
            #(services.add_singleton(#repositories::new());)*
            services
        }
    };

    render(BOOTSTRAP_ARTIFACT, tokens)
}
