//! stencil-core - Resolution and template synthesis engine
//!
//! This crate turns declarative descriptions into Rust source artifacts:
//! - [`EntityDescription`] schema entities become keyed repositories, models
//!   and controllers ([`generate_api`])
//! - `Mappings::register::<A, B>()` call sites become mapping extension
//!   traits ([`generate_mappings`])
//! - `#[handler]` structs become handler plumbing ([`generate_handlers`])
//!
//! # Architecture
//!
//! ```text
//! SyntaxCorpus ──► Scanner ──► SymbolResolver ──► (Matcher) ──► synth ──► ArtifactRegistry
//!                                   │
//!                            TypeResolver (host)
//! ```
//!
//! The engine never touches the file system and never logs. Hosts supply the
//! corpus and a [`TypeResolver`]; drivers write the resulting
//! [`GeneratedArtifact`]s wherever they need to go.

pub mod config;
pub mod corpus;
mod error;
pub mod generate;
pub mod matcher;
pub mod model;
pub mod naming;
pub mod registry;
pub mod resolver;
pub mod scanner;
pub mod schema;
pub mod synth;

#[cfg(test)]
mod test_support;

pub use config::{GeneratorConfig, InvalidEntityPolicy};
pub use corpus::{
    DeclarationKind, Invocation, SyntaxCorpus, SyntaxNode, SyntaxUnit, TypeDeclaration, TypeRef,
    UnitId,
};
pub use error::{ErrorScope, GenerateError, GenerateResult};
pub use generate::{Generation, generate_api, generate_handlers, generate_mappings};
pub use model::{
    EntityDescription, GeneratedArtifact, HandlerDescription, HandlerMember, MappingDescriptor,
    MemberAccess, MemberDescription, MemberPair, MemberRole,
};
pub use registry::ArtifactRegistry;
pub use resolver::{
    LookupContext, MemberInfo, MemberKind, Resolved, SymbolResolver, TypeInfo, TypeKind,
    TypeResolver, Visibility,
};
pub use scanner::{Candidate, MarkedDeclaration, Predicate, RegistrationCall, Scanner};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        EntityDescription, GenerateError, GenerateResult, GeneratedArtifact, Generation,
        GeneratorConfig, SyntaxCorpus, TypeResolver, generate_api, generate_handlers,
        generate_mappings,
    };
}
