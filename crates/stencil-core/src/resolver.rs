//! Symbol resolution against a host-provided type oracle.
//!
//! The engine never parses types itself. A host implements [`TypeResolver`]
//! (see `stencil-syn` for the Rust front end); [`SymbolResolver`] turns raw
//! scanner candidates into handler and mapping descriptions through it.
//!
//! Lookups go through a [`LookupContext`] created once per run of consecutive
//! candidates from the same syntax unit. A context is dropped before the next
//! unit's context is created, so cached lookups never cross units.

use crate::corpus::{SyntaxUnit, TypeDeclaration, TypeRef, UnitId};
use crate::error::{GenerateError, GenerateResult};
use crate::matcher::match_members;
use crate::model::{HandlerDescription, HandlerMember, MappingDescriptor, MemberRole};
use crate::scanner::Candidate;
use std::collections::HashSet;

/// What a host knows about a named type.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TypeInfo {
    /// Bare name (`Stuff`).
    pub name: String,

    /// Canonical path (`crate::models::Stuff`).
    pub path: String,

    /// Module containing the type (`crate::models`).
    pub namespace: String,

    pub kind: TypeKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeKind {
    Struct,
    Enum,
    Primitive,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Visibility {
    /// `pub`
    Public,
    /// `pub(crate)`, `pub(super)`, `pub(in ..)`
    Restricted,
    /// No visibility modifier.
    Private,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MemberKind {
    Field,
    /// `fn name(&self) -> T`
    Getter,
    /// `fn set_name(&mut self, value: T)`, reported under `name`.
    Setter,
}

/// One member of a type as seen by the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemberInfo {
    pub name: String,

    /// Canonical display form of the member type.
    pub type_name: String,

    pub visibility: Visibility,
    pub kind: MemberKind,

    /// Backed by storage in the type itself (a plain field).
    pub stored: bool,
}

impl MemberInfo {
    /// Access role available to generated code outside the type.
    ///
    /// Only public members have one.
    pub fn role(&self) -> Option<MemberRole> {
        if self.visibility != Visibility::Public {
            return None;
        }
        Some(match self.kind {
            MemberKind::Field => MemberRole::Both,
            MemberKind::Getter => MemberRole::Readable,
            MemberKind::Setter => MemberRole::Writable,
        })
    }

    pub fn is_readable(&self) -> bool {
        matches!(self.role(), Some(MemberRole::Readable | MemberRole::Both))
    }

    pub fn is_writable(&self) -> bool {
        matches!(self.role(), Some(MemberRole::Writable | MemberRole::Both))
    }
}

/// Type oracle supplied by the host.
pub trait TypeResolver {
    /// Create the lookup context for one syntax unit.
    fn lookup_context<'a>(&'a self, unit: &'a SyntaxUnit) -> Box<dyn LookupContext + 'a>;

    /// Members of a resolved type, in declaration order.
    fn members_of(&self, ty: &TypeInfo) -> Vec<MemberInfo>;
}

/// Per-unit lookups.
pub trait LookupContext {
    /// Resolve a type as written at a use site.
    fn resolve_type(&self, ty: &TypeRef) -> Option<TypeInfo>;

    /// The symbol a declaration in this unit introduces.
    fn declared_type(&self, decl: &TypeDeclaration) -> Option<TypeInfo>;

    /// Whether `receiver` names something reachable from `scope`.
    fn resolves_receiver(&self, receiver: &[String], scope: &str) -> bool;
}

/// Output of one resolution pass.
#[derive(Debug)]
pub struct Resolved<T> {
    /// Resolved values in candidate order, duplicates removed.
    pub items: Vec<T>,

    /// One error per candidate that could not be resolved.
    pub failures: Vec<GenerateError>,
}

impl<T> Default for Resolved<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            failures: Vec::new(),
        }
    }
}

struct UnitScope<'a> {
    unit: UnitId,
    context: Box<dyn LookupContext + 'a>,
}

/// Converts scanner candidates into descriptions.
pub struct SymbolResolver<'h, H: ?Sized> {
    host: &'h H,
}

impl<'h, H: TypeResolver + ?Sized> SymbolResolver<'h, H> {
    pub fn new(host: &'h H) -> Self {
        Self { host }
    }

    /// Resolve marked declarations into handler descriptions.
    ///
    /// Declarations without eligible members are dropped without error.
    pub fn resolve_handlers(&self, candidates: &[Candidate<'_>]) -> Resolved<HandlerDescription> {
        let mut resolved = Resolved::default();
        let mut seen = HashSet::new();

        self.with_unit_contexts(candidates, |context, candidate| {
            let Some(decl) = candidate.declaration() else {
                return;
            };
            match self.resolve_handler(context, candidate.unit, decl) {
                Ok(Some(handler)) => {
                    if seen.insert(handler.type_path.clone()) {
                        resolved.items.push(handler);
                    }
                }
                Ok(None) => {}
                Err(e) => resolved.failures.push(e),
            }
        });

        resolved
    }

    /// Resolve registration call sites into mapping descriptors.
    pub fn resolve_mappings(&self, candidates: &[Candidate<'_>]) -> Resolved<MappingDescriptor> {
        let mut resolved = Resolved::default();
        let mut seen = HashSet::new();

        self.with_unit_contexts(candidates, |context, candidate| {
            let Some(call) = candidate.invocation() else {
                return;
            };
            let origin = &candidate.unit.origin;
            let result = if context.resolves_receiver(&call.receiver, &call.scope) {
                self.resolve_mapping(context, &call.type_arguments, origin)
            } else {
                Err(GenerateError::UnresolvableReceiver {
                    receiver: call.receiver.join("::"),
                    origin: origin.clone(),
                })
            };
            match result {
                Ok(mapping) => {
                    let key = (
                        mapping.source_type_name.clone(),
                        mapping.dest_type_name.clone(),
                    );
                    if seen.insert(key) {
                        resolved.items.push(mapping);
                    }
                }
                Err(e) => resolved.failures.push(e),
            }
        });

        resolved
    }

    fn with_unit_contexts<'c, F>(&self, candidates: &[Candidate<'c>], mut f: F)
    where
        F: FnMut(&dyn LookupContext, &Candidate<'c>),
    {
        let mut scope: Option<UnitScope<'_>> = None;

        for candidate in candidates {
            if scope
                .as_ref()
                .is_some_and(|s| s.unit != candidate.unit.id)
            {
                scope = None;
            }
            let current = scope.get_or_insert_with(|| UnitScope {
                unit: candidate.unit.id,
                context: self.host.lookup_context(candidate.unit),
            });
            f(current.context.as_ref(), candidate);
        }
    }

    fn resolve_handler(
        &self,
        context: &dyn LookupContext,
        unit: &SyntaxUnit,
        decl: &TypeDeclaration,
    ) -> GenerateResult<Option<HandlerDescription>> {
        let info =
            context
                .declared_type(decl)
                .ok_or_else(|| GenerateError::UnresolvedDeclaration {
                    name: decl.path(),
                    origin: unit.origin.clone(),
                })?;

        let (eligible, remaining): (Vec<_>, Vec<_>) = self
            .host
            .members_of(&info)
            .into_iter()
            .filter(|m| m.kind == MemberKind::Field && m.stored)
            .partition(|m| m.visibility == Visibility::Restricted);

        if eligible.is_empty() {
            return Ok(None);
        }

        Ok(Some(HandlerDescription {
            class_name: info.name,
            namespace: info.namespace,
            type_path: info.path,
            members: eligible
                .into_iter()
                .map(|m| HandlerMember {
                    label: m.name,
                    type_name: m.type_name,
                })
                .collect(),
            fills_remaining: !remaining.is_empty(),
        }))
    }

    fn resolve_mapping(
        &self,
        context: &dyn LookupContext,
        arguments: &[TypeRef],
        origin: &str,
    ) -> GenerateResult<MappingDescriptor> {
        let [source, dest] = arguments else {
            return Err(GenerateError::InvalidTypeArgument {
                argument: arguments
                    .iter()
                    .map(|a| a.text.as_str())
                    .collect::<Vec<_>>()
                    .join(", "),
                origin: origin.to_string(),
            });
        };
        let source = named_type(context, source, origin)?;
        let dest = named_type(context, dest, origin)?;

        let member_pairs = match_members(
            &self.host.members_of(&source),
            &self.host.members_of(&dest),
        );

        Ok(MappingDescriptor {
            source_namespace: source.namespace,
            source_type_name: source.path,
            dest_type_name: dest.path,
            dest_display_name: dest.name,
            member_pairs,
        })
    }
}

fn named_type(context: &dyn LookupContext, ty: &TypeRef, origin: &str) -> GenerateResult<TypeInfo> {
    context
        .resolve_type(ty)
        .filter(|info| matches!(info.kind, TypeKind::Struct | TypeKind::Enum))
        .ok_or_else(|| GenerateError::InvalidTypeArgument {
            argument: ty.text.clone(),
            origin: origin.to_string(),
        })
}
