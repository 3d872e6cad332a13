//! Crate-wide symbol table.
//!
//! Filled by the lowering pass one file at a time, then finalized once every
//! file has been seen so that inherent impls can attach their accessors to
//! types declared in other files.

use proc_macro2::Span;
use quote::ToTokens;
use std::collections::BTreeMap;
use stencil_core::{MemberInfo, MemberKind, TypeInfo, TypeKind, Visibility};
use syn::punctuated::Punctuated;
use syn::visit_mut::{self, VisitMut};

pub(crate) const CRATE: &str = "crate";

/// Bound on nested import and glob lookups; guards against `use` cycles.
const MAX_DEPTH: usize = 16;

const PRIMITIVES: &[&str] = &[
    "bool", "char", "str", "i8", "i16", "i32", "i64", "i128", "isize", "u8", "u16", "u32", "u64",
    "u128", "usize", "f32", "f64",
];

/// What a path names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Resolution {
    Module(String),
    Type(String),
    /// Outside the crate; segments without the leading `::`.
    External(Vec<String>),
}

/// Target of a `use` item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct UsePath {
    pub segments: Vec<String>,
    pub leading_colon: bool,
}

#[derive(Debug, Clone)]
pub(crate) struct MemberEntry {
    pub name: String,
    pub ty: syn::Type,
    pub visibility: Visibility,
    pub kind: MemberKind,

    /// Module the member's type is written in.
    pub scope: String,
}

#[derive(Debug, Default)]
struct ModuleEntry {
    imports: BTreeMap<String, UsePath>,
    globs: Vec<UsePath>,
}

#[derive(Debug)]
struct TypeEntry {
    name: String,
    namespace: String,
    kind: TypeKind,
    members: Vec<MemberEntry>,
}

#[derive(Debug)]
struct PendingImpl {
    self_ty: syn::Path,
    scope: String,
    members: Vec<MemberEntry>,
}

#[derive(Debug, Default)]
pub(crate) struct SymbolTable {
    modules: BTreeMap<String, ModuleEntry>,
    types: BTreeMap<String, TypeEntry>,
    pending: Vec<PendingImpl>,
}

impl SymbolTable {
    /// Register `path` and all of its ancestors.
    pub fn add_module(&mut self, path: &str) {
        let mut current = String::new();
        for segment in path.split("::") {
            if !current.is_empty() {
                current.push_str("::");
            }
            current.push_str(segment);
            self.modules.entry(current.clone()).or_default();
        }
    }

    pub fn add_type(
        &mut self,
        namespace: &str,
        name: &str,
        kind: TypeKind,
        members: Vec<MemberEntry>,
    ) {
        self.add_module(namespace);
        self.types.insert(
            format!("{namespace}::{name}"),
            TypeEntry {
                name: name.to_string(),
                namespace: namespace.to_string(),
                kind,
                members,
            },
        );
    }

    pub fn add_import(&mut self, module: &str, alias: String, path: UsePath) {
        self.modules
            .entry(module.to_string())
            .or_default()
            .imports
            .insert(alias, path);
    }

    pub fn add_glob(&mut self, module: &str, path: UsePath) {
        self.modules
            .entry(module.to_string())
            .or_default()
            .globs
            .push(path);
    }

    /// Queue accessors from an inherent impl until every type is known.
    pub fn add_impl(&mut self, self_ty: syn::Path, scope: String, members: Vec<MemberEntry>) {
        self.pending.push(PendingImpl {
            self_ty,
            scope,
            members,
        });
    }

    /// Attach queued accessors to the types their impls name.
    pub fn finalize(&mut self) {
        for pending in std::mem::take(&mut self.pending) {
            let segments = path_segments(&pending.self_ty);
            let target = self.resolve_path(
                &segments,
                pending.self_ty.leading_colon.is_some(),
                &pending.scope,
            );
            if let Some(Resolution::Type(path)) = target
                && let Some(entry) = self.types.get_mut(&path)
            {
                entry.members.extend(pending.members);
            }
        }
    }

    pub fn type_info(&self, path: &str) -> Option<TypeInfo> {
        self.types.get(path).map(|entry| TypeInfo {
            name: entry.name.clone(),
            path: path.to_string(),
            namespace: entry.namespace.clone(),
            kind: entry.kind,
        })
    }

    /// Members of the type at `path`: fields in declaration order, then
    /// accessors in impl order.
    pub fn members(&self, path: &str) -> Vec<MemberInfo> {
        let Some(entry) = self.types.get(path) else {
            return Vec::new();
        };
        entry
            .members
            .iter()
            .map(|member| MemberInfo {
                name: member.name.clone(),
                type_name: self.display_type(&member.ty, &member.scope),
                visibility: member.visibility,
                kind: member.kind,
                stored: member.kind == MemberKind::Field,
            })
            .collect()
    }

    /// Resolve a type as written in `scope`.
    ///
    /// Only plain paths to crate-local structs and enums, or bare primitive
    /// names, resolve. Generic instantiations and external types do not.
    pub fn resolve_type(&self, text: &str, scope: &str) -> Option<TypeInfo> {
        let Ok(syn::Type::Path(ty)) = syn::parse_str::<syn::Type>(text) else {
            return None;
        };
        if ty.qself.is_some()
            || ty
                .path
                .segments
                .iter()
                .any(|s| !matches!(s.arguments, syn::PathArguments::None))
        {
            return None;
        }

        let segments = path_segments(&ty.path);
        match self.resolve_path(&segments, ty.path.leading_colon.is_some(), scope) {
            Some(Resolution::Type(path)) => self.type_info(&path),
            None => match segments.as_slice() {
                [name] if PRIMITIVES.contains(&name.as_str()) => Some(TypeInfo {
                    name: name.clone(),
                    path: name.clone(),
                    namespace: String::new(),
                    kind: TypeKind::Primitive,
                }),
                _ => None,
            },
            _ => None,
        }
    }

    /// Whether `receiver` names anything reachable from `scope`.
    ///
    /// A bare name that does not resolve still counts when the module glob
    /// imports from outside the crate.
    pub fn resolves_receiver(&self, receiver: &[String], scope: &str) -> bool {
        if receiver.is_empty() {
            return false;
        }
        self.resolve_path(receiver, false, scope).is_some() || self.has_external_glob(scope)
    }

    pub fn resolve_path(
        &self,
        segments: &[String],
        leading_colon: bool,
        scope: &str,
    ) -> Option<Resolution> {
        self.resolve_path_at(segments, leading_colon, scope, 0, false)
    }

    fn resolve_path_at(
        &self,
        segments: &[String],
        leading_colon: bool,
        scope: &str,
        depth: usize,
        in_use: bool,
    ) -> Option<Resolution> {
        if depth > MAX_DEPTH {
            return None;
        }
        if leading_colon {
            return Some(Resolution::External(segments.to_vec()));
        }

        let (first, rest) = segments.split_first()?;
        let start = match first.as_str() {
            CRATE => Resolution::Module(CRATE.to_string()),
            "self" => Resolution::Module(scope.to_string()),
            "super" => Resolution::Module(parent(scope)?.to_string()),
            name => match self.resolve_in_module(scope, name, depth) {
                Some(resolution) => resolution,
                None if rest.is_empty() && !in_use => return None,
                None => return Some(Resolution::External(segments.to_vec())),
            },
        };

        rest.iter().try_fold(start, |current, segment| match current {
            Resolution::Module(module) if segment == "super" => {
                parent(&module).map(|p| Resolution::Module(p.to_string()))
            }
            Resolution::Module(module) => self.resolve_in_module(&module, segment, depth),
            Resolution::External(mut path) => {
                path.push(segment.clone());
                Some(Resolution::External(path))
            }
            Resolution::Type(_) => None,
        })
    }

    /// Look `name` up among the items, imports and glob imports of `module`.
    fn resolve_in_module(&self, module: &str, name: &str, depth: usize) -> Option<Resolution> {
        let path = format!("{module}::{name}");
        if self.modules.contains_key(&path) {
            return Some(Resolution::Module(path));
        }
        if self.types.contains_key(&path) {
            return Some(Resolution::Type(path));
        }

        let entry = self.modules.get(module)?;
        if let Some(import) = entry.imports.get(name) {
            // `use serde;` names the extern crate, not itself
            if !import.leading_colon && import.segments == [name] {
                return Some(Resolution::External(import.segments.clone()));
            }
            return self.resolve_path_at(
                &import.segments,
                import.leading_colon,
                module,
                depth + 1,
                true,
            );
        }

        entry.globs.iter().find_map(|glob| {
            match self.resolve_path_at(&glob.segments, glob.leading_colon, module, depth + 1, true)
            {
                Some(Resolution::Module(source)) if source != module => {
                    self.resolve_in_module(&source, name, depth + 1)
                }
                _ => None,
            }
        })
    }

    fn has_external_glob(&self, module: &str) -> bool {
        self.modules.get(module).is_some_and(|entry| {
            entry.globs.iter().any(|glob| {
                matches!(
                    self.resolve_path_at(&glob.segments, glob.leading_colon, module, 1, true),
                    Some(Resolution::External(_))
                )
            })
        })
    }

    /// Canonical display form of `ty` as written in `scope`.
    pub fn display_type(&self, ty: &syn::Type, scope: &str) -> String {
        let mut ty = ty.clone();
        Qualify { table: self, scope }.visit_type_mut(&mut ty);
        token_text(&ty)
    }
}

/// Rewrites every resolvable type path to its absolute form.
struct Qualify<'a> {
    table: &'a SymbolTable,
    scope: &'a str,
}

impl VisitMut for Qualify<'_> {
    fn visit_type_path_mut(&mut self, node: &mut syn::TypePath) {
        visit_mut::visit_type_path_mut(self, node);
        if node.qself.is_some() {
            return;
        }

        let segments = path_segments(&node.path);
        let (absolute, leading_colon) = match self.table.resolve_path(
            &segments,
            node.path.leading_colon.is_some(),
            self.scope,
        ) {
            Some(Resolution::Type(path)) => {
                (path.split("::").map(str::to_string).collect(), false)
            }
            Some(Resolution::External(segments)) => (segments, true),
            _ => return,
        };

        let arguments = node
            .path
            .segments
            .last()
            .map(|s| s.arguments.clone())
            .unwrap_or_default();
        let mut path = syn::Path {
            leading_colon: leading_colon.then(Default::default),
            segments: Punctuated::new(),
        };
        for segment in absolute {
            path.segments.push(syn::PathSegment::from(segment_ident(&segment)));
        }
        if let Some(last) = path.segments.last_mut() {
            last.arguments = arguments;
        }
        node.path = path;
    }
}

pub(crate) fn path_segments(path: &syn::Path) -> Vec<String> {
    use syn::ext::IdentExt;
    path.segments
        .iter()
        .map(|s| s.ident.unraw().to_string())
        .collect()
}

fn segment_ident(name: &str) -> syn::Ident {
    match name {
        CRATE | "self" | "super" | "Self" => syn::Ident::new(name, Span::call_site()),
        _ if syn::parse_str::<syn::Ident>(name).is_ok() => syn::Ident::new(name, Span::call_site()),
        _ => syn::Ident::new_raw(name, Span::call_site()),
    }
}

fn parent(module: &str) -> Option<&str> {
    module.rsplit_once("::").map(|(parent, _)| parent)
}

/// Compact single-line rendering of a token tree (`Vec<::uuid::Uuid>`).
pub(crate) fn token_text(tokens: &impl ToTokens) -> String {
    const TIGHTEN: &[(&str, &str)] = &[
        (" :: ", "::"),
        (":: ", "::"),
        (" <", "<"),
        ("< ", "<"),
        (" >", ">"),
        (" ,", ","),
        ("& ", "&"),
        (" ;", ";"),
    ];
    let mut text = tokens.to_token_stream().to_string();
    for (from, to) in TIGHTEN {
        text = text.replace(from, to);
    }
    text
}
