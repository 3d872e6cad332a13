//! In-memory type oracle and builders shared by unit tests.

use crate::corpus::{
    DeclarationKind, Invocation, SyntaxNode, SyntaxUnit, TypeDeclaration, TypeRef, UnitId,
};
use crate::resolver::{
    LookupContext, MemberInfo, MemberKind, TypeInfo, TypeKind, TypeResolver, Visibility,
};
use std::cell::RefCell;
use std::collections::{HashMap, HashSet};

fn member(name: &str, ty: &str, visibility: Visibility, kind: MemberKind) -> MemberInfo {
    MemberInfo {
        name: name.to_string(),
        type_name: ty.to_string(),
        visibility,
        kind,
        stored: kind == MemberKind::Field,
    }
}

pub(crate) fn field(name: &str, ty: &str) -> MemberInfo {
    member(name, ty, Visibility::Public, MemberKind::Field)
}

pub(crate) fn private_field(name: &str, ty: &str) -> MemberInfo {
    member(name, ty, Visibility::Private, MemberKind::Field)
}

pub(crate) fn restricted_field(name: &str, ty: &str) -> MemberInfo {
    member(name, ty, Visibility::Restricted, MemberKind::Field)
}

pub(crate) fn getter(name: &str, ty: &str) -> MemberInfo {
    member(name, ty, Visibility::Public, MemberKind::Getter)
}

pub(crate) fn setter(name: &str, ty: &str) -> MemberInfo {
    member(name, ty, Visibility::Public, MemberKind::Setter)
}

pub(crate) fn marked_struct(name: &str, namespace: &str) -> SyntaxNode {
    SyntaxNode::TypeDeclaration(TypeDeclaration {
        name: name.to_string(),
        namespace: namespace.to_string(),
        kind: DeclarationKind::Struct,
        markers: vec!["derive".to_string(), "handler".to_string()],
        extensible: true,
    })
}

pub(crate) fn plain_struct(name: &str, namespace: &str) -> SyntaxNode {
    SyntaxNode::TypeDeclaration(TypeDeclaration {
        name: name.to_string(),
        namespace: namespace.to_string(),
        kind: DeclarationKind::Struct,
        markers: vec!["derive".to_string()],
        extensible: true,
    })
}

pub(crate) fn call(receiver: &[&str], method: &str, args: &[&str], scope: &str) -> SyntaxNode {
    SyntaxNode::Invocation(Invocation {
        receiver: receiver.iter().map(|s| s.to_string()).collect(),
        method: method.to_string(),
        type_arguments: args.iter().map(|a| TypeRef::new(*a, scope)).collect(),
        scope: scope.to_string(),
    })
}

pub(crate) fn register(source: &str, dest: &str, scope: &str) -> SyntaxNode {
    call(&["Mappings"], "register", &[source, dest], scope)
}

/// Fake host: types are found by full path or by `scope::text`.
#[derive(Default)]
pub(crate) struct FakeResolver {
    types: HashMap<String, TypeInfo>,
    members: HashMap<String, Vec<MemberInfo>>,
    receivers: HashSet<String>,
    contexts: RefCell<Vec<UnitId>>,
}

impl FakeResolver {
    pub(crate) fn new() -> Self {
        Self::default().with_receiver("Mappings")
    }

    fn with_type(mut self, path: &str, kind: TypeKind, members: Vec<MemberInfo>) -> Self {
        let (namespace, name) = path.rsplit_once("::").unwrap_or(("", path));
        self.types.insert(
            path.to_string(),
            TypeInfo {
                name: name.to_string(),
                path: path.to_string(),
                namespace: namespace.to_string(),
                kind,
            },
        );
        self.members.insert(path.to_string(), members);
        self
    }

    pub(crate) fn with_struct(self, path: &str, members: Vec<MemberInfo>) -> Self {
        self.with_type(path, TypeKind::Struct, members)
    }

    pub(crate) fn with_enum(self, path: &str) -> Self {
        self.with_type(path, TypeKind::Enum, vec![])
    }

    pub(crate) fn with_primitive(self, name: &str) -> Self {
        self.with_type(name, TypeKind::Primitive, vec![])
    }

    pub(crate) fn with_receiver(mut self, receiver: &str) -> Self {
        self.receivers.insert(receiver.to_string());
        self
    }

    /// Units a lookup context was created for, in creation order.
    pub(crate) fn contexts(&self) -> Vec<UnitId> {
        self.contexts.borrow().clone()
    }
}

struct FakeContext<'a> {
    host: &'a FakeResolver,
}

impl LookupContext for FakeContext<'_> {
    fn resolve_type(&self, ty: &TypeRef) -> Option<TypeInfo> {
        self.host
            .types
            .get(&ty.text)
            .or_else(|| self.host.types.get(&format!("{}::{}", ty.scope, ty.text)))
            .cloned()
    }

    fn declared_type(&self, decl: &TypeDeclaration) -> Option<TypeInfo> {
        self.host.types.get(&decl.path()).cloned()
    }

    fn resolves_receiver(&self, receiver: &[String], _scope: &str) -> bool {
        self.host.receivers.contains(&receiver.join("::"))
    }
}

impl TypeResolver for FakeResolver {
    fn lookup_context<'a>(&'a self, unit: &'a SyntaxUnit) -> Box<dyn LookupContext + 'a> {
        self.contexts.borrow_mut().push(unit.id);
        Box::new(FakeContext { host: self })
    }

    fn members_of(&self, ty: &TypeInfo) -> Vec<MemberInfo> {
        self.members.get(&ty.path).cloned().unwrap_or_default()
    }
}
