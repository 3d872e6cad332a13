//! Host-neutral view of parsed compilation units.
//!
//! A front end (see `stencil-syn`) lowers its parse trees into a
//! [`SyntaxCorpus`]. The scanner walks these nodes; the resolver turns the
//! textual references they hold into [`crate::resolver::TypeInfo`].

use std::fmt;

/// Index of a unit within its corpus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct UnitId(pub usize);

impl fmt::Display for UnitId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// All units of one run, in a stable order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SyntaxCorpus {
    units: Vec<SyntaxUnit>,
}

impl SyntaxCorpus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a unit built from `origin` and `nodes`, returning its id.
    pub fn push(&mut self, origin: impl Into<String>, nodes: Vec<SyntaxNode>) -> UnitId {
        let id = UnitId(self.units.len());
        self.units.push(SyntaxUnit {
            id,
            origin: origin.into(),
            nodes,
        });
        id
    }

    pub fn units(&self) -> &[SyntaxUnit] {
        &self.units
    }

    pub fn unit(&self, id: UnitId) -> Option<&SyntaxUnit> {
        self.units.get(id.0)
    }

    pub fn len(&self) -> usize {
        self.units.len()
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }
}

/// One parsed compilation unit (a source file).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntaxUnit {
    pub id: UnitId,

    /// Where the unit came from; shown in diagnostics.
    pub origin: String,

    /// Nodes in source order.
    pub nodes: Vec<SyntaxNode>,
}

/// The node shapes the scanner cares about.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyntaxNode {
    TypeDeclaration(TypeDeclaration),
    Invocation(Invocation),
}

/// A struct or enum declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeDeclaration {
    pub name: String,

    /// Enclosing module path (`crate::things`).
    pub namespace: String,

    pub kind: DeclarationKind,

    /// Last path segment of every attribute (`handler` for `#[stencil::handler]`).
    pub markers: Vec<String>,

    /// Named-field struct without generics; generated code may add an
    /// inherent impl and construct it with a struct literal.
    pub extensible: bool,
}

impl TypeDeclaration {
    /// `namespace::name`
    pub fn path(&self) -> String {
        format!("{}::{}", self.namespace, self.name)
    }

    pub fn has_marker(&self, marker: &str) -> bool {
        self.markers.iter().any(|m| m == marker)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeclarationKind {
    Struct,
    Enum,
}

/// A call through a path with explicit generic arguments:
/// `stencil::Mappings::register::<A, B>()`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    /// Path segments before the method (`["stencil", "Mappings"]`).
    pub receiver: Vec<String>,

    pub method: String,

    pub type_arguments: Vec<TypeRef>,

    /// Module the call appears in; receivers and arguments resolve from here.
    pub scope: String,
}

/// A type as written at a use site, plus the module it is written in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeRef {
    pub text: String,
    pub scope: String,
}

impl TypeRef {
    pub fn new(text: impl Into<String>, scope: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            scope: scope.into(),
        }
    }
}

impl fmt::Display for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}
