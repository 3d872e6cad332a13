//! Lowering of parsed files into corpus nodes and symbol table entries.

use crate::symbols::{MemberEntry, SymbolTable, UsePath, token_text};
use stencil_core::{
    DeclarationKind, Invocation, MemberKind, SyntaxNode, TypeDeclaration, TypeKind, TypeRef,
    Visibility,
};
use syn::ext::IdentExt;
use syn::visit::{self, Visit};

/// Lower one file whose items live in `module`.
///
/// Items declared inside function bodies are not nameable from elsewhere and
/// are skipped; `use` items in bodies are attributed to the enclosing module.
pub(crate) fn lower_file(
    file: &syn::File,
    module: &str,
    symbols: &mut SymbolTable,
) -> Vec<SyntaxNode> {
    symbols.add_module(module);
    let mut lowering = Lowering {
        symbols,
        module: module.split("::").map(str::to_string).collect(),
        block_depth: 0,
        nodes: Vec::new(),
    };
    lowering.visit_file(file);
    lowering.nodes
}

struct Lowering<'t> {
    symbols: &'t mut SymbolTable,
    module: Vec<String>,
    block_depth: usize,
    nodes: Vec<SyntaxNode>,
}

impl Lowering<'_> {
    fn scope(&self) -> String {
        self.module.join("::")
    }

    fn declare(
        &mut self,
        ident: &syn::Ident,
        kind: DeclarationKind,
        attrs: &[syn::Attribute],
        extensible: bool,
    ) {
        self.nodes.push(SyntaxNode::TypeDeclaration(TypeDeclaration {
            name: ident.unraw().to_string(),
            namespace: self.scope(),
            kind,
            markers: markers(attrs),
            extensible,
        }));
    }
}

impl<'ast> Visit<'ast> for Lowering<'_> {
    fn visit_item_mod(&mut self, node: &'ast syn::ItemMod) {
        if self.block_depth > 0 {
            return;
        }
        self.module.push(node.ident.unraw().to_string());
        self.symbols.add_module(&self.scope());
        visit::visit_item_mod(self, node);
        self.module.pop();
    }

    fn visit_item_struct(&mut self, node: &'ast syn::ItemStruct) {
        if self.block_depth > 0 {
            return;
        }
        let scope = self.scope();
        let name = node.ident.unraw().to_string();

        let (extensible, fields) = match &node.fields {
            syn::Fields::Named(named) => (
                node.generics.params.is_empty(),
                named
                    .named
                    .iter()
                    .filter_map(|field| {
                        field.ident.as_ref().map(|ident| MemberEntry {
                            name: ident.unraw().to_string(),
                            ty: field.ty.clone(),
                            visibility: visibility(&field.vis),
                            kind: MemberKind::Field,
                            scope: scope.clone(),
                        })
                    })
                    .collect(),
            ),
            _ => (false, Vec::new()),
        };

        self.symbols.add_type(&scope, &name, TypeKind::Struct, fields);
        self.declare(&node.ident, DeclarationKind::Struct, &node.attrs, extensible);
    }

    fn visit_item_enum(&mut self, node: &'ast syn::ItemEnum) {
        if self.block_depth > 0 {
            return;
        }
        let scope = self.scope();
        self.symbols.add_type(
            &scope,
            &node.ident.unraw().to_string(),
            TypeKind::Enum,
            Vec::new(),
        );
        self.declare(&node.ident, DeclarationKind::Enum, &node.attrs, false);
    }

    fn visit_item_use(&mut self, node: &'ast syn::ItemUse) {
        let scope = self.scope();
        let mut entries = Vec::new();
        flatten_use(
            &node.tree,
            &mut Vec::new(),
            node.leading_colon.is_some(),
            &mut entries,
        );
        for entry in entries {
            match entry {
                UseEntry::Alias(alias, path) => self.symbols.add_import(&scope, alias, path),
                UseEntry::Glob(path) => self.symbols.add_glob(&scope, path),
            }
        }
    }

    fn visit_item_impl(&mut self, node: &'ast syn::ItemImpl) {
        if self.block_depth == 0
            && node.trait_.is_none()
            && node.generics.params.is_empty()
            && let syn::Type::Path(self_ty) = node.self_ty.as_ref()
            && self_ty.qself.is_none()
        {
            let scope = self.scope();
            let accessors: Vec<_> = node
                .items
                .iter()
                .filter_map(|item| match item {
                    syn::ImplItem::Fn(method) => accessor(method, &scope),
                    _ => None,
                })
                .collect();
            if !accessors.is_empty() {
                self.symbols.add_impl(self_ty.path.clone(), scope, accessors);
            }
        }
        visit::visit_item_impl(self, node);
    }

    fn visit_block(&mut self, node: &'ast syn::Block) {
        self.block_depth += 1;
        visit::visit_block(self, node);
        self.block_depth -= 1;
    }

    fn visit_expr_call(&mut self, node: &'ast syn::ExprCall) {
        if let syn::Expr::Path(func) = node.func.as_ref()
            && func.qself.is_none()
            && let Some(last) = func.path.segments.last()
            && let syn::PathArguments::AngleBracketed(generics) = &last.arguments
        {
            let scope = self.scope();
            let count = func.path.segments.len();
            self.nodes.push(SyntaxNode::Invocation(Invocation {
                receiver: func
                    .path
                    .segments
                    .iter()
                    .take(count - 1)
                    .map(|s| s.ident.unraw().to_string())
                    .collect(),
                method: last.ident.unraw().to_string(),
                type_arguments: generics
                    .args
                    .iter()
                    .map(|arg| TypeRef::new(token_text(arg), scope.clone()))
                    .collect(),
                scope,
            }));
        }
        visit::visit_expr_call(self, node);
    }
}

/// Last path segment of each attribute.
fn markers(attrs: &[syn::Attribute]) -> Vec<String> {
    attrs
        .iter()
        .filter_map(|attr| attr.path().segments.last())
        .map(|segment| segment.ident.unraw().to_string())
        .collect()
}

fn visibility(vis: &syn::Visibility) -> Visibility {
    match vis {
        syn::Visibility::Public(_) => Visibility::Public,
        syn::Visibility::Restricted(_) => Visibility::Restricted,
        syn::Visibility::Inherited => Visibility::Private,
    }
}

/// `fn name(&self) -> T` or `fn set_name(&mut self, value: T)`.
fn accessor(method: &syn::ImplItemFn, scope: &str) -> Option<MemberEntry> {
    let sig = &method.sig;
    if !sig.generics.params.is_empty() || sig.asyncness.is_some() || sig.unsafety.is_some() {
        return None;
    }

    let mut inputs = sig.inputs.iter();
    let Some(syn::FnArg::Receiver(receiver)) = inputs.next() else {
        return None;
    };
    receiver.reference.as_ref()?;

    let name = sig.ident.unraw().to_string();
    let (name, ty, kind) = match (inputs.next(), inputs.next(), &sig.output) {
        (None, _, syn::ReturnType::Type(_, ty)) if receiver.mutability.is_none() => {
            (name, (**ty).clone(), MemberKind::Getter)
        }
        (Some(syn::FnArg::Typed(value)), None, syn::ReturnType::Default)
            if receiver.mutability.is_some() =>
        {
            let property = name.strip_prefix("set_").filter(|p| !p.is_empty())?;
            (property.to_string(), (*value.ty).clone(), MemberKind::Setter)
        }
        _ => return None,
    };

    Some(MemberEntry {
        name,
        ty,
        visibility: visibility(&method.vis),
        kind,
        scope: scope.to_string(),
    })
}

enum UseEntry {
    Alias(String, UsePath),
    Glob(UsePath),
}

fn flatten_use(
    tree: &syn::UseTree,
    prefix: &mut Vec<String>,
    leading_colon: bool,
    out: &mut Vec<UseEntry>,
) {
    let path = |prefix: &[String], name: Option<String>| UsePath {
        segments: prefix.iter().cloned().chain(name).collect(),
        leading_colon,
    };

    match tree {
        syn::UseTree::Path(p) => {
            prefix.push(p.ident.unraw().to_string());
            flatten_use(&p.tree, prefix, leading_colon, out);
            prefix.pop();
        }
        syn::UseTree::Name(n) => {
            let name = n.ident.unraw().to_string();
            if name == "self" {
                if let Some(last) = prefix.last() {
                    out.push(UseEntry::Alias(last.clone(), path(prefix.as_slice(), None)));
                }
            } else {
                out.push(UseEntry::Alias(name.clone(), path(prefix.as_slice(), Some(name))));
            }
        }
        syn::UseTree::Rename(r) => {
            let alias = r.rename.unraw().to_string();
            if alias == "_" {
                return;
            }
            let name = r.ident.unraw().to_string();
            let target = if name == "self" {
                path(prefix.as_slice(), None)
            } else {
                path(prefix.as_slice(), Some(name))
            };
            out.push(UseEntry::Alias(alias, target));
        }
        syn::UseTree::Glob(_) => out.push(UseEntry::Glob(path(prefix.as_slice(), None))),
        syn::UseTree::Group(group) => {
            for item in &group.items {
                flatten_use(item, prefix, leading_colon, out);
            }
        }
    }
}
