#![allow(non_snake_case)]

use super::*;
use stencil_core::{MemberKind, TypeKind, UnitId, Visibility};
use test_case::test_case;

fn tree(files: &[(&str, &str)]) -> SourceTree {
    SourceTree::from_sources(files.iter().map(|(module, text)| {
        SourceFile::new(*module, format!("{}.rs", module.replace("::", "/")), *text)
    }))
    .unwrap()
}

fn context(tree: &SourceTree) -> Box<dyn LookupContext + '_> {
    let unit = tree.corpus().unit(UnitId(0)).unwrap();
    tree.lookup_context(unit)
}

#[test_case("lib.rs", "crate" ; "library root")]
#[test_case("main.rs", "crate" ; "binary root")]
#[test_case("models.rs", "crate::models" ; "file module")]
#[test_case("models/mod.rs", "crate::models" ; "directory module")]
#[test_case("models/user.rs", "crate::models::user" ; "nested module")]
#[test_case("models/lib.rs", "crate::models::lib" ; "lib below root")]
fn module_path_for___maps_file_to_module(path: &str, expected: &str) {
    assert_eq!(module_path_for(Path::new(path)), expected);
}

#[test]
fn SourceTree___from_sources___one_unit_per_file_in_order() {
    let tree = tree(&[
        ("crate", "pub mod models;"),
        ("crate::models", "pub struct Thing { pub name: String }"),
    ]);

    let origins: Vec<_> = tree
        .corpus()
        .units()
        .iter()
        .map(|u| u.origin.as_str())
        .collect();
    assert_eq!(origins, vec!["crate.rs", "crate/models.rs"]);
}

#[test]
fn SourceTree___from_sources___invalid_rust___is_parse_error() {
    let err = SourceTree::from_sources([SourceFile::new("crate", "src/lib.rs", "struct {")])
        .unwrap_err();

    assert!(matches!(err, SourceError::Parse { origin, .. } if origin == "src/lib.rs"));
}

#[test]
fn SourceTree___resolve_type___follows_imports_across_files() {
    let tree = tree(&[
        ("crate", "use crate::models::Thing;"),
        ("crate::models", "pub struct Thing { pub name: String }"),
    ]);

    let info = context(&tree)
        .resolve_type(&TypeRef::new("Thing", "crate"))
        .unwrap();

    assert_eq!(info.path, "crate::models::Thing");
    assert_eq!(info.namespace, "crate::models");
    assert_eq!(info.kind, TypeKind::Struct);
}

#[test]
fn SourceTree___resolve_type___repeated_lookup___is_stable() {
    let tree = tree(&[("crate", "pub enum Color { Red }")]);
    let context = context(&tree);
    let color = TypeRef::new("Color", "crate");

    let first = context.resolve_type(&color);
    let second = context.resolve_type(&color);

    assert_eq!(first, second);
    assert_eq!(first.map(|t| t.kind), Some(TypeKind::Enum));
}

#[test]
fn SourceTree___declared_type___finds_declaration() {
    let tree = tree(&[("crate::things", "#[handler] pub struct Thing { pub(crate) a: i32 }")]);
    let stencil_core::SyntaxNode::TypeDeclaration(decl) = &tree.corpus().units()[0].nodes[0]
    else {
        panic!("expected a declaration");
    };

    let info = context(&tree).declared_type(decl).unwrap();

    assert_eq!(info.path, "crate::things::Thing");
}

#[test]
fn SourceTree___members_of___qualifies_member_types() {
    let tree = tree(&[
        (
            "crate::things",
            r#"
            use uuid::Uuid;
            use super::models::Tag;

            pub struct Thing {
                pub(crate) id: Uuid,
                pub(crate) tags: Vec<Tag>,
                count: i32,
            }

            impl Thing {
                pub fn label(&self) -> &str { "" }
            }
            "#,
        ),
        ("crate::models", "pub struct Tag;"),
    ]);
    let info = context(&tree)
        .resolve_type(&TypeRef::new("crate::things::Thing", "crate"))
        .unwrap();

    let members = tree.members_of(&info);

    let summary: Vec<_> = members
        .iter()
        .map(|m| (m.name.as_str(), m.type_name.as_str(), m.visibility, m.kind))
        .collect();
    assert_eq!(
        summary,
        vec![
            ("id", "::uuid::Uuid", Visibility::Restricted, MemberKind::Field),
            (
                "tags",
                "Vec<crate::models::Tag>",
                Visibility::Restricted,
                MemberKind::Field
            ),
            ("count", "i32", Visibility::Private, MemberKind::Field),
            ("label", "&str", Visibility::Public, MemberKind::Getter),
        ]
    );
}

#[test]
fn SourceTree___impl_in_other_module___attaches_accessors() {
    let tree = tree(&[
        ("crate::models", "pub struct Junk { size: i32 }"),
        (
            "crate::ext",
            r#"
            use crate::models::Junk;
            impl Junk {
                pub fn size(&self) -> i32 { self.size }
            }
            "#,
        ),
    ]);
    let info = context(&tree)
        .resolve_type(&TypeRef::new("crate::models::Junk", "crate"))
        .unwrap();

    let kinds: Vec<_> = tree.members_of(&info).iter().map(|m| m.kind).collect();

    assert_eq!(kinds, vec![MemberKind::Field, MemberKind::Getter]);
}

#[test]
fn SourceTree___resolves_receiver___imported_and_qualified() {
    let tree = tree(&[("crate", "use stencil::Mappings; pub struct Local;")]);
    let context = context(&tree);
    let path = |p: &str| p.split("::").map(str::to_string).collect::<Vec<_>>();

    assert!(context.resolves_receiver(&path("Mappings"), "crate"));
    assert!(context.resolves_receiver(&path("stencil::Mappings"), "crate"));
    assert!(context.resolves_receiver(&path("Local"), "crate"));
    assert!(!context.resolves_receiver(&path("Unknown"), "crate"));
}

#[test]
fn SourceTree___members_of___unknown_type___is_empty() {
    let tree = tree(&[("crate", "")]);
    let ghost = TypeInfo {
        name: "Ghost".to_string(),
        path: "crate::Ghost".to_string(),
        namespace: "crate".to_string(),
        kind: TypeKind::Struct,
    };

    assert!(tree.members_of(&ghost).is_empty());
}
