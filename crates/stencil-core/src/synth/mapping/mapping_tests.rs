#![allow(non_snake_case)]

use super::*;

fn pair(name: &str, source_access: MemberAccess, dest_access: MemberAccess) -> MemberPair {
    MemberPair {
        source: name.to_string(),
        source_access,
        dest: name.to_string(),
        dest_access,
    }
}

fn descriptor(namespace: &str, source: &str, dest: &str, pairs: Vec<MemberPair>) -> MappingDescriptor {
    let display = dest.rsplit("::").next().unwrap_or(dest).to_string();
    MappingDescriptor {
        source_namespace: namespace.to_string(),
        source_type_name: source.to_string(),
        dest_type_name: dest.to_string(),
        dest_display_name: display,
        member_pairs: pairs,
    }
}

fn thing_to_stuff() -> MappingDescriptor {
    descriptor(
        "crate::models",
        "crate::models::Thing",
        "crate::models::Stuff",
        vec![
            pair("name", MemberAccess::Field, MemberAccess::Field),
            pair("count", MemberAccess::Field, MemberAccess::Field),
        ],
    )
}

#[test]
fn synthesize_mappings___single_descriptor___emits_trait_and_impl() {
    let output = synthesize_mappings(&[thing_to_stuff()]).unwrap();

    assert!(output.failures.is_empty());
    assert_eq!(output.artifact.artifact_id, ARTIFACT);
    let text = &output.artifact.text;
    assert!(text.contains("pub mod mapping_extensions_crate_models"));
    assert!(text.contains("pub trait MapToStuff"));
    assert!(text.contains("fn map_to_stuff("));
    assert!(text.contains("impl MapToStuff for crate::models::Thing"));
    assert!(text.contains("<crate::models::Stuff as ::core::default::Default>::default()"));
    assert!(text.contains("mapped.name = ::core::clone::Clone::clone(&self.name);"));
    assert!(text.contains("mapped.count = ::core::clone::Clone::clone(&self.count);"));
    assert!(text.contains("additional_mappings(self, &mut mapped);"));
}

#[test]
fn synthesize_mappings___pairs_keep_descriptor_order() {
    let text = synthesize_mappings(&[thing_to_stuff()]).unwrap().artifact.text;

    let name_at = text.find("mapped.name").unwrap();
    let count_at = text.find("mapped.count").unwrap();
    assert!(name_at < count_at);
}

#[test]
fn synthesize_mappings___accessors___use_getter_and_setter() {
    let junk = descriptor(
        "crate::models",
        "crate::models::Junk",
        "crate::models::Junk",
        vec![pair("size", MemberAccess::Getter, MemberAccess::Setter)],
    );

    let text = synthesize_mappings(&[junk]).unwrap().artifact.text;

    assert!(text.contains("mapped.set_size(self.size());"));
}

#[test]
fn synthesize_mappings___shared_destination___one_trait_many_impls() {
    let junk_to_stuff = descriptor(
        "crate::models",
        "crate::models::Junk",
        "crate::models::Stuff",
        vec![],
    );

    let text = synthesize_mappings(&[thing_to_stuff(), junk_to_stuff])
        .unwrap()
        .artifact
        .text;

    assert_eq!(text.matches("pub trait MapToStuff").count(), 1);
    assert!(text.contains("impl MapToStuff for crate::models::Thing"));
    assert!(text.contains("impl MapToStuff for crate::models::Junk"));
}

#[test]
fn synthesize_mappings___groups_by_namespace_in_first_appearance_order() {
    let other = descriptor(
        "crate::other",
        "crate::other::Widget",
        "crate::models::Stuff",
        vec![],
    );
    let back = descriptor(
        "crate::models",
        "crate::models::Stuff",
        "crate::models::Thing",
        vec![],
    );

    let text = synthesize_mappings(&[thing_to_stuff(), other, back])
        .unwrap()
        .artifact
        .text;

    assert_eq!(text.matches("pub mod ").count(), 2);
    let models_at = text.find("mod mapping_extensions_crate_models").unwrap();
    let other_at = text.find("mod mapping_extensions_crate_other").unwrap();
    assert!(models_at < other_at);
    assert!(text.contains("pub trait MapToThing"));
}

#[test]
fn synthesize_mappings___display_name_conflict___fails_later_descriptor() {
    let clash = descriptor(
        "crate::models",
        "crate::models::Junk",
        "crate::legacy::Stuff",
        vec![],
    );

    let output = synthesize_mappings(&[thing_to_stuff(), clash]).unwrap();

    assert_eq!(output.failures.len(), 1);
    assert!(matches!(
        &output.failures[0],
        GenerateError::ConflictingMapping { dest, existing, .. }
            if dest == "crate::legacy::Stuff" && existing == "crate::models::Stuff"
    ));
    assert!(!output.artifact.text.contains("crate::legacy::Stuff"));
    assert!(!output.artifact.text.contains("crate::models::Junk"));
}

#[test]
fn synthesize_mappings___same_display_in_other_namespace___is_fine() {
    let legacy = descriptor(
        "crate::legacy",
        "crate::legacy::Junk",
        "crate::legacy::Stuff",
        vec![],
    );

    let output = synthesize_mappings(&[thing_to_stuff(), legacy]).unwrap();

    assert!(output.failures.is_empty());
    assert_eq!(output.artifact.text.matches("pub trait MapToStuff").count(), 2);
}

#[test]
fn synthesize_mappings___underscore_and_nested_namespaces___get_separate_modules() {
    let flat = descriptor("crate::a_b", "crate::a_b::S", "crate::a_b::D", vec![]);
    let nested = descriptor("crate::a::b", "crate::a::b::T", "crate::a::b::E", vec![]);

    let output = synthesize_mappings(&[flat, nested]).unwrap();

    assert!(output.failures.is_empty());
    let text = &output.artifact.text;
    assert_eq!(text.matches("pub mod mapping_extensions_crate_a__b ").count(), 1);
    assert_eq!(text.matches("pub mod mapping_extensions_crate_a_b ").count(), 1);
}

#[test]
fn synthesize_mappings___case_only_namespace_difference___gets_separate_modules() {
    let camel = descriptor("crate::FooBar", "crate::FooBar::S", "crate::FooBar::D", vec![]);
    let snake = descriptor("crate::foo_bar", "crate::foo_bar::T", "crate::foo_bar::E", vec![]);

    let output = synthesize_mappings(&[camel, snake]).unwrap();

    assert!(output.failures.is_empty());
    assert_eq!(output.artifact.text.matches("pub mod ").count(), 2);
}

#[test]
fn synthesize_mappings___module_name_taken___fails_later_namespace() {
    let first = descriptor("crate::a_::b", "crate::a_::b::S", "crate::a_::b::D", vec![]);
    let second = descriptor("crate::a::_b", "crate::a::_b::T", "crate::a::_b::E", vec![]);

    let output = synthesize_mappings(&[first, second]).unwrap();

    assert_eq!(output.failures.len(), 1);
    assert!(matches!(
        &output.failures[0],
        GenerateError::ConflictingNamespace { namespace, existing, .. }
            if namespace == "crate::a::_b" && existing == "crate::a_::b"
    ));
    assert_eq!(output.artifact.text.matches("pub mod ").count(), 1);
    assert!(!output.artifact.text.contains("crate::a::_b::T"));
}

#[test]
fn synthesize_mappings___bad_member_name___fails_only_that_descriptor() {
    let broken = descriptor(
        "crate::models",
        "crate::models::Junk",
        "crate::models::Thing",
        vec![pair("not valid", MemberAccess::Field, MemberAccess::Field)],
    );

    let output = synthesize_mappings(&[broken, thing_to_stuff()]).unwrap();

    assert_eq!(output.failures.len(), 1);
    assert!(!output.artifact.text.contains("MapToThing"));
    assert!(output.artifact.text.contains("MapToStuff"));
}

#[test]
fn synthesize_mappings___no_descriptors___emits_header_only_artifact() {
    let output = synthesize_mappings(&[]).unwrap();

    assert_eq!(output.artifact.text, format!("{}\n", crate::synth::HEADER));
}
