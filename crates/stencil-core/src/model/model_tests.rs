#![allow(non_snake_case)]

use super::*;

fn user() -> EntityDescription {
    EntityDescription::new(
        "User",
        vec![
            MemberDescription::new("Id", "int").key(),
            MemberDescription::new("Name", "string"),
        ],
    )
}

#[test]
fn EntityDescription___validate___accepts_valid_entity() {
    assert!(user().validate().is_ok());
}

#[test]
fn EntityDescription___keys___yields_key_members_in_order() {
    let entity = EntityDescription::new(
        "OrderLine",
        vec![
            MemberDescription::new("Product", "string"),
            MemberDescription::new("OrderId", "int").key(),
            MemberDescription::new("LineNo", "int").key(),
        ],
    );

    let keys: Vec<&str> = entity.keys().map(|m| m.name.as_str()).collect();

    assert_eq!(keys, vec!["OrderId", "LineNo"]);
}

#[test]
fn EntityDescription___validate___rejects_empty_members() {
    let entity = EntityDescription::new("Empty", vec![]);

    let err = entity.validate().unwrap_err();

    assert!(matches!(err, GenerateError::NoMembers { entity } if entity == "Empty"));
}

#[test]
fn EntityDescription___validate___rejects_duplicate_member() {
    let entity = EntityDescription::new(
        "User",
        vec![
            MemberDescription::new("Id", "int").key(),
            MemberDescription::new("Id", "string"),
        ],
    );

    let err = entity.validate().unwrap_err();

    assert!(matches!(
        err,
        GenerateError::DuplicateMember { entity, member } if entity == "User" && member == "Id"
    ));
}

#[test]
fn EntityDescription___validate___rejects_invalid_entity_name() {
    let entity = EntityDescription::new("User Profile", vec![MemberDescription::new("Id", "int")]);

    assert!(matches!(
        entity.validate(),
        Err(GenerateError::InvalidIdentifier { .. })
    ));
}

#[test]
fn EntityDescription___validate___rejects_invalid_member_name() {
    let entity = EntityDescription::new("User", vec![MemberDescription::new("first-name", "string")]);

    assert!(matches!(
        entity.validate(),
        Err(GenerateError::InvalidIdentifier { name, .. }) if name == "first-name"
    ));
}

#[test]
fn EntityDescription___validate___does_not_require_keys() {
    let entity = EntityDescription::new("Log", vec![MemberDescription::new("Line", "string")]);

    assert!(entity.validate().is_ok());
}

#[test]
fn MemberDescription___new___defaults_to_non_key_both() {
    let member = MemberDescription::new("Name", "string");

    assert!(!member.is_key);
    assert_eq!(member.role, MemberRole::Both);
}
