//! Name-based member matching for mapping generation.

use crate::model::{MemberAccess, MemberPair};
use crate::resolver::{MemberInfo, MemberKind};
use std::collections::HashSet;

impl From<MemberKind> for MemberAccess {
    fn from(kind: MemberKind) -> Self {
        match kind {
            MemberKind::Field => MemberAccess::Field,
            MemberKind::Getter => MemberAccess::Getter,
            MemberKind::Setter => MemberAccess::Setter,
        }
    }
}

/// Pair every readable source member with the writable destination member of
/// the same name.
///
/// Names compare exactly. Pairs follow source declaration order; when a name
/// is reachable through more than one member, the first declared wins on
/// either side. Member types are not compared.
pub fn match_members(source: &[MemberInfo], dest: &[MemberInfo]) -> Vec<MemberPair> {
    let mut seen = HashSet::new();

    source
        .iter()
        .filter(|s| s.is_readable() && seen.insert(s.name.as_str()))
        .filter_map(|s| {
            dest.iter()
                .find(|d| d.is_writable() && d.name == s.name)
                .map(|d| MemberPair {
                    source: s.name.clone(),
                    source_access: s.kind.into(),
                    dest: d.name.clone(),
                    dest_access: d.kind.into(),
                })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    #![allow(non_snake_case)]

    use super::*;
    use crate::resolver::Visibility;
    use crate::test_support::{field, getter, private_field, setter};
    use proptest::prelude::*;

    fn names(pairs: &[MemberPair]) -> Vec<&str> {
        pairs.iter().map(|p| p.source.as_str()).collect()
    }

    #[test]
    fn match_members___identical_sets___pairs_all_in_source_order() {
        let source = vec![field("Name", "String"), field("Count", "i32")];
        let dest = vec![field("Count", "i32"), field("Name", "String")];

        let pairs = match_members(&source, &dest);

        assert_eq!(names(&pairs), vec!["Name", "Count"]);
        assert!(pairs.iter().all(|p| p.source == p.dest));
    }

    #[test]
    fn match_members___names_are_case_sensitive() {
        let source = vec![field("name", "String")];
        let dest = vec![field("Name", "String")];

        assert!(match_members(&source, &dest).is_empty());
    }

    #[test]
    fn match_members___type_mismatch___still_pairs() {
        let source = vec![field("size", "i32")];
        let dest = vec![field("size", "String")];

        assert_eq!(match_members(&source, &dest).len(), 1);
    }

    #[test]
    fn match_members___private_members___are_excluded() {
        let source = vec![private_field("secret", "String"), field("open", "String")];
        let dest = vec![field("secret", "String"), field("open", "String")];

        assert_eq!(names(&match_members(&source, &dest)), vec!["open"]);
    }

    #[test]
    fn match_members___getter_to_setter___records_access() {
        let source = vec![getter("size", "i32")];
        let dest = vec![setter("size", "i32")];

        let pairs = match_members(&source, &dest);

        assert_eq!(
            pairs,
            vec![MemberPair {
                source: "size".to_string(),
                source_access: MemberAccess::Getter,
                dest: "size".to_string(),
                dest_access: MemberAccess::Setter,
            }]
        );
    }

    #[test]
    fn match_members___setter_only_source___is_not_readable() {
        let source = vec![setter("size", "i32")];
        let dest = vec![field("size", "i32")];

        assert!(match_members(&source, &dest).is_empty());
    }

    #[test]
    fn match_members___getter_only_dest___is_not_writable() {
        let source = vec![field("size", "i32")];
        let dest = vec![getter("size", "i32")];

        assert!(match_members(&source, &dest).is_empty());
    }

    #[test]
    fn match_members___first_writable_dest_wins() {
        let source = vec![field("size", "i32")];
        let dest = vec![setter("size", "i32"), field("size", "i32")];

        let pairs = match_members(&source, &dest);

        assert_eq!(pairs.len(), 1);
        assert_eq!(pairs[0].dest_access, MemberAccess::Setter);
    }

    #[test]
    fn match_members___is_not_commutative() {
        let a = vec![field("x", "i32"), getter("y", "i32")];
        let b = vec![field("x", "i32"), field("y", "i32")];

        assert_eq!(names(&match_members(&a, &b)), vec!["x", "y"]);
        assert_eq!(names(&match_members(&b, &a)), vec!["x"]);
    }

    fn arb_member() -> impl Strategy<Value = MemberInfo> {
        (
            prop::sample::select(vec!["a", "b", "c", "d", "e"]),
            prop::sample::select(vec![
                Visibility::Public,
                Visibility::Restricted,
                Visibility::Private,
            ]),
            prop::sample::select(vec![MemberKind::Field, MemberKind::Getter, MemberKind::Setter]),
        )
            .prop_map(|(name, visibility, kind)| MemberInfo {
                name: name.to_string(),
                type_name: "i32".to_string(),
                visibility,
                kind,
                stored: kind == MemberKind::Field,
            })
    }

    proptest! {
        #[test]
        fn match_members___equals_readable_writable_name_intersection(
            source in prop::collection::vec(arb_member(), 0..8),
            dest in prop::collection::vec(arb_member(), 0..8),
        ) {
            let pairs = match_members(&source, &dest);

            let mut expected: Vec<&str> = Vec::new();
            for s in source.iter().filter(|s| s.is_readable()) {
                let writable = dest.iter().any(|d| d.is_writable() && d.name == s.name);
                if writable && !expected.contains(&s.name.as_str()) {
                    expected.push(s.name.as_str());
                }
            }

            prop_assert_eq!(names(&pairs), expected);
            prop_assert!(pairs.iter().all(|p| p.source == p.dest));
        }
    }
}
