#![allow(non_snake_case)]

use super::*;
use crate::KeyedStore;

#[derive(Default)]
struct UserRepository {
    entries: KeyedStore<i32, String>,
}

#[derive(Debug)]
struct Clock(u64);

#[test]
fn ServiceRegistry___add_singleton___shares_one_instance() {
    let mut services = ServiceRegistry::new();
    services.add_singleton(UserRepository::default());

    let first = services.get::<UserRepository>().unwrap();
    first.entries.insert(1, "ada".to_string());
    let second = services.get::<UserRepository>().unwrap();

    assert!(Arc::ptr_eq(&first, &second));
    assert_eq!(second.entries.get(&1), Some("ada".to_string()));
}

#[test]
fn ServiceRegistry___add_singleton___chains() {
    let mut services = ServiceRegistry::new();

    services
        .add_singleton(UserRepository::default())
        .add_singleton(Clock(3));

    assert_eq!(services.len(), 2);
    assert!(services.contains::<Clock>());
    assert_eq!(services.get::<Clock>().map(|c| c.0), Some(3));
}

#[test]
fn ServiceRegistry___add_singleton___same_type___replaces() {
    let mut services = ServiceRegistry::new();

    services.add_singleton(Clock(1)).add_singleton(Clock(2));

    assert_eq!(services.len(), 1);
    assert_eq!(services.get::<Clock>().map(|c| c.0), Some(2));
}

#[test]
fn ServiceRegistry___resolve___missing___names_type() {
    let services = ServiceRegistry::new();

    let err = services.resolve::<Clock>().unwrap_err();

    assert!(services.is_empty());
    assert!(err.type_name.ends_with("Clock"));
    assert!(err.to_string().starts_with("no service registered for"));
}

#[test]
fn ServiceRegistry___debug___lists_registered_types() {
    let mut services = ServiceRegistry::new();
    services.add_singleton(Clock(1));

    let debug = format!("{services:?}");

    assert!(debug.contains("Clock"));
}
