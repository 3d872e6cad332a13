//! Composition root targeted by the generated bootstrap

use std::any::{Any, TypeId, type_name};
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;
use thiserror::Error;

/// Requested service type was never registered.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("no service registered for {type_name}")]
pub struct MissingService {
    pub type_name: &'static str,
}

/// Type-keyed registry of shared singletons.
///
/// One instance per type; registering a type again replaces it.
#[derive(Default)]
pub struct ServiceRegistry {
    services: HashMap<TypeId, Arc<dyn Any + Send + Sync>>,
    names: HashMap<TypeId, &'static str>,
}

impl ServiceRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `service` as the singleton for its type.
    pub fn add_singleton<T>(&mut self, service: T) -> &mut Self
    where
        T: Any + Send + Sync,
    {
        self.add_shared(Arc::new(service))
    }

    /// Register an already shared instance.
    pub fn add_shared<T>(&mut self, service: Arc<T>) -> &mut Self
    where
        T: Any + Send + Sync,
    {
        let id = TypeId::of::<T>();
        self.services.insert(id, service);
        self.names.insert(id, type_name::<T>());
        self
    }

    pub fn get<T>(&self) -> Option<Arc<T>>
    where
        T: Any + Send + Sync,
    {
        self.services
            .get(&TypeId::of::<T>())
            .cloned()
            .and_then(|service| service.downcast::<T>().ok())
    }

    /// Like [`get`](Self::get), but a missing service is an error.
    pub fn resolve<T>(&self) -> Result<Arc<T>, MissingService>
    where
        T: Any + Send + Sync,
    {
        self.get::<T>().ok_or(MissingService {
            type_name: type_name::<T>(),
        })
    }

    pub fn contains<T: Any>(&self) -> bool {
        self.services.contains_key(&TypeId::of::<T>())
    }

    pub fn len(&self) -> usize {
        self.services.len()
    }

    pub fn is_empty(&self) -> bool {
        self.services.is_empty()
    }
}

impl fmt::Debug for ServiceRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut names: Vec<_> = self.names.values().collect();
        names.sort();
        f.debug_struct("ServiceRegistry")
            .field("services", &names)
            .finish()
    }
}

#[cfg(test)]
#[path = "services/services_tests.rs"]
mod services_tests;
