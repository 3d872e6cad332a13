//! # stencil
//!
//! Runtime support for code generated by the stencil generators.
//!
//! Generated code refers to this crate through the configured runtime path
//! (`::stencil` by default):
//! - API artifacts build repositories on [`KeyedStore`], report missing
//!   entities with [`NotFound`], and register themselves in a
//!   [`ServiceRegistry`]
//! - mapping artifacts are produced for every [`Mappings::register`] call
//!   site found in a crate
//! - handler artifacts are produced for every struct marked [`handler`]
//!
//! ## Quick Start
//!
//! ```ignore
//! use stencil::prelude::*;
//!
//! include!(concat!(env!("OUT_DIR"), "/user_api.generated.rs"));
//! include!(concat!(env!("OUT_DIR"), "/repositories.generated.rs"));
//!
//! let mut services = ServiceRegistry::new();
//! add_generated_repositories(&mut services);
//!
//! let users = UserController::new(services.resolve::<UserRepository>()?);
//! users.post(UserModel { id: 1, name: "Ada".into() });
//! ```

mod mappings;
mod services;
mod store;

pub use mappings::Mappings;
pub use services::{MissingService, ServiceRegistry};
pub use store::{KeyedStore, NotFound};

// Re-export macros
pub use stencil_macros::handler;

/// Prelude module for convenient imports.
///
/// Use `use stencil::prelude::*;` to import the types generated code and
/// hand-written glue around it commonly need.
pub mod prelude {
    pub use crate::{KeyedStore, Mappings, NotFound, ServiceRegistry, handler};
}
