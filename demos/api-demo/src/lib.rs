//! Repositories, models and controllers generated from `api.json`

pub mod users {
    include!(concat!(env!("OUT_DIR"), "/user_api.generated.rs"));
}

pub mod orders {
    include!(concat!(env!("OUT_DIR"), "/order_line_api.generated.rs"));
}

pub use orders::{OrderLineController, OrderLineModel, OrderLineRepository};
pub use users::{UserController, UserModel, UserRepository};

mod bootstrap {
    use crate::{OrderLineRepository, UserRepository};

    include!(concat!(env!("OUT_DIR"), "/repositories.generated.rs"));
}

pub use bootstrap::add_generated_repositories;

/// A service registry holding every generated repository
pub fn services() -> stencil::ServiceRegistry {
    let mut services = stencil::ServiceRegistry::new();
    add_generated_repositories(&mut services);
    services
}
