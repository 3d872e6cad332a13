//! Mapping extensions generated from the registrations in [`configure`]

pub mod models;

use crate::models::{Junk, Stuff, Thing};
use stencil::Mappings;

include!(concat!(env!("OUT_DIR"), "/mappings.generated.rs"));

pub use mapping_extensions_crate_models::{MapToJunk, MapToStuff, MapToThing};

/// Declares which conversions get a `map_to_*` method
pub fn configure() {
    Mappings::register::<Thing, Stuff>();
    Mappings::register::<Stuff, Junk>();
    Mappings::register::<Junk, Thing>();

    // Registering a pair twice yields one mapping
    Mappings::register::<Thing, Stuff>();
}
