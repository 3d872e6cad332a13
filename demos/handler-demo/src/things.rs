use stencil::handler;
use uuid::Uuid;

/// Handled members are the `pub(crate)` ones; the rest start at their defaults
#[handler]
#[derive(Debug, Clone, Default)]
pub struct Thing {
    pub(crate) name: String,
    pub(crate) code: String,
    pub id: Uuid,
    pub enabled: bool,
}

impl ThingBase for Thing {
    fn handle_name(&self, value: &String) -> String {
        value.to_lowercase()
    }

    fn handle_code(&self, value: &String) -> String {
        value.repeat(3)
    }
}

#[handler]
#[derive(Debug, Clone, Copy)]
pub struct Pair {
    pub(crate) left: i32,
    pub(crate) right: i32,
}

impl PairBase for Pair {
    fn handle_left(&self, value: &i32) -> String {
        format!("left={value}")
    }

    fn handle_right(&self, value: &i32) -> String {
        format!("right={}", value + self.left)
    }
}

include!(concat!(env!("OUT_DIR"), "/thing_handler.generated.rs"));
include!(concat!(env!("OUT_DIR"), "/pair_handler.generated.rs"));
