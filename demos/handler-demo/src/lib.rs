//! Handlers whose plumbing is generated from `#[handler]` structs

pub mod things;

pub use things::{Pair, PairBase, Thing, ThingBase};
