//! Registration marker for the mapping generator

/// Entry point for mapping registrations.
///
/// `Mappings::register::<Thing, Stuff>()` does nothing at run time. The
/// mapping generator finds these call sites in the source tree and emits a
/// `MapToStuff` trait implemented for `Thing`, so the call is the single
/// place where a mapping is requested.
///
/// ```
/// #[derive(Default)]
/// struct Stuff {
///     name: String,
/// }
/// struct Thing {
///     name: String,
/// }
///
/// stencil::Mappings::register::<Thing, Stuff>();
/// ```
#[derive(Debug)]
pub enum Mappings {}

impl Mappings {
    /// Request a mapping from `TIn` to `TOut`.
    ///
    /// Generated mappings start from `TOut::default()`.
    pub fn register<TIn, TOut: Default>() {}
}
