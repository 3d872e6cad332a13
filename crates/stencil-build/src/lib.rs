//! stencil-build - Run the stencil generators from a build script
//!
//! This crate provides:
//! - [`Builder`] to configure inputs and run every generator in one pass
//! - [`Manifest`] for `stencil.toml` files
//! - [`write_artifacts`], which writes generated files and leaves unchanged
//!   ones alone so cargo does not rebuild needlessly
//!
//! # Example
//!
//! In your `build.rs`:
//!
//! ```ignore
//! fn main() -> anyhow::Result<()> {
//!     stencil_build::init_logging();
//!
//!     stencil_build::Builder::new()
//!         .schema("api.json")
//!         .sources("src")
//!         .generate()?;
//!
//!     Ok(())
//! }
//! ```
//!
//! Generated files land in `OUT_DIR`; include them with
//! `include!(concat!(env!("OUT_DIR"), "/user_api.generated.rs"));`.

mod builder;
mod manifest;
mod output;
mod pipeline;

pub use builder::Builder;
pub use manifest::{Inputs, Manifest};
pub use output::{WriteSummary, write_artifacts};
pub use pipeline::{Report, run};
pub use stencil_core::GeneratorConfig;

/// Route generator diagnostics to cargo
///
/// Warnings and errors logged while generating show up as
/// `cargo:warning=` lines in the build output.
pub fn init_logging() {
    stencil_logging::init_build_logging(stencil_logging::LogLevel::Info);
}
