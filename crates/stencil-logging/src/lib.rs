//! stencil-logging - Tracing to build diagnostics bridge
//!
//! This crate provides:
//! - [`DiagnosticLayer`] tracing layer that forwards events to a sink
//! - [`DiagnosticSink`] type for the sink function
//! - [`cargo_sink`], which turns warnings into `cargo:warning=` lines
//! - Dynamic log level filtering

mod layer;
mod level;
mod sink;

pub use layer::{DiagnosticLayer, init_build_logging};
pub use level::LogLevel;
pub use sink::{DiagnosticSink, SinkManager, cargo_sink, cargo_warning_line};
