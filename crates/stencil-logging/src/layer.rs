//! Tracing layer that forwards to the diagnostic sink

use crate::level::LogLevel;
use crate::sink::{SinkManager, cargo_sink};
use tracing::field::{Field, Visit};
use tracing::subscriber::Interest;
use tracing::{Event, Subscriber};
use tracing_subscriber::Layer;
use tracing_subscriber::layer::Context;
use tracing_subscriber::registry::LookupSpan;

/// Tracing layer that forwards log events to a [`SinkManager`]
pub struct DiagnosticLayer {
    manager: &'static SinkManager,
}

impl DiagnosticLayer {
    /// Create a new layer using the global sink manager
    pub fn new() -> Self {
        Self {
            manager: SinkManager::global(),
        }
    }
}

impl Default for DiagnosticLayer {
    fn default() -> Self {
        Self::new()
    }
}

impl<S> Layer<S> for DiagnosticLayer
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let metadata = event.metadata();
        let level = LogLevel::from(metadata.level());

        if !self.manager.is_enabled(level) {
            return;
        }

        let mut visitor = MessageVisitor::default();
        event.record(&mut visitor);

        self.manager
            .emit(level, metadata.target(), &visitor.into_message());
    }

    // The level can change at any time, so never let callsites cache a verdict
    fn register_callsite(&self, _metadata: &'static tracing::Metadata<'static>) -> Interest {
        Interest::sometimes()
    }

    fn enabled(&self, metadata: &tracing::Metadata<'_>, _ctx: Context<'_, S>) -> bool {
        self.manager.is_enabled(LogLevel::from(metadata.level()))
    }
}

/// Renders an event as its message followed by `name=value` fields
#[derive(Default)]
struct MessageVisitor {
    message: Option<String>,
    fields: Vec<String>,
}

impl MessageVisitor {
    fn into_message(self) -> String {
        let mut parts = Vec::with_capacity(self.fields.len() + 1);
        parts.extend(self.message);
        parts.extend(self.fields);
        parts.join(" ")
    }
}

impl Visit for MessageVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        if field.name() == "message" {
            self.message = Some(format!("{value:?}"));
        } else {
            self.fields.push(format!("{}={value:?}", field.name()));
        }
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "message" {
            self.message = Some(value.to_string());
        } else {
            self.fields.push(format!("{}={value}", field.name()));
        }
    }
}

/// Set up logging for a build script
///
/// Routes events at `level` and above through [`cargo_sink`], so warnings
/// show up in cargo's output. The layer only becomes the global subscriber
/// if none is set yet.
pub fn init_build_logging(level: LogLevel) {
    use tracing_subscriber::prelude::*;

    let manager = SinkManager::global();
    manager.set_sink(Some(cargo_sink));
    manager.set_level(level);

    let subscriber = tracing_subscriber::registry().with(DiagnosticLayer::new());

    // Ignore error if already set
    let _ = tracing::subscriber::set_global_default(subscriber);
}
