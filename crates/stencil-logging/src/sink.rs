//! Diagnostic sink management

use crate::level::LogLevel;
use once_cell::sync::OnceCell;
use parking_lot::RwLock;
use std::sync::atomic::{AtomicU8, Ordering};

/// Sink function for diagnostics
///
/// # Parameters
/// - `level`: Severity of the event
/// - `target`: Log target (module path)
/// - `message`: Rendered message including structured fields
pub type DiagnosticSink = fn(level: LogLevel, target: &str, message: &str);

/// Global sink manager
static SINK_MANAGER: OnceCell<SinkManager> = OnceCell::new();

/// Manager for the diagnostic sink
pub struct SinkManager {
    sink: RwLock<Option<DiagnosticSink>>,
    level: AtomicU8,
}

impl SinkManager {
    /// Create a new sink manager
    pub fn new() -> Self {
        Self {
            sink: RwLock::new(None),
            level: AtomicU8::new(LogLevel::Info as u8),
        }
    }

    /// Get the global sink manager instance
    pub fn global() -> &'static SinkManager {
        SINK_MANAGER.get_or_init(SinkManager::new)
    }

    /// Set the sink
    pub fn set_sink(&self, sink: Option<DiagnosticSink>) {
        let mut guard = self.sink.write();
        *guard = sink;
    }

    /// Get the current sink
    pub fn sink(&self) -> Option<DiagnosticSink> {
        *self.sink.read()
    }

    /// Set the log level
    pub fn set_level(&self, level: LogLevel) {
        self.level.store(level as u8, Ordering::SeqCst);
    }

    /// Get the current log level
    pub fn level(&self) -> LogLevel {
        LogLevel::from_u8(self.level.load(Ordering::SeqCst))
    }

    /// Check if a log level is enabled
    pub fn is_enabled(&self, level: LogLevel) -> bool {
        level != LogLevel::Off && level >= self.level()
    }

    /// Invoke the sink if set and level is enabled
    pub fn emit(&self, level: LogLevel, target: &str, message: &str) {
        if !self.is_enabled(level) {
            return;
        }

        if let Some(sink) = self.sink() {
            sink(level, target, message);
        }
    }
}

impl Default for SinkManager {
    fn default() -> Self {
        Self::new()
    }
}

/// Render a diagnostic as a single `cargo:warning=` line.
///
/// Cargo reads one directive per line, so embedded newlines are flattened.
pub fn cargo_warning_line(level: LogLevel, message: &str) -> String {
    let flat = message.lines().collect::<Vec<_>>().join(" ");
    match level {
        LogLevel::Error => format!("cargo:warning=error: {flat}"),
        _ => format!("cargo:warning={flat}"),
    }
}

/// Sink for build scripts.
///
/// Warnings and errors become `cargo:warning=` lines on stdout so cargo shows
/// them; everything else goes to stderr, which cargo keeps in the build
/// script's output file.
pub fn cargo_sink(level: LogLevel, target: &str, message: &str) {
    if level >= LogLevel::Warn {
        println!("{}", cargo_warning_line(level, message));
    } else {
        eprintln!("[{level}] {target}: {message}");
    }
}
