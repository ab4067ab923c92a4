//! Logging Sink
//!
//! Best-effort diagnostics for failures the facade absorbs. The default sink
//! discards everything so a cache works without any logging configured.

use tracing::error;

// == Severity ==
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Absorbed backend failure
    Alert,
    /// A single entry of a batch operation failed
    Error,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Alert => "alert",
            Severity::Error => "error",
        }
    }
}

// == Cache Logger ==
/// Receives a message template plus the values for its `{name}` placeholders.
pub trait CacheLogger: Send + Sync {
    fn log(&self, severity: Severity, template: &str, context: &[(&str, &str)]);
}

/// Discards every message.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullLogger;

impl CacheLogger for NullLogger {
    fn log(&self, _severity: Severity, _template: &str, _context: &[(&str, &str)]) {}
}

/// Forwards messages to the `tracing` subscriber.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingLogger;

impl CacheLogger for TracingLogger {
    fn log(&self, severity: Severity, template: &str, context: &[(&str, &str)]) {
        let message = render(template, context);
        error!(severity = severity.as_str(), "{}", message);
    }
}

// == Render ==
/// Replaces each `{name}` in `template` with its value from `context`.
///
/// Placeholders without a matching entry are left as-is.
pub fn render(template: &str, context: &[(&str, &str)]) -> String {
    context
        .iter()
        .fold(template.to_string(), |message, (name, value)| {
            message.replace(&format!("{{{}}}", name), value)
        })
}
