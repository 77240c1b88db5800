//! Diagnostic side channel.
//!
//! Renderers never fail and never write errors into their output. Every
//! recoverable defect (missing field, unsupported block type, malformed row)
//! is reported through a [`DiagnosticSink`] so callers decide the logging
//! policy. The default sink forwards to the `log` crate.

use std::fmt;

/// How severe a diagnostic is.
///
/// `Error` is reserved for the single structural failure of a whole render;
/// everything recoverable is a `Warning`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Severity {
    /// Recoverable block-level defect
    Warning,
    /// Structural failure of the whole document
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Warning => write!(f, "warning"),
            Severity::Error => write!(f, "error"),
        }
    }
}

/// A single non-fatal report produced while rendering.
#[derive(Debug, Clone)]
pub struct Diagnostic {
    /// Severity of the report
    pub severity: Severity,
    /// Human-readable description of the defect
    pub message: String,
    /// Where it happened, usually the block type tag
    pub context: Option<String>,
}

impl Diagnostic {
    /// Create a warning-severity diagnostic.
    pub fn warning(message: impl Into<String>, context: Option<&str>) -> Self {
        Self {
            severity: Severity::Warning,
            message: message.into(),
            context: context.map(str::to_string),
        }
    }

    /// Create an error-severity diagnostic.
    pub fn error(message: impl Into<String>, context: Option<&str>) -> Self {
        Self {
            severity: Severity::Error,
            message: message.into(),
            context: context.map(str::to_string),
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.context {
            Some(context) => write!(f, "{}: {}", context, self.message),
            None => write!(f, "{}", self.message),
        }
    }
}

/// Receives diagnostics emitted during rendering.
pub trait DiagnosticSink {
    /// Record one diagnostic.
    fn emit(&mut self, diagnostic: Diagnostic);
}

/// Sink that forwards diagnostics to the `log` crate.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogSink;

impl DiagnosticSink for LogSink {
    fn emit(&mut self, diagnostic: Diagnostic) {
        match diagnostic.severity {
            Severity::Warning => log::warn!("{}", diagnostic),
            Severity::Error => log::error!("{}", diagnostic),
        }
    }
}

/// Sink that collects diagnostics in memory.
///
/// Used by tests and by callers that surface diagnostics through their own
/// reporting channel.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    /// Collected diagnostics, in emission order
    pub diagnostics: Vec<Diagnostic>,
}

impl MemorySink {
    /// Create an empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether anything was emitted.
    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    /// Number of diagnostics at the given severity.
    pub fn count(&self, severity: Severity) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| d.severity == severity)
            .count()
    }
}

impl DiagnosticSink for MemorySink {
    fn emit(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_display() {
        assert_eq!(Severity::Warning.to_string(), "warning");
        assert_eq!(Severity::Error.to_string(), "error");
    }

    #[test]
    fn test_diagnostic_display_with_context() {
        let d = Diagnostic::warning("missing url", Some("image"));
        assert_eq!(d.to_string(), "image: missing url");
    }

    #[test]
    fn test_diagnostic_display_without_context() {
        let d = Diagnostic::error("invalid document", None);
        assert_eq!(d.to_string(), "invalid document");
    }

    #[test]
    fn test_memory_sink_collects_in_order() {
        let mut sink = MemorySink::new();
        sink.emit(Diagnostic::warning("first", None));
        sink.emit(Diagnostic::error("second", Some("table")));

        assert_eq!(sink.diagnostics.len(), 2);
        assert_eq!(sink.diagnostics[0].message, "first");
        assert_eq!(sink.diagnostics[1].severity, Severity::Error);
        assert_eq!(sink.count(Severity::Warning), 1);
        assert_eq!(sink.count(Severity::Error), 1);
    }

    #[test]
    fn test_memory_sink_is_empty() {
        let mut sink = MemorySink::new();
        assert!(sink.is_empty());
        sink.emit(Diagnostic::warning("w", None));
        assert!(!sink.is_empty());
    }
}
