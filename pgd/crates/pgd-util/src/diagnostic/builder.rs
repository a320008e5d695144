//! Diagnostic builder for fluent diagnostic construction.

use super::{Diagnostic, DiagnosticCode, Handler, Level};

/// Builder for constructing diagnostics with a fluent API
///
/// # Examples
///
/// ```
/// use pgd_util::diagnostic::{DiagnosticBuilder, DiagnosticCode};
///
/// let diag = DiagnosticBuilder::error("malformed network `10.0.0.0/33`")
///     .line(5)
///     .code(DiagnosticCode::E_LEX_INVALID_CIDR)
///     .with_note("prefix length must be between 0 and 32")
///     .build();
///
/// assert_eq!(diag.line, 5);
/// assert_eq!(diag.notes.len(), 1);
/// ```
#[derive(Clone, Debug)]
#[must_use = "a diagnostic builder does nothing until built or emitted"]
pub struct DiagnosticBuilder {
    diagnostic: Diagnostic,
}

impl DiagnosticBuilder {
    /// Create a builder for a diagnostic of the given level
    pub fn new(level: Level, message: impl Into<String>) -> Self {
        Self {
            diagnostic: Diagnostic::new(level, message, 1),
        }
    }

    /// Create a builder for an error
    pub fn error(message: impl Into<String>) -> Self {
        Self::new(Level::Error, message)
    }

    /// Create a builder for a warning
    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(Level::Warning, message)
    }

    /// Set the line (1-based)
    pub fn line(mut self, line: u32) -> Self {
        self.diagnostic.line = line;
        self
    }

    /// Set the diagnostic code
    pub fn code(mut self, code: DiagnosticCode) -> Self {
        self.diagnostic.code = Some(code);
        self
    }

    /// Add a note
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.diagnostic.notes.push(note.into());
        self
    }

    /// Finish building
    pub fn build(self) -> Diagnostic {
        self.diagnostic
    }

    /// Finish building and hand the diagnostic to `handler`
    pub fn emit(self, handler: &mut Handler) {
        handler.emit_diagnostic(self.diagnostic);
    }
}
