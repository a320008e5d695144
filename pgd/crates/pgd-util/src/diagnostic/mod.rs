//! Diagnostic module - Error and warning reporting infrastructure.
//!
//! Configuration diagnostics are anchored to a 1-based line number, which is
//! the only position the lexer tracks.
//!
//! # Examples
//!
//! ```
//! use pgd_util::diagnostic::{Diagnostic, DiagnosticBuilder, DiagnosticCode, Handler};
//!
//! let mut handler = Handler::new();
//! handler.emit_diagnostic(Diagnostic::warning("empty pool", 12));
//!
//! DiagnosticBuilder::error("unterminated string")
//!     .line(4)
//!     .code(DiagnosticCode::E_LEX_UNTERMINATED_STRING)
//!     .with_note("strings must close on a `\"`")
//!     .emit(&mut handler);
//!
//! assert_eq!(handler.error_count(), 1);
//! assert_eq!(handler.warning_count(), 1);
//! ```

mod builder;
mod codes;
mod level;

pub use builder::DiagnosticBuilder;
pub use codes::DiagnosticCode;
pub use level::Level;

use std::fmt;

/// A diagnostic message with severity and location
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Diagnostic {
    /// Diagnostic severity level
    pub level: Level,
    /// Main diagnostic message
    pub message: String,
    /// Line the diagnostic refers to (1-based)
    pub line: u32,
    /// Optional diagnostic code
    pub code: Option<DiagnosticCode>,
    /// Additional notes for context
    pub notes: Vec<String>,
}

impl Diagnostic {
    /// Create a new diagnostic
    pub fn new(level: Level, message: impl Into<String>, line: u32) -> Self {
        Self {
            level,
            message: message.into(),
            line,
            code: None,
            notes: Vec::new(),
        }
    }

    /// Create an error diagnostic
    pub fn error(message: impl Into<String>, line: u32) -> Self {
        Self::new(Level::Error, message, line)
    }

    /// Create a warning diagnostic
    pub fn warning(message: impl Into<String>, line: u32) -> Self {
        Self::new(Level::Warning, message, line)
    }

    /// Set the diagnostic code
    pub fn with_code(mut self, code: DiagnosticCode) -> Self {
        self.code = Some(code);
        self
    }

    /// Add a note to the diagnostic
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }

    /// Render the diagnostic with its notes, one per line.
    ///
    /// ```
    /// use pgd_util::Diagnostic;
    ///
    /// let diag = Diagnostic::error("bad mask", 2).with_note("prefix must be 0-32");
    /// assert_eq!(diag.render(), "line 2: error: bad mask\n  = note: prefix must be 0-32");
    /// ```
    pub fn render(&self) -> String {
        let mut out = self.to_string();
        for note in &self.notes {
            out.push_str("\n  = note: ");
            out.push_str(note);
        }
        out
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.code {
            Some(code) => write!(f, "line {}: {}[{}]: {}", self.line, self.level, code, self.message),
            None => write!(f, "line {}: {}: {}", self.line, self.level, self.message),
        }
    }
}

/// Handler for collecting diagnostics
///
/// The handler is owned by whoever produces the diagnostics (the lexer owns
/// one per input stream), so emission takes `&mut self`.
#[derive(Debug, Default, Clone)]
pub struct Handler {
    diagnostics: Vec<Diagnostic>,
}

impl Handler {
    /// Create a new, empty handler
    pub fn new() -> Self {
        Self::default()
    }

    /// Emit a pre-built diagnostic
    pub fn emit_diagnostic(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    /// Start an error diagnostic at `line`
    pub fn build_error(&self, line: u32, message: impl Into<String>) -> DiagnosticBuilder {
        DiagnosticBuilder::error(message).line(line)
    }

    /// Start a warning diagnostic at `line`
    pub fn build_warning(&self, line: u32, message: impl Into<String>) -> DiagnosticBuilder {
        DiagnosticBuilder::warning(message).line(line)
    }

    /// Check if any errors have been reported
    pub fn has_errors(&self) -> bool {
        self.diagnostics.iter().any(|d| d.level.is_error())
    }

    /// Get the number of errors
    pub fn error_count(&self) -> usize {
        self.diagnostics.iter().filter(|d| d.level.is_error()).count()
    }

    /// Get the number of warnings
    pub fn warning_count(&self) -> usize {
        self.diagnostics.iter().filter(|d| d.level.is_warning()).count()
    }

    /// All diagnostics in emission order
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Remove and return all diagnostics
    pub fn take(&mut self) -> Vec<Diagnostic> {
        std::mem::take(&mut self.diagnostics)
    }

    /// Clear all diagnostics
    pub fn clear(&mut self) {
        self.diagnostics.clear();
    }
}
