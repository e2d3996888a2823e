//! Diagnostics: the shared error/warning sink used by the lexer, parser,
//! and driver.
//!
//! The lexer and parser never panic or abort on malformed input; they
//! call into a `Handler` to record a `Diagnostic` and then keep going,
//! so that one pass over a source file can surface more than one
//! problem. The driver inspects `Handler::has_errors()` after each phase
//! to decide whether to continue.

mod builder;
mod codes;

pub use builder::{DiagnosticBuilder, SourceSnippet};
pub use codes::*;

use crate::location::SourceLocation;
use std::fmt;

/// Severity of a diagnostic.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Level {
    Error,
    Warning,
    Note,
    Help,
}

impl Level {
    pub fn is_error(&self) -> bool {
        matches!(self, Level::Error)
    }

    pub fn name(&self) -> &'static str {
        match self {
            Level::Error => "error",
            Level::Warning => "warning",
            Level::Note => "note",
            Level::Help => "help",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A single diagnostic message, with an optional source location, an
/// optional stable code, and any number of attached notes/help text.
#[derive(Clone, Debug)]
pub struct Diagnostic {
    pub level: Level,
    pub message: String,
    pub location: Option<SourceLocation>,
    pub code: Option<DiagnosticCode>,
    pub notes: Vec<String>,
    pub help: Vec<String>,
    /// Overrides the rendered category label (e.g. "Token Error" from
    /// the lexer, "Syntax Error" from the parser) in place of the
    /// generic `Level` name. `None` falls back to `self.level`.
    pub component: Option<&'static str>,
}

impl Diagnostic {
    pub fn new(level: Level, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
            location: None,
            code: None,
            notes: Vec::new(),
            help: Vec::new(),
            component: None,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(Level::Error, message)
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(Level::Warning, message)
    }

    fn label(&self) -> String {
        match self.component {
            Some(c) => c.to_string(),
            None => self.level.to_string(),
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.location {
            Some(loc) => write!(f, "{}: {}: {}", loc, self.label(), self.message),
            None => write!(f, "{}: {}", self.label(), self.message),
        }
    }
}

/// Collects diagnostics emitted during lexing, parsing, or (if supported
/// later) semantic analysis.
///
/// A `Handler` never aborts the pass that reports to it; callers decide
/// when to stop based on [`Handler::has_errors`].
#[derive(Default)]
pub struct Handler {
    diagnostics: Vec<Diagnostic>,
    error_count: usize,
    warning_count: usize,
}

impl Handler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn emit_diagnostic(&mut self, diagnostic: Diagnostic) {
        match diagnostic.level {
            Level::Error => self.error_count += 1,
            Level::Warning => self.warning_count += 1,
            Level::Note | Level::Help => {}
        }
        self.diagnostics.push(diagnostic);
    }

    pub fn build_error(&mut self, location: SourceLocation, message: impl Into<String>) {
        let mut diag = Diagnostic::error(message);
        diag.location = Some(location);
        self.emit_diagnostic(diag);
    }

    pub fn build_warning(&mut self, location: SourceLocation, message: impl Into<String>) {
        let mut diag = Diagnostic::warning(message);
        diag.location = Some(location);
        self.emit_diagnostic(diag);
    }

    pub fn has_errors(&self) -> bool {
        self.error_count > 0
    }

    pub fn error_count(&self) -> usize {
        self.error_count
    }

    pub fn warning_count(&self) -> usize {
        self.warning_count
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    pub fn clear(&mut self) {
        self.diagnostics.clear();
        self.error_count = 0;
        self.warning_count = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::rc::Rc;

    fn loc() -> SourceLocation {
        SourceLocation::new(Rc::from("t.pas"), 1, 0)
    }

    #[test]
    fn counts_errors_and_warnings_separately() {
        let mut handler = Handler::new();
        handler.build_error(loc(), "bad token");
        handler.build_warning(loc(), "unused label");
        assert_eq!(handler.error_count(), 1);
        assert_eq!(handler.warning_count(), 1);
        assert!(handler.has_errors());
    }

    #[test]
    fn clear_resets_counts() {
        let mut handler = Handler::new();
        handler.build_error(loc(), "bad token");
        handler.clear();
        assert!(!handler.has_errors());
        assert!(handler.diagnostics().is_empty());
    }

    #[test]
    fn display_includes_location_and_level() {
        let diag = Diagnostic::error("oops");
        assert_eq!(format!("{}", diag), "error: oops");
    }
}
