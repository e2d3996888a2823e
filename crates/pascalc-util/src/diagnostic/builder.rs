//! Diagnostic builder for fluent diagnostic construction.
//!
//! This module provides the [`DiagnosticBuilder`] type for constructing
//! diagnostics with a fluent API, including a rendered source snippet.

use super::{Diagnostic, DiagnosticCode, Handler, Level};
use crate::location::SourceLocation;

/// A single source line rendered with a caret underline, for attaching
/// to a diagnostic.
#[derive(Clone, Debug)]
pub struct SourceSnippet {
    pub line: String,
    pub line_number: u32,
    pub start_column: u32,
    pub end_column: u32,
    pub label: Option<String>,
}

impl SourceSnippet {
    pub fn new(line: impl Into<String>, line_number: u32, start_column: u32, end_column: u32) -> Self {
        Self {
            line: line.into(),
            line_number,
            start_column,
            end_column,
            label: None,
        }
    }

    /// A snippet pointing at a single column (e.g. an unexpected character).
    pub fn point(line: impl Into<String>, line_number: u32, column: u32) -> Self {
        Self::new(line, line_number, column, column + 1)
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Renders the source line followed by a caret underline, e.g.
    /// ```text
    ///     x := 1 +;
    ///             ^ expected expression
    /// ```
    pub fn format(&self) -> String {
        let gutter = " ".repeat(self.start_column as usize);
        let width = (self.end_column.saturating_sub(self.start_column)).max(1) as usize;
        let carets = "^".repeat(width);
        match &self.label {
            Some(label) => format!("{}\n{}{} {}", self.line, gutter, carets, label),
            None => format!("{}\n{}{}", self.line, gutter, carets),
        }
    }
}

/// Fluent builder for a [`Diagnostic`].
pub struct DiagnosticBuilder {
    level: Level,
    message: String,
    location: Option<SourceLocation>,
    code: Option<DiagnosticCode>,
    notes: Vec<String>,
    help: Vec<String>,
    snippet: Option<SourceSnippet>,
    component: Option<&'static str>,
}

impl DiagnosticBuilder {
    pub fn new(level: Level, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
            location: None,
            code: None,
            notes: Vec::new(),
            help: Vec::new(),
            snippet: None,
            component: None,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(Level::Error, message)
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(Level::Warning, message)
    }

    pub fn code(mut self, code: DiagnosticCode) -> Self {
        self.code = Some(code);
        self
    }

    pub fn location(mut self, location: SourceLocation) -> Self {
        self.location = Some(location);
        self
    }

    pub fn note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }

    pub fn help(mut self, help: impl Into<String>) -> Self {
        self.help.push(help.into());
        self
    }

    pub fn snippet(mut self, snippet: SourceSnippet) -> Self {
        self.snippet = Some(snippet);
        self
    }

    /// Overrides the rendered category label, e.g. `"Token Error"` or
    /// `"Syntax Error"`, in place of the generic level name.
    pub fn component(mut self, component: &'static str) -> Self {
        self.component = Some(component);
        self
    }

    pub fn build(self) -> Diagnostic {
        let mut message = self.message;
        if let Some(snippet) = &self.snippet {
            message = format!("{}\n{}", message, snippet.format());
        }
        Diagnostic {
            level: self.level,
            message,
            location: self.location,
            code: self.code,
            notes: self.notes,
            help: self.help,
            component: self.component,
        }
    }

    pub fn emit(self, handler: &mut Handler) {
        handler.emit_diagnostic(self.build());
    }
}
