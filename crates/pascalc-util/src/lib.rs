//! Shared types for the token model, diagnostics, and constant folding.
//!
//! This crate has no knowledge of how source text is turned into
//! tokens or how tokens are assembled into a program; it only defines
//! the vocabulary the lexer and parser crates share: [`Token`] and its
//! supporting enums, the reserved-word [`Dictionary`], the diagnostic
//! [`Handler`] sink, [`SourceLocation`], and folded [`Constant`] values.

mod constant;
mod dictionary;
mod location;
mod token;

pub mod diagnostic;

pub use constant::Constant;
pub use dictionary::{Dictionary, Entry, UNRESERVED};
pub use location::SourceLocation;
pub use token::{Payload, Token, TokenCategory, TokenKind};

pub use diagnostic::{Diagnostic, DiagnosticBuilder, DiagnosticCode, Handler, Level, SourceSnippet};
