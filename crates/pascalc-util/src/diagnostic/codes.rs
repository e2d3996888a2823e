//! Diagnostic codes for categorizing compiler errors and warnings.
//!
//! Codes give a diagnostic a stable identifier independent of its
//! (human-editable) message text, e.g. `E_LEXER_UNTERMINATED_STRING`.

use std::fmt;

/// A diagnostic code: a letter prefix plus a number, rendered as e.g.
/// `E1001`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct DiagnosticCode {
    prefix: &'static str,
    number: u32,
}

impl DiagnosticCode {
    pub const fn new(prefix: &'static str, number: u32) -> Self {
        Self { prefix, number }
    }

    pub fn prefix(&self) -> &'static str {
        self.prefix
    }

    pub fn number(&self) -> u32 {
        self.number
    }

    pub fn as_str(&self) -> String {
        format!("{}{}", self.prefix, self.number)
    }
}

impl fmt::Display for DiagnosticCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.prefix, self.number)
    }
}

pub const E_LEXER_UNEXPECTED_CHARACTER: DiagnosticCode = DiagnosticCode::new("E", 1001);
pub const E_LEXER_UNTERMINATED_STRING: DiagnosticCode = DiagnosticCode::new("E", 1002);
pub const E_LEXER_UNTERMINATED_COMMENT: DiagnosticCode = DiagnosticCode::new("E", 1003);
pub const E_LEXER_MALFORMED_NUMBER: DiagnosticCode = DiagnosticCode::new("E", 1004);

pub const E_PARSER_UNEXPECTED_TOKEN: DiagnosticCode = DiagnosticCode::new("E", 2001);
pub const E_PARSER_EXPECTED_TOKEN: DiagnosticCode = DiagnosticCode::new("E", 2002);
pub const E_PARSER_INVALID_CONSTANT_EXPR: DiagnosticCode = DiagnosticCode::new("E", 2003);
pub const E_PARSER_UNEXPECTED_EOF: DiagnosticCode = DiagnosticCode::new("E", 2004);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_prefix_and_number() {
        assert_eq!(E_LEXER_UNEXPECTED_CHARACTER.as_str(), "E1001");
    }

    #[test]
    fn codes_with_same_fields_are_equal() {
        assert_eq!(DiagnosticCode::new("E", 1001), E_LEXER_UNEXPECTED_CHARACTER);
    }
}
