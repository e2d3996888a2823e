//! The reserved-word and operator table.
//!
//! Built once and consulted by the lexer on every identifier and every
//! operator lexeme it collects. Keyword lookup is case-insensitive: the
//! lexer is responsible for lowercasing an identifier lexeme before
//! probing; operator/punctuator lexemes contain no letters and are
//! looked up verbatim.

use crate::token::{TokenCategory, TokenKind};
use rustc_hash::FxHashMap;

/// `(category, kind, precedence)` for a recognized lexeme.
pub type Entry = (TokenCategory, TokenKind, i32);

/// Unknown lexemes are treated as plain identifiers with no binding
/// power.
pub const UNRESERVED: Entry = (TokenCategory::Identifier, TokenKind::Unreserved, -1);

/// Immutable lexeme → `(kind, category, precedence)` table.
pub struct Dictionary {
    entries: FxHashMap<&'static str, Entry>,
}

macro_rules! keyword {
    ($map:expr, $lexeme:expr, $kind:expr) => {
        $map.insert($lexeme, (TokenCategory::Keyword, $kind, -1));
    };
}

macro_rules! operator {
    ($map:expr, $lexeme:expr, $kind:expr, $prec:expr) => {
        $map.insert($lexeme, (TokenCategory::Operator, $kind, $prec));
    };
}

macro_rules! punctuator {
    ($map:expr, $lexeme:expr, $kind:expr) => {
        $map.insert($lexeme, (TokenCategory::Delimiter, $kind, -1));
    };
}

impl Dictionary {
    pub fn new() -> Self {
        let mut entries = FxHashMap::default();

        // Reserved words. Relational/additive/multiplicative words double
        // as operators, so they carry the precedence table from §4.1
        // rather than -1.
        keyword!(entries, "array", TokenKind::Array);
        keyword!(entries, "begin", TokenKind::Begin);
        keyword!(entries, "case", TokenKind::Case);
        keyword!(entries, "const", TokenKind::Const);
        keyword!(entries, "do", TokenKind::Do);
        keyword!(entries, "downto", TokenKind::Downto);
        keyword!(entries, "else", TokenKind::Else);
        keyword!(entries, "end", TokenKind::End);
        keyword!(entries, "file", TokenKind::File);
        keyword!(entries, "for", TokenKind::For);
        keyword!(entries, "forward", TokenKind::Forward);
        keyword!(entries, "function", TokenKind::Function);
        keyword!(entries, "goto", TokenKind::Goto);
        keyword!(entries, "if", TokenKind::If);
        keyword!(entries, "of", TokenKind::Of);
        keyword!(entries, "otherwise", TokenKind::Otherwise);
        keyword!(entries, "packed", TokenKind::Packed);
        keyword!(entries, "procedure", TokenKind::Procedure);
        keyword!(entries, "program", TokenKind::Program);
        keyword!(entries, "read", TokenKind::Read);
        keyword!(entries, "readln", TokenKind::Readln);
        keyword!(entries, "record", TokenKind::Record);
        keyword!(entries, "repeat", TokenKind::Repeat);
        keyword!(entries, "set", TokenKind::Set);
        keyword!(entries, "string", TokenKind::StringType);
        keyword!(entries, "then", TokenKind::Then);
        keyword!(entries, "to", TokenKind::To);
        keyword!(entries, "type", TokenKind::Type);
        keyword!(entries, "until", TokenKind::Until);
        keyword!(entries, "var", TokenKind::Var);
        keyword!(entries, "while", TokenKind::While);
        keyword!(entries, "with", TokenKind::With);
        keyword!(entries, "write", TokenKind::Write);
        keyword!(entries, "writeln", TokenKind::Writeln);

        // Word-shaped operators (precedence 2, 10, 20, 40 per §4.1).
        operator!(entries, "in", TokenKind::In, 2);
        operator!(entries, "or", TokenKind::Or, 10);
        operator!(entries, "xor", TokenKind::Xor, 10);
        operator!(entries, "div", TokenKind::Div, 20);
        operator!(entries, "mod", TokenKind::Mod, 20);
        operator!(entries, "shl", TokenKind::Shl, 20);
        operator!(entries, "shr", TokenKind::Shr, 20);
        operator!(entries, "and", TokenKind::And, 20);
        operator!(entries, "not", TokenKind::Not, 40);

        // Punctuators (no binding power).
        punctuator!(entries, "(", TokenKind::LParen);
        punctuator!(entries, ")", TokenKind::RParen);
        punctuator!(entries, "[", TokenKind::LBracket);
        punctuator!(entries, "]", TokenKind::RBracket);
        punctuator!(entries, ",", TokenKind::Comma);
        punctuator!(entries, ";", TokenKind::Semicolon);
        punctuator!(entries, ":", TokenKind::Colon);
        punctuator!(entries, ":=", TokenKind::Assign);
        punctuator!(entries, ".", TokenKind::Dot);
        punctuator!(entries, "..", TokenKind::DotDot);
        punctuator!(entries, "^", TokenKind::Caret);

        // Symbolic operators.
        operator!(entries, "+", TokenKind::Plus, 10);
        operator!(entries, "-", TokenKind::Minus, 10);
        operator!(entries, "*", TokenKind::Star, 20);
        operator!(entries, "/", TokenKind::Slash, 20);
        operator!(entries, "=", TokenKind::Equal, 2);
        operator!(entries, "<>", TokenKind::NotEqual, 2);
        operator!(entries, "<", TokenKind::Less, 2);
        operator!(entries, "<=", TokenKind::LessEqual, 2);
        operator!(entries, ">", TokenKind::Greater, 2);
        operator!(entries, ">=", TokenKind::GreaterEqual, 2);

        Self { entries }
    }

    /// Looks up a lexeme, returning `UNRESERVED` if it is not a keyword
    /// or operator/punctuator.
    pub fn lookup(&self, lexeme: &str) -> Entry {
        self.entries.get(lexeme).copied().unwrap_or(UNRESERVED)
    }

    /// True if `lexeme` has a dictionary entry. Used by the lexer to
    /// probe a candidate two-character operator before falling back to
    /// a one-character one.
    pub fn contains(&self, lexeme: &str) -> bool {
        self.entries.contains_key(lexeme)
    }
}

impl Default for Dictionary {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_lexeme_is_unreserved_identifier() {
        let dict = Dictionary::new();
        assert_eq!(dict.lookup("counter"), UNRESERVED);
    }

    #[test]
    fn keyword_lookup_is_exact_on_lowercase_key() {
        let dict = Dictionary::new();
        let (category, kind, prec) = dict.lookup("begin");
        assert_eq!(category, TokenCategory::Keyword);
        assert_eq!(kind, TokenKind::Begin);
        assert_eq!(prec, -1);
    }

    #[test]
    fn relational_operators_share_precedence_two() {
        let dict = Dictionary::new();
        for lexeme in ["=", "<>", "<", "<=", ">", ">=", "in"] {
            assert_eq!(dict.lookup(lexeme).2, 2, "lexeme {lexeme}");
        }
    }

    #[test]
    fn additive_operators_share_precedence_ten() {
        let dict = Dictionary::new();
        for lexeme in ["+", "-", "or", "xor"] {
            assert_eq!(dict.lookup(lexeme).2, 10, "lexeme {lexeme}");
        }
    }

    #[test]
    fn multiplicative_operators_share_precedence_twenty() {
        let dict = Dictionary::new();
        for lexeme in ["*", "/", "div", "mod", "shl", "shr", "and"] {
            assert_eq!(dict.lookup(lexeme).2, 20, "lexeme {lexeme}");
        }
    }

    #[test]
    fn unary_not_has_precedence_forty() {
        let dict = Dictionary::new();
        assert_eq!(dict.lookup("not").2, 40);
    }

    #[test]
    fn assignment_and_punctuation_are_non_operators() {
        let dict = Dictionary::new();
        assert_eq!(dict.lookup(":=").2, -1);
        assert_eq!(dict.lookup(";").2, -1);
    }

    #[test]
    fn two_character_operators_are_contained() {
        let dict = Dictionary::new();
        for lexeme in [":=", "<>", "<=", ">=", ".."] {
            assert!(dict.contains(lexeme), "missing {lexeme}");
        }
    }
}
