//! Operator and punctuator lexing.
//!
//! Greedy: a candidate two-character lexeme is tried first (`:=`, `<>`,
//! `<=`, `>=`, `..`), falling back to the single character when the
//! pair isn't in the dictionary.

use pascalc_util::diagnostic::E_LEXER_UNEXPECTED_CHARACTER;
use pascalc_util::{Token, TokenCategory, TokenKind};

use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes a single operator or punctuator token.
    pub fn lex_operator(&mut self) -> Token {
        let first = self.cursor.current_char();
        let second = self.cursor.peek_char(1);
        let pair: String = [first, second].iter().collect();

        if self.dictionary.contains(&pair) {
            self.cursor.advance();
            self.cursor.advance();
            return self.dictionary_token(&pair);
        }

        let single = first.to_string();
        if self.dictionary.contains(&single) {
            self.cursor.advance();
            return self.dictionary_token(&single);
        }

        self.cursor.advance();
        self.report_unexpected_character(first);
        Token::new(TokenCategory::Unknown, TokenKind::Unreserved, self.token_location(), single)
    }

    fn dictionary_token(&self, lexeme: &str) -> Token {
        let (category, kind, precedence) = self.dictionary.lookup(lexeme);
        Token::new(category, kind, self.token_location(), lexeme).with_precedence(precedence)
    }

    fn report_unexpected_character(&mut self, c: char) {
        let location = self.token_location();
        self.emit_lexical_error(
            E_LEXER_UNEXPECTED_CHARACTER,
            location,
            format!("unexpected character '{}'", c),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pascalc_util::{Handler, TokenKind};

    fn lex(source: &str) -> Token {
        let mut handler = Handler::new();
        let mut lexer = Lexer::new(source, "t.pas", &mut handler);
        lexer.lex_operator()
    }

    #[test]
    fn assign_is_greedily_two_characters() {
        let tok = lex(":=x");
        assert_eq!(tok.kind, TokenKind::Assign);
        assert_eq!(tok.lexeme, ":=");
    }

    #[test]
    fn lone_colon_falls_back_to_one_character() {
        let tok = lex(": x");
        assert_eq!(tok.kind, TokenKind::Colon);
        assert_eq!(tok.lexeme, ":");
    }

    #[test]
    fn not_equal_is_two_characters() {
        let tok = lex("<>");
        assert_eq!(tok.kind, TokenKind::NotEqual);
    }

    #[test]
    fn less_equal_is_two_characters() {
        let tok = lex("<=");
        assert_eq!(tok.kind, TokenKind::LessEqual);
    }

    #[test]
    fn lone_less_than_falls_back() {
        let tok = lex("<x");
        assert_eq!(tok.kind, TokenKind::Less);
    }

    #[test]
    fn dot_dot_is_two_characters() {
        let tok = lex("..");
        assert_eq!(tok.kind, TokenKind::DotDot);
    }

    #[test]
    fn lone_dot_falls_back() {
        let tok = lex(". ");
        assert_eq!(tok.kind, TokenKind::Dot);
    }

    #[test]
    fn unknown_punctuator_reports_an_error() {
        let mut handler = Handler::new();
        let mut lexer = Lexer::new("@", "t.pas", &mut handler);
        let tok = lexer.lex_operator();
        assert_eq!(tok.category, TokenCategory::Unknown);
        assert!(handler.has_errors());
    }
}
