//! Identifier and reserved-word lexing.

use pascalc_util::{Payload, Token};

use crate::unicode::is_ascii_ident_continue;
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes an identifier or reserved word.
    ///
    /// Identifiers are case-insensitive for dictionary purposes: the
    /// collected lexeme is lowercased before the dictionary lookup, but
    /// the token's own `lexeme` field keeps the text as written.
    pub fn lex_identifier(&mut self) -> Token {
        while is_ascii_ident_continue(self.cursor.current_char()) {
            self.cursor.advance();
        }

        let text = self.lexeme();
        let lowercased = text.to_ascii_lowercase();
        let (category, kind, precedence) = self.dictionary.lookup(&lowercased);

        Token::new(category, kind, self.token_location(), text)
            .with_payload(Payload::Text(text.to_string()))
            .with_precedence(precedence)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pascalc_util::{Handler, TokenCategory, TokenKind};

    fn lex_ident(source: &str) -> Token {
        let mut handler = Handler::new();
        let mut lexer = Lexer::new(source, "t.pas", &mut handler);
        lexer.lex_identifier()
    }

    #[test]
    fn plain_identifier_is_unreserved() {
        let tok = lex_ident("counter");
        assert_eq!(tok.category, TokenCategory::Identifier);
        assert_eq!(tok.kind, TokenKind::Unreserved);
        assert_eq!(tok.lexeme, "counter");
    }

    #[test]
    fn keyword_is_recognized_case_insensitively() {
        for spelling in ["begin", "Begin", "BEGIN", "BeGiN"] {
            let tok = lex_ident(spelling);
            assert_eq!(tok.category, TokenCategory::Keyword);
            assert_eq!(tok.kind, TokenKind::Begin);
            assert_eq!(tok.lexeme, spelling);
        }
    }

    #[test]
    fn word_operator_carries_its_precedence() {
        let tok = lex_ident("div");
        assert_eq!(tok.kind, TokenKind::Div);
        assert_eq!(tok.precedence, 20);
    }

    #[test]
    fn underscore_and_digits_continue_an_identifier() {
        let tok = lex_ident("result_42");
        assert_eq!(tok.lexeme, "result_42");
    }
}
