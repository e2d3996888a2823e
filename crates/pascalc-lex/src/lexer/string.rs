//! String and character literal lexing.
//!
//! Both share a single quoted form: `'...'`, with a doubled quote
//! `''` as the only escape (for a literal apostrophe). A literal of
//! length 1 is a `CHAR`; anything longer is a `STRING_LITERAL`; an
//! empty literal `''` standing alone is an error, since there is no
//! length-0 char or string in Pascal.

use pascalc_util::diagnostic::E_LEXER_UNTERMINATED_STRING;
use pascalc_util::{Payload, Token, TokenCategory, TokenKind};

use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes a `'...'`-quoted literal, dispatching to `CHAR` or
    /// `STRING_LITERAL` by its decoded length.
    pub fn lex_quoted(&mut self) -> Token {
        self.cursor.advance(); // opening quote

        let mut content = String::new();
        let mut terminated = false;

        loop {
            if self.cursor.is_at_end() || self.cursor.current_char() == '\n' {
                break;
            }
            if self.cursor.current_char() == '\'' {
                if self.cursor.peek_char(1) == '\'' {
                    content.push('\'');
                    self.cursor.advance();
                    self.cursor.advance();
                    continue;
                }
                self.cursor.advance();
                terminated = true;
                break;
            }
            content.push(self.cursor.current_char());
            self.cursor.advance();
        }

        if !terminated {
            self.report_string_error("unterminated string literal");
        } else if content.is_empty() {
            self.report_string_error("empty quoted literal");
        }

        let text = self.lexeme();
        if content.chars().count() == 1 {
            let byte = content.as_bytes().first().copied().unwrap_or(0);
            Token::new(TokenCategory::Char, TokenKind::Unreserved, self.token_location(), text)
                .with_payload(Payload::Int(byte as i64))
        } else {
            Token::new(TokenCategory::StringLiteral, TokenKind::Unreserved, self.token_location(), text)
                .with_payload(Payload::Text(content))
        }
    }

    fn report_string_error(&mut self, message: impl Into<String>) {
        let location = self.token_location();
        self.emit_lexical_error(E_LEXER_UNTERMINATED_STRING, location, message);
    }
}
