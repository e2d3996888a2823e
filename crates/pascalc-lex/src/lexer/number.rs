//! Numeral lexing: decimal integers, hexadecimal integers (`$`-prefixed),
//! and real numbers with an optional fraction and/or exponent.

use pascalc_util::diagnostic::E_LEXER_MALFORMED_NUMBER;
use pascalc_util::{DiagnosticBuilder, Payload, Token, TokenCategory, TokenKind};

use crate::unicode::{hex_digit_to_value, is_digit_in_base};
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes a numeral starting at the current position: `$`-prefixed
    /// hex, or a decimal integer optionally followed by a fractional
    /// part and/or an exponent.
    pub fn lex_number(&mut self) -> Token {
        if self.cursor.current_char() == '$' {
            return self.lex_hex_integer();
        }

        while self.cursor.current_char().is_ascii_digit() {
            self.cursor.advance();
        }

        let mut is_real = false;

        // A '.' starts a fraction only if followed by a digit; `a..b`
        // must not be mistaken for `a.` followed by `.b`.
        if self.cursor.current_char() == '.' && self.cursor.peek_char(1).is_ascii_digit() {
            is_real = true;
            self.cursor.advance();
            while self.cursor.current_char().is_ascii_digit() {
                self.cursor.advance();
            }
        }

        if matches!(self.cursor.current_char(), 'e' | 'E') {
            let exponent_ok = self.lex_exponent();
            is_real = is_real || exponent_ok;
        }

        let text = self.lexeme();
        if is_real {
            match text.parse::<f64>() {
                Ok(value) => Token::new(TokenCategory::Real, TokenKind::Unreserved, self.token_location(), text)
                    .with_payload(Payload::Float(value)),
                Err(_) => {
                    self.report_malformed_number(text);
                    Token::new(TokenCategory::Real, TokenKind::Unreserved, self.token_location(), text)
                        .with_payload(Payload::Float(0.0))
                }
            }
        } else {
            match text.parse::<i64>() {
                Ok(value) => Token::new(TokenCategory::Integer, TokenKind::Unreserved, self.token_location(), text)
                    .with_payload(Payload::Int(value)),
                Err(_) => {
                    self.report_malformed_number(text);
                    Token::new(TokenCategory::Integer, TokenKind::Unreserved, self.token_location(), text)
                        .with_payload(Payload::Int(0))
                }
            }
        }
    }

    /// Consumes an exponent marker (`e`/`E`, optional sign, digits).
    /// Returns `true` if at least one exponent digit was present;
    /// reports a malformed-number error otherwise.
    fn lex_exponent(&mut self) -> bool {
        self.cursor.advance(); // 'e' / 'E'
        if matches!(self.cursor.current_char(), '+' | '-') {
            self.cursor.advance();
        }
        let digits_start = self.cursor.position();
        while self.cursor.current_char().is_ascii_digit() {
            self.cursor.advance();
        }
        if self.cursor.position() == digits_start {
            self.report_error_code(E_LEXER_MALFORMED_NUMBER, "exponent has no digits");
            false
        } else {
            true
        }
    }

    fn lex_hex_integer(&mut self) -> Token {
        self.cursor.advance(); // '$'
        let digits_start = self.cursor.position();
        while is_digit_in_base(self.cursor.current_char(), 16) {
            self.cursor.advance();
        }
        if self.cursor.position() == digits_start {
            self.report_error_code(E_LEXER_MALFORMED_NUMBER, "hex literal has no digits after '$'");
            return Token::new(TokenCategory::Integer, TokenKind::Unreserved, self.token_location(), self.lexeme())
                .with_payload(Payload::Int(0));
        }

        let digits = &self.lexeme()[1..];
        let value = digits.chars().try_fold(0i64, |acc, c| {
            let digit = hex_digit_to_value(c)? as i64;
            acc.checked_mul(16)?.checked_add(digit)
        });
        let value = value.unwrap_or_else(|| {
            self.report_error_code(E_LEXER_MALFORMED_NUMBER, "hex literal overflows");
            0
        });

        Token::new(TokenCategory::Integer, TokenKind::Unreserved, self.token_location(), self.lexeme())
            .with_payload(Payload::Int(value))
    }

    fn report_malformed_number(&mut self, text: &str) {
        self.report_error_code(E_LEXER_MALFORMED_NUMBER, format!("malformed numeral '{}'", text));
    }

    fn report_error_code(&mut self, code: pascalc_util::DiagnosticCode, message: impl Into<String>) {
        let location = self.token_location();
        self.emit_lexical_error(code, location, message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pascalc_util::Handler;

    fn lex_num(source: &str) -> Token {
        let mut handler = Handler::new();
        let mut lexer = Lexer::new(source, "t.pas", &mut handler);
        lexer.lex_number()
    }

    #[test]
    fn plain_decimal_integer() {
        let tok = lex_num("42");
        assert_eq!(tok.category, TokenCategory::Integer);
        assert_eq!(tok.payload, Payload::Int(42));
    }

    #[test]
    fn hex_integer_round_trips_through_dollar_prefix() {
        let tok = lex_num("$FF");
        assert_eq!(tok.payload, Payload::Int(255));
    }

    #[test]
    fn fraction_is_real() {
        let tok = lex_num("3.14");
        assert_eq!(tok.category, TokenCategory::Real);
        assert_eq!(tok.payload, Payload::Float(3.14));
    }

    #[test]
    fn dot_dot_is_not_absorbed_into_a_fraction() {
        let mut handler = Handler::new();
        let mut lexer = Lexer::new("1..10", "t.pas", &mut handler);
        let tok = lexer.lex_number();
        assert_eq!(tok.category, TokenCategory::Integer);
        assert_eq!(tok.payload, Payload::Int(1));
        assert_eq!(lexer.cursor.current_char(), '.');
    }

    #[test]
    fn exponent_without_fraction_is_real() {
        let tok = lex_num("1e10");
        assert_eq!(tok.category, TokenCategory::Real);
    }

    #[test]
    fn exponent_with_sign() {
        let tok = lex_num("2.5e-3");
        assert!(matches!(tok.payload, Payload::Float(f) if (f - 2.5e-3).abs() < 1e-9));
    }

    #[test]
    fn exponent_missing_digits_is_an_error() {
        let mut handler = Handler::new();
        let mut lexer = Lexer::new("1e", "t.pas", &mut handler);
        lexer.lex_number();
        assert!(handler.has_errors());
    }
}
