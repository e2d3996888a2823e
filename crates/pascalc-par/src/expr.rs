//! Expression parsing: a precedence climb over the binding power the
//! lexer already attached to every operator token, plus the separate,
//! narrower grammar for `const`-section constant expressions.
//!
//! # Precedence climb
//!
//! `parse_expression` parses one primary expression and then repeatedly
//! folds it against whatever binary operator follows, as long as that
//! operator's precedence is at least `min_prec`. This is the standard
//! operator-precedence-parsing algorithm: each recursive call into the
//! right-hand side raises `min_prec` to `op_prec + 1`, which is what
//! makes same-precedence operators fold left (`a - b - c` becomes
//! `(a - b) - c`) while a tighter-binding operator steals its left
//! operand first (`a + b * c` becomes `a + (b * c)`).
//!
//! Relational operators are not special-cased here. `a < b < c` folds
//! to `(a < b) < c` like any other same-precedence chain; whether that
//! is a well-typed expression is a question for semantic analysis,
//! which this crate does not perform.

use pascalc_util::diagnostic::{E_PARSER_INVALID_CONSTANT_EXPR, E_PARSER_UNEXPECTED_TOKEN};
use pascalc_util::{Constant, Payload, SourceLocation, TokenCategory, TokenKind};

use crate::{Expr, Parser};

impl<'a> Parser<'a> {
    pub fn parse_expression(&mut self) -> Expr {
        let lhs = self.parse_primary();
        self.parse_bin_rhs(0, lhs)
    }

    fn parse_bin_rhs(&mut self, min_prec: i32, mut lhs: Expr) -> Expr {
        loop {
            let prec = self.current().precedence;
            if prec < min_prec {
                return lhs;
            }
            let op_token = self.advance();
            let mut rhs = self.parse_primary();

            let next_prec = self.current().precedence;
            if next_prec > prec {
                rhs = self.parse_bin_rhs(prec + 1, rhs);
            }

            let location = op_token.location.clone();
            lhs = Expr::Binary {
                op: op_token.kind,
                lhs: Box::new(lhs),
                rhs: Box::new(rhs),
                location,
            };
        }
    }

    /// Parses one primary expression: a unary prefix, a parenthesized
    /// expression, a set literal, a literal, or an identifier.
    pub(crate) fn parse_primary(&mut self) -> Expr {
        let token = self.current().clone();

        match token.kind {
            TokenKind::Plus | TokenKind::Minus | TokenKind::Not => {
                self.advance();
                let operand = self.parse_primary();
                Expr::Unary {
                    op: token.kind,
                    operand: Box::new(operand),
                    location: token.location,
                }
            }
            TokenKind::LParen => {
                self.advance();
                let inner = self.parse_expression();
                self.expect(TokenKind::RParen, ")");
                inner
            }
            TokenKind::LBracket => self.parse_set_literal(),
            _ => self.parse_literal_or_identifier(token),
        }
    }

    fn parse_literal_or_identifier(&mut self, token: pascalc_util::Token) -> Expr {
        match token.category {
            TokenCategory::Integer => {
                self.advance();
                Expr::IntLiteral(int_payload(&token.payload), token.location)
            }
            TokenCategory::Real => {
                self.advance();
                Expr::RealLiteral(float_payload(&token.payload), token.location)
            }
            TokenCategory::Char => {
                self.advance();
                Expr::CharLiteral(int_payload(&token.payload) as u8, token.location)
            }
            TokenCategory::StringLiteral => {
                self.advance();
                Expr::StringLiteral(text_payload(&token.payload), token.location)
            }
            TokenCategory::Identifier => {
                self.advance();
                let expr = Expr::VariableRef {
                    name: token.lexeme,
                    location: token.location,
                };
                self.parse_token(expr)
            }
            _ => {
                self.report_unexpected("token");
                self.advance();
                Expr::Empty(token.location)
            }
        }
    }

    fn parse_set_literal(&mut self) -> Expr {
        let location = self.advance().location; // '['
        let mut elements = Vec::new();
        if !self.validate(TokenKind::RBracket) {
            elements.push(self.parse_expression());
            while self.validate(TokenKind::Comma) {
                self.advance();
                elements.push(self.parse_expression());
            }
        }
        self.expect(TokenKind::RBracket, "]");
        Expr::SetLiteral { elements, location }
    }

    // -- constant expressions (`const` sections only) -----------------

    /// `[sign] (unsigned_number | constant_identifier) | character_string`,
    /// plus `not constant_expr` and a parenthesized recursive form. Used
    /// only while parsing a `const` section; general expressions use
    /// [`Parser::parse_expression`] instead.
    pub(crate) fn parse_constant_expression(&mut self) -> Option<Constant> {
        if self.validate(TokenKind::Not) {
            let location = self.advance().location;
            let inner = self.parse_constant_expression()?;
            return self.fold_not(inner, location);
        }

        if self.validate(TokenKind::LParen) {
            self.advance();
            let inner = self.parse_constant_expression();
            self.expect(TokenKind::RParen, ")");
            return inner;
        }

        let mut sign = None;
        if self.validate(TokenKind::Plus) || self.validate(TokenKind::Minus) {
            sign = Some(self.advance().kind);
        }

        let token = self.current().clone();
        match token.category {
            TokenCategory::Integer => {
                self.advance();
                let value = apply_sign_to_int(sign, int_payload(&token.payload));
                Some(Constant::IntConst(value, token.location))
            }
            TokenCategory::Real => {
                self.advance();
                let value = apply_sign_to_real(sign, float_payload(&token.payload));
                Some(Constant::RealConst(value, token.location))
            }
            TokenCategory::Char => {
                self.advance();
                if let Some(sign) = sign {
                    self.report_illegal_sign(sign, "a character constant", token.location.clone());
                }
                Some(Constant::CharConst(int_payload(&token.payload) as u8, token.location))
            }
            TokenCategory::StringLiteral => {
                self.advance();
                if let Some(sign) = sign {
                    self.report_illegal_sign(sign, "a string constant", token.location.clone());
                }
                Some(Constant::StringConst(text_payload(&token.payload), token.location))
            }
            TokenCategory::Identifier => {
                self.advance();
                self.resolve_constant_identifier(sign, &token.lexeme, token.location)
            }
            _ => {
                self.emit_syntax_error(E_PARSER_UNEXPECTED_TOKEN, token.location.clone(), "expected a constant");
                None
            }
        }
    }

    /// `true` and `false` are predefined identifiers, not reserved
    /// words, so they are recognized here rather than in the
    /// dictionary. Any other identifier names a constant declared
    /// earlier in the same `const` section or an enclosing scope;
    /// resolving those requires a symbol table this crate does not yet
    /// thread through the parser, so they are reported rather than
    /// silently accepted.
    fn resolve_constant_identifier(&mut self, sign: Option<TokenKind>, name: &str, location: SourceLocation) -> Option<Constant> {
        match name.to_ascii_lowercase().as_str() {
            "true" => Some(Constant::BoolConst(true, location)),
            "false" => Some(Constant::BoolConst(false, location)),
            _ => {
                let _ = sign;
                self.emit_syntax_error(
                    E_PARSER_INVALID_CONSTANT_EXPR,
                    location,
                    format!("'{}' does not name a previously declared constant", name),
                );
                None
            }
        }
    }

    fn fold_not(&mut self, inner: Constant, location: SourceLocation) -> Option<Constant> {
        match inner {
            Constant::IntConst(value, _) => Some(Constant::IntConst(!value, location)),
            Constant::CharConst(value, _) => Some(Constant::CharConst(!value, location)),
            Constant::BoolConst(value, _) => Some(Constant::BoolConst(!value, location)),
            Constant::RealConst(_, _) => {
                self.emit_syntax_error(E_PARSER_INVALID_CONSTANT_EXPR, location, "'not' cannot be applied to a real constant");
                None
            }
            Constant::StringConst(_, _) => {
                self.emit_syntax_error(E_PARSER_INVALID_CONSTANT_EXPR, location, "'not' cannot be applied to a string constant");
                None
            }
        }
    }

    fn report_illegal_sign(&mut self, sign: TokenKind, what: &str, location: SourceLocation) {
        let symbol = if sign == TokenKind::Minus { "-" } else { "+" };
        self.emit_syntax_error(
            E_PARSER_INVALID_CONSTANT_EXPR,
            location,
            format!("'{}' cannot be applied to {}", symbol, what),
        );
    }
}

fn apply_sign_to_int(sign: Option<TokenKind>, value: i64) -> i64 {
    if sign == Some(TokenKind::Minus) {
        -value
    } else {
        value
    }
}

fn apply_sign_to_real(sign: Option<TokenKind>, value: f64) -> f64 {
    if sign == Some(TokenKind::Minus) {
        -value
    } else {
        value
    }
}

fn int_payload(payload: &Payload) -> i64 {
    match payload {
        Payload::Int(value) => *value,
        _ => 0,
    }
}

fn float_payload(payload: &Payload) -> f64 {
    match payload {
        Payload::Float(value) => *value,
        _ => 0.0,
    }
}

fn text_payload(payload: &Payload) -> String {
    match payload {
        Payload::Text(value) => value.clone(),
        _ => String::new(),
    }
}
