//! Turns a token stream into a [`Program`] AST, reporting diagnostics
//! through a shared [`Handler`] and continuing past errors rather than
//! aborting the parse.
//!
//! The grammar is recursive descent throughout, with one Pratt-style
//! precedence climb (`parse_bin_rhs`) for expressions: each binary
//! operator's precedence comes straight off the `Token` the lexer
//! already stamped it with, so the parser never needs its own
//! precedence table.
//!
//! The parser moves through four states as it works down a source
//! file — [`ParserState::Heading`], [`ParserState::Declarations`],
//! [`ParserState::MainBlock`], [`ParserState::Done`] — tracked mostly
//! for diagnostics and tests; nothing branches silently on it.

mod ast;
mod expr;
mod stmt;

pub use ast::{Block, CaseArm, Expr, Program};

use std::rc::Rc;

use pascalc_util::diagnostic::{E_PARSER_EXPECTED_TOKEN, E_PARSER_UNEXPECTED_EOF, E_PARSER_UNEXPECTED_TOKEN};
use pascalc_util::{Constant, DiagnosticBuilder, DiagnosticCode, Handler, SourceLocation, Token, TokenCategory, TokenKind};

/// Where the parser is in a source file's top-level structure.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ParserState {
    Heading,
    Declarations,
    MainBlock,
    Done,
}

/// What parsing a source file produces: the program itself (`None` if
/// the heading was too broken to even name the program) and the
/// `const` table gathered along the way. Constants are folded for
/// their own sake — to validate they *are* constant expressions — but
/// are not woven back into the statement tree, matching the closed AST
/// node table.
pub struct ParseOutcome {
    pub program: Option<Program>,
    pub constants: Vec<(String, Constant)>,
}

/// Consumes a flat token stream and builds a [`Program`].
pub struct Parser<'a> {
    tokens: Vec<Token>,
    position: usize,
    handler: &'a mut Handler,
    file_name: Rc<str>,
    state: ParserState,
}

/// Lexes `source` and parses it in one call, the shape the driver uses.
pub fn parse_source(source: &str, file_name: impl Into<Rc<str>>, handler: &mut Handler) -> ParseOutcome {
    let file_name: Rc<str> = file_name.into();
    let tokens: Vec<Token> = {
        let mut lexer = pascalc_lex::Lexer::new(source, file_name.clone(), handler);
        let mut tokens = Vec::new();
        loop {
            let token = lexer.next_token();
            let is_eof = token.is_eof();
            tokens.push(token);
            if is_eof {
                break;
            }
        }
        tokens
    };
    let mut parser = Parser::new(tokens, file_name, handler);
    parser.parse_program()
}

impl<'a> Parser<'a> {
    /// `tokens` should end with an end-of-file token (as
    /// `Lexer::next_token` always eventually produces); if it doesn't,
    /// one is appended so the parser never indexes past the end of the
    /// stream.
    pub fn new(mut tokens: Vec<Token>, file_name: impl Into<Rc<str>>, handler: &'a mut Handler) -> Self {
        let file_name: Rc<str> = file_name.into();
        if tokens.last().map(|t| !t.is_eof()).unwrap_or(true) {
            tokens.push(Token::eof(SourceLocation::new(file_name.clone(), 1, 0)));
        }
        Self {
            tokens,
            position: 0,
            handler,
            file_name,
            state: ParserState::Heading,
        }
    }

    pub fn state(&self) -> ParserState {
        self.state
    }

    /// Parses a whole program: heading, then the block dispatch table —
    /// `const`/`type` sections in any order, stray `;` skipped, until
    /// `begin` opens the main block or end of file is hit first.
    pub fn parse_program(&mut self) -> ParseOutcome {
        self.state = ParserState::Heading;
        let heading = self.parse_program_heading();

        self.state = ParserState::Declarations;
        let mut constants = Vec::new();
        let mut block = Block::default();

        loop {
            if self.validate_category(TokenCategory::EndOfFile) {
                self.report_unexpected_eof();
                break;
            }
            match self.current().kind {
                TokenKind::Begin => {
                    self.state = ParserState::MainBlock;
                    block = self.parse_block();
                    self.expect(TokenKind::Dot, ".");
                    break;
                }
                TokenKind::Semicolon => {
                    self.advance();
                }
                TokenKind::Const => {
                    constants.extend(self.parse_const_section());
                }
                TokenKind::Type => {
                    self.parse_type_section();
                }
                _ => {
                    self.parse_expression();
                }
            }
        }

        self.state = ParserState::Done;

        let program = heading.map(|(name, location)| Program { name, block, location });
        ParseOutcome { program, constants }
    }

    fn parse_program_heading(&mut self) -> Option<(String, SourceLocation)> {
        let location = self.current_location();
        if !self.expect(TokenKind::Program, "program") {
            return None;
        }
        let name = self.expect_identifier()?;

        if self.validate(TokenKind::LParen) {
            self.advance();
            loop {
                self.expect_identifier();
                if self.validate(TokenKind::Comma) {
                    self.advance();
                    continue;
                }
                break;
            }
            self.expect(TokenKind::RParen, ")");
        }

        self.expect(TokenKind::Semicolon, ";");
        Some((name, location))
    }

    /// `CONST {ident '=' constant_expr ';'}`, called once per `const`
    /// section the block dispatch loop lands on.
    fn parse_const_section(&mut self) -> Vec<(String, Constant)> {
        self.advance(); // 'const'
        let mut constants = Vec::new();
        while self.validate_category(TokenCategory::Identifier) {
            let name = self.expect_identifier();
            self.expect(TokenKind::Equal, "=");
            let value = self.parse_constant_expression();
            self.expect(TokenKind::Semicolon, ";");
            if let (Some(name), Some(value)) = (name, value) {
                constants.push((name, value));
            }
        }
        constants
    }

    /// `TYPE {ident '=' type_denoter ';'}`. No AST node is built for a
    /// type definition — `TypeDecl` is a future node kind — so this
    /// only needs to consume the section's tokens correctly, including
    /// a `record ... end` denoter's own internal `;`s.
    fn parse_type_section(&mut self) {
        self.advance(); // 'type'
        while self.validate_category(TokenCategory::Identifier) {
            self.advance(); // the type's name
            self.expect(TokenKind::Equal, "=");
            self.skip_type_denoter();
            self.expect(TokenKind::Semicolon, ";");
        }
    }

    /// Consumes a type denoter without building any AST for it, tracking
    /// `record`/`begin` ... `end` and `(`/`[` ... `)`/`]` nesting so the
    /// `;` that ends the definition isn't mistaken for one inside a
    /// nested record's field list.
    fn skip_type_denoter(&mut self) {
        let mut depth = 0i32;
        loop {
            if self.validate_category(TokenCategory::EndOfFile) {
                break;
            }
            match self.current().kind {
                TokenKind::Semicolon if depth == 0 => break,
                TokenKind::LParen | TokenKind::LBracket => {
                    depth += 1;
                    self.advance();
                }
                TokenKind::RParen | TokenKind::RBracket => {
                    depth -= 1;
                    self.advance();
                }
                TokenKind::Record | TokenKind::Begin => {
                    depth += 1;
                    self.advance();
                }
                TokenKind::End => {
                    if depth == 0 {
                        break;
                    }
                    depth -= 1;
                    self.advance();
                }
                _ => {
                    self.advance();
                }
            }
        }
    }

    // -- token stream -----------------------------------------------

    pub(crate) fn current(&self) -> &Token {
        &self.tokens[self.position.min(self.tokens.len() - 1)]
    }

    fn peek(&self, offset: usize) -> &Token {
        let index = (self.position + offset).min(self.tokens.len() - 1);
        &self.tokens[index]
    }

    pub(crate) fn advance(&mut self) -> Token {
        let token = self.current().clone();
        if self.position + 1 < self.tokens.len() {
            self.position += 1;
        }
        token
    }

    pub(crate) fn current_location(&self) -> SourceLocation {
        self.current().location.clone()
    }

    /// Non-reporting lookahead: does the current token have this kind?
    pub(crate) fn validate(&self, kind: TokenKind) -> bool {
        self.current().kind == kind
    }

    pub(crate) fn validate_category(&self, category: TokenCategory) -> bool {
        self.current().category == category
    }

    /// Consumes the current token if it has `kind`, reporting an
    /// expected-token diagnostic and leaving the position unchanged
    /// otherwise.
    pub(crate) fn expect(&mut self, kind: TokenKind, literal: &str) -> bool {
        if self.validate(kind) {
            self.advance();
            true
        } else {
            self.report_expected(literal);
            false
        }
    }

    pub(crate) fn expect_category(&mut self, category: TokenCategory, literal: &str) -> Option<Token> {
        if self.validate_category(category) {
            Some(self.advance())
        } else {
            self.report_expected(literal);
            None
        }
    }

    pub(crate) fn expect_identifier(&mut self) -> Option<String> {
        self.expect_category(TokenCategory::Identifier, "an identifier").map(|token| token.lexeme)
    }

    /// Extension point for resolving an identifier against a constant
    /// or named-type table once one exists. A no-op today: it returns
    /// the `VariableRef` it was handed unchanged.
    pub(crate) fn parse_token(&mut self, expr: Expr) -> Expr {
        expr
    }

    // -- diagnostics --------------------------------------------------

    fn report_expected(&mut self, what: &str) {
        let found = self.current().clone();
        let location = found.location.clone();
        let message = if found.category == TokenCategory::EndOfFile {
            format!("expected {}, found end of file", what)
        } else {
            format!("expected {}, found '{}'", what, found.lexeme)
        };
        self.emit_syntax_error(E_PARSER_EXPECTED_TOKEN, location, message);
    }

    pub(crate) fn report_unexpected(&mut self, what: &str) {
        let found = self.current().clone();
        let location = found.location.clone();
        let message = format!("unexpected {} '{}'", what, found.lexeme);
        self.emit_syntax_error(E_PARSER_UNEXPECTED_TOKEN, location, message);
    }

    /// The block dispatch loop hit end of file before ever seeing
    /// `begin`, distinct from `report_expected`'s generic
    /// "expected begin, found end of file" (which only fires when
    /// `begin` itself was the specific thing being consumed).
    fn report_unexpected_eof(&mut self) {
        let location = self.current_location();
        self.emit_syntax_error(E_PARSER_UNEXPECTED_EOF, location, "unexpected end of file");
    }

    /// Every syntactic diagnostic this crate emits goes through here,
    /// so every one of them carries the `"Syntax Error"` component the
    /// driver's output format requires.
    pub(crate) fn emit_syntax_error(&mut self, code: DiagnosticCode, location: SourceLocation, message: impl Into<String>) {
        DiagnosticBuilder::error(message)
            .code(code)
            .location(location)
            .component("Syntax Error")
            .emit(self.handler);
    }
}
