//! Core lexer state and token dispatch.

use std::rc::Rc;

use pascalc_util::diagnostic::E_LEXER_UNEXPECTED_CHARACTER;
use pascalc_util::{Dictionary, DiagnosticBuilder, Handler, SourceLocation, Token};

use crate::cursor::Cursor;

/// Transforms a single source file's text into a stream of tokens.
///
/// Holds one [`Dictionary`] (built once, reused for every identifier
/// and operator lookup) and a `&mut` [`Handler`] shared with the parser
/// pass that follows.
pub struct Lexer<'a> {
    pub(crate) cursor: Cursor<'a>,
    pub(crate) handler: &'a mut Handler,
    pub(crate) dictionary: Dictionary,
    pub(crate) file_name: Rc<str>,

    pub(crate) token_start: usize,
    pub(crate) token_start_line: u32,
    pub(crate) token_start_column: u32,
}

impl<'a> Lexer<'a> {
    pub fn new(source: &'a str, file_name: impl Into<Rc<str>>, handler: &'a mut Handler) -> Self {
        Self {
            cursor: Cursor::new(source),
            handler,
            dictionary: Dictionary::new(),
            file_name: file_name.into(),
            token_start: 0,
            token_start_line: 1,
            token_start_column: 0,
        }
    }

    /// Returns the next token, or an end-of-file token once the source
    /// is exhausted. Never panics: malformed input is reported through
    /// the handler and lexing continues.
    pub fn next_token(&mut self) -> Token {
        self.skip_whitespace_and_comments();

        self.token_start = self.cursor.position();
        self.token_start_line = self.cursor.line();
        self.token_start_column = self.cursor.column();

        if self.cursor.is_at_end() {
            return Token::eof(self.token_location());
        }

        let c = self.cursor.current_char();
        match c {
            '\'' => self.lex_quoted(),
            '$' => self.lex_number(),
            c if c.is_ascii_digit() => self.lex_number(),
            c if crate::unicode::is_ascii_ident_start(c) => self.lex_identifier(),
            _ => self.lex_operator(),
        }
    }

    pub(crate) fn token_location(&self) -> SourceLocation {
        SourceLocation::new(self.file_name.clone(), self.token_start_line, self.token_start_column)
    }

    pub(crate) fn current_location(&self) -> SourceLocation {
        SourceLocation::new(self.file_name.clone(), self.cursor.line(), self.cursor.column())
    }

    pub(crate) fn lexeme(&self) -> &'a str {
        self.cursor.slice_from(self.token_start)
    }

    /// Reports a lexical error anchored at the start of the token being
    /// lexed.
    pub(crate) fn report_error(&mut self, message: impl Into<String>) {
        self.emit_lexical_error(E_LEXER_UNEXPECTED_CHARACTER, self.token_location(), message);
    }

    /// Reports a lexical error at an explicit location, tagged with
    /// the "Token Error" category every diagnostic this crate emits
    /// shares.
    pub(crate) fn emit_lexical_error(
        &mut self,
        code: pascalc_util::DiagnosticCode,
        location: SourceLocation,
        message: impl Into<String>,
    ) {
        DiagnosticBuilder::error(message)
            .code(code)
            .location(location)
            .component("Token Error")
            .emit(self.handler);
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Token;

    fn next(&mut self) -> Option<Self::Item> {
        let token = self.next_token();
        if token.is_eof() {
            None
        } else {
            Some(token)
        }
    }
}
