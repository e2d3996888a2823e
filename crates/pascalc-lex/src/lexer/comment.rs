//! Whitespace and comment skipping.
//!
//! Pascal has two comment forms, `(* ... *)` and `{ ... }`, and neither
//! nests: the first closer seen ends the comment, regardless of how
//! many openers appeared inside it.

use pascalc_util::diagnostic::E_LEXER_UNTERMINATED_COMMENT;

use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Skips any run of whitespace and comments preceding the next
    /// token.
    pub(crate) fn skip_whitespace_and_comments(&mut self) {
        loop {
            self.cursor.skip_whitespace();

            if self.cursor.current_char() == '{' {
                self.skip_brace_comment();
                continue;
            }

            if self.cursor.current_char() == '(' && self.cursor.peek_char(1) == '*' {
                self.skip_paren_star_comment();
                continue;
            }

            break;
        }
    }

    /// Skips a `{ ... }` comment. Not nestable: an embedded `{` is just
    /// text, only the first `}` closes it.
    fn skip_brace_comment(&mut self) {
        let start_line = self.cursor.line();
        let start_column = self.cursor.column();
        self.cursor.advance(); // '{'

        loop {
            if self.cursor.is_at_end() {
                self.report_unterminated_comment(start_line, start_column);
                return;
            }
            if self.cursor.current_char() == '}' {
                self.cursor.advance();
                return;
            }
            self.cursor.advance();
        }
    }

    /// Skips a `(* ... *)` comment. Not nestable: an embedded `(*` is
    /// just text, only the first `*)` closes it.
    fn skip_paren_star_comment(&mut self) {
        let start_line = self.cursor.line();
        let start_column = self.cursor.column();
        self.cursor.advance(); // '('
        self.cursor.advance(); // '*'

        loop {
            if self.cursor.is_at_end() {
                self.report_unterminated_comment(start_line, start_column);
                return;
            }
            if self.cursor.current_char() == '*' && self.cursor.peek_char(1) == ')' {
                self.cursor.advance();
                self.cursor.advance();
                return;
            }
            self.cursor.advance();
        }
    }

    fn report_unterminated_comment(&mut self, line: u32, column: u32) {
        let location = pascalc_util::SourceLocation::new(self.file_name.clone(), line, column);
        self.emit_lexical_error(E_LEXER_UNTERMINATED_COMMENT, location, "unterminated comment");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pascalc_util::Handler;

    fn skip(source: &str) -> (char, bool) {
        let mut handler = Handler::new();
        let mut lexer = Lexer::new(source, "t.pas", &mut handler);
        lexer.skip_whitespace_and_comments();
        (lexer.cursor.current_char(), handler.has_errors())
    }

    #[test]
    fn brace_comment_is_skipped_entirely() {
        let (c, errored) = skip("{ a comment } begin");
        assert_eq!(c, 'b');
        assert!(!errored);
    }

    #[test]
    fn paren_star_comment_is_skipped_entirely() {
        let (c, errored) = skip("(* a comment *) begin");
        assert_eq!(c, 'b');
        assert!(!errored);
    }

    #[test]
    fn comments_do_not_nest() {
        // The first `*)` closes the comment; "more" becomes source text.
        let (c, errored) = skip("(* outer (* inner *) more *) begin");
        assert_eq!(c, 'm');
        assert!(!errored);
    }

    #[test]
    fn unterminated_brace_comment_is_an_error() {
        let (_, errored) = skip("{ never closes");
        assert!(errored);
    }

    #[test]
    fn unterminated_paren_star_comment_is_an_error() {
        let (_, errored) = skip("(* never closes");
        assert!(errored);
    }

    #[test]
    fn mixed_whitespace_and_comments_are_all_skipped() {
        let (c, _) = skip("  { one }  (* two *)  \n  begin");
        assert_eq!(c, 'b');
    }
}
