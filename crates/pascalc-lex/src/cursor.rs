//! Character cursor for traversing source text.
//!
//! `Cursor` tracks byte position plus 1-based line and 0-based column,
//! the coordinate system [`crate::token::Token`] locations use. Column
//! resets to 0 (not 1) at the start of each line. Lookahead (`.` versus
//! `..`, `'` versus an escaped `''` inside a string) is one-character
//! peeking via `peek_char`, never backtracking, so the cursor only
//! moves forward.

/// A cursor for traversing source text character by character.
pub struct Cursor<'a> {
    source: &'a str,
    position: usize,
    line: u32,
    column: u32,
}

impl<'a> Cursor<'a> {
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            position: 0,
            line: 1,
            column: 0,
        }
    }

    /// The character at the current position, or `'\0'` at end of input.
    pub fn current_char(&self) -> char {
        self.char_at(0)
    }

    #[inline]
    pub fn char_at(&self, offset: usize) -> char {
        let pos = self.position + offset;
        if pos >= self.source.len() {
            return '\0';
        }
        let b = self.source.as_bytes()[pos];
        if b < 128 {
            return b as char;
        }
        self.source[pos..].chars().next().unwrap_or('\0')
    }

    /// Looks `offset` characters ahead without consuming anything.
    #[inline]
    pub fn peek_char(&self, offset: usize) -> char {
        self.char_at(offset)
    }

    /// Consumes the current character, updating line/column tracking.
    /// Does nothing at end of input.
    #[inline]
    pub fn advance(&mut self) {
        if self.position >= self.source.len() {
            return;
        }
        let b = self.source.as_bytes()[self.position];
        if b < 128 {
            self.position += 1;
            if b == b'\n' {
                self.line += 1;
                self.column = 0;
            } else {
                self.column += 1;
            }
            return;
        }
        if let Some(c) = self.source[self.position..].chars().next() {
            self.position += c.len_utf8();
            if c == '\n' {
                self.line += 1;
                self.column = 0;
            } else {
                self.column += 1;
            }
        }
    }

    pub fn is_at_end(&self) -> bool {
        self.position >= self.source.len()
    }

    /// Skips ASCII whitespace. Does not skip comments.
    pub fn skip_whitespace(&mut self) {
        while !self.is_at_end() && self.current_char().is_whitespace() {
            self.advance();
        }
    }

    pub fn line(&self) -> u32 {
        self.line
    }

    pub fn column(&self) -> u32 {
        self.column
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn slice_from(&self, start: usize) -> &'a str {
        &self.source[start..self.position]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_line_one_column_zero() {
        let cursor = Cursor::new("begin");
        assert_eq!(cursor.line(), 1);
        assert_eq!(cursor.column(), 0);
    }

    #[test]
    fn column_resets_to_zero_on_newline() {
        let mut cursor = Cursor::new("ab\ncd");
        for _ in 0..3 {
            cursor.advance(); // "ab\n"
        }
        assert_eq!(cursor.line(), 2);
        assert_eq!(cursor.column(), 0);
    }

    #[test]
    fn peek_char_looks_ahead_without_consuming() {
        let cursor = Cursor::new(":=");
        assert_eq!(cursor.current_char(), ':');
        assert_eq!(cursor.peek_char(1), '=');
        assert_eq!(cursor.current_char(), ':');
    }

    #[test]
    fn is_at_end_on_empty_source() {
        let cursor = Cursor::new("");
        assert!(cursor.is_at_end());
        assert_eq!(cursor.current_char(), '\0');
    }
}
