//! Statement parsing: `begin ... end` blocks, the structured statements
//! (`if`, `while`, `repeat`, `for`, `case`, `with`), and the fallback
//! case of an identifier-led expression optionally followed by `:=`.

use pascalc_util::TokenKind;

use crate::ast::CaseArm;
use crate::{Block, Expr, Parser};

impl<'a> Parser<'a> {
    /// `BEGIN statement {';' statement} [';'] END`. An empty block and a
    /// trailing `;` right before `END` are both allowed.
    pub(crate) fn parse_block(&mut self) -> Block {
        self.expect(TokenKind::Begin, "begin");

        let mut body = Vec::new();
        if !self.validate(TokenKind::End) {
            body.push(self.parse_statement());
            while self.validate(TokenKind::Semicolon) {
                self.advance();
                if self.validate(TokenKind::End) {
                    break;
                }
                body.push(self.parse_statement());
            }
        }

        self.expect(TokenKind::End, "end");
        Block { body }
    }

    /// Dispatches on the current token: a structured-statement keyword,
    /// `begin` for a nested block, or anything else as the start of an
    /// expression statement (itself either a bare expression — a
    /// procedure call — or the left-hand side of an assignment).
    pub(crate) fn parse_statement(&mut self) -> Expr {
        let token = self.current().clone();

        if matches!(token.kind, TokenKind::Semicolon | TokenKind::End | TokenKind::Until) {
            return Expr::Empty(token.location);
        }

        match token.kind {
            TokenKind::If => self.parse_if(),
            TokenKind::While => self.parse_while(),
            TokenKind::Repeat => self.parse_repeat(),
            TokenKind::For => self.parse_for(),
            TokenKind::Case => self.parse_case(),
            TokenKind::With => self.parse_with(),
            TokenKind::Begin => {
                let location = token.location;
                Expr::Block(self.parse_block(), location)
            }
            _ => self.parse_simple_statement(),
        }
    }

    fn parse_simple_statement(&mut self) -> Expr {
        let location = self.current_location();
        let lhs = self.parse_expression();
        if self.validate(TokenKind::Assign) {
            self.advance();
            let rhs = self.parse_expression();
            Expr::Assign {
                lhs: Box::new(lhs),
                rhs: Box::new(rhs),
                location,
            }
        } else {
            lhs
        }
    }

    /// `IF cond THEN then_part [ELSE else_part]`. Dangling `else` binds
    /// to the nearest open `then`: recursive descent gets this for free
    /// because the inner `if`'s own `else` check runs, and consumes the
    /// token, before control returns to the outer `if`.
    fn parse_if(&mut self) -> Expr {
        let location = self.advance().location; // 'if'
        let cond = self.parse_expression();
        self.expect(TokenKind::Then, "then");
        let then_part = self.parse_statement();
        let else_part = if self.validate(TokenKind::Else) {
            self.advance();
            Some(Box::new(self.parse_statement()))
        } else {
            None
        };
        Expr::If {
            cond: Box::new(cond),
            then_part: Box::new(then_part),
            else_part,
            location,
        }
    }

    fn parse_while(&mut self) -> Expr {
        let location = self.advance().location; // 'while'
        let cond = self.parse_expression();
        self.expect(TokenKind::Do, "do");
        let body = self.parse_statement();
        Expr::While {
            cond: Box::new(cond),
            body: Box::new(body),
            location,
        }
    }

    /// `REPEAT stmt {';' stmt} UNTIL cond`. The statement sequence is
    /// wrapped into a synthetic [`Block`] even though there is no
    /// `begin`/`end` in the surface syntax.
    fn parse_repeat(&mut self) -> Expr {
        let location = self.advance().location; // 'repeat'

        let mut body = Vec::new();
        if !self.validate(TokenKind::Until) {
            body.push(self.parse_statement());
            while self.validate(TokenKind::Semicolon) {
                self.advance();
                if self.validate(TokenKind::Until) {
                    break;
                }
                body.push(self.parse_statement());
            }
        }

        self.expect(TokenKind::Until, "until");
        let cond = self.parse_expression();
        Expr::Repeat {
            cond: Box::new(cond),
            body: Block { body },
            location,
        }
    }

    /// `FOR ident ':=' start (TO | DOWNTO) end DO body`.
    fn parse_for(&mut self) -> Expr {
        let location = self.advance().location; // 'for'
        let control_var = self.expect_identifier().unwrap_or_default();
        self.expect(TokenKind::Assign, ":=");
        let start = self.parse_expression();

        let down = if self.validate(TokenKind::Downto) {
            self.advance();
            true
        } else {
            self.expect(TokenKind::To, "to");
            false
        };

        let end = self.parse_expression();
        self.expect(TokenKind::Do, "do");
        let body = self.parse_statement();

        Expr::For {
            control_var,
            start: Box::new(start),
            end: Box::new(end),
            down,
            body: Box::new(body),
            location,
        }
    }

    /// `CASE selector OF {label {',' label} ':' stmt ';'} [OTHERWISE stmt] END`.
    fn parse_case(&mut self) -> Expr {
        let location = self.advance().location; // 'case'
        let selector = self.parse_expression();
        self.expect(TokenKind::Of, "of");

        let mut arms = Vec::new();
        let mut otherwise = None;

        loop {
            if self.validate(TokenKind::Otherwise) {
                self.advance();
                otherwise = Some(Box::new(self.parse_statement()));
                if self.validate(TokenKind::Semicolon) {
                    self.advance();
                }
                break;
            }
            if self.validate(TokenKind::End) {
                break;
            }

            let mut labels = Vec::new();
            if let Some(first) = self.parse_constant_expression() {
                labels.push(first);
            }
            while self.validate(TokenKind::Comma) {
                self.advance();
                if let Some(label) = self.parse_constant_expression() {
                    labels.push(label);
                }
            }
            self.expect(TokenKind::Colon, ":");
            let body = self.parse_statement();
            arms.push(CaseArm { labels, body: Box::new(body) });

            if self.validate(TokenKind::Semicolon) {
                self.advance();
            } else {
                break;
            }
        }

        self.expect(TokenKind::End, "end");
        Expr::Case {
            selector: Box::new(selector),
            arms,
            otherwise,
            location,
        }
    }

    /// `WITH expr {',' expr} DO statement`.
    fn parse_with(&mut self) -> Expr {
        let location = self.advance().location; // 'with'
        let mut record_vars = vec![self.parse_expression()];
        while self.validate(TokenKind::Comma) {
            self.advance();
            record_vars.push(self.parse_expression());
        }
        self.expect(TokenKind::Do, "do");
        let body = self.parse_statement();
        Expr::With {
            record_vars,
            body: Box::new(body),
            location,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pascalc_util::Handler;

    fn parse_program_block(source: &str) -> (Block, Handler) {
        let mut handler = Handler::new();
        let outcome = crate::parse_source(source, "t.pas", &mut handler);
        (outcome.program.expect("program parsed").block, handler)
    }

    #[test]
    fn for_loop_records_direction_and_bounds() {
        let (block, handler) = parse_program_block(
            "program p; begin for i := 1 to 10 do x := x + i end.",
        );
        assert!(!handler.has_errors());
        match &block.body[0] {
            Expr::For { control_var, down, start, end, .. } => {
                assert_eq!(control_var, "i");
                assert!(!down);
                assert!(matches!(**start, Expr::IntLiteral(1, _)));
                assert!(matches!(**end, Expr::IntLiteral(10, _)));
            }
            other => panic!("expected a for loop, got {:?}", other),
        }
    }

    #[test]
    fn downto_sets_the_down_flag() {
        let (block, handler) = parse_program_block(
            "program p; begin for i := 10 downto 1 do x := i end.",
        );
        assert!(!handler.has_errors());
        match &block.body[0] {
            Expr::For { down, .. } => assert!(down),
            other => panic!("expected a for loop, got {:?}", other),
        }
    }

    #[test]
    fn dangling_else_binds_to_the_innermost_if() {
        let (block, handler) = parse_program_block(
            "program p; begin if a then if b then x := 1 else y := 2 end.",
        );
        assert!(!handler.has_errors());
        match &block.body[0] {
            Expr::If { then_part, else_part, .. } => {
                assert!(else_part.is_none(), "outer if must have no else");
                match &**then_part {
                    Expr::If { else_part: Some(_), .. } => {}
                    other => panic!("expected the inner if to own the else, got {:?}", other),
                }
            }
            other => panic!("expected an if statement, got {:?}", other),
        }
    }

    #[test]
    fn repeat_wraps_its_statements_in_a_block() {
        let (block, handler) = parse_program_block(
            "program p; begin repeat x := x+1; y := y-1 until x = y end.",
        );
        assert!(!handler.has_errors());
        match &block.body[0] {
            Expr::Repeat { body, .. } => assert_eq!(body.body.len(), 2),
            other => panic!("expected a repeat statement, got {:?}", other),
        }
    }

    #[test]
    fn empty_block_parses_with_no_statements() {
        let (block, handler) = parse_program_block("program p; begin end.");
        assert!(!handler.has_errors());
        assert!(block.body.is_empty());
    }

    #[test]
    fn trailing_semicolon_before_end_is_allowed() {
        let (block, handler) = parse_program_block("program p; begin x := 1; end.");
        assert!(!handler.has_errors());
        assert_eq!(block.body.len(), 1);
    }

    #[test]
    fn case_statement_with_otherwise_arm() {
        let (block, handler) = parse_program_block(
            "program p; begin case x of 1: y := 1; 2, 3: y := 2 otherwise y := 0 end end.",
        );
        assert!(!handler.has_errors());
        match &block.body[0] {
            Expr::Case { arms, otherwise, .. } => {
                assert_eq!(arms.len(), 2);
                assert!(otherwise.is_some());
            }
            other => panic!("expected a case statement, got {:?}", other),
        }
    }
}
