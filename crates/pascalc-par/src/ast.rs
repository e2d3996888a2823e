//! The abstract syntax tree this crate builds: a small table of tagged
//! node variants rather than a class hierarchy, so dispatch is a `match`
//! and there is no virtual call or RTTI anywhere in the tree.

use pascalc_util::{Constant, SourceLocation, TokenKind};

/// The root of a parsed source file: a name and the statement sequence
/// between its `begin`/`end`.
#[derive(Clone, Debug, PartialEq)]
pub struct Program {
    pub name: String,
    pub block: Block,
    pub location: SourceLocation,
}

/// An ordered statement sequence, held by value. `repeat`'s body is
/// always a `Block` even though the surface syntax has no enclosing
/// `begin`/`end`, so every statement-sequence site in the tree has the
/// same shape.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Block {
    pub body: Vec<Expr>,
}

/// One case arm: the constants it matches on, and the statement run
/// when the selector equals one of them.
#[derive(Clone, Debug, PartialEq)]
pub struct CaseArm {
    pub labels: Vec<Constant>,
    pub body: Box<Expr>,
}

/// A statement or expression node. Pascal does not distinguish
/// statements from expressions as sharply as later languages do — an
/// assignment and a conditional are both things that appear in a
/// statement sequence — so both live in one tagged enum.
#[derive(Clone, Debug, PartialEq)]
pub enum Expr {
    IntLiteral(i64, SourceLocation),
    RealLiteral(f64, SourceLocation),
    CharLiteral(u8, SourceLocation),
    StringLiteral(String, SourceLocation),
    BoolLiteral(bool, SourceLocation),

    VariableRef {
        name: String,
        location: SourceLocation,
    },

    SetLiteral {
        elements: Vec<Expr>,
        location: SourceLocation,
    },

    Unary {
        op: TokenKind,
        operand: Box<Expr>,
        location: SourceLocation,
    },

    Binary {
        op: TokenKind,
        lhs: Box<Expr>,
        rhs: Box<Expr>,
        location: SourceLocation,
    },

    Assign {
        lhs: Box<Expr>,
        rhs: Box<Expr>,
        location: SourceLocation,
    },

    If {
        cond: Box<Expr>,
        then_part: Box<Expr>,
        else_part: Option<Box<Expr>>,
        location: SourceLocation,
    },

    While {
        cond: Box<Expr>,
        body: Box<Expr>,
        location: SourceLocation,
    },

    Repeat {
        cond: Box<Expr>,
        body: Block,
        location: SourceLocation,
    },

    For {
        control_var: String,
        start: Box<Expr>,
        end: Box<Expr>,
        down: bool,
        body: Box<Expr>,
        location: SourceLocation,
    },

    /// A `case` statement. `otherwise` is the Extended Pascal default
    /// arm this crate's dictionary already reserves the keyword for.
    Case {
        selector: Box<Expr>,
        arms: Vec<CaseArm>,
        otherwise: Option<Box<Expr>>,
        location: SourceLocation,
    },

    /// A `with` statement: `record_vars` are widened into scope for
    /// `body`. Field widening itself is a semantic-analysis concern;
    /// this node only records the syntax.
    With {
        record_vars: Vec<Expr>,
        body: Box<Expr>,
        location: SourceLocation,
    },

    /// A nested `begin ... end` used where a single statement is
    /// expected (e.g. as a `while` or `for` body).
    Block(Block, SourceLocation),

    /// The empty statement: a statement slot immediately followed by
    /// `;`, `end`, or `until`.
    Empty(SourceLocation),
}

impl Expr {
    pub fn location(&self) -> &SourceLocation {
        match self {
            Expr::IntLiteral(_, loc)
            | Expr::RealLiteral(_, loc)
            | Expr::CharLiteral(_, loc)
            | Expr::StringLiteral(_, loc)
            | Expr::BoolLiteral(_, loc)
            | Expr::VariableRef { location: loc, .. }
            | Expr::SetLiteral { location: loc, .. }
            | Expr::Unary { location: loc, .. }
            | Expr::Binary { location: loc, .. }
            | Expr::Assign { location: loc, .. }
            | Expr::If { location: loc, .. }
            | Expr::While { location: loc, .. }
            | Expr::Repeat { location: loc, .. }
            | Expr::For { location: loc, .. }
            | Expr::Case { location: loc, .. }
            | Expr::With { location: loc, .. }
            | Expr::Block(_, loc)
            | Expr::Empty(loc) => loc,
        }
    }
}
