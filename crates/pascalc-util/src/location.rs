//! Source locations.
//!
//! A `SourceLocation` names a single point in a source file: which file,
//! which line (1-based), which column (0-based). Every token produced by
//! the lexer and every node produced by the parser carries one, so that
//! diagnostics can always point at the text that caused them.

use std::fmt;
use std::rc::Rc;

/// A point in a source file.
///
/// Cheap to clone: the file name is reference-counted and shared by every
/// location in the same compilation unit.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct SourceLocation {
    pub file_name: Rc<str>,
    pub line: u32,
    pub column: u32,
}

impl SourceLocation {
    pub fn new(file_name: Rc<str>, line: u32, column: u32) -> Self {
        Self {
            file_name,
            line,
            column,
        }
    }

    /// A location with no meaningful file association, used for
    /// synthesized nodes (e.g. folded constant expressions) that did not
    /// come directly from a single source position.
    pub fn unknown() -> Self {
        Self {
            file_name: Rc::from("<unknown>"),
            line: 1,
            column: 0,
        }
    }
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.file_name, self.line, self.column)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_as_file_line_column() {
        let loc = SourceLocation::new(Rc::from("prog.pas"), 3, 7);
        assert_eq!(loc.to_string(), "prog.pas:3:7");
    }

    #[test]
    fn unknown_is_stable() {
        assert_eq!(SourceLocation::unknown(), SourceLocation::unknown());
    }
}
