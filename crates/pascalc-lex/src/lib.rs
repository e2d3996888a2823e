//! Converts Pascal source text into a stream of tokens.
//!
//! [`Lexer`] is a pull-based tokenizer: each call to `next_token` (or
//! each step of the `Iterator` it implements) returns the next
//! [`pascalc_util::Token`], reporting through a shared
//! [`pascalc_util::Handler`] and continuing past malformed input rather
//! than aborting, so a single pass can surface every lexical error in a
//! file.

mod cursor;
mod lexer;
mod unicode;

pub use lexer::Lexer;
