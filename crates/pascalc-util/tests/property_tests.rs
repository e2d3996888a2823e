//! Property-based tests for the token/dictionary crate's totality and
//! round-trip guarantees.

use pascalc_util::{Dictionary, SourceLocation, UNRESERVED};
use quickcheck_macros::quickcheck;
use std::rc::Rc;

/// `Dictionary::lookup` never panics on arbitrary bytes, keyword or not.
#[quickcheck]
fn lookup_is_total_over_arbitrary_strings(bytes: Vec<u8>) -> bool {
    let lexeme: String = bytes.into_iter().map(|b| b as char).collect();
    let dict = Dictionary::new();
    let _ = dict.lookup(&lexeme);
    true
}

/// Any lexeme the dictionary doesn't recognize falls back to the
/// `UNRESERVED` identifier entry, never to a partial or default-ish match.
#[quickcheck]
fn unrecognized_lexemes_fall_back_to_unreserved(bytes: Vec<u8>) -> bool {
    let lexeme: String = bytes
        .into_iter()
        .filter(|b| b.is_ascii_alphanumeric())
        .map(|b| b as char)
        .collect();
    let dict = Dictionary::new();
    if dict.contains(&lexeme) {
        return true;
    }
    dict.lookup(&lexeme) == UNRESERVED
}

/// Every dictionary entry's precedence falls in the fixed table from
/// §4.1, regardless of which lexeme produced it.
#[quickcheck]
fn known_lexeme_precedence_is_one_of_the_table_values(index: usize) -> bool {
    const LEXEMES: &[&str] = &[
        "begin", "program", "const", "+", "-", "*", "/", "=", "<>", "<", "<=", ">", ">=", ":=",
        ";", "..", "not", "and", "or", "div", "mod", "in", "shl", "shr", "xor",
    ];
    let lexeme = LEXEMES[index % LEXEMES.len()];
    let dict = Dictionary::new();
    let (_, _, precedence) = dict.lookup(lexeme);
    matches!(precedence, -1 | 2 | 10 | 20 | 40)
}

/// `SourceLocation`'s `Display` impl is a pure, order-preserving
/// round-trip of the three fields it was built from.
#[quickcheck]
fn source_location_display_embeds_its_components(line: u32, column: u32) -> bool {
    let location = SourceLocation::new(Rc::from("t.pas"), line, column);
    format!("{}", location) == format!("t.pas:{}:{}", line, column)
}
