//! Property-based tests for the lexer's totality and round-trip
//! guarantees.

use pascalc_util::{Handler, TokenCategory};
use quickcheck_macros::quickcheck;

fn lex_all(source: &str) -> (Vec<pascalc_util::Token>, usize) {
    let mut handler = Handler::new();
    let tokens = {
        let lexer = pascalc_lex::Lexer::new(source, "t.pas", &mut handler);
        lexer.collect::<Vec<_>>()
    };
    (tokens, handler.error_count())
}

/// The lexer never panics on arbitrary printable ASCII input: every
/// input either tokenizes cleanly or reports errors and still returns.
#[quickcheck]
fn lexer_is_total_over_printable_ascii(bytes: Vec<u8>) -> bool {
    let source: String = bytes
        .into_iter()
        .map(|b| if b.is_ascii_graphic() || b == b' ' || b == b'\n' { b as char } else { ' ' })
        .collect();
    let (_tokens, _errors) = lex_all(&source);
    true
}

/// Hex integer literals round-trip through `$` formatting.
#[quickcheck]
fn hex_integer_round_trips(value: u16) -> bool {
    let source = format!("${:X}", value);
    let (tokens, errors) = lex_all(&source);
    errors == 0
        && tokens.len() == 1
        && tokens[0].category == TokenCategory::Integer
        && tokens[0].payload == pascalc_util::Payload::Int(value as i64)
}

/// A keyword lexes identically regardless of which letters are
/// uppercased.
#[quickcheck]
fn keyword_lookup_is_case_insensitive(upper_mask: u8) -> bool {
    let word = "begin";
    let spelled: String = word
        .chars()
        .enumerate()
        .map(|(i, c)| if upper_mask & (1 << (i % 8)) != 0 { c.to_ascii_uppercase() } else { c })
        .collect();
    let (tokens, errors) = lex_all(&spelled);
    errors == 0 && tokens.len() == 1 && tokens[0].category == TokenCategory::Keyword
}
