//! Character classification helpers.
//!
//! Source text is ASCII (extended with the 8-bit codes a string literal
//! may legally contain); identifiers are restricted to ASCII letters,
//! digits, and underscore.

/// True if `c` may start an identifier: an ASCII letter or underscore.
pub fn is_ascii_ident_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

/// True if `c` may continue an identifier after its first character.
pub fn is_ascii_ident_continue(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// True if `c` is a valid digit in the given base (10 or 16; the only
/// two bases this language's numerals use).
pub fn is_digit_in_base(c: char, base: u32) -> bool {
    match base {
        10 => c.is_ascii_digit(),
        16 => c.is_ascii_hexdigit(),
        _ => false,
    }
}

/// Converts an ASCII hex digit to its numeric value.
pub fn hex_digit_to_value(c: char) -> Option<u8> {
    c.to_digit(16).map(|d| d as u8)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ident_start_excludes_digits() {
        assert!(is_ascii_ident_start('a'));
        assert!(is_ascii_ident_start('_'));
        assert!(!is_ascii_ident_start('1'));
    }

    #[test]
    fn ident_continue_allows_digits() {
        assert!(is_ascii_ident_continue('9'));
    }

    #[test]
    fn hex_base_accepts_letters_a_through_f() {
        assert!(is_digit_in_base('a', 16));
        assert!(is_digit_in_base('F', 16));
        assert!(!is_digit_in_base('g', 16));
    }

    #[test]
    fn decimal_base_rejects_letters() {
        assert!(!is_digit_in_base('a', 10));
        assert!(is_digit_in_base('9', 10));
    }

    #[test]
    fn hex_digit_value_is_case_insensitive() {
        assert_eq!(hex_digit_to_value('a'), Some(10));
        assert_eq!(hex_digit_to_value('A'), Some(10));
        assert_eq!(hex_digit_to_value('g'), None);
    }
}
