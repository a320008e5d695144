//! Single-byte classifiers used by the lexer.
//!
//! The lexer works on raw bytes, not decoded characters, so these predicates
//! are defined on the ASCII range only. Every byte at or above `0x80` is
//! neither a digit, a letter nor whitespace: the classification loop skips such
//! bytes, while the identifier, string and comment scanners capture them
//! verbatim.

/// Returns true for `0`-`9`.
///
/// ```
/// use pgd_lex::ascii::is_digit;
///
/// assert!(is_digit(b'7'));
/// assert!(!is_digit(b'a'));
/// ```
#[inline]
pub fn is_digit(b: u8) -> bool {
    b.is_ascii_digit()
}

/// Returns true for `a`-`z` and `A`-`Z`.
#[inline]
pub fn is_letter(b: u8) -> bool {
    b.is_ascii_alphabetic()
}

/// Returns true for space, tab, newline, vertical tab, form feed and carriage return.
///
/// Unlike [`u8::is_ascii_whitespace`], vertical tab (`0x0B`) counts as
/// whitespace, so it ends an identifier like any other blank.
#[inline]
pub fn is_whitespace(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n' | b'\x0B' | b'\x0C' | b'\r')
}

/// Returns true for the bytes that may continue a numeric literal.
#[inline]
pub fn is_numeric_continue(b: u8) -> bool {
    is_digit(b) || b == b'.' || b == b'/'
}
