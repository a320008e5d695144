//! Identifier and keyword lexing.

use std::io::BufRead;

use crate::ascii::is_whitespace;
use crate::token::{lookup, Token};
use crate::Lexer;

impl<R: BufRead> Lexer<R> {
    /// Lexes an identifier whose first letter has already been consumed.
    ///
    /// An identifier runs until whitespace or end of input, so it may contain
    /// punctuation such as `-`, `.` or `;`. The finished text is checked
    /// against the keyword table.
    pub(crate) fn lex_identifier(&mut self, first: u8) -> Token {
        let mut text = vec![first];

        while let Some(b) = self.source.read_byte() {
            if is_whitespace(b) {
                self.source.unread_byte(b);
                break;
            }
            text.push(b);
        }

        lookup(String::from_utf8_lossy(&text).into_owned())
    }
}
