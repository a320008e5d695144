//! Comment lexing.

use std::io::BufRead;

use crate::token::Token;
use crate::Lexer;

impl<R: BufRead> Lexer<R> {
    /// Lexes a `#` comment. The `#` has already been consumed.
    ///
    /// The comment runs to the end of the line; the newline itself is left
    /// for the classification loop so that it still counts.
    pub(crate) fn lex_comment(&mut self) -> Token {
        let mut text = Vec::new();

        while let Some(b) = self.source.read_byte() {
            if b == b'\n' {
                self.source.unread_byte(b);
                break;
            }
            text.push(b);
        }

        Token::Comment(String::from_utf8_lossy(&text).into_owned())
    }
}
