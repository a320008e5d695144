//! String literal lexing.

use std::io::BufRead;

use pgd_util::DiagnosticCode;

use crate::token::Token;
use crate::Lexer;

impl<R: BufRead> Lexer<R> {
    /// Lexes a quoted string. The opening `"` has already been consumed.
    ///
    /// Content is taken verbatim up to the next `"`: there are no escape
    /// sequences and newlines inside the quotes do not bump the line count.
    /// Input that ends before the closing quote yields [`Token::Illegal`].
    pub(crate) fn lex_string(&mut self) -> Token {
        let mut content = Vec::new();

        loop {
            match self.source.read_byte() {
                Some(b'"') => {
                    return Token::String(String::from_utf8_lossy(&content).into_owned());
                },
                Some(b) => content.push(b),
                None => {
                    return self.report_illegal(
                        DiagnosticCode::E_LEX_UNTERMINATED_STRING,
                        "unterminated string literal".to_string(),
                    );
                },
            }
        }
    }
}
