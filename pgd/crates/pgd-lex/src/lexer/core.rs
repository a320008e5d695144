//! Core lexer implementation.
//!
//! This module contains the `Lexer` struct, the byte classification loop and
//! the token pushback bookkeeping. The sub-scanners live in sibling modules as
//! further `impl` blocks on the same struct.

use std::collections::VecDeque;
use std::io::{self, BufRead};

use pgd_util::{DiagnosticCode, Handler};
use tracing::{debug, trace};

use crate::ascii::{is_digit, is_letter};
use crate::error::{LexError, Result};
use crate::source::ByteSource;
use crate::token::{Lexeme, Token};

/// What a sub-scanner produced for one literal.
///
/// Only CIDR literals produce more than one token; the extras wait in the
/// lexer's overflow queue until the parser asks for them.
#[derive(Debug)]
pub(crate) enum Scan {
    One(Token),
    Many(Vec<Token>),
}

/// Lexer for the DHCP configuration language.
///
/// The lexer pulls bytes from a buffered reader and hands out one
/// [`Lexeme`] per call to [`Lexer::next_token`]. It never fails: end of input
/// is [`Token::Eof`] and undecodable literals are [`Token::Illegal`], each
/// with an error recorded in [`Lexer::diagnostics`].
///
/// One instance serves one input stream and is not meant to be shared
/// between threads.
///
/// # Example
///
/// ```
/// use std::net::Ipv4Addr;
/// use pgd_lex::{Keyword, Lexer, Token};
///
/// let mut lexer = Lexer::from_bytes(b"subnet 10.0.0.0/24");
///
/// assert_eq!(lexer.next_token().token, Token::Keyword(Keyword::Subnet));
/// assert_eq!(lexer.next_token().token, Token::IpAddress(Ipv4Addr::new(10, 0, 0, 0)));
/// assert_eq!(lexer.next_token().token, Token::IpAddress(Ipv4Addr::new(255, 255, 255, 0)));
/// assert_eq!(lexer.next_token().token, Token::Eof);
/// ```
#[derive(Debug)]
pub struct Lexer<R> {
    /// Byte source with one byte of pushback.
    pub(crate) source: ByteSource<R>,

    /// Current line number (1-based). Bumped only by newlines seen in the
    /// classification loop.
    pub(crate) line: u32,

    /// Tokens already scanned but not yet returned.
    pending: VecDeque<Lexeme>,

    /// The most recently returned lexeme.
    prev: Option<Lexeme>,

    /// Whether the next call re-delivers `prev`.
    reread_prev: bool,

    /// Diagnostics for illegal tokens.
    pub(crate) handler: Handler,
}

impl<'a> Lexer<&'a [u8]> {
    /// Creates a lexer over an in-memory byte slice.
    pub fn from_bytes(source: &'a [u8]) -> Self {
        Lexer::new(source)
    }
}

impl<R: BufRead> Lexer<R> {
    /// Creates a lexer over an open reader positioned at the start of the
    /// configuration text. The lexer does not close the reader.
    pub fn new(reader: R) -> Self {
        Self {
            source: ByteSource::new(reader),
            line: 1,
            pending: VecDeque::new(),
            prev: None,
            reread_prev: false,
            handler: Handler::new(),
        }
    }

    /// Returns the next token in stream order.
    ///
    /// A token given back with [`Lexer::unread`] is returned first, then any
    /// token left over from a multi-token literal, and only then is new input
    /// scanned. After the end of input every call returns [`Token::Eof`].
    pub fn next_token(&mut self) -> Lexeme {
        if self.reread_prev {
            if let Some(prev) = &self.prev {
                self.reread_prev = false;
                return prev.clone();
            }
        }

        if let Some(lexeme) = self.pending.pop_front() {
            self.prev = Some(lexeme.clone());
            return lexeme;
        }

        // Every token from this scan takes the line as it stands once the
        // scan has finished, not where the literal started.
        let scan = self.classify();
        let line = self.line;
        let lexeme = match scan {
            None => Lexeme::new(Token::Eof, line),
            Some(Scan::One(token)) => Lexeme::new(token, line),
            Some(Scan::Many(tokens)) => {
                let mut tokens = tokens.into_iter();
                let first = tokens.next().unwrap_or(Token::Illegal);
                self.pending
                    .extend(tokens.map(|token| Lexeme::new(token, line)));
                Lexeme::new(first, line)
            },
        };

        trace!(line = lexeme.line, kind = %lexeme.kind(), "token");
        self.prev = Some(lexeme.clone());
        lexeme
    }

    /// Makes the next call to [`Lexer::next_token`] return the most recently
    /// returned token again.
    ///
    /// Only one token can be given back. Calling this twice without reading
    /// in between, or before anything was read, is an error and leaves the
    /// lexer unchanged.
    pub fn unread(&mut self) -> Result<()> {
        if self.prev.is_none() {
            return Err(LexError::NothingToUnread);
        }
        if self.reread_prev {
            return Err(LexError::AlreadyUnread);
        }
        self.reread_prev = true;
        Ok(())
    }

    /// Drains the stream, returning every token before [`Token::Eof`] in order.
    pub fn all(&mut self) -> Vec<Lexeme> {
        let mut tokens = Vec::new();
        loop {
            let lexeme = self.next_token();
            if lexeme.token.is_eof() {
                break;
            }
            tokens.push(lexeme);
        }
        tokens
    }

    /// Reads bytes until one starts a token, then hands off to the matching
    /// sub-scanner. Returns `None` at end of input.
    fn classify(&mut self) -> Option<Scan> {
        loop {
            let c = self.source.read_byte()?;
            match c {
                b'"' => return Some(Scan::One(self.lex_string())),
                b'\n' => self.line += 1,
                b'#' => return Some(Scan::One(self.lex_comment())),
                c if is_digit(c) => {
                    self.source.unread_byte(c);
                    return Some(self.lex_numeric());
                },
                c if is_letter(c) => return Some(Scan::One(self.lex_identifier(c))),
                _ => {},
            }
        }
    }

    /// Records an error diagnostic on the current line and returns the
    /// illegal token that stands in for the bad literal.
    pub(crate) fn report_illegal(&mut self, code: DiagnosticCode, message: String) -> Token {
        debug!(line = self.line, %code, "{}", message);
        self.handler
            .build_error(self.line, message)
            .code(code)
            .emit(&mut self.handler);
        Token::Illegal
    }

    /// Returns the current line number (1-based).
    pub fn line(&self) -> u32 {
        self.line
    }

    /// Diagnostics recorded for illegal tokens so far.
    pub fn diagnostics(&self) -> &Handler {
        &self.handler
    }

    /// Removes and returns the recorded diagnostics.
    pub fn take_diagnostics(&mut self) -> Handler {
        std::mem::take(&mut self.handler)
    }

    /// The I/O error that cut the input short, if any.
    pub fn io_error(&self) -> Option<&io::Error> {
        self.source.error()
    }

    /// Returns the underlying reader so the caller can close it.
    pub fn into_inner(self) -> R {
        self.source.into_inner()
    }
}

impl<R: BufRead> Iterator for Lexer<R> {
    type Item = Lexeme;

    fn next(&mut self) -> Option<Self::Item> {
        let lexeme = self.next_token();
        if lexeme.token.is_eof() {
            None
        } else {
            Some(lexeme)
        }
    }
}
