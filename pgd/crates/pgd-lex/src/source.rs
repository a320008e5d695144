//! Byte source with one byte of pushback.
//!
//! The lexer reads its input one byte at a time and sometimes needs to give
//! the last byte back (a digit that starts a numeric literal, the whitespace
//! that ends an identifier). `ByteSource` keeps that byte in its own slot
//! instead of relying on any pushback support of the underlying reader.

use std::io::{self, BufRead, ErrorKind};

use tracing::warn;

/// A buffered byte reader with an explicit single-byte pushback slot.
///
/// # Example
///
/// ```
/// use pgd_lex::source::ByteSource;
///
/// let mut source = ByteSource::new(&b"ab"[..]);
/// assert_eq!(source.read_byte(), Some(b'a'));
/// source.unread_byte(b'a');
/// assert_eq!(source.read_byte(), Some(b'a'));
/// assert_eq!(source.read_byte(), Some(b'b'));
/// assert_eq!(source.read_byte(), None);
/// ```
#[derive(Debug)]
pub struct ByteSource<R> {
    /// Underlying reader. Never closed by the source.
    reader: R,

    /// Byte given back by `unread_byte`, delivered before the reader is touched again.
    pushed: Option<u8>,

    /// First I/O error seen; the source reports end of input after it.
    error: Option<io::Error>,

    /// Set once the reader hit end of input or failed.
    exhausted: bool,
}

impl<R: BufRead> ByteSource<R> {
    /// Wraps an open reader positioned at the start of the input.
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            pushed: None,
            error: None,
            exhausted: false,
        }
    }

    /// Reads the next byte, or `None` at end of input.
    ///
    /// An I/O error is treated as end of input; it stays available through
    /// [`ByteSource::error`].
    pub fn read_byte(&mut self) -> Option<u8> {
        if let Some(b) = self.pushed.take() {
            return Some(b);
        }
        if self.exhausted {
            return None;
        }

        loop {
            let next = match self.reader.fill_buf() {
                Ok(buf) => buf.first().copied(),
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => {
                    warn!(error = %e, "read failed, treating as end of input");
                    self.error = Some(e);
                    self.exhausted = true;
                    return None;
                }
            };

            return match next {
                Some(b) => {
                    self.reader.consume(1);
                    Some(b)
                }
                None => {
                    self.exhausted = true;
                    None
                }
            };
        }
    }

    /// Gives back the byte most recently returned by [`ByteSource::read_byte`].
    ///
    /// Only one byte can be pending at a time.
    pub fn unread_byte(&mut self, b: u8) {
        debug_assert!(self.pushed.is_none(), "byte pushback slot already occupied");
        self.pushed = Some(b);
    }

    /// The I/O error that ended the input early, if any.
    pub fn error(&self) -> Option<&io::Error> {
        self.error.as_ref()
    }

    /// Returns the underlying reader. A pushed-back byte is lost.
    pub fn into_inner(self) -> R {
        self.reader
    }
}
