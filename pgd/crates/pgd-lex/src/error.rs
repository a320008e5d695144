//! Error types for the lexer's token-stream API.
//!
//! Malformed input never shows up here: it becomes a [`Token::Illegal`]
//! in the stream. These errors only report misuse of the pushback contract.
//!
//! [`Token::Illegal`]: crate::token::Token::Illegal

use thiserror::Error;

/// Misuse of [`Lexer::unread`](crate::Lexer::unread).
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum LexError {
    /// `unread` was called before any token was read.
    #[error("cannot unread: no token has been read yet")]
    NothingToUnread,

    /// `unread` was called twice without a `next` in between.
    #[error("cannot unread: the previous token is already pending re-delivery")]
    AlreadyUnread,
}

/// Result type alias for lexer API operations.
pub type Result<T> = std::result::Result<T, LexError>;
