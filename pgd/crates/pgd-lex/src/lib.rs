//! pgd-lex - Lexer for the DHCP server configuration language
//!
//! This crate turns configuration text into a stream of tokens for the
//! configuration parser. The parser pulls one token at a time and may give
//! the most recent one back.
//!
//! # Example Usage
//!
//! ```
//! use std::net::Ipv4Addr;
//! use pgd_lex::{Keyword, Lexer, Token};
//!
//! let source = "network \"lan\"\n  subnet 192.168.1.0/24\nend\n";
//! let mut lexer = Lexer::from_bytes(source.as_bytes());
//!
//! let first = lexer.next_token();
//! assert_eq!(first.token, Token::Keyword(Keyword::Network));
//!
//! // Give it back and read it again
//! lexer.unread().unwrap();
//! assert_eq!(lexer.next_token(), first);
//!
//! assert_eq!(lexer.next_token().token, Token::String("lan".into()));
//! assert_eq!(lexer.next_token().token, Token::Keyword(Keyword::Subnet));
//!
//! // A CIDR literal yields the address and then the mask
//! assert_eq!(lexer.next_token().token, Token::IpAddress(Ipv4Addr::new(192, 168, 1, 0)));
//! assert_eq!(lexer.next_token().token, Token::IpAddress(Ipv4Addr::new(255, 255, 255, 0)));
//! ```
//!
//! # Module Structure
//!
//! - [`token`] - Token, keyword and lexeme types
//! - [`lexer`] - Main lexer implementation
//! - [`source`] - Byte source with one byte of pushback
//! - [`ascii`] - Byte classifiers
//! - [`error`] - Pushback misuse errors
//!
//! # Token Categories
//!
//! ## Keywords
//!
//! `global`, `network`, `subnet`, `pool`, `range`, `registered`,
//! `unregistered`, `end`, `option`, `server-identifier`,
//! `default-lease-time`, `max-lease-time`, `free-lease-after`, `local`
//!
//! ## Literals
//!
//! - **Number**: `86400`
//! - **IP address**: `10.0.0.1`
//! - **Network**: `10.0.0.0/8`, delivered as two IP address tokens
//! - **String**: `"lan"`, no escapes
//!
//! ## Other
//!
//! - **Identifier**: a letter followed by anything up to the next whitespace
//! - **Comment**: `#` to the end of the line
//! - **Illegal**: a literal that could not be decoded
//! - **EOF**: end of input

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod ascii;
pub mod error;
pub mod lexer;
pub mod source;
pub mod token;

mod edge_cases;

pub use error::LexError;
pub use lexer::Lexer;
pub use token::{keyword_from_ident, lookup, Keyword, Lexeme, Token, TokenKind};
