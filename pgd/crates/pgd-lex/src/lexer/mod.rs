//! Lexer module.
//!
//! The lexer implementation is split into focused components:
//! - `core` - Lexer struct, classification loop, pushback and overflow queue
//! - `number` - integer, dotted-quad and CIDR literals
//! - `string` - quoted strings
//! - `comment` - `#` line comments
//! - `identifier` - identifiers and keywords

mod comment;
mod core;
mod identifier;
mod number;
mod string;

pub use self::core::Lexer;
