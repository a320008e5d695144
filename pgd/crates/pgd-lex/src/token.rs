//! Token definitions for the DHCP configuration language.
//!
//! A [`Token`] carries its payload in the variant itself, so a token can never
//! hold a value that disagrees with its kind. The lexer hands tokens to the
//! parser wrapped in a [`Lexeme`], which adds the line number.

use std::fmt;
use std::net::Ipv4Addr;

use serde::Serialize;

/// Reserved words of the configuration language.
///
/// Keywords are matched case-sensitively against the whole identifier run, so
/// `Subnet` and `subnet2` are plain identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Keyword {
    /// `global`
    Global,
    /// `network`
    Network,
    /// `subnet`
    Subnet,
    /// `pool`
    Pool,
    /// `range`
    Range,
    /// `registered`
    Registered,
    /// `unregistered`
    Unregistered,
    /// `end`
    End,
    /// `option`
    Option,
    /// `server-identifier`
    ServerIdentifier,
    /// `default-lease-time`
    DefaultLeaseTime,
    /// `max-lease-time`
    MaxLeaseTime,
    /// `free-lease-after`
    FreeLeaseAfter,
    /// `local`
    Local,
}

impl Keyword {
    /// Every keyword, in declaration order.
    pub const ALL: [Keyword; 14] = [
        Keyword::Global,
        Keyword::Network,
        Keyword::Subnet,
        Keyword::Pool,
        Keyword::Range,
        Keyword::Registered,
        Keyword::Unregistered,
        Keyword::End,
        Keyword::Option,
        Keyword::ServerIdentifier,
        Keyword::DefaultLeaseTime,
        Keyword::MaxLeaseTime,
        Keyword::FreeLeaseAfter,
        Keyword::Local,
    ];

    /// The source spelling of the keyword.
    pub const fn as_str(self) -> &'static str {
        match self {
            Keyword::Global => "global",
            Keyword::Network => "network",
            Keyword::Subnet => "subnet",
            Keyword::Pool => "pool",
            Keyword::Range => "range",
            Keyword::Registered => "registered",
            Keyword::Unregistered => "unregistered",
            Keyword::End => "end",
            Keyword::Option => "option",
            Keyword::ServerIdentifier => "server-identifier",
            Keyword::DefaultLeaseTime => "default-lease-time",
            Keyword::MaxLeaseTime => "max-lease-time",
            Keyword::FreeLeaseAfter => "free-lease-after",
            Keyword::Local => "local",
        }
    }

    /// Upper snake case name used when printing token kinds.
    pub const fn name(self) -> &'static str {
        match self {
            Keyword::Global => "GLOBAL",
            Keyword::Network => "NETWORK",
            Keyword::Subnet => "SUBNET",
            Keyword::Pool => "POOL",
            Keyword::Range => "RANGE",
            Keyword::Registered => "REGISTERED",
            Keyword::Unregistered => "UNREGISTERED",
            Keyword::End => "END",
            Keyword::Option => "OPTION",
            Keyword::ServerIdentifier => "SERVER_IDENTIFIER",
            Keyword::DefaultLeaseTime => "DEFAULT_LEASE_TIME",
            Keyword::MaxLeaseTime => "MAX_LEASE_TIME",
            Keyword::FreeLeaseAfter => "FREE_LEASE_AFTER",
            Keyword::Local => "LOCAL",
        }
    }
}

impl fmt::Display for Keyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Looks up a reserved word by its exact source spelling.
///
/// # Example
///
/// ```
/// use pgd_lex::token::{keyword_from_ident, Keyword};
///
/// assert_eq!(keyword_from_ident("subnet"), Some(Keyword::Subnet));
/// assert_eq!(keyword_from_ident("Subnet"), None);
/// ```
pub fn keyword_from_ident(text: &str) -> Option<Keyword> {
    let keyword = match text {
        "global" => Keyword::Global,
        "network" => Keyword::Network,
        "subnet" => Keyword::Subnet,
        "pool" => Keyword::Pool,
        "range" => Keyword::Range,
        "registered" => Keyword::Registered,
        "unregistered" => Keyword::Unregistered,
        "end" => Keyword::End,
        "option" => Keyword::Option,
        "server-identifier" => Keyword::ServerIdentifier,
        "default-lease-time" => Keyword::DefaultLeaseTime,
        "max-lease-time" => Keyword::MaxLeaseTime,
        "free-lease-after" => Keyword::FreeLeaseAfter,
        "local" => Keyword::Local,
        _ => return None,
    };
    Some(keyword)
}

/// Resolves identifier text to a keyword token or a generic identifier token.
pub fn lookup(text: String) -> Token {
    match keyword_from_ident(&text) {
        Some(keyword) => Token::Keyword(keyword),
        None => Token::Ident(text),
    }
}

/// A token produced by the lexer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Token {
    /// End of input. Produced once per traversal and repeated on later reads.
    Eof,
    /// A literal that could not be decoded. Details go to the lexer's diagnostics.
    Illegal,
    /// Quoted string contents, verbatim (no escape processing).
    String(String),
    /// Signed decimal integer.
    Number(i64),
    /// IPv4 address; a CIDR literal yields two of these (address, then mask).
    IpAddress(Ipv4Addr),
    /// Text after `#` up to the end of the line.
    Comment(String),
    /// Identifier that is not a reserved word.
    Ident(String),
    /// Reserved word.
    Keyword(Keyword),
}

impl Token {
    /// Returns the payload-free kind of this token.
    pub fn kind(&self) -> TokenKind {
        match self {
            Token::Eof => TokenKind::Eof,
            Token::Illegal => TokenKind::Illegal,
            Token::String(_) => TokenKind::String,
            Token::Number(_) => TokenKind::Number,
            Token::IpAddress(_) => TokenKind::IpAddress,
            Token::Comment(_) => TokenKind::Comment,
            Token::Ident(_) => TokenKind::Ident,
            Token::Keyword(keyword) => TokenKind::Keyword(*keyword),
        }
    }

    /// Raw identifier text for identifier and keyword tokens.
    pub fn text(&self) -> Option<&str> {
        match self {
            Token::Ident(text) => Some(text),
            Token::Keyword(keyword) => Some(keyword.as_str()),
            _ => None,
        }
    }

    /// Returns true for [`Token::Eof`].
    pub fn is_eof(&self) -> bool {
        matches!(self, Token::Eof)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Eof => f.write_str("<eof>"),
            Token::Illegal => f.write_str("<illegal>"),
            Token::String(s) => write!(f, "\"{}\"", s),
            Token::Number(n) => write!(f, "{}", n),
            Token::IpAddress(ip) => write!(f, "{}", ip),
            Token::Comment(c) => write!(f, "#{}", c),
            Token::Ident(text) => f.write_str(text),
            Token::Keyword(keyword) => f.write_str(keyword.as_str()),
        }
    }
}

/// The kind of a token without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// See [`Token::Eof`]
    Eof,
    /// See [`Token::Illegal`]
    Illegal,
    /// See [`Token::String`]
    String,
    /// See [`Token::Number`]
    Number,
    /// See [`Token::IpAddress`]
    IpAddress,
    /// See [`Token::Comment`]
    Comment,
    /// See [`Token::Ident`]
    Ident,
    /// See [`Token::Keyword`]
    Keyword(Keyword),
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TokenKind::Eof => "EOF",
            TokenKind::Illegal => "ILLEGAL",
            TokenKind::String => "STRING",
            TokenKind::Number => "NUMBER",
            TokenKind::IpAddress => "IP_ADDRESS",
            TokenKind::Comment => "COMMENT",
            TokenKind::Ident => "IDENT",
            TokenKind::Keyword(keyword) => keyword.name(),
        };
        f.write_str(name)
    }
}

/// A token tagged with the line counter value at the moment it was produced.
///
/// The line is taken when the token's scan completes, so a token followed by
/// newlines the scanner did not consume still reports its own line, while a
/// quoted string spanning lines reports the line it started on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Lexeme {
    /// The token
    pub token: Token,
    /// 1-based line number
    pub line: u32,
}

impl Lexeme {
    /// Pairs a token with its line.
    pub fn new(token: Token, line: u32) -> Self {
        Self { token, line }
    }

    /// Shorthand for `self.token.kind()`.
    pub fn kind(&self) -> TokenKind {
        self.token.kind()
    }
}

impl fmt::Display for Lexeme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\t{}\t{}", self.line, self.token.kind(), self.token)
    }
}
