//! Numeric literal lexing.
//!
//! Integers, dotted-quad addresses and CIDR networks all start with a digit
//! and are made of digits, `.` and `/`. The scanner reads the whole run first
//! and then decides what it was from the number of dots and whether a slash
//! was seen:
//!
//! | slash | dots | literal            | tokens                         |
//! |-------|------|--------------------|--------------------------------|
//! | yes   | 3    | `a.b.c.d/n`        | `IpAddress` addr, `IpAddress` mask |
//! | no    | 3    | `a.b.c.d`          | `IpAddress`                    |
//! | no    | 0    | `n`                | `Number`                       |
//! | other |      | anything else      | `Illegal`                      |
//!
//! A literal of a known shape that fails to decode is also `Illegal`.

use std::io::BufRead;
use std::net::Ipv4Addr;

use pgd_util::DiagnosticCode;

use super::core::Scan;
use crate::ascii::is_numeric_continue;
use crate::token::Token;
use crate::Lexer;

/// Shape of a numeric run, decided by its separators alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum NumericShape {
    Cidr,
    Address,
    Integer,
    Unsupported,
}

impl NumericShape {
    fn of(dot_count: usize, has_slash: bool) -> Self {
        match (has_slash, dot_count) {
            (true, 3) => NumericShape::Cidr,
            (false, 3) => NumericShape::Address,
            (false, 0) => NumericShape::Integer,
            _ => NumericShape::Unsupported,
        }
    }
}

impl<R: BufRead> Lexer<R> {
    /// Lexes a numeric literal starting at the current byte, which must be a digit.
    ///
    /// The byte that ends the run is left unread so the classification loop
    /// sees it next.
    pub(crate) fn lex_numeric(&mut self) -> Scan {
        let mut text = String::new();
        let mut dot_count = 0;
        let mut has_slash = false;

        while let Some(b) = self.source.read_byte() {
            if !is_numeric_continue(b) {
                self.source.unread_byte(b);
                break;
            }
            match b {
                b'.' => dot_count += 1,
                b'/' => has_slash = true,
                _ => {},
            }
            text.push(char::from(b));
        }

        match NumericShape::of(dot_count, has_slash) {
            NumericShape::Cidr => match parse_cidr(&text) {
                Some((addr, mask)) => Scan::Many(vec![Token::IpAddress(addr), Token::IpAddress(mask)]),
                None => Scan::One(self.report_illegal(
                    DiagnosticCode::E_LEX_INVALID_CIDR,
                    format!("malformed network `{}`", text),
                )),
            },
            NumericShape::Address => match text.parse::<Ipv4Addr>() {
                Ok(addr) => Scan::One(Token::IpAddress(addr)),
                Err(_) => Scan::One(self.report_illegal(
                    DiagnosticCode::E_LEX_INVALID_IP,
                    format!("malformed IP address `{}`", text),
                )),
            },
            NumericShape::Integer => match text.parse::<i64>() {
                Ok(value) => Scan::One(Token::Number(value)),
                Err(e) => Scan::One(self.report_illegal(
                    DiagnosticCode::E_LEX_INVALID_NUMBER,
                    format!("invalid integer `{}`: {}", text, e),
                )),
            },
            NumericShape::Unsupported => Scan::One(self.report_illegal(
                DiagnosticCode::E_LEX_UNSUPPORTED_NUMERIC,
                format!("`{}` is not an integer, IP address or network", text),
            )),
        }
    }
}

/// Parses `a.b.c.d/n` into the address as written and the netmask for `n`.
fn parse_cidr(text: &str) -> Option<(Ipv4Addr, Ipv4Addr)> {
    let (addr, prefix) = text.split_once('/')?;
    let addr = addr.parse::<Ipv4Addr>().ok()?;
    let prefix = prefix.parse::<u32>().ok()?;
    if prefix > 32 {
        return None;
    }
    let mask = u32::MAX.checked_shl(32 - prefix).unwrap_or(0);
    Some((addr, Ipv4Addr::from(mask)))
}
