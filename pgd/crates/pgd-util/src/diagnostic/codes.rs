//! Diagnostic codes for categorizing configuration errors.
//!
//! Codes follow the format `{prefix}{number}` with the number zero-padded to
//! four digits, so `E1002` always names a malformed IP address no matter
//! which tool printed it.

use std::fmt;

/// A unique code identifying a diagnostic message
///
/// # Examples
///
/// ```
/// use pgd_util::diagnostic::DiagnosticCode;
///
/// let code = DiagnosticCode::new("E", 7);
/// assert_eq!(code.as_str(), "E0007");
/// assert_eq!(DiagnosticCode::E_LEX_INVALID_CIDR.number(), 1003);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct DiagnosticCode {
    /// The prefix ("E" for errors, "W" for warnings)
    pub prefix: &'static str,
    /// The numeric identifier
    pub number: u32,
}

impl DiagnosticCode {
    /// Create a new diagnostic code
    #[inline]
    pub const fn new(prefix: &'static str, number: u32) -> Self {
        Self { prefix, number }
    }

    /// Get the prefix
    #[inline]
    pub const fn prefix(&self) -> &'static str {
        self.prefix
    }

    /// Get the numeric identifier
    #[inline]
    pub const fn number(&self) -> u32 {
        self.number
    }

    /// Get the full code string (e.g. "E1001")
    pub fn as_str(&self) -> String {
        format!("{}{:04}", self.prefix, self.number)
    }

    // =========================================================================
    // LEXER ERROR CODES (E1001-E1999)
    // =========================================================================

    /// E1001: Integer literal does not fit a signed 64-bit value
    pub const E_LEX_INVALID_NUMBER: Self = Self::new("E", 1001);
    /// E1002: Dotted-quad literal is not a valid IPv4 address
    pub const E_LEX_INVALID_IP: Self = Self::new("E", 1002);
    /// E1003: `a.b.c.d/n` literal is not a valid network
    pub const E_LEX_INVALID_CIDR: Self = Self::new("E", 1003);
    /// E1004: Digits, dots and slashes in a shape that is none of the above
    pub const E_LEX_UNSUPPORTED_NUMERIC: Self = Self::new("E", 1004);
    /// E1005: Input ended inside a quoted string
    pub const E_LEX_UNTERMINATED_STRING: Self = Self::new("E", 1005);
}

impl fmt::Debug for DiagnosticCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DiagnosticCode({})", self.as_str())
    }
}

impl fmt::Display for DiagnosticCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{:04}", self.prefix, self.number)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_as_str_pads_number() {
        assert_eq!(DiagnosticCode::new("E", 1).as_str(), "E0001");
        assert_eq!(DiagnosticCode::new("W", 42).as_str(), "W0042");
        assert_eq!(DiagnosticCode::new("E", 1001).as_str(), "E1001");
    }

    #[test]
    fn test_display_and_debug() {
        let code = DiagnosticCode::E_LEX_UNTERMINATED_STRING;
        assert_eq!(format!("{}", code), "E1005");
        assert_eq!(format!("{:?}", code), "DiagnosticCode(E1005)");
    }

    #[test]
    fn test_lexer_codes_are_distinct() {
        let codes = [
            DiagnosticCode::E_LEX_INVALID_NUMBER,
            DiagnosticCode::E_LEX_INVALID_IP,
            DiagnosticCode::E_LEX_INVALID_CIDR,
            DiagnosticCode::E_LEX_UNSUPPORTED_NUMERIC,
            DiagnosticCode::E_LEX_UNTERMINATED_STRING,
        ];
        for (i, a) in codes.iter().enumerate() {
            for b in &codes[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}
