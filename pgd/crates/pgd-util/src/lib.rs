//! pgd-util - Shared foundation types for the pgd configuration toolchain
//!
//! This crate holds the pieces every other pgd crate leans on. Today that is
//! the diagnostic infrastructure: the lexer records one [`Diagnostic`] per
//! illegal literal, and the `pgdt` tool renders the collected diagnostics for
//! operators.
//!
//! # Example
//!
//! ```
//! use pgd_util::{DiagnosticCode, Handler};
//!
//! let mut handler = Handler::new();
//! handler
//!     .build_error(3, "malformed IP address `10.0.0.300`")
//!     .code(DiagnosticCode::E_LEX_INVALID_IP)
//!     .emit(&mut handler);
//!
//! assert!(handler.has_errors());
//! assert_eq!(
//!     handler.diagnostics()[0].to_string(),
//!     "line 3: error[E1002]: malformed IP address `10.0.0.300`"
//! );
//! ```

#![warn(missing_docs)]

pub mod diagnostic;

pub use diagnostic::{Diagnostic, DiagnosticBuilder, DiagnosticCode, Handler, Level};
