//! Common types and utilities for pgdt commands.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use clap::ValueEnum;
use pgd_lex::Lexer;
use serde::{Deserialize, Serialize};

use crate::error::{PgdtError, Result};

// ============================================================================
// Output Format
// ============================================================================

/// How command results are printed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One tab-separated record per line
    #[default]
    Text,
    /// A single JSON document
    Json,
}

// ============================================================================
// Input Files
// ============================================================================

/// Opens a configuration file and wraps it in a lexer.
pub fn open_lexer(path: &Path) -> Result<Lexer<BufReader<File>>> {
    let file = File::open(path)
        .map_err(|e| PgdtError::FileOperation(format!("{}: {}", path.display(), e)))?;
    Ok(Lexer::new(BufReader::new(file)))
}

/// Turns an I/O error that cut the lexer's input short into a command error.
pub fn ensure_fully_read<R: BufRead>(lexer: &Lexer<R>, path: &Path) -> Result<()> {
    match lexer.io_error() {
        Some(e) => Err(PgdtError::FileOperation(format!(
            "{}: read failed: {}",
            path.display(),
            e
        ))),
        None => Ok(()),
    }
}
