//! Tokens command implementation.
//!
//! Lists every token of a configuration file with its line number.

use std::io::{self, Write};
use std::path::PathBuf;

use pgd_lex::{Lexeme, TokenKind};
use tracing::{debug, info};

use super::common::{ensure_fully_read, open_lexer, OutputFormat};
use crate::error::Result;

/// Arguments for the tokens command.
#[derive(Debug, Clone)]
pub struct TokensArgs {
    /// Configuration file to lex.
    pub file: PathBuf,

    /// Output format.
    pub format: OutputFormat,

    /// Leave comments out of the listing.
    pub skip_comments: bool,

    /// Enable verbose output.
    pub verbose: bool,
}

/// Execute the tokens command, printing to stdout.
pub fn run_tokens(args: TokensArgs) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_tokens(&args, &mut out)
}

/// Lexes `args.file` and writes the listing to `out`.
pub fn write_tokens<W: Write>(args: &TokensArgs, out: &mut W) -> Result<()> {
    debug!(file = %args.file.display(), "lexing");

    let mut lexer = open_lexer(&args.file)?;
    let lexemes: Vec<Lexeme> = lexer
        .by_ref()
        .filter(|l| !(args.skip_comments && l.kind() == TokenKind::Comment))
        .collect();
    ensure_fully_read(&lexer, &args.file)?;

    match args.format {
        OutputFormat::Text => {
            for lexeme in &lexemes {
                writeln!(out, "{}", lexeme)?;
            }
        },
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, &lexemes)?;
            writeln!(out)?;
        },
    }

    if args.verbose {
        let illegal = lexer.diagnostics().error_count();
        info!(
            file = %args.file.display(),
            tokens = lexemes.len(),
            illegal,
            "lexed"
        );
    }

    Ok(())
}
