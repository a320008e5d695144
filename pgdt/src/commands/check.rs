//! Check command implementation.
//!
//! Lexes each file and reports every illegal literal. The command fails when
//! any file has one.

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use pgd_util::Handler;
use tracing::{debug, info};

use super::common::{ensure_fully_read, open_lexer};
use crate::error::{PgdtError, Result};

/// Arguments for the check command.
#[derive(Debug, Clone)]
pub struct CheckArgs {
    /// Configuration files to check.
    pub files: Vec<PathBuf>,

    /// Enable verbose output.
    pub verbose: bool,
}

/// Execute the check command, printing diagnostics to stdout.
pub fn run_check(args: CheckArgs) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_check(&args, &mut out)
}

/// Checks every file in `args.files`, writing one line per diagnostic.
pub fn write_check<W: Write>(args: &CheckArgs, out: &mut W) -> Result<()> {
    let mut errors = 0;
    let mut failed_files = 0;

    for path in &args.files {
        let handler = check_file(path)?;
        for diagnostic in handler.diagnostics() {
            writeln!(out, "{}: {}", path.display(), diagnostic.render())?;
        }

        if handler.has_errors() {
            errors += handler.error_count();
            failed_files += 1;
        } else if args.verbose {
            info!(file = %path.display(), "ok");
        }
    }

    if errors > 0 {
        return Err(PgdtError::Validation(format!(
            "{} illegal token(s) in {} file(s)",
            errors, failed_files
        )));
    }
    Ok(())
}

/// Lexes one file to the end and returns its diagnostics.
pub fn check_file(path: &Path) -> Result<Handler> {
    debug!(file = %path.display(), "checking");
    let mut lexer = open_lexer(path)?;
    lexer.all();
    ensure_fully_read(&lexer, path)?;
    Ok(lexer.take_diagnostics())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write_file(dir: &TempDir, name: &str, content: &str) -> PathBuf {
        let path = dir.path().join(name);
        std::fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_clean_files_pass() {
        let dir = TempDir::new().unwrap();
        let a = write_file(&dir, "a.conf", "global\n  server-identifier 10.0.0.1\nend\n");
        let b = write_file(&dir, "b.conf", "# nothing here\n");

        let mut out = Vec::new();
        write_check(
            &CheckArgs {
                files: vec![a, b],
                verbose: false,
            },
            &mut out,
        )
        .unwrap();
        assert!(out.is_empty());
    }

    #[test]
    fn test_illegal_tokens_are_reported() {
        let dir = TempDir::new().unwrap();
        let good = write_file(&dir, "good.conf", "pool end");
        let bad = write_file(&dir, "bad.conf", "range 10.0.0.300\n\nsubnet 10.0.0.0/40\n");

        let mut out = Vec::new();
        let result = write_check(
            &CheckArgs {
                files: vec![good, bad.clone()],
                verbose: false,
            },
            &mut out,
        );

        match result {
            Err(PgdtError::Validation(msg)) => {
                assert_eq!(msg, "2 illegal token(s) in 1 file(s)")
            },
            other => panic!("expected validation error, got {:?}", other),
        }

        let out = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with(&format!("{}: line 1: error[E1002]", bad.display())));
        assert!(lines[1].starts_with(&format!("{}: line 3: error[E1003]", bad.display())));
    }

    #[test]
    fn test_missing_file_is_error() {
        let dir = TempDir::new().unwrap();
        let result = check_file(&dir.path().join("absent.conf"));
        assert!(matches!(result, Err(PgdtError::FileOperation(_))));
    }

    #[test]
    fn test_unterminated_string() {
        let dir = TempDir::new().unwrap();
        let path = write_file(&dir, "s.conf", "network \"lan\n");
        let handler = check_file(&path).unwrap();
        assert_eq!(handler.error_count(), 1);
        assert!(handler.diagnostics()[0]
            .to_string()
            .contains("unterminated string literal"));
    }
}
