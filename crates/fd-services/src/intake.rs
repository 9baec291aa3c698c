//! Interactive collection of the visitor name.

use fd_core::security::input::{self, ValidationError};
use std::io::{BufRead, Write};
use thiserror::Error;

/// Prompt shown before the name is read.
pub const PROMPT: &str = "Enter your name: ";

#[derive(Debug, Error)]
pub enum IntakeError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("{0}")]
    Invalid(#[from] ValidationError),
}

/// Prompt on `writer`, read one line from `reader`, and validate it.
///
/// The returned name is trimmed of surrounding whitespace but keeps its
/// internal spacing. Rejection is an ordinary result, not a process-level
/// failure; the caller decides what to report.
pub fn collect_name<R, W>(reader: &mut R, writer: &mut W) -> Result<String, IntakeError>
where
    R: BufRead,
    W: Write,
{
    write!(writer, "{}", PROMPT)?;
    writer.flush()?;

    let mut line = String::new();
    reader.read_line(&mut line)?;

    let name = line.trim();
    input::validate_visitor_name(name)?;
    Ok(name.to_string())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
