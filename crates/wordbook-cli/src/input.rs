//! Parse-and-validate helpers for line-oriented input. Raw text becomes a
//! typed, range-checked value here; the core never sees unvalidated input.

use std::io::{self, Write};

/// Print `msg` without a newline and read the next line, trimmed.
/// `None` means end of input.
pub fn prompt(
    lines: &mut impl Iterator<Item = io::Result<String>>,
    msg: &str,
) -> io::Result<Option<String>> {
    print!("{msg}");
    io::stdout().flush()?;
    match lines.next() {
        Some(line) => Ok(Some(line?.trim().to_string())),
        None => Ok(None),
    }
}

/// Parse a positive count. Rejects non-numeric input and zero.
pub fn parse_count(raw: &str) -> Option<usize> {
    match raw.trim().parse::<usize>() {
        Ok(n) if n > 0 => Some(n),
        _ => None,
    }
}

/// Trimmed input, or `None` if nothing is left after trimming.
pub fn non_empty(raw: &str) -> Option<&str> {
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then_some(trimmed)
}
