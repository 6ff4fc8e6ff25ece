//! Subcommand implementations.

pub mod catalog;
pub mod checkout;

use std::io::Write;

use dhanvantari_storefront::error::{AppError, Result};
use serde::Serialize;

/// Write `value` to stdout as pretty JSON.
fn emit_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    let text = serde_json::to_string_pretty(value)
        .map_err(|e| AppError::Internal(format!("failed to serialize output: {e}")))?;
    emit_lines([text])
}

/// Write plain lines to stdout.
fn emit_lines<I, S>(lines: I) -> Result<()>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut out = std::io::stdout().lock();
    for line in lines {
        writeln!(out, "{}", line.as_ref())
            .map_err(|e| AppError::Internal(format!("failed to write output: {e}")))?;
    }
    Ok(())
}
