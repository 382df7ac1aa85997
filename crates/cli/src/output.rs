//! Command output.
//!
//! Every command prints exactly one JSON document to stdout.

use anyhow::{Context, Result};
use serde::Serialize;
use std::io::Write;

/// Render `value` as pretty JSON.
pub fn render_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    serde_json::to_string_pretty(value).context("Failed to serialize output")
}

/// Print `value` as pretty JSON followed by a newline.
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    let rendered = render_json(value)?;
    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{rendered}").context("Failed to write output")?;
    Ok(())
}
