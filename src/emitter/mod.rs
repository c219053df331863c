// src/emitter/mod.rs

//! Renders a palette table as rows of comma-terminated hex literals.
//!
//! Rendering is done in full before anything is written, so a bad entry
//! aborts the run without leaving half an array on the output.

use std::io::Write;

use log::{debug, info};

use crate::color::format_entry;
use crate::config::EmitterConfig;
use crate::error::PaletteError;


/// Formats every entry of `table` and lays the literals out in rows of
/// `config.columns`. The result always ends with a newline unless the
/// table is empty.
///
/// # Errors
/// The first entry that fails to format, wrapped in
/// `PaletteError::InvalidTableEntry` with its index.
pub fn render(table: &[&str], config: &EmitterConfig) -> Result<String, PaletteError> {
    // A zero column count would never break a row; treat it as one per row.
    let columns = config.columns.max(1);
    let mut out = String::with_capacity(table.len() * (10 + config.terminator.len() + 1));
    let mut in_row = 0usize;

    for (index, raw) in table.iter().enumerate() {
        let literal = format_entry(raw).map_err(|e| e.at_index(index))?;
        if in_row > 0 {
            out.push_str(&config.separator);
        }
        out.push_str(&literal);
        out.push_str(&config.terminator);
        in_row += 1;

        if in_row == columns {
            out.push('\n');
            in_row = 0;
        }
    }

    if in_row > 0 {
        out.push('\n');
    }

    debug!(
        "Rendered {} entries into {} row(s)",
        table.len(),
        out.lines().count()
    );
    Ok(out)
}

/// Renders `table` and writes it to `writer` in one go, then flushes.
///
/// Nothing reaches `writer` if any entry is invalid.
pub fn emit<W: Write>(
    table: &[&str],
    config: &EmitterConfig,
    writer: &mut W,
) -> Result<(), PaletteError> {
    let text = render(table, config)?;
    writer.write_all(text.as_bytes())?;
    writer.flush()?;
    info!("Emitted {} palette literals", table.len());
    Ok(())
}
