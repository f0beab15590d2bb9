// src/export/json_csv.rs

use crate::core::view::{ReportRow, headers};
use crate::errors::{AppError, AppResult};
use crate::models::Entry;
use csv::{QuoteStyle, Terminator, WriterBuilder};

/// Render entries as `;`-separated text with every field quoted.
/// The first line holds the column titles.
pub fn to_csv_string(entries: &[Entry]) -> AppResult<String> {
    let mut wtr = WriterBuilder::new()
        .delimiter(b';')
        .quote_style(QuoteStyle::Always)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    wtr.write_record(headers())?;
    for e in entries {
        wtr.write_record(ReportRow::from_entry(e).cells())?;
    }

    let bytes = wtr
        .into_inner()
        .map_err(|e| AppError::Export(format!("CSV flush error: {e}")))?;
    String::from_utf8(bytes).map_err(|e| AppError::Export(format!("CSV encoding error: {e}")))
}

/// Pretty-printed JSON array, same layout as the stored snapshot.
pub fn to_json_string(entries: &[Entry]) -> AppResult<String> {
    Ok(serde_json::to_string_pretty(entries)?)
}
