// src/export/logic.rs

use crate::core::report::ReportFilter;
use crate::core::repository::EntryRepository;
use crate::errors::{AppError, AppResult};
use crate::export::fs_utils::ensure_writable;
use crate::export::{ExportFormat, notify_export_success, to_csv_string, to_json_string};
use crate::storage::KeyValueStore;
use crate::ui::messages::info;
use std::fs;
use std::path::Path;

/// Logica di alto livello per l'export.
pub struct ExportLogic;

impl ExportLogic {
    /// Export the filtered, sorted report.
    ///
    /// Fails with `NothingToExport` (and writes nothing) when no entry
    /// matches the filter. Returns the number of exported entries.
    pub fn export<S: KeyValueStore>(
        repo: &EntryRepository<S>,
        filter: &ReportFilter,
        format: ExportFormat,
        file: &str,
        force: bool,
    ) -> AppResult<usize> {
        let entries = repo.query(filter);
        if entries.is_empty() {
            return Err(AppError::NothingToExport);
        }

        let path = Path::new(file);
        ensure_writable(path, force)?;

        info(format!(
            "Exporting to {}: {}",
            format.as_str().to_uppercase(),
            path.display()
        ));

        let content = match format {
            ExportFormat::Csv => to_csv_string(&entries)?,
            ExportFormat::Json => to_json_string(&entries)?,
        };
        fs::write(path, content)?;

        tracing::debug!(file, format = format.as_str(), rows = entries.len(), "export written");
        notify_export_success(&format.as_str().to_uppercase(), path, entries.len());
        Ok(entries.len())
    }
}
