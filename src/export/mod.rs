// src/export/mod.rs

pub(crate) mod fs_utils;
mod json_csv;
pub mod logic;

pub use json_csv::{to_csv_string, to_json_string};
pub use logic::ExportLogic;

use crate::ui::messages::success;
use clap::ValueEnum;
use std::path::Path;

/// File name offered when the user does not pick one.
pub const DEFAULT_EXPORT_FILE: &str = "relatorio-ponto.csv";

/// Final status line shared by every export format.
pub(crate) fn notify_export_success(label: &str, path: &Path, rows: usize) {
    success(format!(
        "{label} export completed: {} ({rows} entries)",
        path.display()
    ));
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    Csv,
    Json,
}

impl ExportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        }
    }
}
