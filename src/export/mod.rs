// src/export/mod.rs

mod csv;
mod fs_utils;
mod json;
pub mod logic;
pub mod model;
pub mod range;

pub use logic::{ExportLogic, ImportLogic};
pub use model::{ExportDocument, ShiftExport};

use crate::ui::messages::success;
use clap::ValueEnum;
use std::path::Path;

/// Common completion message for exports.
pub(crate) fn notify_export_success(label: &str, path: &Path) {
    success(format!("{label} export completed: {}", path.display()));
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    /// Full backup document (locations + shifts), re-importable
    Json,
    /// One row per shift, for spreadsheets
    Csv,
}

impl ExportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Json => "json",
            ExportFormat::Csv => "csv",
        }
    }
}
