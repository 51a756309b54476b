// src/export/logic.rs

use crate::db::log::audit;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::export::csv::write_csv;
use crate::export::fs_utils::ensure_writable;
use crate::export::json::write_json;
use crate::export::model::{ExportDocument, ShiftExport};
use crate::export::range::parse_range;
use crate::export::{ExportFormat, notify_export_success};
use crate::models::shift::Shift;
use crate::store::{LocationStore, ShiftStore};
use crate::ui::messages::warning;
use chrono::{Local, NaiveDate};
use serde_json::Value;
use std::collections::HashSet;
use std::fs;
use std::path::Path;

/// High-level export logic.
pub struct ExportLogic;

impl ExportLogic {
    /// Export locations and shifts.
    ///
    /// `range` (`None`, `"all"` or a period expression) only filters shifts;
    /// shifts whose date cannot be read are left out of a filtered export.
    /// Returns the number of shifts written.
    pub fn export(
        pool: &DbPool,
        format: ExportFormat,
        file: &str,
        range: Option<&str>,
        force: bool,
    ) -> AppResult<usize> {
        let path = Path::new(file);
        ensure_writable(path, force)?;

        let bounds: Option<(NaiveDate, NaiveDate)> = match range {
            None => None,
            Some(r) if r.eq_ignore_ascii_case("all") => None,
            Some(r) => Some(parse_range(r)?),
        };

        let locations = LocationStore::load(pool)?;
        let shifts = ShiftStore::load(pool)?;

        let mut selected: Vec<Shift> = shifts
            .items()
            .iter()
            .filter(|s| match bounds {
                None => true,
                Some((from, to)) => s.day().is_some_and(|d| d >= from && d <= to),
            })
            .cloned()
            .collect();
        selected.sort_by_key(Shift::sort_key);

        if selected.is_empty() {
            warning("No shifts found for the selected range.");
        }

        match format {
            ExportFormat::Json => {
                let doc = ExportDocument {
                    locations: locations.items().to_vec(),
                    shifts: selected.clone(),
                    version: env!("CARGO_PKG_VERSION").to_string(),
                    exported_at: Local::now().to_rfc3339(),
                };
                write_json(path, &doc)?;
                notify_export_success("JSON", path);
            }
            ExportFormat::Csv => {
                let rows: Vec<ShiftExport> = selected
                    .iter()
                    .map(|s| ShiftExport::from_shift(s, locations.items()))
                    .collect();
                write_csv(path, &rows)?;
                notify_export_success("CSV", path);
            }
        }

        audit(
            &pool.conn,
            "export",
            &path.to_string_lossy(),
            &format!("{} shift(s) exported as {}", selected.len(), format.as_str()),
        );

        Ok(selected.len())
    }
}

/// Restore a JSON export, replacing both stores.
pub struct ImportLogic;

impl ImportLogic {
    /// Read and validate an export document: both `locations` and `shifts`
    /// must be present and be arrays.
    pub fn read(file: &str) -> AppResult<ExportDocument> {
        let raw = fs::read_to_string(file)?;
        let value: Value =
            serde_json::from_str(&raw).map_err(|e| AppError::Import(e.to_string()))?;

        for key in ["locations", "shifts"] {
            if !value.get(key).is_some_and(Value::is_array) {
                return Err(AppError::Import(format!("missing '{key}' array")));
            }
        }

        let doc: ExportDocument =
            serde_json::from_value(value).map_err(|e| AppError::Import(e.to_string()))?;

        ensure_unique_ids("location", doc.locations.iter().map(|l| l.id.as_str()))?;
        ensure_unique_ids("shift", doc.shifts.iter().map(|s| s.id.as_str()))?;

        Ok(doc)
    }

    /// Overwrite both stores with the document's content.
    pub fn apply(pool: &DbPool, doc: ExportDocument) -> AppResult<(usize, usize)> {
        let counts = (doc.locations.len(), doc.shifts.len());

        // Both lists land together or not at all
        let tx = pool.conn.unchecked_transaction()?;
        LocationStore::load(pool)?.replace_all(doc.locations)?;
        ShiftStore::load(pool)?.replace_all(doc.shifts)?;
        tx.commit()?;

        audit(
            &pool.conn,
            "import",
            &doc.version,
            &format!("{} location(s), {} shift(s) imported", counts.0, counts.1),
        );
        Ok(counts)
    }
}

/// Record ids must stay unique inside each store.
fn ensure_unique_ids<'a>(label: &str, ids: impl Iterator<Item = &'a str>) -> AppResult<()> {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(AppError::Import(format!("duplicate {label} id '{id}'")));
        }
    }
    Ok(())
}
