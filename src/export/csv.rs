use crate::errors::AppResult;
use crate::export::model::ShiftExport;
use csv::Writer;
use std::path::Path;

/// Write one CSV row per shift; the header comes from the field names.
pub fn write_csv(path: &Path, rows: &[ShiftExport]) -> AppResult<()> {
    let mut wtr = Writer::from_path(path)?;

    for row in rows {
        wtr.serialize(row)?;
    }

    wtr.flush()?;
    Ok(())
}
