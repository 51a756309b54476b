use crate::errors::AppResult;
use crate::export::model::ExportDocument;
use std::path::Path;

/// Write the export document as pretty-printed JSON.
pub fn write_json(path: &Path, doc: &ExportDocument) -> AppResult<()> {
    let json = serde_json::to_string_pretty(doc)?;
    std::fs::write(path, json)?;
    Ok(())
}
