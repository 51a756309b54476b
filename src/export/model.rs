// src/export/model.rs

use crate::models::location::{Location, location_label};
use crate::models::shift::Shift;
use serde::{Deserialize, Serialize};

/// The whole data set as written by `export --format json` and read by `import`.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ExportDocument {
    pub locations: Vec<Location>,
    pub shifts: Vec<Shift>,
    #[serde(default)]
    pub version: String,
    #[serde(default)]
    pub exported_at: String,
}

/// Flat per-shift row for CSV.
#[derive(Serialize, Clone, Debug)]
pub struct ShiftExport {
    pub id: String,
    pub date: String,
    pub start_time: String,
    pub end_time: String,
    pub location: String,
    pub title: String,
    pub amount: f64,
    pub paid: bool,
    pub notes: String,
}

impl ShiftExport {
    pub fn from_shift(s: &Shift, locations: &[Location]) -> Self {
        Self {
            id: s.id.clone(),
            date: s
                .day()
                .map(|d| d.format("%Y-%m-%d").to_string())
                .unwrap_or_else(|| s.date.clone()),
            start_time: s.start_time.clone(),
            end_time: s.end_time.clone(),
            location: location_label(locations, &s.location_id).to_string(),
            title: s.title.clone(),
            amount: s.amount,
            paid: s.paid,
            notes: s.notes.clone().unwrap_or_default(),
        }
    }
}
