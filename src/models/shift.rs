use super::Record;
use crate::errors::AppError;
use crate::utils::date::{format_date, parse_date};
use crate::utils::time::{shift_minutes, time_key};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One work period at a location.
///
/// `date` keeps the stored ISO-8601 text as-is: records written by older
/// versions may carry a full timestamp or an unparsable value, and those must
/// survive a save untouched. Use [`Shift::day`] to get the calendar day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Shift {
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(alias = "local")]
    pub location_id: String,
    #[serde(alias = "data")]
    pub date: String,
    #[serde(alias = "horaInicio")]
    pub start_time: String,
    #[serde(alias = "horaFim")]
    pub end_time: String,
    #[serde(alias = "valor", default)]
    pub amount: f64,
    #[serde(alias = "pago", default)]
    pub paid: bool,
    #[serde(alias = "observacoes", default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl Shift {
    /// Calendar day of the shift, `None` when the stored date is malformed.
    pub fn day(&self) -> Option<NaiveDate> {
        parse_date(&self.date)
    }

    /// (day, HHMM) ordering key; callers filter malformed dates first.
    pub fn sort_key(&self) -> (Option<NaiveDate>, u32) {
        (self.day(), time_key(&self.start_time))
    }

    pub fn minutes(&self) -> i64 {
        shift_minutes(&self.start_time, &self.end_time)
    }
}

#[derive(Debug, Clone)]
pub struct NewShift {
    pub title: String,
    pub location_id: String,
    pub date: NaiveDate,
    pub start_time: String,
    pub end_time: String,
    pub amount: f64,
    pub paid: bool,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct ShiftPatch {
    pub title: Option<String>,
    pub location_id: Option<String>,
    pub date: Option<NaiveDate>,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    pub amount: Option<f64>,
    pub paid: Option<bool>,
    /// `Some(None)` clears the notes.
    pub notes: Option<Option<String>>,
}

impl ShiftPatch {
    pub fn paid(paid: bool) -> Self {
        Self {
            paid: Some(paid),
            ..Default::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.location_id.is_none()
            && self.date.is_none()
            && self.start_time.is_none()
            && self.end_time.is_none()
            && self.amount.is_none()
            && self.paid.is_none()
            && self.notes.is_none()
    }
}

impl Record for Shift {
    type Draft = NewShift;
    type Patch = ShiftPatch;

    const STORAGE_KEY: &'static str = "plantoes-dados";
    const LABEL: &'static str = "shift";

    fn id(&self) -> &str {
        &self.id
    }

    fn from_draft(id: String, draft: NewShift) -> Self {
        Self {
            id,
            title: draft.title,
            location_id: draft.location_id,
            date: format_date(draft.date),
            start_time: draft.start_time,
            end_time: draft.end_time,
            amount: draft.amount,
            paid: draft.paid,
            notes: draft.notes,
        }
    }

    fn apply_patch(&mut self, patch: &ShiftPatch) {
        if let Some(v) = &patch.title {
            self.title = v.clone();
        }
        if let Some(v) = &patch.location_id {
            self.location_id = v.clone();
        }
        if let Some(v) = patch.date {
            self.date = format_date(v);
        }
        if let Some(v) = &patch.start_time {
            self.start_time = v.clone();
        }
        if let Some(v) = &patch.end_time {
            self.end_time = v.clone();
        }
        if let Some(v) = patch.amount {
            self.amount = v;
        }
        if let Some(v) = patch.paid {
            self.paid = v;
        }
        if let Some(v) = &patch.notes {
            self.notes = v.clone();
        }
    }

    fn not_found(id: &str) -> AppError {
        AppError::ShiftNotFound(id.to_string())
    }

    fn load_warning(&self) -> Option<String> {
        self.day().is_none().then(|| {
            format!(
                "Shift {} has an invalid date '{}'; it is kept but left out of every view.",
                self.id, self.date
            )
        })
    }
}
