//! Shift-only queries and payment mutations.

use super::ShiftStore;
use crate::errors::AppResult;
use crate::models::shift::{Shift, ShiftPatch};
use crate::utils::date::in_month;
use chrono::NaiveDate;

impl ShiftStore<'_> {
    /// Shifts with a parsable date, paired with that date.
    /// Malformed dates were reported at load time and are left out silently.
    pub fn dated(&self) -> Vec<(NaiveDate, &Shift)> {
        self.items()
            .iter()
            .filter_map(|s| s.day().map(|d| (d, s)))
            .collect()
    }

    /// Shifts on the same calendar day as `date`.
    pub fn get_by_date(&self, date: NaiveDate) -> Vec<Shift> {
        self.dated()
            .into_iter()
            .filter(|(d, _)| *d == date)
            .map(|(_, s)| s.clone())
            .collect()
    }

    /// Shifts in calendar month `month` (1-12) of `year`.
    pub fn get_by_month(&self, month: u32, year: i32) -> Vec<Shift> {
        self.dated()
            .into_iter()
            .filter(|(d, _)| in_month(*d, year, month))
            .map(|(_, s)| s.clone())
            .collect()
    }

    pub fn mark_paid(&mut self, id: &str) -> AppResult<bool> {
        self.update(id, &ShiftPatch::paid(true))
    }

    /// Flip the paid flag; returns the new value, `None` when the id is unknown.
    pub fn toggle_paid(&mut self, id: &str) -> AppResult<Option<bool>> {
        let Some(current) = self.get_by_id(id).map(|s| s.paid) else {
            return Ok(None);
        };
        self.update(id, &ShiftPatch::paid(!current))?;
        Ok(Some(!current))
    }
}
