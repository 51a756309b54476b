use crate::core::recurrence::{Repeat, expand};
use crate::db::log::audit;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::shift::{NewShift, Shift, ShiftPatch};
use crate::store::{LocationStore, ShiftStore};
use crate::utils::time::normalize_time;

/// Fallback title when the location has no usable name.
const DEFAULT_TITLE: &str = "Plantão";

/// Parse a pay value. Accepts `1200`, `1200.50` and the pt-BR `1200,50`.
pub fn parse_amount(s: &str) -> AppResult<f64> {
    let v: f64 = s
        .trim()
        .replace(',', ".")
        .parse()
        .map_err(|_| AppError::InvalidAmount(s.to_string()))?;

    if !v.is_finite() || v < 0.0 {
        return Err(AppError::InvalidAmount(s.to_string()));
    }
    Ok(v)
}

pub struct ShiftLogic;

impl ShiftLogic {
    /// Create a shift and, depending on `repeat`, its independent repetitions.
    ///
    /// The location must exist (a unique id prefix is enough). An empty title
    /// defaults to the location's name.
    pub fn add(pool: &DbPool, draft: NewShift, repeat: &Repeat) -> AppResult<Vec<Shift>> {
        if draft.location_id.trim().is_empty() {
            return Err(AppError::MissingField("location"));
        }
        if !draft.amount.is_finite() || draft.amount < 0.0 {
            return Err(AppError::InvalidAmount(draft.amount.to_string()));
        }

        let locations = LocationStore::load(pool)?;
        let location = locations.find(draft.location_id.trim())?;

        let title = match draft.title.trim() {
            "" if location.name.trim().is_empty() => DEFAULT_TITLE.to_string(),
            "" => location.name.clone(),
            t => t.to_string(),
        };

        let anchor = NewShift {
            title,
            location_id: location.id.clone(),
            start_time: normalize_time(&draft.start_time)?,
            end_time: normalize_time(&draft.end_time)?,
            notes: draft
                .notes
                .map(|n| n.trim().to_string())
                .filter(|n| !n.is_empty()),
            ..draft
        };

        let mut store = ShiftStore::load(pool)?;
        let mut created = Vec::new();
        for occurrence in expand(&anchor, repeat) {
            created.push(store.add(occurrence)?);
        }

        audit(
            &pool.conn,
            "add",
            &location.name,
            &format!(
                "{} shift(s) added from {}",
                created.len(),
                anchor.date.format("%Y-%m-%d")
            ),
        );

        Ok(created)
    }

    pub fn edit(pool: &DbPool, id: &str, patch: ShiftPatch) -> AppResult<Shift> {
        if let Some(amount) = patch.amount
            && (!amount.is_finite() || amount < 0.0)
        {
            return Err(AppError::InvalidAmount(amount.to_string()));
        }

        let location_id = match &patch.location_id {
            Some(l) => Some(LocationStore::load(pool)?.find(l)?.id.clone()),
            None => None,
        };

        let patch = ShiftPatch {
            location_id,
            start_time: patch.start_time.as_deref().map(normalize_time).transpose()?,
            end_time: patch.end_time.as_deref().map(normalize_time).transpose()?,
            ..patch
        };

        let mut store = ShiftStore::load(pool)?;
        let id = store.find(id)?.id.clone();
        store.update(&id, &patch)?;
        let updated = store
            .get_by_id(&id)
            .cloned()
            .ok_or_else(|| AppError::ShiftNotFound(id.clone()))?;

        audit(
            &pool.conn,
            "edit",
            &id,
            &format!("Shift '{}' on {} updated", updated.title, updated.date),
        );
        Ok(updated)
    }

    pub fn delete(pool: &DbPool, id: &str) -> AppResult<Shift> {
        let mut store = ShiftStore::load(pool)?;
        let shift = store.find(id)?.clone();
        store.remove(&shift.id)?;

        audit(
            &pool.conn,
            "del",
            &shift.id,
            &format!("Shift '{}' on {} deleted", shift.title, shift.date),
        );
        Ok(shift)
    }

    pub fn mark_paid(pool: &DbPool, id: &str) -> AppResult<Shift> {
        let mut store = ShiftStore::load(pool)?;
        let id = store.find(id)?.id.clone();
        store.mark_paid(&id)?;
        let shift = store
            .get_by_id(&id)
            .cloned()
            .ok_or_else(|| AppError::ShiftNotFound(id.clone()))?;

        audit(
            &pool.conn,
            "paid",
            &id,
            &format!("Shift '{}' on {} marked as paid", shift.title, shift.date),
        );
        Ok(shift)
    }

    pub fn toggle_paid(pool: &DbPool, id: &str) -> AppResult<Shift> {
        let mut store = ShiftStore::load(pool)?;
        let id = store.find(id)?.id.clone();
        let paid = store
            .toggle_paid(&id)?
            .ok_or_else(|| AppError::ShiftNotFound(id.clone()))?;
        let shift = store
            .get_by_id(&id)
            .cloned()
            .ok_or_else(|| AppError::ShiftNotFound(id.clone()))?;

        let state = if paid { "paid" } else { "pending" };
        audit(
            &pool.conn,
            "paid",
            &id,
            &format!("Shift '{}' on {} set to {}", shift.title, shift.date, state),
        );
        Ok(shift)
    }
}
