use crate::db::log::audit;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::location::{Location, LocationPatch, NewLocation};
use crate::store::{LocationStore, ShiftStore};
use crate::utils::colors::parse_hex;

pub struct LocationLogic;

impl LocationLogic {
    /// Validate a `#RRGGBB` color and return it upper-cased.
    pub fn validate_color(color: &str) -> AppResult<String> {
        let c = color.trim();
        parse_hex(c)
            .map(|_| c.to_uppercase())
            .ok_or_else(|| AppError::InvalidColor(color.to_string()))
    }

    fn validate_name(name: &str) -> AppResult<String> {
        let n = name.trim();
        if n.is_empty() {
            return Err(AppError::MissingField("name"));
        }
        Ok(n.to_string())
    }

    pub fn add(pool: &DbPool, draft: NewLocation) -> AppResult<Location> {
        let draft = NewLocation {
            name: Self::validate_name(&draft.name)?,
            address: draft.address.trim().to_string(),
            color: Self::validate_color(&draft.color)?,
        };

        let mut store = LocationStore::load(pool)?;
        let loc = store.add(draft)?;

        audit(&pool.conn, "add", &loc.id, &format!("Location '{}' added", loc.name));
        Ok(loc)
    }

    pub fn edit(pool: &DbPool, id: &str, patch: LocationPatch) -> AppResult<Location> {
        let patch = LocationPatch {
            name: patch.name.as_deref().map(Self::validate_name).transpose()?,
            address: patch.address.map(|a| a.trim().to_string()),
            color: patch.color.as_deref().map(Self::validate_color).transpose()?,
        };

        let mut store = LocationStore::load(pool)?;
        let id = store.find(id)?.id.clone();
        store.update(&id, &patch)?;

        let updated = store
            .get_by_id(&id)
            .cloned()
            .ok_or_else(|| AppError::LocationNotFound(id.clone()))?;

        audit(&pool.conn, "edit", &id, &format!("Location '{}' updated", updated.name));
        Ok(updated)
    }

    /// Delete a location. Its shifts are kept; the returned count says how
    /// many now point to a missing location.
    pub fn delete(pool: &DbPool, id: &str) -> AppResult<(Location, usize)> {
        let mut store = LocationStore::load(pool)?;
        let loc = store.find(id)?.clone();
        store.remove(&loc.id)?;

        let orphans = ShiftStore::load(pool)?
            .items()
            .iter()
            .filter(|s| s.location_id == loc.id)
            .count();

        audit(&pool.conn, "del", &loc.id, &format!("Location '{}' deleted", loc.name));
        Ok((loc, orphans))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::recurrence::Repeat;
    use crate::core::shift::ShiftLogic;
    use crate::models::location::location_label;
    use crate::models::shift::NewShift;
    use chrono::NaiveDate;

    #[test]
    fn add_then_delete_leaves_orphan_shift() {
        let pool = DbPool::in_memory().unwrap();
        let loc = LocationLogic::add(
            &pool,
            NewLocation {
                name: "Hospital A".into(),
                address: String::new(),
                color: "#2196f3".into(),
            },
        )
        .unwrap();
        assert_eq!(loc.color, "#2196F3");
        assert_eq!(LocationStore::load(&pool).unwrap().len(), 1);

        ShiftLogic::add(
            &pool,
            NewShift {
                title: String::new(),
                location_id: loc.id.clone(),
                date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
                start_time: "07:00".into(),
                end_time: "19:00".into(),
                amount: 1000.0,
                paid: false,
                notes: None,
            },
            &Repeat::None,
        )
        .unwrap();

        let (_, orphans) = LocationLogic::delete(&pool, &loc.id).unwrap();
        assert_eq!(orphans, 1);

        let locations = LocationStore::load(&pool).unwrap();
        assert!(locations.is_empty());
        let shifts = ShiftStore::load(&pool).unwrap();
        let orphan = &shifts.items()[0];
        assert_eq!(location_label(locations.items(), &orphan.location_id), "location not found");
    }

    #[test]
    fn rejects_bad_input() {
        let pool = DbPool::in_memory().unwrap();
        let bad_color = LocationLogic::add(
            &pool,
            NewLocation {
                name: "X".into(),
                address: String::new(),
                color: "blue".into(),
            },
        );
        assert!(matches!(bad_color, Err(AppError::InvalidColor(_))));

        let no_name = LocationLogic::add(
            &pool,
            NewLocation {
                name: "  ".into(),
                address: String::new(),
                color: "#000000".into(),
            },
        );
        assert!(matches!(no_name, Err(AppError::MissingField("name"))));
        assert!(LocationStore::load(&pool).unwrap().is_empty());
    }
}
