use crate::db::log::audit;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::models::Record;
use crate::models::location::Location;
use crate::models::shift::Shift;
use crate::store::{LocationStore, ShiftStore, Storage};

pub struct ClearLogic;

impl ClearLogic {
    /// Remove both stores. Later loads see empty lists.
    /// Returns how many locations and shifts were dropped.
    pub fn apply(pool: &DbPool) -> AppResult<(usize, usize)> {
        let counts = (
            LocationStore::load(pool)?.len(),
            ShiftStore::load(pool)?.len(),
        );

        pool.remove_item(Location::STORAGE_KEY)?;
        pool.remove_item(Shift::STORAGE_KEY)?;

        audit(
            &pool.conn,
            "clear",
            "all",
            &format!("{} location(s) and {} shift(s) removed", counts.0, counts.1),
        );
        Ok(counts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::location::NewLocation;

    #[test]
    fn clear_empties_both_stores() {
        let pool = DbPool::in_memory().unwrap();
        LocationStore::load(&pool)
            .unwrap()
            .add(NewLocation {
                name: "UPA".into(),
                address: String::new(),
                color: "#4CAF50".into(),
            })
            .unwrap();

        assert_eq!(ClearLogic::apply(&pool).unwrap(), (1, 0));
        assert!(LocationStore::load(&pool).unwrap().is_empty());
        assert!(ShiftStore::load(&pool).unwrap().is_empty());
        assert_eq!(pool.get_item(Location::STORAGE_KEY).unwrap(), None);
    }
}
