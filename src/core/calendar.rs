//! Which shifts the calendar shows for a viewed month.
//!
//! Policy:
//! - the reference day is the selected day, or today when nothing is selected;
//! - `day` holds the reference day's shifts when that day lies in the viewed month;
//! - in the current month, `upcoming` is every day after the reference day and
//!   `past` every day before it;
//! - a month before the current one shows only shifts before today, all as past;
//! - a month after the current one shows all its shifts as upcoming.
//!
//! Buckets never overlap and are ordered by day, then by start time.

use crate::models::shift::Shift;
use crate::store::ShiftStore;
use crate::utils::date::{in_month, month_index};
use crate::utils::time::time_key;
use chrono::{Datelike, Days, NaiveDate};

#[derive(Debug, Default, Clone, PartialEq)]
pub struct CalendarView {
    pub reference: Option<NaiveDate>,
    pub day: Vec<Shift>,
    pub upcoming: Vec<Shift>,
    pub past: Vec<Shift>,
}

/// Bucket the shifts of (`year`, `month`) around `selected` (or `today`).
pub fn partition(
    store: &ShiftStore<'_>,
    year: i32,
    month: u32,
    selected: Option<NaiveDate>,
    today: NaiveDate,
) -> CalendarView {
    let reference = selected.unwrap_or(today);
    let ref_in_month = in_month(reference, year, month);

    let viewed = month_index(year, month);
    let current = month_index(today.year(), today.month());

    let mut dated: Vec<(NaiveDate, Shift)> = store
        .get_by_month(month, year)
        .into_iter()
        .filter_map(|s| s.day().map(|d| (d, s)))
        .collect();
    dated.sort_by_key(|(d, s)| (*d, time_key(&s.start_time)));

    let mut view = CalendarView {
        reference: ref_in_month.then_some(reference),
        ..Default::default()
    };

    let next_day = reference.checked_add_days(Days::new(1));

    for (d, s) in dated {
        if ref_in_month && d == reference {
            view.day.push(s);
        } else if viewed < current {
            if d < today {
                view.past.push(s);
            }
        } else if viewed > current {
            view.upcoming.push(s);
        } else if next_day.is_some_and(|n| d >= n) {
            view.upcoming.push(s);
        } else if d < reference {
            view.past.push(s);
        }
    }

    view
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::shift::NewShift;
    use crate::store::{MemoryStorage, ShiftStore};

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    fn seed(store: &mut ShiftStore<'_>, date: NaiveDate, start: &str, title: &str) {
        store
            .add(NewShift {
                title: title.into(),
                location_id: "l".into(),
                date,
                start_time: start.into(),
                end_time: "19:00".into(),
                amount: 100.0,
                paid: false,
                notes: None,
            })
            .unwrap();
    }

    fn titles(v: &[Shift]) -> Vec<&str> {
        v.iter().map(|s| s.title.as_str()).collect()
    }

    #[test]
    fn current_month_split_around_today() {
        let storage = MemoryStorage::new();
        let mut store = ShiftStore::load(&storage).unwrap();
        seed(&mut store, d(2024, 3, 15), "19:00", "night");
        seed(&mut store, d(2024, 3, 15), "07:00", "morning");
        seed(&mut store, d(2024, 3, 20), "07:00", "later");
        seed(&mut store, d(2024, 3, 16), "07:00", "tomorrow");
        seed(&mut store, d(2024, 3, 1), "07:00", "early");
        seed(&mut store, d(2024, 4, 1), "07:00", "next month");

        let today = d(2024, 3, 15);
        let view = partition(&store, 2024, 3, None, today);

        assert_eq!(view.reference, Some(today));
        assert_eq!(titles(&view.day), vec!["morning", "night"]);
        assert_eq!(titles(&view.upcoming), vec!["tomorrow", "later"]);
        assert_eq!(titles(&view.past), vec!["early"]);
    }

    #[test]
    fn selected_day_moves_the_split() {
        let storage = MemoryStorage::new();
        let mut store = ShiftStore::load(&storage).unwrap();
        seed(&mut store, d(2024, 3, 10), "07:00", "a");
        seed(&mut store, d(2024, 3, 20), "07:00", "b");
        seed(&mut store, d(2024, 3, 25), "07:00", "c");

        let view = partition(&store, 2024, 3, Some(d(2024, 3, 20)), d(2024, 3, 15));
        assert_eq!(titles(&view.day), vec!["b"]);
        assert_eq!(titles(&view.past), vec!["a"]);
        assert_eq!(titles(&view.upcoming), vec!["c"]);
    }

    #[test]
    fn past_month_shows_only_past() {
        let storage = MemoryStorage::new();
        let mut store = ShiftStore::load(&storage).unwrap();
        seed(&mut store, d(2024, 1, 5), "07:00", "jan");
        seed(&mut store, d(2024, 1, 6), "07:00", "jan2");

        let view = partition(&store, 2024, 1, None, d(2024, 3, 15));
        assert_eq!(view.reference, None);
        assert!(view.day.is_empty());
        assert!(view.upcoming.is_empty());
        assert_eq!(titles(&view.past), vec!["jan", "jan2"]);
    }

    #[test]
    fn future_month_shows_everything_as_upcoming() {
        let storage = MemoryStorage::new();
        let mut store = ShiftStore::load(&storage).unwrap();
        seed(&mut store, d(2024, 5, 2), "19:00", "late");
        seed(&mut store, d(2024, 5, 2), "07:00", "early");
        seed(&mut store, d(2024, 5, 9), "07:00", "week");

        let view = partition(&store, 2024, 5, None, d(2024, 3, 15));
        assert!(view.past.is_empty());
        assert_eq!(titles(&view.upcoming), vec!["early", "late", "week"]);

        let picked = partition(&store, 2024, 5, Some(d(2024, 5, 9)), d(2024, 3, 15));
        assert_eq!(titles(&picked.day), vec!["week"]);
        assert_eq!(titles(&picked.upcoming), vec!["early", "late"]);
    }
}
