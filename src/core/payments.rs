//! Payments view: a month's shifts filtered by status, with paid/pending totals.

use crate::models::shift::Shift;
use crate::store::ShiftStore;
use clap::ValueEnum;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum StatusFilter {
    #[default]
    All,
    Paid,
    Pending,
}

impl StatusFilter {
    pub fn accepts(self, s: &Shift) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Paid => s.paid,
            StatusFilter::Pending => !s.paid,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MonthTotals {
    pub total: f64,
    pub paid: f64,
    pub pending: f64,
    /// 0–100; 0 when there is nothing to be paid.
    pub percent_paid: f64,
}

impl MonthTotals {
    pub fn compute(shifts: &[Shift]) -> Self {
        let total: f64 = shifts.iter().map(|s| s.amount).sum();
        let paid: f64 = shifts.iter().filter(|s| s.paid).map(|s| s.amount).sum();
        let percent_paid = if total > 0.0 {
            paid / total * 100.0
        } else {
            0.0
        };

        Self {
            total,
            paid,
            pending: total - paid,
            percent_paid,
        }
    }
}

/// Shifts of the month matching `status`, newest first.
pub fn month_list(
    store: &ShiftStore<'_>,
    year: i32,
    month: u32,
    status: StatusFilter,
) -> Vec<Shift> {
    let mut list: Vec<Shift> = store
        .get_by_month(month, year)
        .into_iter()
        .filter(|s| status.accepts(s))
        .collect();
    list.sort_by_key(|s| std::cmp::Reverse(s.sort_key()));
    list
}

/// Totals over every shift of the month, regardless of any status filter.
pub fn month_totals(store: &ShiftStore<'_>, year: i32, month: u32) -> MonthTotals {
    MonthTotals::compute(&store.get_by_month(month, year))
}

/// A text progress bar for the paid share.
pub fn progress_bar(percent: f64, width: usize) -> String {
    let filled = ((percent.clamp(0.0, 100.0) / 100.0) * width as f64).round() as usize;
    format!("[{}{}]", "#".repeat(filled), "-".repeat(width - filled))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::shift::NewShift;
    use crate::store::MemoryStorage;
    use chrono::NaiveDate;

    fn add(store: &mut ShiftStore<'_>, day: u32, amount: f64, paid: bool) -> Shift {
        store
            .add(NewShift {
                title: format!("d{day}"),
                location_id: "l".into(),
                date: NaiveDate::from_ymd_opt(2024, 6, day).unwrap(),
                start_time: "07:00".into(),
                end_time: "19:00".into(),
                amount,
                paid,
                notes: None,
            })
            .unwrap()
    }

    #[test]
    fn totals_and_filters() {
        let storage = MemoryStorage::new();
        let mut store = ShiftStore::load(&storage).unwrap();
        add(&mut store, 1, 1200.0, true);
        add(&mut store, 10, 1500.0, false);
        add(&mut store, 5, 300.0, false);

        let t = month_totals(&store, 2024, 6);
        assert_eq!(t.total, 3000.0);
        assert_eq!(t.paid, 1200.0);
        assert_eq!(t.pending, 1800.0);
        assert!((t.percent_paid - 40.0).abs() < 1e-9);

        let pending = month_list(&store, 2024, 6, StatusFilter::Pending);
        let titles: Vec<_> = pending.iter().map(|s| s.title.as_str()).collect();
        assert_eq!(titles, vec!["d10", "d5"]);
        assert_eq!(month_list(&store, 2024, 6, StatusFilter::Paid).len(), 1);
        assert_eq!(month_list(&store, 2024, 7, StatusFilter::All).len(), 0);
    }

    #[test]
    fn toggling_paid_lowers_pending_by_amount() {
        let storage = MemoryStorage::new();
        let mut store = ShiftStore::load(&storage).unwrap();
        add(&mut store, 1, 1000.0, false);
        let s = add(&mut store, 2, 750.0, false);

        let before = month_totals(&store, 2024, 6).pending;
        store.toggle_paid(&s.id).unwrap();
        let after = month_totals(&store, 2024, 6).pending;
        assert_eq!(before - after, 750.0);
    }

    #[test]
    fn empty_month_has_zero_percent() {
        assert_eq!(MonthTotals::compute(&[]), MonthTotals::default());
        assert_eq!(progress_bar(50.0, 10), "[#####-----]");
        assert_eq!(progress_bar(150.0, 4), "[####]");
    }
}
