//! Financial summary: per-month shift count, hours, amounts.

use crate::models::shift::Shift;
use crate::store::ShiftStore;
use crate::utils::date::{month_index, shift_month};
use clap::ValueEnum;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum Span {
    #[default]
    Month,
    /// The given month and the two before it.
    Quarter,
    /// The whole calendar year of the given month.
    Year,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct MonthlySummary {
    pub year: i32,
    pub month: u32,
    pub total_shifts: usize,
    pub total_minutes: i64,
    pub total_amount: f64,
    pub paid_amount: f64,
    pub pending_amount: f64,
}

impl MonthlySummary {
    pub fn from_shifts(year: i32, month: u32, shifts: &[Shift]) -> Self {
        let total_amount: f64 = shifts.iter().map(|s| s.amount).sum();
        let paid_amount: f64 = shifts.iter().filter(|s| s.paid).map(|s| s.amount).sum();

        Self {
            year,
            month,
            total_shifts: shifts.len(),
            total_minutes: shifts.iter().map(Shift::minutes).sum(),
            total_amount,
            paid_amount,
            pending_amount: total_amount - paid_amount,
        }
    }

    pub fn hours(&self) -> f64 {
        self.total_minutes as f64 / 60.0
    }
}

/// Months covered by `span` ending at (or containing) the given month, oldest first.
pub fn span_months(year: i32, month: u32, span: Span) -> Vec<(i32, u32)> {
    match span {
        Span::Month => vec![(year, month)],
        Span::Quarter => (0..3)
            .rev()
            .map(|back| shift_month(year, month, -back))
            .collect(),
        Span::Year => (1..=12).map(|m| (year, m)).collect(),
    }
}

/// Every month from `from` to `to` inclusive.
pub fn months_between(from: (i32, u32), to: (i32, u32)) -> Vec<(i32, u32)> {
    let start = month_index(from.0, from.1);
    let end = month_index(to.0, to.1);
    (0..=(end - start).max(-1))
        .map(|i| shift_month(from.0, from.1, i))
        .collect()
}

pub fn summarize(store: &ShiftStore<'_>, months: &[(i32, u32)]) -> Vec<MonthlySummary> {
    months
        .iter()
        .map(|&(y, m)| MonthlySummary::from_shifts(y, m, &store.get_by_month(m, y)))
        .collect()
}

/// Sum of several monthly rows (year/month of the first row are kept).
pub fn grand_total(rows: &[MonthlySummary]) -> MonthlySummary {
    let mut total = rows
        .first()
        .map(|r| MonthlySummary {
            year: r.year,
            month: r.month,
            ..Default::default()
        })
        .unwrap_or_default();

    for r in rows {
        total.total_shifts += r.total_shifts;
        total.total_minutes += r.total_minutes;
        total.total_amount += r.total_amount;
        total.paid_amount += r.paid_amount;
        total.pending_amount += r.pending_amount;
    }
    total
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::shift::NewShift;
    use crate::store::MemoryStorage;
    use chrono::NaiveDate;

    fn add(
        store: &mut ShiftStore<'_>,
        y: i32,
        m: u32,
        start: &str,
        end: &str,
        amount: f64,
        paid: bool,
    ) {
        store
            .add(NewShift {
                title: "t".into(),
                location_id: "l".into(),
                date: NaiveDate::from_ymd_opt(y, m, 10).unwrap(),
                start_time: start.into(),
                end_time: end.into(),
                amount,
                paid,
                notes: None,
            })
            .unwrap();
    }

    #[test]
    fn monthly_rows_and_total() {
        let storage = MemoryStorage::new();
        let mut store = ShiftStore::load(&storage).unwrap();
        add(&mut store, 2024, 1, "07:00", "19:00", 1200.0, true);
        add(&mut store, 2024, 1, "19:00", "07:00", 1500.0, false);
        add(&mut store, 2024, 3, "07:00", "13:00", 600.0, false);

        let rows = summarize(&store, &span_months(2024, 3, Span::Quarter));
        assert_eq!(rows.len(), 3);
        assert_eq!((rows[0].year, rows[0].month), (2024, 1));
        assert_eq!(rows[0].total_shifts, 2);
        assert_eq!(rows[0].hours(), 24.0);
        assert_eq!(rows[0].pending_amount, 1500.0);
        assert_eq!(rows[1].total_shifts, 0);

        let total = grand_total(&rows);
        assert_eq!(total.total_shifts, 3);
        assert_eq!(total.total_minutes, 30 * 60);
        assert_eq!(total.total_amount, 3300.0);
        assert_eq!(total.paid_amount, 1200.0);
    }

    #[test]
    fn spans_cross_year_boundaries() {
        assert_eq!(
            span_months(2024, 2, Span::Quarter),
            vec![(2023, 12), (2024, 1), (2024, 2)]
        );
        assert_eq!(span_months(2024, 7, Span::Year).len(), 12);
        assert_eq!(
            months_between((2023, 11), (2024, 2)),
            vec![(2023, 11), (2023, 12), (2024, 1), (2024, 2)]
        );
        assert!(months_between((2024, 2), (2023, 11)).is_empty());
    }
}
