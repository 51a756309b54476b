//! Bulk creation of repeated shifts from one anchor.
//!
//! Every generated shift is an independent record: only the date moves, all
//! other fields (amount and paid status included) are copied from the anchor.

use crate::errors::{AppError, AppResult};
use crate::models::shift::NewShift;
use crate::utils::date::add_months;
use chrono::{Datelike, Days, NaiveDate, Weekday};
use clap::ValueEnum;

const DAILY_DAYS: u64 = 7;
const WEEKDAY_WINDOW_DAYS: u64 = 28;
const WEEKLY_COUNT: u64 = 4;
const BIWEEKLY_COUNT: u64 = 2;
const BIWEEKLY_STEP_DAYS: u64 = 15;
const MONTHLY_COUNT: u32 = 3;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum RepeatKind {
    #[default]
    None,
    Daily,
    Weekdays,
    Weekly,
    Biweekly,
    Monthly,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Repeat {
    None,
    /// Every day for the next 7 days.
    Daily,
    /// The selected weekdays over the next 4 weeks.
    Weekdays(Vec<Weekday>),
    /// 4 more occurrences, 7 days apart.
    Weekly,
    /// 2 more occurrences, 15 days apart.
    Biweekly,
    /// 3 more occurrences, one calendar month apart.
    Monthly,
}

impl Repeat {
    pub fn from_cli(kind: RepeatKind, weekdays: Option<&str>) -> AppResult<Self> {
        Ok(match kind {
            RepeatKind::None => Repeat::None,
            RepeatKind::Daily => Repeat::Daily,
            RepeatKind::Weekly => Repeat::Weekly,
            RepeatKind::Biweekly => Repeat::Biweekly,
            RepeatKind::Monthly => Repeat::Monthly,
            RepeatKind::Weekdays => {
                let list = weekdays.ok_or(AppError::MissingField("weekdays"))?;
                Repeat::Weekdays(parse_weekdays(list)?)
            }
        })
    }

    /// All dates to create, anchor first. For [`Repeat::Weekdays`] the anchor
    /// is included only when its own weekday is selected.
    pub fn occurrences(&self, anchor: NaiveDate) -> Vec<NaiveDate> {
        let plus = |n: u64| anchor.checked_add_days(Days::new(n));

        match self {
            Repeat::None => vec![anchor],
            Repeat::Daily => (0..=DAILY_DAYS).filter_map(plus).collect(),
            Repeat::Weekdays(days) => (0..=WEEKDAY_WINDOW_DAYS)
                .filter_map(plus)
                .filter(|d| days.contains(&d.weekday()))
                .collect(),
            Repeat::Weekly => (0..=WEEKLY_COUNT).filter_map(|i| plus(7 * i)).collect(),
            Repeat::Biweekly => (0..=BIWEEKLY_COUNT)
                .filter_map(|i| plus(BIWEEKLY_STEP_DAYS * i))
                .collect(),
            Repeat::Monthly => (0..=MONTHLY_COUNT)
                .filter_map(|i| add_months(anchor, i))
                .collect(),
        }
    }
}

/// Parse `mon,wed,fri` (English or Portuguese abbreviations, any case).
pub fn parse_weekdays(s: &str) -> AppResult<Vec<Weekday>> {
    let mut out = Vec::new();

    for raw in s.split(',').map(str::trim).filter(|p| !p.is_empty()) {
        let day = match raw.to_lowercase().as_str() {
            "dom" | "domingo" => Weekday::Sun,
            "seg" | "segunda" => Weekday::Mon,
            "ter" | "terca" | "terça" => Weekday::Tue,
            "qua" | "quarta" => Weekday::Wed,
            "qui" | "quinta" => Weekday::Thu,
            "sex" | "sexta" => Weekday::Fri,
            "sab" | "sáb" | "sabado" | "sábado" => Weekday::Sat,
            other => other
                .parse::<Weekday>()
                .map_err(|_| AppError::InvalidWeekday(raw.to_string()))?,
        };
        if !out.contains(&day) {
            out.push(day);
        }
    }

    if out.is_empty() {
        return Err(AppError::MissingField("weekdays"));
    }
    Ok(out)
}

/// One draft per occurrence, each a copy of `anchor` with its own date.
pub fn expand(anchor: &NewShift, repeat: &Repeat) -> Vec<NewShift> {
    repeat
        .occurrences(anchor.date)
        .into_iter()
        .map(|date| NewShift {
            date,
            ..anchor.clone()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    fn anchor(date: NaiveDate) -> NewShift {
        NewShift {
            title: "Hospital A".into(),
            location_id: "loc-a".into(),
            date,
            start_time: "07:00".into(),
            end_time: "19:00".into(),
            amount: 1200.0,
            paid: true,
            notes: Some("UTI".into()),
        }
    }

    #[test]
    fn weekly_from_new_year() {
        let drafts = expand(&anchor(d(2024, 1, 1)), &Repeat::Weekly);
        let dates: Vec<_> = drafts.iter().map(|s| s.date).collect();
        assert_eq!(
            dates,
            vec![
                d(2024, 1, 1),
                d(2024, 1, 8),
                d(2024, 1, 15),
                d(2024, 1, 22),
                d(2024, 1, 29)
            ]
        );
        assert!(drafts.iter().all(|s| s.amount == 1200.0
            && s.location_id == "loc-a"
            && s.title == "Hospital A"
            && s.paid
            && s.notes.as_deref() == Some("UTI")));
    }

    #[test]
    fn none_daily_biweekly() {
        assert_eq!(Repeat::None.occurrences(d(2024, 1, 1)), vec![d(2024, 1, 1)]);

        let daily = Repeat::Daily.occurrences(d(2024, 1, 30));
        assert_eq!(daily.len(), 8);
        assert_eq!(daily.last(), Some(&d(2024, 2, 6)));

        assert_eq!(
            Repeat::Biweekly.occurrences(d(2024, 1, 1)),
            vec![d(2024, 1, 1), d(2024, 1, 16), d(2024, 1, 31)]
        );
    }

    #[test]
    fn monthly_clamps_short_months() {
        assert_eq!(
            Repeat::Monthly.occurrences(d(2024, 1, 31)),
            vec![d(2024, 1, 31), d(2024, 2, 29), d(2024, 3, 31), d(2024, 4, 30)]
        );
    }

    #[test]
    fn weekdays_skip_unselected_anchor() {
        // 2024-01-01 is a Monday
        let r = Repeat::Weekdays(vec![Weekday::Wed, Weekday::Fri]);
        let dates = r.occurrences(d(2024, 1, 1));
        assert_eq!(dates.first(), Some(&d(2024, 1, 3)));
        assert_eq!(dates.len(), 8);
        assert!(dates.iter().all(|x| matches!(x.weekday(), Weekday::Wed | Weekday::Fri)));

        let with_anchor = Repeat::Weekdays(vec![Weekday::Mon]).occurrences(d(2024, 1, 1));
        assert_eq!(
            with_anchor,
            vec![
                d(2024, 1, 1),
                d(2024, 1, 8),
                d(2024, 1, 15),
                d(2024, 1, 22),
                d(2024, 1, 29)
            ]
        );
    }

    #[test]
    fn weekday_parsing() {
        assert_eq!(
            parse_weekdays("mon, Wed,sex,mon").unwrap(),
            vec![Weekday::Mon, Weekday::Wed, Weekday::Fri]
        );
        assert!(matches!(
            parse_weekdays("funday"),
            Err(AppError::InvalidWeekday(_))
        ));
        assert!(matches!(
            Repeat::from_cli(RepeatKind::Weekdays, None),
            Err(AppError::MissingField("weekdays"))
        ));
    }
}
