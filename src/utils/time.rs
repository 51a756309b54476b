//! Time utilities: parsing HH:MM, sort keys, shift durations, formatting minutes.

use crate::errors::{AppError, AppResult};
use chrono::NaiveTime;

pub fn parse_time(t: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(t.trim(), "%H:%M").ok()
}

/// Validate a user-supplied `HH:MM` and return it normalized (zero-padded).
pub fn normalize_time(t: &str) -> AppResult<String> {
    parse_time(t)
        .map(|v| v.format("%H:%M").to_string())
        .ok_or_else(|| AppError::InvalidTime(t.to_string()))
}

/// `HH:MM` → `HHMM` as an integer, used to order shifts inside a day.
/// Unparsable values sort first.
pub fn time_key(t: &str) -> u32 {
    t.trim().replace(':', "").parse().unwrap_or(0)
}

/// Length of a shift in minutes. An end at or before the start wraps past midnight,
/// so 19:00–07:00 is 12 hours.
pub fn shift_minutes(start: &str, end: &str) -> i64 {
    match (parse_time(start), parse_time(end)) {
        (Some(s), Some(e)) => {
            let mins = (e - s).num_minutes();
            if mins <= 0 { mins + 24 * 60 } else { mins }
        }
        _ => 0,
    }
}

pub fn format_minutes(mins: i64) -> String {
    let sign = if mins < 0 { "-" } else { "" };
    let m = mins.abs();
    format!("{}{:02}h {:02}m", sign, m / 60, m % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn time_key_orders_by_clock() {
        assert!(time_key("07:00") < time_key("19:00"));
        assert_eq!(time_key("07:30"), 730);
        assert_eq!(time_key("junk"), 0);
    }

    #[test]
    fn overnight_shift_wraps() {
        assert_eq!(shift_minutes("07:00", "19:00"), 12 * 60);
        assert_eq!(shift_minutes("19:00", "07:00"), 12 * 60);
        assert_eq!(shift_minutes("07:00", "07:00"), 24 * 60);
        assert_eq!(shift_minutes("xx", "07:00"), 0);
    }

    #[test]
    fn normalize_pads_hours() {
        assert_eq!(normalize_time("7:05").unwrap(), "07:05");
        assert!(normalize_time("25:00").is_err());
    }
}
