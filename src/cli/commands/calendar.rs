use super::shift_table;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::calendar::partition;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::shift::Shift;
use crate::store::{LocationStore, ShiftStore};
use crate::ui::messages::{header, info};
use crate::utils::date::{current_month, month_label, parse_date, parse_month, today};
use chrono::Datelike;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Calendar { month, day } = cmd {
        let selected = day
            .as_deref()
            .map(|d| parse_date(d).ok_or_else(|| AppError::InvalidDate(d.to_string())))
            .transpose()?;

        // --day alone shows the month it falls in
        let (year, mon) = match (month.as_deref(), selected) {
            (Some(m), _) => parse_month(m).ok_or_else(|| AppError::InvalidMonth(m.to_string()))?,
            (None, Some(d)) => (d.year(), d.month()),
            (None, None) => current_month(),
        };

        let pool = DbPool::new(&cfg.database)?;
        let shifts = ShiftStore::load(&pool)?;
        let locations = LocationStore::load(&pool)?;

        let view = partition(&shifts, year, mon, selected, today());

        header(format!("📅 {}", month_label(year, mon)));

        if let Some(d) = view.reference {
            section(&format!("Shifts on {}", d.format("%a %d/%m/%Y")), &view.day, &locations, cfg);
        }
        section("Upcoming", &view.upcoming, &locations, cfg);
        section("Past", &view.past, &locations, cfg);
    }
    Ok(())
}

fn section(title: &str, shifts: &[Shift], locations: &LocationStore<'_>, cfg: &Config) {
    println!("\n{title} ({})", shifts.len());
    if shifts.is_empty() {
        info("No shifts.");
    } else {
        print!("{}", shift_table(shifts, locations.items(), &cfg.currency));
    }
}
