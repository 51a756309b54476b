pub mod calendar;
pub mod clear;
pub mod config;
pub mod export;
pub mod import;
pub mod init;
pub mod location;
pub mod log;
pub mod payments;
pub mod shift;
pub mod summary;

use crate::models::location::{Location, location_label};
use crate::models::shift::Shift;
use crate::utils::colors::{RESET, color_for_paid};
use crate::utils::format_money;
use crate::utils::formatting::{fit, paid_label, short_id};
use crate::utils::table::{Column, Table};

/// Shared shift listing used by the calendar, payments and shift views.
/// The status column comes last so its colour codes do not break alignment.
pub(crate) fn shift_table(shifts: &[Shift], locations: &[Location], currency: &str) -> String {
    let mut table = Table::new(vec![
        Column::new("ID", 8),
        Column::new("DATE", 10),
        Column::new("TIME", 11),
        Column::new("LOCATION", 20),
        Column::new("TITLE", 20),
        Column::new("AMOUNT", 14),
        Column::new("STATUS", 7),
    ]);

    for s in shifts {
        table.add_row(vec![
            short_id(&s.id).to_string(),
            s.day()
                .map(|d| d.format("%Y-%m-%d").to_string())
                .unwrap_or_else(|| fit(&s.date, 10)),
            format!("{}-{}", s.start_time, s.end_time),
            fit(location_label(locations, &s.location_id), 20),
            fit(&s.title, 20),
            format_money(s.amount, currency),
            format!("{}{}{}", color_for_paid(s.paid), paid_label(s.paid), RESET),
        ]);
    }

    table.render()
}
