use super::shift_table;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::payments::{StatusFilter, month_list, month_totals, progress_bar};
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::store::{LocationStore, ShiftStore};
use crate::ui::messages::{header, info};
use crate::utils::colors::{GREEN, RESET, YELLOW};
use crate::utils::date::{current_month, month_label, parse_month};
use crate::utils::format_money;
use crate::utils::formatting::bold;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Payments { month, status } = cmd {
        let (year, mon) = match month.as_deref() {
            Some(m) => parse_month(m).ok_or_else(|| AppError::InvalidMonth(m.to_string()))?,
            None => current_month(),
        };

        let pool = DbPool::new(&cfg.database)?;
        let shifts = ShiftStore::load(&pool)?;
        let locations = LocationStore::load(&pool)?;

        let list = month_list(&shifts, year, mon, *status);
        let totals = month_totals(&shifts, year, mon);

        header(format!("💰 Payments, {}", month_label(year, mon)));

        if list.is_empty() {
            let what = match status {
                StatusFilter::All => "",
                StatusFilter::Paid => "paid ",
                StatusFilter::Pending => "pending ",
            };
            info(format!("No {what}shifts in this month."));
        } else {
            print!("{}", shift_table(&list, locations.items(), &cfg.currency));
        }

        println!();
        println!("  {}   {}", bold("Total  :"), format_money(totals.total, &cfg.currency));
        println!(
            "  {}   {GREEN}{}{RESET}",
            bold("Paid   :"),
            format_money(totals.paid, &cfg.currency)
        );
        println!(
            "  {}   {YELLOW}{}{RESET}",
            bold("Pending:"),
            format_money(totals.pending, &cfg.currency)
        );
        println!(
            "  {} {:.0}% paid",
            progress_bar(totals.percent_paid, 30),
            totals.percent_paid
        );
    }
    Ok(())
}
