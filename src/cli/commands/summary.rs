use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::summary::{MonthlySummary, grand_total, months_between, span_months, summarize};
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::export::range::parse_range;
use crate::store::ShiftStore;
use crate::ui::messages::header;
use crate::utils::date::current_month;
use crate::utils::format_money;
use crate::utils::table::{Column, Table};
use crate::utils::time::format_minutes;
use chrono::Datelike;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Summary { period, span } = cmd {
        let months = match period.as_deref() {
            None => {
                let (y, m) = current_month();
                span_months(y, m, *span)
            }
            Some(p) => {
                let (from, to) = parse_range(p)?;
                let first = (from.year(), from.month());
                let last = (to.year(), to.month());
                // a single month honours --span
                if first == last {
                    span_months(first.0, first.1, *span)
                } else {
                    months_between(first, last)
                }
            }
        };

        let pool = DbPool::new(&cfg.database)?;
        let shifts = ShiftStore::load(&pool)?;
        let rows = summarize(&shifts, &months);

        header("📊 Summary");

        let mut table = Table::new(vec![
            Column::new("MONTH", 7),
            Column::new("SHIFTS", 6),
            Column::new("HOURS", 10),
            Column::new("TOTAL", 16),
            Column::new("PAID", 16),
            Column::new("PENDING", 16),
        ]);

        for r in &rows {
            table.add_row(row(&format!("{}-{:02}", r.year, r.month), r, &cfg.currency));
        }
        if rows.len() > 1 {
            table.add_row(row("TOTAL", &grand_total(&rows), &cfg.currency));
        }

        print!("{}", table.render());
    }
    Ok(())
}

fn row(label: &str, r: &MonthlySummary, currency: &str) -> Vec<String> {
    vec![
        label.to_string(),
        r.total_shifts.to_string(),
        format_minutes(r.total_minutes),
        format_money(r.total_amount, currency),
        format_money(r.paid_amount, currency),
        format_money(r.pending_amount, currency),
    ]
}
