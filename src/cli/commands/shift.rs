use super::shift_table;
use crate::cli::parser::ShiftAction;
use crate::config::Config;
use crate::core::recurrence::{Repeat, RepeatKind};
use crate::core::shift::{ShiftLogic, parse_amount};
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::location::location_label;
use crate::models::shift::{NewShift, Shift, ShiftPatch};
use crate::store::{LocationStore, ShiftStore};
use crate::ui::messages::{confirm, info, success, warning};
use crate::utils::colors::{RESET, color_for_paid, colorize_optional};
use crate::utils::date::parse_date;
use crate::utils::format_money;
use crate::utils::formatting::{paid_label, short_id};
use crate::utils::time::format_minutes;
use chrono::NaiveDate;

fn date_arg(s: &str) -> AppResult<NaiveDate> {
    parse_date(s).ok_or_else(|| AppError::InvalidDate(s.to_string()))
}

pub fn handle(action: &ShiftAction, cfg: &Config) -> AppResult<()> {
    let pool = DbPool::new(&cfg.database)?;

    match action {
        ShiftAction::Add {
            location,
            date,
            start,
            end,
            amount,
            title,
            notes,
            paid,
            repeat,
            weekdays,
        } => {
            if weekdays.is_some() && *repeat != RepeatKind::Weekdays {
                warning("--weekdays is only used with --repeat weekdays; ignored.");
            }

            let draft = NewShift {
                title: title.clone().unwrap_or_default(),
                location_id: location.clone(),
                date: date_arg(date)?,
                start_time: start.clone().unwrap_or_else(|| cfg.default_start.clone()),
                end_time: end.clone().unwrap_or_else(|| cfg.default_end.clone()),
                amount: parse_amount(amount)?,
                paid: *paid,
                notes: notes.clone(),
            };
            let rule = Repeat::from_cli(*repeat, weekdays.as_deref())?;

            let created = ShiftLogic::add(&pool, draft, &rule)?;
            let locations = LocationStore::load(&pool)?;

            success(format!("{} shift(s) added.", created.len()));
            print!("{}", shift_table(&created, locations.items(), &cfg.currency));
        }

        ShiftAction::Edit {
            id,
            location,
            date,
            start,
            end,
            amount,
            title,
            notes,
            paid,
        } => {
            let patch = ShiftPatch {
                title: title.clone(),
                location_id: location.clone(),
                date: date.as_deref().map(date_arg).transpose()?,
                start_time: start.clone(),
                end_time: end.clone(),
                amount: amount.as_deref().map(parse_amount).transpose()?,
                paid: *paid,
                notes: notes.as_ref().map(|n| {
                    let n = n.trim();
                    (!n.is_empty()).then(|| n.to_string())
                }),
            };
            if patch.is_empty() {
                warning("Nothing to change: pass at least one field to update.");
                return Ok(());
            }

            let shift = ShiftLogic::edit(&pool, id, patch)?;
            success(format!("Shift [{}] updated.", short_id(&shift.id)));
            show(&pool, &shift, cfg)?;
        }

        ShiftAction::Del { id, force } => {
            let shift = ShiftStore::load(&pool)?.find(id)?.clone();

            let prompt = format!(
                "Delete shift '{}' on {}? This action is irreversible.",
                shift.title, shift.date
            );
            if !*force && !confirm(&prompt) {
                info("Operation cancelled.");
                return Ok(());
            }

            let shift = ShiftLogic::delete(&pool, &shift.id)?;
            success(format!("Shift '{}' on {} has been deleted.", shift.title, shift.date));
        }

        ShiftAction::Paid { id } => {
            let shift = ShiftLogic::mark_paid(&pool, id)?;
            success(format!(
                "Shift '{}' on {} marked as paid ({}).",
                shift.title,
                shift.date,
                format_money(shift.amount, &cfg.currency)
            ));
        }

        ShiftAction::Toggle { id } => {
            let shift = ShiftLogic::toggle_paid(&pool, id)?;
            success(format!(
                "Shift '{}' on {} is now {}.",
                shift.title,
                shift.date,
                paid_label(shift.paid).to_lowercase()
            ));
        }

        ShiftAction::Show { id } => {
            let shift = ShiftStore::load(&pool)?.find(id)?.clone();
            show(&pool, &shift, cfg)?;
        }
    }

    Ok(())
}

/// Detail card for one shift.
fn show(pool: &DbPool, s: &Shift, cfg: &Config) -> AppResult<()> {
    let locations = LocationStore::load(pool)?;
    let notes = s.notes.as_deref().unwrap_or("-");

    println!();
    println!("  Id       : {}", s.id);
    println!("  Title    : {}", s.title);
    println!("  Location : {}", location_label(locations.items(), &s.location_id));
    println!("  Date     : {}", s.date);
    println!(
        "  Time     : {}-{} ({})",
        s.start_time,
        s.end_time,
        format_minutes(s.minutes())
    );
    println!("  Amount   : {}", format_money(s.amount, &cfg.currency));
    println!(
        "  Status   : {}{}{}",
        color_for_paid(s.paid),
        paid_label(s.paid),
        RESET
    );
    println!("  Notes    : {}", colorize_optional(notes));
    Ok(())
}
