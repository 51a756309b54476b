use crate::cli::parser::LocationAction;
use crate::config::Config;
use crate::core::location::LocationLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::models::location::{LocationPatch, NewLocation};
use crate::store::{LocationStore, ShiftStore};
use crate::ui::messages::{confirm, info, success, warning};
use crate::utils::colors::swatch;
use crate::utils::formatting::{fit, short_id};
use crate::utils::table::{Column, Table};

pub fn handle(action: &LocationAction, cfg: &Config) -> AppResult<()> {
    let pool = DbPool::new(&cfg.database)?;

    match action {
        LocationAction::Add {
            name,
            address,
            color,
        } => {
            let loc = LocationLogic::add(
                &pool,
                NewLocation {
                    name: name.clone(),
                    address: address.clone(),
                    color: color.clone().unwrap_or_else(|| cfg.default_color.clone()),
                },
            )?;
            success(format!("Location '{}' added [{}]", loc.name, short_id(&loc.id)));
        }

        LocationAction::List => list(&pool)?,

        LocationAction::Edit {
            id,
            name,
            address,
            color,
        } => {
            let patch = LocationPatch {
                name: name.clone(),
                address: address.clone(),
                color: color.clone(),
            };
            if patch.is_empty() {
                warning("Nothing to change: pass --name, --address or --color.");
                return Ok(());
            }

            let loc = LocationLogic::edit(&pool, id, patch)?;
            success(format!("Location '{}' updated [{}]", loc.name, short_id(&loc.id)));
        }

        LocationAction::Del { id, force } => {
            let loc = LocationStore::load(&pool)?.find(id)?.clone();

            let prompt = format!("Delete location '{}'? This action is irreversible.", loc.name);
            if !*force && !confirm(&prompt) {
                info("Operation cancelled.");
                return Ok(());
            }

            let (loc, orphans) = LocationLogic::delete(&pool, &loc.id)?;
            success(format!("Location '{}' has been deleted.", loc.name));
            if orphans > 0 {
                warning(format!(
                    "{orphans} shift(s) still reference it and will show 'location not found'."
                ));
            }
        }
    }

    Ok(())
}

fn list(pool: &DbPool) -> AppResult<()> {
    let locations = LocationStore::load(pool)?;
    if locations.is_empty() {
        info("No locations yet. Add one with `plantoes location add <NAME>`.");
        return Ok(());
    }

    let shifts = ShiftStore::load(pool)?;

    let mut table = Table::new(vec![
        Column::new("ID", 8),
        Column::new("NAME", 24),
        Column::new("SHIFTS", 6),
        Column::new("ADDRESS", 30),
        Column::new("COLOR", 9),
    ]);

    for loc in locations.items() {
        let count = shifts
            .items()
            .iter()
            .filter(|s| s.location_id == loc.id)
            .count();
        table.add_row(vec![
            short_id(&loc.id).to_string(),
            fit(&loc.name, 24),
            count.to_string(),
            fit(&loc.address, 30),
            format!("{} {}", swatch(&loc.color), loc.color),
        ]);
    }

    print!("{}", table.render());
    Ok(())
}
