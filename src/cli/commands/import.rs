use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::export::ImportLogic;
use crate::store::{LocationStore, ShiftStore};
use crate::ui::messages::{confirm, info, success};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Import { file, force } = cmd {
        // Validate before asking anything
        let doc = ImportLogic::read(file)?;

        let pool = DbPool::new(&cfg.database)?;
        let existing = (
            LocationStore::load(&pool)?.len(),
            ShiftStore::load(&pool)?.len(),
        );

        if !*force && (existing.0 > 0 || existing.1 > 0) {
            let prompt = format!(
                "Importing replaces the current {} location(s) and {} shift(s). Continue?",
                existing.0, existing.1
            );
            if !confirm(&prompt) {
                info("Operation cancelled.");
                return Ok(());
            }
        }

        let (locations, shifts) = ImportLogic::apply(&pool, doc)?;
        success(format!(
            "Imported {locations} location(s) and {shifts} shift(s) from {file}"
        ));
    }
    Ok(())
}
